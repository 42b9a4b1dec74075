use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::{info, warn};

use crate::cost::{fuel_rate_for_mode, CostAssumptions, CostInputs, WorkingMode};

/// 기본 설정 파일 경로.
pub const CONFIG_FILE: &str = "config.toml";

/// 애플리케이션 설정을 표현한다.
///
/// 파일에 없는 키는 기본값으로 채운다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 언어 코드 (auto/ko/en)
    pub language: String,
    /// 대상 장비 작업 모드 (1~8)
    pub subject_mode: u8,
    /// 경쟁 장비 작업 모드 (1~8)
    pub competitor_mode: u8,
    /// 입력 기본값
    pub inputs: CostInputs,
    /// 고정비 가정
    pub assumptions: CostAssumptions,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: "auto".into(),
            subject_mode: 5,
            competitor_mode: WorkingMode::MAX,
            inputs: CostInputs::default(),
            assumptions: CostAssumptions::default(),
        }
    }
}

impl Config {
    pub fn subject_fuel_rate(&self) -> f64 {
        fuel_rate_for_mode(self.subject_mode)
    }

    pub fn competitor_fuel_rate(&self) -> f64 {
        fuel_rate_for_mode(self.competitor_mode)
    }

    /// 설정을 지정한 경로에 저장한다.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        info!(path = %path.display(), "config saved");
        Ok(())
    }
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 파일 입출력 오류
    #[error("파일 입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    /// TOML 역직렬화 오류
    #[error("설정 파싱 오류: {0}")]
    Parse(#[from] toml::de::Error),
    /// TOML 직렬화 오류
    #[error("설정 직렬화 오류: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// 지정한 경로의 설정을 로드하거나 없으면 기본 설정을 만들어 저장한다.
pub fn load_or_default_at(path: &Path) -> Result<Config, ConfigError> {
    if path.exists() {
        let content = fs::read_to_string(path)?;
        let cfg: Config = toml::from_str(&content)?;
        if WorkingMode::new(cfg.subject_mode).is_none()
            || WorkingMode::new(cfg.competitor_mode).is_none()
        {
            warn!(
                subject = cfg.subject_mode,
                competitor = cfg.competitor_mode,
                "working mode out of range, mode 1 fuel rate will be used"
            );
        }
        Ok(cfg)
    } else {
        info!(path = %path.display(), "config not found, writing defaults");
        let cfg = Config::default();
        cfg.save_to(path)?;
        Ok(cfg)
    }
}
