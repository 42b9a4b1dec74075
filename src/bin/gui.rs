#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

//! eframe/egui 기반 데스크톱 GUI 진입점.

use clap::Parser;
use eframe::{egui, App, Frame};
use std::{fs, path::Path, path::PathBuf};
use tracing::warn;

use excavator_cost_toolbox::{
    app, config,
    config::Config,
    cost::{
        compare_machines_with, compute_cost_breakdown_with, cost_flow, fuel_rate_for_mode,
        validate, CostBreakdown, CostError, CostInputs, FlowNode, WorkingMode,
    },
    i18n::{keys, Translator},
    init_tracing, report,
};

#[derive(Debug, Parser)]
#[command(name = "excavator_cost_toolbox", version)]
struct GuiArgs {
    /// 언어 (auto/ko/en)
    #[arg(long, short = 'L', default_value = "auto")]
    lang: String,
    /// 설정 파일 경로
    #[arg(long, default_value = config::CONFIG_FILE)]
    config: PathBuf,
}

fn main() -> Result<(), eframe::Error> {
    init_tracing();
    let args = GuiArgs::parse();

    let app_cfg = config::load_or_default_at(&args.config).unwrap_or_else(|e| {
        warn!(error = %e, "config load failed, using defaults");
        Config::default()
    });
    let tr = app::translator_for(&args.lang, &app_cfg);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([1000.0, 720.0]),
        ..Default::default()
    };
    let title = tr.t(keys::APP_TITLE).to_string();
    eframe::run_native(
        &title,
        options,
        Box::new(move |cc| {
            if let Err(e) = setup_fonts(&cc.egui_ctx) {
                warn!("font error: {e}");
            }
            Box::new(GuiApp::new(app_cfg, args.config, tr))
        }),
    )
}

fn apply_font_bytes(ctx: &egui::Context, bytes: Vec<u8>, name: &str) {
    let mut fonts = egui::FontDefinitions::default();
    let font_name = name.to_string();
    fonts
        .font_data
        .insert(font_name.clone(), egui::FontData::from_owned(bytes));
    fonts
        .families
        .entry(egui::FontFamily::Proportional)
        .or_default()
        .insert(0, font_name.clone());
    fonts
        .families
        .entry(egui::FontFamily::Monospace)
        .or_default()
        .insert(0, font_name);
    ctx.set_fonts(fonts);
}

/// 한글을 표시하기 위해 프로젝트 폰트, 시스템 폰트 순으로 적용한다.
fn setup_fonts(ctx: &egui::Context) -> Result<(), String> {
    let mut candidates: Vec<PathBuf> = vec![PathBuf::from("assets/fonts/malgun.ttf")];
    if let Some(windir) = std::env::var_os("WINDIR") {
        let fonts = Path::new(&windir).join("Fonts");
        candidates.extend(["malgun.ttf", "gulim.ttc"].iter().map(|f| fonts.join(f)));
    }
    candidates.extend(
        [
            "/System/Library/Fonts/AppleSDGothicNeo.ttc",
            "/usr/share/fonts/truetype/nanum/NanumGothic.ttf",
            "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc",
        ]
        .iter()
        .map(PathBuf::from),
    );

    let path = candidates
        .iter()
        .find(|p| p.exists())
        .ok_or_else(|| "Korean font not found, default font kept".to_string())?;
    let bytes = fs::read(path)
        .map_err(|e| format!("Failed to read font file ({}): {e}", path.display()))?;
    apply_font_bytes(ctx, bytes, "korean_font");
    Ok(())
}

struct GuiApp {
    config: Config,
    config_path: PathBuf,
    tr: Translator,
    inputs: CostInputs,
    subject_mode: u8,
    competitor_mode: u8,
    status: Option<String>,
}

impl GuiApp {
    fn new(config: Config, config_path: PathBuf, tr: Translator) -> Self {
        Self {
            inputs: config.inputs,
            subject_mode: config.subject_mode,
            competitor_mode: config.competitor_mode,
            config,
            config_path,
            tr,
            status: None,
        }
    }

    fn subject_inputs(&self) -> CostInputs {
        self.inputs.with_fuel_rate(fuel_rate_for_mode(self.subject_mode))
    }

    fn inputs_panel(&mut self, ui: &mut egui::Ui) {
        let tr = self.tr.clone();
        ui.heading(tr.t(keys::GUI_INPUTS));
        ui.separator();

        ui.label(tr.t(keys::PROMPT_PRICE));
        ui.add(
            egui::DragValue::new(&mut self.inputs.price)
                .speed(500.0)
                .clamp_range(0.0..=10_000_000.0)
                .prefix("$"),
        );
        ui.label(tr.t(keys::PROMPT_INTEREST_RATE));
        ui.add(
            egui::DragValue::new(&mut self.inputs.interest_rate)
                .speed(0.1)
                .clamp_range(0.0..=100.0)
                .suffix(" %"),
        );
        ui.label(tr.t(keys::PROMPT_LOAN_LENGTH));
        ui.add(egui::Slider::new(&mut self.inputs.loan_length_months, 12..=84));
        ui.label(tr.t(keys::PROMPT_DOWNPAYMENT));
        ui.add(
            egui::Slider::new(&mut self.inputs.downpayment_percent, 10.0..=50.0).suffix(" %"),
        );
        ui.label(tr.t(keys::PROMPT_DAILY_HOURS));
        ui.add(
            egui::Slider::new(&mut self.inputs.daily_operating_hours, 0.0..=24.0).suffix(" h"),
        );

        ui.separator();
        mode_combo(
            ui,
            "subject_mode",
            tr.t(keys::PROMPT_SUBJECT_MODE),
            &mut self.subject_mode,
        );
        mode_combo(
            ui,
            "competitor_mode",
            tr.t(keys::PROMPT_COMPETITOR_MODE),
            &mut self.competitor_mode,
        );

        ui.separator();
        ui.label(tr.t(keys::GUI_LANGUAGE));
        let mut language = self.config.language.clone();
        egui::ComboBox::from_id_source("language")
            .selected_text(language.as_str())
            .show_ui(ui, |ui| {
                for code in ["auto", "ko", "en"] {
                    ui.selectable_value(&mut language, code.to_string(), code);
                }
            });
        if language != self.config.language {
            self.config.language = language;
            self.tr = app::translator_for("auto", &self.config);
        }

        ui.separator();
        if ui.button(tr.t(keys::GUI_SAVE_DEFAULTS)).clicked() {
            self.config.inputs = self.inputs;
            self.config.subject_mode = self.subject_mode;
            self.config.competitor_mode = self.competitor_mode;
            self.status = Some(match self.config.save_to(&self.config_path) {
                Ok(()) => tr.t(keys::GUI_SAVED).to_string(),
                Err(e) => format!("{}: {e}", tr.t(keys::ERROR_PREFIX)),
            });
        }
        if let Some(status) = &self.status {
            ui.small(status);
        }
    }

    fn results_panel(&self, ui: &mut egui::Ui) {
        let tr = &self.tr;
        let inputs = self.subject_inputs();

        for issue in validate(inputs) {
            let color = if issue.is_blocking() {
                egui::Color32::RED
            } else {
                egui::Color32::YELLOW
            };
            ui.colored_label(color, report::validation_message(tr, &issue));
        }

        let breakdown = match compute_cost_breakdown_with(inputs, &self.config.assumptions) {
            Ok(b) => b,
            // 검증 항목은 위에서 이미 표시했다.
            Err(CostError::Validation(_)) => return,
            Err(err) => {
                for line in report::error_lines(tr, &err) {
                    ui.colored_label(egui::Color32::RED, line);
                }
                return;
            }
        };

        ui.heading(tr.t(keys::RESULT_TOTAL_MONTHLY));
        ui.label(
            egui::RichText::new(report::format_currency(breakdown.total_monthly_cost)).size(28.0),
        );
        ui.separator();
        breakdown_grid(ui, tr, &breakdown);

        ui.separator();
        ui.heading(tr.t(keys::FLOW_HEADING).trim());
        flow_bars(ui, tr, &breakdown);

        ui.separator();
        ui.heading(tr.t(keys::COMPARE_HEADING).trim());
        let subject_rate = fuel_rate_for_mode(self.subject_mode);
        let competitor_rate = fuel_rate_for_mode(self.competitor_mode);
        let assumptions = &self.config.assumptions;
        match compare_machines_with(inputs, subject_rate, competitor_rate, assumptions) {
            Ok(comparison) => {
                for line in report::comparison_lines(tr, &comparison) {
                    ui.label(line);
                }
                ui.separator();
                ui.heading(tr.t(keys::ENV_HEADING).trim());
                let env = comparison.environmental_equivalence();
                for line in report::environment_lines(tr, &env) {
                    ui.label(line);
                }
            }
            Err(err) => {
                for line in report::error_lines(tr, &err) {
                    ui.colored_label(egui::Color32::RED, line);
                }
            }
        }
    }
}

fn mode_combo(ui: &mut egui::Ui, id: &str, label: &str, mode: &mut u8) {
    ui.label(label);
    egui::ComboBox::from_id_source(id)
        .selected_text(format!("{} ({:.1} L/h)", mode, fuel_rate_for_mode(*mode)))
        .show_ui(ui, |ui| {
            for m in WorkingMode::all() {
                ui.selectable_value(
                    mode,
                    m.number(),
                    format!("{} ({:.1} L/h)", m.number(), m.fuel_rate()),
                );
            }
        });
}

fn breakdown_grid(ui: &mut egui::Ui, tr: &Translator, b: &CostBreakdown) {
    let rows = [
        (keys::RESULT_LOAN_AMOUNT, b.loan_amount),
        (keys::RESULT_MONTHLY_PAYMENT, b.monthly_payment),
        (keys::RESULT_PRINCIPAL, b.principal_payment),
        (keys::RESULT_INTEREST, b.interest_payment),
        (keys::RESULT_OPERATOR, b.operator_salary),
        (keys::RESULT_INSURANCE, b.machine_insurance),
        (keys::RESULT_FUEL, b.monthly_fuel_cost),
        (keys::RESULT_ANNUAL_FUEL, b.annual_fuel_cost),
        (keys::RESULT_WARRANTY, b.warranty_service_monthly),
    ];
    egui::Grid::new("breakdown")
        .num_columns(2)
        .striped(true)
        .show(ui, |ui| {
            for (key, value) in rows {
                ui.label(tr.t(key));
                ui.label(report::format_currency(value));
                ui.end_row();
            }
        });
}

/// 월 총비용 대비 비율 막대로 지출 흐름을 그린다. 할부금의 하위 흐름은 들여쓴다.
fn flow_bars(ui: &mut egui::Ui, tr: &Translator, b: &CostBreakdown) {
    let flow = cost_flow(b);
    let total = flow.outflow(FlowNode::TotalMonthlyCost);
    for link in flow.links() {
        let fraction = if total > 0.0 { (link.value / total) as f32 } else { 0.0 };
        let text = format!(
            "{}  {} ({:.1}%)",
            report::flow_node_label(tr, link.target),
            report::format_currency(link.value),
            fraction * 100.0
        );
        let bar = egui::ProgressBar::new(fraction).text(text);
        if link.source == FlowNode::TotalMonthlyCost {
            ui.add(bar);
        } else {
            ui.indent(link.target.label(), |ui| {
                ui.add(bar);
            });
        }
    }
}

impl App for GuiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        egui::SidePanel::left("inputs")
            .resizable(false)
            .default_width(300.0)
            .show(ctx, |ui| self.inputs_panel(ui));
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| self.results_panel(ui));
        });
    }
}
