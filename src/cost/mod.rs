//! 굴삭기 보유 비용 계산 모듈 모음. 모든 함수는 입력만으로 결과가 정해진다.

pub mod breakdown;
pub mod comparison;
pub mod environment;
pub mod flow;
pub mod inputs;
pub mod schedule;
pub mod validation;
pub mod working_mode;

pub use breakdown::*;
pub use comparison::*;
pub use environment::*;
pub use flow::*;
pub use inputs::*;
pub use schedule::*;
pub use validation::*;
pub use working_mode::*;
