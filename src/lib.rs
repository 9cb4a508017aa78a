//! 체적, 질량, 밀도, 농도 단위 변환 엔진.
//! 핵심 계산은 라이브러리에 두고 CLI는 얇은 껍데기로 유지한다.

pub mod app;
pub mod bridge;
pub mod cli;
pub mod config;
pub mod conversion;
pub mod i18n;
pub mod quantity;
pub mod request;
pub mod substances;
pub mod ui_cli;
pub mod units;
