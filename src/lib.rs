//! 핵심 계산 로직을 라이브러리로 분리하여 CLI 외의 표시/보고서 계층도 같은 결과를 소비하게 한다.

pub mod app;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod i18n;
pub mod lateral;
pub mod report;
pub mod ui_cli;
pub mod units;
