use std::path::Path;

use thiserror::Error;
use tracing::info;

use crate::catalog::{self, CatalogError};
use crate::cli::SizeArgs;
use crate::config::{Config, ConfigError, OutputFormat};
use crate::i18n::{keys, Translator};
use crate::lateral::{self, DesignInput, DesignOptions, SizingError, SizingResult};
use crate::report::{self, TextReport};
use crate::ui_cli::{self, MenuChoice};
use crate::units;

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum AppError {
    /// 파일 입출력 오류
    #[error("입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    /// 설정 저장/로드 오류
    #[error("설정 오류: {0}")]
    Config(#[from] ConfigError),
    /// 카탈로그 조회 오류
    #[error("카탈로그 오류: {0}")]
    Catalog(#[from] CatalogError),
    /// 사이징 계산 오류
    #[error("사이징 오류: {0}")]
    Sizing(#[from] SizingError),
    /// 결과 직렬화 오류
    #[error("JSON 직렬화 오류: {0}")]
    Json(#[from] serde_json::Error),
}

/// 기준 단위(m3/h, m)로 환산이 끝난 사이징 요청. 카탈로그를 소유한다.
#[derive(Debug, Clone, PartialEq)]
pub struct SizeRequest {
    pub total_flow_m3_per_h: f64,
    pub outlet_spacing_m: f64,
    pub total_length_m: f64,
    pub available_loss_head_m: f64,
    pub hazen_williams_c: f64,
    pub catalog_code: String,
    pub diameters_mm: Vec<f64>,
    pub options: DesignOptions,
}

impl SizeRequest {
    /// CLI 인자와 설정 기본값을 합쳐 요청을 만든다.
    pub fn from_args(args: &SizeArgs, cfg: &Config) -> Result<Self, AppError> {
        let flow_unit = args.flow_unit.unwrap_or(cfg.default_units.flow);
        let length_unit = args.length_unit.unwrap_or(cfg.default_units.length);

        let (catalog_code, diameters_mm) = match &args.diameters {
            Some(list) => ("custom".to_string(), catalog::custom_series(list.clone())?),
            None => {
                let code = args.catalog.as_deref().unwrap_or(&cfg.design.catalog);
                let resolved = catalog::resolve(code, &cfg.catalogs)?;
                (resolved.code, resolved.diameters_mm)
            }
        };

        let options = DesignOptions {
            max_velocity_m_per_s: args
                .max_velocity
                .unwrap_or(cfg.design.max_velocity_m_per_s),
            pair_policy: args
                .pairs
                .map(Into::into)
                .unwrap_or(cfg.design.pair_policy),
            outlet_discharge_m3_per_h: args
                .outlet_flow
                .map(|q| units::flow_to_m3_per_h(q, flow_unit)),
        };

        Ok(Self {
            total_flow_m3_per_h: units::flow_to_m3_per_h(args.flow, flow_unit),
            outlet_spacing_m: units::length_to_m(args.spacing, length_unit),
            total_length_m: units::length_to_m(args.length, length_unit),
            available_loss_head_m: units::length_to_m(args.head_loss, length_unit),
            hazen_williams_c: args.hazen_c.unwrap_or(cfg.design.hazen_williams_c),
            catalog_code,
            diameters_mm,
            options,
        })
    }

    pub fn design_input(&self) -> DesignInput<'_> {
        DesignInput::new(
            self.total_flow_m3_per_h,
            self.outlet_spacing_m,
            self.total_length_m,
            self.available_loss_head_m,
            self.hazen_williams_c,
            &self.diameters_mm,
        )
        .with_options(self.options)
    }

    pub fn execute(&self) -> Result<SizingResult, AppError> {
        info!(catalog = %self.catalog_code, "사이징 요청");
        Ok(lateral::size_lateral(&self.design_input())?)
    }
}

/// 결과를 지정한 형식의 문자열로 만든다.
pub fn render(
    result: &SizingResult,
    format: OutputFormat,
    tr: &Translator,
) -> Result<String, AppError> {
    match format {
        OutputFormat::Text => Ok(TextReport::new(result, tr).to_string()),
        OutputFormat::Json => Ok(report::render_json(result)?),
    }
}

/// `size` 서브커맨드를 실행하고 출력 문자열을 반환한다.
pub fn run_size(args: &SizeArgs, cfg: &Config, tr: &Translator) -> Result<String, AppError> {
    let request = SizeRequest::from_args(args, cfg)?;
    let result = request.execute()?;
    render(&result, args.format.unwrap_or(cfg.output), tr)
}

/// 내장 및 사용자 카탈로그 목록을 문자열로 만든다.
pub fn list_catalogs(cfg: &Config, tr: &Translator) -> String {
    let mut lines = vec![tr.t(keys::CATALOGS_HEADING).to_string()];
    for c in catalog::catalogs() {
        lines.push(format!("{:<12} {} ({})", c.code, c.name, c.notes));
        lines.push(format!("    {}", join_diameters(c.diameters_mm)));
    }
    for c in &cfg.catalogs {
        lines.push(format!("{:<12} [{}]", c.code, tr.t(keys::CATALOGS_CUSTOM)));
        lines.push(format!("    {}", join_diameters(&c.diameters_mm)));
    }
    lines.join("\n")
}

fn join_diameters(diameters: &[f64]) -> String {
    diameters
        .iter()
        .map(|d| d.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// CLI 대화형 메인 루프를 실행한다. 종료 시 설정을 저장한다.
pub fn run(config: &mut Config, config_path: &Path, tr: &Translator) -> Result<(), AppError> {
    loop {
        match ui_cli::main_menu(tr)? {
            MenuChoice::LateralSizing => {
                // 계산 오류는 메뉴로 돌아가 다시 입력받는다
                if let Err(e) = ui_cli::handle_lateral_sizing(tr, config) {
                    match e {
                        AppError::Io(_) => return Err(e),
                        other => println!("{}: {other}", tr.t(keys::ERROR_PREFIX)),
                    }
                }
            }
            MenuChoice::Catalogs => println!("{}", list_catalogs(config, tr)),
            MenuChoice::Settings => {
                ui_cli::handle_settings(tr, config)?;
                config.save_to(config_path)?;
            }
            MenuChoice::Exit => {
                config.save_to(config_path)?;
                println!("{}", tr.t(keys::APP_EXIT));
                break;
            }
        }
    }
    Ok(())
}

/// 대화형 입력값(설정 단위 기준)으로 요청을 만든다.
pub(crate) fn request_from_prompt(
    cfg: &Config,
    values: PromptValues,
) -> Result<SizeRequest, AppError> {
    // 카탈로그 입력이 숫자로 시작하면 내경 목록으로 본다
    let (catalog, diameters) = match values.catalog {
        Some(text) if text.trim_start().starts_with(|c: char| c.is_ascii_digit()) => {
            (None, Some(catalog::parse_diameter_list(&text)?))
        }
        other => (other, None),
    };
    let args = SizeArgs {
        flow: values.flow,
        spacing: values.spacing,
        length: values.length,
        head_loss: values.head_loss,
        hazen_c: values.hazen_c,
        catalog,
        diameters,
        pairs: None,
        max_velocity: None,
        outlet_flow: None,
        flow_unit: Some(cfg.default_units.flow),
        length_unit: Some(cfg.default_units.length),
        format: None,
    };
    SizeRequest::from_args(&args, cfg)
}

/// 대화형 메뉴에서 읽은 원시 입력값.
pub(crate) struct PromptValues {
    pub flow: f64,
    pub spacing: f64,
    pub length: f64,
    pub head_loss: f64,
    pub hazen_c: Option<f64>,
    pub catalog: Option<String>,
}

pub(crate) fn unit_symbols(cfg: &Config) -> (&'static str, &'static str) {
    (
        cfg.default_units.flow.symbol(),
        cfg.default_units.length.symbol(),
    )
}
