//! 명령행 인자 정의.

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tracing::Level;

use crate::config::OutputFormat;
use crate::lateral::PairPolicy;
use crate::units::{FlowUnit, LengthUnit};

/// 다공 횡지관 관경 설계 도구
#[derive(Debug, Parser)]
#[command(name = "lateral_design_toolbox")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Irrigation lateral sizing with Hazen-Williams and multi-outlet correction", long_about = None)]
pub struct Cli {
    /// 설정 파일 경로 (기본: ./config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// 언어 (auto, ko, en)
    #[arg(short = 'L', long, default_value = "auto", global = true)]
    pub lang: String,

    /// 언어팩 디렉터리
    #[arg(long, global = true)]
    pub locales: Option<PathBuf>,

    /// 로그 레벨 (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn", global = true)]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// 횡지관 1개를 사이징한다
    Size(SizeArgs),
    /// 사용 가능한 관경 카탈로그를 표시한다
    Catalogs,
    /// 대화형 메뉴 (기본값)
    Interactive,
}

/// 이중 관경 조합 방식 인자.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PairsArg {
    Adjacent,
    Any,
}

impl From<PairsArg> for PairPolicy {
    fn from(value: PairsArg) -> Self {
        match value {
            PairsArg::Adjacent => PairPolicy::Adjacent,
            PairsArg::Any => PairPolicy::AnyDescending,
        }
    }
}

/// 사이징 인자. 생략한 값은 설정 파일의 기본값을 쓴다.
#[derive(Debug, Clone, Args)]
pub struct SizeArgs {
    /// 총유량
    #[arg(short = 'q', long)]
    pub flow: f64,

    /// 배출구 간격
    #[arg(short = 's', long)]
    pub spacing: f64,

    /// 횡지관 길이
    #[arg(short = 'l', long)]
    pub length: f64,

    /// 허용 마찰손실 수두
    #[arg(long)]
    pub head_loss: f64,

    /// Hazen-Williams C
    #[arg(short = 'c', long = "hazen-c")]
    pub hazen_c: Option<f64>,

    /// 카탈로그 코드 (예: PVC-SDR41)
    #[arg(long, conflicts_with = "diameters")]
    pub catalog: Option<String>,

    /// 직접 지정하는 내경 목록 [mm], 쉼표 구분
    #[arg(long, value_delimiter = ',')]
    pub diameters: Option<Vec<f64>>,

    /// 이중 관경 조합 방식
    #[arg(long, value_enum)]
    pub pairs: Option<PairsArg>,

    /// 허용 유속 [m/s]
    #[arg(long)]
    pub max_velocity: Option<f64>,

    /// 배출구당 토출량 (유량 단위)
    #[arg(long)]
    pub outlet_flow: Option<f64>,

    #[arg(long, value_enum)]
    pub flow_unit: Option<FlowUnit>,

    #[arg(long, value_enum)]
    pub length_unit: Option<LengthUnit>,

    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,
}

impl Cli {
    /// 로그 레벨 문자열을 해석한다. 알 수 없으면 WARN.
    pub fn level(&self) -> Level {
        match self.log_level.to_lowercase().as_str() {
            "trace" => Level::TRACE,
            "debug" => Level::DEBUG,
            "info" => Level::INFO,
            "error" => Level::ERROR,
            _ => Level::WARN,
        }
    }
}
