use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::catalog::{CustomCatalog, DEFAULT_CATALOG};
use crate::lateral::hydraulics::DEFAULT_MAX_VELOCITY_M_PER_S;
use crate::lateral::PairPolicy;
use crate::units::{FlowUnit, LengthUnit};

const CONFIG_FILE: &str = "config.toml";

/// 결과 출력 형식.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// 입력 단위 기본값.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultUnits {
    pub flow: FlowUnit,
    pub length: LengthUnit,
}

impl Default for DefaultUnits {
    fn default() -> Self {
        Self {
            flow: FlowUnit::CubicMeterPerHour,
            length: LengthUnit::Meter,
        }
    }
}

/// 설계 기본값.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DesignDefaults {
    pub hazen_williams_c: f64,
    pub max_velocity_m_per_s: f64,
    pub pair_policy: PairPolicy,
    /// 카탈로그 코드
    pub catalog: String,
}

impl Default for DesignDefaults {
    fn default() -> Self {
        Self {
            hazen_williams_c: 150.0,
            max_velocity_m_per_s: DEFAULT_MAX_VELOCITY_M_PER_S,
            pair_policy: PairPolicy::Adjacent,
            catalog: DEFAULT_CATALOG.to_string(),
        }
    }
}

/// 애플리케이션 설정을 표현한다.
///
/// TOML 직렬화 제약 때문에 단순 값 필드를 테이블 필드보다 먼저 둔다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 언어 코드 (auto/ko/en)
    pub language: String,
    pub output: OutputFormat,
    pub default_units: DefaultUnits,
    pub design: DesignDefaults,
    /// 사용자 정의 관경 카탈로그
    pub catalogs: Vec<CustomCatalog>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: "auto".to_string(),
            output: OutputFormat::Text,
            default_units: DefaultUnits::default(),
            design: DesignDefaults::default(),
            catalogs: Vec::new(),
        }
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
    Serde(#[from] toml::de::Error),
    /// TOML 직렬화 오류
    #[error("설정 직렬화 오류: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// 지정한 경로의 설정을 로드한다. 파일이 없으면 기본값을 그 경로에 저장한다.
pub fn load_from(path: &Path) -> Result<Config, ConfigError> {
    if path.exists() {
        let content = fs::read_to_string(path)?;
        Config::from_toml_str(&content)
    } else {
        let cfg = Config::default();
        save_config(&cfg, path)?;
        Ok(cfg)
    }
}

fn save_config(cfg: &Config, path: &Path) -> Result<(), ConfigError> {
    let content = cfg.to_toml_string()?;
    fs::write(path, content)?;
    Ok(())
}

impl Config {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// 설정을 지정한 경로에 저장한다.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        save_config(self, path)
    }
}

/// CLI 인자가 없으면 기본 설정 파일 경로를 사용한다.
pub fn config_path(cli_path: Option<&Path>) -> PathBuf {
    cli_path
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(CONFIG_FILE))
}
