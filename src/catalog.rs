/// 관 재질/등급별 내경 카탈로그와 조회 함수를 제공한다.
/// SDR 32.5/26 값은 호칭 외경과 최소 두께 1.52 mm로 구한 근사치이며 제조사 규격으로 확인해야 한다.
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::lateral::design::validate_catalog;

#[derive(Debug)]
pub struct PipeCatalog {
    pub code: &'static str,
    pub name: &'static str,
    pub notes: &'static str,
    /// 내경 [mm], 오름차순
    pub diameters_mm: &'static [f64],
}

/// 설정 파일에서 정의하는 사용자 카탈로그.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomCatalog {
    pub code: String,
    #[serde(default)]
    pub name: String,
    pub diameters_mm: Vec<f64>,
}

/// 카탈로그 조회 오류.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("알 수 없는 카탈로그: {0}")]
    Unknown(String),
    #[error("카탈로그 {code} 이(가) 잘못되었습니다: {reason}")]
    Invalid { code: String, reason: String },
}

/// 조회 결과. 내장/사용자 테이블 모두 내경 목록을 복사해 소유한다.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedCatalog {
    pub code: String,
    pub name: String,
    pub diameters_mm: Vec<f64>,
}

pub fn catalogs() -> &'static [PipeCatalog] {
    CATALOGS
}

pub fn find_catalog(code: &str) -> Option<&'static PipeCatalog> {
    CATALOGS
        .iter()
        .find(|c| c.code.eq_ignore_ascii_case(code) || c.name.eq_ignore_ascii_case(code))
}

/// 사용자 카탈로그를 먼저, 그다음 내장 카탈로그를 찾는다.
pub fn resolve(code: &str, custom: &[CustomCatalog]) -> Result<ResolvedCatalog, CatalogError> {
    if let Some(c) = custom.iter().find(|c| c.code.eq_ignore_ascii_case(code)) {
        validate_catalog(&c.diameters_mm).map_err(|e| CatalogError::Invalid {
            code: c.code.clone(),
            reason: e.to_string(),
        })?;
        let name = if c.name.is_empty() {
            c.code.clone()
        } else {
            c.name.clone()
        };
        return Ok(ResolvedCatalog {
            code: c.code.clone(),
            name,
            diameters_mm: c.diameters_mm.clone(),
        });
    }
    let builtin = find_catalog(code).ok_or_else(|| CatalogError::Unknown(code.to_string()))?;
    Ok(ResolvedCatalog {
        code: builtin.code.to_string(),
        name: builtin.name.to_string(),
        diameters_mm: builtin.diameters_mm.to_vec(),
    })
}

fn invalid_custom(reason: String) -> CatalogError {
    CatalogError::Invalid {
        code: "custom".into(),
        reason,
    }
}

/// 직접 지정한 내경 목록을 검증한다.
pub fn custom_series(diameters_mm: Vec<f64>) -> Result<Vec<f64>, CatalogError> {
    validate_catalog(&diameters_mm).map_err(|e| invalid_custom(e.to_string()))?;
    Ok(diameters_mm)
}

/// "39.8, 45.9, 57.38" 형태의 문자열을 내경 목록으로 읽는다.
pub fn parse_diameter_list(text: &str) -> Result<Vec<f64>, CatalogError> {
    let diameters = text
        .split([',', ';', ' '])
        .filter(|s| !s.trim().is_empty())
        .map(|s| {
            s.trim()
                .parse::<f64>()
                .map_err(|_| invalid_custom(format!("숫자가 아닙니다: {s}")))
        })
        .collect::<Result<Vec<_>, _>>()?;
    custom_series(diameters)
}

pub const DEFAULT_CATALOG: &str = "PVC-SDR41";

const CATALOGS: &[PipeCatalog] = &[
    PipeCatalog {
        code: "PVC-SDR41",
        name: "PVC SDR 41",
        notes: "1-1/4\" ~ 15\" 내경; 횡지관 설계 기본 테이블",
        diameters_mm: &[
            39.8, 45.9, 57.38, 84.58, 108.72, 160.08, 208.42, 259.75, 308.05, 369.7,
        ],
    },
    PipeCatalog {
        code: "PVC-SDR32.5",
        name: "PVC SDR 32.5",
        notes: "IPS 외경 기준 근사치, 최소 두께 1.52 mm",
        diameters_mm: &[
            39.12, 45.22, 56.62, 83.43, 107.27, 157.92, 205.6, 256.25, 303.92, 364.7,
        ],
    },
    PipeCatalog {
        code: "PVC-SDR26",
        name: "PVC SDR 26",
        notes: "IPS 외경 기준 근사치, 최소 두께 1.52 mm",
        diameters_mm: &[
            38.92, 44.55, 55.69, 82.06, 105.51, 155.34, 202.23, 252.05, 298.94, 358.73,
        ],
    },
];
