//! 횡지관 사이징 계산에서 발생 가능한 오류.
//!
//! 해가 없는 경우(단일/이중 관경 모두)는 오류가 아니라 `SizingResult`의 `None` 필드로 표현한다.

use thiserror::Error;

/// 수리 공식 단계에서 정의되지 않는 입력.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum HydraulicError {
    /// 다공 보정계수는 배출구가 1개 이상일 때만 정의된다.
    #[error("배출구 수가 0이면 다공 보정계수를 계산할 수 없습니다.")]
    DegenerateOutletCount,
    /// 유속 계산 시 단면적이 0 이하인 경우
    #[error("단면적은 0보다 커야 합니다: {0} m2")]
    NonPositiveArea(f64),
}

/// 사이징 실행 경계에서 노출되는 오류.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SizingError {
    /// 입력값이 잘못된 경우. 계산 전에 중단한다.
    #[error("입력 오류: {0}")]
    InvalidInput(String),
    /// 구간 전파 중 잔여 유량이 0 이하가 된 경우
    #[error(
        "유량 소진: {outlet}번째 구간의 잔여 유량이 {remaining_flow_m3_per_h:.4} m3/h 입니다."
    )]
    FlowExhausted {
        outlet: usize,
        remaining_flow_m3_per_h: f64,
    },
}

impl SizingError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        SizingError::InvalidInput(msg.into())
    }
}

impl From<HydraulicError> for SizingError {
    fn from(value: HydraulicError) -> Self {
        SizingError::InvalidInput(value.to_string())
    }
}
