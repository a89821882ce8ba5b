//! Hazen-Williams 기반 수리 공식 모음.
//!
//! 단위 규약: 유량 m3/h, 관경 mm, 길이 m, 손실수두 m.

use super::error::HydraulicError;

/// 단위 보정된 Hazen-Williams 상수 (Q: m3/h, D: mm, L: m)
pub const HAZEN_WILLIAMS_CONSTANT: f64 = 1.131e9;
/// 유량 지수
pub const FLOW_EXPONENT: f64 = 1.852;
/// 관경 지수
pub const DIAMETER_EXPONENT: f64 = -4.872;
/// 기본 허용 유속 [m/s]
pub const DEFAULT_MAX_VELOCITY_M_PER_S: f64 = 3.0;

const SECONDS_PER_HOUR: f64 = 3600.0;

/// 내경 [mm]으로부터 단면적 [m2]을 계산한다.
pub fn area(diameter_mm: f64) -> f64 {
    std::f64::consts::PI * (diameter_mm / 2000.0).powi(2)
}

/// 시간당 유량 [m3/h]과 단면적 [m2]으로 유속 [m/s]을 계산한다.
pub fn velocity(flow_m3_per_h: f64, area_m2: f64) -> f64 {
    flow_m3_per_h / area_m2 / SECONDS_PER_HOUR
}

/// 단면적을 검증한 뒤 유속을 계산한다.
pub fn checked_velocity(flow_m3_per_h: f64, area_m2: f64) -> Result<f64, HydraulicError> {
    if !(area_m2 > 0.0) {
        return Err(HydraulicError::NonPositiveArea(area_m2));
    }
    Ok(velocity(flow_m3_per_h, area_m2))
}

/// Hazen-Williams 마찰손실 [m].
///
/// hf = 1.131e9 · (Q/C)^1.852 · L · D^-4.872 · F
pub fn friction_loss(
    flow_m3_per_h: f64,
    hazen_williams_c: f64,
    length_m: f64,
    diameter_mm: f64,
    outlet_factor: f64,
) -> f64 {
    HAZEN_WILLIAMS_CONSTANT
        * (flow_m3_per_h / hazen_williams_c).powf(FLOW_EXPONENT)
        * length_m
        * diameter_mm.powf(DIAMETER_EXPONENT)
        * outlet_factor
}

/// Christiansen 다공 보정계수 F(n).
///
/// F = 2n/(2n-1) · (1/2.852 + √0.852/(6n²))
///
/// n이 커질수록 1/2.852 ≈ 0.3506 에 수렴하며 n = 1 이면 약 1.009 이다.
pub fn multi_outlet_factor(outlet_count: usize) -> Result<f64, HydraulicError> {
    if outlet_count == 0 {
        return Err(HydraulicError::DegenerateOutletCount);
    }
    let n = outlet_count as f64;
    // m + 1 = 2.852, m - 1 = 0.852 (m: 유량 지수)
    Ok(2.0 * n / (2.0 * n - 1.0) * (1.0 / 2.852 + 0.852_f64.sqrt() / (6.0 * n * n)))
}
