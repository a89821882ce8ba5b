//! 단일 관경 선정.
//!
//! 카탈로그를 오름차순으로 훑어 유속과 마찰손실 조건을 모두 만족하는 첫 관경을 고른다.
//! 손실 최소화가 아니라 최소 관경(저렴한 관) 우선 정책이다.

use serde::Serialize;
use tracing::debug;

use super::design::{DesignInput, LateralGeometry};
use super::hydraulics;

/// 카탈로그 관경 1개에 대한 검토 결과.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SingleDiameterCandidate {
    pub diameter_mm: f64,
    pub velocity_m_per_s: f64,
    pub friction_loss_m: f64,
    pub meets_constraints: bool,
}

/// 선정된 단일 관경 설계.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SingleDiameterSolution {
    pub diameter_mm: f64,
    pub velocity_m_per_s: f64,
    pub friction_loss_m: f64,
}

impl From<SingleDiameterCandidate> for SingleDiameterSolution {
    fn from(c: SingleDiameterCandidate) -> Self {
        Self {
            diameter_mm: c.diameter_mm,
            velocity_m_per_s: c.velocity_m_per_s,
            friction_loss_m: c.friction_loss_m,
        }
    }
}

/// 전체 길이에 대해 관경 하나를 평가한다.
pub fn evaluate(
    input: &DesignInput<'_>,
    geometry: &LateralGeometry,
    diameter_mm: f64,
) -> SingleDiameterCandidate {
    let velocity =
        hydraulics::velocity(input.total_flow_m3_per_h, hydraulics::area(diameter_mm));
    let loss = hydraulics::friction_loss(
        input.total_flow_m3_per_h,
        input.hazen_williams_c,
        input.total_length_m,
        diameter_mm,
        geometry.outlet_factor,
    );
    SingleDiameterCandidate {
        diameter_mm,
        velocity_m_per_s: velocity,
        friction_loss_m: loss,
        meets_constraints: velocity <= input.options.max_velocity_m_per_s
            && loss <= input.available_loss_head_m,
    }
}

/// 카탈로그 전체의 검토표를 카탈로그 순서대로 반환한다.
pub fn scan_catalog(
    input: &DesignInput<'_>,
    geometry: &LateralGeometry,
) -> Vec<SingleDiameterCandidate> {
    input
        .diameter_catalog
        .iter()
        .map(|&d| evaluate(input, geometry, d))
        .collect()
}

/// 조건을 만족하는 가장 작은 관경을 고른다. 없으면 None.
pub fn select_single_diameter(
    input: &DesignInput<'_>,
    geometry: &LateralGeometry,
) -> Option<SingleDiameterSolution> {
    first_feasible(&scan_catalog(input, geometry))
}

/// 검토표에서 조건을 만족하는 첫 관경을 해로 만든다.
pub fn first_feasible(candidates: &[SingleDiameterCandidate]) -> Option<SingleDiameterSolution> {
    let found = candidates.iter().copied().find(|c| c.meets_constraints)?;
    debug!(
        diameter_mm = found.diameter_mm,
        velocity = found.velocity_m_per_s,
        loss = found.friction_loss_m,
        "단일 관경 선정"
    );
    Some(found.into())
}
