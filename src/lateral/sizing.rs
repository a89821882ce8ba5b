use serde::Serialize;
use tracing::{info, warn};

use super::design::{DesignInput, LateralGeometry};
use super::error::SizingError;
use super::progressive::{self, TwoDiameterSolution};
use super::segments::{self, PipeLayout, PropagationInput, SegmentTable};
use super::single_diameter::{self, SingleDiameterCandidate, SingleDiameterSolution};

/// 사이징 1회 실행 결과. 표시/보고서 계층이 그대로 소비한다.
///
/// 구간표는 해당 설계가 있을 때만 존재한다.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SizingResult {
    pub geometry: LateralGeometry,
    pub single_diameter_candidates: Vec<SingleDiameterCandidate>,
    pub single_diameter_solution: Option<SingleDiameterSolution>,
    pub two_diameter_solution: Option<TwoDiameterSolution>,
    pub single_diameter_segments: Option<SegmentTable>,
    pub two_diameter_segments: Option<SegmentTable>,
}

impl SizingResult {
    /// 단일 관경 설계의 도달시간 [min]
    pub fn total_transit_time_single_min(&self) -> Option<f64> {
        self.single_diameter_segments
            .as_ref()
            .map(|t| t.total_transit_time_min)
    }

    /// 이중 관경 설계의 도달시간 [min]
    pub fn total_transit_time_two_min(&self) -> Option<f64> {
        self.two_diameter_segments
            .as_ref()
            .map(|t| t.total_transit_time_min)
    }
}

/// 횡지관 1개를 사이징한다.
///
/// 단일 관경 선정과 이중 관경 탐색은 서로 독립적으로 수행된다.
pub fn size_lateral(input: &DesignInput<'_>) -> Result<SizingResult, SizingError> {
    let geometry = input.geometry()?;

    let candidates = single_diameter::scan_catalog(input, &geometry);
    let single = single_diameter::first_feasible(&candidates);
    if single.is_none() {
        warn!("조건을 만족하는 단일 관경이 없습니다.");
    }

    let two = progressive::search_two_diameter(input, &geometry);
    if two.is_none() {
        warn!("조건을 만족하는 이중 관경 조합이 없습니다.");
    }

    let propagation = PropagationInput {
        total_flow_m3_per_h: input.total_flow_m3_per_h,
        outlet_discharge_m3_per_h: geometry.outlet_discharge_m3_per_h,
        outlet_spacing_m: input.outlet_spacing_m,
        outlet_count: geometry.outlet_count,
    };
    let single_segments = single
        .as_ref()
        .map(|s| segments::propagate(&PipeLayout::from(s), &propagation))
        .transpose()?;
    let two_segments = two
        .as_ref()
        .map(|s| segments::propagate(&PipeLayout::from(s), &propagation))
        .transpose()?;

    info!(
        outlets = geometry.outlet_count,
        factor = geometry.outlet_factor,
        single = ?single.map(|s| s.diameter_mm),
        two = ?two.map(|s| (s.upstream_diameter_mm, s.downstream_diameter_mm)),
        "사이징 완료"
    );

    Ok(SizingResult {
        geometry,
        single_diameter_candidates: candidates,
        single_diameter_solution: single,
        two_diameter_solution: two,
        single_diameter_segments: single_segments,
        two_diameter_segments: two_segments,
    })
}
