//! 구간(tramo)별 유량·유속·도달시간 전파.
//!
//! 구간 i는 (i-1)·S 에서 i·S 까지의 관로이며, 들어오는 유량은
//! Q - (i-1)·q_outlet 이다. 첫 구간은 설계 유량 전체를, 마지막 구간은 배출구 1개분을 흘린다.

use serde::Serialize;

use super::error::SizingError;
use super::hydraulics;
use super::progressive::TwoDiameterSolution;
use super::single_diameter::SingleDiameterSolution;

const SECONDS_PER_MINUTE: f64 = 60.0;

/// 전파 계산에 사용할 관 배치.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum PipeLayout {
    /// 전 구간 단일 관경
    Single { diameter_mm: f64 },
    /// 전이 길이까지 상류 관경, 이후 하류 관경 (점진적 혼합 없음)
    Split {
        upstream_diameter_mm: f64,
        downstream_diameter_mm: f64,
        transition_length_m: f64,
    },
}

impl PipeLayout {
    /// 입구로부터 누적 길이에 해당하는 관경을 반환한다.
    pub fn diameter_at(&self, cumulative_length_m: f64) -> f64 {
        match *self {
            PipeLayout::Single { diameter_mm } => diameter_mm,
            PipeLayout::Split {
                upstream_diameter_mm,
                downstream_diameter_mm,
                transition_length_m,
            } => {
                if cumulative_length_m <= transition_length_m {
                    upstream_diameter_mm
                } else {
                    downstream_diameter_mm
                }
            }
        }
    }
}

impl From<&SingleDiameterSolution> for PipeLayout {
    fn from(s: &SingleDiameterSolution) -> Self {
        PipeLayout::Single {
            diameter_mm: s.diameter_mm,
        }
    }
}

impl From<&TwoDiameterSolution> for PipeLayout {
    fn from(s: &TwoDiameterSolution) -> Self {
        PipeLayout::Split {
            upstream_diameter_mm: s.upstream_diameter_mm,
            downstream_diameter_mm: s.downstream_diameter_mm,
            transition_length_m: s.upstream_length_m,
        }
    }
}

/// 배출구 1개에 대응하는 구간 상태. 생성 후 변경하지 않는다.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SegmentRow {
    /// 배출구 번호 (1부터)
    pub outlet: usize,
    /// i·S [m]
    pub cumulative_length_m: f64,
    /// 구간 유량 [m3/h]
    pub segment_flow_m3_per_h: f64,
    pub diameter_mm: f64,
    pub segment_velocity_m_per_s: f64,
    /// S / v [s]
    pub segment_time_s: f64,
    /// 누적 도달시간 [s]
    pub cumulative_time_s: f64,
}

impl SegmentRow {
    pub fn cumulative_time_min(&self) -> f64 {
        self.cumulative_time_s / SECONDS_PER_MINUTE
    }
}

/// 구간 전파 결과표.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SegmentTable {
    pub rows: Vec<SegmentRow>,
    /// 전체 도달시간 [min]
    pub total_transit_time_min: f64,
}

impl SegmentTable {
    /// 모든 구간 시간의 합 [s]
    pub fn total_transit_time_s(&self) -> f64 {
        self.rows.last().map_or(0.0, |r| r.cumulative_time_s)
    }
}

/// 전파 계산 입력. 모두 사이징 실행의 파생값에서 온다.
#[derive(Debug, Clone, Copy)]
pub struct PropagationInput {
    pub total_flow_m3_per_h: f64,
    pub outlet_discharge_m3_per_h: f64,
    pub outlet_spacing_m: f64,
    pub outlet_count: usize,
}

/// 배출구 1..n 에 대해 구간표를 만든다.
///
/// 잔여 유량이 0 이하가 되는 구간을 만나면 `FlowExhausted`로 중단한다.
pub fn propagate(
    layout: &PipeLayout,
    input: &PropagationInput,
) -> Result<SegmentTable, SizingError> {
    let spacing = input.outlet_spacing_m;
    let (rows, elapsed_s) = (1..=input.outlet_count).try_fold(
        (Vec::new(), 0.0_f64),
        |(mut rows, elapsed_s), i| {
            let flow =
                input.total_flow_m3_per_h - (i - 1) as f64 * input.outlet_discharge_m3_per_h;
            if flow <= 0.0 {
                return Err(SizingError::FlowExhausted {
                    outlet: i,
                    remaining_flow_m3_per_h: flow,
                });
            }
            let cumulative_length = i as f64 * spacing;
            let diameter = layout.diameter_at(cumulative_length);
            let velocity = hydraulics::checked_velocity(flow, hydraulics::area(diameter))?;
            let segment_time = spacing / velocity;
            let cumulative_time = elapsed_s + segment_time;
            rows.push(SegmentRow {
                outlet: i,
                cumulative_length_m: cumulative_length,
                segment_flow_m3_per_h: flow,
                diameter_mm: diameter,
                segment_velocity_m_per_s: velocity,
                segment_time_s: segment_time,
                cumulative_time_s: cumulative_time,
            });
            Ok((rows, cumulative_time))
        },
    )?;
    Ok(SegmentTable {
        rows,
        total_transit_time_min: elapsed_s / SECONDS_PER_MINUTE,
    })
}
