//! 이중 관경(점감식) 설계 탐색.
//!
//! 상류에는 큰 관경, 하류에는 작은 관경을 배치한다. 탐색 순서는
//! (관경 조합 오름차순) → (분할 길이 오름차순)이며 조건을 만족하는 첫 조합에서 멈춘다.
//! 가장 좁은 상류 관경을 우선하므로 전체 비용 최소해를 보장하지는 않는다.

use serde::Serialize;
use tracing::{debug, trace};

use super::design::{DesignInput, LateralGeometry, PairPolicy};
use super::hydraulics;

/// 탐색 대상 조합 1개. 인덱스는 카탈로그 기준이다.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SplitCandidate {
    pub upstream_index: usize,
    pub downstream_index: usize,
    /// 입구에서 분할 지점까지 길이 L1 [m]
    pub upstream_length_m: f64,
    /// 나머지 길이 L2 = L - L1 [m]
    pub downstream_length_m: f64,
}

/// 이중 관경 설계 결과.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TwoDiameterSolution {
    pub upstream_index: usize,
    pub upstream_diameter_mm: f64,
    pub upstream_length_m: f64,
    pub upstream_velocity_m_per_s: f64,
    pub upstream_loss_m: f64,
    pub downstream_index: usize,
    pub downstream_diameter_mm: f64,
    pub downstream_length_m: f64,
    /// 하류 구간 유량 Q2 = Q · L2 / L [m3/h]
    pub downstream_flow_m3_per_h: f64,
    pub downstream_velocity_m_per_s: f64,
    pub downstream_loss_m: f64,
    pub total_friction_loss_m: f64,
}

/// 정책에 따른 (상류, 하류) 인덱스 조합을 탐색 순서대로 만든다.
pub fn diameter_pairs(
    catalog_len: usize,
    policy: PairPolicy,
) -> impl Iterator<Item = (usize, usize)> {
    (1..catalog_len).flat_map(move |up| {
        let lowest = match policy {
            PairPolicy::Adjacent => up - 1,
            PairPolicy::AnyDescending => 0,
        };
        (lowest..up).rev().map(move |dn| (up, dn))
    })
}

/// 배출구 위치에서만 분할한다: L1 = k·S (k = 1, 2, ...), L1 < L.
pub fn split_lengths(spacing_m: f64, total_length_m: f64) -> impl Iterator<Item = f64> {
    (1usize..)
        .map(move |k| k as f64 * spacing_m)
        .take_while(move |l1| *l1 < total_length_m)
}

/// 전체 후보 조합을 지연 생성한다.
pub fn candidates(
    catalog_len: usize,
    policy: PairPolicy,
    spacing_m: f64,
    total_length_m: f64,
) -> impl Iterator<Item = SplitCandidate> {
    diameter_pairs(catalog_len, policy).flat_map(move |(up, dn)| {
        split_lengths(spacing_m, total_length_m).map(move |l1| SplitCandidate {
            upstream_index: up,
            downstream_index: dn,
            upstream_length_m: l1,
            downstream_length_m: total_length_m - l1,
        })
    })
}

/// 조합 1개의 유속과 손실을 계산한다.
///
/// 두 구간 모두 전체 배출구 수로 구한 F를 그대로 사용한다.
pub fn evaluate(
    input: &DesignInput<'_>,
    geometry: &LateralGeometry,
    candidate: SplitCandidate,
) -> TwoDiameterSolution {
    let q = input.total_flow_m3_per_h;
    let c = input.hazen_williams_c;
    let f = geometry.outlet_factor;
    let d_up = input.diameter_catalog[candidate.upstream_index];
    let d_dn = input.diameter_catalog[candidate.downstream_index];
    let l1 = candidate.upstream_length_m;
    let l2 = candidate.downstream_length_m;

    let q2 = q * l2 / input.total_length_m;
    let v1 = hydraulics::velocity(q, hydraulics::area(d_up));
    let v2 = hydraulics::velocity(q2, hydraulics::area(d_dn));
    let hf1 = hydraulics::friction_loss(q, c, l1, d_up, f);
    let hf2 = hydraulics::friction_loss(q2, c, l2, d_dn, f);

    TwoDiameterSolution {
        upstream_index: candidate.upstream_index,
        upstream_diameter_mm: d_up,
        upstream_length_m: l1,
        upstream_velocity_m_per_s: v1,
        upstream_loss_m: hf1,
        downstream_index: candidate.downstream_index,
        downstream_diameter_mm: d_dn,
        downstream_length_m: l2,
        downstream_flow_m3_per_h: q2,
        downstream_velocity_m_per_s: v2,
        downstream_loss_m: hf2,
        total_friction_loss_m: hf1 + hf2,
    }
}

impl TwoDiameterSolution {
    /// 손실과 두 구간 유속이 모두 한계 이내인지 확인한다.
    pub fn meets_constraints(&self, available_loss_head_m: f64, max_velocity_m_per_s: f64) -> bool {
        self.total_friction_loss_m <= available_loss_head_m
            && self.upstream_velocity_m_per_s <= max_velocity_m_per_s
            && self.downstream_velocity_m_per_s <= max_velocity_m_per_s
    }
}

/// 조건을 만족하는 첫 조합을 찾는다. 없으면 None.
pub fn search_two_diameter(
    input: &DesignInput<'_>,
    geometry: &LateralGeometry,
) -> Option<TwoDiameterSolution> {
    let max_v = input.options.max_velocity_m_per_s;
    let found = candidates(
        input.diameter_catalog.len(),
        input.options.pair_policy,
        input.outlet_spacing_m,
        input.total_length_m,
    )
    .map(|cand| evaluate(input, geometry, cand))
    .find(|sol| {
        let ok = sol.meets_constraints(input.available_loss_head_m, max_v);
        if !ok {
            trace!(
                d_up = sol.upstream_diameter_mm,
                d_dn = sol.downstream_diameter_mm,
                l1 = sol.upstream_length_m,
                loss = sol.total_friction_loss_m,
                "조합 기각"
            );
        }
        ok
    })?;
    debug!(
        d_up = found.upstream_diameter_mm,
        l1 = found.upstream_length_m,
        d_dn = found.downstream_diameter_mm,
        l2 = found.downstream_length_m,
        loss = found.total_friction_loss_m,
        "이중 관경 선정"
    );
    Some(found)
}
