//! size_lateral 전체 흐름 시나리오 테스트.
use lateral_design_toolbox::lateral::hydraulics::{area, friction_loss, multi_outlet_factor, velocity};
use lateral_design_toolbox::lateral::design::MAX_OUTLET_COUNT;
use lateral_design_toolbox::lateral::{size_lateral, DesignInput, DesignOptions, SizingError};

const SDR41: [f64; 10] = [
    39.8, 45.9, 57.38, 84.58, 108.72, 160.08, 208.42, 259.75, 308.05, 369.7,
];

fn scenario_a() -> DesignInput<'static> {
    DesignInput::new(20.0, 10.0, 200.0, 10.0, 150.0, &SDR41)
}

#[test]
fn scenario_a_reference_lateral() {
    let result = size_lateral(&scenario_a()).expect("sizing");
    assert_eq!(result.geometry.outlet_count, 20);
    assert_eq!(result.geometry.outlet_discharge_m3_per_h, 1.0);
    assert_eq!(
        result.geometry.outlet_factor,
        multi_outlet_factor(20).expect("factor")
    );

    let expected = SDR41
        .iter()
        .copied()
        .find(|&d| {
            velocity(20.0, area(d)) <= 3.0
                && friction_loss(20.0, 150.0, 200.0, d, result.geometry.outlet_factor) <= 10.0
        })
        .expect("feasible diameter");
    let single = result.single_diameter_solution.expect("single");
    assert_eq!(single.diameter_mm, expected);

    let two = result.two_diameter_solution.expect("two");
    assert_eq!(two.upstream_length_m + two.downstream_length_m, 200.0);
    assert!(two.upstream_index > two.downstream_index);

    let single_rows = result.single_diameter_segments.as_ref().expect("rows");
    let two_rows = result.two_diameter_segments.as_ref().expect("rows");
    assert_eq!(single_rows.rows.len(), 20);
    assert_eq!(two_rows.rows.len(), 20);
    assert_eq!(
        result.total_transit_time_single_min(),
        Some(single_rows.total_transit_time_min)
    );
    // 하류가 좁아져 유속이 빨라지므로 도달시간이 짧아진다
    assert!(
        result.total_transit_time_two_min().expect("two time")
            < result.total_transit_time_single_min().expect("single time")
    );
}

#[test]
fn scenario_b_single_outlet_boundary() {
    let input = DesignInput::new(20.0, 10.0, 10.0, 10.0, 150.0, &SDR41);
    let result = size_lateral(&input).expect("sizing");
    assert_eq!(result.geometry.outlet_count, 1);
    let f = result.geometry.outlet_factor;
    assert!(f.is_finite() && f > 1.0 && f < 1.01, "F(1) = {f}");

    assert_eq!(
        result.single_diameter_solution.map(|s| s.diameter_mm),
        Some(57.38)
    );
    // 분할 지점이 없으므로 이중 관경 설계는 없다
    assert!(result.two_diameter_solution.is_none());
    assert!(result.two_diameter_segments.is_none());

    let rows = &result.single_diameter_segments.as_ref().expect("rows").rows;
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].segment_flow_m3_per_h, 20.0);
}

#[test]
fn scenario_c_flow_exhausted_by_outlet_override() {
    let options = DesignOptions {
        outlet_discharge_m3_per_h: Some(1.5),
        ..DesignOptions::default()
    };
    let input = scenario_a().with_options(options);
    // 부분 결과 없이 실행 전체가 오류로 끝난다
    match size_lateral(&input) {
        Err(SizingError::FlowExhausted { outlet, .. }) => assert_eq!(outlet, 15),
        other => panic!("expected FlowExhausted, got {other:?}"),
    }
}

#[test]
fn scenario_d_no_diameter_meets_velocity() {
    let input = DesignInput::new(2000.0, 10.0, 200.0, 10.0, 150.0, &SDR41);
    let result = size_lateral(&input).expect("sizing");
    assert!(result.single_diameter_solution.is_none());
    assert!(result.single_diameter_segments.is_none());
    assert!(result.total_transit_time_single_min().is_none());
    assert_eq!(result.single_diameter_candidates.len(), SDR41.len());
    // 이중 관경 탐색은 독립적으로 수행되며 역시 해가 없다
    assert!(result.two_diameter_solution.is_none());
    assert!(result.total_transit_time_two_min().is_none());
}

#[test]
fn two_diameter_found_without_single_solution() {
    // 57.38 mm 단일 관은 5.27 m 손실로 불합격이지만, 하류를 좁히면 유량 감소 덕에 손실이 줄어든다
    let catalog = [45.9, 57.38];
    let input = DesignInput::new(20.0, 10.0, 200.0, 5.0, 150.0, &catalog);
    let result = size_lateral(&input).expect("sizing");
    assert!(result.single_diameter_solution.is_none());
    assert!(result.single_diameter_segments.is_none());

    let two = result.two_diameter_solution.expect("two");
    assert_eq!(two.upstream_diameter_mm, 57.38);
    assert_eq!(two.upstream_length_m, 100.0);
    assert!(two.total_friction_loss_m <= 5.0);
    assert!(result.two_diameter_segments.is_some());
}

#[test]
fn sizing_is_idempotent() {
    let a = size_lateral(&scenario_a()).expect("first");
    let b = size_lateral(&scenario_a()).expect("second");
    assert_eq!(a, b);
    let json_a = serde_json::to_string(&a).expect("json");
    let json_b = serde_json::to_string(&b).expect("json");
    assert_eq!(json_a, json_b);
}

#[test]
fn invalid_inputs_are_rejected_before_computation() {
    let cases: Vec<DesignInput<'_>> = vec![
        DesignInput::new(0.0, 10.0, 200.0, 10.0, 150.0, &SDR41),
        DesignInput::new(20.0, -1.0, 200.0, 10.0, 150.0, &SDR41),
        DesignInput::new(20.0, 10.0, 0.0, 10.0, 150.0, &SDR41),
        DesignInput::new(20.0, 10.0, 200.0, 0.0, 150.0, &SDR41),
        DesignInput::new(20.0, 10.0, 200.0, 10.0, f64::NAN, &SDR41),
        DesignInput::new(20.0, 10.0, 200.0, 10.0, 150.0, &[]),
        DesignInput::new(20.0, 10.0, 200.0, 10.0, 150.0, &[57.38, 45.9]),
        DesignInput::new(20.0, 10.0, 200.0, 10.0, 150.0, &[57.38, 57.38]),
        // L < S 이면 배출구가 없다
        DesignInput::new(20.0, 10.0, 5.0, 10.0, 150.0, &SDR41),
    ];
    for input in cases {
        match size_lateral(&input) {
            Err(SizingError::InvalidInput(_)) => {}
            other => panic!("expected InvalidInput for {input:?}, got {other:?}"),
        }
    }
}

#[test]
fn outlet_count_is_bounded() {
    // 간격이 극히 작으면 배출구 수가 usize 범위를 넘는다
    let huge = DesignInput::new(1.0, 1e-300, 1.0, 1e9, 150.0, &[100.0, 200.0]);
    match size_lateral(&huge) {
        Err(SizingError::InvalidInput(_)) => {}
        other => panic!("expected InvalidInput, got {other:?}"),
    }

    let limit = MAX_OUTLET_COUNT as f64;
    let at_limit = DesignInput::new(1.0, 1.0, limit, 1e9, 150.0, &[100.0, 200.0]);
    let geometry = at_limit.geometry().expect("geometry at limit");
    assert_eq!(geometry.outlet_count, MAX_OUTLET_COUNT);

    let over = DesignInput::new(1.0, 1.0, limit + 1.0, 1e9, 150.0, &[100.0, 200.0]);
    assert!(matches!(over.geometry(), Err(SizingError::InvalidInput(_))));
}
