use serde::{Deserialize, Serialize};

use super::error::SizingError;
use super::hydraulics::{self, DEFAULT_MAX_VELOCITY_M_PER_S};

/// 한 횡지관에 허용하는 최대 배출구 수. 구간표와 분할 탐색 크기의 상한이다.
pub const MAX_OUTLET_COUNT: usize = 100_000;

/// 이중 관경 탐색에서 허용하는 관경 조합 방식.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PairPolicy {
    /// 카탈로그에서 바로 아래 관경과만 조합한다.
    #[default]
    Adjacent,
    /// 상류 관경보다 작은 모든 관경과 조합한다. (가까운 관경부터)
    AnyDescending,
}

/// 설계 한계값 및 탐색 옵션.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DesignOptions {
    /// 허용 최대 유속 [m/s]
    pub max_velocity_m_per_s: f64,
    pub pair_policy: PairPolicy,
    /// 배출구 1개당 토출량 [m3/h]. None이면 총유량 / 배출구 수.
    pub outlet_discharge_m3_per_h: Option<f64>,
}

impl Default for DesignOptions {
    fn default() -> Self {
        Self {
            max_velocity_m_per_s: DEFAULT_MAX_VELOCITY_M_PER_S,
            pair_policy: PairPolicy::Adjacent,
            outlet_discharge_m3_per_h: None,
        }
    }
}

/// 한 번의 사이징 실행에 필요한 입력값.
///
/// 관경 카탈로그는 빌려서 사용하므로 여러 실행이 같은 테이블을 공유할 수 있다.
#[derive(Debug, Clone)]
pub struct DesignInput<'a> {
    /// 입구 총유량 [m3/h]
    pub total_flow_m3_per_h: f64,
    /// 배출구 간격 [m]
    pub outlet_spacing_m: f64,
    /// 횡지관 전체 길이 [m]
    pub total_length_m: f64,
    /// 허용 마찰손실 수두 [m]
    pub available_loss_head_m: f64,
    /// Hazen-Williams 조도계수
    pub hazen_williams_c: f64,
    /// 내경 목록 [mm], 오름차순
    pub diameter_catalog: &'a [f64],
    pub options: DesignOptions,
}

impl<'a> DesignInput<'a> {
    /// 기본 옵션으로 입력을 만든다.
    pub fn new(
        total_flow_m3_per_h: f64,
        outlet_spacing_m: f64,
        total_length_m: f64,
        available_loss_head_m: f64,
        hazen_williams_c: f64,
        diameter_catalog: &'a [f64],
    ) -> Self {
        Self {
            total_flow_m3_per_h,
            outlet_spacing_m,
            total_length_m,
            available_loss_head_m,
            hazen_williams_c,
            diameter_catalog,
            options: DesignOptions::default(),
        }
    }

    pub fn with_options(mut self, options: DesignOptions) -> Self {
        self.options = options;
        self
    }

    /// 입력을 검증하고 실행 동안 변하지 않는 파생값을 계산한다.
    pub fn geometry(&self) -> Result<LateralGeometry, SizingError> {
        require_positive("총유량", self.total_flow_m3_per_h)?;
        require_positive("배출구 간격", self.outlet_spacing_m)?;
        require_positive("횡지관 길이", self.total_length_m)?;
        require_positive("허용 손실수두", self.available_loss_head_m)?;
        require_positive("Hazen-Williams C", self.hazen_williams_c)?;
        require_positive("허용 유속", self.options.max_velocity_m_per_s)?;
        if let Some(q) = self.options.outlet_discharge_m3_per_h {
            require_positive("배출구 토출량", q)?;
        }
        validate_catalog(self.diameter_catalog)?;

        let ratio = (self.total_length_m / self.outlet_spacing_m).floor();
        if !ratio.is_finite() || ratio > MAX_OUTLET_COUNT as f64 {
            return Err(SizingError::invalid(format!(
                "배출구 수는 {MAX_OUTLET_COUNT} 이하여야 합니다. (길이 {} m / 간격 {} m)",
                self.total_length_m, self.outlet_spacing_m
            )));
        }
        let outlet_count = ratio as usize;
        if outlet_count < 1 {
            return Err(SizingError::invalid(format!(
                "배출구 수는 1 이상이어야 합니다. (길이 {} m < 간격 {} m)",
                self.total_length_m, self.outlet_spacing_m
            )));
        }
        let outlet_factor = hydraulics::multi_outlet_factor(outlet_count)?;
        let outlet_discharge = self
            .options
            .outlet_discharge_m3_per_h
            .unwrap_or(self.total_flow_m3_per_h / outlet_count as f64);

        Ok(LateralGeometry {
            outlet_count,
            outlet_discharge_m3_per_h: outlet_discharge,
            outlet_factor,
        })
    }
}

/// 실행 단위로 한 번 계산되는 파생값.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LateralGeometry {
    /// floor(L / S)
    pub outlet_count: usize,
    /// 배출구당 토출량 [m3/h]
    pub outlet_discharge_m3_per_h: f64,
    /// 다공 보정계수 F
    pub outlet_factor: f64,
}

fn require_positive(label: &str, value: f64) -> Result<(), SizingError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(SizingError::invalid(format!(
            "{label}은(는) 0보다 큰 유한값이어야 합니다: {value}"
        )))
    }
}

/// 관경 카탈로그가 비어 있지 않고 양수이며 엄격히 증가하는지 확인한다.
pub fn validate_catalog(diameters_mm: &[f64]) -> Result<(), SizingError> {
    if diameters_mm.is_empty() {
        return Err(SizingError::invalid("관경 카탈로그가 비어 있습니다."));
    }
    for d in diameters_mm {
        if !(d.is_finite() && *d > 0.0) {
            return Err(SizingError::invalid(format!(
                "관경은 0보다 커야 합니다: {d} mm"
            )));
        }
    }
    if let Some(w) = diameters_mm.windows(2).find(|w| w[1] <= w[0]) {
        return Err(SizingError::invalid(format!(
            "관경 카탈로그는 오름차순이어야 합니다: {} mm 다음 {} mm",
            w[0], w[1]
        )));
    }
    Ok(())
}
