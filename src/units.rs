//! 입력 단위 정의 및 변환. 내부 계산 기준은 m3/h 와 m 이다.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// 유량 단위.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
pub enum FlowUnit {
    /// m3/h
    #[value(name = "m3h")]
    CubicMeterPerHour,
    /// L/s
    #[value(name = "lps")]
    LiterPerSecond,
    /// L/min
    #[value(name = "lpm")]
    LiterPerMinute,
    /// US gal/min
    #[value(name = "gpm")]
    UsGallonPerMinute,
}

impl FlowUnit {
    pub fn symbol(&self) -> &'static str {
        match self {
            FlowUnit::CubicMeterPerHour => "m3/h",
            FlowUnit::LiterPerSecond => "L/s",
            FlowUnit::LiterPerMinute => "L/min",
            FlowUnit::UsGallonPerMinute => "gpm",
        }
    }
}

/// 길이/수두 단위.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
pub enum LengthUnit {
    #[value(name = "m")]
    Meter,
    #[value(name = "ft")]
    Foot,
}

impl LengthUnit {
    pub fn symbol(&self) -> &'static str {
        match self {
            LengthUnit::Meter => "m",
            LengthUnit::Foot => "ft",
        }
    }
}

const US_GALLON_M3: f64 = 0.003_785_411_784;
const FOOT_M: f64 = 0.3048;

/// 유량을 m3/h 로 환산한다.
pub fn flow_to_m3_per_h(value: f64, unit: FlowUnit) -> f64 {
    match unit {
        FlowUnit::CubicMeterPerHour => value,
        FlowUnit::LiterPerSecond => value * 3.6,
        FlowUnit::LiterPerMinute => value * 0.06,
        FlowUnit::UsGallonPerMinute => value * US_GALLON_M3 * 60.0,
    }
}

/// 길이를 m 로 환산한다.
pub fn length_to_m(value: f64, unit: LengthUnit) -> f64 {
    match unit {
        LengthUnit::Meter => value,
        LengthUnit::Foot => value * FOOT_M,
    }
}
