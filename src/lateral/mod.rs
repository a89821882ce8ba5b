//! 다공 횡지관(점적/스프링클러 지관) 관경 설계 모듈 모음.
//!
//! 입력 검증 → 단일 관경 선정 → 이중 관경 탐색 → 구간 전파 순으로 계산하며,
//! 모든 계산은 순수 함수로 외부 상태를 갖지 않는다.

pub mod design;
pub mod error;
pub mod hydraulics;
pub mod progressive;
pub mod segments;
pub mod single_diameter;
pub mod sizing;

pub use design::{DesignInput, DesignOptions, LateralGeometry, PairPolicy};
pub use error::{HydraulicError, SizingError};
pub use progressive::TwoDiameterSolution;
pub use segments::{PipeLayout, SegmentRow, SegmentTable};
pub use single_diameter::{SingleDiameterCandidate, SingleDiameterSolution};
pub use sizing::{size_lateral, SizingResult};
