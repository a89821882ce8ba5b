//! 사이징 결과를 사람이 읽는 표 또는 JSON으로 출력한다.

use std::fmt;

use crate::i18n::{keys, Translator};
use crate::lateral::{SegmentTable, SizingResult};

/// 텍스트 보고서. `to_string()`으로 전체 보고서를 얻는다.
pub struct TextReport<'a> {
    result: &'a SizingResult,
    tr: &'a Translator,
}

impl<'a> TextReport<'a> {
    pub fn new(result: &'a SizingResult, tr: &'a Translator) -> Self {
        Self { result, tr }
    }

    fn write_segments(&self, f: &mut fmt::Formatter<'_>, table: &SegmentTable) -> fmt::Result {
        writeln!(f, "{}", self.tr.t(keys::REPORT_SEGMENT_COLUMNS))?;
        for row in &table.rows {
            writeln!(
                f,
                "{:>4}  {:>10.1}  {:>9.3}  {:>8.2}  {:>8.3}  {:>7.1}  {:>8.2}",
                row.outlet,
                row.cumulative_length_m,
                row.segment_flow_m3_per_h,
                row.diameter_mm,
                row.segment_velocity_m_per_s,
                row.segment_time_s,
                row.cumulative_time_min()
            )?;
        }
        writeln!(
            f,
            "{} {:.2}",
            self.tr.t(keys::REPORT_TRANSIT),
            table.total_transit_time_min
        )
    }
}

impl fmt::Display for TextReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tr = self.tr;
        let r = self.result;

        writeln!(f, "{}", tr.t(keys::REPORT_TITLE))?;
        writeln!(f, "{} {}", tr.t(keys::REPORT_OUTLETS), r.geometry.outlet_count)?;
        writeln!(f, "{} {:.4}", tr.t(keys::REPORT_FACTOR), r.geometry.outlet_factor)?;
        writeln!(
            f,
            "{} {:.4}",
            tr.t(keys::REPORT_OUTLET_DISCHARGE),
            r.geometry.outlet_discharge_m3_per_h
        )?;

        writeln!(f, "{}", tr.t(keys::REPORT_SCAN_HEADING))?;
        writeln!(f, "{}", tr.t(keys::REPORT_SCAN_COLUMNS))?;
        for c in &r.single_diameter_candidates {
            let ok = if c.meets_constraints {
                keys::REPORT_MEETS_YES
            } else {
                keys::REPORT_MEETS_NO
            };
            writeln!(
                f,
                "{:>8.2}  {:>8.2}  {:>9.2}  {}",
                c.diameter_mm,
                c.velocity_m_per_s,
                c.friction_loss_m,
                tr.t(ok)
            )?;
        }

        writeln!(f, "{}", tr.t(keys::REPORT_SINGLE_HEADING))?;
        match &r.single_diameter_solution {
            Some(s) => {
                writeln!(f, "{} {}", tr.t(keys::REPORT_DIAMETER), s.diameter_mm)?;
                writeln!(f, "{} {:.2}", tr.t(keys::REPORT_LOSS), s.friction_loss_m)?;
                writeln!(f, "{} {:.2}", tr.t(keys::REPORT_VELOCITY), s.velocity_m_per_s)?;
            }
            None => writeln!(f, "{}", tr.t(keys::REPORT_SINGLE_NONE))?,
        }

        writeln!(f, "{}", tr.t(keys::REPORT_TWO_HEADING))?;
        match &r.two_diameter_solution {
            Some(s) => {
                writeln!(
                    f,
                    "{} {} mm x {:.1} m, {:.2} m/s",
                    tr.t(keys::REPORT_UPSTREAM),
                    s.upstream_diameter_mm,
                    s.upstream_length_m,
                    s.upstream_velocity_m_per_s
                )?;
                writeln!(
                    f,
                    "{} {} mm x {:.1} m, {:.2} m/s",
                    tr.t(keys::REPORT_DOWNSTREAM),
                    s.downstream_diameter_mm,
                    s.downstream_length_m,
                    s.downstream_velocity_m_per_s
                )?;
                writeln!(f, "{} {:.2}", tr.t(keys::REPORT_LOSS), s.total_friction_loss_m)?;
            }
            None => writeln!(f, "{}", tr.t(keys::REPORT_TWO_NONE))?,
        }

        if let Some(table) = &r.single_diameter_segments {
            writeln!(f, "{}", tr.t(keys::REPORT_SEGMENTS_SINGLE))?;
            self.write_segments(f, table)?;
        }
        if let Some(table) = &r.two_diameter_segments {
            writeln!(f, "{}", tr.t(keys::REPORT_SEGMENTS_TWO))?;
            self.write_segments(f, table)?;
        }
        Ok(())
    }
}

/// 결과 전체를 JSON 문자열로 직렬화한다.
pub fn render_json(result: &SizingResult) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(result)
}
