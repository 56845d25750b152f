use super::timing::TimingBreakdown;
use crate::image::PgmHeader;
use serde::Serialize;

/// Summary of one pipeline run.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RunReport {
    /// Header of the input file; `None` when the run started from a grid.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header: Option<PgmHeader>,
    pub max_magnitude: f64,
    /// True when the gradient was zero everywhere.
    pub degenerate: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub threshold: Option<f64>,
    /// Output pixels at full brightness (255).
    pub lit_pixels: usize,
    pub timings: TimingBreakdown,
}

impl RunReport {
    /// One-line human readable summary.
    pub fn summary(&self) -> String {
        let threshold = self
            .threshold
            .map(|t| format!("{t:.4}"))
            .unwrap_or_else(|| "-".to_string());
        format!(
            "max magnitude {:.3}, threshold {}, {} pixels at 255, {:.3} ms",
            self.max_magnitude, threshold, self.lit_pixels, self.timings.total_ms
        )
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_uses_camel_case_and_skips_missing_fields() {
        let report = RunReport {
            max_magnitude: 1020.0,
            lit_pixels: 508,
            ..Default::default()
        };
        let json = report.to_json();
        assert!(json.contains("\"maxMagnitude\":1020.0"));
        assert!(json.contains("\"litPixels\":508"));
        assert!(!json.contains("threshold"));
        assert!(!json.contains("header"));
    }

    #[test]
    fn summary_mentions_threshold() {
        let report = RunReport {
            threshold: Some(0.5),
            ..Default::default()
        };
        assert!(report.summary().contains("threshold 0.5000"));
    }
}
