use serde::Serialize;
use std::time::Instant;

/// Elapsed time of one pipeline stage.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StageTiming {
    pub label: &'static str,
    pub elapsed_ms: f64,
}

/// Per-stage timings of a run, in execution order.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimingBreakdown {
    pub total_ms: f64,
    pub stages: Vec<StageTiming>,
}

impl TimingBreakdown {
    pub fn push(&mut self, label: &'static str, elapsed_ms: f64) {
        self.total_ms += elapsed_ms;
        self.stages.push(StageTiming { label, elapsed_ms });
    }

    /// Run `f`, record its wall time under `label` and return its output.
    pub fn measure<T>(&mut self, label: &'static str, f: impl FnOnce() -> T) -> T {
        let start = Instant::now();
        let out = f();
        self.push(label, start.elapsed().as_secs_f64() * 1000.0);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn measure_records_stages_in_order() {
        let mut timings = TimingBreakdown::default();
        let v = timings.measure("first", || 2 + 2);
        timings.push("second", 1.5);
        assert_eq!(v, 4);
        let labels: Vec<_> = timings.stages.iter().map(|s| s.label).collect();
        assert_eq!(labels, ["first", "second"]);
        assert_eq!(timings.stages[1].elapsed_ms, 1.5);
        assert!(timings.total_ms >= 1.5);
    }
}
