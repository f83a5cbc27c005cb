use crate::{sample::PerformanceSample, stats};
use serde::Serialize;

/// Message carried by [`Analysis::Empty`].
pub const NO_DATA_MESSAGE: &str = "no data to analyze";

/// Summary statistics over a non-empty history.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PerformanceSummary {
    pub avg_fps: f64,
    pub min_fps: f64,
    pub max_fps: f64,
    /// Mean memory usage in MB.
    pub avg_memory: f64,
    /// Least-squares slope of memory against sample index, in MB per sample.
    pub memory_trend: f64,
}

/// Result of analysing a history.
///
/// Serialises either as the five summary keys or as a lone `"error"` key,
/// so callers reading the JSON must check for `"error"` first.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Analysis {
    Summary(PerformanceSummary),
    Empty { error: String },
}

impl Analysis {
    pub fn empty() -> Self {
        Self::Empty {
            error: NO_DATA_MESSAGE.to_string(),
        }
    }

    #[must_use]
    pub fn summary(&self) -> Option<&PerformanceSummary> {
        match self {
            Self::Summary(s) => Some(s),
            Self::Empty { .. } => None,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty { .. })
    }
}

/// Compute summary statistics over `samples` in insertion order.
pub fn analyze(samples: &[PerformanceSample]) -> Analysis {
    let fps: Vec<f64> = samples.iter().map(|s| s.fps).collect();
    let memory: Vec<f64> = samples.iter().map(|s| s.memory_usage).collect();

    match summarize(&fps, &memory) {
        Some(s) => Analysis::Summary(s),
        None => Analysis::empty(),
    }
}

fn summarize(fps: &[f64], memory: &[f64]) -> Option<PerformanceSummary> {
    Some(PerformanceSummary {
        avg_fps: stats::mean(fps)?,
        min_fps: stats::min(fps)?,
        max_fps: stats::max(fps)?,
        avg_memory: stats::mean(memory)?,
        memory_trend: stats::linear_slope(memory)?,
    })
}
