use crate::{
    analysis::{self, Analysis},
    sample::PerformanceSample,
};

/// Append-only, insertion-ordered history of performance samples.
///
/// The recorder is not synchronised; wrap it in a `Mutex` to share it
/// between threads.
#[derive(Debug, Clone, Default)]
pub struct Recorder {
    history: Vec<PerformanceSample>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one sample stamped with the current wall-clock time.
    pub fn record(&mut self, fps: f64, view_distance: i64, particle_count: i64, memory_usage: f64) {
        self.push(PerformanceSample::now(
            fps,
            view_distance,
            particle_count,
            memory_usage,
        ));
    }

    /// Append an already-built sample.
    pub fn push(&mut self, sample: PerformanceSample) {
        tracing::debug!(
            fps = sample.fps,
            view_distance = sample.view_distance,
            particle_count = sample.particle_count,
            memory_usage = sample.memory_usage,
            "recorded sample #{}",
            self.history.len()
        );
        self.history.push(sample);
    }

    pub fn samples(&self) -> &[PerformanceSample] {
        &self.history
    }

    pub fn len(&self) -> usize {
        self.history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    /// Summary statistics over the whole history.
    pub fn analyze(&self) -> Analysis {
        analysis::analyze(&self.history)
    }

    pub fn fps_values(&self) -> Vec<f64> {
        self.history.iter().map(|s| s.fps).collect()
    }

    pub fn view_distances(&self) -> Vec<i64> {
        self.history.iter().map(|s| s.view_distance).collect()
    }

    /// Seconds since the first sample, one entry per sample.
    pub fn elapsed_seconds(&self) -> Vec<f64> {
        elapsed_seconds(&self.history)
    }
}

/// Offset of each sample's timestamp from the first one, so the series
/// always starts at zero.
pub fn elapsed_seconds(samples: &[PerformanceSample]) -> Vec<f64> {
    let Some(first) = samples.first() else {
        return Vec::new();
    };
    samples.iter().map(|s| s.timestamp - first.timestamp).collect()
}
