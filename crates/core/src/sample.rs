use chrono::Utc;
use serde::{Deserialize, Serialize};

/// One timestamped snapshot of the four tracked metrics.
///
/// None of the fields are validated: negative FPS or memory values are
/// accepted and flow straight into the statistics.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PerformanceSample {
    /// Frames per second.
    pub fps: f64,
    /// View distance in application units.
    pub view_distance: i64,
    /// Number of live particles.
    pub particle_count: i64,
    /// Memory usage in megabytes.
    pub memory_usage: f64,
    /// Wall-clock seconds since the Unix epoch at creation.
    pub timestamp: f64,
}

impl PerformanceSample {
    /// Build a sample stamped with the current wall-clock time.
    pub fn now(fps: f64, view_distance: i64, particle_count: i64, memory_usage: f64) -> Self {
        Self::at(wall_clock_seconds(), fps, view_distance, particle_count, memory_usage)
    }

    /// Build a sample with an explicit timestamp.
    pub fn at(
        timestamp: f64,
        fps: f64,
        view_distance: i64,
        particle_count: i64,
        memory_usage: f64,
    ) -> Self {
        Self {
            fps,
            view_distance,
            particle_count,
            memory_usage,
            timestamp,
        }
    }
}

/// Current wall-clock time as fractional seconds since the Unix epoch.
pub fn wall_clock_seconds() -> f64 {
    Utc::now().timestamp_micros() as f64 / 1_000_000.0
}
