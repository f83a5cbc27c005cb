use perf_core::{PerfError, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure parsed from `perf-analyzer.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PerfConfig {
    /// Synthetic workload settings.
    pub driver: DriverConfig,
    /// Chart output settings.
    pub chart: ChartConfig,
}

impl PerfConfig {
    /// Reject values the driver or chart can't work with.
    pub fn validate(&self) -> Result<()> {
        let jitters = [
            ("driver.fps_jitter", self.driver.fps_jitter),
            ("driver.memory_growth_jitter", self.driver.memory_growth_jitter),
            ("driver.particle_growth_jitter", self.driver.particle_growth_jitter),
        ];
        if let Some((field, value)) = jitters.iter().find(|(_, v)| !v.is_finite() || *v < 0.0) {
            return Err(PerfError::Config(format!(
                "{field} must be finite and non-negative (got {value})"
            )));
        }

        if self.chart.width == 0 || self.chart.height == 0 {
            return Err(PerfError::Config(format!(
                "chart size must be non-zero (got {}x{})",
                self.chart.width, self.chart.height
            )));
        }

        Ok(())
    }
}

/// Parameters of the synthetic workload the driver records.
///
/// Each reading `i` is derived from the base values plus Gaussian jitter:
/// FPS falls by `fps_drop_per_sample` per step while memory and particles
/// grow by a randomly drawn amount times `i`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DriverConfig {
    /// Number of samples to record.
    pub samples: usize,
    /// Pause between samples in milliseconds.
    pub interval_ms: u64,
    pub base_fps: f64,
    pub fps_drop_per_sample: f64,
    /// Standard deviation of the FPS noise.
    pub fps_jitter: f64,
    /// Starting memory usage in MB.
    pub base_memory: f64,
    pub memory_growth_mean: f64,
    pub memory_growth_jitter: f64,
    pub base_particles: f64,
    pub particle_growth_mean: f64,
    pub particle_growth_jitter: f64,
    pub base_view_distance: i64,
    pub view_distance_step: i64,
    /// Record this process's real resident memory instead of synthetic values.
    pub probe_memory: bool,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            samples:                20,
            interval_ms:            100,
            base_fps:               120.0,
            fps_drop_per_sample:    2.0,
            fps_jitter:             5.0,
            base_memory:            1024.0,
            memory_growth_mean:     50.0,
            memory_growth_jitter:   10.0,
            base_particles:         5000.0,
            particle_growth_mean:   200.0,
            particle_growth_jitter: 50.0,
            base_view_distance:     100,
            view_distance_step:     5,
            probe_memory:           false,
        }
    }
}

/// Chart rendering settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    /// Output file; the extension picks the image format.
    pub output: PathBuf,
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// Caption above the FPS panel.
    pub title: String,
    /// FPS line color (hex, e.g. `"#1f77b4"`).
    pub fps_color: String,
    /// Memory line color.
    pub memory_color: String,
    /// Font family name.
    pub font: String,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            output:       PathBuf::from("minetest_performance.png"),
            width:        1000,
            height:       800,
            title:        "Minetest performance".to_string(),
            fps_color:    "#1f77b4".to_string(), // matplotlib blue
            memory_color: "#d62728".to_string(), // matplotlib red
            font:         "sans-serif".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_is_default() {
        let config: PerfConfig = toml::from_str("").unwrap();
        assert_eq!(config, PerfConfig::default());
    }

    #[test]
    fn defaults_are_valid() {
        assert!(PerfConfig::default().validate().is_ok());
    }

    #[test]
    fn negative_jitter_fails_validation() {
        let mut config = PerfConfig::default();
        config.driver.memory_growth_jitter = -2.0;

        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("driver.memory_growth_jitter"));
    }

    #[test]
    fn zero_height_fails_validation() {
        let mut config = PerfConfig::default();
        config.chart.height = 0;
        assert!(matches!(config.validate(), Err(PerfError::Config(_))));
    }

    #[test]
    fn partial_sections_keep_remaining_defaults() {
        let config: PerfConfig = toml::from_str(
            r##"
            [chart]
            output = "out/run.svg"
            fps_color = "#00ff00"
            "##,
        )
        .unwrap();

        assert_eq!(config.chart.output, PathBuf::from("out/run.svg"));
        assert_eq!(config.chart.fps_color, "#00ff00");
        assert_eq!(config.chart.width, 1000);
        assert_eq!(config.driver, DriverConfig::default());
    }
}
