//! Synthetic workload used to exercise the recorder without a live game.

use perf_config::DriverConfig;
use perf_core::{PerfError, Recorder, Result};
use rand::Rng;
use rand_distr::{Distribution, Normal};
use std::time::Duration;

use crate::memory;

/// One generated set of metrics, before it is timestamped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reading {
    pub fps: f64,
    pub view_distance: i64,
    pub particle_count: i64,
    pub memory_usage: f64,
}

/// Generates a degrading workload: FPS falls while memory, particles and
/// view distance grow with the sample index.
#[derive(Debug)]
pub struct SyntheticWorkload<R> {
    rng: R,
    fps_noise: Normal<f64>,
    memory_growth: Normal<f64>,
    particle_growth: Normal<f64>,
    base_fps: f64,
    fps_drop_per_sample: f64,
    base_memory: f64,
    base_particles: f64,
    base_view_distance: i64,
    view_distance_step: i64,
}

impl<R: Rng> SyntheticWorkload<R> {
    /// # Errors
    ///
    /// [`PerfError::Config`] if any jitter is negative or not finite.
    pub fn new(config: &DriverConfig, rng: R) -> Result<Self> {
        Ok(Self {
            rng,
            fps_noise: normal("fps_jitter", 0.0, config.fps_jitter)?,
            memory_growth: normal(
                "memory_growth_jitter",
                config.memory_growth_mean,
                config.memory_growth_jitter,
            )?,
            particle_growth: normal(
                "particle_growth_jitter",
                config.particle_growth_mean,
                config.particle_growth_jitter,
            )?,
            base_fps: config.base_fps,
            fps_drop_per_sample: config.fps_drop_per_sample,
            base_memory: config.base_memory,
            base_particles: config.base_particles,
            base_view_distance: config.base_view_distance,
            view_distance_step: config.view_distance_step,
        })
    }

    /// Generate the reading for sample `index`.
    pub fn reading(&mut self, index: usize) -> Reading {
        let i = index as f64;

        let fps = self.base_fps - i * self.fps_drop_per_sample + self.fps_noise.sample(&mut self.rng);
        let memory_usage = self.base_memory + i * self.memory_growth.sample(&mut self.rng);
        let particles = self.base_particles + i * self.particle_growth.sample(&mut self.rng);

        Reading {
            fps: fps.max(1.0),
            view_distance: self.base_view_distance + index as i64 * self.view_distance_step,
            particle_count: particles.max(0.0) as i64,
            memory_usage,
        }
    }
}

fn normal(field: &str, mean: f64, std_dev: f64) -> Result<Normal<f64>> {
    if !std_dev.is_finite() || std_dev < 0.0 {
        return Err(PerfError::Config(format!(
            "{field} must be a finite, non-negative deviation (got {std_dev})"
        )));
    }
    Normal::new(mean, std_dev).map_err(|e| PerfError::Config(format!("{field}: {e}")))
}

/// Record `config.samples` synthetic readings into `recorder`, pausing
/// `config.interval_ms` between them.
///
/// With `probe_memory` set, the memory column comes from this process's
/// resident memory instead of the synthetic model.
pub fn run<R: Rng>(recorder: &mut Recorder, config: &DriverConfig, rng: R) -> Result<()> {
    let mut workload = SyntheticWorkload::new(config, rng)?;
    let interval = Duration::from_millis(config.interval_ms);

    tracing::info!(
        "Recording {} synthetic samples every {} ms",
        config.samples,
        config.interval_ms
    );

    for i in 0..config.samples {
        let mut reading = workload.reading(i);

        if config.probe_memory {
            match memory::process_memory_mb() {
                Some(mb) => {
                    tracing::debug!("Sample {i}: process memory {}", memory::format_megabytes(mb));
                    reading.memory_usage = mb;
                }
                None => tracing::warn!("Process memory unavailable; keeping synthetic value."),
            }
        }

        recorder.record(
            reading.fps,
            reading.view_distance,
            reading.particle_count,
            reading.memory_usage,
        );

        if i + 1 < config.samples && !interval.is_zero() {
            std::thread::sleep(interval);
        }
    }

    Ok(())
}
