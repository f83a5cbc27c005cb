use std::path::PathBuf;

use clap::Parser;
use perf_config::PerfConfig;

/// Records a synthetic performance run, prints its statistics and plots it.
#[derive(Parser, Debug)]
#[command(name = "perf-analyzer", version, about = "FPS / memory performance analyzer")]
pub struct Args {
    /// Path to the config file (default: $XDG_CONFIG_HOME/perf-analyzer/perf-analyzer.toml)
    #[arg(short = 'c', long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Number of samples to record
    #[arg(short = 'n', long = "samples", value_name = "N")]
    pub samples: Option<usize>,

    /// Pause between samples in milliseconds
    #[arg(long = "interval-ms", value_name = "MS")]
    pub interval_ms: Option<u64>,

    /// Chart output path; the extension picks the format (png, svg, ...)
    #[arg(short = 'o', long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Render the chart as SVG to stdout instead of writing a file
    #[arg(long = "svg-stdout", conflicts_with_all = ["output", "no_plot"])]
    pub svg_stdout: bool,

    /// Skip plotting entirely
    #[arg(long = "no-plot")]
    pub no_plot: bool,

    /// Record this process's real memory usage instead of synthetic values
    #[arg(long = "probe-memory")]
    pub probe_memory: bool,

    /// Seed for the synthetic workload (random when omitted)
    #[arg(long = "seed", value_name = "SEED")]
    pub seed: Option<u64>,

    /// Increase verbosity (-v, -vv)
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count
    )]
    pub verbosity_level: u8,
}

impl Args {
    /// Fold command-line overrides into the loaded configuration.
    pub fn apply(&self, config: &mut PerfConfig) {
        if let Some(samples) = self.samples {
            config.driver.samples = samples;
        }
        if let Some(interval_ms) = self.interval_ms {
            config.driver.interval_ms = interval_ms;
        }
        if let Some(output) = &self.output {
            config.chart.output = output.clone();
        }
        if self.probe_memory {
            config.driver.probe_memory = true;
        }
    }

    /// Default log filter when `RUST_LOG` is unset.
    pub fn log_level(&self) -> &'static str {
        match self.verbosity_level {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    }
}
