//! perf-analyzer: record a performance run, summarise it and chart it.
//!
//! Run with:  `RUST_LOG=info perf-analyzer --samples 20`

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use perf_core::{recommend_view_distance, Recorder};
use perf_renderer::{ChartStyle, RecorderPlot, Rendered};
use rand::{rngs::StdRng, SeedableRng};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let args = cli::Args::parse();

    // RUST_LOG wins; otherwise -v picks the default level.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(args.log_level())),
        )
        .with_writer(std::io::stderr)
        .init();

    tracing::info!("perf-analyzer v{} starting", env!("CARGO_PKG_VERSION"));

    let config_path = args.config.clone().unwrap_or_else(perf_config::default_path);
    let mut config = perf_config::load(&config_path)?;
    args.apply(&mut config);

    let rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut recorder = Recorder::new();
    perf_system::run(&mut recorder, &config.driver, rng)?;

    let analysis = recorder.analyze();
    let json = serde_json::to_string_pretty(&analysis).context("serialising analysis")?;
    println!("Results: {json}");

    match recommend_view_distance(&recorder.fps_values(), &recorder.view_distances()) {
        Ok(distance) => println!("Recommended view distance: {distance}"),
        Err(e) => tracing::warn!("No view distance recommendation: {e}"),
    }

    if args.no_plot {
        return Ok(());
    }

    let style = ChartStyle::from_config(&config.chart);
    let path = (!args.svg_stdout).then_some(config.chart.output.as_path());

    if let Some(Rendered::Svg(svg)) = recorder.plot(path, &style)? {
        println!("{svg}");
    }

    Ok(())
}
