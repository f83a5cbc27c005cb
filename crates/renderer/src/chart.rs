use std::ops::Range;
use std::path::{Path, PathBuf};

use perf_core::{recorder::elapsed_seconds, PerfError, PerformanceSample, Recorder, Result};
use plotters::coord::Shift;
use plotters::prelude::*;

use crate::style::ChartStyle;

/// Image encoding picked from the output path's extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartFormat {
    /// Raster output through the bitmap backend (PNG, BMP, JPEG).
    Bitmap,
    Svg,
}

impl ChartFormat {
    /// # Errors
    ///
    /// [`PerfError::UnsupportedFormat`] for a missing or unknown extension.
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .ok_or_else(|| {
                PerfError::UnsupportedFormat(format!("'{}' has no extension", path.display()))
            })?;

        match ext.as_str() {
            "png" | "bmp" | "jpg" | "jpeg" => Ok(Self::Bitmap),
            "svg" => Ok(Self::Svg),
            other => Err(PerfError::UnsupportedFormat(format!(
                "'.{other}' (expected png, bmp, jpg or svg)"
            ))),
        }
    }
}

/// What [`plot`] produced.
#[derive(Debug, Clone, PartialEq)]
pub enum Rendered {
    /// Chart written to this file.
    File(PathBuf),
    /// No path given: the chart as an in-memory SVG document.
    Svg(String),
}

/// Render the FPS and memory panels for `samples`.
///
/// With an empty history a notice is logged and `Ok(None)` returned; no
/// chart is produced. Otherwise the chart is written to `path` (format by
/// extension) or, when `path` is `None`, returned as an SVG string.
pub fn plot(
    samples: &[PerformanceSample],
    path: Option<&Path>,
    style: &ChartStyle,
) -> Result<Option<Rendered>> {
    if samples.is_empty() {
        tracing::warn!("No data to plot");
        return Ok(None);
    }

    let series = Series::from_samples(samples);
    let size = (style.width, style.height);

    let rendered = match path {
        Some(path) => {
            match ChartFormat::from_path(path)? {
                ChartFormat::Bitmap => {
                    let root = BitMapBackend::new(path, size).into_drawing_area();
                    draw(&root, &series, style)?;
                    root.present().map_err(render_err)?;
                }
                ChartFormat::Svg => {
                    let root = SVGBackend::new(path, size).into_drawing_area();
                    draw(&root, &series, style)?;
                    root.present().map_err(render_err)?;
                }
            }
            tracing::info!("Chart written to {}", path.display());
            Rendered::File(path.to_path_buf())
        }
        None => {
            let mut svg = String::new();
            {
                let root = SVGBackend::with_string(&mut svg, size).into_drawing_area();
                draw(&root, &series, style)?;
                root.present().map_err(render_err)?;
            }
            tracing::info!("Chart rendered in memory ({} bytes of SVG)", svg.len());
            Rendered::Svg(svg)
        }
    };

    Ok(Some(rendered))
}

/// `plot` as a method on [`Recorder`].
pub trait RecorderPlot {
    fn plot(&self, path: Option<&Path>, style: &ChartStyle) -> Result<Option<Rendered>>;
}

impl RecorderPlot for Recorder {
    fn plot(&self, path: Option<&Path>, style: &ChartStyle) -> Result<Option<Rendered>> {
        plot(self.samples(), path, style)
    }
}

/// Columns pulled out of the history, sharing one x-axis.
#[derive(Debug, Clone, PartialEq)]
struct Series {
    elapsed: Vec<f64>,
    fps: Vec<f64>,
    memory: Vec<f64>,
}

impl Series {
    fn from_samples(samples: &[PerformanceSample]) -> Self {
        Self {
            elapsed: elapsed_seconds(samples),
            fps: samples.iter().map(|s| s.fps).collect(),
            memory: samples.iter().map(|s| s.memory_usage).collect(),
        }
    }

    fn points<'a>(&'a self, values: &'a [f64]) -> impl Iterator<Item = (f64, f64)> + 'a {
        self.elapsed.iter().copied().zip(values.iter().copied())
    }
}

fn draw<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    series: &Series,
    style: &ChartStyle,
) -> Result<()> {
    root.fill(&WHITE).map_err(render_err)?;

    let panels = root.split_evenly((2, 1));
    let x_range = padded_range(&series.elapsed);

    // ── FPS ──────────────────────────────────────────────────────────────────
    let fps_color = style.fps_color.to_plotters();
    let mut upper = ChartBuilder::on(&panels[0])
        .caption(&style.title, (style.font.as_str(), 22))
        .margin(10)
        .x_label_area_size(30)
        .y_label_area_size(60)
        .build_cartesian_2d(x_range.clone(), padded_range(&series.fps))
        .map_err(render_err)?;

    upper
        .configure_mesh()
        .y_desc("FPS")
        .label_style((style.font.as_str(), 14))
        .draw()
        .map_err(render_err)?;

    upper
        .draw_series(LineSeries::new(series.points(&series.fps), fps_color.stroke_width(2)))
        .map_err(render_err)?
        .label("FPS")
        .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], fps_color.stroke_width(2)));

    upper
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .label_font((style.font.as_str(), 14))
        .draw()
        .map_err(render_err)?;

    // ── Memory ───────────────────────────────────────────────────────────────
    let memory_color = style.memory_color.to_plotters();
    let mut lower = ChartBuilder::on(&panels[1])
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(x_range, padded_range(&series.memory))
        .map_err(render_err)?;

    lower
        .configure_mesh()
        .x_desc("Time (s)")
        .y_desc("Memory (MB)")
        .label_style((style.font.as_str(), 14))
        .draw()
        .map_err(render_err)?;

    lower
        .draw_series(LineSeries::new(
            series.points(&series.memory),
            memory_color.stroke_width(2),
        ))
        .map_err(render_err)?
        .label("Memory (MB)")
        .legend(move |(x, y)| {
            PathElement::new(vec![(x, y), (x + 20, y)], memory_color.stroke_width(2))
        });

    lower
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .label_font((style.font.as_str(), 14))
        .draw()
        .map_err(render_err)?;

    Ok(())
}

/// Axis range covering `values` with a 5 % margin. A flat or empty series
/// gets a unit-wide range so the coordinate system is never degenerate.
fn padded_range(values: &[f64]) -> Range<f64> {
    let (lo, hi) = values
        .iter()
        .copied()
        .filter(|v| v.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| (lo.min(v), hi.max(v)));

    if lo > hi {
        return 0.0..1.0;
    }
    if lo == hi {
        return (lo - 0.5)..(hi + 0.5);
    }

    let pad = (hi - lo) * 0.05;
    (lo - pad)..(hi + pad)
}

fn render_err(e: impl std::fmt::Display) -> PerfError {
    PerfError::Render(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn history(n: usize) -> Vec<PerformanceSample> {
        (0..n)
            .map(|i| {
                PerformanceSample::at(
                    1_700_000_000.0 + i as f64 * 0.25,
                    120.0 - i as f64,
                    100 + i as i64 * 5,
                    5000,
                    1024.0 + i as f64 * 50.0,
                )
            })
            .collect()
    }

    #[test]
    fn format_from_extension() {
        assert_eq!(ChartFormat::from_path(Path::new("a.png")).unwrap(), ChartFormat::Bitmap);
        assert_eq!(ChartFormat::from_path(Path::new("a.JPG")).unwrap(), ChartFormat::Bitmap);
        assert_eq!(ChartFormat::from_path(Path::new("out/a.svg")).unwrap(), ChartFormat::Svg);
    }

    #[test]
    fn unknown_or_missing_extension_is_rejected() {
        for path in ["chart.pdf", "chart"] {
            let err = ChartFormat::from_path(Path::new(path)).unwrap_err();
            assert!(matches!(err, PerfError::UnsupportedFormat(_)), "{path}");
        }
    }

    #[test]
    fn empty_history_is_a_no_op() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("chart.png");

        let rendered = plot(&[], Some(&path), &ChartStyle::default()).unwrap();

        assert_eq!(rendered, None);
        assert!(!path.exists());
    }

    #[test]
    fn empty_recorder_plots_nothing() {
        let rendered = Recorder::new().plot(None, &ChartStyle::default()).unwrap();
        assert_eq!(rendered, None);
    }

    #[test]
    fn unsupported_format_fails_before_writing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("chart.pdf");

        let err = plot(&history(3), Some(&path), &ChartStyle::default()).unwrap_err();

        assert!(matches!(err, PerfError::UnsupportedFormat(_)));
        assert!(!path.exists());
    }

    #[test]
    fn writes_png_chart() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("chart.png");

        let rendered = plot(&history(20), Some(&path), &ChartStyle::default()).unwrap();

        assert_eq!(rendered, Some(Rendered::File(path.clone())));
        assert!(std::fs::metadata(&path).unwrap().len() > 0);
    }

    #[test]
    fn writes_svg_chart() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("chart.svg");

        let rendered = plot(&history(20), Some(&path), &ChartStyle::default()).unwrap();

        assert_eq!(rendered, Some(Rendered::File(path.clone())));
        let svg = std::fs::read_to_string(&path).unwrap();
        assert!(svg.contains("<svg"));
    }

    #[test]
    fn without_path_returns_labelled_svg() {
        let rendered = plot(&history(5), None, &ChartStyle::default()).unwrap();

        let svg = match rendered {
            Some(Rendered::Svg(svg)) => svg,
            other => panic!("expected an in-memory SVG, got {other:?}"),
        };
        for label in ["FPS", "Memory (MB)", "Time (s)", "Minetest performance"] {
            assert!(svg.contains(label), "missing {label:?}");
        }
    }

    #[test]
    fn single_sample_still_renders() {
        let rendered = plot(&history(1), None, &ChartStyle::default()).unwrap();
        assert!(matches!(rendered, Some(Rendered::Svg(_))));
    }

    #[test]
    fn recorder_method_renders_recorded_history() {
        let mut recorder = Recorder::new();
        for sample in history(3) {
            recorder.push(sample);
        }

        let rendered = recorder.plot(None, &ChartStyle::default()).unwrap();
        assert!(matches!(rendered, Some(Rendered::Svg(_))));
    }

    #[test]
    fn missing_parent_directory_is_a_render_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent").join("chart.png");

        let err = plot(&history(3), Some(&path), &ChartStyle::default()).unwrap_err();

        assert!(matches!(err, PerfError::Render(_)), "{err:?}");
        assert!(!path.exists());
    }

    #[test]
    fn series_share_an_x_axis_starting_at_zero() {
        let series = Series::from_samples(&history(4));

        assert_eq!(series.elapsed, vec![0.0, 0.25, 0.5, 0.75]);
        assert_eq!(series.fps, vec![120.0, 119.0, 118.0, 117.0]);
        let memory: Vec<(f64, f64)> = series.points(&series.memory).collect();
        assert_eq!(memory[3], (0.75, 1174.0));
    }

    #[test]
    fn padded_range_covers_values() {
        let range = padded_range(&[10.0, 30.0, 20.0]);
        assert_eq!(range, 9.0..31.0);
    }

    #[test]
    fn padded_range_of_flat_series_is_not_degenerate() {
        assert_eq!(padded_range(&[0.0]), -0.5..0.5);
        assert_eq!(padded_range(&[]), 0.0..1.0);
    }
}
