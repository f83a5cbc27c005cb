use perf_config::ChartConfig;
use plotters::style::RGBColor;

/// 8-bit RGB colour parsed from a hex string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLUE: Self = Self { r: 0x1f, g: 0x77, b: 0xb4 }; // #1f77b4
    pub const RED:  Self = Self { r: 0xd6, g: 0x27, b: 0x28 }; // #d62728

    /// Parse a CSS-style hex color string (`#RRGGBB`, `#` optional).
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim_start_matches('#');
        if hex.len() != 6 {
            return None;
        }

        let byte = |s: &str| -> Option<u8> { u8::from_str_radix(s, 16).ok() };

        Some(Self {
            r: byte(hex.get(0..2)?)?,
            g: byte(hex.get(2..4)?)?,
            b: byte(hex.get(4..6)?)?,
        })
    }

    #[inline]
    pub fn to_plotters(self) -> RGBColor {
        RGBColor(self.r, self.g, self.b)
    }
}

/// Compiled chart style derived from [`ChartConfig`].
///
/// Calling [`ChartStyle::from_config`] is infallible: invalid color strings
/// fall back to the default palette with a warning.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartStyle {
    pub width:        u32,
    pub height:       u32,
    pub title:        String,
    pub fps_color:    Rgb,
    pub memory_color: Rgb,
    pub font:         String,
}

impl ChartStyle {
    pub fn from_config(config: &ChartConfig) -> Self {
        Self {
            width:        config.width.max(1),
            height:       config.height.max(1),
            title:        config.title.clone(),
            fps_color:    color_or(&config.fps_color, Rgb::BLUE, "fps_color"),
            memory_color: color_or(&config.memory_color, Rgb::RED, "memory_color"),
            font:         config.font.clone(),
        }
    }
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self::from_config(&ChartConfig::default())
    }
}

fn color_or(hex: &str, fallback: Rgb, field: &str) -> Rgb {
    Rgb::from_hex(hex).unwrap_or_else(|| {
        tracing::warn!("Invalid {field} '{hex}'; using default.");
        fallback
    })
}
