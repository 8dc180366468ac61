//! Public types and constants for the visualization module.

/// Canvas width used by the published page.
pub const DEFAULT_WIDTH: u32 = 1000;
/// Canvas height used by the published page.
pub const DEFAULT_HEIGHT: u32 = 600;
/// Margin between the canvas edge and the treemap on every side.
pub const DEFAULT_PADDING: u32 = 80;

/// Label font size inside tiles and legend (px).
pub const LABEL_FONT_PX: u32 = 10;
/// Fill opacity shared by tiles and legend swatches.
pub const FILL_OPACITY: f64 = 0.6;

/// Frame geometry for a render.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderConfig {
    pub width: u32,
    pub height: u32,
    pub padding: u32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            padding: DEFAULT_PADDING,
        }
    }
}

impl RenderConfig {
    /// Width of the area the treemap fills.
    pub fn chart_width(&self) -> f64 {
        self.width.saturating_sub(self.padding.saturating_mul(2)) as f64
    }

    /// Height of the area the treemap fills.
    pub fn chart_height(&self) -> f64 {
        self.height.saturating_sub(self.padding.saturating_mul(2)) as f64
    }
}

/// Pointer position in surface coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Output kinds, chosen from the output path's extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputKind {
    /// Bare SVG document.
    Svg,
    /// HTML entry page with the SVG inlined.
    Html,
    /// Raster preview.
    Png,
}

impl OutputKind {
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "svg" => Some(Self::Svg),
            "html" | "htm" => Some(Self::Html),
            "png" => Some(Self::Png),
            _ => None,
        }
    }
}
