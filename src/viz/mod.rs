//! Visualization: render the movie treemap to **SVG**, an **HTML** page, or a **PNG** preview.
//!
//! - Squarified tiles colored by genre, each clipped to its own bounds
//! - Greedy two-word label wrapping inside tiles
//! - Legend band below the chart in fixed genre order
//! - Tooltips driven by explicit pointer events against the owned surface
//!
//! Rendering is a strict sequence on one [`Surface`]: tiles first, legend second.

pub mod legend;
pub mod raster;
pub mod surface;
pub mod text;
pub mod tiles;
pub mod tooltip;
pub mod types;
pub mod util;

// Re-export types for public API
pub use surface::{Element, Surface};
pub use tooltip::{Interaction, PointerEvent};
pub use types::{OutputKind, Point, RenderConfig};
pub use util::{ColorScale, MOVIE_GENRES};

use crate::hierarchy::Hierarchy;
use crate::layout::{Layout, treemap};
use crate::models::DatasetNode;
use crate::page::{PageConfig, render_page};
use anyhow::{Context, Result, anyhow};
use std::path::Path;

/// A finished render: the drawn surface, the layout it was drawn from, and
/// the color scale as extended while drawing.
#[derive(Debug, Clone)]
pub struct Rendered {
    pub config: RenderConfig,
    pub hierarchy: Hierarchy,
    pub layout: Layout,
    pub surface: Surface,
    pub scale: ColorScale,
}

impl Rendered {
    /// Feed pointer events through a fresh [`Interaction`].
    pub fn apply_pointer_events(&mut self, events: &[PointerEvent]) {
        let mut interaction = Interaction::new(&self.layout, self.config.padding as f64);
        for &event in events {
            interaction.handle(&mut self.surface, event);
        }
    }

    pub fn to_svg(&self) -> String {
        self.surface.to_svg()
    }
}

/// Lay out `dataset` and draw tiles, then the legend.
pub fn render(dataset: &DatasetNode, cfg: &RenderConfig) -> Rendered {
    let hierarchy = Hierarchy::from_dataset(dataset);
    let layout = treemap(&hierarchy, cfg.chart_width(), cfg.chart_height());
    let mut surface = Surface::new(cfg.width, cfg.height);
    let mut scale = ColorScale::movie_genres();

    tiles::draw_tiles(&mut surface, &layout, cfg, &mut scale);
    legend::draw_legend(&mut surface, cfg, scale.entries());

    log::info!(
        "rendered {} tiles ({}x{}, total value {})",
        layout.leaves.len(),
        cfg.width,
        cfg.height,
        util::format_value(hierarchy.root().value)
    );
    Rendered {
        config: *cfg,
        hierarchy,
        layout,
        surface,
        scale,
    }
}

/// Write `rendered` to `out_path`; the extension picks SVG, HTML, or PNG.
pub fn save<P: AsRef<Path>>(
    rendered: &Rendered,
    out_path: P,
    page: &PageConfig,
    font: Option<&Path>,
) -> Result<OutputKind> {
    let out_path = out_path.as_ref();
    let kind = out_path
        .extension()
        .and_then(|e| e.to_str())
        .and_then(OutputKind::from_extension)
        .ok_or_else(|| {
            anyhow!(
                "unsupported output {}, expected .svg, .html or .png",
                out_path.display()
            )
        })?;
    match kind {
        OutputKind::Svg => std::fs::write(out_path, rendered.to_svg())
            .with_context(|| format!("write {}", out_path.display()))?,
        OutputKind::Html => std::fs::write(out_path, render_page(&rendered.to_svg(), page))
            .with_context(|| format!("write {}", out_path.display()))?,
        OutputKind::Png => raster::save_png(
            &rendered.layout,
            &rendered.config,
            &rendered.scale,
            out_path,
            font,
        )?,
    }
    Ok(kind)
}
