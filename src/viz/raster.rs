//! PNG preview of a render through the Plotters bitmap backend.
//!
//! Tiles and legend swatches are always drawn. Text needs a font registered with
//! Plotters' `ab_glyph` path, which does not discover OS fonts; without one the
//! preview is drawn without labels.

use anyhow::{Context, Result, anyhow};
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::FontStyle;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use plotters_bitmap::BitMapBackend;
use std::path::Path;
use std::sync::OnceLock;

use super::legend::{SPACING_PX, SWATCH_PX, legend_origin};
use super::text::wrap_label;
use super::types::{FILL_OPACITY, LABEL_FONT_PX, RenderConfig};
use super::util::{ColorScale, Rgb};
use crate::layout::Layout;

static FONT_REGISTERED: OnceLock<bool> = OnceLock::new();

/// Register a TTF file as Plotters' "sans-serif" family. Only the first call
/// has an effect; returns whether a font is available.
pub fn register_font(path: Option<&Path>) -> Result<bool> {
    if let Some(done) = FONT_REGISTERED.get() {
        return Ok(*done);
    }
    let Some(path) = path else {
        return Ok(false);
    };
    let bytes = std::fs::read(path).with_context(|| format!("read font {}", path.display()))?;
    // Plotters keeps registered font data for the life of the process.
    let bytes: &'static [u8] = Box::leak(bytes.into_boxed_slice());
    // Legend labels ask for bold; the same face stands in for it.
    for style in [FontStyle::Normal, FontStyle::Bold] {
        plotters::style::register_font("sans-serif", style, bytes)
            .map_err(|_| anyhow!("{} is not a usable TrueType font", path.display()))?;
    }
    Ok(*FONT_REGISTERED.get_or_init(|| true))
}

/// Draw `layout` plus the genre legend into a PNG at `out_path`.
pub fn save_png<P: AsRef<Path>>(
    layout: &Layout,
    cfg: &RenderConfig,
    scale: &ColorScale,
    out_path: P,
    font: Option<&Path>,
) -> Result<()> {
    let with_text = register_font(font)?;
    if !with_text {
        log::warn!("no font registered, PNG preview is drawn without labels");
    }
    let out_path = out_path.as_ref();
    let path_string = out_path.to_string_lossy().into_owned();
    let root = BitMapBackend::new(path_string.as_str(), (cfg.width, cfg.height)).into_drawing_area();
    draw_preview(&root, layout, cfg, scale.clone(), with_text)?;
    root.present().map_err(|e| anyhow!("{:?}", e))?;
    Ok(())
}

fn draw_preview<DB>(
    root: &DrawingArea<DB, Shift>,
    layout: &Layout,
    cfg: &RenderConfig,
    mut scale: ColorScale,
    with_text: bool,
) -> Result<()>
where
    DB: DrawingBackend,
{
    root.fill(&WHITE).map_err(|e| anyhow!("{:?}", e))?;
    let pad = cfg.padding as f64;
    let label_font = ("sans-serif", LABEL_FONT_PX).into_font().color(&BLACK);

    for tile in &layout.leaves {
        let r = tile.rect;
        let fill = blended(&scale.color(&tile.category));
        let top_left = ((r.x0 + pad).round() as i32, (r.y0 + pad).round() as i32);
        let bottom_right = ((r.x1 + pad).round() as i32, (r.y1 + pad).round() as i32);
        root.draw(&Rectangle::new([top_left, bottom_right], fill.filled()))
            .map_err(|e| anyhow!("{:?}", e))?;
        root.draw(&Rectangle::new([top_left, bottom_right], WHITE.stroke_width(1)))
            .map_err(|e| anyhow!("{:?}", e))?;

        if with_text {
            for (i, line) in wrap_label(r.width(), &tile.name).iter().enumerate() {
                // SVG places label baselines; Plotters anchors text at the top.
                let y = top_left.1 + 15 + 12 * i as i32 - LABEL_FONT_PX as i32;
                if y + LABEL_FONT_PX as i32 > bottom_right.1 {
                    break;
                }
                root.draw(&Text::new(line.clone(), (top_left.0 + 5, y), label_font.clone()))
                    .map_err(|e| anyhow!("{:?}", e))?;
            }
        }
    }

    let (lx, ly) = legend_origin(cfg);
    let legend_font = ("sans-serif", LABEL_FONT_PX)
        .into_font()
        .style(FontStyle::Bold)
        .color(&BLACK)
        .pos(Pos::new(HPos::Center, VPos::Top));
    for (i, (genre, color)) in scale.entries().enumerate() {
        let x = lx + i as f64 * SPACING_PX;
        let top_left = (x.round() as i32, ly.round() as i32);
        let bottom_right = ((x + SWATCH_PX).round() as i32, (ly + SWATCH_PX).round() as i32);
        root.draw(&Rectangle::new([top_left, bottom_right], blended(color).filled()))
            .map_err(|e| anyhow!("{:?}", e))?;
        if with_text {
            let center = ((x + SWATCH_PX / 2.0).round() as i32, bottom_right.1 + 3);
            root.draw(&Text::new(genre, center, legend_font.clone()))
                .map_err(|e| anyhow!("{:?}", e))?;
        }
    }
    Ok(())
}

fn blended(hex: &str) -> RGBColor {
    let Rgb(r, g, b) = Rgb::from_hex(hex).unwrap_or(Rgb(0, 0, 0)).over_white(FILL_OPACITY);
    RGBColor(r, g, b)
}
