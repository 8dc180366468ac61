//! Tile drawing: one clipped, colored, labeled group per leaf.

use super::surface::{Element, Surface};
use super::text::{ClipIds, wrap_label};
use super::types::{FILL_OPACITY, LABEL_FONT_PX, RenderConfig};
use super::util::{ColorScale, fmt_num, format_value};
use crate::layout::{Layout, LeafTile};

/// Line pitch of stacked tile labels (px).
const LABEL_LINE_PX: f64 = 12.0;
/// Baseline of the first label line, from the tile's top edge (px).
const LABEL_TOP_PX: f64 = 15.0;
/// Label inset from the tile's left edge (px).
const LABEL_LEFT_PX: f64 = 5.0;

/// Append one group per leaf in `layout`. Colors come from `scale`, which is
/// extended in draw order for categories it does not know.
pub fn draw_tiles(surface: &mut Surface, layout: &Layout, cfg: &RenderConfig, scale: &mut ColorScale) {
    let mut clip_ids = ClipIds::new();
    let pad = cfg.padding as f64;
    for tile in &layout.leaves {
        let clip_id = clip_ids.next(&tile.name);
        let fill = scale.color(&tile.category);
        surface.append(tile_group(tile, pad, &clip_id, &fill));
    }
    log::debug!("drew {} tiles", layout.leaves.len());
}

fn tile_group(tile: &LeafTile, pad: f64, clip_id: &str, fill: &str) -> Element {
    let r = tile.rect;
    let (w, h) = (r.width(), r.height());
    let value = format_value(tile.value);

    let clip = Element::new("clipPath")
        .attr("id", clip_id)
        .child(Element::new("rect").num("width", w).num("height", h));

    let rect = Element::new("rect")
        .attr("class", "tile")
        .attr("data-name", &tile.name)
        .attr("data-category", &tile.category)
        .attr("data-value", &value)
        .attr("fill", fill)
        .num("fill-opacity", FILL_OPACITY)
        .num("width", w)
        .num("height", h);

    let mut label = Element::new("text")
        .attr("clip-path", format!("url(#{clip_id})"))
        .attr("text-anchor", "start");
    for (i, line) in wrap_label(w, &tile.name).into_iter().enumerate() {
        label.push(
            Element::new("tspan")
                .attr("font-size", LABEL_FONT_PX)
                .num("y", i as f64 * LABEL_LINE_PX + LABEL_TOP_PX)
                .num("x", LABEL_LEFT_PX)
                .text(line),
        );
    }

    // Native hover text for viewers without pointer handling.
    let title = Element::new("title").text(format!(
        "{}\n{}\n{}",
        tile.name.trim(),
        tile.category,
        value
    ));

    Element::new("g")
        .attr(
            "transform",
            format!(
                "translate({}, {})",
                fmt_num(r.x0 + pad),
                fmt_num(r.y0 + pad)
            ),
        )
        .child(clip)
        .child(rect)
        .child(label)
        .child(title)
}
