//! Legend band below the treemap: one swatch and one centered label per category.

use super::surface::{Element, Surface};
use super::types::{FILL_OPACITY, LABEL_FONT_PX, RenderConfig};
use super::util::fmt_num;

pub const LEGEND_ID: &str = "legend";
pub const LEGEND_WIDTH: u32 = 500;
pub const LEGEND_HEIGHT: u32 = 50;
/// Swatch edge length (px).
pub const SWATCH_PX: f64 = 30.0;
/// Horizontal distance between consecutive swatches (px).
pub const SPACING_PX: f64 = 60.0;
/// Gap between the bottom of the chart area and the legend band (px).
const LEGEND_GAP_PX: f64 = 20.0;
/// Horizontal centering offset; the band is laid out as if 400px wide.
const LEGEND_NOMINAL_WIDTH: f64 = 400.0;

/// Top-left corner of the legend band on the canvas.
pub fn legend_origin(cfg: &RenderConfig) -> (f64, f64) {
    let x = (cfg.width as f64 - LEGEND_NOMINAL_WIDTH) / 2.0;
    let y = cfg.chart_height() + cfg.padding as f64 + LEGEND_GAP_PX;
    (x, y)
}

/// Append the legend group. `entries` are (category, color) pairs in display order.
pub fn draw_legend<'a>(
    surface: &mut Surface,
    cfg: &RenderConfig,
    entries: impl IntoIterator<Item = (&'a str, &'a str)>,
) {
    let entries: Vec<(&str, &str)> = entries.into_iter().collect();
    let (x, y) = legend_origin(cfg);
    let mut group = Element::new("g")
        .attr("id", LEGEND_ID)
        .attr("width", LEGEND_WIDTH)
        .attr("height", LEGEND_HEIGHT)
        .attr(
            "transform",
            format!(
                "translate({}, {})",
                fmt_num(x),
                fmt_num(y)
            ),
        );

    for (i, (_, color)) in entries.iter().enumerate() {
        group.push(
            Element::new("rect")
                .attr("class", "legend-item")
                .attr("fill", color)
                .num("fill-opacity", FILL_OPACITY)
                .num("width", SWATCH_PX)
                .num("height", SWATCH_PX)
                .num("x", i as f64 * SPACING_PX),
        );
    }
    for (i, (category, _)) in entries.iter().enumerate() {
        group.push(
            Element::new("text")
                .num("x", i as f64 * SPACING_PX + SWATCH_PX / 2.0)
                .num("y", SWATCH_PX + 12.0)
                .attr("text-anchor", "middle")
                .attr("font-size", LABEL_FONT_PX)
                .attr("font-weight", "bold")
                .text(*category),
        );
    }
    surface.append(group);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origin_sits_below_the_chart() {
        assert_eq!(legend_origin(&RenderConfig::default()), (300.0, 540.0));
    }
}
