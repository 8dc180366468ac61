//! Hover tooltips.
//!
//! A tooltip is a `<g id="tooltip">` appended on pointer-enter over a tile and
//! removed on pointer-leave. [`show_tooltip`] clears any previous tooltip
//! first, so sequential events never leave more than one on the surface.

use super::surface::{Element, Surface};
use super::types::{LABEL_FONT_PX, Point};
use super::util::{fmt_num, format_value};
use crate::hierarchy::NodeId;
use crate::layout::{Layout, LeafTile};

pub const TOOLTIP_ID: &str = "tooltip";
pub const TOOLTIP_HEIGHT: f64 = 65.0;
/// Offset of the box from the pointer, to the right.
const POINTER_OFFSET_X: f64 = 30.0;
const LINE_PITCH_PX: f64 = 15.0;
const FIRST_LINE_PX: f64 = 20.0;

/// The three text lines of a tile's tooltip.
pub fn tooltip_lines(tile: &LeafTile) -> [String; 3] {
    [
        format!("Name: {}", tile.name),
        format!("Category: {}", tile.category),
        format!("Value: {}", format_value(tile.value)),
    ]
}

/// Box width proportional to the longest line (90px per 14 characters).
pub fn tooltip_width(lines: &[String]) -> f64 {
    let longest = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0);
    longest as f64 / 14.0 * 90.0
}

/// Show a tooltip for `tile` next to `pointer` (surface coordinates).
pub fn show_tooltip(surface: &mut Surface, tile: &LeafTile, pointer: Point) {
    hide_tooltips(surface);
    let lines = tooltip_lines(tile);
    let width = tooltip_width(&lines);

    let mut text = Element::new("text");
    for (i, line) in lines.into_iter().enumerate() {
        text.push(
            Element::new("tspan")
                .attr("fill", "white")
                .attr("font-size", LABEL_FONT_PX)
                .num("y", i as f64 * LINE_PITCH_PX + FIRST_LINE_PX)
                .num("x", 10.0)
                .text(line),
        );
    }

    surface.append(
        Element::new("g")
            .attr("id", TOOLTIP_ID)
            .attr("data-value", format_value(tile.value))
            .num("width", width)
            .num("height", TOOLTIP_HEIGHT)
            .attr(
                "transform",
                format!(
                    "translate({}, {})",
                    fmt_num(pointer.x + POINTER_OFFSET_X),
                    fmt_num(pointer.y)
                ),
            )
            .child(
                Element::new("rect")
                    .num("width", width)
                    .num("height", TOOLTIP_HEIGHT)
                    .num("rx", 8.0)
                    .num("fill-opacity", 0.6)
                    .attr("fill", "#040926"),
            )
            .child(text),
    );
}

/// Remove every tooltip from the surface; returns how many were removed.
pub fn hide_tooltips(surface: &mut Surface) -> usize {
    surface.remove_by_id(TOOLTIP_ID)
}

/// Pointer input, in surface coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// Pointer moved to a position on the surface.
    Move(Point),
    /// Pointer left the surface.
    Exit,
}

/// Turns raw pointer input into tile enter/leave transitions.
#[derive(Debug)]
pub struct Interaction<'a> {
    layout: &'a Layout,
    padding: f64,
    hovered: Option<NodeId>,
}

impl<'a> Interaction<'a> {
    /// `padding` is the offset of the chart area inside the surface.
    pub fn new(layout: &'a Layout, padding: f64) -> Self {
        Self {
            layout,
            padding,
            hovered: None,
        }
    }

    pub fn hovered(&self) -> Option<NodeId> {
        self.hovered
    }

    /// Apply one event: leaving a tile hides its tooltip, entering one shows it.
    pub fn handle(&mut self, surface: &mut Surface, event: PointerEvent) {
        let target = match event {
            PointerEvent::Move(p) => self
                .layout
                .hit_test(p.x - self.padding, p.y - self.padding)
                .map(|t| (t, p)),
            PointerEvent::Exit => None,
        };
        match target {
            Some((tile, _)) if self.hovered == Some(tile.node) => {}
            Some((tile, p)) => {
                show_tooltip(surface, tile, p);
                self.hovered = Some(tile.node);
            }
            None => {
                hide_tooltips(surface);
                self.hovered = None;
            }
        }
    }
}
