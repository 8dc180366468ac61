//! Squarified treemap layout.
//!
//! Rows are built greedily (Bruls et al.): keep adding siblings to the current
//! row while its worst aspect ratio does not get worse, relative to a golden
//! ratio target. A finished row becomes a horizontal band when the remaining
//! rectangle is taller than wide, a vertical band otherwise.

use crate::hierarchy::{Hierarchy, NodeId};
use serde::Serialize;

/// Target aspect ratio for squarified rows.
pub const GOLDEN_RATIO: f64 = 1.618_033_988_749_895;

/// Axis-aligned rectangle in chart-area pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct TileRect {
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
}

impl TileRect {
    pub fn new(x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        Self { x0, y0, x1, y1 }
    }

    pub fn width(&self) -> f64 {
        self.x1 - self.x0
    }

    pub fn height(&self) -> f64 {
        self.y1 - self.y0
    }

    pub fn area(&self) -> f64 {
        self.width() * self.height()
    }

    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.x0 && x < self.x1 && y >= self.y0 && y < self.y1
    }

    /// Area shared with `other` (0 when disjoint or only touching).
    pub fn overlap_area(&self, other: &TileRect) -> f64 {
        let w = (self.x1.min(other.x1) - self.x0.max(other.x0)).max(0.0);
        let h = (self.y1.min(other.y1) - self.y0.max(other.y0)).max(0.0);
        w * h
    }
}

/// One drawn leaf: its rectangle plus the hierarchy node it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct LeafTile {
    pub node: NodeId,
    pub rect: TileRect,
    pub name: String,
    pub category: String,
    pub value: f64,
}

/// Result of laying out a [`Hierarchy`] into a `width x height` area.
#[derive(Debug, Clone)]
pub struct Layout {
    pub width: f64,
    pub height: f64,
    /// One rectangle per hierarchy node, indexed by [`NodeId`].
    pub rects: Vec<TileRect>,
    /// Leaves in pre-order of the sorted hierarchy.
    pub leaves: Vec<LeafTile>,
}

impl Layout {
    /// Leaf whose rectangle contains the chart-area point `(x, y)`.
    pub fn hit_test(&self, x: f64, y: f64) -> Option<&LeafTile> {
        self.leaves.iter().find(|t| t.rect.contains(x, y))
    }
}

/// Tile `hierarchy` into a `width x height` rectangle anchored at the origin.
pub fn treemap(hierarchy: &Hierarchy, width: f64, height: f64) -> Layout {
    let width = width.max(0.0);
    let height = height.max(0.0);
    let mut rects = vec![TileRect::default(); hierarchy.len()];
    if !hierarchy.is_empty() {
        rects[Hierarchy::ROOT] = TileRect::new(0.0, 0.0, width, height);
        for id in hierarchy.pre_order() {
            let node = hierarchy.node(id);
            if node.is_leaf() {
                continue;
            }
            let r = normalized(rects[id]);
            rects[id] = r;
            let values: Vec<f64> = node
                .children
                .iter()
                .map(|&c| hierarchy.node(c).value)
                .collect();
            let placed = squarify(&values, node.value, r);
            for (&child, rect) in node.children.iter().zip(placed) {
                rects[child] = rect;
            }
        }
    }

    let leaves = hierarchy
        .leaves()
        .into_iter()
        .map(|id| {
            let node = hierarchy.node(id);
            LeafTile {
                node: id,
                rect: normalized(rects[id]),
                name: node.name.clone(),
                category: node.category.clone().unwrap_or_default(),
                value: node.value,
            }
        })
        .collect();

    Layout {
        width,
        height,
        rects,
        leaves,
    }
}

/// Collapse inverted extents (floating point drift) to their midpoint.
fn normalized(mut r: TileRect) -> TileRect {
    if r.x1 < r.x0 {
        let mid = (r.x0 + r.x1) / 2.0;
        r.x0 = mid;
        r.x1 = mid;
    }
    if r.y1 < r.y0 {
        let mid = (r.y0 + r.y1) / 2.0;
        r.y0 = mid;
        r.y1 = mid;
    }
    r
}

/// Place `values` (already sorted) inside `rect`; `total` is the parent's value.
fn squarify(values: &[f64], total: f64, rect: TileRect) -> Vec<TileRect> {
    let n = values.len();
    let mut out = vec![TileRect::default(); n];
    if n == 0 {
        return out;
    }
    if total <= 0.0 {
        for r in out.iter_mut() {
            *r = TileRect::new(rect.x0, rect.y0, rect.x0, rect.y0);
        }
        return out;
    }

    let TileRect {
        mut x0,
        mut y0,
        x1,
        y1,
    } = rect;
    let mut remaining = total;
    let mut i0 = 0usize;
    let mut i1 = 0usize;

    while i0 < n {
        let dx = x1 - x0;
        let dy = y1 - y0;

        // Start the row at the next non-empty child.
        let mut row_sum;
        loop {
            row_sum = values[i1];
            i1 += 1;
            if row_sum > 0.0 || i1 >= n {
                break;
            }
        }
        let mut min_value = row_sum;
        let mut max_value = row_sum;
        let alpha = aspect(dx, dy) / (remaining * GOLDEN_RATIO);
        let mut beta = row_sum * row_sum * alpha;
        let mut min_ratio = worst_ratio(min_value, max_value, beta);

        // Keep adding children while the aspect ratio holds or improves.
        while i1 < n {
            let v = values[i1];
            let next_sum = row_sum + v;
            let next_min = min_value.min(v);
            let next_max = max_value.max(v);
            beta = next_sum * next_sum * alpha;
            let ratio = worst_ratio(next_min, next_max, beta);
            if ratio > min_ratio {
                break;
            }
            row_sum = next_sum;
            min_value = next_min;
            max_value = next_max;
            min_ratio = ratio;
            i1 += 1;
        }

        let row = &values[i0..i1];
        let last = i1 >= n;
        if dx < dy {
            let band_y1 = band_end(y0, y1, row_sum, remaining, last);
            dice(row, row_sum, TileRect::new(x0, y0, x1, band_y1), &mut out[i0..i1]);
            y0 = band_y1;
        } else {
            let band_x1 = band_end(x0, x1, row_sum, remaining, last);
            slice(row, row_sum, TileRect::new(x0, y0, band_x1, y1), &mut out[i0..i1]);
            x0 = band_x1;
        }
        remaining -= row_sum;
        i0 = i1;
    }
    out
}

/// Far edge of a row's band between `start` and `end`. A parent's own value
/// keeps its share of the rectangle empty, so only a last row that carries all
/// of the remaining value snaps to `end`.
fn band_end(start: f64, end: f64, row_sum: f64, remaining: f64, last: bool) -> f64 {
    if remaining <= 0.0 || (last && row_sum >= remaining * (1.0 - 1e-9)) {
        end
    } else {
        start + (end - start) * row_sum / remaining
    }
}

fn aspect(dx: f64, dy: f64) -> f64 {
    if dx <= 0.0 || dy <= 0.0 {
        return f64::MAX;
    }
    (dy / dx).max(dx / dy)
}

fn worst_ratio(min_value: f64, max_value: f64, beta: f64) -> f64 {
    if beta <= 0.0 || min_value <= 0.0 || !beta.is_finite() {
        return f64::MAX;
    }
    (max_value / beta).max(beta / min_value)
}

/// Split `band` left to right, proportionally to `row`.
fn dice(row: &[f64], row_sum: f64, band: TileRect, out: &mut [TileRect]) {
    let k = if row_sum > 0.0 {
        band.width() / row_sum
    } else {
        0.0
    };
    let mut x = band.x0;
    for (i, (&v, slot)) in row.iter().zip(out.iter_mut()).enumerate() {
        // The last cell absorbs rounding drift so the band is filled exactly.
        let next = if i + 1 == row.len() { band.x1 } else { x + v * k };
        *slot = TileRect::new(x, band.y0, next, band.y1);
        x = next;
    }
}

/// Split `band` top to bottom, proportionally to `row`.
fn slice(row: &[f64], row_sum: f64, band: TileRect, out: &mut [TileRect]) {
    let k = if row_sum > 0.0 {
        band.height() / row_sum
    } else {
        0.0
    };
    let mut y = band.y0;
    for (i, (&v, slot)) in row.iter().zip(out.iter_mut()).enumerate() {
        let next = if i + 1 == row.len() { band.y1 } else { y + v * k };
        *slot = TileRect::new(band.x0, y, band.x1, next);
        y = next;
    }
}
