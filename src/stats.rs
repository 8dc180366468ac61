use crate::hierarchy::Hierarchy;
use crate::viz::MOVIE_GENRES;
use serde::{Deserialize, Serialize};

/// Summary statistics for one category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Summary {
    pub category: String,
    pub count: usize,
    pub total: f64,
    /// Fraction of the grand total (0 when the grand total is 0).
    pub share: f64,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub mean: Option<f64>,
    pub median: Option<f64>,
}

/// Compute per-category statistics over the hierarchy's leaves.
///
/// Known genres come first in legend order (only those present), followed by
/// any other categories in order of first appearance.
pub fn category_summary(hierarchy: &Hierarchy) -> Vec<Summary> {
    let mut order: Vec<String> = Vec::new();
    let mut groups: Vec<Vec<f64>> = Vec::new();
    for id in hierarchy.leaves() {
        let node = hierarchy.node(id);
        let category = node.category.clone().unwrap_or_default();
        let idx = match order.iter().position(|c| *c == category) {
            Some(i) => i,
            None => {
                order.push(category);
                groups.push(Vec::new());
                order.len() - 1
            }
        };
        groups[idx].push(node.value);
    }

    let rank = |c: &str| {
        MOVIE_GENRES
            .iter()
            .position(|(g, _)| *g == c)
            .unwrap_or(MOVIE_GENRES.len())
    };
    let mut keyed: Vec<(usize, usize)> = (0..order.len()).map(|i| (rank(&order[i]), i)).collect();
    keyed.sort();

    let grand_total: f64 = groups.iter().flatten().sum();
    keyed
        .into_iter()
        .map(|(_, i)| summarize(order[i].clone(), std::mem::take(&mut groups[i]), grand_total))
        .collect()
}

fn summarize(category: String, mut vals: Vec<f64>, grand_total: f64) -> Summary {
    vals.sort_by(|a, b| a.total_cmp(b));
    let count = vals.len();
    let total: f64 = vals.iter().sum();
    let min = vals.first().cloned();
    let max = vals.last().cloned();
    let mean = if count > 0 {
        Some(total / count as f64)
    } else {
        None
    };
    let median = if count == 0 {
        None
    } else if count % 2 == 1 {
        Some(vals[count / 2])
    } else {
        Some((vals[count / 2 - 1] + vals[count / 2]) / 2.0)
    };
    let share = if grand_total > 0.0 {
        total / grand_total
    } else {
        0.0
    };
    Summary {
        category,
        count,
        total,
        share,
        min,
        max,
        mean,
        median,
    }
}
