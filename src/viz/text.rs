//! Tile label wrapping and clip-path id helpers.

use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

/// Empirical characters-per-pixel ratio for 10px labels.
const CHARS_PER_PX: f64 = 14.0 / 80.0;

/// Character budget for one label line in a tile `width_px` wide.
pub fn line_budget(width_px: f64) -> usize {
    (width_px.max(0.0) * CHARS_PER_PX).floor() as usize
}

/// Break a tile name into label lines.
///
/// Words are consumed in pairs: a pair that fits the per-line budget becomes
/// one line, otherwise each word gets its own line. A trailing unpaired word
/// is emitted on its own. Words are never split, so a single-word name always
/// yields exactly that word. Fit against real font metrics is not guaranteed;
/// overflow is hidden by the tile's clip path.
pub fn wrap_label(width_px: f64, name: &str) -> Vec<String> {
    let budget = line_budget(width_px);
    let words: Vec<&str> = name.split_whitespace().collect();
    let n = words.len();
    let mut lines = Vec::new();
    let mut pending: Option<&str> = None;

    for (i, word) in words.iter().copied().enumerate() {
        match pending.take() {
            None if i + 1 < n => pending = Some(word),
            None => lines.push(word.to_string()),
            Some(first) => {
                let combined = format!("{first} {word}");
                if combined.chars().count() <= budget {
                    lines.push(combined);
                } else {
                    lines.push(first.to_string());
                    lines.push(word.to_string());
                }
            }
        }
    }
    lines
}

static NON_ID_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\w-]").expect("static regex"));

/// Hands out unique clip-path ids derived from tile names.
#[derive(Debug, Default)]
pub struct ClipIds {
    used: HashSet<String>,
}

impl ClipIds {
    pub fn new() -> Self {
        Self::default()
    }

    /// `name` stripped of whitespace and punctuation, suffixed `-clip`;
    /// repeated names get `-2`, `-3`, ... before the suffix.
    pub fn next(&mut self, name: &str) -> String {
        let base = NON_ID_CHARS.replace_all(name, "").into_owned();
        let base = if base.is_empty() { "tile".to_string() } else { base };
        let mut candidate = format!("{base}-clip");
        let mut n = 2;
        while self.used.contains(&candidate) {
            candidate = format!("{base}-{n}-clip");
            n += 1;
        }
        self.used.insert(candidate.clone());
        candidate
    }
}
