//! Utility functions for visualization: category palette, ordinal color scale,
//! number formatting.

/// Movie genres and their colors. Order defines both the color assignment and
/// the legend's left-to-right position.
pub const MOVIE_GENRES: [(&str, &str); 7] = [
    ("Action", "#8D3B72"),
    ("Drama", "#8A7090"),
    ("Adventure", "#89A7A7"),
    ("Family", "#E4CC37"),
    ("Animation", "#72E1D1"),
    ("Comedy", "#FFA686"),
    ("Biography", "#005377"),
];

/// Plain 8-bit RGB triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Parse `#RRGGBB` (leading `#` optional).
    pub fn from_hex(hex: &str) -> Option<Self> {
        let h = hex.trim().trim_start_matches('#');
        if h.len() != 6 || !h.is_ascii() {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&h[i..i + 2], 16).ok();
        Some(Rgb(channel(0)?, channel(2)?, channel(4)?))
    }

    /// Blend over a white background at `opacity` (0..=1).
    pub fn over_white(self, opacity: f64) -> Rgb {
        let a = opacity.clamp(0.0, 1.0);
        let mix = |c: u8| ((c as f64) * a + 255.0 * (1.0 - a)).round() as u8;
        Rgb(mix(self.0), mix(self.1), mix(self.2))
    }
}

/// Ordinal scale from category to color.
///
/// Unknown categories extend the domain on first use and take the next color
/// cyclically, so the k-th unseen category gets `range[(len + k) % len]`.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorScale {
    domain: Vec<String>,
    range: Vec<String>,
}

impl ColorScale {
    pub fn new<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let (domain, range) = pairs
            .into_iter()
            .map(|(c, col)| (c.to_string(), col.to_string()))
            .unzip();
        Self { domain, range }
    }

    pub fn movie_genres() -> Self {
        Self::new(MOVIE_GENRES)
    }

    /// Color for `category`, extending the domain for unseen categories.
    pub fn color(&mut self, category: &str) -> String {
        if self.range.is_empty() {
            return "#000000".to_string();
        }
        let idx = match self.domain.iter().position(|c| c == category) {
            Some(i) => i,
            None => {
                self.domain.push(category.to_string());
                self.domain.len() - 1
            }
        };
        self.range[idx % self.range.len()].clone()
    }

    /// Categories seen so far, in domain order.
    pub fn domain(&self) -> &[String] {
        &self.domain
    }

    /// The configured (category, color) pairs, without implicit extensions.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.domain
            .iter()
            .zip(self.range.iter())
            .map(|(c, col)| (c.as_str(), col.as_str()))
    }
}

/// Format a number for an SVG attribute: up to 3 decimals, trailing zeros trimmed.
pub fn fmt_num(x: f64) -> String {
    if !x.is_finite() {
        return "0".to_string();
    }
    let s = format!("{:.3}", x);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" { "0".to_string() } else { s.to_string() }
}

/// Format a dataset value the way it appears in the feed: integers without a
/// decimal point, other values in shortest form.
pub fn format_value(v: f64) -> String {
    if v.fract() == 0.0 && v.abs() < 1e15 {
        format!("{:.0}", v)
    } else {
        v.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_categories_cycle_through_the_range() {
        let mut scale = ColorScale::movie_genres();
        assert_eq!(scale.color("Drama"), "#8A7090");
        assert_eq!(scale.color("Western"), "#8D3B72");
        assert_eq!(scale.color("Horror"), "#8A7090");
        assert_eq!(scale.color("Western"), "#8D3B72");
        assert_eq!(scale.domain().len(), 9);
        assert_eq!(scale.entries().count(), 7);
    }

    #[test]
    fn hex_parsing_and_blending() {
        assert_eq!(Rgb::from_hex("#005377"), Some(Rgb(0, 0x53, 0x77)));
        assert_eq!(Rgb::from_hex("zz0000"), None);
        assert_eq!(Rgb(0, 0, 0).over_white(0.6), Rgb(102, 102, 102));
    }

    #[test]
    fn number_formatting() {
        assert_eq!(fmt_num(15.0), "15");
        assert_eq!(fmt_num(12.3456), "12.346");
        assert_eq!(fmt_num(-0.0001), "0");
        assert_eq!(format_value(760505847.0), "760505847");
        assert_eq!(format_value(2.5), "2.5");
    }
}
