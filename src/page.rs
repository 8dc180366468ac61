//! HTML entry page around a rendered SVG.

use crate::viz::surface::escape_xml;

#[derive(Debug, Clone, PartialEq)]
pub struct PageConfig {
    pub title: String,
    pub description: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            title: "Movie Sales".into(),
            description: "Top 100 Highest Grossing Movies Grouped By Genre".into(),
        }
    }
}

/// HTML5 document with `#title`, `#description`, and the inline `svg`.
pub fn render_page(svg: &str, cfg: &PageConfig) -> String {
    let title = escape_xml(&cfg.title);
    let description = escape_xml(&cfg.description);
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
<style>
body {{ font-family: sans-serif; text-align: center; margin: 0; }}
#title {{ margin: 24px 0 4px; }}
#description {{ margin: 0; color: #444; }}
.tile:hover {{ fill-opacity: 0.9; }}
</style>
</head>
<body>
<h1 id="title">{title}</h1>
<p id="description">{description}</p>
{svg}</body>
</html>
"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_embeds_svg_and_headings() {
        let html = render_page("<svg></svg>\n", &PageConfig::default());
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains(r#"<h1 id="title">Movie Sales</h1>"#));
        assert!(html.contains(r#"<p id="description">Top 100"#));
        assert!(html.contains("<svg></svg>"));
    }
}
