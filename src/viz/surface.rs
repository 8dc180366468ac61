//! Owned SVG drawing surface.
//!
//! Drawing routines receive `&mut Surface` and append [`Element`]s to it; the
//! surface serializes to a standalone SVG document. Nothing is global.

use super::util::fmt_num;

/// One SVG element with ordered attributes, optional text, and children.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub tag: String,
    attrs: Vec<(String, String)>,
    text: Option<String>,
    children: Vec<Element>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attrs: Vec::new(),
            text: None,
            children: Vec::new(),
        }
    }

    /// Builder: set (or replace) an attribute.
    pub fn attr(mut self, key: &str, value: impl ToString) -> Self {
        self.set_attr(key, value);
        self
    }

    /// Builder: set a numeric attribute, trimming trailing zeros.
    pub fn num(self, key: &str, value: f64) -> Self {
        self.attr(key, fmt_num(value))
    }

    /// Builder: set the element's text content.
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Builder: append a child.
    pub fn child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    pub fn set_attr(&mut self, key: &str, value: impl ToString) {
        let value = value.to_string();
        match self.attrs.iter_mut().find(|(k, _)| k == key) {
            Some(slot) => slot.1 = value,
            None => self.attrs.push((key.to_string(), value)),
        }
    }

    pub fn get_attr(&self, key: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn push(&mut self, child: Element) {
        self.children.push(child);
    }

    pub fn children(&self) -> &[Element] {
        &self.children
    }

    pub fn text_content(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn id(&self) -> Option<&str> {
        self.get_attr("id")
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.get_attr("class")
            .is_some_and(|c| c.split_whitespace().any(|x| x == class))
    }

    /// Depth-first visit of this element and its descendants.
    pub fn walk<'a>(&'a self, out: &mut Vec<&'a Element>) {
        out.push(self);
        for c in &self.children {
            c.walk(out);
        }
    }

    /// Remove descendants matching `pred`; returns how many were removed.
    fn remove_where(&mut self, pred: &dyn Fn(&Element) -> bool) -> usize {
        let before = self.children.len();
        self.children.retain(|c| !pred(c));
        let mut removed = before - self.children.len();
        for c in &mut self.children {
            removed += c.remove_where(pred);
        }
        removed
    }

    fn write_svg(&self, out: &mut String) {
        out.push('<');
        out.push_str(&self.tag);
        for (k, v) in &self.attrs {
            out.push_str(&format!(" {}=\"{}\"", k, escape_xml(v)));
        }
        match (&self.text, self.children.is_empty()) {
            (None, true) => out.push_str("/>"),
            (text, _) => {
                out.push('>');
                if let Some(t) = text {
                    out.push_str(&escape_xml(t));
                }
                if !self.children.is_empty() {
                    out.push('\n');
                    for c in &self.children {
                        c.write_svg(out);
                        out.push('\n');
                    }
                }
                out.push_str(&format!("</{}>", self.tag));
            }
        }
    }
}

/// The single drawing surface of a render.
#[derive(Debug, Clone, PartialEq)]
pub struct Surface {
    root: Element,
}

impl Surface {
    pub fn new(width: u32, height: u32) -> Self {
        let root = Element::new("svg")
            .attr("xmlns", "http://www.w3.org/2000/svg")
            .attr("width", width)
            .attr("height", height);
        Self { root }
    }

    pub fn root(&self) -> &Element {
        &self.root
    }

    pub fn append(&mut self, element: Element) {
        self.root.push(element);
    }

    /// Every element on the surface, depth first, root included.
    pub fn elements(&self) -> Vec<&Element> {
        let mut out = Vec::new();
        self.root.walk(&mut out);
        out
    }

    pub fn find_by_id(&self, id: &str) -> Option<&Element> {
        self.elements().into_iter().find(|e| e.id() == Some(id))
    }

    pub fn count_by_id(&self, id: &str) -> usize {
        self.elements()
            .into_iter()
            .filter(|e| e.id() == Some(id))
            .count()
    }

    pub fn find_by_class(&self, class: &str) -> Vec<&Element> {
        self.elements()
            .into_iter()
            .filter(|e| e.has_class(class))
            .collect()
    }

    /// Remove every element carrying `id`; returns how many were removed.
    pub fn remove_by_id(&mut self, id: &str) -> usize {
        self.root.remove_where(&|e: &Element| e.id() == Some(id))
    }

    pub fn to_svg(&self) -> String {
        let mut out = String::with_capacity(64 * 1024);
        self.root.write_svg(&mut out);
        out.push('\n');
        out
    }
}

pub fn escape_xml(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_nested_elements_with_escaping() {
        let mut s = Surface::new(10, 20);
        s.append(
            Element::new("g")
                .attr("id", "a")
                .child(Element::new("text").text("Tom & \"Jerry\"")),
        );
        let svg = s.to_svg();
        assert!(svg.starts_with("<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"10\" height=\"20\">"));
        assert!(svg.contains("<g id=\"a\">\n<text>Tom &amp; &quot;Jerry&quot;</text>\n</g>"));
        assert!(svg.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn remove_by_id_reaches_nested_elements() {
        let mut s = Surface::new(1, 1);
        s.append(Element::new("g").child(Element::new("g").attr("id", "x")));
        s.append(Element::new("g").attr("id", "x"));
        assert_eq!(s.count_by_id("x"), 2);
        assert_eq!(s.remove_by_id("x"), 2);
        assert_eq!(s.count_by_id("x"), 0);
    }
}
