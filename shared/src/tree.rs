//! ==============================================================================
//! tree.rs - abstract visual tree
//! ==============================================================================
//!
//! purpose:
//!     host-agnostic description of rendered output. the dashboard maps it
//!     onto leptos views; tests query it directly or via `to_html`.
//!
//! ==============================================================================

use serde::Serialize;
use std::fmt::Write;

// ==============================================================================
// types
// ==============================================================================

/// element kinds the header emits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Tag {
    Header,
    Div,
    Img,
    Span,
    Nav,
    Button,
    Strong,
}

impl Tag {
    pub fn name(self) -> &'static str {
        match self {
            Tag::Header => "header",
            Tag::Div => "div",
            Tag::Img => "img",
            Tag::Span => "span",
            Tag::Nav => "nav",
            Tag::Button => "button",
            Tag::Strong => "strong",
        }
    }

    /// void elements have no children and no closing tag
    pub fn is_void(self) -> bool {
        matches!(self, Tag::Img)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Node {
    Element(Element),
    Text(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Element {
    pub tag: Tag,
    /// style-class identifier bound by the external stylesheet
    pub class: Option<&'static str>,
    /// remaining attributes in emission order
    pub attrs: Vec<(&'static str, String)>,
    pub children: Vec<Node>,
}

/// rendered output of one header render
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VisualTree {
    pub root: Element,
}

// ==============================================================================
// element construction and queries
// ==============================================================================

impl Element {
    pub fn new(tag: Tag) -> Self {
        Self {
            tag,
            class: None,
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn with_class(mut self, class: &'static str) -> Self {
        self.class = Some(class);
        self
    }

    pub fn with_attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.attrs.push((name, value.into()));
        self
    }

    pub fn with_child(mut self, child: Element) -> Self {
        self.children.push(Node::Element(child));
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.children.push(Node::Text(text.into()));
        self
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.as_str())
    }

    /// concatenated text of all descendants, in document order
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        for child in &self.children {
            match child {
                Node::Text(text) => out.push_str(text),
                Node::Element(el) => el.collect_text(out),
            }
        }
    }

    /// depth-first search for the first element carrying `class`, self included
    pub fn find_by_class(&self, class: &str) -> Option<&Element> {
        if self.class.is_some_and(|own| own == class) {
            return Some(self);
        }
        self.child_elements().find_map(|el| el.find_by_class(class))
    }

    pub fn find_all_by_tag(&self, tag: Tag) -> Vec<&Element> {
        let mut found = Vec::new();
        self.collect_by_tag(tag, &mut found);
        found
    }

    fn collect_by_tag<'a>(&'a self, tag: Tag, found: &mut Vec<&'a Element>) {
        if self.tag == tag {
            found.push(self);
        }
        for el in self.child_elements() {
            el.collect_by_tag(tag, found);
        }
    }

    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|child| match child {
            Node::Element(el) => Some(el),
            Node::Text(_) => None,
        })
    }

    fn write_html(&self, out: &mut String) {
        let name = self.tag.name();
        out.push('<');
        out.push_str(name);
        if let Some(class) = self.class {
            let _ = write!(out, " class=\"{}\"", escape(class));
        }
        for (key, value) in &self.attrs {
            let _ = write!(out, " {}=\"{}\"", key, escape(value));
        }
        out.push('>');

        if self.tag.is_void() {
            return;
        }

        for child in &self.children {
            match child {
                Node::Text(text) => out.push_str(&escape(text)),
                Node::Element(el) => el.write_html(out),
            }
        }
        let _ = write!(out, "</{}>", name);
    }
}

// ==============================================================================
// tree
// ==============================================================================

impl VisualTree {
    pub fn new(root: Element) -> Self {
        Self { root }
    }

    pub fn find_by_class(&self, class: &str) -> Option<&Element> {
        self.root.find_by_class(class)
    }

    pub fn find_all_by_tag(&self, tag: Tag) -> Vec<&Element> {
        self.root.find_all_by_tag(tag)
    }

    pub fn text_content(&self) -> String {
        self.root.text_content()
    }

    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.root.write_html(&mut out);
        out
    }
}

fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

// ==============================================================================
// tests
// ==============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> VisualTree {
        VisualTree::new(
            Element::new(Tag::Div)
                .with_class("outer")
                .with_child(Element::new(Tag::Span).with_class("a").with_text("one "))
                .with_child(
                    Element::new(Tag::Div)
                        .with_child(Element::new(Tag::Span).with_class("b").with_text("two")),
                )
                .with_child(Element::new(Tag::Img).with_attr("src", "x.png")),
        )
    }

    #[test]
    fn test_text_content_in_document_order() {
        assert_eq!(sample().text_content(), "one two");
    }

    #[test]
    fn test_find_by_class_descends() {
        let tree = sample();
        assert_eq!(tree.find_by_class("b").unwrap().text_content(), "two");
        assert_eq!(tree.find_by_class("outer").unwrap().tag, Tag::Div);
        assert!(tree.find_by_class("missing").is_none());
    }

    #[test]
    fn test_find_all_by_tag() {
        let tree = sample();
        assert_eq!(tree.find_all_by_tag(Tag::Span).len(), 2);
        assert_eq!(tree.find_all_by_tag(Tag::Div).len(), 2);
        assert!(tree.find_all_by_tag(Tag::Nav).is_empty());
    }

    #[test]
    fn test_to_html_void_and_escaping() {
        let tree = VisualTree::new(
            Element::new(Tag::Div)
                .with_text("a < b & c")
                .with_child(Element::new(Tag::Img).with_attr("alt", "say \"hi\"")),
        );
        assert_eq!(
            tree.to_html(),
            "<div>a &lt; b &amp; c<img alt=\"say &quot;hi&quot;\"></div>"
        );
    }

    #[test]
    fn test_attr_lookup() {
        let el = Element::new(Tag::Img).with_attr("src", "x.png").with_attr("alt", "logo");
        assert_eq!(el.attr("alt"), Some("logo"));
        assert_eq!(el.attr("title"), None);
    }
}
