//! Virtual DOM output of the preview renderer.
//!
//! Sorted attribute and style maps keep serialized output byte-stable, so
//! snapshot-style assertions and client diffing stay deterministic.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Virtual DOM node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum VNode {
    /// HTML element
    Element {
        tag: String,
        attributes: BTreeMap<String, String>,
        styles: BTreeMap<String, String>,
        children: Vec<VNode>,
    },

    /// Text node
    Text { content: String },
}

impl VNode {
    pub fn element(tag: impl Into<String>) -> Self {
        VNode::Element {
            tag: tag.into(),
            attributes: BTreeMap::new(),
            styles: BTreeMap::new(),
            children: Vec::new(),
        }
    }

    pub fn text(content: impl Into<String>) -> Self {
        VNode::Text {
            content: content.into(),
        }
    }

    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        if let VNode::Element {
            ref mut attributes, ..
        } = self
        {
            attributes.insert(key.into(), value.into());
        }
        self
    }

    /// Append to the `class` attribute, space-separated.
    pub fn with_class(mut self, class: impl AsRef<str>) -> Self {
        if let VNode::Element {
            ref mut attributes, ..
        } = self
        {
            attributes
                .entry("class".to_string())
                .and_modify(|existing| {
                    existing.push(' ');
                    existing.push_str(class.as_ref());
                })
                .or_insert_with(|| class.as_ref().to_string());
        }
        self
    }

    pub fn with_style(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        if let VNode::Element { ref mut styles, .. } = self {
            styles.insert(key.into(), value.into());
        }
        self
    }

    pub fn with_child(mut self, child: VNode) -> Self {
        if let VNode::Element {
            ref mut children, ..
        } = self
        {
            children.push(child);
        }
        self
    }

    pub fn with_children(mut self, new_children: Vec<VNode>) -> Self {
        if let VNode::Element {
            ref mut children, ..
        } = self
        {
            children.extend(new_children);
        }
        self
    }

    pub fn tag(&self) -> Option<&str> {
        match self {
            VNode::Element { tag, .. } => Some(tag),
            VNode::Text { .. } => None,
        }
    }

    pub fn attr(&self, key: &str) -> Option<&str> {
        match self {
            VNode::Element { attributes, .. } => attributes.get(key).map(String::as_str),
            VNode::Text { .. } => None,
        }
    }

    pub fn children(&self) -> &[VNode] {
        match self {
            VNode::Element { children, .. } => children,
            VNode::Text { .. } => &[],
        }
    }

    /// Depth-first search for a descendant matching the predicate.
    pub fn find(&self, predicate: &dyn Fn(&VNode) -> bool) -> Option<&VNode> {
        if predicate(self) {
            return Some(self);
        }
        self.children()
            .iter()
            .find_map(|child| child.find(predicate))
    }
}

/// One CSS rule of the generated stylesheet. Declarations are ordered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CssRule {
    pub selector: String,
    pub declarations: Vec<(String, String)>,
}

impl CssRule {
    pub fn new(selector: impl Into<String>, declarations: &[(&str, &str)]) -> Self {
        CssRule {
            selector: selector.into(),
            declarations: declarations
                .iter()
                .map(|(key, value)| (key.to_string(), value.to_string()))
                .collect(),
        }
    }
}

/// The rendered page: root nodes plus the generated stylesheet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct RenderedPage {
    pub nodes: Vec<VNode>,
    pub styles: Vec<CssRule>,
}

impl RenderedPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_node(&mut self, node: VNode) {
        self.nodes.push(node);
    }

    pub fn add_style(&mut self, rule: CssRule) {
        self.styles.push(rule);
    }

    /// Depth-first search across all root nodes.
    pub fn find(&self, predicate: &dyn Fn(&VNode) -> bool) -> Option<&VNode> {
        self.nodes.iter().find_map(|node| node.find(predicate))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_methods_compose() {
        let node = VNode::element("div")
            .with_class("card")
            .with_class("card--active")
            .with_attr("data-id", "42")
            .with_style("color", "#fff")
            .with_child(VNode::text("hello"));

        assert_eq!(node.attr("class"), Some("card card--active"));
        assert_eq!(node.attr("data-id"), Some("42"));
        assert_eq!(node.children().len(), 1);
    }

    #[test]
    fn test_find_walks_depth_first() {
        let tree = VNode::element("div").with_child(
            VNode::element("section")
                .with_child(VNode::element("img").with_attr("src", "a.jpg")),
        );

        let img = tree.find(&|node| node.tag() == Some("img")).unwrap();
        assert_eq!(img.attr("src"), Some("a.jpg"));
        assert!(tree.find(&|node| node.tag() == Some("video")).is_none());
    }

    #[test]
    fn test_text_nodes_ignore_element_builders() {
        let node = VNode::text("plain").with_attr("class", "x").with_child(VNode::text("y"));
        assert_eq!(node, VNode::text("plain"));
    }
}
