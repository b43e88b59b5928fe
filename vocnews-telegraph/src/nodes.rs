//! Conversion of HTML fragments into the page API's content tree.
//!
//! Pages are submitted as a JSON array of nodes, each either a bare string or
//! `{"tag": ..., "attrs": ..., "children": ...}`, over a fixed tag vocabulary.
//! Upstream reshaping is expected to have mapped content into that vocabulary
//! already; anything still outside it is rejected here rather than silently
//! dropped, so a bad entry surfaces as an error instead of a truncated page.

use std::collections::BTreeMap;

use scraper::{ElementRef, Html};
use serde::{Deserialize, Serialize};

use crate::error::TelegraphError;

/// Tags the page API accepts in content.
pub const ALLOWED_TAGS: [&str; 24] = [
    "a", "aside", "b", "blockquote", "br", "code", "em", "figcaption", "figure", "h3", "h4", "hr",
    "i", "iframe", "img", "li", "ol", "p", "pre", "s", "strong", "u", "ul", "video",
];

/// Attributes the page API accepts on content elements.
const ALLOWED_ATTRS: [&str; 2] = ["href", "src"];

/// One node of page content: either a text run or an element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Node {
    Text(String),
    Element(NodeElement),
}

/// An element node with its kept attributes and child nodes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeElement {
    pub tag: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attrs: Option<BTreeMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<Node>>,
}

/// Converts an HTML fragment into a content tree.
///
/// Whitespace-only text nodes between elements are dropped; text inside an
/// element keeps its spacing. A tag outside [`ALLOWED_TAGS`] fails the whole
/// fragment.
pub fn html_to_nodes(fragment: &str) -> Result<Vec<Node>, TelegraphError> {
    let parsed = Html::parse_fragment(fragment);
    child_nodes(parsed.root_element())
}

fn child_nodes(element: ElementRef<'_>) -> Result<Vec<Node>, TelegraphError> {
    let mut nodes = Vec::new();
    for child in element.children() {
        if let Some(text) = child.value().as_text() {
            if !text.trim().is_empty() {
                nodes.push(Node::Text(text.to_string()));
            }
        } else if let Some(child_element) = ElementRef::wrap(child) {
            nodes.push(element_node(child_element)?);
        }
    }
    Ok(nodes)
}

fn element_node(element: ElementRef<'_>) -> Result<Node, TelegraphError> {
    let tag = element.value().name();
    if !ALLOWED_TAGS.contains(&tag) {
        return Err(TelegraphError::NotAllowedTag(tag.to_string()));
    }

    let attrs: BTreeMap<String, String> = element
        .value()
        .attrs()
        .filter(|(name, _)| ALLOWED_ATTRS.contains(name))
        .map(|(name, value)| (name.to_string(), value.to_string()))
        .collect();

    let children = child_nodes(element)?;

    Ok(Node::Element(NodeElement {
        tag: tag.to_string(),
        attrs: (!attrs.is_empty()).then_some(attrs),
        children: (!children.is_empty()).then_some(children),
    }))
}
