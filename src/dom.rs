//! DOM Operations Adapter
//!
//! Thin helpers over the `dom_query` crate used by the extractor. Everything
//! here is read-only: the extractor never mutates a document it is given.

// Re-export core types for external use
pub use dom_query::{Document, NodeRef, Selection};

// === Attribute Operations ===

/// Get element ID attribute
#[inline]
#[must_use]
pub fn id(sel: &Selection) -> Option<String> {
    sel.attr("id").map(|s| s.to_string())
}

// === Tag/Node Information ===

/// Lowercase tag name of a single node, `None` for non-elements.
#[must_use]
pub fn node_tag(node: &NodeRef) -> Option<String> {
    node.node_name().map(|t| t.to_ascii_lowercase())
}

// === Tree Navigation ===

/// Nearest ancestor (excluding the node itself) whose tag is one of `tags`.
///
/// Equivalent to `element.closest(tags.join(","))` for an element that is not
/// itself one of `tags`.
#[must_use]
pub fn closest_ancestor<'a>(node: &NodeRef<'a>, tags: &[&str]) -> Option<NodeRef<'a>> {
    let mut current = node.parent();
    while let Some(parent) = current {
        if let Some(tag) = parent.node_name() {
            if tags.iter().any(|t| tag.eq_ignore_ascii_case(t)) {
                return Some(parent);
            }
        }
        current = parent.parent();
    }
    None
}

// === Querying ===

/// Query all elements by CSS selector
#[inline]
#[must_use]
pub fn query_selector_all<'a>(sel: &Selection<'a>, selector: &str) -> Selection<'a> {
    sel.select(selector)
}

/// The document's `<body>`, if the parser produced one.
#[must_use]
pub fn body(doc: &Document) -> Option<Selection<'_>> {
    let body = doc.select_single("body");
    body.exists().then_some(body)
}

// === Parsing ===

/// Parse HTML string into document
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}
