//! Candidate regions and the longest-block-text policy.
//!
//! A candidate region is a node that may hold the article. Candidates are
//! scored by the prose they contain: the rendered text of their paragraph,
//! heading (levels 1-3) and list-item descendants, one block per line.

use std::collections::HashSet;

use dom_query::{Document, NodeId, NodeRef, Selection};

use crate::dom;
use crate::text::{char_len, rendered_node_text};

/// Descendants counted as atomic units of visible prose.
pub const BLOCK_TEXT_SELECTOR: &str = "p, h1, h2, h3, li";

/// Containers whose `id`/`class` or landmark role connote main content.
///
/// Attribute matches are substring matches (`*=`), unlike the exact tag
/// match of [`PARAGRAPH_CONTAINER_TAGS`].
pub const MAIN_CONTAINER_SELECTOR: &str = concat!(
    "main, [role=main], ",
    r#"div[id*="content"], div[class*="content"], div[class*="article"], "#,
    r#"section[id*="article"], section[class*="article"]"#
);

/// Tags accepted as the nearest container of a paragraph.
pub const PARAGRAPH_CONTAINER_TAGS: &[&str] = &["section", "article", "main", "div"];

/// A node considered as a possible article container, with its block text.
#[derive(Clone)]
pub struct CandidateRegion<'a> {
    /// The container node.
    pub node: NodeRef<'a>,
    /// Newline-joined text of the node's block-level descendants.
    pub block_text: String,
}

impl<'a> CandidateRegion<'a> {
    /// Score a node by its block-level text.
    #[must_use]
    pub fn new(node: NodeRef<'a>) -> Self {
        let block_text = block_text(&node);
        Self { node, block_text }
    }

    /// Length of the block text in characters.
    #[must_use]
    pub fn text_len(&self) -> usize {
        char_len(&self.block_text)
    }
}

/// Concatenate the trimmed, non-empty rendered text of every block-level
/// descendant of `node`, joined by newlines.
///
/// Nested blocks (a `p` inside an `li`) contribute once per block, so their
/// text appears twice.
#[must_use]
pub fn block_text(node: &NodeRef) -> String {
    let root = Selection::from(*node);
    dom::query_selector_all(&root, BLOCK_TEXT_SELECTOR)
        .nodes()
        .iter()
        .map(rendered_node_text)
        .map(|text| text.trim().to_string())
        .filter(|text| !text.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Pick the candidate with the longest block text.
///
/// Missing candidates (`None`) are skipped. A later candidate replaces the
/// current best only when strictly longer, so the first seen wins ties. The
/// winner's text is returned trimmed; no candidates yields an empty string.
#[must_use]
pub fn longest_block_text<'a, I>(candidates: I) -> String
where
    I: IntoIterator<Item = Option<NodeRef<'a>>>,
{
    let mut best: Option<CandidateRegion<'a>> = None;
    for node in candidates.into_iter().flatten() {
        let candidate = CandidateRegion::new(node);
        let best_len = best.as_ref().map_or(0, CandidateRegion::text_len);
        if candidate.text_len() > best_len {
            best = Some(candidate);
        }
    }
    best.map(|c| c.block_text.trim().to_string()).unwrap_or_default()
}

/// Nodes matching [`MAIN_CONTAINER_SELECTOR`], in document order.
#[must_use]
pub fn main_containers(doc: &Document) -> Vec<NodeRef<'_>> {
    doc.select(MAIN_CONTAINER_SELECTOR).nodes().to_vec()
}

/// Nearest section/article/main/div ancestor of every paragraph.
///
/// Paragraphs without such an ancestor yield `None`. Repeated ancestors are
/// reported once, at the position of their first paragraph; since ties keep
/// the first candidate, this does not change which candidate wins.
#[must_use]
pub fn paragraph_parents(doc: &Document) -> Vec<Option<NodeRef<'_>>> {
    let mut seen: HashSet<NodeId> = HashSet::new();
    let mut parents = Vec::new();
    for paragraph in doc.select("p").nodes() {
        match dom::closest_ancestor(paragraph, PARAGRAPH_CONTAINER_TAGS) {
            Some(parent) => {
                if seen.insert(parent.id) {
                    parents.push(Some(parent));
                }
            }
            None => parents.push(None),
        }
    }
    parents
}
