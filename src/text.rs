//! Rendered text of DOM nodes.
//!
//! A parsed document has no layout engine, so this approximates what a
//! browser's `innerText` returns: script and style contents are skipped,
//! hidden elements are skipped, whitespace inside running text collapses to
//! single spaces, and block boundaries become line breaks (two for paragraphs
//! and headings, one for other blocks). Cells of a table row are separated by
//! a tab. `<pre>` content is kept verbatim.

use dom_query::{NodeRef, Selection};

use crate::dom;

/// Elements whose contents are never rendered.
const SKIPPED_TAGS: &[&str] = &[
    "script", "style", "noscript", "template", "head", "title", "meta", "link",
];

/// Elements separated from their neighbours by a blank line.
const PARAGRAPH_TAGS: &[&str] = &["p", "h1", "h2", "h3", "h4", "h5", "h6"];

/// Elements separated from their neighbours by a single line break.
const BLOCK_TAGS: &[&str] = &[
    "address", "article", "aside", "blockquote", "caption", "dd", "details", "dialog", "div",
    "dl", "dt", "fieldset", "figcaption", "figure", "footer", "form", "header", "hgroup", "hr",
    "li", "main", "nav", "ol", "pre", "section", "summary", "table", "tr", "ul",
];

/// Table cells, separated from the next cell in their row by a tab.
const CELL_TAGS: &[&str] = &["td", "th"];

/// Rendered text of the first node in a selection. Empty for an empty selection.
#[must_use]
pub fn rendered_text(sel: &Selection) -> String {
    sel.nodes().first().map(rendered_node_text).unwrap_or_default()
}

/// Rendered text of a single node and its descendants.
#[must_use]
pub fn rendered_node_text(node: &NodeRef) -> String {
    let mut renderer = Renderer::default();
    let mut stack = vec![Step::Enter(*node)];

    while let Some(step) = stack.pop() {
        match step {
            Step::Enter(node) => {
                if node.is_text() {
                    renderer.push_text(&node.text());
                    continue;
                }
                if !node.is_element() {
                    stack.extend(node.children().into_iter().rev().map(Step::Enter));
                    continue;
                }

                let tag = dom::node_tag(&node).unwrap_or_default();
                if SKIPPED_TAGS.contains(&tag.as_str()) || is_hidden(&node) {
                    continue;
                }
                if tag == "br" {
                    renderer.line_break();
                    continue;
                }

                let breaks = block_breaks(&tag);
                let preformatted = tag == "pre";
                let cell = CELL_TAGS.contains(&tag.as_str());
                renderer.request_breaks(breaks);
                if preformatted {
                    renderer.pre_depth += 1;
                }
                stack.push(Step::Exit {
                    breaks,
                    preformatted,
                    cell,
                });
                stack.extend(node.children().into_iter().rev().map(Step::Enter));
            }
            Step::Exit {
                breaks,
                preformatted,
                cell,
            } => {
                renderer.request_breaks(breaks);
                if preformatted {
                    renderer.pre_depth -= 1;
                }
                if cell {
                    renderer.pending_tab = true;
                }
            }
        }
    }

    renderer.out
}

/// Length in characters (Unicode scalar values), the unit all thresholds use.
///
/// This is not a browser's `String.length`, which counts UTF-16 code units:
/// a character outside the Basic Multilingual Plane (most emoji) counts once
/// here and twice there.
#[inline]
#[must_use]
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Truncate to at most `max_chars` characters. Returns `None` when the text
/// already fits.
#[must_use]
pub fn truncate_chars(text: &str, max_chars: usize) -> Option<&str> {
    text.char_indices().nth(max_chars).map(|(idx, _)| &text[..idx])
}

enum Step<'a> {
    Enter(NodeRef<'a>),
    Exit {
        breaks: usize,
        preformatted: bool,
        cell: bool,
    },
}

fn block_breaks(tag: &str) -> usize {
    if PARAGRAPH_TAGS.contains(&tag) {
        2
    } else if BLOCK_TAGS.contains(&tag) {
        1
    } else {
        0
    }
}

fn is_hidden(node: &NodeRef) -> bool {
    node.attrs().iter().any(|attr| {
        let name: &str = &attr.name.local;
        if name == "hidden" {
            return true;
        }
        if name == "style" {
            let style: String = attr.value.split_whitespace().collect::<String>().to_ascii_lowercase();
            return style.contains("display:none");
        }
        false
    })
}

#[derive(Default)]
struct Renderer {
    out: String,
    pending_breaks: usize,
    pending_space: bool,
    pending_tab: bool,
    pre_depth: usize,
}

impl Renderer {
    fn request_breaks(&mut self, breaks: usize) {
        self.pending_breaks = self.pending_breaks.max(breaks);
    }

    fn line_break(&mut self) {
        self.flush_separators();
        self.out.push('\n');
        self.pending_space = false;
    }

    /// Write pending line breaks, or the tab after a table cell when no break
    /// is pending. Returns whether anything was written.
    fn flush_separators(&mut self) -> bool {
        let mut wrote = false;
        if self.pending_breaks > 0 && !self.out.is_empty() {
            while self.out.ends_with(' ') {
                self.out.pop();
            }
            let existing = self.out.chars().rev().take_while(|c| *c == '\n').count();
            for _ in existing..self.pending_breaks {
                self.out.push('\n');
            }
            wrote = true;
        } else if self.pending_tab && self.pending_breaks == 0 && !self.out.is_empty() {
            while self.out.ends_with(' ') {
                self.out.pop();
            }
            if !self.out.ends_with('\n') {
                self.out.push('\t');
                wrote = true;
            }
        }
        if wrote {
            self.pending_space = false;
        }
        self.pending_breaks = 0;
        self.pending_tab = false;
        wrote
    }

    fn push_text(&mut self, raw: &str) {
        if self.pre_depth > 0 {
            if !raw.is_empty() {
                self.flush_separators();
                self.out.push_str(raw);
                self.pending_space = false;
            }
            return;
        }

        let starts_with_space = raw.starts_with(char::is_whitespace);
        let ends_with_space = raw.ends_with(char::is_whitespace);
        let mut words = raw.split_whitespace().peekable();

        if words.peek().is_none() {
            if !raw.is_empty() {
                self.pending_space = true;
            }
            return;
        }

        if !self.flush_separators() {
            let at_line_start = self.out.is_empty() || self.out.ends_with('\n');
            if (self.pending_space || starts_with_space) && !at_line_start && !self.out.ends_with(' ') {
                self.out.push(' ');
            }
        }

        let mut first = true;
        for word in words {
            if !first {
                self.out.push(' ');
            }
            self.out.push_str(word);
            first = false;
        }
        self.pending_space = ends_with_space;
    }
}
