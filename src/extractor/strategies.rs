//! The article text fallback chain.
//!
//! Each strategy maps a document to candidate text. [`STRATEGIES`] lists them
//! in priority order together with the length the trimmed text must exceed.

use dom_query::Document;

use super::candidates::{longest_block_text, main_containers, paragraph_parents};
use crate::dom;
use crate::text::rendered_text;

/// Minimum length (exclusive) of `<article>` text.
pub const ARTICLE_MIN_CHARS: usize = 200;

/// Minimum length (exclusive) of container-derived text, used by both the
/// named-container and paragraph-parent strategies.
pub const CONTAINER_MIN_CHARS: usize = 200;

/// Minimum length (exclusive) of whole-body text.
pub const BODY_MIN_CHARS: usize = 150;

/// One step of the fallback chain.
#[derive(Clone, Copy)]
pub struct Strategy {
    /// Short name used in logs and results.
    pub name: &'static str,
    /// Produces candidate text for a document; may be empty.
    pub run: fn(&Document) -> String,
    /// The trimmed candidate must be strictly longer than this.
    pub min_chars: usize,
}

/// The fallback chain, highest priority first.
pub const STRATEGIES: [Strategy; 4] = [
    Strategy {
        name: "article",
        run: article_element_text,
        min_chars: ARTICLE_MIN_CHARS,
    },
    Strategy {
        name: "main-container",
        run: main_container_text,
        min_chars: CONTAINER_MIN_CHARS,
    },
    Strategy {
        name: "paragraph-parent",
        run: paragraph_parent_text,
        min_chars: CONTAINER_MIN_CHARS,
    },
    Strategy {
        name: "body",
        run: body_text,
        min_chars: BODY_MIN_CHARS,
    },
];

/// Rendered text of the first `<article>` element.
#[must_use]
pub fn article_element_text(doc: &Document) -> String {
    rendered_text(&doc.select_single("article"))
}

/// Longest block text among the named main-content containers.
#[must_use]
pub fn main_container_text(doc: &Document) -> String {
    longest_block_text(main_containers(doc).into_iter().map(Some))
}

/// Longest block text among the nearest containers of all paragraphs.
#[must_use]
pub fn paragraph_parent_text(doc: &Document) -> String {
    longest_block_text(paragraph_parents(doc))
}

/// Rendered text of the whole `<body>`.
#[must_use]
pub fn body_text(doc: &Document) -> String {
    dom::body(doc).map(|body| rendered_text(&body)).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::parse;

    #[test]
    fn strategies_are_in_priority_order() {
        let names: Vec<&str> = STRATEGIES.iter().map(|s| s.name).collect();
        assert_eq!(names, ["article", "main-container", "paragraph-parent", "body"]);
        assert_eq!(STRATEGIES[0].min_chars, 200);
        assert_eq!(STRATEGIES[1].min_chars, 200);
        assert_eq!(STRATEGIES[2].min_chars, 200);
        assert_eq!(STRATEGIES[3].min_chars, 150);
    }

    #[test]
    fn article_text_uses_first_article() {
        let doc = parse("<article>First</article><article>Second</article>");
        assert_eq!(article_element_text(&doc).trim(), "First");
    }

    #[test]
    fn article_text_empty_without_article() {
        let doc = parse("<div role='article'>Not a tag match</div>");
        assert_eq!(article_element_text(&doc), "");
    }

    #[test]
    fn main_container_text_reads_role_main() {
        let doc = parse("<div role='main'><p>Para</p><h2>Head</h2></div>");
        assert_eq!(main_container_text(&doc), "Para\nHead");
    }

    #[test]
    fn body_text_includes_everything_visible() {
        let doc = parse("<body><nav>Menu</nav><p>Text</p><script>x()</script></body>");
        assert_eq!(body_text(&doc).trim(), "Menu\n\nText");
    }
}
