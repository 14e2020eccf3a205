//! Pure slug generation for heading anchors.
//!
//! Every anchor id in the rendered HTML and every TOC entry id is produced by
//! [`slugify`] over text extracted with the same helpers, so the two views of
//! a document cannot disagree on where a heading lives.

use std::sync::LazyLock;

use regex::Regex;

use super::inline::render_inline;

static TAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]+>").unwrap());

/// Generate a URL-safe slug from plain heading text.
///
/// Lowercases the input, collapses every maximal run of characters outside
/// `[a-z0-9]` to a single hyphen, and trims leading/trailing hyphens. A
/// heading made only of punctuation slugs to the empty string; that is a
/// valid (if degenerate) anchor, not an error.
///
/// Two headings with identical text produce identical, colliding ids; no
/// disambiguation is performed.
///
/// # Examples
///
/// ```
/// use guidemark::slugify;
///
/// assert_eq!(slugify("Getting Started"), "getting-started");
/// assert_eq!(slugify("Hello, World!"), "hello-world");
/// assert_eq!(slugify("  Multiple   Spaces  "), "multiple-spaces");
/// ```
pub fn slugify(text: &str) -> String {
    text.chars()
        .map(|c| {
            let c = c.to_ascii_lowercase();
            if c.is_ascii_lowercase() || c.is_ascii_digit() {
                c
            } else {
                '-'
            }
        })
        .collect::<String>()
        .split('-')
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}

/// Reduce a raw markdown heading to plain text.
///
/// Runs the inline span pipeline, then strips the resulting tags. The
/// assembler's id pass strips tags from already-rendered headings; routing
/// the TOC extractor through the same two steps guarantees both sides slug
/// identical bytes.
pub fn plain_text(raw: &str) -> String {
    strip_tags(&render_inline(raw))
}

/// Remove HTML tags, leaving only inner text.
pub fn strip_tags(html: &str) -> String {
    TAG_RE.replace_all(html, "").into_owned()
}
