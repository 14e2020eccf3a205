//! Inline span transforms for prose text.
//!
//! A fixed, order-sensitive substitution pipeline: code spans first (their
//! content is escaped and shielded from every later step), then emphasis
//! longest-match first, then links. Ambiguous constructs resolve
//! deterministically by pipeline order rather than backtracking; stray
//! markers pass through as literal text.

use std::sync::LazyLock;

use regex::Regex;

use super::escape::escape_html;

static CODE_SPAN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"`([^`]+)`").unwrap());
static STRONG_EM_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*\*\*(.+?)\*\*\*").unwrap());
static STRONG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*\*(.+?)\*\*").unwrap());
static EM_STAR_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*(.+?)\*").unwrap());
static EM_UNDERSCORE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"_(.+?)_").unwrap());
static LINK_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").unwrap());

/// Apply inline span substitutions to one line of prose.
///
/// Never called on fenced code content; the tokenizer keeps fences verbatim.
///
/// # Examples
///
/// ```
/// use guidemark::markdown::render_inline;
///
/// assert_eq!(render_inline("some *italic* text"), "some <em>italic</em> text");
/// assert_eq!(render_inline("`*not em*`"), "<code>*not em*</code>");
/// ```
pub fn render_inline(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + text.len() / 4);
    let mut last = 0;

    // Code spans are carved out first so emphasis and link rules never fire
    // inside them.
    for caps in CODE_SPAN_RE.captures_iter(text) {
        let m = caps.get(0).expect("match group 0 always present");
        out.push_str(&apply_spans(&text[last..m.start()]));
        out.push_str("<code>");
        out.push_str(&escape_html(&caps[1]));
        out.push_str("</code>");
        last = m.end();
    }
    out.push_str(&apply_spans(&text[last..]));

    out
}

/// Emphasis (longest match first), then links.
fn apply_spans(text: &str) -> String {
    let text = STRONG_EM_RE.replace_all(text, "<strong><em>$1</em></strong>");
    let text = STRONG_RE.replace_all(&text, "<strong>$1</strong>");
    let text = EM_STAR_RE.replace_all(&text, "<em>$1</em>");
    let text = EM_UNDERSCORE_RE.replace_all(&text, "<em>$1</em>");
    LINK_RE
        .replace_all(&text, r#"<a href="$2">$1</a>"#)
        .into_owned()
}
