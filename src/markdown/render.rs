//! HTML assembly and TOC extraction.
//!
//! One source body yields two synchronized views: the assembled HTML and the
//! ordered table of contents. The assembler renders first and slugs second,
//! so anchor ids are always computed from final rendered text; the TOC
//! extractor reaches the same text through [`plain_text`]. Both sides call
//! the same [`slugify`], which is the whole anchor contract.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::block::{Block, HEADING_RE, tokenize};
use super::escape::escape_html;
use super::inline::render_inline;
use super::slugify::{plain_text, slugify, strip_tags};

static HEADING_TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<h([23])>(.*?)</h[23]>").unwrap());

/// A document heading with its anchor id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Heading {
    pub id: String,
    pub text: String,
    pub level: u8,
}

/// The two synchronized views of a rendered document.
///
/// Produced fresh on every call; the core keeps no cross-call state. Callers
/// that want caching can wrap [`render`] and key by content hash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedDocument {
    /// Article HTML with `id` attributes on every `<h2>`/`<h3>`.
    pub html: String,
    /// Headings in document order; ids identical to those in `html`.
    pub toc: Vec<Heading>,
}

/// Render a document body to HTML plus its table of contents.
///
/// Pure and infallible: malformed markup degrades to literal text, never to
/// a failed render.
///
/// # Examples
///
/// ```
/// use guidemark::render;
///
/// let page = render("## Getting Started\nSome *italic* text.");
/// assert!(page.html.contains(r#"<h2 id="getting-started">Getting Started</h2>"#));
/// assert_eq!(page.toc[0].id, "getting-started");
/// assert_eq!(page.toc[0].level, 2);
/// ```
pub fn render(body: &str) -> RenderedDocument {
    RenderedDocument {
        html: render_html(body),
        toc: extract_toc(body),
    }
}

/// Render only the HTML view of a body.
pub fn render_html(body: &str) -> String {
    inject_heading_ids(&assemble(&tokenize(body)))
}

/// Open grouping state carried between blocks.
enum Group {
    None,
    List(bool),
    Paragraph,
}

/// Join tokenized blocks into an HTML string.
///
/// Consecutive list items of the same orderedness share one `<ul>`/`<ol>`;
/// a switch in orderedness or any intervening non-list block closes the
/// group. Consecutive prose lines join with `<br/>` inside one paragraph;
/// a blank line starts the next.
pub fn assemble(blocks: &[Block]) -> String {
    let mut out = String::new();
    let mut group = Group::None;

    for block in blocks {
        // Close the open list or paragraph unless this block continues it.
        match (&group, block) {
            (Group::List(open), Block::ListItem { ordered, .. }) if open == ordered => {}
            (Group::Paragraph, Block::Prose(_)) => {}
            _ => close_group(&mut out, &mut group),
        }

        match block {
            Block::Heading { level, text } => {
                out.push_str(&format!("<h{level}>{}</h{level}>\n", render_inline(text)));
            }
            Block::ListItem { ordered, text } => {
                if matches!(group, Group::None) {
                    out.push_str(if *ordered { "<ol>\n" } else { "<ul>\n" });
                    group = Group::List(*ordered);
                }
                out.push_str(&format!("<li>{}</li>\n", render_inline(text)));
            }
            Block::Quote(text) => {
                out.push_str(&format!(
                    "<blockquote>{}</blockquote>\n",
                    render_inline(text)
                ));
            }
            Block::Rule => out.push_str("<hr />\n"),
            Block::Code { lang, code } => {
                match lang {
                    Some(lang) => {
                        out.push_str(&format!("<pre><code class=\"language-{lang}\">"));
                    }
                    None => out.push_str("<pre><code>"),
                }
                out.push_str(&escape_html(code.trim()));
                out.push_str("</code></pre>\n");
            }
            Block::Prose(text) => {
                if matches!(group, Group::Paragraph) {
                    out.push_str("<br/>");
                } else {
                    out.push_str("<p>");
                    group = Group::Paragraph;
                }
                out.push_str(&render_inline(text));
            }
            Block::Blank => {}
        }
    }

    close_group(&mut out, &mut group);
    out
}

fn close_group(out: &mut String, group: &mut Group) {
    match group {
        Group::List(true) => out.push_str("</ol>\n"),
        Group::List(false) => out.push_str("</ul>\n"),
        Group::Paragraph => out.push_str("</p>\n"),
        Group::None => {}
    }
    *group = Group::None;
}

/// Second pass over assembled HTML: give every `<h2>`/`<h3>` an anchor id.
///
/// The slug is computed from the rendered heading with its tags stripped,
/// which is byte-for-byte what [`extract_toc`] computes from raw source.
pub fn inject_heading_ids(html: &str) -> String {
    HEADING_TAG_RE
        .replace_all(html, |caps: &regex::Captures| {
            let level = &caps[1];
            let inner = &caps[2];
            let slug = slugify(&strip_tags(inner));
            format!("<h{level} id=\"{slug}\">{inner}</h{level}>")
        })
        .into_owned()
}

/// Scan raw source lines for level-2/3 headings, in document order.
///
/// Independent of HTML rendering; ids match the assembler's because both go
/// through the same plain-text extraction and [`slugify`]. Two headings with
/// identical text produce identical, colliding ids.
pub fn extract_toc(body: &str) -> Vec<Heading> {
    body.lines()
        .filter_map(|line| HEADING_RE.captures(line))
        .map(|caps| {
            let text = plain_text(caps[2].trim_end());
            Heading {
                id: slugify(&text),
                text,
                level: caps[1].len() as u8,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_gets_id() {
        let html = render_html("## Getting Started");
        assert_eq!(html, "<h2 id=\"getting-started\">Getting Started</h2>\n");
    }

    #[test]
    fn test_heading_id_from_rendered_text() {
        // Markup inside the heading is stripped before slugging.
        let html = render_html("### The `render` function");
        assert!(html.contains(r#"<h3 id="the-render-function">"#));
        assert!(html.contains("<code>render</code>"));
    }

    #[test]
    fn test_paragraph_join_and_split() {
        let html = render_html("one\ntwo\n\nthree");
        assert_eq!(html, "<p>one<br/>two</p>\n<p>three</p>\n");
    }

    #[test]
    fn test_unordered_list_grouping() {
        let html = render_html("- a\n- b\n- c");
        assert_eq!(
            html,
            "<ul>\n<li>a</li>\n<li>b</li>\n<li>c</li>\n</ul>\n"
        );
    }

    #[test]
    fn test_orderedness_switch_closes_group() {
        let html = render_html("- a\n1. b");
        assert_eq!(html, "<ul>\n<li>a</li>\n</ul>\n<ol>\n<li>b</li>\n</ol>\n");
    }

    #[test]
    fn test_prose_between_lists_closes_group() {
        let html = render_html("- a\ntext\n- b");
        assert_eq!(
            html,
            "<ul>\n<li>a</li>\n</ul>\n<p>text</p>\n<ul>\n<li>b</li>\n</ul>\n"
        );
    }

    #[test]
    fn test_code_fence_verbatim() {
        let html = render_html("```\n*a*\n```");
        assert_eq!(html, "<pre><code>*a*</code></pre>\n");
    }

    #[test]
    fn test_code_fence_language_class() {
        let html = render_html("```rust\nlet x: u8 = 1;\n```");
        assert_eq!(
            html,
            "<pre><code class=\"language-rust\">let x: u8 = 1;</code></pre>\n"
        );
    }

    #[test]
    fn test_code_fence_escapes_html() {
        let html = render_html("```\n<script>\n```");
        assert_eq!(html, "<pre><code>&lt;script&gt;</code></pre>\n");
    }

    #[test]
    fn test_quote_and_rule() {
        let html = render_html("> single line\n---");
        assert_eq!(html, "<blockquote>single line</blockquote>\n<hr />\n");
    }

    #[test]
    fn test_extract_toc_order_and_levels() {
        let toc = extract_toc("## A\ntext\n### B\n## C");
        let ids: Vec<&str> = toc.iter().map(|h| h.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
        assert_eq!(
            toc.iter().map(|h| h.level).collect::<Vec<_>>(),
            vec![2, 3, 2]
        );
    }

    #[test]
    fn test_extract_toc_strips_markup() {
        let toc = extract_toc("## **Bold** title");
        assert_eq!(toc[0].text, "Bold title");
        assert_eq!(toc[0].id, "bold-title");
    }

    #[test]
    fn test_empty_toc_for_headingless_body() {
        assert!(extract_toc("just prose\n\nmore prose").is_empty());
    }

    #[test]
    fn test_empty_body() {
        let page = render("");
        assert_eq!(page.html, "");
        assert!(page.toc.is_empty());
    }
}
