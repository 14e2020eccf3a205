//! End-to-end rendering tests over realistic guide bodies.

use guidemark::{render, render_html};

// ============================================================================
// Guide Scenarios
// ============================================================================

#[test]
fn test_getting_started_scenario() {
    let page = render("## Getting Started\nSome *italic* and **bold** text.");

    assert!(
        page.html
            .contains(r#"<h2 id="getting-started">Getting Started</h2>"#)
    );
    assert!(page.html.contains("<em>italic</em>"));
    assert!(page.html.contains("<strong>bold</strong>"));

    assert_eq!(page.toc.len(), 1);
    assert_eq!(page.toc[0].id, "getting-started");
    assert_eq!(page.toc[0].text, "Getting Started");
    assert_eq!(page.toc[0].level, 2);
}

#[test]
fn test_code_isolation() {
    // Inline rules never fire inside fenced code.
    let html = render_html("```\n*a*\n```");
    assert_eq!(html, "<pre><code>*a*</code></pre>\n");
    assert!(!html.contains("<em>"));
}

#[test]
fn test_list_grouping_counts() {
    let html = render_html("- one\n- two\n- three\n- four");
    assert_eq!(html.matches("<ul>").count(), 1);
    assert_eq!(html.matches("</ul>").count(), 1);
    assert_eq!(html.matches("<li>").count(), 4);
}

#[test]
fn test_list_switch_opens_new_wrapper() {
    let html = render_html("- a\n- b\n1. c\n2. d");
    assert_eq!(html.matches("<ul>").count(), 1);
    assert_eq!(html.matches("<ol>").count(), 1);
    let ul_end = html.find("</ul>").unwrap();
    let ol_start = html.find("<ol>").unwrap();
    assert!(ul_end < ol_start);
}

// ============================================================================
// Whole-Document Shape
// ============================================================================

#[test]
fn test_full_guide_renders_every_block_kind() {
    let body = "\
## Overview
First line.
Second line.

> A single-line note.

### Steps
1. Gather materials
2. Apply *pressure*

---

```toml
threads = 4
```

Closing [reference](https://example.com/docs).
";
    let html = render_html(body);

    assert!(html.contains(r#"<h2 id="overview">Overview</h2>"#));
    assert!(html.contains("<p>First line.<br/>Second line.</p>"));
    assert!(html.contains("<blockquote>A single-line note.</blockquote>"));
    assert!(html.contains(r#"<h3 id="steps">Steps</h3>"#));
    assert!(html.contains("<ol>\n<li>Gather materials</li>\n<li>Apply <em>pressure</em></li>\n</ol>"));
    assert!(html.contains("<hr />"));
    assert!(html.contains("<pre><code class=\"language-toml\">threads = 4</code></pre>"));
    assert!(html.contains(r#"<a href="https://example.com/docs">reference</a>"#));
}

#[test]
fn test_malformed_input_degrades_to_text() {
    // Unterminated fence, stray emphasis, half a link: still a page.
    let html = render_html("**unclosed\n[half](link\n```\nstuck in fence");
    assert!(html.contains("**unclosed"));
    assert!(html.contains("[half](link"));
    assert!(html.contains("stuck in fence"));
}

#[test]
fn test_h1_is_not_an_anchor() {
    // Page titles come from front-matter; a `# ` line is ordinary prose.
    let page = render("# Big Title\n## Real Section");
    assert_eq!(page.toc.len(), 1);
    assert_eq!(page.toc[0].id, "real-section");
    assert!(!page.html.contains("<h1"));
    assert!(page.html.contains("# Big Title"));
}

#[test]
fn test_blank_lines_between_lists_split_groups() {
    let html = render_html("- a\n\n- b");
    assert_eq!(html.matches("<ul>").count(), 2);
}

#[test]
fn test_indented_code_line_is_prose() {
    // No four-space code blocks in this subset; only fences.
    let html = render_html("    let x = 1;");
    assert!(html.starts_with("<p>"));
}
