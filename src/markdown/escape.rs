//! HTML escaping for code content.
//!
//! Only code spans and fenced code blocks are escaped; prose passes through
//! untouched so authors can drop raw HTML into a page when they need to.

/// Escape HTML special characters in text.
///
/// # Examples
///
/// ```
/// use guidemark::markdown::escape_html;
///
/// assert_eq!(escape_html("a < b"), "a &lt; b");
/// assert_eq!(escape_html(r#"<a href="x">"#), "&lt;a href=&quot;x&quot;&gt;");
/// ```
pub fn escape_html(text: &str) -> String {
    let mut result = String::with_capacity(text.len() + text.len() / 10);

    for c in text.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#039;"),
            _ => result.push(c),
        }
    }

    result
}
