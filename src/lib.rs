//! # guidemark
//!
//! A small, fast renderer for documentation pages written in a markdown
//! subset, producing HTML with anchorable headings and a synchronized table
//! of contents.
//!
//! ## Features
//!
//! - Markdown subset: headings (levels 2-3), bold/italic, inline code,
//!   fenced code blocks, links, ordered/unordered lists, blockquotes,
//!   horizontal rules, paragraphs
//! - Byte-identical anchor ids between rendered HTML and the TOC
//! - YAML front-matter loading with an optional hand-curated TOC override
//! - Infallible rendering: malformed markup degrades to literal text
//!
//! ## Quick Start
//!
//! ```
//! use guidemark::render;
//!
//! let page = render("## Getting Started\nSome *italic* and **bold** text.");
//! assert!(page.html.contains(r#"<h2 id="getting-started">Getting Started</h2>"#));
//! assert_eq!(page.toc[0].id, "getting-started");
//! ```
//!
//! ## Working with documents
//!
//! The [`SourceDocument`] struct pairs front-matter metadata with a raw body:
//!
//! ```
//! use guidemark::SourceDocument;
//!
//! let raw = "---\ntitle: Combat Basics\nauthor: Editorial Team\n---\n## Stances\n";
//! let doc = SourceDocument::parse("combat-basics", raw).unwrap();
//! let page = doc.render();
//! assert_eq!(page.toc[0].id, "stances");
//! ```
//!
//! ## Anchor contract
//!
//! Every heading in `html` is reachable by appending `#<id>` to the page
//! URL, and the `toc` entry for that heading carries the identical id. Both
//! sides compute ids through the same [`slugify`] over the same plain-text
//! extraction; this is the one bit-exact contract the crate honors.

pub mod content;
pub mod error;
pub mod markdown;
pub(crate) mod util;

pub use content::{FaqItem, Frontmatter, RelatedLink, SourceDocument, load_all, load_document};
pub use error::{Error, Result};
pub use markdown::{Heading, RenderedDocument, extract_toc, render, render_html, slugify};
