//! Pure markdown-subset rendering for documentation pages.
//!
//! This module turns a raw guide body into two synchronized views: HTML with
//! anchorable headings, and an ordered table of contents whose ids resolve to
//! those anchors. The design keeps pure rendering separate from I/O:
//!
//! - [`slugify`]: anchor id generation plus shared plain-text extraction
//! - [`escape`]: HTML escaping for code content
//! - [`inline`]: span-level substitutions (code, emphasis, links)
//! - [`block`]: line-oriented tokenizer with a code-fence state
//! - [`render`]: block assembly, heading-id injection, TOC extraction
//!
//! The content layer ([`crate::content`]) handles I/O orchestration, calling
//! these pure functions per document.
//!
//! ## Design notes
//!
//! - **Render first, slug second**: anchor ids are injected in a second pass
//!   over the assembled HTML so they are always computed from final rendered
//!   text, exactly matching what the TOC extractor computes from raw source.
//! - **Fixed inline order**: code spans, then emphasis longest-match first,
//!   then links. Ambiguity resolves by pipeline order, not backtracking.
//! - **Graceful degradation**: no input fails a render. Unterminated fences
//!   close at end of input; stray markers stay literal. A cosmetically
//!   imperfect page beats no page.
//! - **Colliding ids**: identical heading text yields identical ids, on both
//!   sides of the contract. Deliberately not disambiguated.

mod block;
mod escape;
mod inline;
mod render;
mod slugify;

pub use block::{Block, tokenize};
pub use escape::escape_html;
pub use inline::render_inline;
pub use render::{
    Heading, RenderedDocument, assemble, extract_toc, inject_heading_ids, render, render_html,
};
pub use slugify::{plain_text, slugify, strip_tags};
