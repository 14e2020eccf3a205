//! Content loading: front-matter extraction and document discovery.
//!
//! A [`SourceDocument`] pairs typed YAML front-matter with the raw markdown
//! body of a guide. This is the only fallible, I/O-bearing layer; rendering
//! itself is pure (see [`crate::markdown`]).
//!
//! Front-matter uses the authoring format's camelCase keys and may carry a
//! hand-curated `toc` override. The override always wins over the extracted
//! TOC, with no cross-check against the body's actual headings; pipelines
//! that want to catch stale curation can call
//! [`SourceDocument::toc_is_stale`].

use std::fs;
use std::path::Path;

use log::{trace, warn};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::markdown::{Heading, RenderedDocument, extract_toc, render};
use crate::util::decode_text;

/// Guide front-matter (camelCase keys, matching the authoring format).
///
/// `title` is required; everything else defaults when absent. All fields are
/// opaque to the rendering core and flow through to the page layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Frontmatter {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub date_published: String,
    #[serde(default)]
    pub date_modified: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub keywords: Vec<String>,
    /// Hand-curated TOC. When present it is used as-is.
    #[serde(default)]
    pub toc: Option<Vec<Heading>>,
    #[serde(default)]
    pub related_guides: Vec<RelatedLink>,
    #[serde(default)]
    pub faqs: Vec<FaqItem>,
}

/// Link to a related guide, shown alongside the article.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelatedLink {
    pub title: String,
    pub url: String,
    #[serde(default)]
    pub description: String,
}

/// Question/answer pair rendered in a page's FAQ section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FaqItem {
    pub question: String,
    pub answer: String,
}

/// A content document: front-matter plus raw markdown body.
///
/// Created once per render request and immutable for its lifetime.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceDocument {
    pub slug: String,
    pub frontmatter: Frontmatter,
    pub body: String,
}

impl SourceDocument {
    /// Parse a raw `.md` file: `---`-delimited YAML front-matter, then body.
    pub fn parse(slug: impl Into<String>, raw: &str) -> Result<Self> {
        let (matter, body) = split_frontmatter(raw);
        let frontmatter = serde_yaml::from_str(matter.unwrap_or_default())?;
        Ok(Self {
            slug: slug.into(),
            frontmatter,
            body: body.to_string(),
        })
    }

    /// Render the body, honoring a front-matter TOC override.
    pub fn render(&self) -> RenderedDocument {
        let mut rendered = render(&self.body);
        if let Some(toc) = &self.frontmatter.toc {
            rendered.toc = toc.clone();
        }
        rendered
    }

    /// Whether the front-matter TOC override has drifted from the body's
    /// actual headings.
    ///
    /// Overrides always win; this is an opt-in check for build pipelines
    /// that want to warn about stale curation. Always `false` without an
    /// override.
    pub fn toc_is_stale(&self) -> bool {
        let Some(toc) = &self.frontmatter.toc else {
            return false;
        };
        let actual = extract_toc(&self.body);
        let stale =
            toc.len() != actual.len() || toc.iter().zip(&actual).any(|(a, b)| a.id != b.id);
        if stale {
            warn!(
                "front-matter TOC for '{}' no longer matches body headings",
                self.slug
            );
        }
        stale
    }
}

/// Load a single document by slug from a content directory.
///
/// Returns `Ok(None)` when `<dir>/<slug>.md` does not exist.
pub fn load_document(dir: &Path, slug: &str) -> Result<Option<SourceDocument>> {
    let path = dir.join(format!("{slug}.md"));
    if !path.is_file() {
        return Ok(None);
    }
    let bytes = fs::read(&path)?;
    SourceDocument::parse(slug, &decode_text(&bytes)).map(Some)
}

/// Load every `.md` document in a directory, sorted by slug.
///
/// A missing directory yields an empty list, matching the behavior of a
/// content tree that simply has no guides yet. Documents whose front-matter
/// fails to parse are skipped with a warning rather than failing the batch.
pub fn load_all(dir: &Path) -> Result<Vec<SourceDocument>> {
    let mut docs = Vec::new();
    if !dir.is_dir() {
        return Ok(docs);
    }

    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        let Some(slug) = path
            .file_name()
            .and_then(|n| n.to_str())
            .and_then(|n| n.strip_suffix(".md"))
        else {
            continue;
        };
        if !path.is_file() {
            continue;
        }

        let bytes = fs::read(&path)?;
        match SourceDocument::parse(slug, &decode_text(&bytes)) {
            Ok(doc) => docs.push(doc),
            Err(e) => warn!("skipping {}: {e}", path.display()),
        }
    }

    docs.sort_by(|a, b| a.slug.cmp(&b.slug));
    trace!("loaded {} documents from {}", docs.len(), dir.display());
    Ok(docs)
}

/// Split `---`-delimited YAML front-matter from the body.
///
/// Returns `(front_matter, body)`. Inputs without a leading `---` line, or
/// with an unterminated front-matter block, have no front-matter and the
/// whole input is body.
fn split_frontmatter(raw: &str) -> (Option<&str>, &str) {
    let Some(rest) = raw
        .strip_prefix("---\n")
        .or_else(|| raw.strip_prefix("---\r\n"))
    else {
        return (None, raw);
    };

    let finder = memchr::memmem::Finder::new(b"\n---");
    let mut from = 0;
    while let Some(pos) = finder.find(&rest.as_bytes()[from..]) {
        let at = from + pos;
        let after = &rest[at + "\n---".len()..];
        // The closing delimiter must sit on its own line.
        let body = if let Some(b) = after.strip_prefix("\r\n") {
            Some(b)
        } else if let Some(b) = after.strip_prefix('\n') {
            Some(b)
        } else if after.is_empty() {
            Some(after)
        } else {
            None
        };
        if let Some(body) = body {
            return (Some(&rest[..at]), body);
        }
        from = at + 1;
    }

    (None, raw)
}
