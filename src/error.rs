//! Error types for guidemark operations.
//!
//! Only the content-loading layer is fallible. The rendering core absorbs
//! malformed markup locally (best-effort literal text) and never returns an
//! error or panics; the worst outcome of bad markdown is imperfect HTML.

use thiserror::Error;

/// Errors that can occur while loading content documents.
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid front-matter: {0}")]
    Frontmatter(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
