// src/error.rs

use thiserror::Error;

/// Failures that can actually surface from this crate.
///
/// The normalization pipeline never fails: malformed CSV degrades to an
/// empty or partial table. What remains is the transport seam and the
/// export sink.
#[derive(Debug, Error)]
pub enum SitelogError {
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected status {code} fetching {url}")]
    Status { code: u16, url: String },

    #[error("export sink failed: {0}")]
    Export(String),
}
