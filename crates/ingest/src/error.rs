//! Error types produced by the ingest crate.
//!
//! | Error | Category | Description |
//! |-------|----------|-------------|
//! | [`Io`](IngestError::Io) | I/O | File missing, unreadable, or not writable |
//! | [`Xml`](IngestError::Xml) | Syntax | Tokenizer rejected the document |
//! | [`Malformed`](IngestError::Malformed) | Structure | Unbalanced or stray elements |
//! | [`MissingRoot`](IngestError::MissingRoot) | Structure | Document has no root element |
//!
//! # HTTP Status Code Mapping
//!
//! ```rust
//! use ingest::IngestError;
//!
//! fn to_http_status(error: &IngestError) -> u16 {
//!     match error {
//!         IngestError::Io(_) => 500,
//!         _ => 422, // the caller sent a document we cannot read roles from
//!     }
//! }
//! ```
use std::io;

use thiserror::Error;

/// Errors that can occur while reading role suppliers.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum IngestError {
    /// I/O error (file not found, permission denied, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The XML tokenizer rejected the input.
    ///
    /// ```rust
    /// use ingest::{parse_xml_roles, IngestError};
    ///
    /// let err = parse_xml_roles("<roles><role>A</rol></roles>", "role").unwrap_err();
    /// assert!(matches!(err, IngestError::Xml(_)));
    /// ```
    #[error("XML parsing error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// Well-formed tokens that do not nest into a single document tree.
    #[error("malformed XML: {0}")]
    Malformed(String),

    /// Input contained no element at all.
    #[error("XML document has no root element")]
    MissingRoot,
}
