//! Sample role document for first runs and demos.

use std::fs::OpenOptions;
use std::io::{ErrorKind, Write};
use std::path::Path;

use tracing::info;

use crate::error::IngestError;

/// Six-role sample document.
pub const SAMPLE_ROLES_XML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<roles>
    <role>Software Engineer</role>
    <role>Project Manager</role>
    <role>Senior Developer</role>
    <role>QA Tester</role>
    <role>Business Analyst</role>
    <role>Data Scientist</role>
</roles>"#;

/// Write [`SAMPLE_ROLES_XML`] to `path` unless a file is already there.
///
/// Returns `Ok(true)` when the file was created and `Ok(false)` when an
/// existing file was left untouched.
pub fn write_sample_xml(path: impl AsRef<Path>) -> Result<bool, IngestError> {
    let path = path.as_ref();
    let mut file = match OpenOptions::new().write(true).create_new(true).open(path) {
        Ok(file) => file,
        Err(err) if err.kind() == ErrorKind::AlreadyExists => {
            info!(path = %path.display(), "sample_xml_exists");
            return Ok(false);
        }
        Err(err) => return Err(err.into()),
    };
    file.write_all(SAMPLE_ROLES_XML.as_bytes())?;
    info!(path = %path.display(), "sample_xml_created");
    Ok(true)
}
