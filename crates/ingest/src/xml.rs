//! XML role supplier.
//!
//! Roles are the trimmed text content of every element whose name equals the
//! configured role element, in document order. A single streaming pass over
//! the document also checks that the elements nest into exactly one tree.

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::time::Instant;

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::IngestError;

/// Element name used when nothing else is configured.
pub const DEFAULT_ROLE_ELEMENT: &str = "role";

/// Summary of an XML role document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct XmlStatistics {
    pub root_tag: String,
    /// Every element in the document, the root included.
    pub total_elements: usize,
    /// Non-empty role texts found.
    pub total_roles: usize,
    pub file_size_bytes: u64,
    pub file_path: String,
}

/// A role text together with the attributes requested from its element.
///
/// Every requested attribute has an entry; attributes absent from the element
/// map to `""`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoleRecord {
    pub name: String,
    pub attributes: BTreeMap<String, String>,
}

#[derive(Debug, Default)]
struct XmlScan {
    root_tag: String,
    element_count: usize,
    roles: Vec<RoleRecord>,
}

/// Parse role texts out of an in-memory XML document.
pub fn parse_xml_roles(xml: &str, role_element: &str) -> Result<Vec<String>, IngestError> {
    scan(xml, role_element, &[]).map(|scan| scan.roles.into_iter().map(|r| r.name).collect())
}

/// Parse roles and the named attributes of their elements, e.g.
/// `<role level="senior" department="engineering">Software Engineer</role>`.
pub fn parse_roles_with_attributes(
    xml: &str,
    role_element: &str,
    attributes: &[&str],
) -> Result<Vec<RoleRecord>, IngestError> {
    scan(xml, role_element, attributes).map(|scan| scan.roles)
}

/// Lenient file variant of [`parse_roles_with_attributes`]: any failure
/// yields an empty list and a `warn` event.
pub fn extract_roles_with_attributes(
    path: impl AsRef<Path>,
    role_element: &str,
    attributes: &[&str],
) -> Vec<RoleRecord> {
    let path = path.as_ref();
    let parsed = fs::read_to_string(path)
        .map_err(IngestError::from)
        .and_then(|content| parse_roles_with_attributes(&content, role_element, attributes));

    match parsed {
        Ok(records) => {
            info!(
                path = %path.display(),
                role_element,
                roles = records.len(),
                "xml_role_records_extracted"
            );
            records
        }
        Err(err) => {
            warn!(path = %path.display(), error = %err, "xml_role_records_failure");
            Vec::new()
        }
    }
}

/// Read and parse role texts from an XML file.
pub fn read_xml_roles(path: impl AsRef<Path>, role_element: &str) -> Result<Vec<String>, IngestError> {
    let path = path.as_ref();
    let start = Instant::now();
    let content = fs::read_to_string(path)?;
    let roles = parse_xml_roles(&content, role_element)?;
    info!(
        path = %path.display(),
        role_element,
        roles = roles.len(),
        elapsed_micros = start.elapsed().as_micros(),
        "xml_roles_extracted"
    );
    Ok(roles)
}

/// Lenient variant of [`read_xml_roles`].
///
/// A missing file, unreadable content or malformed XML yields an empty list
/// and a `warn` event instead of an error.
pub fn extract_roles_from_xml(path: impl AsRef<Path>, role_element: &str) -> Vec<String> {
    let path = path.as_ref();
    match read_xml_roles(path, role_element) {
        Ok(roles) => roles,
        Err(err) => {
            warn!(path = %path.display(), error = %err, "xml_roles_failure");
            Vec::new()
        }
    }
}

/// Check that the file exists and holds a well-formed XML document.
pub fn validate_xml_structure(path: impl AsRef<Path>) -> Result<(), IngestError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    // Any element name works here; only the structure is inspected.
    let scan = scan(&content, DEFAULT_ROLE_ELEMENT, &[])?;
    debug!(
        path = %path.display(),
        root_tag = %scan.root_tag,
        elements = scan.element_count,
        "xml_well_formed"
    );
    Ok(())
}

/// Collect [`XmlStatistics`] for a role document.
pub fn xml_statistics(path: impl AsRef<Path>, role_element: &str) -> Result<XmlStatistics, IngestError> {
    let path = path.as_ref();
    let file_size_bytes = fs::metadata(path)?.len();
    let content = fs::read_to_string(path)?;
    let scan = scan(&content, role_element, &[])?;

    Ok(XmlStatistics {
        root_tag: scan.root_tag,
        total_elements: scan.element_count,
        total_roles: scan.roles.len(),
        file_size_bytes,
        file_path: path.display().to_string(),
    })
}

fn scan(xml: &str, role_element: &str, attributes: &[&str]) -> Result<XmlScan, IngestError> {
    let mut reader = Reader::from_str(xml);
    reader.trim_text(true);

    let target = role_element.as_bytes();
    let mut buf = Vec::new();
    let mut open: Vec<Vec<u8>> = Vec::new();
    // Requested attributes of each open role element, innermost last.
    let mut role_attrs: Vec<BTreeMap<String, String>> = Vec::new();
    let mut root_tag: Option<String> = None;
    let mut scan = XmlScan::default();

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(e) => {
                enter_element(&mut root_tag, open.is_empty(), e.name().as_ref())?;
                scan.element_count += 1;
                if e.name().as_ref() == target {
                    role_attrs.push(read_attributes(&e, attributes)?);
                }
                open.push(e.name().as_ref().to_vec());
            }
            Event::Empty(e) => {
                enter_element(&mut root_tag, open.is_empty(), e.name().as_ref())?;
                scan.element_count += 1;
            }
            Event::End(e) => match open.pop() {
                Some(name) if name.as_slice() == target => {
                    role_attrs.pop();
                }
                Some(_) => {}
                None => {
                    return Err(IngestError::Malformed(format!(
                        "unexpected closing tag </{}>",
                        String::from_utf8_lossy(e.name().as_ref())
                    )));
                }
            },
            Event::Text(e) => {
                if open.last().is_some_and(|name| name.as_slice() == target) {
                    push_role(&mut scan.roles, e.unescape()?, role_attrs.last());
                }
            }
            Event::CData(e) => {
                if open.last().is_some_and(|name| name.as_slice() == target) {
                    push_role(&mut scan.roles, String::from_utf8_lossy(&e), role_attrs.last());
                }
            }
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    if let Some(name) = open.last() {
        return Err(IngestError::Malformed(format!(
            "unclosed element <{}>",
            String::from_utf8_lossy(name)
        )));
    }
    scan.root_tag = root_tag.ok_or(IngestError::MissingRoot)?;
    Ok(scan)
}

fn enter_element(root_tag: &mut Option<String>, at_top: bool, name: &[u8]) -> Result<(), IngestError> {
    if !at_top {
        return Ok(());
    }
    if root_tag.is_some() {
        return Err(IngestError::Malformed(format!(
            "second root element <{}>",
            String::from_utf8_lossy(name)
        )));
    }
    *root_tag = Some(String::from_utf8_lossy(name).into_owned());
    Ok(())
}

fn read_attributes(
    element: &BytesStart<'_>,
    wanted: &[&str],
) -> Result<BTreeMap<String, String>, IngestError> {
    let mut found: BTreeMap<String, String> =
        wanted.iter().map(|name| (name.to_string(), String::new())).collect();
    if wanted.is_empty() {
        return Ok(found);
    }
    for attr in element.attributes() {
        let attr = attr.map_err(quick_xml::Error::from)?;
        let key = String::from_utf8_lossy(attr.key.as_ref());
        if let Some(slot) = found.get_mut(&*key) {
            *slot = attr.unescape_value()?.into_owned();
        }
    }
    Ok(found)
}

fn push_role(roles: &mut Vec<RoleRecord>, text: Cow<'_, str>, attributes: Option<&BTreeMap<String, String>>) {
    let trimmed = text.trim();
    if !trimmed.is_empty() {
        roles.push(RoleRecord {
            name: trimmed.to_string(),
            attributes: attributes.cloned().unwrap_or_default(),
        });
    }
}
