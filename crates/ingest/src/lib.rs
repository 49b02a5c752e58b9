//! Role suppliers
//!
//! This is where role lists enter the system. The matcher only ever sees two
//! plain lists of strings; this crate produces them.
//!
//! ## What we do here
//!
//! - **Read XML role documents** - Stream the document with `quick-xml`, pull
//!   the text of every role element, and reject anything that is not a single
//!   well-formed tree.
//! - **Clean extracted role lists** - Turn a free-form listing (commas,
//!   bullets, numbered lines, `None`) into a deduplicated list.
//! - **Ship a sample** - A six-role document for first runs.
//! - **Log everything** - Structured logs via tracing.
//!
//! ## Main entry points
//!
//! [`read_xml_roles`] and [`parse_xml_roles`] are fallible; [`extract_roles_from_xml`]
//! is the lenient wrapper that logs and returns an empty list instead.
//! [`extract_roles_with_attributes`] also returns chosen attributes of each
//! role element as [`RoleRecord`]s.
//!
//! ## Example
//!
//! ```
//! use ingest::{clean_extracted_roles, parse_xml_roles, DEFAULT_ROLE_ELEMENT};
//!
//! let xml = "<roles><role>Software Engineer</role><role> QA Tester </role></roles>";
//! let xml_roles = parse_xml_roles(xml, DEFAULT_ROLE_ELEMENT).expect("well-formed");
//! assert_eq!(xml_roles, vec!["Software Engineer", "QA Tester"]);
//!
//! let pdf_roles = clean_extracted_roles("1. Software Engineer\n2. Chef");
//! assert_eq!(pdf_roles, vec!["Software Engineer", "Chef"]);
//! ```

mod clean;
mod error;
mod sample;
mod xml;

pub use crate::clean::clean_extracted_roles;
pub use crate::error::IngestError;
pub use crate::sample::{write_sample_xml, SAMPLE_ROLES_XML};
pub use crate::xml::{
    extract_roles_from_xml, extract_roles_with_attributes, parse_roles_with_attributes,
    parse_xml_roles, read_xml_roles, validate_xml_structure, xml_statistics, RoleRecord,
    XmlStatistics, DEFAULT_ROLE_ELEMENT,
};
