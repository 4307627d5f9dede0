//! Composite extraction modules
//!
//! Each module projects one structured product out of a parsed document:
//! page metadata, form descriptors, table matrices, JSON-LD blocks and
//! contact identifiers.

mod contact;
mod forms;
mod jsonld;
mod metadata;
mod tables;

pub use contact::*;
pub use forms::*;
pub use jsonld::*;
pub use metadata::*;
pub use tables::*;

use serde::{Deserialize, Serialize};

/// Page metadata assembled from the title element and common meta tags.
///
/// `title` is absent when the title element is missing or empty after
/// trimming; the meta-tag fields are plain strings that default to "" when
/// the tag is not found. The asymmetry matches the original output shape.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub description: String,
    pub author: String,
    pub keywords: String,
    pub og_title: String,
    pub og_description: String,
    pub og_image: String,
    pub twitter_title: String,
    pub twitter_description: String,
    pub twitter_image: String,
}

/// Descriptor for a single form element
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormDetails {
    /// `action` attribute, empty when unspecified
    pub action: String,
    /// `method` attribute, literal "GET" when unspecified
    pub method: String,
    /// Field names in document order: name, else id, else "unknown"
    pub inputs: Vec<String>,
}

/// Cell matrix of a single table: one row per `tr`, one cell per `td`/`th`
pub type TableMatrix = Vec<Vec<String>>;

/// A single image reference found in the document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageData {
    /// Normalized `src` value
    pub src: String,
    /// `alt` attribute if present
    pub alt: Option<String>,
}

/// Contact identifiers found in the document text, first-seen order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub emails: Vec<String>,
    pub phones: Vec<String>,
}
