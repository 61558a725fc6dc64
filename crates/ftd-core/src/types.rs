//! Shared wire types for FTD management API resources.
//!
//! Every named server resource can be referred to by a lightweight
//! [`ReferenceObject`]; collection responses arrive wrapped in an
//! [`ItemList`] envelope with optional [`Paging`] metadata.

use serde::{Deserialize, Serialize};

/// Minimal handle identifying a server-side resource.
///
/// Immutable once obtained from the server: the appliance assigns `id` and
/// `version`, the client never does.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReferenceObject {
    /// Server-assigned identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Resource name
    pub name: String,
    /// Server-assigned version
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    /// Wire type tag (e.g. `networkobject`)
    #[serde(rename = "type", default, skip_serializing_if = "String::is_empty")]
    pub object_type: String,
}

/// Obtain a [`ReferenceObject`] handle for a full resource record.
pub trait Referenceable {
    /// Return the `{id, name, version, type}` handle for this resource.
    fn reference(&self) -> ReferenceObject;
}

/// Hyperlinks attached to a resource by the server.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Links {
    /// Canonical URL of the resource
    #[serde(rename = "self", default, skip_serializing_if = "Option::is_none")]
    pub self_link: Option<String>,
}

/// Paging metadata returned with collection responses.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Paging {
    /// URLs of previous pages
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub prev: Vec<String>,
    /// URLs of following pages
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub next: Vec<String>,
    /// Page size limit
    #[serde(default)]
    pub limit: u32,
    /// Offset of this page
    #[serde(default)]
    pub offset: u32,
    /// Number of items in this page
    #[serde(default)]
    pub count: u32,
    /// Total number of pages
    #[serde(default)]
    pub pages: u32,
}

/// Envelope for collection responses: `{ "items": [...], "paging": {...} }`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ItemList<T> {
    /// Items in this page
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
    /// Paging metadata, when the server provides it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paging: Option<Paging>,
}

/// Policy governing behavior when a create collides with an existing
/// same-named resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicateAction {
    /// Surface the duplicate error to the caller, leaving the existing
    /// object untouched
    DoNothing,
    /// Overwrite the existing object's mutable fields with the candidate's
    Replace,
}
