//! Core types for the todo collection.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// A single to-do record.
///
/// The remote collection owns these; the id and both timestamps are
/// server-assigned and absent until the item has been created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Todo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub completed: bool,
    #[serde(default, rename = "dateCreated", skip_serializing_if = "Option::is_none")]
    pub date_created: Option<Timestamp>,
    #[serde(default, rename = "lastUpdated", skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<Timestamp>,
}

/// Creation payload: the only fields a client may set on a new item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewTodo {
    pub name: String,
    pub description: Option<String>,
    pub completed: bool,
}

/// HAL-style envelope returned by the paginated list endpoint.
///
/// Both fields are required; an envelope missing either one fails
/// deserialization instead of propagating defaults into session state.
#[derive(Debug, Clone, Deserialize)]
pub struct PageEnvelope {
    #[serde(rename = "_embedded")]
    pub embedded: Embedded,
    pub page: PageMeta,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Embedded {
    pub todos: Vec<Todo>,
}

/// Server-reported pagination metadata.
#[derive(Debug, Clone, Deserialize)]
pub struct PageMeta {
    /// Zero-based index of the page actually returned.
    pub number: u32,
    #[serde(rename = "totalPages")]
    pub total_pages: u32,
    #[serde(default)]
    pub size: u32,
    #[serde(default, rename = "totalElements")]
    pub total_elements: u64,
}

/// One entry of the generated page index: the zero-based page value used
/// for navigation paired with its 1-based display label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratedPage {
    pub value: u32,
    pub display_value: u32,
}
