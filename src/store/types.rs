//! Record types held by the document store.
//!
//! These are the persisted shapes; the GraphQL layer maps them into its own
//! response types (see `graphql::schema`).

use serde::{Deserialize, Serialize};

use super::Document;

/// A movie record.
///
/// `director_id` is a soft reference: it may name a director that no longer
/// exists (or never did). Resolution treats a dangling id as "no director".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieRecord {
    pub id: String,
    pub name: String,
    pub genre: String,
    /// Release year, stored as text.
    pub year: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub director_id: Option<String>,
}

/// A director record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectorRecord {
    pub id: String,
    pub name: String,
    pub age: i32,
}

impl Document for MovieRecord {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Document for DirectorRecord {
    fn id(&self) -> &str {
        &self.id
    }
}
