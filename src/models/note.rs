use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A stored note. `id` and `created_at` are assigned by the store at
/// creation and never change afterwards.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: i64,
    pub title: String,
    /// `None` serializes as JSON null
    pub content: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Request body for create and update.
///
/// `title` is optional here so a missing field reaches the validator and
/// comes back as a field error instead of a deserialization failure.
#[derive(Debug, Deserialize)]
pub struct NotePayload {
    pub title: Option<String>,
    pub content: Option<String>,
}
