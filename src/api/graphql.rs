//! GraphQL Documents and Envelopes
//!
//! Request/response shapes for the `listNotes` query and `createNote`
//! mutation.

use serde::{Deserialize, Serialize};

use super::{Ack, ServiceError};
use crate::models::Note;

pub const LIST_NOTES: &str = r#"query ListNotes {
  listNotes {
    items { id clientId name description completed }
  }
}"#;

pub const CREATE_NOTE: &str = r#"mutation CreateNote($input: CreateNoteInput!) {
  createNote(input: $input) { id }
}"#;

// ========================
// Envelopes
// ========================

#[derive(Serialize)]
pub struct GraphQlRequest<'a, V: Serialize> {
    pub query: &'a str,
    pub variables: V,
}

#[derive(Debug, Deserialize)]
pub struct GraphQlResponse<T> {
    pub data: Option<T>,
    #[serde(default)]
    pub errors: Vec<GraphQlError>,
}

#[derive(Debug, Deserialize)]
pub struct GraphQlError {
    pub message: String,
}

impl<T> GraphQlResponse<T> {
    /// Errors win over partial data.
    pub fn into_result(self) -> Result<T, ServiceError> {
        if !self.errors.is_empty() {
            return Err(ServiceError::GraphQl(
                self.errors.into_iter().map(|e| e.message).collect(),
            ));
        }
        self.data.ok_or(ServiceError::MissingData)
    }
}

// ========================
// Operation Payloads
// ========================

#[derive(Serialize)]
pub struct NoVariables {}

#[derive(Serialize)]
pub struct CreateNoteVariables<'a> {
    pub input: &'a Note,
}

#[derive(Debug, Deserialize)]
pub struct ListNotesData {
    #[serde(rename = "listNotes")]
    pub list_notes: NoteConnection,
}

#[derive(Debug, Deserialize)]
pub struct NoteConnection {
    #[serde(default)]
    pub items: Vec<Note>,
}

#[derive(Debug, Deserialize)]
pub struct CreateNoteData {
    #[serde(rename = "createNote")]
    pub create_note: Ack,
}
