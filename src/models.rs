//! Frontend Models
//!
//! Data structures matching the backend note contract.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Note data structure (matches backend `Note` type)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: String,
    pub client_id: String,
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub completed: bool,
}

impl Note {
    /// Build a new, not yet confirmed note from a validated form.
    pub fn from_form(form: &NoteForm, client_id: &ClientId) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            client_id: client_id.as_str().to_string(),
            name: form.name.clone(),
            description: form.description.clone(),
            completed: false,
        }
    }
}

/// Identifier of this browser session, attached to every note it creates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientId(String);

impl ClientId {
    /// Generate a fresh id. Called once per page load.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for ClientId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for ClientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Form input fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Description,
}

impl FormField {
    /// The `name` attribute of the matching `<input>`.
    pub fn as_str(&self) -> &'static str {
        match self {
            FormField::Name => "name",
            FormField::Description => "description",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "name" => Some(FormField::Name),
            "description" => Some(FormField::Description),
            _ => None,
        }
    }
}

/// Transient contents of the new-note form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteForm {
    pub name: String,
    pub description: String,
}

impl NoteForm {
    pub fn set(&mut self, field: FormField, value: String) {
        match field {
            FormField::Name => self.name = value,
            FormField::Description => self.description = value,
        }
    }

    /// Both fields are required.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.is_empty() {
            return Err(ValidationError::MissingField(FormField::Name));
        }
        if self.description.is_empty() {
            return Err(ValidationError::MissingField(FormField::Description));
        }
        Ok(())
    }
}

/// Rejected form submission. The message is shown to the user as-is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("please enter a name and description")]
    MissingField(FormField),
}
