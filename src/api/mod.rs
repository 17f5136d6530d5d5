//! Note Service
//!
//! Frontend bindings to the managed GraphQL backend, behind the
//! [`NoteService`] trait so views and tests do not depend on the transport.

mod client;
mod graphql;

use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;

use crate::models::Note;

pub use client::GraphQlNoteService;

/// Backend acknowledgement of a created note
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Ack {
    pub id: String,
}

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },
    #[error("GraphQL errors: {}", .0.join("; "))]
    GraphQl(Vec<String>),
    #[error("response had no data")]
    MissingData,
    #[error("could not decode response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Operations consumed from the backend. Futures are `!Send` on wasm.
#[async_trait(?Send)]
pub trait NoteService {
    /// All notes, in backend order
    async fn list_all(&self) -> Result<Vec<Note>, ServiceError>;

    /// Persist a client-created note
    async fn create(&self, note: &Note) -> Result<Ack, ServiceError>;
}
