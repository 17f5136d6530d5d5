//! GraphQL-over-HTTP implementation of [`NoteService`].

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::graphql::{
    CreateNoteData, CreateNoteVariables, GraphQlRequest, GraphQlResponse, ListNotesData,
    NoVariables, CREATE_NOTE, LIST_NOTES,
};
use super::{Ack, NoteService, ServiceError};
use crate::config::AppConfig;
use crate::models::Note;

const API_KEY_HEADER: &str = "x-api-key";

pub struct GraphQlNoteService {
    endpoint: String,
    api_key: String,
    client: reqwest::Client,
}

impl GraphQlNoteService {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            endpoint: config.endpoint.clone(),
            api_key: config.api_key.clone(),
            client: reqwest::Client::new(),
        }
    }

    async fn execute<V, T>(&self, query: &str, variables: V) -> Result<T, ServiceError>
    where
        V: Serialize,
        T: DeserializeOwned,
    {
        let resp = self
            .client
            .post(&self.endpoint)
            .header(API_KEY_HEADER, &self.api_key)
            .json(&GraphQlRequest { query, variables })
            .send()
            .await?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            return Err(ServiceError::Status { status, body });
        }

        let text = resp.text().await?;
        let body: GraphQlResponse<T> = serde_json::from_str(&text)?;
        body.into_result()
    }
}

#[async_trait(?Send)]
impl NoteService for GraphQlNoteService {
    async fn list_all(&self) -> Result<Vec<Note>, ServiceError> {
        let data: ListNotesData = self.execute(LIST_NOTES, NoVariables {}).await?;
        Ok(data.list_notes.items)
    }

    async fn create(&self, note: &Note) -> Result<Ack, ServiceError> {
        let data: CreateNoteData = self
            .execute(CREATE_NOTE, CreateNoteVariables { input: note })
            .await?;
        Ok(data.create_note)
    }
}
