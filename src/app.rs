//! Notes Frontend App
//!
//! Wires the session context and renders the note list view.

use std::rc::Rc;

use leptos::prelude::*;

use crate::api::{GraphQlNoteService, NoteService};
use crate::components::NoteListView;
use crate::config::{AppConfig, ConfigError};
use crate::context::AppContext;
use crate::models::ClientId;

#[component]
pub fn App(config: Result<AppConfig, ConfigError>) -> impl IntoView {
    let config = match config {
        Ok(config) => config,
        Err(e) => {
            log::error!("Cannot start: {}", e);
            return view! {
                <div class="startup-error">
                    <p>"Notes are unavailable: " {e.to_string()}</p>
                </div>
            }
            .into_any();
        }
    };

    let client_id = ClientId::generate();
    log::info!(
        "Session {} using {} ({})",
        client_id,
        config.endpoint,
        config.region.as_deref().unwrap_or("default region")
    );

    let service: Rc<dyn NoteService> = Rc::new(GraphQlNoteService::new(&config));
    provide_context(AppContext::new(client_id, service));

    view! {
        <div class="app-layout">
            <h1>"Notes"</h1>
            <NoteListView />
        </div>
    }
    .into_any()
}
