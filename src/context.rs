//! Application Context
//!
//! Session values provided via Leptos Context API.

use std::rc::Rc;

use leptos::prelude::*;

use crate::api::NoteService;
use crate::models::ClientId;

/// Per-session values shared with every view
#[derive(Clone, Copy)]
pub struct AppContext {
    client_id: StoredValue<ClientId>,
    service: StoredValue<Rc<dyn NoteService>, LocalStorage>,
}

impl AppContext {
    pub fn new(client_id: ClientId, service: Rc<dyn NoteService>) -> Self {
        Self {
            client_id: StoredValue::new(client_id),
            service: StoredValue::new_local(service),
        }
    }

    /// Id attached to notes created in this session
    pub fn client_id(&self) -> ClientId {
        self.client_id.get_value()
    }

    pub fn service(&self) -> Rc<dyn NoteService> {
        self.service.get_value()
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
