//! View State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. All changes go
//! through [`ViewState::apply`].

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{FormField, Note, NoteForm};

/// Note list view state with field-level reactivity
#[derive(Clone, Debug, Default, PartialEq, Store)]
pub struct ViewState {
    /// Notes, newest local creation first
    pub notes: Vec<Note>,
    /// Initial fetch still pending
    pub loading: bool,
    /// Initial fetch failed
    pub error: bool,
    /// New-note form contents
    pub form: NoteForm,
}

impl ViewState {
    pub fn new() -> Self {
        Self {
            loading: true,
            ..Default::default()
        }
    }

    pub fn apply(&mut self, action: Action) {
        match action {
            Action::SetNotes(notes) => {
                self.notes = notes;
                self.loading = false;
            }
            Action::AddNote(note) => self.notes.insert(0, note),
            Action::ResetForm => self.form = NoteForm::default(),
            Action::SetInput { field, value } => self.form.set(field, value),
            Action::Error => {
                self.loading = false;
                self.error = true;
            }
        }
    }
}

/// Discrete state transitions
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Replace the list with the backend's notes
    SetNotes(Vec<Note>),
    /// Prepend a locally created note
    AddNote(Note),
    ResetForm,
    SetInput { field: FormField, value: String },
    /// Fetch failed
    Error,
}

/// Type alias for the store
pub type ViewStore = Store<ViewState>;

/// Apply an action to the store
pub fn dispatch(store: ViewStore, action: Action) {
    store.update(|state| state.apply(action));
}
