//! UI Components
//!
//! Leptos components for the note list page.

mod note_form;
mod note_list;
mod note_list_view;

pub use note_form::NoteFormView;
pub use note_list::{NoteList, NoteNames};
pub use note_list_view::NoteListView;
