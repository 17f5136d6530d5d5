//! Note Actions
//!
//! Async flows between the view state and the [`NoteService`]. Each flow
//! reports state changes through a `dispatch` callback so it can run against
//! the reactive store or a plain [`ViewState`](crate::store::ViewState).

use crate::api::NoteService;
use crate::models::{ClientId, Note, NoteForm, ValidationError};
use crate::store::Action;

/// Load every note. Failures are logged and leave the current list in place.
pub async fn fetch_notes<S, D>(service: &S, dispatch: D)
where
    S: NoteService + ?Sized,
    D: Fn(Action),
{
    match service.list_all().await {
        Ok(notes) => {
            log::info!("Loaded {} notes", notes.len());
            dispatch(Action::SetNotes(notes));
        }
        Err(e) => {
            log::error!("error: {}", e);
            dispatch(Action::Error);
        }
    }
}

/// Validate the form and apply the optimistic update.
///
/// On success the new note is already at the head of the list and the form
/// is cleared; pass the returned note to [`persist_note`]. On failure nothing
/// is dispatched.
pub fn submit_note<D>(form: &NoteForm, client_id: &ClientId, dispatch: D) -> Result<Note, ValidationError>
where
    D: Fn(Action),
{
    form.validate()?;
    let note = Note::from_form(form, client_id);
    dispatch(Action::AddNote(note.clone()));
    dispatch(Action::ResetForm);
    Ok(note)
}

/// Send a locally created note to the backend.
///
/// The optimistic note is not rolled back on failure.
pub async fn persist_note<S>(service: &S, note: &Note)
where
    S: NoteService + ?Sized,
{
    match service.create(note).await {
        Ok(ack) => log::info!("successfully created note! ({})", ack.id),
        Err(e) => log::error!("error: {}", e),
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::api::fake::FakeNoteService;
    use crate::models::FormField;
    use crate::store::ViewState;

    fn make_note(id: &str) -> Note {
        Note {
            id: id.to_string(),
            client_id: "other".to_string(),
            name: format!("Note {}", id),
            description: "desc".to_string(),
            completed: false,
        }
    }

    fn form(name: &str, description: &str) -> NoteForm {
        NoteForm {
            name: name.to_string(),
            description: description.to_string(),
        }
    }

    #[tokio::test]
    async fn test_fetch_success_sets_notes() {
        let service = FakeNoteService::with_notes(vec![make_note("a"), make_note("b")]);
        let state = RefCell::new(ViewState::new());

        fetch_notes(&service, |action| state.borrow_mut().apply(action)).await;

        let state = state.into_inner();
        assert_eq!(state.notes, vec![make_note("a"), make_note("b")]);
        assert!(!state.loading);
        assert!(!state.error);
    }

    #[tokio::test]
    async fn test_fetch_failure_sets_error_and_keeps_notes() {
        let service = FakeNoteService {
            fail_list: true,
            ..Default::default()
        };
        let mut initial = ViewState::new();
        initial.apply(Action::AddNote(make_note("local")));
        let state = RefCell::new(initial);

        fetch_notes(&service, |action| state.borrow_mut().apply(action)).await;

        let state = state.into_inner();
        assert!(state.error);
        assert!(!state.loading);
        assert_eq!(state.notes, vec![make_note("local")]);
    }

    #[test]
    fn test_submit_with_empty_field_changes_nothing() {
        let client_id = ClientId::generate();
        for (name, description) in [("", "y"), ("x", ""), ("", "")] {
            let mut initial = ViewState::new();
            initial.apply(Action::SetInput { field: FormField::Name, value: name.to_string() });
            initial.apply(Action::SetInput { field: FormField::Description, value: description.to_string() });
            let before = initial.clone();
            let state = RefCell::new(initial);

            let result = submit_note(&before.form, &client_id, |action| state.borrow_mut().apply(action));

            assert!(matches!(result, Err(ValidationError::MissingField(_))));
            assert_eq!(state.into_inner(), before);
        }
    }

    #[test]
    fn test_submit_prepends_one_note_and_clears_form() {
        let client_id = ClientId::from("session".to_string());
        let mut initial = ViewState::new();
        initial.apply(Action::SetNotes(vec![make_note("a")]));
        let state = RefCell::new(initial);

        let note = submit_note(&form("x", "y"), &client_id, |action| state.borrow_mut().apply(action)).unwrap();

        let state = state.into_inner();
        assert_eq!(state.notes.len(), 2);
        assert_eq!(state.notes[0], note);
        assert_eq!(note.name, "x");
        assert_eq!(note.description, "y");
        assert_eq!(note.client_id, "session");
        assert!(!note.id.is_empty());
        assert_eq!(state.form, NoteForm::default());
    }

    #[tokio::test]
    async fn test_mount_fetch_then_submit() {
        let client_id = ClientId::generate();
        let service = FakeNoteService::default();
        let state = RefCell::new(ViewState::new());
        let dispatch = |action| state.borrow_mut().apply(action);

        fetch_notes(&service, dispatch).await;
        assert!(state.borrow().notes.is_empty());
        assert!(!state.borrow().loading);

        dispatch(Action::SetInput { field: FormField::Name, value: "x".to_string() });
        dispatch(Action::SetInput { field: FormField::Description, value: "y".to_string() });
        let current = state.borrow().form.clone();
        let note = submit_note(&current, &client_id, dispatch).unwrap();
        persist_note(&service, &note).await;

        let state = state.into_inner();
        assert_eq!(state.notes.len(), 1);
        let created = &state.notes[0];
        assert_eq!(created.name, "x");
        assert_eq!(created.description, "y");
        assert!(!created.completed);
        assert_eq!(created.client_id, client_id.as_str());
        assert!(!created.id.is_empty());
        assert_eq!(state.form, NoteForm::default());
        assert_eq!(*service.created.borrow(), vec![note]);
    }

    #[tokio::test]
    async fn test_create_failure_keeps_optimistic_note() {
        let service = FakeNoteService {
            fail_create: true,
            ..Default::default()
        };
        let state = RefCell::new(ViewState::new());

        let note = submit_note(&form("x", "y"), &ClientId::generate(), |action| state.borrow_mut().apply(action)).unwrap();
        persist_note(&service, &note).await;

        assert_eq!(state.into_inner().notes, vec![note]);
        assert!(service.created.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_late_fetch_overwrites_optimistic_note() {
        let service = FakeNoteService::with_notes(vec![make_note("a")]);
        let state = RefCell::new(ViewState::new());

        submit_note(&form("x", "y"), &ClientId::generate(), |action| state.borrow_mut().apply(action)).unwrap();
        fetch_notes(&service, |action| state.borrow_mut().apply(action)).await;

        assert_eq!(state.into_inner().notes, vec![make_note("a")]);
    }
}
