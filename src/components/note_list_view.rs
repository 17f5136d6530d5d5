//! Note List View
//!
//! Owns the view state. Loads notes once on mount and creates notes
//! optimistically.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::actions;
use crate::components::{NoteFormView, NoteList, NoteNames};
use crate::context::use_app_context;
use crate::models::FormField;
use crate::store::{self, Action, ViewState, ViewStateStoreFields};

#[component]
pub fn NoteListView() -> impl IntoView {
    let ctx = use_app_context();
    let state = Store::new(ViewState::new());
    let dispatch = move |action: Action| store::dispatch(state, action);

    // Initial load, once
    Effect::new(move |_| {
        let service = ctx.service();
        spawn_local(async move {
            actions::fetch_notes(service.as_ref(), dispatch).await;
        });
    });

    let on_change = Callback::new(move |(field, value): (FormField, String)| {
        dispatch(Action::SetInput { field, value });
    });

    let on_submit = Callback::new(move |_: ()| {
        let form = state.form().get_untracked();
        match actions::submit_note(&form, &ctx.client_id(), dispatch) {
            Ok(note) => {
                let service = ctx.service();
                spawn_local(async move {
                    actions::persist_note(service.as_ref(), &note).await;
                });
            }
            Err(e) => {
                log::warn!("Rejected note: {:?}", e);
                let _ = window().alert_with_message(&e.to_string());
            }
        }
    });

    view! {
        <div class="note-list-view">
            <NoteFormView
                form=Signal::derive(move || state.form().get())
                on_change=on_change
                on_submit=on_submit
            />
            <NoteList
                notes=Signal::derive(move || state.notes().get())
                loading=Signal::derive(move || state.loading().get())
                error=Signal::derive(move || state.error().get())
            />
            <NoteNames notes=Signal::derive(move || state.notes().get()) />
        </div>
    }
}
