//! Note List Component
//!
//! Renders notes with a loading indicator while the initial fetch runs.

use leptos::prelude::*;

use crate::models::Note;

#[component]
pub fn NoteList(
    #[prop(into)] notes: Signal<Vec<Note>>,
    #[prop(into)] loading: Signal<bool>,
    #[prop(into)] error: Signal<bool>,
) -> impl IntoView {
    let empty_text = move || if error.get() { "Could not load notes" } else { "No notes" };

    view! {
        <div class="note-list">
            <Show
                when=move || !loading.get()
                fallback=|| view! { <div class="note-list-loading">"Loading..."</div> }
            >
                <Show
                    when=move || !notes.get().is_empty()
                    fallback=move || view! { <div class="note-list-empty">{empty_text}</div> }
                >
                    <ul class="note-items">
                        <For
                            each=move || notes.get()
                            key=|note| note.id.clone()
                            children=|note| view! { <NoteListItem note=note /> }
                        />
                    </ul>
                </Show>
            </Show>
        </div>
    }
}

/// Single note: name as title, description below
#[component]
pub fn NoteListItem(note: Note) -> impl IntoView {
    view! {
        <li class="note-item">
            <div class="note-item-title">{note.name}</div>
            <div class="note-item-description">{note.description}</div>
        </li>
    }
}

/// Compact listing of note names, one paragraph each
#[component]
pub fn NoteNames(#[prop(into)] notes: Signal<Vec<Note>>) -> impl IntoView {
    view! {
        <div class="note-names">
            {move || {
                notes
                    .get()
                    .into_iter()
                    .map(|note| view! { <p class="note-name">{note.name}</p> })
                    .collect_view()
            }}
        </div>
    }
}
