//! Note Form Component
//!
//! Two text inputs and a submit button. Holds no state of its own.

use leptos::prelude::*;

use crate::models::{FormField, NoteForm};

/// Form for creating a new note
#[component]
pub fn NoteFormView(
    #[prop(into)] form: Signal<NoteForm>,
    #[prop(into)] on_change: Callback<(FormField, String)>,
    #[prop(into)] on_submit: Callback<()>,
) -> impl IntoView {
    let on_input = move |ev: web_sys::Event| {
        let target = event_target::<web_sys::HtmlInputElement>(&ev);
        if let Some(field) = FormField::from_name(&target.name()) {
            on_change.run((field, target.value()));
        }
    };

    view! {
        <div class="note-form">
            <input
                type="text"
                class="note-input"
                name=FormField::Name.as_str()
                placeholder="Note Name"
                prop:value=move || form.get().name
                on:input=on_input
            />
            <input
                type="text"
                class="note-input"
                name=FormField::Description.as_str()
                placeholder="Note description"
                prop:value=move || form.get().description
                on:input=on_input
            />
            <button type="button" class="primary-btn" on:click=move |_| on_submit.run(())>
                "Create Note"
            </button>
        </div>
    }
}
