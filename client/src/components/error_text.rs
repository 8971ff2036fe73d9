//! Inline form errors: one line per failed field, then the request failure.

use argent::forms::FieldError;
use leptos::prelude::*;

#[component]
pub fn ErrorText(errors: RwSignal<Vec<FieldError>>, failure: RwSignal<Option<String>>) -> impl IntoView {
    view! {
        <For
            each=move || errors.get()
            key=|e| e.field
            children=|e| view! { <p class="error-text">{e.message}</p> }
        />
        <Show when=move || failure.get().is_some()>
            <p class="error-text">{move || failure.get().unwrap_or_default()}</p>
        </Show>
    }
}
