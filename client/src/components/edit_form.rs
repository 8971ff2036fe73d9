//! Inline first/last name editor on the profile page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Saves through the pipeline; on success the profile cache is overwritten
//! and the mirrored state re-renders the welcome header.

use argent::forms::{FieldError, ProfileForm};
use argent::profile::Profile;
use leptos::prelude::*;

use crate::components::error_text::ErrorText;

#[component]
pub fn EditForm(initial: Option<Profile>, #[prop(into)] on_close: Callback<()>) -> impl IntoView {
    let seed = initial.as_ref().map(ProfileForm::from_profile).unwrap_or_default();
    let first_name = RwSignal::new(seed.first_name);
    let last_name = RwSignal::new(seed.last_name);
    let field_errors = RwSignal::new(Vec::<FieldError>::new());
    let failure = RwSignal::new(None::<String>);
    let saving = RwSignal::new(false);
    #[cfg(feature = "csr")]
    let pipeline = crate::app::use_pipeline();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if saving.get() {
            return;
        }
        let form = ProfileForm { first_name: first_name.get(), last_name: last_name.get() };
        failure.set(None);
        let profile = match form.validate() {
            Ok(profile) => profile,
            Err(errors) => {
                field_errors.set(errors);
                return;
            }
        };
        field_errors.set(Vec::new());
        saving.set(true);

        #[cfg(feature = "csr")]
        {
            let pipeline = pipeline.get_value();
            leptos::task::spawn_local(async move {
                match pipeline.update_profile(profile).await {
                    Ok(_) => {
                        saving.set(false);
                        on_close.run(());
                    }
                    Err(e) => {
                        failure.set(Some(e.message().to_owned()));
                        saving.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            tracing::debug!(first = %profile.first_name, "profile edit ignored outside the browser");
            saving.set(false);
        }
    };

    view! {
        <section class="sign-in-content">
            <form on:submit=on_submit>
                <div class="input-wrapper">
                    <label for="firstName">"First name"</label>
                    <input
                        id="firstName"
                        type="text"
                        placeholder="First name"
                        prop:value=move || first_name.get()
                        on:input=move |ev| first_name.set(event_target_value(&ev))
                    />
                </div>
                <div class="input-wrapper">
                    <label for="lastName">"Last name"</label>
                    <input
                        id="lastName"
                        type="text"
                        placeholder="Last name"
                        prop:value=move || last_name.get()
                        on:input=move |ev| last_name.set(event_target_value(&ev))
                    />
                </div>
                <ErrorText errors=field_errors failure=failure/>
                <Show when=move || saving.get()>
                    <p>"Loading..."</p>
                </Show>
                <button class="sign-in-button" type="submit" disabled=move || saving.get()>
                    "Save"
                </button>
                <button class="sign-in-button" type="button" on:click=move |_| on_close.run(())>
                    "Cancel"
                </button>
            </form>
        </section>
    }
}
