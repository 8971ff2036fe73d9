//! Protected profile page: welcome header, edit-name form, account summaries.
//!
//! SYSTEM CONTEXT
//! ==============
//! The cached profile renders immediately, even if stale; a fresh copy is
//! fetched on mount and replaces it when it arrives. "loading..." only shows
//! when there is nothing cached yet.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use argent::profile::Profile;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::account_card::{ACCOUNTS, AccountCard};
use crate::components::edit_form::EditForm;
use crate::state::auth::AuthState;
use crate::util::auth::install_unauth_redirect;

/// Second line of the welcome header.
fn greeting(profile: Option<&Profile>, fetching: bool) -> String {
    match profile {
        Some(profile) => profile.display_name(),
        None if fetching => "loading...".to_owned(),
        None => String::new(),
    }
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    install_unauth_redirect(auth, use_navigate());

    let editing = RwSignal::new(false);
    let fetching = RwSignal::new(auth.get_untracked().is_logged_in());

    #[cfg(feature = "csr")]
    {
        if fetching.get_untracked() {
            let pipeline = crate::app::use_pipeline().get_value();
            leptos::task::spawn_local(async move {
                if let Err(e) = pipeline.fetch_profile().await {
                    tracing::warn!(error = %e, "profile refresh failed; showing cached copy");
                }
                fetching.set(false);
            });
        }
    }

    let header_name = move || greeting(auth.get().profile.as_ref(), fetching.get());

    view! {
        <main class="main bg-dark">
            <div class="header">
                <h1>"Welcome back" <br/> {header_name}</h1>
                <Show
                    when=move || editing.get()
                    fallback=move || {
                        view! {
                            <button class="edit-button" on:click=move |_| editing.set(true)>
                                "Edit Name"
                            </button>
                        }
                    }
                >
                    <EditForm initial=auth.get_untracked().profile on_close=move |()| editing.set(false)/>
                </Show>
            </div>
            <h2 class="sr-only">"Accounts"</h2>
            {ACCOUNTS.iter().map(|account| view! { <AccountCard account=*account/> }).collect_view()}
        </main>
    }
}
