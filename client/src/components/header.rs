//! Top navigation: logo, then Sign In or the signed-in user's name and Sign Out.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered on every route. Sign Out always succeeds locally, so the handler
//! navigates home once the pipeline's logout resolves.

use leptos::prelude::*;
#[cfg(feature = "csr")]
use leptos_router::NavigateOptions;
#[cfg(feature = "csr")]
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;

#[component]
pub fn Header() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    #[cfg(feature = "csr")]
    let pipeline = crate::app::use_pipeline();
    #[cfg(feature = "csr")]
    let navigate = use_navigate();

    let first_name = move || auth.get().first_name().unwrap_or_default().to_owned();

    let on_sign_out = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        #[cfg(feature = "csr")]
        {
            let pipeline = pipeline.get_value();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                pipeline.logout().await;
                navigate("/", NavigateOptions::default());
            });
        }
    };

    view! {
        <nav class="main-nav">
            <a href="/" class="main-nav-logo">
                <img class="main-nav-logo-image" src="/img/argentBankLogo.png" alt="Argent Bank Logo"/>
                <h1 class="sr-only">"Argent Bank"</h1>
            </a>
            <Show
                when=move || auth.get().is_logged_in()
                fallback=|| {
                    view! {
                        <div>
                            <a href="/login" class="main-nav-item">
                                <i class="fa fa-user-circle"></i>
                                " Sign In"
                            </a>
                        </div>
                    }
                }
            >
                <div>
                    <a href="/profile" class="main-nav-item">
                        <i class="fa fa-user-circle"></i>
                        " "
                        {first_name}
                    </a>
                    <a href="/" class="main-nav-item" on:click=on_sign_out.clone()>
                        <i class="fa fa-sign-out"></i>
                        " Sign Out"
                    </a>
                </div>
            </Show>
        </nav>
    }
}
