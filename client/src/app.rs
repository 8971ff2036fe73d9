//! Root application component with routing and context providers.
//!
//! SYSTEM CONTEXT
//! ==============
//! The auth pipeline is built exactly once here, before any route renders,
//! so session rehydration from Web Storage completes before the first guard
//! check. Its watch channels are mirrored into an `RwSignal<AuthState>`.

use std::rc::Rc;

use argent::persistence::Backends;
use argent::pipeline::AuthPipeline;
use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::header::Header;
use crate::net::gateway::FetchGateway;
use crate::pages::{home::HomePage, login::LoginPage, profile::ProfilePage};
use crate::state::auth::AuthState;
use crate::util::storage::BrowserStore;

/// The one pipeline instance, shared by every view.
pub type SharedPipeline = Rc<AuthPipeline<FetchGateway>>;

/// `Copy` handle to the pipeline, safe to move into event handlers.
pub type PipelineHandle = StoredValue<SharedPipeline, LocalStorage>;

/// Fetch the pipeline handle provided by [`App`].
///
/// Call during component setup; event handlers run outside the reactive owner.
///
/// # Panics
///
/// Panics when called outside the [`App`] tree.
pub fn use_pipeline() -> PipelineHandle {
    expect_context::<PipelineHandle>()
}

/// Root application component.
///
/// Provides the auth state and pipeline contexts and sets up routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let pipeline: SharedPipeline = Rc::new(AuthPipeline::start(
        FetchGateway::from_build_env(),
        Backends::new(BrowserStore::Local, BrowserStore::Session),
    ));
    let auth = RwSignal::new(AuthState { session: pipeline.session(), profile: pipeline.profile() });
    mirror_pipeline(&pipeline, auth);

    provide_context(auth);
    provide_context(StoredValue::new_local(pipeline));

    view! {
        <Title text="Argent Bank"/>

        <Router>
            <Header/>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("profile") view=ProfilePage/>
            </Routes>
            <footer class="footer">
                <p class="footer-text">"Copyright 2020 Argent Bank"</p>
            </footer>
        </Router>
    }
}

/// Copy every session and profile change into `auth`.
#[cfg(feature = "csr")]
fn mirror_pipeline(pipeline: &SharedPipeline, auth: RwSignal<AuthState>) {
    let mut sessions = pipeline.subscribe();
    leptos::task::spawn_local(async move {
        while sessions.changed().await.is_ok() {
            let session = sessions.borrow_and_update().clone();
            auth.update(|a| a.session = session);
        }
    });

    let mut profiles = pipeline.subscribe_profile();
    leptos::task::spawn_local(async move {
        while profiles.changed().await.is_ok() {
            let profile = profiles.borrow_and_update().clone();
            auth.update(|a| a.profile = profile);
        }
    });
}

#[cfg(not(feature = "csr"))]
fn mirror_pipeline(_pipeline: &SharedPipeline, _auth: RwSignal<AuthState>) {}
