//! Sign-in page: email, password, and "remember me".
//!
//! SYSTEM CONTEXT
//! ==============
//! Input is checked locally before the pipeline is called. Navigation after
//! a successful login is left to the redirect effect, which fires as soon as
//! the mirrored session turns `LoggedIn`.

use argent::forms::{FieldError, LoginForm};
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::error_text::ErrorText;
use crate::state::auth::AuthState;
use crate::util::auth::install_login_redirect;

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    install_login_redirect(auth, use_navigate());

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let remember = RwSignal::new(false);
    let field_errors = RwSignal::new(Vec::<FieldError>::new());
    let failure = RwSignal::new(None::<String>);
    let busy = move || auth.get().busy();
    #[cfg(feature = "csr")]
    let pipeline = crate::app::use_pipeline();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy() {
            return;
        }
        let form = LoginForm { email: email.get(), password: password.get(), remember_me: remember.get() };
        failure.set(None);
        if let Err(errors) = form.validate() {
            field_errors.set(errors);
            return;
        }
        field_errors.set(Vec::new());

        #[cfg(feature = "csr")]
        {
            let pipeline = pipeline.get_value();
            leptos::task::spawn_local(async move {
                if let Err(e) = pipeline.login(form.email.trim(), &form.password, form.remember_me).await {
                    failure.set(Some(e.message().to_owned()));
                }
            });
        }
    };

    view! {
        <main class="main bg-dark">
            <section class="sign-in-content">
                <i class="fa fa-user-circle sign-in-icon"></i>
                <h1>"Sign In"</h1>
                <form on:submit=on_submit>
                    <div class="input-wrapper">
                        <label for="email">"Email"</label>
                        <input
                            id="email"
                            type="text"
                            placeholder="Email"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </div>
                    <div class="input-wrapper">
                        <label for="password">"Password"</label>
                        <input
                            id="password"
                            type="password"
                            placeholder="Password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </div>
                    <div class="input-remember">
                        <input
                            id="remember-me"
                            type="checkbox"
                            prop:checked=move || remember.get()
                            on:change=move |ev| remember.set(event_target_checked(&ev))
                        />
                        <label for="remember-me">"Remember me"</label>
                    </div>
                    <ErrorText errors=field_errors failure=failure/>
                    <Show when=busy>
                        <p>"Loading..."</p>
                    </Show>
                    <button class="sign-in-button" type="submit" disabled=busy>
                        "Sign In"
                    </button>
                </form>
            </section>
        </main>
    }
}
