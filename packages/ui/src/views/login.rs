use api::auth::{AuthError, AuthProvider as _, Credentials};
use dioxus::prelude::*;

use crate::auth::use_session_store;

const VIEWS_CSS: Asset = asset!("/assets/hopper.css");

/// Email + password sign-in.
///
/// A successful sign-in reaches the session store through the provider's
/// event stream; the guard around this view then redirects away.
#[component]
pub fn LoginView(on_register: EventHandler<()>) -> Element {
    let session_store = use_session_store();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        let session_store = session_store.clone();
        spawn(async move {
            error.set(None);
            let credentials = match Credentials::parse(&email(), &password()) {
                Ok(c) => c,
                Err(e) => {
                    error.set(Some(e.to_string()));
                    return;
                }
            };

            loading.set(true);
            let result = session_store
                .provider()
                .sign_in_with_password(&credentials.email, &credentials.password)
                .await;
            loading.set(false);

            match result {
                Ok(_) => tracing::debug!("login successful"),
                Err(AuthError::InvalidCredentials) => {
                    error.set(Some("Invalid email or password".to_string()));
                }
                Err(e) => {
                    tracing::error!("Login error: {e}");
                    error.set(Some(e.to_string()));
                }
            }
        });
    };

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }
        div {
            class: "auth-page",
            h1 { class: "auth-title", "Welcome Back! Please Sign In" }

            form {
                class: "auth-form",
                onsubmit: handle_login,

                if let Some(err) = error() {
                    div { class: "form-error", "{err}" }
                }

                label {
                    class: "form-label",
                    span { "Your Email Address" }
                    input {
                        r#type: "email",
                        placeholder: "you@supercoolhuman.com",
                        autocomplete: "email",
                        value: email(),
                        oninput: move |evt: FormEvent| email.set(evt.value()),
                    }
                }

                label {
                    class: "form-label",
                    span { "Password" }
                    input {
                        r#type: "password",
                        placeholder: "Enter password here",
                        autocomplete: "current-password",
                        value: password(),
                        oninput: move |evt: FormEvent| password.set(evt.value()),
                    }
                }

                button {
                    class: "button-primary",
                    r#type: "submit",
                    disabled: loading(),
                    if loading() { "Signing in..." } else { "Login" }
                }

                div {
                    class: "auth-switch",
                    p { "Don't have an account yet?" }
                    button {
                        class: "link-button",
                        r#type: "button",
                        onclick: move |_| on_register.call(()),
                        "Create an account"
                    }
                }
            }
        }
    }
}
