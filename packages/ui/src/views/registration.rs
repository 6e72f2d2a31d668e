//! Registration page view with email/password form.

use api::auth::{AuthProvider as _, Credentials, SignUpOutcome};
use dioxus::prelude::*;

use crate::auth::use_session_store;

const VIEWS_CSS: Asset = asset!("/assets/hopper.css");

#[component]
pub fn RegistrationView(on_login: EventHandler<()>) -> Element {
    let session_store = use_session_store();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut confirm_password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut pending_email = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let handle_register = move |evt: FormEvent| {
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
            if password() != confirm_password() {
                error.set(Some("Passwords do not match".to_string()));
                return;
            }

            loading.set(true);
            let result = session_store
                .provider()
                .sign_up(&credentials.email, &credentials.password)
                .await;
            loading.set(false);

            match result {
                Ok(SignUpOutcome::PendingConfirmation { email }) => pending_email.set(Some(email)),
                // Signed in right away; the guard takes it from here
                Ok(SignUpOutcome::SignedIn(_)) => {}
                Err(e) => {
                    tracing::error!("Registration error: {e}");
                    error.set(Some(e.to_string()));
                }
            }
        });
    };

    if let Some(address) = pending_email() {
        return rsx! {
            document::Link { rel: "stylesheet", href: VIEWS_CSS }
            div {
                class: "auth-page",
                h1 { class: "auth-title", "Check your email" }
                p { class: "muted", "We sent a confirmation link to {address}. Follow it, then sign in." }
                button {
                    class: "button-primary",
                    onclick: move |_| on_login.call(()),
                    "Back to sign in"
                }
            }
        };
    }

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }
        div {
            class: "auth-page",
            h1 { class: "auth-title", "Create Account" }

            form {
                class: "auth-form",
                onsubmit: handle_register,

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
                        placeholder: "At least 8 characters",
                        autocomplete: "new-password",
                        value: password(),
                        oninput: move |evt: FormEvent| password.set(evt.value()),
                    }
                }

                label {
                    class: "form-label",
                    span { "Confirm Password" }
                    input {
                        r#type: "password",
                        autocomplete: "new-password",
                        value: confirm_password(),
                        oninput: move |evt: FormEvent| confirm_password.set(evt.value()),
                    }
                }

                button {
                    class: "button-primary",
                    r#type: "submit",
                    disabled: loading(),
                    if loading() { "Creating account..." } else { "Sign up" }
                }

                div {
                    class: "auth-switch",
                    p { "Already have an account?" }
                    button {
                        class: "link-button",
                        r#type: "button",
                        onclick: move |_| on_login.call(()),
                        "Sign in"
                    }
                }
            }
        }
    }
}
