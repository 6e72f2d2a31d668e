use dioxus::prelude::*;

use crate::auth::{use_auth, LogoutButton};

const HOPPER_CSS: Asset = asset!("/assets/hopper.css");

/// Top navigation. Hidden until someone is signed in.
///
/// The router-owning crate passes its links as `children`. After logout the
/// route guards take the visitor to the login page.
#[component]
pub fn Navbar(children: Element) -> Element {
    let auth = use_auth();

    rsx! {
        document::Link { rel: "stylesheet", href: HOPPER_CSS }
        if auth().is_authenticated() {
            nav {
                class: "navbar",
                span { class: "navbar-logo", "Trip Planner ✈️" }
                div {
                    class: "navbar-links",
                    {children}
                    LogoutButton { class: "navbar-button" }
                }
            }
        }
    }
}
