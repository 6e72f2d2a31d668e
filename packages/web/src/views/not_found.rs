use dioxus::prelude::*;

use crate::Route;

/// Unknown paths go to `/login`; the login guard forwards signed-in users home.
#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let nav = use_navigator();
    tracing::debug!("no route for /{}", segments.join("/"));
    nav.replace(Route::Login {});
    rsx! {}
}
