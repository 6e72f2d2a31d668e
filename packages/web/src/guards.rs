//! Route-level wrappers around [`ui::Guarded`].

use dioxus::prelude::*;
use ui::{GuardKind, Guarded, RedirectTarget};

use crate::Route;

fn redirect(nav: dioxus::router::Navigator, target: RedirectTarget) {
    nav.replace(Route::from(target));
}

/// Renders `children` only for a signed-in session; otherwise sends the
/// visitor to `/login`.
#[component]
pub fn Protected(children: Element) -> Element {
    let nav = use_navigator();
    rsx! {
        Guarded {
            kind: GuardKind::RequiresSession,
            on_redirect: move |target| redirect(nav, target),
            {children}
        }
    }
}

/// Renders `children` only when nobody is signed in; otherwise sends the
/// user home.
#[component]
pub fn GuestOnly(children: Element) -> Element {
    let nav = use_navigator();
    rsx! {
        Guarded {
            kind: GuardKind::RequiresNoSession,
            on_redirect: move |target| redirect(nav, target),
            {children}
        }
    }
}
