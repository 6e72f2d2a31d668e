use dioxus::prelude::*;
use ui::views::RegistrationView;

use crate::guards::GuestOnly;
use crate::Route;

#[component]
pub fn Registration() -> Element {
    let nav = use_navigator();

    rsx! {
        GuestOnly {
            RegistrationView {
                on_login: move |_| {
                    nav.push(Route::Login {});
                },
            }
        }
    }
}
