use dioxus::prelude::*;
use ui::views::LoginView;

use crate::guards::GuestOnly;
use crate::Route;

#[component]
pub fn Login() -> Element {
    let nav = use_navigator();

    rsx! {
        GuestOnly {
            LoginView {
                on_register: move |_| {
                    nav.push(Route::Registration {});
                },
            }
        }
    }
}
