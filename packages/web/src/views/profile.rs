use dioxus::prelude::*;
use ui::views::ProfileView;

use crate::guards::Protected;

#[component]
pub fn Profile() -> Element {
    rsx! {
        Protected {
            ProfileView {}
        }
    }
}
