use dioxus::prelude::*;
use ui::views::HomeView;

use crate::guards::Protected;
use crate::Route;

/// Trip planning page. A created trip opens its itinerary.
#[component]
pub fn Home() -> Element {
    let nav = use_navigator();

    rsx! {
        Protected {
            HomeView {
                on_trip_created: move |trip_id: String| {
                    nav.push(Route::Itinerary { trip_id });
                },
            }
        }
    }
}
