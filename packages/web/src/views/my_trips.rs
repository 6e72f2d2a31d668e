use dioxus::prelude::*;
use ui::views::MyTripsView;

use crate::guards::Protected;
use crate::Route;

#[component]
pub fn MyTrips() -> Element {
    let nav = use_navigator();

    rsx! {
        Protected {
            MyTripsView {
                on_open_trip: move |trip_id: String| {
                    nav.push(Route::Itinerary { trip_id });
                },
                on_plan_trip: move |_| {
                    nav.push(Route::Home {});
                },
            }
        }
    }
}
