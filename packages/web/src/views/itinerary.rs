use dioxus::prelude::*;
use ui::views::ItineraryView;

use crate::guards::Protected;

#[component]
pub fn Itinerary(trip_id: String) -> Element {
    rsx! {
        Protected {
            ItineraryView { trip_id }
        }
    }
}
