use dioxus::prelude::*;

use crate::auth::use_trips_client;
use crate::day_card::{AccommodationCard, EmptyState};
use crate::day_carousel::DayCarousel;
use crate::icons::{FaBed, FaCalendar, FaSpinner, FaTriangleExclamation};
use crate::Icon;

const VIEWS_CSS: Asset = asset!("/assets/hopper.css");

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tab {
    Daily,
    Accommodations,
}

/// Generated plan for one trip: daily schedule or places to stay.
#[component]
pub fn ItineraryView(trip_id: ReadOnlySignal<String>) -> Element {
    let make_client = use_trips_client();
    let mut tab = use_signal(|| Tab::Daily);

    // Reading the prop inside the resource refetches when the route changes trips
    let bundle = use_resource(move || {
        let make_client = make_client.clone();
        async move {
            let id = trip_id();
            make_client()?.trip_bundle(&id).await
        }
    });

    let guard = bundle.read();
    let bundle = match &*guard {
        None => {
            return rsx! {
                div {
                    class: "loading-state",
                    Icon { icon: FaSpinner, width: 28, height: 28 }
                }
            };
        }
        Some(Err(e)) => {
            let message = e.to_string();
            return rsx! {
                div {
                    class: "error-state",
                    Icon { icon: FaTriangleExclamation, width: 36, height: 36 }
                    p { "{message}" }
                }
            };
        }
        Some(Ok(bundle)) => bundle.clone(),
    };
    drop(guard);

    let destination = bundle.details.destination_or_default().to_string();
    let dates = bundle.details.date_span();
    let tab_class = |t: Tab| if tab() == t { "tab tab--active" } else { "tab" };
    let days = bundle.days;
    let accommodations = bundle.accommodations;

    let content = match tab() {
        Tab::Accommodations if accommodations.is_empty() => rsx! {
            EmptyState { message: "No accommodations found" }
        },
        Tab::Accommodations => rsx! {
            div {
                class: "accommodation-grid",
                for (i, hotel) in accommodations.into_iter().enumerate() {
                    AccommodationCard { key: "{i}", hotel }
                }
            }
        },
        Tab::Daily if days.is_empty() => rsx! {
            EmptyState { message: "No daily itinerary found" }
        },
        Tab::Daily => rsx! {
            DayCarousel { days }
        },
    };

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }
        div {
            class: "view-page itinerary",
            div {
                class: "itinerary-header",
                h1 { "Your Trip to {destination}" }
                div {
                    class: "slot-card-meta",
                    Icon { icon: FaCalendar, width: 16, height: 16 }
                    span { "{dates}" }
                }
            }

            div {
                class: "tabs",
                button {
                    class: tab_class(Tab::Accommodations),
                    onclick: move |_| tab.set(Tab::Accommodations),
                    Icon { icon: FaBed, width: 14, height: 14 }
                    "Accommodations"
                }
                button {
                    class: tab_class(Tab::Daily),
                    onclick: move |_| tab.set(Tab::Daily),
                    Icon { icon: FaCalendar, width: 14, height: 14 }
                    "Daily Itinerary"
                }
            }

            {content}
        }
    }
}
