use api::models::{Trip, TripFilter};
use dioxus::prelude::*;

use crate::auth::use_trips_client;
use crate::icons::{FaCalendar, FaLocationDot, FaRotateLeft, FaSpinner, FaStar, FaTriangleExclamation};
use crate::trip_actions::{DeleteTripButton, FavoriteButton, RecoverTripButton};
use crate::Icon;

const VIEWS_CSS: Asset = asset!("/assets/hopper.css");

/// The signed-in user's trips, with favorite and deleted filters.
#[component]
pub fn MyTripsView(on_open_trip: EventHandler<String>, on_plan_trip: EventHandler<()>) -> Element {
    let make_client = use_trips_client();
    let mut favorites_only = use_signal(|| false);
    let mut show_unpublished = use_signal(|| false);

    let mut trips = use_resource(move || {
        let make_client = make_client.clone();
        async move {
            let filter = TripFilter {
                show_unpublished: show_unpublished(),
                favorites_only: favorites_only(),
            };
            make_client()?.list_trips(filter).await
        }
    });

    let body = match &*trips.read() {
        None => rsx! {
            div {
                class: "loading-state",
                Icon { icon: FaSpinner, width: 28, height: 28 }
                p { "Loading your adventures..." }
            }
        },
        Some(Err(e)) => {
            let message = e.to_string();
            rsx! {
                div {
                    class: "error-state",
                    Icon { icon: FaTriangleExclamation, width: 36, height: 36 }
                    p { "Error: {message}" }
                }
            }
        }
        Some(Ok(list)) if list.is_empty() => rsx! {
            div {
                class: "empty-trips",
                p { "No adventures found. Time to plan one!" }
                button {
                    class: "button-primary",
                    onclick: move |_| on_plan_trip.call(()),
                    "Plan Your Next Adventure"
                }
            }
        },
        Some(Ok(list)) => {
            let list = list.clone();
            rsx! {
                div {
                    class: "trip-grid",
                    {list.into_iter().map(|trip| {
                        let key = trip.id.clone();
                        rsx! {
                            TripCard {
                                key: "{key}",
                                trip,
                                on_open: on_open_trip,
                                on_changed: move |_| trips.restart(),
                            }
                        }
                    })}
                }
            }
        }
    };

    let favorites_class = if favorites_only() { "toggle toggle--on" } else { "toggle" };
    let deleted_class = if show_unpublished() { "toggle toggle--on" } else { "toggle" };
    let deleted_label = if show_unpublished() { "Hide Deleted" } else { "Show Deleted" };

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }
        div {
            class: "view-page",
            div {
                class: "trips-header",
                h1 { class: "view-title", "My " span { class: "gradient-text", "Adventures" } }
                div {
                    class: "trips-toggles",
                    button {
                        class: "{favorites_class}",
                        onclick: move |_| favorites_only.set(!favorites_only()),
                        Icon { icon: FaStar, width: 14, height: 14 }
                        "Favorites"
                    }
                    button {
                        class: "{deleted_class}",
                        onclick: move |_| show_unpublished.set(!show_unpublished()),
                        Icon { icon: FaRotateLeft, width: 14, height: 14 }
                        "{deleted_label}"
                    }
                }
            }
            {body}
        }
    }
}

#[component]
fn TripCard(trip: Trip, on_open: EventHandler<String>, on_changed: EventHandler<()>) -> Element {
    let destination = trip.destination_or_default().to_string();
    let dates = trip.date_span();
    let id = trip.id.clone();
    let class = if trip.is_published { "trip-card" } else { "trip-card trip-card--deleted" };

    rsx! {
        div {
            class: "{class}",
            FavoriteButton {
                trip_id: trip.id.clone(),
                is_favorite: trip.is_favorite,
                on_success: move |_| on_changed.call(()),
            }
            h2 { "{destination}" }
            div {
                class: "slot-card-meta",
                Icon { icon: FaCalendar, width: 14, height: 14 }
                span { "{dates}" }
            }
            div {
                class: "slot-card-meta",
                Icon { icon: FaLocationDot, width: 14, height: 14 }
                span { "{destination}" }
            }
            div {
                class: "trip-card-footer",
                button {
                    class: "link-button",
                    onclick: move |_| on_open.call(id.clone()),
                    "View Itinerary →"
                }
                if trip.is_published {
                    DeleteTripButton {
                        trip_id: trip.id.clone(),
                        is_favorite: trip.is_favorite,
                        on_success: move |_| on_changed.call(()),
                    }
                } else {
                    RecoverTripButton {
                        trip_id: trip.id.clone(),
                        on_success: move |_| on_changed.call(()),
                    }
                }
            }
        }
    }
}
