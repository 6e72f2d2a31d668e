//! Trip planning landing page: destination, dates, then the wizard.

use std::time::Duration;

use api::models::{DateRange, NewTrip, TripPreferences};
use dioxus::prelude::*;

use crate::auth::{use_auth, use_trips_client};
use crate::calendar::DateRangePicker;
use crate::destinations::DestinationSearch;
use crate::icons::FaCalendar;
use crate::platform::sleep;
use crate::trip_wizard::TripWizard;
use crate::Icon;

const VIEWS_CSS: Asset = asset!("/assets/hopper.css");

/// Pause between a successful create and opening the itinerary.
const REDIRECT_DELAY: Duration = Duration::from_secs(1);

#[component]
pub fn HomeView(on_trip_created: EventHandler<String>) -> Element {
    let auth = use_auth();
    let make_client = use_trips_client();
    let destination = use_signal(String::new);
    let mut dates = use_signal(|| Option::<DateRange>::None);
    let mut show_calendar = use_signal(|| false);
    let mut show_wizard = use_signal(|| false);
    let mut creating = use_signal(|| false);
    let mut error = use_signal(|| Option::<String>::None);

    let date_label = dates().map(|d| d.label()).unwrap_or_default();
    let trimmed_destination = destination().trim().to_string();

    let handle_generate = move |_| {
        if !destination().trim().is_empty() && dates().is_some() {
            error.set(None);
            show_wizard.set(true);
        }
    };

    let handle_submit = move |preferences: TripPreferences| {
        let make_client = make_client.clone();
        spawn(async move {
            let (Some(user_id), Some(range)) = (auth().user_id, dates()) else {
                tracing::error!("Missing required fields");
                return;
            };
            let client = match make_client() {
                Ok(client) => client,
                Err(e) => {
                    tracing::error!("No authentication token or user found: {e}");
                    return;
                }
            };

            creating.set(true);
            let trip = NewTrip::new(user_id, destination().trim(), range, &preferences);
            let result = client.create_trip(&trip).await;
            creating.set(false);

            match result {
                Ok(response) => match response.created_trip_id() {
                    Some(id) => {
                        let id = id.to_string();
                        show_wizard.set(false);
                        sleep(REDIRECT_DELAY).await;
                        on_trip_created.call(id);
                    }
                    None => tracing::warn!("create response without trip: {response:?}"),
                },
                Err(e) => {
                    tracing::error!("Error creating trip: {e}");
                    error.set(Some(e.to_string()));
                }
            }
        });
    };

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }
        div {
            class: "view-page home",
            h1 {
                class: "home-title",
                "Hop into hassle free planning with"
                br {}
                span { class: "gradient-text", "AI powered itineraries!" }
            }

            div {
                class: "home-search",
                DestinationSearch { value: destination }

                div {
                    class: "search-field",
                    span { class: "search-field-icon", Icon { icon: FaCalendar, width: 16, height: 16 } }
                    input {
                        r#type: "text",
                        placeholder: "When?",
                        readonly: true,
                        value: "{date_label}",
                        onclick: move |_| show_calendar.set(!show_calendar()),
                    }
                    if show_calendar() {
                        DateRangePicker {
                            on_select: move |range| {
                                dates.set(Some(range));
                                show_calendar.set(false);
                            },
                        }
                    }
                }
            }

            button {
                class: "button-primary home-generate",
                onclick: handle_generate,
                "Generate Itinerary"
            }

            if let Some(err) = error() {
                div { class: "form-error", "{err}" }
            }
        }

        if show_wizard() {
            TripWizard {
                destination: trimmed_destination,
                submitting: creating(),
                on_close: move |_| show_wizard.set(false),
                on_submit: handle_submit,
            }
        }
    }
}
