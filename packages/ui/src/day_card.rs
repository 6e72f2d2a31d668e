use api::models::{Accommodation, Activity, DailyItinerary, DayPart, Meal};
use dioxus::prelude::*;

use crate::icons::{FaClock, FaLocationDot, FaMoon, FaMugHot, FaStar, FaSun, FaTriangleExclamation};
use crate::Icon;

#[component]
pub fn EmptyState(message: String) -> Element {
    rsx! {
        div {
            class: "empty-state",
            Icon { icon: FaTriangleExclamation, width: 20, height: 20 }
            p { "{message}" }
        }
    }
}

/// All meals and activities of one itinerary day.
#[component]
pub fn DayCard(day: DailyItinerary, index: usize) -> Element {
    let heading = match day.date {
        Some(date) => format!("Day {} - {}", index + 1, date.format("%A, %B %-d")),
        None => format!("Day {}", index + 1),
    };
    let meals = day.meals();
    let activities = day.activities();

    rsx! {
        div {
            class: "day-card",
            div { class: "day-card-header", h2 { "{heading}" } }
            div {
                class: "day-card-body",
                for (row, (meal, activity)) in meals.into_iter().zip(activities).enumerate() {
                    div {
                        key: "{row}",
                        class: "day-card-row",
                        {meal_section(meal)}
                        {activity_section(activity)}
                    }
                }
            }
        }
    }
}

fn part_icon(part: DayPart) -> Element {
    match part {
        DayPart::Morning => rsx! { Icon { icon: FaMugHot, width: 16, height: 16 } },
        DayPart::Afternoon => rsx! { Icon { icon: FaSun, width: 16, height: 16 } },
        DayPart::Evening => rsx! { Icon { icon: FaMoon, width: 16, height: 16 } },
    }
}

fn meal_section(meal: Meal<'_>) -> Element {
    if meal.is_empty() {
        return rsx! {
            EmptyState { message: format!("No {} plans yet", meal.title.to_lowercase()) }
        };
    }
    let title = meal.title;
    let spot = meal.spot.map(str::to_string);
    let rating = meal.shown_rating().map(|r| format!("{r:.1}"));

    rsx! {
        div {
            class: "slot-card",
            div {
                class: "slot-card-title",
                {part_icon(meal.part)}
                h4 { "{title}" }
                if let Some(rating) = rating {
                    span {
                        class: "rating",
                        Icon { icon: FaStar, width: 12, height: 12 }
                        "{rating}"
                    }
                }
            }
            if let Some(spot) = spot {
                p { "{spot}" }
            }
        }
    }
}

fn activity_section(activity: Activity<'_>) -> Element {
    if activity.is_empty() {
        return rsx! {
            EmptyState { message: format!("No {} activities planned yet", activity.title.to_lowercase()) }
        };
    }
    let title = activity.title;
    let name = activity.activity.map(str::to_string);
    let time = activity.time.map(str::to_string);
    let location = activity.location.map(str::to_string);
    let url = activity.url.map(str::to_string);

    rsx! {
        div {
            class: "slot-card",
            div {
                class: "slot-card-title",
                {part_icon(activity.part)}
                h4 { "{title}" }
            }
            if let Some(name) = name {
                p { "{name}" }
            }
            if let Some(time) = time {
                div {
                    class: "slot-card-meta",
                    Icon { icon: FaClock, width: 12, height: 12 }
                    span { "{time}" }
                }
            }
            if let Some(location) = location {
                div {
                    class: "slot-card-meta",
                    Icon { icon: FaLocationDot, width: 12, height: 12 }
                    span { "{location}" }
                }
            }
            if let Some(url) = url {
                a { href: "{url}", target: "_blank", rel: "noopener noreferrer", "More Info" }
            }
        }
    }
}

#[component]
pub fn AccommodationCard(hotel: Accommodation) -> Element {
    let name = hotel.name.clone().unwrap_or_else(|| "Unnamed stay".to_string());
    let rating = hotel.rating_label();

    rsx! {
        div {
            class: "accommodation-card",
            div {
                class: "accommodation-card-header",
                h3 { "{name}" }
                if let Some(rating) = rating {
                    span {
                        class: "rating",
                        Icon { icon: FaStar, width: 12, height: 12 }
                        "{rating}"
                    }
                }
            }
            if let Some(description) = hotel.description.clone() {
                p { class: "muted", "{description}" }
            }
            if let Some(location) = hotel.location.clone() {
                div {
                    class: "slot-card-meta",
                    Icon { icon: FaLocationDot, width: 12, height: 12 }
                    span { "{location}" }
                }
            }
            if let Some(features) = hotel.unique_features.clone() {
                div {
                    h4 { "Unique Features" }
                    p { "{features}" }
                }
            }
            if let Some(price) = hotel.price_range.clone() {
                p { strong { "Price Range: " } "{price}" }
            }
            if let Some(url) = hotel.website_url.clone() {
                a { href: "{url}", target: "_blank", rel: "noopener noreferrer", "Visit Website" }
            }
        }
    }
}
