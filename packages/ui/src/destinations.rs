//! Destination search box with suggestions.

use dioxus::prelude::*;

use crate::icons::FaMagnifyingGlass;
use crate::Icon;

pub const SAMPLE_LOCATIONS: [&str; 21] = [
    "San Francisco, California",
    "New York City, United States",
    "Tokyo, Japan",
    "London, United Kingdom",
    "Paris, France",
    "Sydney, Australia",
    "Dubai, United Arab Emirates",
    "Singapore, Singapore",
    "Rio de Janeiro, Brazil",
    "Cape Town, South Africa",
    "Moscow, Russia",
    "Bangkok, Thailand",
    "Istanbul, Turkey",
    "Hong Kong, China",
    "Toronto, Canada",
    "Mumbai, India",
    "Los Angeles, United States",
    "Berlin, Germany",
    "Rome, Italy",
    "Buenos Aires, Argentina",
    "Seoul, South Korea",
];

/// Sample locations containing `query`, ignoring case. Blank queries suggest nothing.
pub fn suggestions(query: &str) -> Vec<&'static str> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return Vec::new();
    }
    SAMPLE_LOCATIONS
        .into_iter()
        .filter(|loc| loc.to_lowercase().contains(&query))
        .collect()
}

/// Free-text destination input. Typing opens the suggestion list; picking an
/// entry fills the input and closes it.
#[component]
pub fn DestinationSearch(value: Signal<String>) -> Element {
    let mut value = value;
    let mut open = use_signal(|| false);
    let matches = suggestions(&value());
    let current = value();

    rsx! {
        div {
            class: "search-field",
            span { class: "search-field-icon", Icon { icon: FaMagnifyingGlass, width: 16, height: 16 } }
            input {
                r#type: "text",
                placeholder: "Where to?",
                value: "{current}",
                onfocus: move |_| open.set(true),
                oninput: move |evt| {
                    value.set(evt.value());
                    open.set(true);
                },
            }
            if open() && !matches.is_empty() {
                div {
                    class: "suggestions",
                    for location in matches {
                        button {
                            key: "{location}",
                            class: "suggestion",
                            onclick: move |_| {
                                value.set(location.to_string());
                                open.set(false);
                            },
                            "{location}"
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_insensitive_substring() {
        assert_eq!(suggestions("tok"), vec!["Tokyo, Japan"]);
        assert_eq!(
            suggestions("UNITED STATES"),
            vec!["New York City, United States", "Los Angeles, United States"]
        );
        assert!(suggestions("Atlantis").is_empty());
    }

    #[test]
    fn test_blank_query() {
        assert!(suggestions("").is_empty());
        assert!(suggestions("   ").is_empty());
    }
}
