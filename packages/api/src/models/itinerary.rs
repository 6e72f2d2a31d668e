//! Daily itineraries and accommodations of a trip.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::lenient;

/// One day of a generated itinerary, flattened the way the backend stores it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DailyItinerary {
    #[serde(default, deserialize_with = "lenient::opt_date")]
    pub date: Option<NaiveDate>,

    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub breakfast_spot: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_f64")]
    pub breakfast_rating: Option<f64>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub morning_activity: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub morning_activity_time: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub morning_activity_location: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub morning_activity_url: Option<String>,

    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub lunch_spot: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_f64")]
    pub lunch_rating: Option<f64>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub afternoon_activity: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub afternoon_activity_time: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub afternoon_activity_location: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub afternoon_activity_url: Option<String>,

    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub dinner_spot: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_f64")]
    pub dinner_rating: Option<f64>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub evening_activity: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub evening_activity_time: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub evening_activity_location: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub evening_activity_url: Option<String>,
}

/// Part of the day a slot belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayPart {
    Morning,
    Afternoon,
    Evening,
}

/// A meal recommendation within a day.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Meal<'a> {
    pub part: DayPart,
    pub title: &'static str,
    pub spot: Option<&'a str>,
    pub rating: Option<f64>,
}

impl Meal<'_> {
    pub fn is_empty(&self) -> bool {
        self.spot.is_none() && self.rating.is_none()
    }

    /// Rating worth displaying (strictly positive).
    pub fn shown_rating(&self) -> Option<f64> {
        self.rating.filter(|r| *r > 0.0)
    }
}

/// An activity recommendation within a day.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Activity<'a> {
    pub part: DayPart,
    pub title: &'static str,
    pub activity: Option<&'a str>,
    pub time: Option<&'a str>,
    pub location: Option<&'a str>,
    pub url: Option<&'a str>,
}

impl Activity<'_> {
    pub fn is_empty(&self) -> bool {
        self.activity.is_none() && self.time.is_none() && self.location.is_none()
    }
}

impl DailyItinerary {
    pub fn meals(&self) -> [Meal<'_>; 3] {
        [
            Meal {
                part: DayPart::Morning,
                title: "Breakfast",
                spot: self.breakfast_spot.as_deref(),
                rating: self.breakfast_rating,
            },
            Meal {
                part: DayPart::Afternoon,
                title: "Lunch",
                spot: self.lunch_spot.as_deref(),
                rating: self.lunch_rating,
            },
            Meal {
                part: DayPart::Evening,
                title: "Dinner",
                spot: self.dinner_spot.as_deref(),
                rating: self.dinner_rating,
            },
        ]
    }

    pub fn activities(&self) -> [Activity<'_>; 3] {
        [
            Activity {
                part: DayPart::Morning,
                title: "Morning Activity",
                activity: self.morning_activity.as_deref(),
                time: self.morning_activity_time.as_deref(),
                location: self.morning_activity_location.as_deref(),
                url: self.morning_activity_url.as_deref(),
            },
            Activity {
                part: DayPart::Afternoon,
                title: "Afternoon Activity",
                activity: self.afternoon_activity.as_deref(),
                time: self.afternoon_activity_time.as_deref(),
                location: self.afternoon_activity_location.as_deref(),
                url: self.afternoon_activity_url.as_deref(),
            },
            Activity {
                part: DayPart::Evening,
                title: "Evening Activity",
                activity: self.evening_activity.as_deref(),
                time: self.evening_activity_time.as_deref(),
                location: self.evening_activity_location.as_deref(),
                url: self.evening_activity_url.as_deref(),
            },
        ]
    }
}

/// Recommended place to stay.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Accommodation {
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_f64")]
    pub rating: Option<f64>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub location: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub unique_features: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub price_range: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub website_url: Option<String>,
}

impl Accommodation {
    /// Rating with one decimal, when positive.
    pub fn rating_label(&self) -> Option<String> {
        self.rating.filter(|r| *r > 0.0).map(|r| format!("{r:.1}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_day_slots() {
        let day: DailyItinerary = serde_json::from_str(
            r#"{"date":"2026-03-03","breakfast_spot":"Cafe Kitsune","breakfast_rating":"4.6",
                "morning_activity":"Senso-ji","morning_activity_time":"9:00 AM",
                "lunch_rating":0,"evening_activity_url":"https://example.com"}"#,
        )
        .unwrap();

        let [breakfast, lunch, dinner] = day.meals();
        assert_eq!(breakfast.spot, Some("Cafe Kitsune"));
        assert_eq!(breakfast.shown_rating(), Some(4.6));
        assert!(!lunch.is_empty());
        assert_eq!(lunch.shown_rating(), None);
        assert!(dinner.is_empty());

        let [morning, afternoon, evening] = day.activities();
        assert_eq!(morning.time, Some("9:00 AM"));
        assert!(afternoon.is_empty());
        // A link alone does not make a planned activity
        assert!(evening.is_empty());
        assert_eq!(evening.url, Some("https://example.com"));
    }

    #[test]
    fn test_accommodation_rating_label() {
        let hotel: Accommodation =
            serde_json::from_str(r#"{"name":"Park Hyatt","rating":4.75,"extra":"ignored"}"#).unwrap();
        assert_eq!(hotel.rating_label().as_deref(), Some("4.8"));

        let unrated = Accommodation::default();
        assert!(unrated.rating_label().is_none());
    }
}
