//! # Trip payloads
//!
//! - [`Trip`]: one row of `GET /trips` and the body of `GET /trips/{id}/details`.
//! - [`NewTrip`]: request body of `POST /trips/create`.
//! - [`CreateTripResponse`]: its response; only a response carrying both a
//!   `message` and a `trip` counts as success.
//! - [`TripFilter`]: query flags of `GET /trips`.
//! - [`DateRange`]: inclusive start/end dates picked in the calendar.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::lenient;
use super::preferences::{ActivityLevel, BudgetPreference, TravelerType};

/// Trip as returned by the backend. Unknown fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Trip {
    #[serde(default, deserialize_with = "lenient::id")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub user_id: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub destination: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_date")]
    pub start_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "lenient::opt_date")]
    pub end_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "lenient::flag")]
    pub is_published: bool,
    #[serde(default, deserialize_with = "lenient::flag")]
    pub is_favorite: bool,
}

impl Trip {
    pub fn destination_or_default(&self) -> &str {
        self.destination.as_deref().unwrap_or("Unknown destination")
    }

    /// `"3/3/2026 - 3/9/2026"`; missing ends render as `"?"`.
    pub fn date_span(&self) -> String {
        format!("{} - {}", short_date(self.start_date), short_date(self.end_date))
    }
}

/// US-style numeric date, e.g. `3/9/2026`.
pub fn short_date(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format("%-m/%-d/%Y").to_string())
        .unwrap_or_else(|| "?".to_string())
}

/// Flags for `GET /trips`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TripFilter {
    pub show_unpublished: bool,
    pub favorites_only: bool,
}

/// Inclusive date range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    /// `None` when `end` is before `start`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Option<Self> {
        (start <= end).then_some(Self { start, end })
    }

    pub fn days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }

    /// `"Mar 3, 2026 to Mar 9, 2026"`.
    pub fn label(&self) -> String {
        format!("{} to {}", long_date(self.start), long_date(self.end))
    }
}

fn long_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// Wizard answers sent along with a new trip. Empty strings mean "no answer".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TripPreferences {
    pub traveler_type: Option<TravelerType>,
    pub activity_level: Option<ActivityLevel>,
    pub budget_preference: Option<BudgetPreference>,
    pub special_interests: String,
    pub dietary_preferences: String,
    pub additional_notes: String,
}

/// Body of `POST /trips/create`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewTrip {
    pub user_id: String,
    pub destination: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub arrival_time: Option<String>,
    pub departure_time: Option<String>,
    pub traveler_type: Option<TravelerType>,
    pub activity_level: Option<ActivityLevel>,
    pub budget_preference: Option<BudgetPreference>,
    pub special_interests: Option<String>,
    pub dietary_preferences: Option<String>,
    pub activity_preferences: Option<String>,
    pub additional_notes: Option<String>,
    pub status: String,
    pub is_published: bool,
    pub is_favorite: bool,
}

impl NewTrip {
    pub fn new(
        user_id: impl Into<String>,
        destination: impl Into<String>,
        dates: DateRange,
        preferences: &TripPreferences,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            destination: destination.into(),
            start_date: dates.start,
            end_date: dates.end,
            arrival_time: None,
            departure_time: None,
            traveler_type: preferences.traveler_type,
            activity_level: preferences.activity_level,
            budget_preference: preferences.budget_preference,
            special_interests: non_blank(&preferences.special_interests),
            dietary_preferences: non_blank(&preferences.dietary_preferences),
            activity_preferences: non_blank(&preferences.special_interests),
            additional_notes: non_blank(&preferences.additional_notes),
            status: "pending".to_string(),
            is_published: true,
            is_favorite: false,
        }
    }
}

pub(crate) fn non_blank(s: &str) -> Option<String> {
    let s = s.trim();
    (!s.is_empty()).then(|| s.to_string())
}

/// Response of `POST /trips/create`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CreateTripResponse {
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub message: Option<String>,
    #[serde(default)]
    pub trip: Option<Trip>,
}

impl CreateTripResponse {
    /// Id of the created trip, when the response is a complete success.
    pub fn created_trip_id(&self) -> Option<&str> {
        self.message.as_ref()?;
        let trip = self.trip.as_ref()?;
        (!trip.id.is_empty()).then_some(trip.id.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_trip_tolerates_loose_payload() {
        let trip: Trip = serde_json::from_str(
            r#"{"id":17,"destination":"Tokyo, Japan","start_date":"2026-03-03",
                "end_date":"2026-03-09T00:00:00","is_published":"true","is_favorite":null,
                "created_at":"2026-01-01","itinerary":{"nested":true}}"#,
        )
        .unwrap();
        assert_eq!(trip.id, "17");
        assert_eq!(trip.destination_or_default(), "Tokyo, Japan");
        assert_eq!(trip.date_span(), "3/3/2026 - 3/9/2026");
        assert!(trip.is_published);
        assert!(!trip.is_favorite);
    }

    #[test]
    fn test_trip_list_skips_nothing_on_sparse_rows() {
        let trips: Vec<Trip> = serde_json::from_str(r#"[{"id":"a"},{}]"#).unwrap();
        assert_eq!(trips.len(), 2);
        assert_eq!(trips[1].date_span(), "? - ?");
        assert_eq!(trips[1].destination_or_default(), "Unknown destination");
    }

    #[test]
    fn test_date_range_label() {
        let range = DateRange::new(date(2026, 3, 3), date(2026, 3, 9)).unwrap();
        assert_eq!(range.label(), "Mar 3, 2026 to Mar 9, 2026");
        assert_eq!(range.days(), 7);

        assert!(DateRange::new(date(2026, 3, 9), date(2026, 3, 3)).is_none());
    }

    #[test]
    fn test_new_trip_body() {
        let range = DateRange::new(date(2026, 3, 3), date(2026, 3, 4)).unwrap();
        let prefs = TripPreferences {
            traveler_type: Some(TravelerType::Couple),
            budget_preference: Some(BudgetPreference::UltraLuxury),
            special_interests: " Street Food ".to_string(),
            ..Default::default()
        };
        let body = serde_json::to_value(NewTrip::new("u1", "Paris, France", range, &prefs)).unwrap();

        assert_eq!(body["user_id"], "u1");
        assert_eq!(body["start_date"], "2026-03-03");
        assert_eq!(body["end_date"], "2026-03-04");
        assert_eq!(body["traveler_type"], "couple");
        assert_eq!(body["budget_preference"], "ULTRA_LUXURY");
        assert_eq!(body["activity_level"], serde_json::Value::Null);
        assert_eq!(body["special_interests"], "Street Food");
        assert_eq!(body["dietary_preferences"], serde_json::Value::Null);
        assert_eq!(body["status"], "pending");
        assert_eq!(body["is_published"], true);
        assert_eq!(body["is_favorite"], false);
    }

    #[test]
    fn test_create_response_requires_message_and_trip() {
        let ok: CreateTripResponse =
            serde_json::from_str(r#"{"message":"Trip created","trip":{"id":5}}"#).unwrap();
        assert_eq!(ok.created_trip_id(), Some("5"));

        let no_message: CreateTripResponse = serde_json::from_str(r#"{"trip":{"id":5}}"#).unwrap();
        assert_eq!(no_message.created_trip_id(), None);

        let no_trip: CreateTripResponse = serde_json::from_str(r#"{"message":"queued"}"#).unwrap();
        assert_eq!(no_trip.created_trip_id(), None);
    }
}
