//! Backend payloads.
//!
//! The client only displays these, so every type is tolerant: unknown fields
//! are ignored, missing or mistyped fields fall back to empty values (see
//! [`lenient`]).

pub mod lenient;
mod itinerary;
mod preferences;
mod profile;
mod trip;

pub use itinerary::{Accommodation, Activity, DailyItinerary, DayPart, Meal};
pub use preferences::{ActivityLevel, BudgetPreference, TravelerType};
pub use profile::{Profile, ProfileField};
pub use trip::{
    short_date, CreateTripResponse, DateRange, NewTrip, Trip, TripFilter, TripPreferences,
};
