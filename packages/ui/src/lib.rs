//! This crate contains all shared UI for the workspace.

use dioxus::prelude::*;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

mod platform;
pub use platform::{make_session_store, AppSessionStore, PlatformSlot};

pub mod views;

pub const HOPPER_CSS: Asset = asset!("/assets/hopper.css");

mod navbar;
pub use navbar::Navbar;

mod auth;
pub use auth::{use_app_config, use_auth, use_session_store, use_trips_client, AuthProvider, LogoutButton};

pub mod guard;
pub use guard::{GuardKind, Guarded, RedirectTarget};

pub mod calendar;
pub use calendar::DateRangePicker;

mod day_card;
pub use day_card::{AccommodationCard, DayCard, EmptyState};

pub mod day_carousel;
pub use day_carousel::DayCarousel;

pub mod destinations;
pub use destinations::DestinationSearch;

mod trip_actions;
pub use trip_actions::{DeleteTripButton, FavoriteButton, RecoverTripButton};

pub mod trip_wizard;
pub use trip_wizard::TripWizard;
