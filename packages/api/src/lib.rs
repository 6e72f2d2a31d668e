//! # API crate: session state and backend access for Hopper
//!
//! Everything the views need to talk to the outside world lives here: the
//! hosted auth provider, the client-side session store that mirrors it, and
//! the REST client for the trip backend.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`auth`] | Auth provider contract, the GoTrue REST implementation, credential validation, listener registry |
//! | [`session`] | [`SessionStore`]: token, user id and readiness flag, kept in sync with the provider and persisted to a [`store::SessionSlot`] |
//! | [`client`] | [`TripsClient`]: bearer-authenticated calls to `/trips` and `/users/profile` |
//! | [`models`] | Backend payloads (trips, itineraries, accommodations, profile) and preference vocabularies |
//!
//! ## Lifecycle
//!
//! The UI creates one [`SessionStore`] at startup, registers for auth events
//! with [`SessionStore::subscribe_to_auth_events`], runs
//! [`SessionStore::bootstrap`] once, and calls [`SessionStore::dispose`] when
//! the app unmounts. Views read [`SessionSnapshot`]s and build a
//! [`TripsClient`] from them only once the session is ready and authenticated.

pub mod auth;
pub mod client;
pub mod models;
pub mod session;

pub use client::{ApiError, TripBundle, TripsClient};
pub use session::{SessionError, SessionPhase, SessionSnapshot, SessionStore};

pub use store::AppConfig;
