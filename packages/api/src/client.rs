//! # Trip backend REST client
//!
//! [`TripsClient`] wraps the backend endpoints the views call. A client is
//! bound to one bearer token; [`TripsClient::from_snapshot`] refuses to build
//! one while the session store is still initializing or nobody is signed in,
//! so no request ever leaves without `Authorization: Bearer <token>`.
//!
//! | Method | Request |
//! |--------|---------|
//! | [`list_trips`](TripsClient::list_trips) | `GET /trips?show_unpublished=&favorites_only=` |
//! | [`create_trip`](TripsClient::create_trip) | `POST /trips/create` |
//! | [`trip_details`](TripsClient::trip_details) | `GET /trips/{id}/details` |
//! | [`daily_itineraries`](TripsClient::daily_itineraries) | `GET /trips/{id}/daily-itineraries` |
//! | [`accommodations`](TripsClient::accommodations) | `GET /trips/{id}/accommodations` |
//! | [`trip_bundle`](TripsClient::trip_bundle) | the three above, concurrently |
//! | [`set_favorite`](TripsClient::set_favorite) | `PUT /trips/{id}/favorite?favorite=` |
//! | [`delete_trip`](TripsClient::delete_trip) | `DELETE /trips/{id}` |
//! | [`recover_trip`](TripsClient::recover_trip) | `PUT /trips/{id}/publish?publish=true` |
//! | [`profile`](TripsClient::profile) | `GET /users/profile` |
//! | [`save_profile`](TripsClient::save_profile) | `POST /users/profile` |

use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use store::config::ApiConfig;

use crate::models::{
    lenient, Accommodation, CreateTripResponse, DailyItinerary, NewTrip, Profile, Trip, TripFilter,
};
use crate::session::SessionSnapshot;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Not signed in")]
    NotAuthenticated,
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("API Error ({status}): {body}")]
    Status { status: u16, body: String },
    #[error("API Error: {0}")]
    Combined(String),
}

/// Everything the itinerary view shows for one trip.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TripBundle {
    pub details: Trip,
    pub days: Vec<DailyItinerary>,
    pub accommodations: Vec<Accommodation>,
}

/// Authenticated client for the trip backend.
#[derive(Clone)]
pub struct TripsClient {
    http: Client,
    base_url: String,
    token: String,
}

impl TripsClient {
    pub fn new(base_url: &str, token: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.into(),
        }
    }

    /// Client for the signed-in user, or `NotAuthenticated`.
    pub fn from_snapshot(config: &ApiConfig, snapshot: &SessionSnapshot) -> Result<Self, ApiError> {
        let token = snapshot.bearer().ok_or(ApiError::NotAuthenticated)?;
        Ok(Self::new(&config.base_url, token))
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response, ApiError> {
        let response = request.bearer_auth(&self.token).send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        tracing::error!(status = status.as_u16(), "backend request failed: {body}");
        Err(ApiError::Status {
            status: status.as_u16(),
            body,
        })
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        Ok(self.send(self.http.get(self.url(path))).await?.json().await?)
    }

    /// Decode a JSON array, skipping entries that do not fit `T`.
    async fn get_list<T: DeserializeOwned>(&self, path: &str) -> Result<Vec<T>, ApiError> {
        let value: serde_json::Value = self.get_json(path).await?;
        Ok(lenient::list(value).unwrap_or_default())
    }

    pub async fn list_trips(&self, filter: TripFilter) -> Result<Vec<Trip>, ApiError> {
        let request = self.http.get(self.url("trips")).query(&filter);
        let value: serde_json::Value = self.send(request).await?.json().await?;
        Ok(lenient::list(value).unwrap_or_default())
    }

    pub async fn create_trip(&self, trip: &NewTrip) -> Result<CreateTripResponse, ApiError> {
        let request = self.http.post(self.url("trips/create")).json(trip);
        Ok(self.send(request).await?.json().await?)
    }

    pub async fn trip_details(&self, trip_id: &str) -> Result<Trip, ApiError> {
        self.get_json(&format!("trips/{trip_id}/details")).await
    }

    pub async fn daily_itineraries(&self, trip_id: &str) -> Result<Vec<DailyItinerary>, ApiError> {
        self.get_list(&format!("trips/{trip_id}/daily-itineraries")).await
    }

    pub async fn accommodations(&self, trip_id: &str) -> Result<Vec<Accommodation>, ApiError> {
        self.get_list(&format!("trips/{trip_id}/accommodations")).await
    }

    /// Fetch details, days and accommodations concurrently. If any request
    /// fails the error lists every failure.
    pub async fn trip_bundle(&self, trip_id: &str) -> Result<TripBundle, ApiError> {
        let (details, days, accommodations) = futures::join!(
            self.trip_details(trip_id),
            self.daily_itineraries(trip_id),
            self.accommodations(trip_id),
        );
        match (details, days, accommodations) {
            (Ok(details), Ok(days), Ok(accommodations)) => Ok(TripBundle {
                details,
                days,
                accommodations,
            }),
            (details, days, accommodations) => {
                let errors = [details.err(), days.err(), accommodations.err()];
                Err(combine_errors(errors.into_iter().flatten()))
            }
        }
    }

    pub async fn set_favorite(&self, trip_id: &str, favorite: bool) -> Result<(), ApiError> {
        let request = self
            .http
            .put(self.url(&format!("trips/{trip_id}/favorite")))
            .query(&[("favorite", favorite)]);
        self.send(request).await.map(|_| ())
    }

    /// Unpublish a trip. It stays recoverable.
    pub async fn delete_trip(&self, trip_id: &str) -> Result<(), ApiError> {
        let request = self.http.delete(self.url(&format!("trips/{trip_id}")));
        self.send(request).await.map(|_| ())
    }

    /// Publish a previously deleted trip again.
    pub async fn recover_trip(&self, trip_id: &str) -> Result<(), ApiError> {
        let request = self
            .http
            .put(self.url(&format!("trips/{trip_id}/publish")))
            .query(&[("publish", true)]);
        self.send(request).await.map(|_| ())
    }

    pub async fn profile(&self) -> Result<Profile, ApiError> {
        self.get_json("users/profile").await
    }

    pub async fn save_profile(&self, profile: &Profile, user_id: &str) -> Result<(), ApiError> {
        let request = self
            .http
            .post(self.url("users/profile"))
            .json(&profile.to_update(user_id));
        self.send(request).await.map(|_| ())
    }
}

fn combine_errors(errors: impl Iterator<Item = ApiError>) -> ApiError {
    let messages: Vec<String> = errors
        .filter_map(|e| match e {
            ApiError::Status { body, .. } if body.trim().is_empty() => None,
            ApiError::Status { body, .. } => Some(body),
            other => Some(other.to_string()),
        })
        .collect();
    ApiError::Combined(messages.join(", "))
}
