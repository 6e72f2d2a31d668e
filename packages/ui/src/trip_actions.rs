//! Per-trip buttons on the My Trips cards.
//!
//! Each button issues one backend call and fires `on_success` when it went
//! through, so the list can refetch. Failures are logged and leave the card
//! unchanged.

use dioxus::prelude::*;

use crate::auth::use_trips_client;
use crate::icons::{FaRotateLeft, FaStar, FaTrashCan};
use crate::Icon;

#[component]
pub fn FavoriteButton(trip_id: String, is_favorite: bool, on_success: EventHandler<()>) -> Element {
    let make_client = use_trips_client();
    let mut favorite = use_signal(|| is_favorite);
    let mut updating = use_signal(|| false);

    let onclick = move |_| {
        let make_client = make_client.clone();
        let trip_id = trip_id.clone();
        async move {
            updating.set(true);
            let target = !favorite();
            let result = match make_client() {
                Ok(client) => client.set_favorite(&trip_id, target).await,
                Err(e) => Err(e),
            };
            match result {
                Ok(()) => {
                    favorite.set(target);
                    on_success.call(());
                }
                Err(e) => tracing::error!("Error updating favorite status: {e}"),
            }
            updating.set(false);
        }
    };

    let class = if favorite() { "favorite-button favorite-button--on" } else { "favorite-button" };
    let title = if favorite() { "Remove from favorites" } else { "Add to favorites" };

    rsx! {
        button {
            class: "{class}",
            title: "{title}",
            disabled: updating(),
            onclick,
            Icon { icon: FaStar, width: 18, height: 18 }
        }
    }
}

/// Unpublishes the trip. Favorited trips cannot be deleted.
#[component]
pub fn DeleteTripButton(trip_id: String, is_favorite: bool, on_success: EventHandler<()>) -> Element {
    let make_client = use_trips_client();
    let mut deleting = use_signal(|| false);

    let onclick = move |_| {
        let make_client = make_client.clone();
        let trip_id = trip_id.clone();
        async move {
            deleting.set(true);
            let result = match make_client() {
                Ok(client) => client.delete_trip(&trip_id).await,
                Err(e) => Err(e),
            };
            match result {
                Ok(()) => on_success.call(()),
                Err(e) => tracing::error!("Error deleting trip: {e}"),
            }
            deleting.set(false);
        }
    };

    let title = if is_favorite { "Cannot delete favorited trips" } else { "Delete trip" };

    rsx! {
        button {
            class: "delete-button",
            title: "{title}",
            disabled: is_favorite || deleting(),
            onclick,
            Icon { icon: FaTrashCan, width: 16, height: 16 }
        }
    }
}

#[component]
pub fn RecoverTripButton(trip_id: String, on_success: EventHandler<()>) -> Element {
    let make_client = use_trips_client();
    let mut recovering = use_signal(|| false);

    let onclick = move |_| {
        let make_client = make_client.clone();
        let trip_id = trip_id.clone();
        async move {
            recovering.set(true);
            let result = match make_client() {
                Ok(client) => client.recover_trip(&trip_id).await,
                Err(e) => Err(e),
            };
            match result {
                Ok(()) => on_success.call(()),
                Err(e) => tracing::error!("Error recovering trip: {e}"),
            }
            recovering.set(false);
        }
    };

    rsx! {
        button {
            class: "recover-button",
            title: "Recover trip",
            disabled: recovering(),
            onclick,
            Icon { icon: FaRotateLeft, width: 14, height: 14 }
            "Recover"
        }
    }
}
