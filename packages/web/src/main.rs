use dioxus::prelude::*;

use ui::{AuthProvider, Navbar, RedirectTarget};
use views::{Home, Itinerary, Login, MyTrips, NotFound, Profile, Registration};

mod guards;
mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(Layout)]
        #[route("/")]
        Home {},
        #[route("/my-trips")]
        MyTrips {},
        #[route("/itinerary/:trip_id")]
        Itinerary { trip_id: String },
        #[route("/profile")]
        Profile {},
        #[route("/login")]
        Login {},
        #[route("/registration")]
        Registration {},
    #[end_layout]
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

impl From<RedirectTarget> for Route {
    fn from(target: RedirectTarget) -> Self {
        match target {
            RedirectTarget::Login => Route::Login {},
            RedirectTarget::Home => Route::Home {},
        }
    }
}

const FAVICON: Asset = asset!("/assets/favicon.svg");
const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Link { rel: "icon", href: FAVICON }
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Link { rel: "stylesheet", href: ui::HOPPER_CSS }

        AuthProvider {
            Router::<Route> {}
        }
    }
}

/// Navbar over every routed page.
#[component]
fn Layout() -> Element {
    rsx! {
        Navbar {
            Link { to: Route::Home {}, "Plan Trip" }
            Link { to: Route::MyTrips {}, "My Trips" }
            Link { to: Route::Profile {}, "Profile" }
        }
        main {
            class: "app-main",
            Outlet::<Route> {}
        }
    }
}
