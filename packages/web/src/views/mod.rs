mod login;
pub use login::Login;

mod registration;
pub use registration::Registration;

mod home;
pub use home::Home;

mod my_trips;
pub use my_trips::MyTrips;

mod itinerary;
pub use itinerary::Itinerary;

mod profile;
pub use profile::Profile;

mod not_found;
pub use not_found::NotFound;
