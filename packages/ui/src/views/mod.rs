mod login;
pub use login::LoginView;

mod registration;
pub use registration::RegistrationView;

mod home;
pub use home::HomeView;

mod my_trips;
pub use my_trips::MyTripsView;

mod itinerary;
pub use itinerary::ItineraryView;

mod profile;
pub use profile::ProfileView;
