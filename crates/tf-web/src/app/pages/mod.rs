pub mod account;
pub mod home;
pub mod info;
pub mod login;
pub mod movies;
pub mod not_found;
pub mod notifications;

pub use account::AccountPage;
pub use home::HomePage;
pub use info::{AboutUsPage, ContactUsPage};
pub use login::LoginPage;
pub use movies::AddMoviePage;
pub use not_found::NotFoundPage;
pub use notifications::NotificationsPage;
