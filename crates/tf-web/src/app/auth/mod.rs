// Authentication collaborators

pub mod local;
pub mod provider;

pub use local::{LocalAuthProvider, StaticProfileStore};
pub use provider::{AuthListener, AuthProvider, ProfileStore};
