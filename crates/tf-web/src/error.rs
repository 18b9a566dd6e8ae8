//! Error types for the navigation layer's external collaborators.
//!
//! Neither error is ever surfaced to the user; the navbar logs them and keeps
//! whatever state it already had.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failures reported by an authentication provider.
#[derive(Error, Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// The provider rejected or could not complete the sign-out call.
    #[error("sign-out failed: {message}")]
    SignOutFailed { message: String },
}

impl AuthError {
    pub fn sign_out_failed(message: impl Into<String>) -> Self {
        Self::SignOutFailed { message: message.into() }
    }
}

/// Failures reported by a user-profile store.
#[derive(Error, Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub enum ProfileError {
    /// No profile record exists for the identity.
    #[error("no profile for '{identity}'")]
    NotFound { identity: String },

    /// The record exists but could not be decoded.
    #[error("malformed profile record: {message}")]
    Malformed { message: String },

    /// Store-side failure (network, permissions, ...).
    #[error("profile store error: {message}")]
    Backend { message: String },
}

impl ProfileError {
    pub fn not_found(identity: impl std::fmt::Display) -> Self {
        Self::NotFound {
            identity: identity.to_string(),
        }
    }

    pub fn backend(message: impl Into<String>) -> Self {
        Self::Backend { message: message.into() }
    }
}

impl From<serde_json::Error> for ProfileError {
    fn from(err: serde_json::Error) -> Self {
        Self::Malformed { message: err.to_string() }
    }
}

pub type AuthResult<T> = Result<T, AuthError>;
pub type ProfileResult<T> = Result<T, ProfileError>;
