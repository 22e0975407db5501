//! Directory Port
//!
//! Interface for user persistence. Implementation is in the infrastructure
//! layer (or supplied by tests).

use thiserror::Error;

use outcome::id::UserId;

use crate::domain::value_object::user_name::UserName;

/// Error returned by a user directory implementation
///
/// The `Display` text of `Unavailable` is the raw trigger reported by the
/// underlying dependency; the use case preserves it as a diagnostic cause
/// without exposing it in user-facing messages.
#[derive(Debug, Error)]
pub enum DirectoryError {
    /// Directory could not be reached or answered with a fault
    #[error("{0}")]
    Unavailable(String),

    /// User name already registered
    #[error("User name already registered: {0}")]
    Duplicate(String),
}

/// User directory trait
#[trait_variant::make(UserDirectory: Send)]
pub trait LocalUserDirectory {
    /// Register a new user and return the assigned ID
    async fn insert(&self, user_name: &UserName) -> Result<UserId, DirectoryError>;
}
