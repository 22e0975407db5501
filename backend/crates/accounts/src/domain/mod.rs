//! Domain Layer
//!
//! Contains value objects and the directory port.

pub mod repository;
pub mod value_object;

// Re-exports
pub use repository::{DirectoryError, UserDirectory};
pub use value_object::{user_name::UserName, user_password::RawPassword};
