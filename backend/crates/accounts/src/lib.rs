//! Accounts Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Business logic, value objects, directory port
//! - `application/` - Use cases and application services
//! - `infra/` - Directory implementations
//!
//! ## Features
//! - User creation with user name + password validation
//! - Explicit failure propagation via the shared `Outcome` kernel
//! - Pluggable user directory (tests inject their own)
//!
//! ## Failure Model
//! - Input violations surface as validation failures with the violated rule
//! - Directory faults surface as unexpected failures with a generic message
//!   and the raw trigger preserved as a diagnostic cause

pub mod application;
pub mod domain;
pub mod infra;

// Re-exports for convenience
pub use application::config::AccountsConfig;
pub use application::create_user::{CreateUserInput, CreateUserOutput, CreateUserUseCase};
pub use domain::repository::{DirectoryError, UserDirectory};
pub use infra::memory::InMemoryUserDirectory;

// Re-export kernel types for unified error handling
pub use outcome::error::{
    domain_error::{DomainError, DomainOutcome},
    kind::ErrorKind,
    taxonomy::{UnexpectedError, ValidationError},
};
pub use outcome::id::UserId;
pub use outcome::outcome::Outcome;

// Convenience re-exports
pub mod models {
    pub use crate::domain::value_object::*;
}
