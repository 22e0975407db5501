//! Application Layer
//!
//! Use cases and application services.

pub mod config;
pub mod create_user;

// Re-exports
pub use config::AccountsConfig;
pub use create_user::{CreateUserInput, CreateUserOutput, CreateUserUseCase};
