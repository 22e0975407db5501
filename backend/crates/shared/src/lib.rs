//! Shared Kernel - Domain-crossing minimal core
//!
//! This crate contains the "smallest core" of domain vocabulary:
//! - The [`outcome::Outcome`] container (explicit success-or-failure values)
//! - The domain error type and its taxonomy constructors
//! - Common primitive value objects (ID types, etc.)
//!
//! **Design Principle**: Only include things that are "hard to change"
//! and have consistent meaning across all domains.

pub mod error {
    pub mod domain_error;
    pub mod kind;
    pub mod taxonomy;
}
pub mod id;
pub mod outcome;
