//! Create User Use Case
//!
//! Creates a new user account. Every failure is returned as a failing
//! [`Outcome`]; nothing is thrown, and callers inspect the discriminant
//! before extracting a payload.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use outcome::error::domain_error::DomainOutcome;
use outcome::error::taxonomy::{UnexpectedError, ValidationError};
use outcome::id::UserId;
use outcome::outcome::Outcome;

use crate::application::config::AccountsConfig;
use crate::domain::repository::{DirectoryError, UserDirectory};
use crate::domain::value_object::{user_name::UserName, user_password::RawPassword};

/// Create user input
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserInput {
    pub user_name: String,
    pub password: String,
}

/// Create user output
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserOutput {
    pub user_id: UserId,
}

/// Create user use case
pub struct CreateUserUseCase<D>
where
    D: UserDirectory,
{
    directory: Arc<D>,
    config: Arc<AccountsConfig>,
}

impl<D> CreateUserUseCase<D>
where
    D: UserDirectory,
{
    pub fn new(directory: Arc<D>, config: Arc<AccountsConfig>) -> Self {
        Self { directory, config }
    }

    /// Execute user creation
    ///
    /// ## Failure shapes
    /// * invalid user name or password - validation failure naming the
    ///   violated rule
    /// * directory fault - unexpected failure with the raw trigger kept as
    ///   a diagnostic cause
    pub async fn execute(&self, input: CreateUserInput) -> DomainOutcome<CreateUserOutput> {
        // Validate user name
        let user_name = match UserName::new(input.user_name, Some(self.config.reserved_names())) {
            Ok(name) => name,
            Err(e) => {
                tracing::debug!(rule = %e, "User name rejected");
                return ValidationError::create(e);
            }
        };

        // Validate password (validated only; this crate never stores it)
        if let Err(e) = RawPassword::new(input.password) {
            tracing::debug!(rule = %e, "Password rejected");
            return ValidationError::create(e);
        }

        // Register in the directory
        match self.directory.insert(&user_name).await {
            Ok(user_id) => {
                tracing::info!(
                    user_id = %user_id,
                    user_name = %user_name,
                    "User created"
                );
                Outcome::ok(CreateUserOutput { user_id })
            }
            Err(DirectoryError::Duplicate(_)) => {
                ValidationError::create("User name is already taken.")
            }
            Err(e) => {
                tracing::error!(error = %e, "User directory failure");
                UnexpectedError::create(e)
            }
        }
    }
}
