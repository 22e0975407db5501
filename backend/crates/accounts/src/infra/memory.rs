//! In-Memory User Directory
//!
//! Process-local [`UserDirectory`] implementation for demos and tests.
//! Not durable: contents are lost when the process exits.

use std::collections::HashMap;

use tokio::sync::RwLock;

use outcome::id::UserId;

use crate::domain::repository::{DirectoryError, UserDirectory};
use crate::domain::value_object::user_name::UserName;

/// In-memory user directory
///
/// Keyed by the canonical user name, so duplicates are rejected
/// case-insensitively.
#[derive(Debug, Default)]
pub struct InMemoryUserDirectory {
    users: RwLock<HashMap<String, UserId>>,
}

impl InMemoryUserDirectory {
    /// Create an empty directory
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of registered users
    pub async fn len(&self) -> usize {
        self.users.read().await.len()
    }

    /// Whether the directory is empty
    pub async fn is_empty(&self) -> bool {
        self.users.read().await.is_empty()
    }
}

impl UserDirectory for InMemoryUserDirectory {
    async fn insert(&self, user_name: &UserName) -> Result<UserId, DirectoryError> {
        let mut users = self.users.write().await;

        if users.contains_key(user_name.as_str()) {
            return Err(DirectoryError::Duplicate(user_name.as_str().to_string()));
        }

        let user_id = UserId::new();
        users.insert(user_name.as_str().to_string(), user_id);
        Ok(user_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name(raw: &str) -> UserName {
        UserName::new(raw.to_string(), None).unwrap()
    }

    #[tokio::test]
    async fn test_insert_assigns_distinct_ids() {
        let directory = InMemoryUserDirectory::new();

        let alice = directory.insert(&name("alice")).await.unwrap();
        let bob = directory.insert(&name("bob")).await.unwrap();

        assert_ne!(alice, bob);
        assert_eq!(directory.len().await, 2);
    }

    #[tokio::test]
    async fn test_duplicate_rejected() {
        let directory = InMemoryUserDirectory::new();

        directory.insert(&name("alice")).await.unwrap();
        let err = directory.insert(&name("alice")).await.unwrap_err();

        assert!(matches!(err, DirectoryError::Duplicate(_)));
        assert_eq!(directory.len().await, 1);
    }

    #[tokio::test]
    async fn test_duplicate_check_is_case_insensitive() {
        let directory = InMemoryUserDirectory::new();

        directory.insert(&name("Alice")).await.unwrap();
        let err = directory.insert(&name("ALICE")).await.unwrap_err();

        assert!(matches!(err, DirectoryError::Duplicate(_)));
    }

    #[tokio::test]
    async fn test_empty() {
        let directory = InMemoryUserDirectory::new();
        assert!(directory.is_empty().await);

        directory.insert(&name("alice")).await.unwrap();
        assert!(!directory.is_empty().await);
    }
}
