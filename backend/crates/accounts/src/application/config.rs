//! Accounts Configuration

/// Configuration for the accounts application layer
///
/// Holds policy knobs that are deployment-specific rather than part of the
/// domain rules themselves.
#[derive(Debug, Clone, Default)]
pub struct AccountsConfig {
    /// Reserved user names in addition to the built-in list
    reserved_names: Vec<String>,
}

impl AccountsConfig {
    /// Create a config with no extra reserved names
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a config with additional reserved user names
    pub fn with_reserved_names(reserved_names: Vec<String>) -> Self {
        Self { reserved_names }
    }

    /// Extra reserved user names (checked case-insensitively)
    pub fn reserved_names(&self) -> &[String] {
        &self.reserved_names
    }
}
