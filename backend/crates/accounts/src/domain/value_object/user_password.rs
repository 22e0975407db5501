//! User Password Value Object
//!
//! Raw password input with length-policy validation. Hashing and storage
//! are out of scope for this crate; the password is validated, then
//! discarded by the use case.
//!
//! ## 不変条件
//! - 長さ: 7〜31文字（正規化後の文字数）
//! - ポリシー違反のメッセージは、そのまま利用者へ提示できる文言

use std::fmt;

use thiserror::Error;
use unicode_normalization::UnicodeNormalization;

// ============================================================================
// Constants
// ============================================================================

/// Minimum accepted password length (in characters)
pub const MIN_PASSWORD_LENGTH: usize = 7;

/// Maximum accepted password length (in characters)
pub const MAX_PASSWORD_LENGTH: usize = 31;

// ============================================================================
// Error Types
// ============================================================================

/// Error returned when password policy validation fails
///
/// The `Display` text is the exact human-readable rule that was violated,
/// suitable for interpolation into a validation failure message.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum PasswordPolicyError {
    /// Password is shorter than [`MIN_PASSWORD_LENGTH`]
    #[error("Password is too short.")]
    TooShort,

    /// Password is longer than [`MAX_PASSWORD_LENGTH`]
    #[error("Password is too long.")]
    TooLong,
}

// ============================================================================
// Raw Password (User Input)
// ============================================================================

/// Raw password from user input
///
/// Unicode NFKC normalized before validation. Never logged or displayed;
/// `Debug` output is redacted.
pub struct RawPassword(String);

impl RawPassword {
    /// Create a new raw password with validation
    ///
    /// ## Validation Rules
    /// - Minimum 7 characters
    /// - Maximum 31 characters
    ///
    /// ## Errors
    /// Returns [`PasswordPolicyError`] naming the violated rule
    pub fn new(raw: String) -> Result<Self, PasswordPolicyError> {
        let normalized: String = raw.nfkc().collect();
        let length = normalized.chars().count();

        if length < MIN_PASSWORD_LENGTH {
            return Err(PasswordPolicyError::TooShort);
        }
        if length > MAX_PASSWORD_LENGTH {
            return Err(PasswordPolicyError::TooLong);
        }

        Ok(Self(normalized))
    }

    /// Access the validated password text
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for RawPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("RawPassword").field(&"[REDACTED]").finish()
    }
}

// ============================================================================
// Tests
// ============================================================================
