//! User Name Value Object
//!
//! ユーザー名は、ユーザーを識別するための**公開識別子（ハンドル）**。
//!
//! ## 設計方針
//! - 大文字入力は受け付けるが、canonical（正規形）は小文字
//! - NFKC正規化 → 検証 → 小文字化 の順で処理
//! - 予約語チェックは設定可能（デフォルトリスト + 外部設定）
//!
//! ## 不変条件
//! - 長さ: 3〜30文字（正規化後）
//! - 空白文字を含まない
//! - 予約語と一致しない（大文字小文字を区別しない）

use std::fmt;

use thiserror::Error;
use unicode_normalization::UnicodeNormalization;

// ============================================================================
// Constants
// ============================================================================

/// Minimum length for user name (in characters)
pub const USER_NAME_MIN_LENGTH: usize = 3;

/// Maximum length for user name (in characters)
pub const USER_NAME_MAX_LENGTH: usize = 30;

/// Default reserved words that cannot be used as user names
const DEFAULT_RESERVED_WORDS: &[&str] = &[
    "admin",
    "administrator",
    "root",
    "system",
    "superuser",
    "support",
];

// ============================================================================
// Error Types
// ============================================================================

/// Error returned when user name validation fails
///
/// The `Display` text is the exact human-readable rule that was violated,
/// suitable for interpolation into a validation failure message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum UserNameError {
    /// User name is empty after normalization
    #[error("User name is required.")]
    Empty,

    /// User name is too short (minimum: [`USER_NAME_MIN_LENGTH`])
    #[error("User name is too short.")]
    TooShort,

    /// User name is too long (maximum: [`USER_NAME_MAX_LENGTH`])
    #[error("User name is too long.")]
    TooLong,

    /// User name contains whitespace
    #[error("User name must not contain spaces.")]
    ContainsWhitespace,

    /// User name matches a reserved word
    #[error("User name is reserved.")]
    Reserved,
}

// ============================================================================
// User Name
// ============================================================================

/// Validated user name (canonical lowercase form)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UserName(String);

impl UserName {
    /// Create a new user name with validation
    ///
    /// ## Arguments
    /// * `raw` - User-supplied name
    /// * `extra_reserved` - Additional reserved words from configuration
    ///
    /// ## Errors
    /// Returns [`UserNameError`] naming the violated rule
    pub fn new(raw: String, extra_reserved: Option<&[String]>) -> Result<Self, UserNameError> {
        let normalized: String = raw.nfkc().collect::<String>().trim().to_string();

        if normalized.is_empty() {
            return Err(UserNameError::Empty);
        }
        if normalized.chars().any(char::is_whitespace) {
            return Err(UserNameError::ContainsWhitespace);
        }

        let length = normalized.chars().count();
        if length < USER_NAME_MIN_LENGTH {
            return Err(UserNameError::TooShort);
        }
        if length > USER_NAME_MAX_LENGTH {
            return Err(UserNameError::TooLong);
        }

        let canonical = normalized.to_lowercase();

        if DEFAULT_RESERVED_WORDS.contains(&canonical.as_str()) {
            return Err(UserNameError::Reserved);
        }
        if let Some(reserved) = extra_reserved {
            if reserved.iter().any(|word| word.to_lowercase() == canonical) {
                return Err(UserNameError::Reserved);
            }
        }

        Ok(Self(canonical))
    }

    /// Get the canonical (lowercase) form
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Tests
// ============================================================================
