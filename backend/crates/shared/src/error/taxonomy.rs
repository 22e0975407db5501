//! Error Taxonomy - Named failure shapes
//!
//! Each variant here is a constructor for a failing [`Outcome`] whose
//! payload is a [`DomainError`] pre-populated with a fixed message
//! template. Variants differ only in how they build the payload, so they
//! are plain constructor types rather than wrappers around the container.

use std::error::Error;
use std::fmt;

use super::domain_error::DomainError;
use super::kind::ErrorKind;
use crate::outcome::Outcome;

/// `UnexpectedError` のユーザー向けメッセージ（固定）
///
/// 外部依存の障害内容を利用者へ漏らさないため、メッセージは常に
/// この文字列になります。詳細は `cause` にのみ保持されます。
pub const UNEXPECTED_ERROR_MESSAGE: &str = "An unexpected error occurred.";

/// `ValidationError` のメッセージに付与される接頭辞（固定）
pub const VALIDATION_ERROR_PREFIX: &str = "Validation error occurred.";

/// 予期しないエラー
///
/// 外部依存の障害や内部の想定外の failure を表します。
/// メッセージは常に固定の文言で、引き金となった生のエラーは
/// `cause` としてそのまま保持されます（診断用）。
///
/// ## Examples
/// ```rust
/// use outcome::error::taxonomy::{UnexpectedError, UNEXPECTED_ERROR_MESSAGE};
/// use outcome::error::domain_error::DomainOutcome;
///
/// let o: DomainOutcome<u32> = UnexpectedError::create("Connection error.");
/// let err = o.error().unwrap();
/// assert_eq!(err.message(), UNEXPECTED_ERROR_MESSAGE);
/// assert_eq!(err.cause().unwrap().to_string(), "Connection error.");
/// ```
pub struct UnexpectedError;

impl UnexpectedError {
    /// 失敗状態の `Outcome` を作成
    ///
    /// ## Arguments
    /// * `cause` - 引き金となった元のエラー（エラー型または生の文字列）
    ///
    /// この関数自体は決して失敗せず、副作用もありません。
    #[inline]
    pub fn create<V>(
        cause: impl Into<Box<dyn Error + Send + Sync + 'static>>,
    ) -> Outcome<V, DomainError> {
        Outcome::fail(
            DomainError::new(ErrorKind::Unexpected, UNEXPECTED_ERROR_MESSAGE).with_cause(cause),
        )
    }
}

/// バリデーションエラー
///
/// 呼び出し元の入力が事前条件を満たさなかったことを表します。
/// メッセージには違反した具体的なルールが補間され、`cause` は
/// 設定されません（入力を修正すれば回復できるため）。
///
/// ## Examples
/// ```rust
/// use outcome::error::taxonomy::ValidationError;
/// use outcome::error::domain_error::DomainOutcome;
///
/// let o: DomainOutcome<u32> = ValidationError::create("Password is too short.");
/// let err = o.error().unwrap();
/// assert_eq!(err.message(), "Validation error occurred. Password is too short.");
/// assert!(err.cause().is_none());
/// ```
pub struct ValidationError;

impl ValidationError {
    /// 失敗状態の `Outcome` を作成
    ///
    /// ## Arguments
    /// * `reason` - 違反したルールを説明する人間可読の文字列
    ///
    /// この関数自体は決して失敗せず、副作用もありません。
    #[inline]
    pub fn create<V>(reason: impl fmt::Display) -> Outcome<V, DomainError> {
        Outcome::fail(DomainError::new(
            ErrorKind::Validation,
            format!("{} {}", VALIDATION_ERROR_PREFIX, reason),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::domain_error::DomainOutcome;

    #[test]
    fn test_unexpected_is_always_failure() {
        let o: DomainOutcome<u32> = UnexpectedError::create("boom");
        assert!(o.is_failure());
        assert!(!o.is_success());
    }

    #[test]
    fn test_unexpected_message_is_constant() {
        let causes = ["Connection error.", "timeout", ""];
        for cause in causes {
            let o: DomainOutcome<u32> = UnexpectedError::create(cause.to_string());
            assert_eq!(o.error().unwrap().message(), UNEXPECTED_ERROR_MESSAGE);
        }
    }

    #[test]
    fn test_unexpected_preserves_cause() {
        let o: DomainOutcome<u32> = UnexpectedError::create("Connection error.");
        let err = o.error().unwrap();
        assert_eq!(err.cause().unwrap().to_string(), "Connection error.");
        assert_eq!(err.kind(), ErrorKind::Unexpected);
    }

    #[test]
    fn test_unexpected_accepts_error_types() {
        let io_err = std::io::Error::new(std::io::ErrorKind::TimedOut, "timed out");
        let o: DomainOutcome<u32> = UnexpectedError::create(io_err);
        assert_eq!(o.error().unwrap().cause().unwrap().to_string(), "timed out");
    }

    #[test]
    fn test_validation_message_formatting() {
        let o: DomainOutcome<u32> = ValidationError::create("Password is too short.");
        assert_eq!(
            o.error().unwrap().message(),
            "Validation error occurred. Password is too short."
        );
    }

    #[test]
    fn test_validation_has_no_cause() {
        let o: DomainOutcome<u32> = ValidationError::create("Name is required.");
        let err = o.error().unwrap();
        assert!(err.cause().is_none());
        assert_eq!(err.kind(), ErrorKind::Validation);
        assert!(err.is_recoverable());
    }

    #[test]
    fn test_variants_carry_their_own_kind() {
        // Each creator is identified by its own kind, never by another
        // variant's.
        let v: DomainOutcome<()> = ValidationError::create("bad input");
        let u: DomainOutcome<()> = UnexpectedError::create("down");
        assert_eq!(v.error().unwrap().kind(), ErrorKind::Validation);
        assert_eq!(u.error().unwrap().kind(), ErrorKind::Unexpected);
    }
}
