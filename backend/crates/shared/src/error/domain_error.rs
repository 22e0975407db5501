//! Domain Error - Structured failure description
//!
//! Defines the [`DomainError`] struct and [`DomainOutcome<V>`] type alias.

use std::borrow::Cow;
use std::error::Error;
use std::fmt;

use super::kind::ErrorKind;
use crate::outcome::Outcome;

/// ドメイン統一エラー型
///
/// プロジェクト全体で使用する標準の失敗 payload です。
/// taxonomy のコンストラクタ経由で生成するのが基本ですが、
/// 直接構築することもできます。
///
/// ## Fields
/// * `kind` - エラーの分類（taxonomy バリアントの識別子）
/// * `message` - ユーザー向けのエラーメッセージ
/// * `cause` - 引き金となった元のエラー（オプション、診断用）
///
/// ## Notes
/// * `cause` は診断専用であり、制御フローの判断に使用してはならない
/// * 生成後にフィールドを変更する手段は提供しない（不変）
///
/// ## Examples
/// ```rust
/// use outcome::error::{domain_error::DomainError, kind::ErrorKind};
///
/// let err = DomainError::new(ErrorKind::Validation, "Name is required.");
/// assert_eq!(err.message(), "Name is required.");
/// assert!(err.cause().is_none());
/// ```
pub struct DomainError {
    /// エラー種別
    kind: ErrorKind,
    /// ユーザー向けメッセージ
    message: Cow<'static, str>,
    /// 元のエラー（診断用）
    cause: Option<Box<dyn Error + Send + Sync + 'static>>,
}

/// ドメイン操作の結果型エイリアス
///
/// `Outcome<V, DomainError>` の省略形です。
///
/// ## Examples
/// ```rust
/// use outcome::error::domain_error::DomainOutcome;
/// use outcome::error::taxonomy::ValidationError;
/// use outcome::outcome::Outcome;
///
/// fn parse_age(raw: &str) -> DomainOutcome<u8> {
///     match raw.parse() {
///         Ok(age) => Outcome::ok(age),
///         Err(_) => ValidationError::create("Age must be a number."),
///     }
/// }
/// assert!(parse_age("30").is_success());
/// assert!(parse_age("abc").is_failure());
/// ```
pub type DomainOutcome<V> = Outcome<V, DomainError>;

impl DomainError {
    /// 新しいエラーを作成
    ///
    /// ## Arguments
    /// * `kind` - エラー種別
    /// * `message` - ユーザー向けメッセージ
    #[inline]
    pub fn new(kind: ErrorKind, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            kind,
            message: message.into(),
            cause: None,
        }
    }

    /// 引き金となった元のエラーを設定（診断用）
    ///
    /// エラー型だけでなく、生の文字列もそのまま保持できます。
    ///
    /// ## Examples
    /// ```rust
    /// use outcome::error::{domain_error::DomainError, kind::ErrorKind};
    ///
    /// let err = DomainError::new(ErrorKind::Unexpected, "An unexpected error occurred.")
    ///     .with_cause("Connection error.");
    /// assert_eq!(err.cause().unwrap().to_string(), "Connection error.");
    /// ```
    #[inline]
    pub fn with_cause(mut self, cause: impl Into<Box<dyn Error + Send + Sync + 'static>>) -> Self {
        self.cause = Some(cause.into());
        self
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// エラー種別を取得
    #[inline]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// メッセージを取得
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// 元のエラーを取得
    #[inline]
    pub fn cause(&self) -> Option<&(dyn Error + 'static)> {
        self.cause
            .as_ref()
            .map(|e| e.as_ref() as &(dyn Error + 'static))
    }

    /// 呼び出し元が回復できるエラーかどうか
    #[inline]
    pub fn is_recoverable(&self) -> bool {
        self.kind.is_recoverable()
    }
}

impl fmt::Debug for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut builder = f.debug_struct("DomainError");
        builder.field("kind", &self.kind);
        builder.field("message", &self.message);
        if let Some(cause) = &self.cause {
            builder.field("cause", cause);
        }
        builder.finish()
    }
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.kind, self.message)
    }
}

impl Error for DomainError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.cause()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_error() {
        let err = DomainError::new(ErrorKind::Validation, "Input is invalid.");
        assert_eq!(err.kind(), ErrorKind::Validation);
        assert_eq!(err.message(), "Input is invalid.");
        assert!(err.cause().is_none());
        assert!(err.is_recoverable());
    }

    #[test]
    fn test_with_cause_from_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused");
        let err = DomainError::new(ErrorKind::Unexpected, "An unexpected error occurred.")
            .with_cause(io_err);
        assert!(err.cause().is_some());
        assert!(err.source().is_some());
    }

    #[test]
    fn test_with_cause_from_string() {
        let err = DomainError::new(ErrorKind::Unexpected, "An unexpected error occurred.")
            .with_cause("Connection error.");
        assert_eq!(err.cause().unwrap().to_string(), "Connection error.");
    }

    #[test]
    fn test_display() {
        let err = DomainError::new(ErrorKind::Validation, "Input is invalid.");
        assert_eq!(err.to_string(), "[Validation] Input is invalid.");
    }

    #[test]
    fn test_debug_omits_absent_cause() {
        let err = DomainError::new(ErrorKind::Validation, "Input is invalid.");
        let debug = format!("{:?}", err);
        assert!(!debug.contains("cause"));

        let err = err.with_cause("boom");
        let debug = format!("{:?}", err);
        assert!(debug.contains("cause"));
    }

    #[test]
    fn test_domain_outcome_alias() {
        let ok: DomainOutcome<u32> = Outcome::ok(1);
        assert!(ok.is_success());

        let ng: DomainOutcome<u32> =
            Outcome::fail(DomainError::new(ErrorKind::Unexpected, "down"));
        assert!(ng.is_failure());
        assert_eq!(ng.error().unwrap().kind(), ErrorKind::Unexpected);
    }
}
