//! Error Kind - Classification of domain failures
//!
//! Defines the [`ErrorKind`] enum that identifies each taxonomy variant.

use serde::Serialize;

/// エラー種別の列挙体
///
/// ドメインエラーの分類を定義します。各バリアントは失敗の発生源と
/// 回復可能性を表し、taxonomy のコンストラクタによって設定されます。
///
/// ## Notes
/// * `non_exhaustive` - 将来的に列挙子が追加される可能性があることを示す
/// * 既知のバリアントを網羅的に処理しつつ、catch-all も用意すること
///
/// ## Examples
/// ```rust
/// use outcome::error::kind::ErrorKind;
///
/// let kind = ErrorKind::Validation;
/// assert_eq!(kind.as_str(), "Validation");
/// assert!(kind.is_recoverable());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[non_exhaustive]
pub enum ErrorKind {
    /// 入力が事前条件を満たさなかった（呼び出し元が修正可能）
    Validation,
    /// 外部依存または内部の予期しない障害
    Unexpected,
}

impl ErrorKind {
    /// 文字列表現を取得
    ///
    /// ## Examples
    /// ```rust
    /// use outcome::error::kind::ErrorKind;
    /// assert_eq!(ErrorKind::Unexpected.as_str(), "Unexpected");
    /// ```
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Validation => "Validation",
            ErrorKind::Unexpected => "Unexpected",
        }
    }

    /// 呼び出し元が入力を修正することで回復できるかどうかを判定
    ///
    /// `Validation` のみ `true` を返します。回復不能なエラーは
    /// ログに記録すべきです。
    #[inline]
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, ErrorKind::Validation)
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
