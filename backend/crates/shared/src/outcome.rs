//! Outcome Container - Explicit success-or-failure values
//!
//! Defines the [`Outcome`] sum type used as the return value of every
//! fallible domain operation.

use std::fmt;

/// 成功または失敗を表す不変のコンテナ型
///
/// 生成時にどちらか一方の状態に確定し、以後変化しません。
/// 失敗は例外としてではなく値として呼び出し元へ伝搬されるため、
/// 各レイヤーは判別子を検査してから payload を取り出します。
///
/// ## Variants
/// * `Success` - 成功 payload `V` を保持
/// * `Failure` - 失敗 payload `E` を保持
///
/// ## Notes
/// * 誤った variant からの取り出しは `None` / `Err` を返す（暗黙の
///   フォールバックは行わない）
/// * 構築・検査は同期かつ定数時間。共有可変状態を持たないため、
///   payload が `Send`/`Sync` であれば任意のスレッドから安全に扱える
///
/// ## Examples
/// ```rust
/// use outcome::outcome::Outcome;
///
/// let ok: Outcome<u32, String> = Outcome::ok(42);
/// assert!(ok.is_success());
/// assert_eq!(ok.value(), Some(&42));
///
/// let ng: Outcome<u32, String> = Outcome::fail("boom".to_string());
/// assert!(ng.is_failure());
/// assert_eq!(ng.value(), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome<V, E> {
    /// Operation succeeded with a payload
    Success(V),
    /// Operation failed with a structured error
    Failure(E),
}

impl<V, E> Outcome<V, E> {
    // ========================================================================
    // Constructors
    // ========================================================================

    /// 成功インスタンスを作成
    ///
    /// ## Examples
    /// ```rust
    /// use outcome::outcome::Outcome;
    /// let o: Outcome<&str, ()> = Outcome::ok("done");
    /// assert!(o.is_success());
    /// ```
    #[inline]
    pub const fn ok(value: V) -> Self {
        Outcome::Success(value)
    }

    /// 失敗インスタンスを作成
    ///
    /// ## Examples
    /// ```rust
    /// use outcome::outcome::Outcome;
    /// let o: Outcome<(), &str> = Outcome::fail("denied");
    /// assert!(o.is_failure());
    /// ```
    #[inline]
    pub const fn fail(error: E) -> Self {
        Outcome::Failure(error)
    }

    // ========================================================================
    // Discriminant queries
    // ========================================================================

    /// 成功かどうかを判定
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }

    /// 失敗かどうかを判定
    ///
    /// 常に `!is_success()` と等しい。
    #[inline]
    pub const fn is_failure(&self) -> bool {
        !self.is_success()
    }

    // ========================================================================
    // Checked accessors
    // ========================================================================

    /// 成功 payload への参照を取得
    ///
    /// ## Returns
    /// 失敗状態の場合は `None`
    #[inline]
    pub const fn value(&self) -> Option<&V> {
        match self {
            Outcome::Success(value) => Some(value),
            Outcome::Failure(_) => None,
        }
    }

    /// 失敗 payload への参照を取得
    ///
    /// ## Returns
    /// 成功状態の場合は `None`
    #[inline]
    pub const fn error(&self) -> Option<&E> {
        match self {
            Outcome::Success(_) => None,
            Outcome::Failure(error) => Some(error),
        }
    }

    /// 成功 payload を取り出す（消費）
    #[inline]
    pub fn into_value(self) -> Option<V> {
        match self {
            Outcome::Success(value) => Some(value),
            Outcome::Failure(_) => None,
        }
    }

    /// 失敗 payload を取り出す（消費）
    #[inline]
    pub fn into_error(self) -> Option<E> {
        match self {
            Outcome::Success(_) => None,
            Outcome::Failure(error) => Some(error),
        }
    }

    /// `std::result::Result` へ変換
    ///
    /// `?` 演算子やパターンマッチで取り出しを強制したい場合に使用します。
    ///
    /// ## Examples
    /// ```rust
    /// use outcome::outcome::Outcome;
    ///
    /// fn run() -> Result<u32, String> {
    ///     let o: Outcome<u32, String> = Outcome::ok(7);
    ///     let v = o.into_result()?;
    ///     Ok(v)
    /// }
    /// assert_eq!(run(), Ok(7));
    /// ```
    #[inline]
    pub fn into_result(self) -> Result<V, E> {
        match self {
            Outcome::Success(value) => Ok(value),
            Outcome::Failure(error) => Err(error),
        }
    }

    // ========================================================================
    // Adapters
    // ========================================================================

    /// 成功 payload を変換
    ///
    /// 失敗状態の場合は判別子も error もそのまま維持されます。
    #[inline]
    pub fn map<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(V) -> U,
    {
        match self {
            Outcome::Success(value) => Outcome::Success(f(value)),
            Outcome::Failure(error) => Outcome::Failure(error),
        }
    }

    /// 失敗 payload を変換
    ///
    /// 上位レイヤーで失敗種別を詰め替える際に使用します。
    #[inline]
    pub fn map_err<F2, F>(self, f: F) -> Outcome<V, F2>
    where
        F: FnOnce(E) -> F2,
    {
        match self {
            Outcome::Success(value) => Outcome::Success(value),
            Outcome::Failure(error) => Outcome::Failure(f(error)),
        }
    }
}

impl<E> Outcome<(), E> {
    /// payload を持たない成功インスタンスを作成
    ///
    /// 削除・更新など、返すべき値が無い操作の成功を表します。
    #[inline]
    pub const fn ok_unit() -> Self {
        Outcome::Success(())
    }
}

impl<V, E> From<Result<V, E>> for Outcome<V, E> {
    fn from(result: Result<V, E>) -> Self {
        match result {
            Ok(value) => Outcome::Success(value),
            Err(error) => Outcome::Failure(error),
        }
    }
}

impl<V, E> From<Outcome<V, E>> for Result<V, E> {
    fn from(outcome: Outcome<V, E>) -> Self {
        outcome.into_result()
    }
}

impl<V, E> fmt::Display for Outcome<V, E>
where
    V: fmt::Display,
    E: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Success(value) => write!(f, "Success({})", value),
            Outcome::Failure(error) => write!(f, "Failure({})", error),
        }
    }
}
