//! Error types for sqlbuild

use thiserror::Error;

use crate::statement::Action;

/// Result type alias for sqlbuild operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while accumulating or rendering a statement.
///
/// Builder mutators keep their fluent `&mut Self` signature, so the first
/// error they hit is latched and handed back by the render call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The predicate text and the supplied values disagree on arity
    #[error(
        "placeholder arity mismatch in `{condition}`: {placeholders} placeholder(s), {values} value(s)"
    )]
    PlaceholderArityMismatch {
        condition: String,
        placeholders: usize,
        values: usize,
    },

    /// Render was called before `select`, `insert`, `update` or `delete`
    #[error("no statement action selected")]
    NoActionSelected,

    /// A second action setter was called within the same build cycle
    #[error("statement action already selected as {current}, cannot switch to {requested}")]
    ActionAlreadySelected { current: Action, requested: Action },

    /// A value cannot be rendered as SQL literal text
    #[error("type mismatch: expected {expected}, found {found}")]
    TypeMismatch {
        expected: &'static str,
        found: String,
    },

    /// INSERT or UPDATE without any column values
    #[error("{action} statement has no column values")]
    MissingValues { action: Action },

    /// Formatting into the output buffer failed
    #[error(transparent)]
    Format(#[from] std::fmt::Error),
}

impl Error {
    pub fn type_mismatch(expected: &'static str, found: impl Into<String>) -> Self {
        Self::TypeMismatch {
            expected,
            found: found.into(),
        }
    }

    pub fn is_arity_mismatch(&self) -> bool {
        matches!(self, Self::PlaceholderArityMismatch { .. })
    }
}
