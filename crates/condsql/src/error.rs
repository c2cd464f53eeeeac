//! Error types for condsql

use thiserror::Error;

/// Result type alias for condsql operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced while building, rendering, converting or binding SQL.
///
/// Every operation either returns complete SQL text or one of these errors;
/// partial output is never handed back.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A condition node has an invalid shape (empty IN list, argument/marker mismatch, ...)
    #[error("Malformed condition: {0}")]
    ConditionMalformed(String),

    /// A quoted literal was still open at the end of the input.
    #[error("Malformed SQL: unterminated quoted literal starting at byte {offset}")]
    MalformedSql { offset: usize },

    /// The number of placeholders does not match the number of arguments.
    #[error("Need more sql arguments: {placeholders} placeholder(s) but {args} argument(s)")]
    NeedMoreArguments { placeholders: usize, args: usize },

    /// The value handed to a rendering entry point has nothing to render.
    #[error("Not supported SQL type")]
    NotSupportType,

    /// Unknown dialect name
    #[error("Unsupported dialect: {0}")]
    UnsupportedDialect(String),

    /// A statement needs a table and none was given.
    #[error("No table indicated for {0} statement")]
    MissingTable(&'static str),

    /// INSERT/UPDATE without any column assignment.
    #[error("No column to {0}")]
    NoColumns(&'static str),
}

impl Error {
    /// Create a malformed condition error
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::ConditionMalformed(message.into())
    }

    /// Check if this is a placeholder/argument count mismatch
    pub fn is_need_more_arguments(&self) -> bool {
        matches!(self, Self::NeedMoreArguments { .. })
    }

    /// Check if this is a malformed condition error
    pub fn is_condition_malformed(&self) -> bool {
        matches!(self, Self::ConditionMalformed(_))
    }

    /// Check if this is an unterminated literal error
    pub fn is_malformed_sql(&self) -> bool {
        matches!(self, Self::MalformedSql { .. })
    }
}
