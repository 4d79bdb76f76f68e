//! Error types for task and task list operations.

use thiserror::Error;

/// Errors raised by [`Task`](crate::models::Task) and
/// [`TaskList`](crate::models::TaskList) operations.
///
/// Failing operations never apply partial changes: the task or list is left
/// exactly as it was before the call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TaskListError {
    /// A field was given a value of the wrong kind.
    #[error("Invalid {field}: {message}")]
    Validation {
        field: &'static str,
        message: &'static str,
    },

    /// An argument was not of the type the operation requires.
    #[error("Type mismatch: {expected}, got {found}")]
    TypeMismatch {
        expected: &'static str,
        found: String,
    },

    /// An index fell outside `[0, len)`.
    #[error("Index out of range: {index} (length {len})")]
    OutOfRange { index: i128, len: usize },
}

impl TaskListError {
    pub fn done_not_boolean() -> Self {
        Self::Validation {
            field: "done",
            message: "accepts boolean only",
        }
    }

    pub fn not_a_task(found: impl Into<String>) -> Self {
        Self::TypeMismatch {
            expected: "requires a Task",
            found: found.into(),
        }
    }

    pub fn not_an_index(found: impl Into<String>) -> Self {
        Self::TypeMismatch {
            expected: "requires an integer index",
            found: found.into(),
        }
    }

    pub fn out_of_range(index: i128, len: usize) -> Self {
        Self::OutOfRange { index, len }
    }

    pub fn is_out_of_range(&self) -> bool {
        matches!(self, Self::OutOfRange { .. })
    }

    pub fn is_type_mismatch(&self) -> bool {
        matches!(self, Self::TypeMismatch { .. })
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }
}

pub type Result<T, E = TaskListError> = std::result::Result<T, E>;
