//! # Error Types
//!
//! Parse failures for the user-facing vocabulary (status filter names,
//! contact form field names). Network failures live in [`crate::api`].

use thiserror::Error;

/// Errors raised while interpreting user input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// The value is not one of `all`, `active`, `inactive`.
    #[error("unknown status filter {0:?}; expected one of: all, active, inactive")]
    UnknownStatusFilter(String),

    /// The value is not one of `name`, `email`, `message`.
    #[error("unknown contact field {0:?}; expected one of: name, email, message")]
    UnknownContactField(String),
}
