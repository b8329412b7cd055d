//! Core types for gngen
//!
//! Currently this is the error layer shared by every other module:
//! - [`GnGenError`] - typed failure modes for input, configuration and output
//! - [`ErrorContext`] - a user-facing wrapper with a suggestion and details
//! - [`user_friendly_error`] - maps any [`anyhow::Error`] to an [`ErrorContext`]
//! - [`IntoAnyhowWithContext`] - attaches an [`ErrorContext`] while propagating

pub mod error;

pub use error::{ErrorContext, GnGenError, IntoAnyhowWithContext, user_friendly_error};
