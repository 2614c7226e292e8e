//! # argtype common
//!
//! Shared building blocks for the argument type checkers:
//!
//! * **[`value`]**: the untyped [`Value`] every checker receives.
//! * **[`error`]**: the single [`ValidationError`] every coercer returns.
//! * **[`network`]**: address parsing and live interface / gateway queries.
//! * **[`utils`]**: list-string splitting.

pub mod config;
pub mod error;
pub mod network;
pub mod utils;
pub mod value;

pub use error::ValidationError;
pub use value::{Callable, Value};
