//! Core types for the dispatcher: context and error handling.

pub mod context;
pub mod error;

pub use context::Context;
pub use error::{Error, Result};
