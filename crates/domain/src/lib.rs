//! Shared types for the literary works service: the record model,
//! the partial-update payload, configuration, and the common error type.

pub mod config;
pub mod error;
pub mod work;

pub use error::{Error, Result};
pub use work::{LiteraryWork, LiteraryWorkPatch};
