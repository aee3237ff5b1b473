//! Error handling for the Vimeo API wrapper
//!
//! This module defines the error types and propagation patterns used
//! throughout the crate.

pub mod types;

pub use types::{Error, Result};
