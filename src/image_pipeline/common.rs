//! Common utilities module
//!
//! Shared error type used by both the band-stacking and the hex-decoding pipelines.

pub mod error;

pub use error::{ConversionError, Result, Shape};
