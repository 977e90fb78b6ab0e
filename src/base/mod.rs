//! Base types and error handling.
//!
//! Provides the crate's error type:
//! - [`PrefError`]: errors from the cookie-jar persistence seam
//!
//! The preference operations themselves are infallible by contract:
//! absent or malformed cookies degrade to defaults instead of erroring.

pub mod preferror;

pub use preferror::PrefError;

#[cfg(test)]
mod tests;
