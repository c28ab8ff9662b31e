//! Shared utilities.
//!
//! - [`digest`]: SHA-256 password hashing and demo-token derivation
//! - [`errors`]: application error type and store-error mapping

pub mod digest;
pub mod errors;
