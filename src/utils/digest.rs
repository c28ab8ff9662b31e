//! SHA-256 digest helpers.
//!
//! The same digest backs both password verification and demo-token
//! derivation. This is intentionally not a real credential scheme: the
//! token is the first 32 hex characters of `sha256(email)`, carries no
//! session or expiry, and authorizes nothing.

use sha2::{Digest, Sha256};

/// Demo tokens are the leading half of the 64-character hex digest.
pub const DEMO_TOKEN_LEN: usize = 32;

pub fn sha256_hex(input: &str) -> String {
    hex::encode(Sha256::digest(input.as_bytes()))
}

pub fn hash_password(password: &str) -> String {
    sha256_hex(password)
}

pub fn verify_password(password: &str, stored_hash: &str) -> bool {
    sha256_hex(password) == stored_hash
}

pub fn demo_token(email: &str) -> String {
    let mut digest = sha256_hex(email);
    digest.truncate(DEMO_TOKEN_LEN);
    digest
}
