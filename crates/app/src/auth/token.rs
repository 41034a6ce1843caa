//! Opaque API token generation and hashing.
//!
//! Tokens are random secrets shown once at issuance; only the SHA-256 hash
//! is persisted, so a leaked database never yields usable credentials.

use std::fmt::Write as _;

use rand::{RngCore, rngs::OsRng};
use sha2::{Digest, Sha256};

/// API token identifier prefix.
pub const API_TOKEN_PREFIX: &str = "at";

/// Number of random secret bytes encoded in a token.
pub const API_TOKEN_SECRET_BYTES: usize = 32;

#[must_use]
pub fn generate_api_token() -> String {
    let mut secret = [0_u8; API_TOKEN_SECRET_BYTES];

    OsRng.fill_bytes(&mut secret);

    format!("{API_TOKEN_PREFIX}_{}", encode_hex(&secret))
}

#[must_use]
pub fn hash_api_token(token: &str) -> String {
    format!("{:x}", Sha256::digest(token.as_bytes()))
}

fn encode_hex(bytes: &[u8]) -> String {
    let mut encoded = String::with_capacity(bytes.len() * 2);

    for byte in bytes {
        // Writing to a String cannot fail.
        let _ = write!(encoded, "{byte:02x}");
    }

    encoded
}
