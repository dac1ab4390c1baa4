//! Shared test fixtures and helper utilities.
//!
//! Provides pre-built JWT tokens with known secrets for use in
//! integration tests.
#![allow(dead_code)]

use std::io::Write;

use tempfile::NamedTempFile;

/// The jwt.io sample token.
///
/// Header: `{"alg":"HS256","typ":"JWT"}`
/// Payload: `{"sub":"1234567890","name":"John Doe","iat":1516239022}`
/// Secret: `"your-256-bit-secret"`
pub const VALID_HS256_TOKEN: &str = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9.\
     eyJzdWIiOiIxMjM0NTY3ODkwIiwibmFtZSI6IkpvaG4gRG9lIiwiaWF0IjoxNTE2MjM5MDIyfQ.\
     SflKxwRJSMeKKF2QT4fwpMeJf36POk6yJV_adQssw5c";

/// The secret that signed [`VALID_HS256_TOKEN`].
pub const VALID_HS256_SECRET: &str = "your-256-bit-secret";

/// A malformed token with only two parts (missing signature).
pub const MALFORMED_TOKEN_TWO_PARTS: &str = "eyJhbGciOiJIUzI1NiJ9.eyJzdWIiOiIxMjM0NTY3ODkwIn0";

/// A completely invalid token string.
pub const INVALID_TOKEN: &str = "not-a-valid-jwt";

/// A weak secret used to mint fresh tokens in tests.
pub const WEAK_SECRET: &str = "summer2024";

/// Create an HS256-signed token with the given claims using `jsonwebtoken`.
pub fn create_hs256_token(secret: &[u8], claims: &serde_json::Value) -> String {
    use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};
    let header = Header::new(Algorithm::HS256);
    let key = EncodingKey::from_secret(secret);
    encode(&header, claims, &key).unwrap()
}

/// Standard test claims.
pub fn standard_claims() -> serde_json::Value {
    serde_json::json!({
        "sub": "1234567890",
        "name": "Test User",
        "iat": 1516239022
    })
}

/// Write `lines` to a temporary word list, one per line.
pub fn wordlist(lines: &[&[u8]]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    for line in lines {
        file.write_all(line).unwrap();
        file.write_all(b"\n").unwrap();
    }
    file.flush().unwrap();
    file
}
