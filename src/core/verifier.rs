//! HS256 signature verification.
//!
//! Recomputes HMAC-SHA256 over a token's original signing input with a
//! candidate secret and compares it to the token's decoded signature.
//! The header's declared `alg` is not consulted.

use hmac::digest::InvalidLength;
use hmac::{Hmac, Mac};
use sha2::Sha256;

use super::token::Token;

type HmacSha256 = Hmac<Sha256>;

/// Length in bytes of an HMAC-SHA256 tag.
pub const HS256_SIGNATURE_LEN: usize = 32;

/// A verifier bound to one token.
///
/// Builds the signing input once so repeated checks only pay for the MAC.
#[derive(Debug, Clone)]
pub struct HmacVerifier {
    signing_input: Vec<u8>,
    signature: Vec<u8>,
}

impl HmacVerifier {
    /// Bind a verifier to `token`.
    pub fn new(token: &Token) -> Self {
        Self {
            signing_input: token.signing_input().into_bytes(),
            signature: token.signature().to_vec(),
        }
    }

    /// Whether `secret` is the HMAC-SHA256 key that produced the token's
    /// signature.
    ///
    /// The secret is used as raw key bytes. A signature of the wrong
    /// length never matches. Comparison is constant-time.
    pub fn matches(&self, secret: &[u8]) -> bool {
        if self.signature.len() != HS256_SIGNATURE_LEN {
            return false;
        }
        let Ok(mut mac) = keyed_mac(secret) else {
            return false;
        };
        mac.update(&self.signing_input);
        mac.verify_slice(&self.signature).is_ok()
    }
}

/// Check whether `secret` signed `token`.
pub fn verify(token: &Token, secret: impl AsRef<[u8]>) -> bool {
    HmacVerifier::new(token).matches(secret.as_ref())
}

/// Compute the raw HS256 signature of `signing_input` under `secret`.
///
/// # Errors
///
/// Propagates the key-length error from `hmac`, which HMAC-SHA256 never
/// raises in practice.
pub fn sign(signing_input: &[u8], secret: &[u8]) -> Result<Vec<u8>, InvalidLength> {
    let mut mac = keyed_mac(secret)?;
    mac.update(signing_input);
    Ok(mac.finalize().into_bytes().to_vec())
}

fn keyed_mac(secret: &[u8]) -> Result<HmacSha256, InvalidLength> {
    HmacSha256::new_from_slice(secret)
}
