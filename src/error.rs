//! Domain error types for jwt-crack.
//!
//! All business-logic errors are defined here using `thiserror`.
//! These errors are converted to user-friendly messages at the CLI boundary.

use std::fmt;

use thiserror::Error;

/// One of the three dot-separated parts of a compact JWT.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment {
    /// The first segment (JOSE header).
    Header,
    /// The second segment (claims).
    Payload,
    /// The third segment (MAC bytes).
    Signature,
}

impl Segment {
    /// Lowercase name used in error messages.
    pub fn as_str(self) -> &'static str {
        match self {
            Segment::Header => "header",
            Segment::Payload => "payload",
            Segment::Signature => "signature",
        }
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors that can occur while parsing tokens or supplying candidates.
#[derive(Debug, Error)]
pub enum JwtCrackError {
    /// The provided token does not have the expected three-part structure.
    #[error("invalid token format: expected 'header.payload.signature' structure")]
    InvalidTokenFormat,

    /// Failed to decode a base64url-encoded token segment.
    #[error("failed to decode {segment}: invalid base64url encoding")]
    Base64DecodeError {
        /// The first segment, in header/payload/signature order, that failed.
        segment: Segment,
    },

    /// The word list could not be opened or read.
    #[error("failed to read wordlist '{path}': {reason}")]
    WordlistError {
        /// Path to the word list.
        path: String,
        /// Description of the I/O failure.
        reason: String,
    },

    /// No token was provided via any input method.
    #[error("no token provided: pass a token as an argument, via --token-env, or through stdin")]
    NoTokenProvided,

    /// No secret was provided for a single guess.
    #[error("no secret provided: pass --secret or --secret-env")]
    NoSecretProvided,

    /// The specified environment variable is not set.
    #[error("environment variable '{name}' is not set")]
    EnvVarNotFound {
        /// Name of the missing environment variable.
        name: String,
    },

    /// The environment variable name cannot be looked up.
    #[error("invalid environment variable name '{name}'")]
    InvalidEnvVarName {
        /// The rejected name.
        name: String,
    },
}
