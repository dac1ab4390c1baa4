//! jwt-crack: an offline auditor for weak HS256 JWT signing secrets.
//!
//! Parses compact JWTs, checks candidate secrets against their
//! HMAC-SHA256 signatures, and scans word lists for the secret that
//! signed a token. The `jwt-crack` binary is a thin CLI over this crate.

#![forbid(unsafe_code)]

pub mod core;
pub mod error;
pub mod wordlist;

pub use crate::core::{CancelFlag, SearchOutcome, SecretSearch, Token, parse};
pub use error::{JwtCrackError, Segment};
pub use wordlist::WordlistReader;
