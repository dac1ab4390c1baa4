//! Core logic for auditing HS256 signing secrets.
//!
//! This module contains the domain logic separated from CLI concerns.
//! All types and functions here are testable without the CLI layer.

pub mod search;
pub mod token;
pub mod verifier;

pub use search::{CancelFlag, SearchOutcome, SecretSearch, check_one, scan};
pub use token::{Token, parse};
pub use verifier::{HmacVerifier, sign, verify};
