//! Handler for the `guess` subcommand.
//!
//! Checks a single candidate secret against the token's HS256 signature.

use anyhow::Result;

use jwt_crack::SecretSearch;

use super::info::warn_on_foreign_algorithm;
use super::input::{resolve_secret, resolve_token};
use crate::cli::GuessArgs;

/// Execute the `guess` subcommand. Returns whether the secret matched.
pub fn execute(args: &GuessArgs) -> Result<bool> {
    let raw = resolve_token(&args.token)?;
    let token = jwt_crack::parse(&raw)?;
    warn_on_foreign_algorithm(&token);
    let secret = resolve_secret(args)?;

    if SecretSearch::new(&token).check_one(secret.as_bytes()) {
        println!("correct secret: {}", secret.as_str());
        Ok(true)
    } else {
        eprintln!("incorrect guess: {}", secret.as_str());
        Ok(false)
    }
}
