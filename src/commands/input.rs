//! Token and secret resolution for the CLI.
//!
//! A token may come from the positional argument, an environment
//! variable, or stdin, in that order of precedence. A guess secret may
//! come from `--secret` or `--secret-env`.

use std::io::{self, IsTerminal, Read};

use zeroize::Zeroizing;

use jwt_crack::JwtCrackError;

use crate::cli::{GuessArgs, TokenArgs};

/// Resolve the raw token text from the first source that provides one.
pub fn resolve_token(args: &TokenArgs) -> Result<Zeroizing<String>, JwtCrackError> {
    if let Some(token) = &args.token {
        let trimmed = token.trim();
        if trimmed.is_empty() {
            return Err(JwtCrackError::NoTokenProvided);
        }
        return Ok(Zeroizing::new(trimmed.to_string()));
    }

    if let Some(name) = &args.token_env {
        let value = read_env(name)?;
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(JwtCrackError::NoTokenProvided);
        }
        return Ok(Zeroizing::new(trimmed.to_string()));
    }

    read_stdin_token()
}

/// Resolve the single secret for the `guess` subcommand.
///
/// The secret is used exactly as given; surrounding whitespace is part
/// of the key.
pub fn resolve_secret(args: &GuessArgs) -> Result<Zeroizing<String>, JwtCrackError> {
    if let Some(secret) = &args.secret {
        return Ok(secret.clone());
    }
    if let Some(name) = &args.secret_env {
        return read_env(name);
    }
    Err(JwtCrackError::NoSecretProvided)
}

fn read_stdin_token() -> Result<Zeroizing<String>, JwtCrackError> {
    let mut stdin = io::stdin();
    if stdin.is_terminal() {
        return Err(JwtCrackError::NoTokenProvided);
    }

    let mut buffer = Zeroizing::new(String::new());
    // An unreadable stdin is treated the same as an empty one.
    if stdin.read_to_string(&mut buffer).is_err() {
        return Err(JwtCrackError::NoTokenProvided);
    }

    let trimmed = buffer.trim();
    if trimmed.is_empty() {
        return Err(JwtCrackError::NoTokenProvided);
    }
    Ok(Zeroizing::new(trimmed.to_string()))
}

fn read_env(name: &str) -> Result<Zeroizing<String>, JwtCrackError> {
    validate_env_var_name(name)?;
    std::env::var(name)
        .map(Zeroizing::new)
        .map_err(|_| JwtCrackError::EnvVarNotFound {
            name: name.to_string(),
        })
}

/// Reject names that `std::env::var` would panic on or can never match.
fn validate_env_var_name(name: &str) -> Result<(), JwtCrackError> {
    if name.is_empty() || name.contains('=') || name.contains('\0') {
        return Err(JwtCrackError::InvalidEnvVarName {
            name: name.to_string(),
        });
    }
    Ok(())
}
