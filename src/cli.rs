//! CLI argument definitions for jwt-crack.
//!
//! Uses `clap` derive macros to define the command-line interface.
//! Each subcommand has its own argument struct for type-safe parsing.
//!
//! # Security
//!
//! `TokenArgs` and `GuessArgs` implement custom `Debug` to redact
//! sensitive fields (tokens and secrets) and prevent accidental leakage
//! through debug formatting, error chains, or logging.

use std::fmt;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use zeroize::Zeroizing;

/// An offline auditor that checks HS256 JSON Web Tokens (JWTs) for
/// weak signing secrets.
#[derive(Debug, Parser)]
#[command(name = "jwt-crack")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Log search progress and report every rejected candidate.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// The subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Decode and print a JWT's header and payload without checking it.
    Info(InfoArgs),

    /// Check whether a single secret signed the JWT.
    Guess(GuessArgs),

    /// Try every line of a word list as the JWT's signing secret.
    Wordlist(WordlistArgs),
}

/// Where to read the token from. Shared by every subcommand.
#[derive(clap::Args)]
pub struct TokenArgs {
    /// The JWT to inspect. If omitted, reads from stdin.
    pub token: Option<String>,

    /// Read the token from the specified environment variable.
    #[arg(long, value_name = "VAR_NAME")]
    pub token_env: Option<String>,
}

/// Custom `Debug` that redacts the token field to prevent accidental leakage.
impl fmt::Debug for TokenArgs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenArgs")
            .field("token", &self.token.as_ref().map(|_| "[REDACTED]"))
            .field("token_env", &self.token_env)
            .finish()
    }
}

/// Arguments for the `info` subcommand.
#[derive(Debug, clap::Args)]
pub struct InfoArgs {
    #[command(flatten)]
    pub token: TokenArgs,

    /// Output raw JSON without colors (machine-readable).
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `guess` subcommand.
#[derive(clap::Args)]
pub struct GuessArgs {
    #[command(flatten)]
    pub token: TokenArgs,

    /// The candidate HMAC secret.
    ///
    /// WARNING: Passing secrets via CLI arguments may expose them in shell
    /// history. Prefer using --secret-env instead.
    #[arg(
        short = 'k',
        long,
        value_name = "SECRET",
        value_parser = parse_zeroizing_string,
        conflicts_with = "secret_env"
    )]
    pub secret: Option<Zeroizing<String>>,

    /// Read the candidate secret from the specified environment variable.
    #[arg(long, value_name = "VAR_NAME")]
    pub secret_env: Option<String>,
}

/// Custom `Debug` that redacts the secret to prevent accidental leakage.
impl fmt::Debug for GuessArgs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GuessArgs")
            .field("token", &self.token)
            .field("secret", &self.secret.as_ref().map(|_| "[REDACTED]"))
            .field("secret_env", &self.secret_env)
            .finish()
    }
}

/// Arguments for the `wordlist` subcommand.
#[derive(Debug, clap::Args)]
pub struct WordlistArgs {
    #[command(flatten)]
    pub token: TokenArgs,

    /// File with one candidate secret per line.
    #[arg(short, long, value_name = "FILE")]
    pub wordlist: PathBuf,

    /// Give up after this many seconds.
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,
}

/// Parse a string into a `Zeroizing<String>` for secure CLI arguments.
fn parse_zeroizing_string(s: &str) -> Result<Zeroizing<String>, std::convert::Infallible> {
    Ok(Zeroizing::new(s.to_string()))
}
