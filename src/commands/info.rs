//! Handler for the `info` subcommand.
//!
//! Decodes and prints a JWT's header and payload without checking its
//! signature. Supports reading the token from a CLI argument,
//! environment variable, or stdin.

use std::io::{self, IsTerminal};

use anyhow::Result;
use serde_json::{Value, json};
use tracing::warn;

use jwt_crack::Token;

use super::input::resolve_token;
use crate::cli::InfoArgs;
use crate::display::json_printer::render_segment;

/// Execute the `info` subcommand with the given arguments.
pub fn execute(args: &InfoArgs) -> Result<()> {
    let raw = resolve_token(&args.token)?;
    let token = jwt_crack::parse(&raw)?;
    warn_on_foreign_algorithm(&token);

    if args.json {
        let report = json!({
            "header": segment_value(token.header()),
            "payload": segment_value(token.payload()),
            "signature_len": token.signature().len(),
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    let use_color = io::stdout().is_terminal();
    println!("--- Header ---");
    println!("{}", render_segment(token.header(), use_color));
    println!("--- Payload ---");
    println!("{}", render_segment(token.payload(), use_color));
    println!("--- Signature ---");
    println!("{} bytes", token.signature().len());
    Ok(())
}

/// JSON segments are embedded as-is, anything else as a string.
fn segment_value(bytes: &[u8]) -> Value {
    serde_json::from_slice(bytes)
        .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(bytes).into_owned()))
}

pub(crate) fn warn_on_foreign_algorithm(token: &Token) {
    match token.algorithm() {
        Some(alg) if alg == "HS256" => {}
        Some(alg) => warn!(%alg, "token header does not declare HS256; checking as HS256 anyway"),
        None => warn!("token header declares no algorithm; checking as HS256 anyway"),
    }
}
