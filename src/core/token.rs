//! Compact JWT parsing.
//!
//! Splits a raw token into its three dot-separated segments and
//! base64url-decodes each of them. The original segment text is kept
//! verbatim because it, not the decoded bytes, is what was signed.

use std::fmt;
use std::str::FromStr;

use base64::Engine;
use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use serde_json::Value;

use crate::error::{JwtCrackError, Segment};

/// Unpadded base64url that ignores the unused low bits of the final
/// character, as most JWT libraries do. `=` is still rejected.
const SEGMENT_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new()
        .with_encode_padding(false)
        .with_decode_padding_mode(DecodePaddingMode::RequireNone)
        .with_decode_allow_trailing_bits(true),
);

/// A parsed compact JWT.
///
/// Only constructed through [`parse`] (or `str::parse`), so every value
/// holds three non-empty segments that decoded cleanly.
///
/// Implements a custom `Debug` that redacts the payload and signature
/// to prevent accidental leakage of claim data.
#[derive(Clone, PartialEq, Eq)]
pub struct Token {
    encoded_header: String,
    encoded_payload: String,
    encoded_signature: String,
    header: Vec<u8>,
    payload: Vec<u8>,
    signature: Vec<u8>,
}

impl Token {
    /// The header segment exactly as it appeared in the input.
    pub fn encoded_header(&self) -> &str {
        &self.encoded_header
    }

    /// The payload segment exactly as it appeared in the input.
    pub fn encoded_payload(&self) -> &str {
        &self.encoded_payload
    }

    /// The signature segment exactly as it appeared in the input.
    pub fn encoded_signature(&self) -> &str {
        &self.encoded_signature
    }

    /// Decoded header bytes.
    pub fn header(&self) -> &[u8] {
        &self.header
    }

    /// Decoded payload bytes.
    pub fn payload(&self) -> &[u8] {
        &self.payload
    }

    /// Decoded signature bytes. Never interpreted as text.
    pub fn signature(&self) -> &[u8] {
        &self.signature
    }

    /// The bytes covered by the signature: `encoded_header "." encoded_payload`.
    pub fn signing_input(&self) -> String {
        let mut input =
            String::with_capacity(self.encoded_header.len() + self.encoded_payload.len() + 1);
        input.push_str(&self.encoded_header);
        input.push('.');
        input.push_str(&self.encoded_payload);
        input
    }

    /// The header parsed as JSON, if it is JSON.
    pub fn header_json(&self) -> Option<Value> {
        serde_json::from_slice(&self.header).ok()
    }

    /// The payload parsed as JSON, if it is JSON.
    pub fn payload_json(&self) -> Option<Value> {
        serde_json::from_slice(&self.payload).ok()
    }

    /// The `alg` declared by the header. Informational only; nothing
    /// in this crate enforces it.
    pub fn algorithm(&self) -> Option<String> {
        self.header_json()?
            .get("alg")?
            .as_str()
            .map(str::to_string)
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Token")
            .field("encoded_header", &self.encoded_header)
            .field("payload", &"[REDACTED]")
            .field("signature", &"[REDACTED]")
            .finish()
    }
}

impl FromStr for Token {
    type Err = JwtCrackError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        parse(raw)
    }
}

/// Parse a raw compact JWT.
///
/// # Errors
///
/// Returns [`JwtCrackError::InvalidTokenFormat`] unless the input splits
/// into exactly three non-empty parts on `.`, and
/// [`JwtCrackError::Base64DecodeError`] naming the first segment (header,
/// then payload, then signature) that is not unpadded base64url.
///
/// An empty segment (`a..c`, `a.b.`) is a format error, not a decoding
/// error, even though the input has exactly two dots.
pub fn parse(raw: &str) -> Result<Token, JwtCrackError> {
    let parts: Vec<&str> = raw.split('.').collect();
    let [header, payload, signature] = parts.as_slice() else {
        return Err(JwtCrackError::InvalidTokenFormat);
    };
    if parts.iter().any(|part| part.is_empty()) {
        return Err(JwtCrackError::InvalidTokenFormat);
    }

    Ok(Token {
        header: decode_segment(header, Segment::Header)?,
        payload: decode_segment(payload, Segment::Payload)?,
        signature: decode_segment(signature, Segment::Signature)?,
        encoded_header: header.to_string(),
        encoded_payload: payload.to_string(),
        encoded_signature: signature.to_string(),
    })
}

fn decode_segment(encoded: &str, segment: Segment) -> Result<Vec<u8>, JwtCrackError> {
    SEGMENT_ENGINE
        .decode(encoded)
        .map_err(|_| JwtCrackError::Base64DecodeError { segment })
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = r#"{"alg":"HS256","typ":"JWT"}"#;
    const PAYLOAD: &str = r#"{"sub":"1234567890","name":"John Doe","iat":1516239022}"#;
    const ENCODED_HEADER: &str = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9";
    const ENCODED_PAYLOAD: &str =
        "eyJzdWIiOiIxMjM0NTY3ODkwIiwibmFtZSI6IkpvaG4gRG9lIiwiaWF0IjoxNTE2MjM5MDIyfQ";
    const ENCODED_SIGNATURE: &str = "SflKxwRJSMeKKF2QT4fwpMeJf36POk6yJV_adQssw5c";

    fn build(header: &str, payload: &str, signature: &str) -> String {
        format!("{header}.{payload}.{signature}")
    }

    fn valid_token() -> String {
        build(ENCODED_HEADER, ENCODED_PAYLOAD, ENCODED_SIGNATURE)
    }

    #[test]
    fn test_parse_keeps_encoded_segments_verbatim() {
        let token = parse(&valid_token()).unwrap();
        assert_eq!(token.encoded_header(), ENCODED_HEADER);
        assert_eq!(token.encoded_payload(), ENCODED_PAYLOAD);
        assert_eq!(token.encoded_signature(), ENCODED_SIGNATURE);
    }

    #[test]
    fn test_parse_decodes_header_and_payload() {
        let token = parse(&valid_token()).unwrap();
        assert_eq!(token.header(), HEADER.as_bytes());
        assert_eq!(token.payload(), PAYLOAD.as_bytes());
    }

    #[test]
    fn test_parse_decodes_signature_as_raw_bytes() {
        let token = parse(&valid_token()).unwrap();
        assert_eq!(token.signature().len(), 32);
        assert_eq!(&token.signature()[..4], &[0x49, 0xf9, 0x4a, 0xc7]);
    }

    #[test]
    fn test_signing_input_uses_original_text() {
        let token = parse(&valid_token()).unwrap();
        assert_eq!(
            token.signing_input(),
            format!("{ENCODED_HEADER}.{ENCODED_PAYLOAD}")
        );
    }

    #[test]
    fn test_from_str_matches_parse() {
        let token: Token = valid_token().parse().unwrap();
        assert_eq!(token, parse(&valid_token()).unwrap());
    }

    #[test]
    fn test_parse_incomplete_token_fails() {
        let err = parse("incomplete.token").unwrap_err();
        assert!(matches!(err, JwtCrackError::InvalidTokenFormat));
    }

    #[test]
    fn test_parse_wrong_segment_counts_fail() {
        for raw in ["", "one", "a.b", "a.b.c.d", "...."] {
            let err = parse(raw).unwrap_err();
            assert!(
                matches!(err, JwtCrackError::InvalidTokenFormat),
                "expected format error for {raw:?}"
            );
        }
    }

    #[test]
    fn test_parse_empty_segment_fails() {
        let raw = build(ENCODED_HEADER, ENCODED_PAYLOAD, "");
        let err = parse(&raw).unwrap_err();
        assert!(matches!(err, JwtCrackError::InvalidTokenFormat));
    }

    #[test]
    fn test_parse_invalid_header_names_header() {
        let raw = format!("Ø{}", valid_token());
        let err = parse(&raw).unwrap_err();
        assert!(matches!(
            err,
            JwtCrackError::Base64DecodeError {
                segment: Segment::Header
            }
        ));
    }

    #[test]
    fn test_parse_invalid_payload_names_payload() {
        let raw = build(ENCODED_HEADER, &format!("Ø{ENCODED_PAYLOAD}"), ENCODED_SIGNATURE);
        let err = parse(&raw).unwrap_err();
        assert!(matches!(
            err,
            JwtCrackError::Base64DecodeError {
                segment: Segment::Payload
            }
        ));
    }

    #[test]
    fn test_parse_invalid_signature_names_signature() {
        let raw = build(ENCODED_HEADER, ENCODED_PAYLOAD, &format!("Ø{ENCODED_SIGNATURE}"));
        let err = parse(&raw).unwrap_err();
        assert!(matches!(
            err,
            JwtCrackError::Base64DecodeError {
                segment: Segment::Signature
            }
        ));
    }

    #[test]
    fn test_parse_reports_first_failing_segment() {
        let err = parse("!!!.!!!.!!!").unwrap_err();
        assert!(matches!(
            err,
            JwtCrackError::Base64DecodeError {
                segment: Segment::Header
            }
        ));

        let err = parse(&build(ENCODED_HEADER, "!!!", "!!!")).unwrap_err();
        assert!(matches!(
            err,
            JwtCrackError::Base64DecodeError {
                segment: Segment::Payload
            }
        ));
    }

    #[test]
    fn test_parse_rejects_padding() {
        // "e30" is {} unpadded; "e30=" carries a padding character.
        let raw = build(ENCODED_HEADER, "e30=", ENCODED_SIGNATURE);
        let err = parse(&raw).unwrap_err();
        assert!(matches!(
            err,
            JwtCrackError::Base64DecodeError {
                segment: Segment::Payload
            }
        ));
    }

    #[test]
    fn test_parse_rejects_standard_alphabet() {
        let raw = build(ENCODED_HEADER, ENCODED_PAYLOAD, "ab+/");
        let err = parse(&raw).unwrap_err();
        assert!(matches!(
            err,
            JwtCrackError::Base64DecodeError {
                segment: Segment::Signature
            }
        ));
    }

    #[test]
    fn test_parse_ignores_unused_trailing_bits() {
        // The last character of a 32-byte signature carries two unused
        // bits; "c" and "d" differ only in those.
        let canonical = parse(&valid_token()).unwrap();
        let variant = build(
            ENCODED_HEADER,
            ENCODED_PAYLOAD,
            "SflKxwRJSMeKKF2QT4fwpMeJf36POk6yJV_adQssw5d",
        );
        let token = parse(&variant).unwrap();

        assert_eq!(token.signature(), canonical.signature());
        assert_eq!(
            token.encoded_signature(),
            "SflKxwRJSMeKKF2QT4fwpMeJf36POk6yJV_adQssw5d"
        );
        assert!(crate::core::verifier::verify(&token, "your-256-bit-secret"));
    }

    #[test]
    fn test_empty_segment_with_two_dots_is_format_error() {
        let err = parse("e30.e30.").unwrap_err();
        assert!(matches!(err, JwtCrackError::InvalidTokenFormat));
    }

    #[test]
    fn test_parse_accepts_non_json_segments() {
        // base64url("not json") = "bm90IGpzb24"
        let token = parse("bm90IGpzb24.bm90IGpzb24.AAAA").unwrap();
        assert_eq!(token.header(), b"not json");
        assert!(token.header_json().is_none());
        assert!(token.algorithm().is_none());
    }

    #[test]
    fn test_json_accessors() {
        let token = parse(&valid_token()).unwrap();
        assert_eq!(token.algorithm().as_deref(), Some("HS256"));
        let payload = token.payload_json().unwrap();
        assert_eq!(payload["name"], "John Doe");
        assert_eq!(payload["iat"], 1516239022);
    }

    #[test]
    fn test_token_debug_redacts_sensitive_fields() {
        let token = parse(&valid_token()).unwrap();
        let debug_output = format!("{token:?}");

        assert!(debug_output.contains(ENCODED_HEADER));
        assert!(debug_output.contains("[REDACTED]"));
        assert!(!debug_output.contains(ENCODED_PAYLOAD));
        assert!(!debug_output.contains(ENCODED_SIGNATURE));
        assert!(!debug_output.contains("John Doe"));
    }
}
