//! Claim-set token formatting and structural validation.

use base64::{
    Engine as _, alphabet,
    engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig, general_purpose::STANDARD},
};
use uuid::Uuid;

use crate::auth::{ClaimValidationError, TokenInfo};

/// Header name clients use to present a claim-set token.
pub const CLAIM_SET_HEADER: &str = "iam-claimsetjwt";

/// Fixed header segment of every generated token.
pub const TOKEN_HEADER_JSON: &str = r#"{"typ":"JWT","alg":"HS256"}"#;

/// Subject claim of every generated token.
pub const TOKEN_SUBJECT: &str = "karate-test";

/// Seconds between `iat` and `exp`.
pub const TOKEN_LIFETIME_SECONDS: i64 = 3_600;

const BEARER_PREFIX: &str = "Bearer ";

const HEADER_TYPE_MARKER: &str = r#""typ":"JWT""#;
const HEADER_ALGORITHM_MARKER: &str = r#""alg":"#;
const REQUIRED_CLAIMS: [&str; 3] = [r#""sub""#, r#""iat""#, r#""exp""#];
const EXPIRY_MARKER: &str = r#""exp":"#;

/// Standard alphabet, padding optional, trailing bits tolerated.
const LENIENT: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_decode_padding_mode(DecodePaddingMode::Indifferent)
        .with_decode_allow_trailing_bits(true),
);

/// Build a token issued at `issued_at` (unix seconds).
///
/// The signature segment is the encoded textual form of `signature_seed`.
#[must_use]
pub fn format_token(issued_at: i64, signature_seed: Uuid) -> String {
    let payload = format!(
        r#"{{"sub":"{TOKEN_SUBJECT}","iat":{issued_at},"exp":{}}}"#,
        issued_at.saturating_add(TOKEN_LIFETIME_SECONDS)
    );

    [
        STANDARD.encode(TOKEN_HEADER_JSON),
        STANDARD.encode(payload),
        STANDARD.encode(signature_seed.to_string()),
    ]
    .join(".")
}

/// Whether an `Authorization` header value uses the bearer scheme.
///
/// Only the prefix is checked; the credential itself is never inspected.
#[must_use]
pub fn is_bearer(authorization: Option<&str>) -> bool {
    authorization.is_some_and(|value| value.starts_with(BEARER_PREFIX))
}

/// Validate a claim-set token as of `now` (unix seconds).
///
/// Checks run in order and stop at the first failure: presence, segment
/// count, header markers, required claim names, then expiry. An `exp` claim
/// that cannot be read as an integer does not fail validation.
///
/// # Errors
///
/// Returns the first failed check, or [`ClaimValidationError::Decode`] when a
/// segment is not valid base64.
pub fn validate_claims(token: Option<&str>, now: i64) -> Result<TokenInfo, ClaimValidationError> {
    let token = token
        .filter(|token| !token.trim().is_empty())
        .ok_or(ClaimValidationError::Missing)?;

    let segments = split_segments(token);

    let [header, payload, signature] = segments.as_slice() else {
        return Err(ClaimValidationError::InvalidStructure);
    };

    let header = decode_segment(header)?;

    if !header.contains(HEADER_TYPE_MARKER) || !header.contains(HEADER_ALGORITHM_MARKER) {
        return Err(ClaimValidationError::InvalidHeader);
    }

    let payload = decode_segment(payload)?;

    if !REQUIRED_CLAIMS.iter().all(|claim| payload.contains(claim)) {
        return Err(ClaimValidationError::InvalidPayload);
    }

    if expiry(&payload).is_some_and(|expires_at| now > expires_at) {
        return Err(ClaimValidationError::Expired);
    }

    Ok(TokenInfo {
        header,
        payload,
        signature: (*signature).to_string(),
    })
}

/// Split on `.`, discarding trailing empty segments.
fn split_segments(token: &str) -> Vec<&str> {
    let mut segments: Vec<&str> = token.split('.').collect();

    while segments.last().is_some_and(|segment| segment.is_empty()) {
        segments.pop();
    }

    segments
}

fn decode_segment(segment: &str) -> Result<String, ClaimValidationError> {
    let bytes = LENIENT.decode(segment)?;

    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// The integer between the first `"exp":` and the following `}`, if any.
fn expiry(payload: &str) -> Option<i64> {
    let (_, after) = payload.split_once(EXPIRY_MARKER)?;

    after
        .split(EXPIRY_MARKER)
        .next()?
        .split('}')
        .next()?
        .parse()
        .ok()
}
