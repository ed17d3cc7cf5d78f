//! Token data models.

/// Token generation request.
///
/// The fields are accepted for compatibility with test harness clients but do
/// not influence the generated token.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenRequest {
    pub is_aws: bool,
    pub service: Option<String>,
    pub environment: Option<String>,
}

/// Decoded parts of a token that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenInfo {
    /// Decoded header segment.
    pub header: String,

    /// Decoded payload segment.
    pub payload: String,

    /// Signature segment, still encoded.
    pub signature: String,
}

/// Outcome reported by claim-set validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClaimStatus {
    Valid,
    Unauthorized,
    InvalidToken,
    InvalidHeader,
    InvalidPayload,
    Expired,
    ValidationError,
}

impl ClaimStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Valid => "VALID",
            Self::Unauthorized => "UNAUTHORIZED",
            Self::InvalidToken => "INVALID_TOKEN",
            Self::InvalidHeader => "INVALID_HEADER",
            Self::InvalidPayload => "INVALID_PAYLOAD",
            Self::Expired => "EXPIRED",
            Self::ValidationError => "VALIDATION_ERROR",
        }
    }
}
