//! Claim-set validation errors.

use base64::DecodeError;
use thiserror::Error;

use crate::auth::ClaimStatus;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ClaimValidationError {
    #[error("Missing JWT token in iam-claimsetjwt header")]
    Missing,

    #[error("Invalid JWT structure - expected 3 parts")]
    InvalidStructure,

    #[error("Invalid JWT header")]
    InvalidHeader,

    #[error("Invalid JWT payload - missing required claims")]
    InvalidPayload,

    #[error("JWT token has expired")]
    Expired,

    #[error("Failed to validate JWT token: {0}")]
    Decode(#[source] DecodeError),
}

impl ClaimValidationError {
    #[must_use]
    pub const fn status(&self) -> ClaimStatus {
        match self {
            Self::Missing => ClaimStatus::Unauthorized,
            Self::InvalidStructure => ClaimStatus::InvalidToken,
            Self::InvalidHeader => ClaimStatus::InvalidHeader,
            Self::InvalidPayload => ClaimStatus::InvalidPayload,
            Self::Expired => ClaimStatus::Expired,
            Self::Decode(_) => ClaimStatus::ValidationError,
        }
    }
}

impl From<DecodeError> for ClaimValidationError {
    fn from(error: DecodeError) -> Self {
        Self::Decode(error)
    }
}
