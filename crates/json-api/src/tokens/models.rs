//! Token Models

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};

use sandbox_app::auth::{ClaimStatus, ClaimValidationError, TokenInfo, TokenRequest};

/// Token generation request. None of the fields affect the issued token.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub(crate) struct GenerateTokenRequest {
    #[serde(default, rename = "isAws", alias = "aws")]
    pub is_aws: bool,
    pub service: Option<String>,
    pub environment: Option<String>,
}

impl From<GenerateTokenRequest> for TokenRequest {
    fn from(request: GenerateTokenRequest) -> Self {
        TokenRequest {
            is_aws: request.is_aws,
            service: request.service,
            environment: request.environment,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub(crate) struct GenerateTokenResponse {
    /// Token to send back in the claim-set header
    #[serde(rename = "iam-claimsetjwt")]
    pub token: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub(crate) struct TokenInfoResponse {
    pub header: String,
    pub payload: String,
    pub signature: String,
}

impl From<TokenInfo> for TokenInfoResponse {
    fn from(info: TokenInfo) -> Self {
        TokenInfoResponse {
            header: info.header,
            payload: info.payload,
            signature: info.signature,
        }
    }
}

/// Outcome of validating the claim-set header
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ClaimValidationResponse {
    pub valid: bool,

    /// One of `VALID`, `UNAUTHORIZED`, `INVALID_TOKEN`, `INVALID_HEADER`,
    /// `INVALID_PAYLOAD`, `EXPIRED` or `VALIDATION_ERROR`
    pub status: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_info: Option<TokenInfoResponse>,
}

impl From<TokenInfo> for ClaimValidationResponse {
    fn from(info: TokenInfo) -> Self {
        ClaimValidationResponse {
            valid: true,
            status: ClaimStatus::Valid.as_str().to_string(),
            message: Some("JWT token is valid".to_string()),
            error: None,
            token_info: Some(info.into()),
        }
    }
}

impl From<&ClaimValidationError> for ClaimValidationResponse {
    fn from(error: &ClaimValidationError) -> Self {
        ClaimValidationResponse {
            valid: false,
            status: error.status().as_str().to_string(),
            message: None,
            error: Some(error.to_string()),
            token_info: None,
        }
    }
}
