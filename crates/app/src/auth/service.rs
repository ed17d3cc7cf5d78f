//! Token service.

use jiff::Timestamp;
use mockall::automock;
use tracing::debug;
use uuid::Uuid;

use crate::auth::{
    ClaimValidationError, TokenInfo, TokenRequest, format_token, is_bearer, validate_claims,
};

/// Token service issuing unsigned claim-set tokens against the system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClaimSetTokenService;

impl ClaimSetTokenService {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl TokenService for ClaimSetTokenService {
    fn generate_token(&self, request: &TokenRequest) -> String {
        debug!(
            is_aws = request.is_aws,
            service = request.service.as_deref(),
            environment = request.environment.as_deref(),
            "generating claim-set token"
        );

        format_token(Timestamp::now().as_second(), Uuid::new_v4())
    }

    fn validate_bearer(&self, authorization: Option<String>) -> bool {
        is_bearer(authorization.as_deref())
    }

    fn validate_claims(&self, token: Option<String>) -> Result<TokenInfo, ClaimValidationError> {
        validate_claims(token.as_deref(), Timestamp::now().as_second()).inspect_err(|error| {
            debug!(status = error.status().as_str(), "claim-set token rejected: {error}");
        })
    }
}

#[automock]
pub trait TokenService: Send + Sync {
    /// Issue a token valid for one hour from now.
    fn generate_token(&self, request: &TokenRequest) -> String;

    /// Whether an `Authorization` header value carries a bearer credential.
    fn validate_bearer(&self, authorization: Option<String>) -> bool;

    /// Structurally validate a claim-set token against the current time.
    fn validate_claims(&self, token: Option<String>) -> Result<TokenInfo, ClaimValidationError>;
}
