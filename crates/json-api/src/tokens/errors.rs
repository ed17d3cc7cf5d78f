//! Token Errors

use salvo::http::StatusCode;

use sandbox_app::auth::ClaimValidationError;

/// Missing and expired tokens are unauthorized; anything else is malformed.
pub(crate) fn status_code(error: &ClaimValidationError) -> StatusCode {
    match error {
        ClaimValidationError::Missing | ClaimValidationError::Expired => StatusCode::UNAUTHORIZED,
        ClaimValidationError::InvalidStructure
        | ClaimValidationError::InvalidHeader
        | ClaimValidationError::InvalidPayload
        | ClaimValidationError::Decode(_) => StatusCode::BAD_REQUEST,
    }
}
