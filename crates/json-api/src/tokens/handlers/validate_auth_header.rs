//! Validate Claim-Set Header Handler

use std::sync::Arc;

use salvo::prelude::*;

use sandbox_app::auth::CLAIM_SET_HEADER;

use crate::{
    extensions::*,
    state::State,
    tokens::{errors::status_code, models::ClaimValidationResponse},
};

/// Validate Claim-Set Header Handler
///
/// Checks the structure, claims and expiry of the token in the
/// `iam-claimsetjwt` header.
#[endpoint(
    tags("tokens"),
    summary = "Validate Claim-Set Token",
    responses(
        (status_code = StatusCode::OK, description = "Token is valid"),
        (status_code = StatusCode::BAD_REQUEST, description = "Token is malformed"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Token is missing or expired"),
    ),
)]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<ClaimValidationResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let token = req.header::<String>(CLAIM_SET_HEADER);

    match state.app.tokens.validate_claims(token) {
        Ok(info) => Ok(Json(info.into())),
        Err(error) => {
            res.status_code(status_code(&error));

            Ok(Json(ClaimValidationResponse::from(&error)))
        }
    }
}
