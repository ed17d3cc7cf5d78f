//! Validate Bearer Token Handler

use std::sync::Arc;

use salvo::{http::header::AUTHORIZATION, prelude::*};

use crate::{extensions::*, state::State};

/// Validate Bearer Token Handler
///
/// Only checks that the `Authorization` header uses the bearer scheme.
#[endpoint(
    tags("tokens"),
    summary = "Validate Bearer Token",
    responses(
        (status_code = StatusCode::OK, description = "Token is valid"),
        (status_code = StatusCode::BAD_REQUEST, description = "Invalid token"),
    ),
)]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<String, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let authorization = req.header::<String>(AUTHORIZATION);

    if state.app.tokens.validate_bearer(authorization) {
        return Ok("Token is valid".to_string());
    }

    res.status_code(StatusCode::BAD_REQUEST);

    Ok("Invalid token".to_string())
}
