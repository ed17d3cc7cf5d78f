//! Update User Handler

use std::sync::Arc;

use salvo::{
    oapi::extract::{JsonBody, PathParam},
    prelude::*,
};

use sandbox_app::domain::users::models::UserId;

use crate::{
    extensions::*,
    state::State,
    users::{
        errors::into_status_error,
        models::{UserRequest, UserResponse},
    },
};

/// Update User Handler
///
/// Replaces every field of the user, including `active`.
#[endpoint(
    tags("users"),
    summary = "Replace User",
    responses(
        (status_code = StatusCode::OK, description = "User replaced"),
        (status_code = StatusCode::NOT_FOUND, description = "User not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
    ),
)]
pub(crate) async fn handler(
    id: PathParam<UserId>,
    json: JsonBody<UserRequest>,
    depot: &mut Depot,
) -> Result<Json<UserResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let user = state
        .app
        .users
        .replace_user(id.into_inner(), json.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(user.into()))
}
