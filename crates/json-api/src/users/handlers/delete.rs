//! Delete User Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use sandbox_app::domain::users::models::UserId;

use crate::{extensions::*, state::State, users::errors::into_status_error};

/// Delete User Handler
#[endpoint(
    tags("users"),
    summary = "Delete User",
    responses(
        (status_code = StatusCode::NO_CONTENT, description = "User deleted"),
        (status_code = StatusCode::NOT_FOUND, description = "User not found"),
    ),
)]
pub(crate) async fn handler(
    id: PathParam<UserId>,
    depot: &mut Depot,
) -> Result<StatusCode, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    state
        .app
        .users
        .delete_user(id.into_inner())
        .await
        .map_err(into_status_error)?;

    Ok(StatusCode::NO_CONTENT)
}
