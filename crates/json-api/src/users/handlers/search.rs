//! User Search Handler

use std::sync::Arc;

use salvo::{oapi::extract::QueryParam, prelude::*};

use crate::{extensions::*, state::State, users::models::UserResponse};

/// User Search Handler
///
/// Returns users whose name or email contains `query`, ignoring case.
#[endpoint(
    tags("users"),
    summary = "Search Users",
    responses(
        (status_code = StatusCode::OK, description = "Matching users"),
        (status_code = StatusCode::BAD_REQUEST, description = "Missing query parameter"),
    ),
)]
pub(crate) async fn handler(
    query: QueryParam<String, true>,
    depot: &mut Depot,
) -> Result<Json<Vec<UserResponse>>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let users = state.app.users.search_users(query.into_inner()).await;

    Ok(Json(users.into_iter().map(Into::into).collect()))
}
