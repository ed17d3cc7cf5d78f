//! User Index Handler

use std::sync::Arc;

use salvo::prelude::*;

use sandbox_app::domain::users::data::UserFilter;

use crate::{extensions::*, state::State, users::models::UserResponse};

/// User Index Handler
///
/// Returns one page of users matching the optional `role` and `active`
/// query parameters.
#[endpoint(
    tags("users"),
    summary = "List Users",
    responses(
        (status_code = StatusCode::OK, description = "Matching users"),
        (status_code = StatusCode::BAD_REQUEST, description = "Malformed query parameter"),
    ),
)]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<Vec<UserResponse>>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let filter = UserFilter {
        role: req.query::<String>("role"),
        active: req.parse_query::<bool>("active")?,
    };

    let page = req.parse_page()?;

    let users = state.app.users.list_users(filter, page).await;

    Ok(Json(users.into_iter().map(Into::into).collect()))
}
