//! Patch User Handler

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
        models::{PatchUserRequest, UserResponse},
    },
};

/// Patch User Handler
///
/// Updates name, email and role when present.
#[endpoint(
    tags("users"),
    summary = "Patch User",
    responses(
        (status_code = StatusCode::OK, description = "User updated"),
        (status_code = StatusCode::NOT_FOUND, description = "User not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
    ),
)]
pub(crate) async fn handler(
    id: PathParam<UserId>,
    json: JsonBody<PatchUserRequest>,
    depot: &mut Depot,
) -> Result<Json<UserResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let user = state
        .app
        .users
        .patch_user(id.into_inner(), json.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(user.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use sandbox_app::domain::users::{MockUsersService, data::UserPatch};

    use crate::test_helpers::users_service;

    use super::{super::tests::make_user, *};

    fn make_service(users: MockUsersService) -> Service {
        users_service(users, Router::with_path("users/{id}").patch(handler))
    }

    #[tokio::test]
    async fn test_patch_ignores_active_in_body() -> TestResult {
        let mut users = MockUsersService::new();

        let expected = UserPatch {
            role: Some("user".to_string()),
            ..UserPatch::default()
        };

        users
            .expect_patch_user()
            .once()
            .withf(move |id, patch| *id == 1 && *patch == expected)
            .return_once(|id, patch| {
                let mut user = make_user(id);
                user.role = patch.role;
                Ok(user)
            });

        let mut res = TestClient::patch("http://example.com/users/1")
            .json(&json!({ "role": "user", "active": false }))
            .send(&make_service(users))
            .await;

        let body: UserResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.role.as_deref(), Some("user"));
        assert!(body.active, "patch leaves active untouched");

        Ok(())
    }
}
