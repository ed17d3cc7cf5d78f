//! Get User Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use sandbox_app::domain::users::models::UserId;

use crate::{
    extensions::*,
    state::State,
    users::{errors::into_status_error, models::UserResponse},
};

/// Get User Handler
#[endpoint(
    tags("users"),
    summary = "Get User",
    responses(
        (status_code = StatusCode::OK, description = "User found"),
        (status_code = StatusCode::NOT_FOUND, description = "User not found"),
    ),
)]
pub(crate) async fn handler(
    id: PathParam<UserId>,
    depot: &mut Depot,
) -> Result<Json<UserResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let user = state
        .app
        .users
        .get_user(id.into_inner())
        .await
        .map_err(into_status_error)?;

    Ok(Json(user.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use sandbox_app::domain::users::{MockUsersService, UsersServiceError};

    use crate::test_helpers::users_service;

    use super::{super::tests::make_user, *};

    fn make_service(users: MockUsersService) -> Service {
        users_service(users, Router::with_path("users/{id}").get(handler))
    }

    #[tokio::test]
    async fn test_get_returns_200() -> TestResult {
        let mut users = MockUsersService::new();

        users
            .expect_get_user()
            .once()
            .withf(|id| *id == 1)
            .return_once(|id| Ok(make_user(id)));

        let mut res = TestClient::get("http://example.com/users/1")
            .send(&make_service(users))
            .await;

        let body: UserResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.email.as_deref(), Some("john.doe@example.com"));

        Ok(())
    }

    #[tokio::test]
    async fn test_get_missing_user_returns_404() {
        let mut users = MockUsersService::new();

        users
            .expect_get_user()
            .once()
            .return_once(|id| Err(UsersServiceError::NotFound(id)));

        let res = TestClient::get("http://example.com/users/7")
            .send(&make_service(users))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));
    }
}
