//! Create User Handler

use std::sync::Arc;

use salvo::{http::header::LOCATION, oapi::extract::JsonBody, prelude::*};

use crate::{
    extensions::*,
    state::State,
    users::models::{UserRequest, UserResponse},
};

/// Create User Handler
#[endpoint(
    tags("users"),
    summary = "Create User",
    responses(
        (status_code = StatusCode::CREATED, description = "User created"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<UserRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<UserResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let user = state.app.users.create_user(json.into_inner().into()).await;

    res.add_header(LOCATION, format!("/api/users/{}", user.id), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    Ok(Json(user.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use sandbox_app::domain::users::{MockUsersService, data::NewUser, models::User};

    use crate::test_helpers::users_service;

    use super::*;

    fn make_service(users: MockUsersService) -> Service {
        users_service(users, Router::with_path("users").post(handler))
    }

    #[tokio::test]
    async fn test_create_user_defaults_active_to_false() -> TestResult {
        let mut users = MockUsersService::new();

        let expected = NewUser {
            name: Some("Alice".to_string()),
            email: Some("alice@example.com".to_string()),
            role: None,
            active: false,
        };

        users
            .expect_create_user()
            .once()
            .withf(move |new| *new == expected)
            .return_once(|new| User {
                id: 4,
                name: new.name,
                email: new.email,
                role: new.role,
                active: new.active,
            });

        let mut res = TestClient::post("http://example.com/users")
            .json(&json!({ "name": "Alice", "email": "alice@example.com", "nickname": "al" }))
            .send(&make_service(users))
            .await;

        let body: UserResponse = res.take_json().await?;
        let location = res.headers().get("location").and_then(|v| v.to_str().ok());

        assert_eq!(res.status_code, Some(StatusCode::CREATED));
        assert_eq!(location, Some("/api/users/4"));
        assert_eq!(body.id, 4);
        assert!(!body.active, "active defaults to false");

        Ok(())
    }
}
