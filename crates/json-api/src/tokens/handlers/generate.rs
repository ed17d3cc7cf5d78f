//! Generate Token Handler

use std::sync::Arc;

use salvo::{oapi::extract::JsonBody, prelude::*};

use sandbox_app::auth::TokenRequest;

use crate::{
    extensions::*,
    state::State,
    tokens::models::{GenerateTokenRequest, GenerateTokenResponse},
};

/// Generate Token Handler
///
/// Issues an unsigned claim-set token valid for one hour.
#[endpoint(
    tags("tokens"),
    summary = "Generate Token",
    responses(
        (status_code = StatusCode::OK, description = "Token issued"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<GenerateTokenRequest>,
    depot: &mut Depot,
) -> Result<Json<GenerateTokenResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let request: TokenRequest = json.into_inner().into();

    Ok(Json(GenerateTokenResponse {
        token: state.app.tokens.generate_token(&request),
    }))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::{Value, json};
    use testresult::TestResult;

    use sandbox_app::auth::MockTokenService;

    use crate::test_helpers::tokens_service;

    use super::*;

    fn make_service(tokens: MockTokenService) -> Service {
        tokens_service(tokens, Router::with_path("token/generate").post(handler))
    }

    #[tokio::test]
    async fn test_generate_returns_claim_set_key() -> TestResult {
        let mut tokens = MockTokenService::new();

        tokens
            .expect_generate_token()
            .once()
            .withf(|request| {
                request.is_aws && request.service.as_deref() == Some("billing")
            })
            .return_const("a.b.c".to_string());

        let mut res = TestClient::post("http://example.com/token/generate")
            .json(&json!({ "isAws": true, "service": "billing", "environment": "dev" }))
            .send(&make_service(tokens))
            .await;

        let body: Value = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body, json!({ "iam-claimsetjwt": "a.b.c" }));

        Ok(())
    }
}
