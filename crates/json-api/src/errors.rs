//! JSON bodies for error responses

use salvo::{
    catcher::Catcher,
    http::ResBody,
    oapi::ToSchema,
    prelude::*,
};
use serde::{Deserialize, Serialize};

/// Error response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ErrorResponse {
    pub status: u16,
    pub error: String,
}

/// Render handler errors as JSON whatever the client's `Accept` header.
#[handler]
async fn json_error(res: &mut Response, ctrl: &mut FlowCtrl) {
    let Some(status) = res.status_code else {
        return;
    };

    if !status.is_client_error() && !status.is_server_error() {
        return;
    }

    let error = match &res.body {
        ResBody::Error(error) if !error.brief.is_empty() => error.brief.clone(),
        _ => status.canonical_reason().unwrap_or("Error").to_owned(),
    };

    res.body = ResBody::None;
    res.render(Json(ErrorResponse {
        status: status.as_u16(),
        error,
    }));

    ctrl.skip_rest();
}

pub(crate) fn catcher() -> Catcher {
    Catcher::default().hoop(json_error)
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use super::*;

    #[handler]
    async fn missing() -> Result<String, StatusError> {
        Err(StatusError::not_found().brief("Product not found"))
    }

    fn service() -> Service {
        Service::new(Router::with_path("missing").get(missing)).catcher(catcher())
    }

    #[tokio::test]
    async fn status_error_renders_json_brief() -> TestResult {
        let mut res = TestClient::get("http://example.com/missing")
            .add_header("accept", "text/html", true)
            .send(&service())
            .await;

        let body: ErrorResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));
        assert_eq!(body.status, 404);
        assert_eq!(body.error, "Product not found");

        Ok(())
    }

    #[tokio::test]
    async fn unmatched_route_renders_json() -> TestResult {
        let mut res = TestClient::get("http://example.com/elsewhere")
            .send(&service())
            .await;

        let body: ErrorResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));
        assert_eq!(body.status, 404);

        Ok(())
    }
}
