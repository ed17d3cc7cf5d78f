//! Health and service info handlers

use jiff::Timestamp;
use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

const SERVICE_ID: &str = "karate-sandbox-api";

/// Healthcheck response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct HealthResponse {
    /// Always `UP` while the server answers
    pub status: String,

    pub service: String,

    /// Unix time in milliseconds
    pub timestamp: i64,
}

/// Service description response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct InfoResponse {
    pub name: String,
    pub version: String,
    pub description: String,
    pub profiles: Vec<String>,
}

/// Healthcheck handler
#[endpoint(tags("health"), summary = "Health check endpoint")]
pub(crate) async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "UP".to_string(),
        service: SERVICE_ID.to_string(),
        timestamp: Timestamp::now().as_millisecond(),
    })
}

/// Info handler
#[endpoint(tags("health"), summary = "Service information")]
pub(crate) async fn info() -> Json<InfoResponse> {
    Json(InfoResponse {
        name: "Karate Sandbox API".to_string(),
        version: "1.0.0".to_string(),
        description: "Demo API for Karate testing framework".to_string(),
        profiles: vec!["smoke".to_string(), "karate-tests".to_string()],
    })
}

#[cfg(test)]
mod tests {
    use salvo::{
        prelude::*,
        test::{ResponseExt, TestClient},
    };
    use testresult::TestResult;

    use super::*;

    #[tokio::test]
    async fn test_health() -> TestResult {
        let before = Timestamp::now().as_millisecond();
        let router = Router::new().push(Router::with_path("health").get(health));

        let response: HealthResponse = TestClient::get("http://example.com/health")
            .send(&Service::new(router))
            .await
            .take_json()
            .await?;

        assert_eq!(response.status, "UP");
        assert_eq!(response.service, "karate-sandbox-api");
        assert!(response.timestamp >= before, "timestamp is current");

        Ok(())
    }

    #[tokio::test]
    async fn test_info() -> TestResult {
        let router = Router::new().push(Router::with_path("info").get(info));

        let response: InfoResponse = TestClient::get("http://example.com/info")
            .send(&Service::new(router))
            .await
            .take_json()
            .await?;

        assert_eq!(response.name, "Karate Sandbox API");
        assert_eq!(response.version, "1.0.0");
        assert_eq!(response.profiles, vec!["smoke", "karate-tests"]);

        Ok(())
    }
}
