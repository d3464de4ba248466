//! Shared helpers for integration tests

use axum::response::Response;
use dishes::server::model::app::AppState;
use dishes_test_utils::TestContext;
use serde::de::DeserializeOwned;

/// Extension trait for TestContext to create the server's AppState
pub trait TestContextExt {
    fn into_app_state(&self) -> AppState;
}

impl TestContextExt for TestContext {
    fn into_app_state(&self) -> AppState {
        self.to_app_state()
    }
}

/// Reads a response body and deserializes it from JSON
pub async fn read_json<T: DeserializeOwned>(resp: Response) -> T {
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("Failed to read response body");

    serde_json::from_slice(&bytes).expect("Response body was not the expected JSON")
}
