use std::sync::OnceLock;

use cucumber::World;

use reqres_client::{ApiResponse, ReqresClient};
use schema_fixtures::SchemaStore;

const REQRES_LIVE: &str = "REQRES_LIVE";

/// Base URL every scenario talks to, fixed once before the run starts
pub static TARGET_BASE_URL: OnceLock<String> = OnceLock::new();

/// `REQRES_LIVE=1` points the suite at the configured service instead of the stand-in
pub fn live_target_enabled() -> bool {
    std::env::var(REQRES_LIVE)
        .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false)
}

#[derive(Debug, Default, World)]
pub struct TestWorld {
    pub client: Option<ReqresClient>,
    pub schemas: SchemaStore,

    // Results
    pub response: Option<ApiResponse>,
    pub created_user_id: Option<String>,
}

impl TestWorld {
    pub fn client(&self) -> &ReqresClient {
        self.client
            .as_ref()
            .expect("client should be configured by the background step")
    }

    pub fn response(&self) -> &ApiResponse {
        self.response.as_ref().expect("a request should have been sent")
    }

    pub fn created_user_id(&self) -> String {
        self.created_user_id
            .clone()
            .expect("a user should have been created")
    }
}
