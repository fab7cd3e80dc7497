use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::{Client, RequestBuilder};
use secrecy::ExposeSecret;
use tracing::debug;

use crate::config::ReqresConfig;
use crate::models::{Credentials, NewUser};
use crate::response::ApiResponse;
use crate::ReqresError;

const API_KEY_HEADER: &str = "x-api-key";

/// Client for the reqres user-management endpoints.
///
/// Every call returns the status and body as received; asserting on them is
/// the caller's job.
#[derive(Debug)]
pub struct ReqresClient {
    config: ReqresConfig,
    http: Client,
}

impl ReqresClient {
    pub fn new(config: ReqresConfig) -> Result<Self, ReqresError> {
        config.validate()?;

        let mut headers = HeaderMap::new();
        if let Some(ref api_key) = config.api_key {
            let mut value = HeaderValue::from_str(api_key.expose_secret()).map_err(|_| {
                ReqresError::InvalidConfig("api key is not a valid header value".to_string())
            })?;
            value.set_sensitive(true);
            headers.insert(API_KEY_HEADER, value);
        }

        let http = Client::builder()
            .timeout(config.timeout)
            .default_headers(headers)
            .build()
            .map_err(|e| ReqresError::ClientBuild(e.to_string()))?;

        debug!(
            base_url = %config.base_url,
            api_key = config.api_key.is_some(),
            timeout_secs = config.timeout.as_secs(),
            "reqres client initialized"
        );

        Ok(Self { config, http })
    }

    pub fn from_env() -> Result<Self, ReqresError> {
        Self::new(ReqresConfig::from_env())
    }

    pub fn config(&self) -> &ReqresConfig {
        &self.config
    }

    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// `GET /api/users`, optionally for a given page
    pub async fn list_users(&self, page: Option<u32>) -> Result<ApiResponse, ReqresError> {
        let mut request = self.http.get(self.config.users_url());
        if let Some(page) = page {
            request = request.query(&[("page", page)]);
        }
        self.send(request).await
    }

    /// `GET /api/users/{id}`. The id is sent as given, so malformed ids reach the service.
    pub async fn get_user(&self, id: &str) -> Result<ApiResponse, ReqresError> {
        self.send(self.http.get(self.config.user_url(id))).await
    }

    pub async fn create_user(&self, user: &NewUser) -> Result<ApiResponse, ReqresError> {
        self.send(self.http.post(self.config.users_url()).json(user)).await
    }

    /// `PUT /api/users/{id}`
    pub async fn update_user(&self, id: &str, user: &NewUser) -> Result<ApiResponse, ReqresError> {
        self.send(self.http.put(self.config.user_url(id)).json(user)).await
    }

    /// `PATCH /api/users/{id}`
    pub async fn patch_user(&self, id: &str, user: &NewUser) -> Result<ApiResponse, ReqresError> {
        self.send(self.http.patch(self.config.user_url(id)).json(user)).await
    }

    pub async fn delete_user(&self, id: &str) -> Result<ApiResponse, ReqresError> {
        self.send(self.http.delete(self.config.user_url(id))).await
    }

    pub async fn register(&self, credentials: &Credentials) -> Result<ApiResponse, ReqresError> {
        self.send(self.http.post(self.config.register_url()).json(credentials)).await
    }

    pub async fn login(&self, credentials: &Credentials) -> Result<ApiResponse, ReqresError> {
        self.send(self.http.post(self.config.login_url()).json(credentials)).await
    }

    async fn send(&self, request: RequestBuilder) -> Result<ApiResponse, ReqresError> {
        let request = request.build()?;
        let method = request.method().clone();
        let url = request.url().clone();

        debug!(method = %method, url = %url, "sending request");
        let response = self.http.execute(request).await?;
        let response = ApiResponse::read(response).await?;
        debug!(method = %method, url = %url, status = %response.status, "received response");

        Ok(response)
    }
}
