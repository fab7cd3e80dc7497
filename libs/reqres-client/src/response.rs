use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::ReqresError;

/// Status and JSON body of a single round trip
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub status: StatusCode,
    /// `Value::Null` when the service sent no body (e.g. 204)
    pub body: Value,
}

impl ApiResponse {
    pub(crate) async fn read(response: reqwest::Response) -> Result<Self, ReqresError> {
        let status = response.status();
        let bytes = response.bytes().await?;

        let body = if bytes.iter().all(u8::is_ascii_whitespace) {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).map_err(|source| ReqresError::InvalidJson {
                status: status.as_u16(),
                source,
            })?
        };

        Ok(Self { status, body })
    }

    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Decode the body into a typed payload
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, ReqresError> {
        serde_json::from_value(self.body.clone()).map_err(|e| {
            ReqresError::UnexpectedBody(format!("status {}: {}", self.status, e))
        })
    }

    pub fn field(&self, name: &str) -> Option<&Value> {
        self.body.get(name)
    }

    pub fn str_field(&self, name: &str) -> Option<&str> {
        self.field(name).and_then(Value::as_str)
    }

    /// True for a literal `{}` body
    pub fn is_empty_object(&self) -> bool {
        self.body.as_object().is_some_and(|o| o.is_empty())
    }
}
