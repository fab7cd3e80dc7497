//! # reqres client
//!
//! Async client for the reqres user-management API: list, get, create,
//! update, patch and delete users, plus register and login.
//!
//! Responses come back as [`ApiResponse`] (status + raw JSON body) so that
//! black-box tests can assert on exactly what the service sent. Typed
//! payloads from [`models`] are available through [`ApiResponse::json`].
//!
//! ```rust,ignore
//! use reqres_client::{ReqresClient, ReqresConfig};
//!
//! let client = ReqresClient::new(ReqresConfig::from_env())?;
//! let response = client.get_user("2").await?;
//! assert_eq!(response.status, reqwest::StatusCode::OK);
//! ```

mod client;
mod config;
mod errors;
mod response;

pub mod models;

pub use client::ReqresClient;
pub use config::{ReqresConfig, DEFAULT_BASE_URL};
pub use errors::ReqresError;
pub use response::ApiResponse;

pub use reqwest::StatusCode;
