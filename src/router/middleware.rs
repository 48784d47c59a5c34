use std::convert::Infallible;

use axum::{extract::FromRequestParts, http::request};
use serde::Serialize;
use tower_http::request_id::RequestId;

pub use server_information::{StaticServerInformation, SERVER_INFO};

pub mod catch_panic;
pub mod server_information;
pub mod trace;

#[derive(Debug, Clone, Serialize)]
pub struct RequestMetadata {
    /// The request ID
    pub request_id: String,
    /// Static build-time server information
    pub server: StaticServerInformation,
}

impl RequestMetadata {
    fn from_parts(parts: &request::Parts) -> Self {
        let request_id = parts
            .extensions
            .get::<RequestId>()
            .and_then(|id| id.header_value().to_str().ok())
            .unwrap_or("unknown")
            .to_string();

        RequestMetadata {
            request_id,
            server: SERVER_INFO,
        }
    }
}

#[axum::async_trait]
impl<S> FromRequestParts<S> for RequestMetadata
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut request::Parts,
        _state: &S,
    ) -> Result<Self, Self::Rejection> {
        Ok(RequestMetadata::from_parts(parts))
    }
}
