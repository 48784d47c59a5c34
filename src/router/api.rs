use axum::{
    extract::{OriginalUri, State},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};
use tracing::warn;

use crate::{riders::RiderDirectory, router::middleware::RequestMetadata};

#[axum::debug_handler]
pub async fn not_found(
    request_metadata: RequestMetadata,
    OriginalUri(uri): OriginalUri,
) -> (StatusCode, Json<Value>) {
    let endpoint = uri.path();

    (
        StatusCode::NOT_FOUND,
        Json(json!({
            "error": {
                "message": "endpoint does not exist",
                "endpoint": endpoint,
                "request_id": request_metadata.request_id,
                "server": request_metadata.server
            }
        })),
    )
}

#[tracing::instrument]
#[axum::debug_handler]
pub async fn healthy() -> &'static str {
    "OK"
}

#[tracing::instrument]
#[axum::debug_handler]
pub async fn panic() {
    panic!("manual api panic")
}

#[tracing::instrument(skip_all)]
pub async fn riders(
    State(directory): State<RiderDirectory>,
    request_metadata: RequestMetadata,
) -> (StatusCode, Json<Value>) {
    match directory.list().await {
        Ok(riders) => (StatusCode::OK, Json(json!({ "riders": riders }))),
        Err(error) => {
            warn!(%error, source = %directory.source(), "unable to list riders");

            (
                StatusCode::BAD_GATEWAY,
                Json(json!({
                    "error": {
                        "message": error.to_string(),
                        "request_id": request_metadata.request_id
                    }
                })),
            )
        }
    }
}
