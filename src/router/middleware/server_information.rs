use axum::{
    body::Body,
    http::{HeaderName, HeaderValue, Request},
    middleware::Next,
    response::IntoResponse,
};
use git_version::git_version;
use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize)]
pub struct StaticServerInformation {
    /// Server name
    pub name: &'static str,
    /// Server SemVer version
    pub version: &'static str,
    /// Server git commit
    pub commit: &'static str,
    /// Server environment (dev/prod)
    pub environment: &'static str,
}

pub const SERVER_INFO: StaticServerInformation = StaticServerInformation {
    name: env!("CARGO_PKG_NAME"),
    version: env!("CARGO_PKG_VERSION"),
    commit: git_version!(args = ["--always"], fallback = "unknown"),
    environment: if cfg!(debug_assertions) {
        "development"
    } else {
        "production"
    },
};

const ORIGIN_SERVER: &str = const_format::formatcp!(
    "{}@{} (commit {})",
    SERVER_INFO.name,
    SERVER_INFO.version,
    SERVER_INFO.commit
);

/// Tags every response with the build that served it.
pub async fn server_information(req: Request<Body>, next: Next<Body>) -> impl IntoResponse {
    (
        axum::response::AppendHeaders([
            (
                HeaderName::from_static("x-origin-server"),
                HeaderValue::from_static(ORIGIN_SERVER),
            ),
            (
                HeaderName::from_static("x-server-environment"),
                HeaderValue::from_static(SERVER_INFO.environment),
            ),
        ]),
        next.run(req).await,
    )
}
