use std::{path::PathBuf, time::Duration};

use axum::{http::header, response::Redirect, routing::get, Router};
use color_eyre::eyre::Context;
use tower_http::{
    request_id::MakeRequestUuid, services::ServeDir, timeout::TimeoutLayer, trace::TraceLayer,
    ServiceBuilderExt,
};
use tracing::{debug, info};

use middleware::{
    catch_panic::catch_panic_layer, server_information::server_information, trace::SpanMaker,
};

use crate::{environment::HttpEnvironment, riders::RiderDirectory};

pub mod api;
pub mod error;
pub mod middleware;
pub mod riders;

pub async fn index() -> Redirect {
    Redirect::to("/riders")
}

/// Builds the complete application, serving `/static` from `static_dir` when
/// one is given.
pub fn app(directory: RiderDirectory, static_dir: Option<PathBuf>) -> Router {
    let api_router = Router::new()
        .route("/riders", get(api::riders))
        .route("/healthy", get(api::healthy))
        .route("/panic", {
            if cfg!(debug_assertions) {
                get(api::panic)
            } else {
                get(api::not_found)
            }
        })
        .fallback(api::not_found);

    let mut app = Router::new()
        .route("/", get(index))
        .route("/riders", get(riders::riders))
        .nest("/api", api_router);

    if let Some(static_dir) = static_dir {
        app = app.nest_service(
            "/static",
            ServeDir::new(static_dir)
                .append_index_html_on_directories(false)
                .call_fallback_on_method_not_allowed(true),
        );
    }

    app.fallback(error::not_found)
        .layer(
            tower::ServiceBuilder::new()
                // Hide sensitive headers
                .sensitive_headers([header::AUTHORIZATION, header::COOKIE])
                // Give a unique identifier to every request
                .set_x_request_id(MakeRequestUuid)
                .propagate_x_request_id()
                // Send traces to sentry
                .layer(sentry::integrations::tower::NewSentryLayer::new_from_top())
                .layer(sentry::integrations::tower::SentryHttpLayer::with_transaction())
                // Trace requests and responses
                .layer(TraceLayer::new_for_http().make_span_with(SpanMaker))
                // Timeout if request or response hangs
                .layer(TimeoutLayer::new(Duration::from_secs(10)))
                // Compress responses
                .map_response_body(axum::body::boxed)
                .compression()
                // Say which build served the response
                .layer(axum::middleware::from_fn(server_information))
                // Catch Panics in handlers
                .layer(catch_panic_layer(error::internal_server_error_panic)),
        )
        .with_state(directory)
}

pub async fn serve(http: HttpEnvironment, directory: RiderDirectory) -> color_eyre::Result<()> {
    let app = app(directory, http.static_dir);

    debug!(bind = %http.bind, "starting http server");
    let server = axum::Server::try_bind(&http.bind)
        .wrap_err("failed to bind to given address")?
        .serve(app.into_make_service());

    info!(address = %server.local_addr(), "listening");

    server
        .with_graceful_shutdown(shutdown_signal())
        .await
        .wrap_err("http server failed")
}

async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        tracing::warn!(%error, "unable to listen for shutdown signal");

        std::future::pending::<()>().await;
    }

    info!("shutting down");
}
