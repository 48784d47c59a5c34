//! Admin dashboard for Saaf riders, rendered on the server with dioxus.

use sentry::ClientInitGuard;
use tracing::metadata::LevelFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use environment::Environment;

pub mod components;
pub mod environment;
pub mod pages;
pub mod riders;
pub mod router;

/// Sets up error reporting and logging. Events are forwarded to sentry when a
/// DSN is configured; the returned guard flushes them on drop.
pub fn initialize(environment: &Environment) -> color_eyre::Result<ClientInitGuard> {
    // Setup error reporting
    color_eyre::install()?;

    let sentry = sentry::init((
        environment.sentry_dsn.as_deref(),
        sentry::ClientOptions {
            release: sentry::release_name!(),
            traces_sample_rate: 0.2,
            ..Default::default()
        },
    ));

    // Setup logging
    tracing_subscriber::registry()
        .with(
            EnvFilter::from_default_env()
                .add_directive(LevelFilter::INFO.into())
                .add_directive(format!("{}=trace", env!("CARGO_CRATE_NAME")).parse()?),
        )
        .with(tracing_subscriber::fmt::layer().pretty())
        .with(tracing_error::ErrorLayer::default())
        .with(sentry::integrations::tracing::layer())
        .try_init()?;

    Ok(sentry)
}
