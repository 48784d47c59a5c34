use std::{env, net::SocketAddr, path::PathBuf};

use color_eyre::{
    eyre::{eyre, Context},
    Help,
};
use reqwest::Url;

use crate::riders::RiderSource;

const DEFAULT_BIND: &str = "127.0.0.1:8080";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpEnvironment {
    pub bind: SocketAddr,
    pub static_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Environment {
    pub http: HttpEnvironment,
    pub riders: RiderSource,
    pub sentry_dsn: Option<String>,
}

impl Environment {
    pub fn from_env() -> color_eyre::Result<Environment> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Reads the environment through `lookup`. Empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> color_eyre::Result<Environment> {
        let var = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let bind = var("BIND").unwrap_or_else(|| DEFAULT_BIND.to_string());
        let bind = bind
            .parse::<SocketAddr>()
            .wrap_err("$BIND should be a valid socket address")
            .with_note(|| format!("$BIND was set to {bind:?}"))?;

        let riders = match (var("RIDERS_FILE"), var("RIDERS_URL")) {
            (Some(path), _) => RiderSource::File(path.into()),
            (None, Some(url)) => RiderSource::Upstream(
                Url::parse(&url)
                    .wrap_err("$RIDERS_URL should be a valid url")
                    .with_note(|| format!("$RIDERS_URL was set to {url:?}"))?,
            ),
            (None, None) => {
                return Err(eyre!("no rider source configured")
                    .warning("make sure you are providing the required environment variables")
                    .note("set either RIDERS_FILE or RIDERS_URL"))
            }
        };

        Ok(Environment {
            http: HttpEnvironment {
                bind,
                static_dir: var("STATIC_DIR").map(PathBuf::from),
            },
            riders,
            sentry_dsn: var("SENTRY_DSN"),
        })
    }
}
