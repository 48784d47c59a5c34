use std::{fmt, path::PathBuf, time::Duration};

use reqwest::{StatusCode, Url};
use thiserror::Error;
use tracing::{debug, trace, warn};

use super::{Rider, RiderFeed};

const UPSTREAM_TIMEOUT: Duration = Duration::from_secs(5);

/// Where rider records are read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RiderSource {
    /// A json array of riders on disk
    File(PathBuf),
    /// A service answering `GET` with a json array of riders
    Upstream(Url),
}

impl fmt::Display for RiderSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RiderSource::File(path) => write!(f, "file:{}", path.display()),
            RiderSource::Upstream(url) => write!(f, "{url}"),
        }
    }
}

#[derive(Debug, Error)]
pub enum RiderSourceError {
    #[error("failed to read rider file {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("rider data is not a list of riders")]
    Decode(#[from] serde_json::Error),
    #[error("request to the rider service failed")]
    Request(#[from] reqwest::Error),
    #[error("rider service responded with {0}")]
    Status(StatusCode),
}

#[derive(Debug, Clone)]
pub struct RiderDirectory {
    source: RiderSource,
    client: reqwest::Client,
}

impl RiderDirectory {
    pub fn new(source: RiderSource) -> Result<Self, RiderSourceError> {
        let client = reqwest::Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .timeout(UPSTREAM_TIMEOUT)
            .build()?;

        Ok(Self { source, client })
    }

    pub fn source(&self) -> &RiderSource {
        &self.source
    }

    /// Every rider, ordered by name and then id.
    #[tracing::instrument(skip(self), fields(source = %self.source))]
    pub async fn list(&self) -> Result<Vec<Rider>, RiderSourceError> {
        let body = match &self.source {
            RiderSource::File(path) => {
                trace!("reading rider file");

                tokio::fs::read(path)
                    .await
                    .map_err(|source| RiderSourceError::Io {
                        path: path.clone(),
                        source,
                    })?
            }
            RiderSource::Upstream(url) => {
                trace!("requesting riders from upstream");

                let response = self.client.get(url.clone()).send().await?;
                let status = response.status();

                if !status.is_success() {
                    return Err(RiderSourceError::Status(status));
                }

                response.bytes().await?.to_vec()
            }
        };

        let mut riders: Vec<Rider> = serde_json::from_slice(&body)?;
        riders.sort_by_cached_key(|rider| (rider.name.to_lowercase(), rider.id.clone()));

        debug!(count = riders.len(), "loaded riders");

        Ok(riders)
    }

    /// Fetches the riders for the listing widget. Failures become the
    /// widget's failed state instead of an error.
    pub async fn feed(&self) -> RiderFeed {
        match self.list().await {
            Ok(riders) => RiderFeed::Loaded(riders),
            Err(error) => {
                warn!(%error, source = %self.source, "unable to load riders");

                RiderFeed::Failed(error.to_string())
            }
        }
    }
}
