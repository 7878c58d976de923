//! Client configuration and request dispatch

use crate::collection::CollectionResources;
use crate::custom::CustomClient;
use crate::request::UrlLog;
use crate::Result;
use http::Request;
use kube::Config;
use serde::de::DeserializeOwned;
use tracing::trace;

/// Client for the clusterpedia aggregated API
///
/// Wraps a [`kube::Client`], so authentication, TLS and the base URL come from
/// the usual kubeconfig or in-cluster configuration.
///
/// # Example
///
/// ```rust,no_run
/// use clusterpedia_client::{ClusterpediaClient, FetchParams, ListOptionsBuilder};
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let client = ClusterpediaClient::try_default().await?.debug();
///
/// let options = ListOptionsBuilder::new().namespaces(["default"]).options();
/// let workloads = client
///     .collection_resources()
///     .fetch("workloads", &options, &FetchParams::default())
///     .await?;
///
/// for item in &workloads.items {
///     println!("{:?} {:?}", item.kind(), item.name());
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct ClusterpediaClient {
    client: kube::Client,
    log: UrlLog,
}

impl ClusterpediaClient {
    /// Wrap an existing client, for example one built around a custom service
    pub fn new(client: kube::Client) -> Self {
        Self {
            client,
            log: UrlLog::default(),
        }
    }

    /// Infer configuration from the environment (kubeconfig or in-cluster)
    pub async fn try_default() -> Result<Self> {
        let config = Config::infer().await?;
        Self::try_from_config(config)
    }

    pub fn try_from_config(config: Config) -> Result<Self> {
        trace!("Creating client for {}", config.cluster_url);
        let log = UrlLog::with_base_url(config.cluster_url.to_string());
        let client = kube::Client::try_from(config)?;
        Ok(Self { client, log })
    }

    /// Log the unescaped URL of every request at debug level
    pub fn debug(mut self) -> Self {
        self.log.enabled = true;
        self
    }

    pub fn collection_resources(&self) -> CollectionResources {
        CollectionResources::new(self.client.clone(), self.log.clone())
    }

    /// Client for listing arbitrary resources through clusterpedia
    pub fn custom(&self) -> CustomClient {
        CustomClient::new(self.client.clone(), self.log.clone())
    }

    pub fn kube_client(&self) -> &kube::Client {
        &self.client
    }
}

/// Send a request and decode its JSON body
///
/// Non-2xx responses surface as `kube::Error::Api`; a body that does not fit
/// `T` surfaces as a decode error, never a partial result.
pub(crate) async fn send<T: DeserializeOwned>(
    client: &kube::Client,
    request: Request<Vec<u8>>,
) -> Result<T> {
    let text = client.request_text(request).await?;
    Ok(serde_json::from_str(&text)?)
}
