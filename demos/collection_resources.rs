//! Fetches heterogeneous collections and decodes items by kind.

use clusterpedia_client::{ClusterpediaClient, FetchParams, ListOptions, ListOptionsBuilder};
use k8s_openapi::api::apps::v1::{DaemonSet, Deployment};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    let client = ClusterpediaClient::try_default().await?.debug();
    let collections = client.collection_resources();

    let list = collections.list(&ListOptions::default()).await?;
    for collection in &list.items {
        info!(
            name = collection.metadata.name.as_deref().unwrap_or_default(),
            resource_types = collection.resource_types.len(),
            "collection"
        );
    }

    let options = ListOptionsBuilder::new().namespaces(["default"]).options();
    let workloads = collections
        .fetch("workloads", &options, &FetchParams::default())
        .await?;
    for item in &workloads.items {
        match item.kind() {
            Some("Deployment") => {
                let deploy: Deployment = item.decode_as()?;
                info!(
                    kind = "Deployment",
                    name = deploy.metadata.name.as_deref().unwrap_or_default(),
                    "workload"
                );
            }
            Some("DaemonSet") => {
                let ds: DaemonSet = item.decode_as()?;
                info!(
                    kind = "DaemonSet",
                    name = ds.metadata.name.as_deref().unwrap_or_default(),
                    "workload"
                );
            }
            other => info!(kind = ?other, name = ?item.name(), "workload"),
        }
    }

    // Any resource type from the apps and core groups, metadata only
    let options = ListOptionsBuilder::new()
        .namespaces(["default"])
        .limit(10)
        .clusters(["k3s2"])
        .options();
    let params = FetchParams::new()
        .only_metadata()
        .groups(["apps", ""])
        .resources(["apps/v1/deployments", "apps/daemonsets", "/pods"]);
    let any = collections.fetch("any", &options, &params).await?;
    for item in &any.items {
        info!(
            kind = ?item.kind(),
            namespace = ?item.namespace(),
            name = ?item.name(),
            cluster = ?item.cluster(),
            "resource"
        );
    }

    Ok(())
}
