//! Lists Deployments and Pods across clusters through clusterpedia.
//!
//! Run with `RUST_LOG=clusterpedia_client=debug cargo run --example list_resources`
//! to see the request URLs.

use clusterpedia_client::{ClusterpediaClient, FetchParams, ListOptionsBuilder, GVR};
use k8s_openapi::api::apps::v1::Deployment;
use k8s_openapi::api::core::v1::Pod;
use kube::core::ObjectList;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let client = ClusterpediaClient::try_default().await?;
    let custom = client.custom().debug();
    let deployments = custom.resource(GVR::new("apps", "v1", "deployments"));

    // First page of Deployments in `default`, newest first, with a remaining count
    let options = ListOptionsBuilder::new()
        .offset(0)
        .limit(5)
        .remaining_count()
        .order_by("created_at", true)
        .order_by("namespace", false)
        .options();
    let deploys: ObjectList<Deployment> = deployments
        .namespace("default")
        .list(&options, &FetchParams::default())
        .await?;
    for deploy in &deploys.items {
        println!(
            "namespace: {}, name: {}",
            deploy.metadata.namespace.as_deref().unwrap_or_default(),
            deploy.metadata.name.as_deref().unwrap_or_default()
        );
    }

    // Running Pods from one cluster, metadata only
    let options = ListOptionsBuilder::new()
        .offset(0)
        .limit(5)
        .remaining_count()
        .clusters(["k3s2"])
        .field_selector("status.phase", ["Running"])
        .options();
    let pods: ObjectList<Pod> = custom
        .resource(GVR::new("", "v1", "pods"))
        .namespace("default")
        .list(&options, &FetchParams::new().only_metadata())
        .await?;
    if let Some(remaining) = pods.metadata.remaining_item_count {
        println!("remaining: {}", remaining);
    }
    for pod in &pods.items {
        println!(
            "namespace: {}, name: {}",
            pod.metadata.namespace.as_deref().unwrap_or_default(),
            pod.metadata.name.as_deref().unwrap_or_default()
        );
    }

    // Exact and fuzzy name lookups across all namespaces
    for options in [
        ListOptionsBuilder::new().names(["nginx1"]).options(),
        ListOptionsBuilder::new().fuzzy_names(["ngin"]).options(),
    ] {
        let deploys: ObjectList<Deployment> =
            deployments.list(&options, &FetchParams::default()).await?;
        for deploy in &deploys.items {
            println!(
                "namespace: {}, name: {}",
                deploy.metadata.namespace.as_deref().unwrap_or_default(),
                deploy.metadata.name.as_deref().unwrap_or_default()
            );
        }
    }

    Ok(())
}
