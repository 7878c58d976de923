//! Typed client for the clusterpedia aggregated API.
//!
//! clusterpedia indexes resources from many Kubernetes clusters and serves them
//! through Kubernetes-style REST endpoints. Searches are expressed as reserved
//! label-selector keys and a few extra query parameters, which
//! [`ListOptionsBuilder`] renders from a fluent description.
//!
//! # Examples
//!
//! ## Building list options
//!
//! ```rust
//! use clusterpedia_client::ListOptionsBuilder;
//!
//! let options = ListOptionsBuilder::new()
//!     .offset(0)
//!     .limit(5)
//!     .remaining_count()
//!     .order_by("created_at", true)
//!     .order_by("namespace", false)
//!     .field_selector("status.phase", ["Running"])
//!     .options();
//!
//! assert_eq!(
//!     options.label_selector.as_deref(),
//!     Some(
//!         "search.clusterpedia.io/orderby in (-created_at,namespace),\
//!          search.clusterpedia.io/with-remaining-count=true"
//!     )
//! );
//! assert_eq!(options.field_selector.as_deref(), Some("status.phase=Running"));
//! ```
//!
//! ## Fetching a collection
//!
//! ```rust,no_run
//! use clusterpedia_client::{ClusterpediaClient, FetchParams, ListOptionsBuilder};
//! use k8s_openapi::api::apps::v1::Deployment;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = ClusterpediaClient::try_default().await?;
//! let options = ListOptionsBuilder::new()
//!     .namespaces(["default"])
//!     .clusters(["k3s-2"])
//!     .options();
//!
//! let workloads = client
//!     .collection_resources()
//!     .fetch("workloads", &options, &FetchParams::new().only_metadata())
//!     .await?;
//!
//! for item in &workloads.items {
//!     if item.kind() == Some("Deployment") {
//!         let deploy: Deployment = item.decode_as()?;
//!         println!("{:?}/{:?}", deploy.metadata.namespace, deploy.metadata.name);
//!     }
//! }
//! # Ok(())
//! # }
//! ```

mod client;
mod collection;
mod custom;
mod error;
pub mod keys;
mod options;
mod params;
mod raw;
mod request;
pub mod selector;

#[cfg(test)]
mod mock_service;

#[cfg(test)]
mod options_test;

pub use client::ClusterpediaClient;
pub use collection::{
    CollectionResource, CollectionResourceList, CollectionResourceType, CollectionResources,
};
pub use custom::{CustomClient, ResourceClient};
pub use error::{Error, Result};
pub use options::{ListOptions, ListOptionsBuilder};
pub use params::FetchParams;
pub use raw::{RawItem, GVK};
pub use request::GVR;
