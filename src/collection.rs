//! Collection resources: aggregated, possibly heterogeneous resource sets
//!
//! A collection such as `workloads`, `kuberesources` or `any` groups several
//! resource types across every imported cluster. Fetching one returns its items
//! as [`RawItem`]s.

use crate::client::send;
use crate::keys::{self, param};
use crate::options::ListOptions;
use crate::params::FetchParams;
use crate::raw::RawItem;
use crate::request::{self, UrlLog};
use crate::Result;
use k8s_openapi::apimachinery::pkg::apis::meta::v1::{ListMeta, ObjectMeta};
use serde::{Deserialize, Serialize};

/// One resource type included in a collection
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionResourceType {
    #[serde(default)]
    pub group: String,
    #[serde(default)]
    pub version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default)]
    pub resource: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionResource {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default)]
    pub metadata: ObjectMeta,
    #[serde(default)]
    pub resource_types: Vec<CollectionResourceType>,
    #[serde(default)]
    pub items: Vec<RawItem>,
    #[serde(default, rename = "continue", skip_serializing_if = "Option::is_none")]
    pub continue_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remaining_item_count: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionResourceList {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default)]
    pub metadata: ListMeta,
    #[serde(default)]
    pub items: Vec<CollectionResource>,
}

/// Client for `/apis/clusterpedia.io/v1beta1/collectionresources`
#[derive(Clone)]
pub struct CollectionResources {
    client: kube::Client,
    log: UrlLog,
}

impl CollectionResources {
    pub(crate) fn new(client: kube::Client, log: UrlLog) -> Self {
        Self { client, log }
    }

    /// Get one collection with no filters applied
    pub async fn get(&self, name: &str) -> Result<CollectionResource> {
        let path = format!("{}/{}", keys::COLLECTION_RESOURCES_PATH, name);
        let req = request::get(
            &path,
            &ListOptions::default(),
            &FetchParams::default(),
            &self.log,
            "CollectionResource.Get",
        )?;
        send(&self.client, req).await
    }

    /// List the collections the server offers
    pub async fn list(&self, options: &ListOptions) -> Result<CollectionResourceList> {
        let mut params = FetchParams::new();
        if let Some(timeout) = options.timeout_seconds {
            params = params.param(param::TIMEOUT, format!("{}s", timeout));
        }
        let req = request::get(
            keys::COLLECTION_RESOURCES_PATH,
            options,
            &params,
            &self.log,
            "CollectionResource.List",
        )?;
        send(&self.client, req).await
    }

    /// Fetch the items of a collection, filtered by `options` and `params`
    pub async fn fetch(
        &self,
        name: &str,
        options: &ListOptions,
        params: &FetchParams,
    ) -> Result<CollectionResource> {
        let path = format!("{}/{}", keys::COLLECTION_RESOURCES_PATH, name);
        let req = request::get(&path, options, params, &self.log, "CollectionResource.Fetch")?;
        send(&self.client, req).await
    }
}
