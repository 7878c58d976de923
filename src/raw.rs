//! Raw items from heterogeneous collection responses
//!
//! A collection can mix Deployments, DaemonSets, Pods and anything else the
//! server indexes, so each item is kept as raw JSON bytes until the caller
//! inspects its kind and picks a type to decode into.

use crate::{Error, Result};
use kube::Resource;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::value::RawValue;
use std::collections::BTreeMap;

const CLUSTER_NAME_ANNOTATION: &str = "shadow.clusterpedia.io/cluster-name";

#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GVK {
    pub group: String,
    pub version: String,
    pub kind: String,
}

impl GVK {
    pub fn new(
        group: impl Into<String>,
        version: impl Into<String>,
        kind: impl Into<String>,
    ) -> Self {
        Self {
            group: group.into(),
            version: version.into(),
            kind: kind.into(),
        }
    }

    /// Split an `apiVersion` string; the core group has no prefix
    pub fn from_api_version(api_version: &str, kind: impl Into<String>) -> Self {
        match api_version.split_once('/') {
            Some((group, version)) => Self::new(group, version, kind),
            None => Self::new("", api_version, kind),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Header {
    api_version: Option<String>,
    kind: Option<String>,
    #[serde(default)]
    metadata: HeaderMeta,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct HeaderMeta {
    name: Option<String>,
    namespace: Option<String>,
    #[serde(default)]
    annotations: BTreeMap<String, String>,
}

/// One undecoded collection item
///
/// Holds the item's JSON exactly as the server sent it. The type and identity
/// fields are read once, when the item is created.
#[derive(Debug, Clone)]
pub struct RawItem {
    raw: Box<RawValue>,
    header: Header,
}

impl RawItem {
    pub fn from_raw(raw: Box<RawValue>) -> Self {
        // An item whose header has an unexpected shape reports its fields as absent
        let header = serde_json::from_str(raw.get()).unwrap_or_default();
        Self { raw, header }
    }

    /// Wrap one JSON object, keeping its bytes unchanged
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let raw: Box<RawValue> = serde_json::from_slice(bytes)?;
        Ok(Self::from_raw(raw))
    }

    pub fn api_version(&self) -> Option<&str> {
        self.header.api_version.as_deref()
    }

    pub fn kind(&self) -> Option<&str> {
        self.header.kind.as_deref()
    }

    pub fn name(&self) -> Option<&str> {
        self.header.metadata.name.as_deref()
    }

    pub fn namespace(&self) -> Option<&str> {
        self.header.metadata.namespace.as_deref()
    }

    /// Cluster the item was collected from, as annotated by clusterpedia
    pub fn cluster(&self) -> Option<&str> {
        self.header
            .metadata
            .annotations
            .get(CLUSTER_NAME_ANNOTATION)
            .map(String::as_str)
    }

    pub fn gvk(&self) -> Result<GVK> {
        let api_version = self.api_version().ok_or(Error::MissingField("apiVersion"))?;
        let kind = self.kind().ok_or(Error::MissingField("kind"))?;
        Ok(GVK::from_api_version(api_version, kind))
    }

    /// The item's JSON text as received
    pub fn as_str(&self) -> &str {
        self.raw.get()
    }

    /// The item's JSON bytes as received
    pub fn as_bytes(&self) -> &[u8] {
        self.raw.get().as_bytes()
    }

    /// Decode into any deserializable type without checking the kind
    pub fn decode<T: DeserializeOwned>(&self) -> Result<T> {
        Ok(serde_json::from_str(self.raw.get())?)
    }

    /// Decode into `K` after checking the item's `apiVersion` and `kind` match
    pub fn decode_as<K>(&self) -> Result<K>
    where
        K: Resource<DynamicType = ()> + DeserializeOwned,
    {
        let api_version = self.api_version().ok_or(Error::MissingField("apiVersion"))?;
        let kind = self.kind().ok_or(Error::MissingField("kind"))?;
        if api_version != K::api_version(&()) || kind != K::kind(&()) {
            return Err(Error::KindMismatch {
                expected: format!("{}/{}", K::api_version(&()), K::kind(&())),
                found: format!("{}/{}", api_version, kind),
            });
        }
        self.decode()
    }
}

impl PartialEq for RawItem {
    fn eq(&self, other: &Self) -> bool {
        self.raw.get() == other.raw.get()
    }
}

impl Serialize for RawItem {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.raw.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for RawItem {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        Box::<RawValue>::deserialize(deserializer).map(Self::from_raw)
    }
}
