//! Extra query parameters for resource and collection requests

use crate::keys::param;

/// Query parameters sent alongside [`ListOptions`](crate::ListOptions)
///
/// Covers the clusterpedia-specific switches (`onlyMetadata`, `groups`,
/// `resources`, `clusters`) and arbitrary pass-through parameters. Repeated
/// parameters are sent repeatedly.
///
/// # Example
///
/// ```
/// use clusterpedia_client::FetchParams;
///
/// let params = FetchParams::new()
///     .only_metadata()
///     .groups(["apps", ""])
///     .resources(["apps/v1/deployments", "/pods"]);
///
/// assert_eq!(
///     params.pairs(),
///     &[
///         ("onlyMetadata".to_string(), "true".to_string()),
///         ("groups".to_string(), "apps,".to_string()),
///         ("resources".to_string(), "apps/v1/deployments,/pods".to_string()),
///     ]
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FetchParams {
    pairs: Vec<(String, String)>,
}

impl FetchParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return only object metadata for each item
    pub fn only_metadata(self) -> Self {
        self.param(param::ONLY_METADATA, "true")
    }

    /// Restrict a collection to these `<group>[/<version>]` entries
    ///
    /// The core group is the empty string.
    pub fn groups<I, S>(self, groups: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.joined(param::GROUPS, groups)
    }

    /// Restrict a collection to these `<group>[/<version>]/<resource>` entries
    pub fn resources<I, S>(self, resources: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.joined(param::RESOURCES, resources)
    }

    /// Restrict results to these clusters through the query parameter form
    pub fn clusters<I, S>(self, clusters: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.joined(param::CLUSTERS, clusters)
    }

    /// Add an arbitrary parameter
    pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.pairs.push((key.into(), value.into()));
        self
    }

    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    fn joined<I, S>(self, key: &str, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let values: Vec<String> = values.into_iter().map(|v| v.as_ref().to_string()).collect();
        if values.is_empty() {
            return self;
        }
        self.param(key, values.join(","))
    }
}

impl<K, V> FromIterator<(K, V)> for FetchParams
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self {
            pairs: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
