//! List options builder for clusterpedia search queries
//!
//! Filters, ordering and pagination are accumulated on a [`ListOptionsBuilder`]
//! and rendered once into an immutable [`ListOptions`] that is attached to a
//! list or fetch request.

use crate::keys::{param, SearchLabel};
use crate::selector::{self, Combine, Requirement};
use crate::{Error, Result};
use kube::api::ListParams;
use std::collections::BTreeMap;
use tracing::trace;

/// Builder for clusterpedia list options
///
/// Every filter call appends; nothing is replaced or deduplicated except the
/// values of a single field selector, which form a set.
///
/// # Example
///
/// ```
/// use clusterpedia_client::ListOptionsBuilder;
///
/// let options = ListOptionsBuilder::new()
///     .clusters(["cluster-1", "cluster-2"])
///     .namespaces(["default"])
///     .order_by("created_at", true)
///     .limit(5)
///     .options();
///
/// assert_eq!(
///     options.label_selector.as_deref(),
///     Some(
///         "search.clusterpedia.io/clusters in (cluster-1,cluster-2),\
///          search.clusterpedia.io/namespaces=default,\
///          search.clusterpedia.io/orderby=-created_at"
///     )
/// );
/// assert_eq!(options.limit, Some(5));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ListOptionsBuilder {
    clusters: Vec<String>,
    namespaces: Vec<String>,
    names: Vec<String>,
    fuzzy_names: Vec<String>,
    owner_uid: Option<String>,
    owner_name: Option<String>,
    owner_seniority: Option<i64>,
    since: Option<String>,
    before: Option<String>,
    order_by: Vec<(String, bool)>,
    with_remaining_count: bool,
    field_selectors: BTreeMap<String, Vec<String>>,
    label_selector: Option<String>,
    limit: Option<i64>,
    offset: Option<i64>,
    timeout_seconds: Option<i64>,
}

impl ListOptionsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict results to resources from these clusters
    pub fn clusters<I, S>(mut self, clusters: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.clusters.extend(clusters.into_iter().map(Into::into));
        self
    }

    /// Restrict results to these namespaces
    pub fn namespaces<I, S>(mut self, namespaces: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.namespaces.extend(namespaces.into_iter().map(Into::into));
        self
    }

    /// Match resources by exact name
    pub fn names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.names.extend(names.into_iter().map(Into::into));
        self
    }

    /// Match resources whose name contains any of these fragments
    pub fn fuzzy_names<I, S>(mut self, fragments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fuzzy_names.extend(fragments.into_iter().map(Into::into));
        self
    }

    /// Only resources owned by the object with this UID
    pub fn owner_uid(mut self, uid: impl Into<String>) -> Self {
        self.owner_uid = Some(uid.into());
        self
    }

    /// Only resources owned by an object with this name
    pub fn owner_name(mut self, name: impl Into<String>) -> Self {
        self.owner_name = Some(name.into());
        self
    }

    /// How many ownership levels above the matched resources the owner sits
    ///
    /// With `1`, an owner filter on a Deployment matches its Pods rather than
    /// its ReplicaSets.
    pub fn owner_seniority(mut self, seniority: i64) -> Self {
        self.owner_seniority = Some(seniority);
        self
    }

    /// Only resources created at or after this time (`2022-03-24` or RFC 3339)
    pub fn since(mut self, time: impl Into<String>) -> Self {
        self.since = Some(time.into());
        self
    }

    /// Only resources created before this time (`2022-03-24` or RFC 3339)
    pub fn before(mut self, time: impl Into<String>) -> Self {
        self.before = Some(time.into());
        self
    }

    /// Add a sort key; earlier calls take priority
    pub fn order_by(mut self, field: impl Into<String>, descending: bool) -> Self {
        self.order_by.push((field.into(), descending));
        self
    }

    /// Ask the server to report how many items remain past this page
    pub fn remaining_count(mut self) -> Self {
        self.with_remaining_count = true;
        self
    }

    /// Accept any of `values` for the given field
    ///
    /// Repeated calls for the same field union their values.
    pub fn field_selector<I, S>(mut self, field: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let accepted = self.field_selectors.entry(field.into()).or_default();
        for value in values {
            let value = value.into();
            if !accepted.contains(&value) {
                accepted.push(value);
            }
        }
        self
    }

    /// Combine a caller-provided label selector with the derived terms
    pub fn label_selector(mut self, selector: impl Into<String>) -> Self {
        self.label_selector = Some(selector.into());
        self
    }

    /// Page size; not validated locally
    pub fn limit(mut self, limit: i64) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Number of matching items to skip; not validated locally
    pub fn offset(mut self, offset: i64) -> Self {
        self.offset = Some(offset);
        self
    }

    /// Server-side timeout for the list call
    pub fn timeout(mut self, seconds: i64) -> Self {
        self.timeout_seconds = Some(seconds);
        self
    }

    fn search_values(&self, label: SearchLabel) -> Vec<String> {
        match label {
            SearchLabel::Clusters => self.clusters.clone(),
            SearchLabel::Namespaces => self.namespaces.clone(),
            SearchLabel::Names => self.names.clone(),
            SearchLabel::FuzzyName => self.fuzzy_names.clone(),
            SearchLabel::OwnerUid => self.owner_uid.iter().cloned().collect(),
            SearchLabel::OwnerName => self.owner_name.iter().cloned().collect(),
            SearchLabel::OwnerSeniority => {
                self.owner_seniority.iter().map(i64::to_string).collect()
            }
            SearchLabel::Since => self.since.iter().cloned().collect(),
            SearchLabel::Before => self.before.iter().cloned().collect(),
            SearchLabel::OrderBy => self
                .order_by
                .iter()
                .map(|(field, descending)| {
                    if *descending {
                        format!("-{}", field)
                    } else {
                        field.clone()
                    }
                })
                .collect(),
            SearchLabel::WithRemainingCount => {
                if self.with_remaining_count {
                    vec!["true".to_string()]
                } else {
                    Vec::new()
                }
            }
        }
    }

    /// Render the accumulated state
    ///
    /// An empty builder renders options equivalent to an unfiltered list.
    pub fn options(self) -> ListOptions {
        let derived = SearchLabel::ALL
            .into_iter()
            .filter_map(|label| {
                let values = self.search_values(label);
                if values.is_empty() {
                    return None;
                }
                let combine = if label.is_single_valued() {
                    Combine::Replace
                } else {
                    Combine::Extend
                };
                Some((Requirement::new(label.key(), values), combine))
            })
            .collect();

        let label_selector = selector::merge(self.label_selector.as_deref(), derived);

        let field_terms: Vec<String> = self
            .field_selectors
            .into_iter()
            .filter(|(_, values)| !values.is_empty())
            .map(|(field, values)| Requirement::new(field, values).to_string())
            .collect();
        let field_selector = (!field_terms.is_empty()).then(|| field_terms.join(","));

        let options = ListOptions {
            label_selector,
            field_selector,
            limit: self.limit,
            offset: self.offset,
            timeout_seconds: self.timeout_seconds,
        };
        trace!("Rendered list options: {:?}", options);
        options
    }
}

/// Rendered list options, ready to attach to a request
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListOptions {
    pub label_selector: Option<String>,
    pub field_selector: Option<String>,
    pub limit: Option<i64>,
    /// Sent as the continuation token, which clusterpedia reads as an offset
    pub offset: Option<i64>,
    pub timeout_seconds: Option<i64>,
}

impl ListOptions {
    /// Unencoded query parameters for these options, unset ones omitted
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(selector) = &self.label_selector {
            pairs.push((param::LABEL_SELECTOR, selector.clone()));
        }
        if let Some(selector) = &self.field_selector {
            pairs.push((param::FIELD_SELECTOR, selector.clone()));
        }
        if let Some(limit) = self.limit {
            pairs.push((param::LIMIT, limit.to_string()));
        }
        if let Some(offset) = self.offset {
            pairs.push((param::CONTINUE, offset.to_string()));
        }
        if let Some(timeout) = self.timeout_seconds {
            pairs.push((param::TIMEOUT_SECONDS, timeout.to_string()));
        }
        pairs
    }
}

impl TryFrom<&ListOptions> for ListParams {
    type Error = Error;

    fn try_from(options: &ListOptions) -> Result<Self> {
        let to_u32 = |name: &str, value: Option<i64>| {
            value
                .map(|v| {
                    u32::try_from(v).map_err(|_| {
                        Error::InvalidRequest(format!("{} {} is out of range", name, v))
                    })
                })
                .transpose()
        };

        let mut params = ListParams::default();
        params.label_selector = options.label_selector.clone();
        params.field_selector = options.field_selector.clone();
        params.limit = to_u32(param::LIMIT, options.limit)?;
        params.timeout = to_u32(param::TIMEOUT_SECONDS, options.timeout_seconds)?;
        params.continue_token = options.offset.map(|offset| offset.to_string());
        Ok(params)
    }
}

impl TryFrom<ListOptions> for ListParams {
    type Error = Error;

    fn try_from(options: ListOptions) -> Result<Self> {
        ListParams::try_from(&options)
    }
}
