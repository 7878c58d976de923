//! Wire names understood by the clusterpedia API server
//!
//! Reserved label-selector keys, query-parameter names and API paths all live
//! here, so the mapping from a filter category to what goes on the wire has a
//! single point of change.

/// Path prefix under which clusterpedia proxies regular Kubernetes resource paths.
pub const RESOURCES_PATH: &str = "/apis/clusterpedia.io/v1beta1/resources";

/// Path of the aggregated collection resources.
pub const COLLECTION_RESOURCES_PATH: &str = "/apis/clusterpedia.io/v1beta1/collectionresources";

/// Filter categories the builder renders into the label selector
///
/// The declaration order is the order the derived terms appear in a rendered
/// selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchLabel {
    Clusters,
    Namespaces,
    Names,
    FuzzyName,
    OwnerUid,
    OwnerName,
    OwnerSeniority,
    Since,
    Before,
    OrderBy,
    WithRemainingCount,
}

impl SearchLabel {
    pub const ALL: [SearchLabel; 11] = [
        SearchLabel::Clusters,
        SearchLabel::Namespaces,
        SearchLabel::Names,
        SearchLabel::FuzzyName,
        SearchLabel::OwnerUid,
        SearchLabel::OwnerName,
        SearchLabel::OwnerSeniority,
        SearchLabel::Since,
        SearchLabel::Before,
        SearchLabel::OrderBy,
        SearchLabel::WithRemainingCount,
    ];

    /// The reserved label key for this category.
    pub const fn key(self) -> &'static str {
        match self {
            SearchLabel::Clusters => "search.clusterpedia.io/clusters",
            SearchLabel::Namespaces => "search.clusterpedia.io/namespaces",
            SearchLabel::Names => "search.clusterpedia.io/names",
            SearchLabel::FuzzyName => "internalstorage.clusterpedia.io/fuzzy-name",
            SearchLabel::OwnerUid => "search.clusterpedia.io/owner-uid",
            SearchLabel::OwnerName => "search.clusterpedia.io/owner-name",
            SearchLabel::OwnerSeniority => "search.clusterpedia.io/owner-seniority",
            SearchLabel::Since => "search.clusterpedia.io/since",
            SearchLabel::Before => "search.clusterpedia.io/before",
            SearchLabel::OrderBy => "search.clusterpedia.io/orderby",
            SearchLabel::WithRemainingCount => "search.clusterpedia.io/with-remaining-count",
        }
    }

    /// Whether the server accepts exactly one value for this key
    pub const fn is_single_valued(self) -> bool {
        matches!(
            self,
            SearchLabel::OwnerUid
                | SearchLabel::OwnerName
                | SearchLabel::OwnerSeniority
                | SearchLabel::Since
                | SearchLabel::Before
                | SearchLabel::WithRemainingCount
        )
    }
}

/// Query parameter names
pub mod param {
    pub const LABEL_SELECTOR: &str = "labelSelector";
    pub const FIELD_SELECTOR: &str = "fieldSelector";
    pub const LIMIT: &str = "limit";
    pub const CONTINUE: &str = "continue";
    pub const TIMEOUT_SECONDS: &str = "timeoutSeconds";
    pub const TIMEOUT: &str = "timeout";
    pub const ONLY_METADATA: &str = "onlyMetadata";
    pub const GROUPS: &str = "groups";
    pub const RESOURCES: &str = "resources";
    pub const CLUSTERS: &str = "clusters";
}
