//! Request construction for clusterpedia endpoints

use crate::options::ListOptions;
use crate::params::FetchParams;
use crate::Result;
use http::header::ACCEPT;
use http::Request;
use tracing::{debug, trace};

#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GVR {
    pub group: String,
    pub version: String,
    pub resource: String,
}

impl GVR {
    pub fn new(
        group: impl Into<String>,
        version: impl Into<String>,
        resource: impl Into<String>,
    ) -> Self {
        Self {
            group: group.into(),
            version: version.into(),
            resource: resource.into(),
        }
    }
}

/// Path segments for a resource, following Kubernetes API conventions
///
/// Examples:
/// - `api/v1/pods` (core group, all namespaces)
/// - `api/v1/namespaces/default/pods/my-pod` (core group with name)
/// - `apis/apps/v1/namespaces/default/deployments` (named group)
pub fn url_segments(gvr: &GVR, namespace: Option<&str>, name: Option<&str>) -> Vec<String> {
    let mut segments = Vec::new();
    if gvr.group.is_empty() {
        segments.push("api".to_string());
    } else {
        segments.push("apis".to_string());
        segments.push(gvr.group.clone());
    }
    segments.push(gvr.version.clone());

    if let Some(namespace) = namespace.filter(|ns| !ns.is_empty()) {
        segments.push("namespaces".to_string());
        segments.push(namespace.to_string());
    }

    segments.push(gvr.resource.clone());

    if let Some(name) = name.filter(|n| !n.is_empty()) {
        segments.push(name.to_string());
    }

    segments
}

/// Join a base path and segments into one absolute path
pub fn join_path(base: &str, segments: &[String]) -> String {
    let mut path = base.trim_end_matches('/').to_string();
    for segment in segments {
        path.push('/');
        path.push_str(segment);
    }
    path
}

/// Percent-encoded query string; parameters are sorted by name, repeats kept in order
pub fn encode_query(options: &ListOptions, params: &FetchParams) -> String {
    let mut pairs: Vec<(String, String)> = options
        .query_pairs()
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect();
    pairs.extend(params.pairs().iter().cloned());
    pairs.sort_by(|a, b| a.0.cmp(&b.0));

    pairs
        .iter()
        .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&")
}

/// Debug logging of request URLs
///
/// When enabled, every request's unescaped URL is logged at debug level,
/// prefixed with the cluster URL when it is known.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UrlLog {
    pub enabled: bool,
    pub base_url: Option<String>,
}

impl UrlLog {
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            enabled: false,
            base_url: Some(base_url.into().trim_end_matches('/').to_string()),
        }
    }

    fn log(&self, operation: &str, uri: &str) {
        if !self.enabled {
            return;
        }
        let unescaped = urlencoding::decode(uri)
            .map_or_else(|_| uri.to_string(), |u| u.into_owned());
        let url = match &self.base_url {
            Some(base) => format!("{}{}", base, unescaped),
            None => unescaped,
        };
        debug!(operation, url = %url, "clusterpedia request");
    }
}

/// Build a GET request for `path`, logging its URL through `log`
pub fn get(
    path: &str,
    options: &ListOptions,
    params: &FetchParams,
    log: &UrlLog,
    operation: &str,
) -> Result<Request<Vec<u8>>> {
    let query = encode_query(options, params);
    let uri = if query.is_empty() {
        path.to_string()
    } else {
        format!("{}?{}", path, query)
    };

    log.log(operation, &uri);
    trace!("Building GET request: {}", uri);

    let request = Request::get(uri)
        .header(ACCEPT, "application/json")
        .body(Vec::new())?;
    Ok(request)
}
