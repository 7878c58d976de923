use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Kubernetes client error: {0}")]
    Kube(#[from] kube::Error),

    #[error("Failed to infer client configuration: {0}")]
    Config(#[from] kube::config::InferConfigError),

    #[error("Failed to build request: {0}")]
    Http(#[from] http::Error),

    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Object is missing required field {0}")]
    MissingField(&'static str),

    #[error("Expected object of kind {expected}, found {found}")]
    KindMismatch { expected: String, found: String },

    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl Error {
    /// HTTP status code reported by the API server, if the request reached it.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Error::Kube(kube::Error::Api(response)) => Some(response.code),
            _ => None,
        }
    }
}
