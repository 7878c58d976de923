//! Mock tower service standing in for a clusterpedia API server in tests,
//! plus a log capture for asserting on emitted events

use bytes::Bytes;
use futures::future::{BoxFuture, FutureExt};
use http::{Request, Response, StatusCode};
use http_body_util::Full;
use kube::client::Body as KubeBody;
use serde_json::Value;
use std::collections::HashMap;
use std::io;
use std::sync::{Arc, Mutex};
use std::task::{Context, Poll};
use tower::Service;

/// Records every request URI and answers with canned JSON keyed by path
#[derive(Clone, Default)]
pub struct MockService {
    responses: Arc<HashMap<String, (StatusCode, Value)>>,
    requests: Arc<Mutex<Vec<String>>>,
}

impl MockService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Respond to GET `path` with `body` and status 200
    pub fn with_response(self, path: &str, body: Value) -> Self {
        self.with_status(path, StatusCode::OK, body)
    }

    pub fn with_status(mut self, path: &str, status: StatusCode, body: Value) -> Self {
        Arc::make_mut(&mut self.responses).insert(path.to_string(), (status, body));
        self
    }

    /// Request URIs (path and query) seen so far, percent-decoded
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    /// Build a `kube::Client` backed by this service
    pub fn client(&self) -> kube::Client {
        kube::Client::new(self.clone(), "default")
    }

    fn respond(&self, req: &Request<KubeBody>) -> Response<Full<Bytes>> {
        let uri = req
            .uri()
            .path_and_query()
            .map(|pq| pq.as_str().to_string())
            .unwrap_or_default();
        let decoded = urlencoding::decode(&uri)
            .map(|u| u.into_owned())
            .unwrap_or(uri);
        self.requests.lock().unwrap().push(decoded);

        if req.method() != http::Method::GET {
            return Self::status_response(StatusCode::METHOD_NOT_ALLOWED, "Method not allowed");
        }

        match self.responses.get(req.uri().path()) {
            Some((status, body)) if status.is_success() => Response::builder()
                .status(*status)
                .header("Content-Type", "application/json")
                .body(Full::new(Bytes::from(body.to_string())))
                .unwrap(),
            Some((status, body)) => {
                let message = body
                    .get("message")
                    .and_then(Value::as_str)
                    .unwrap_or("request failed");
                Self::status_response(*status, message)
            }
            None => Self::status_response(
                StatusCode::NOT_FOUND,
                "the server could not find the requested resource",
            ),
        }
    }

    fn status_response(status: StatusCode, message: &str) -> Response<Full<Bytes>> {
        let reason = if status == StatusCode::NOT_FOUND {
            "NotFound"
        } else {
            "BadRequest"
        };
        let body = serde_json::json!({
            "kind": "Status",
            "apiVersion": "v1",
            "status": "Failure",
            "message": message,
            "reason": reason,
            "code": status.as_u16()
        });

        Response::builder()
            .status(status)
            .header("Content-Type", "application/json")
            .body(Full::new(Bytes::from(body.to_string())))
            .unwrap()
    }
}

impl Service<Request<KubeBody>> for MockService {
    type Response = Response<Full<Bytes>>;
    type Error = Box<dyn std::error::Error + Send + Sync>;
    type Future = BoxFuture<'static, std::result::Result<Self::Response, Self::Error>>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<std::result::Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, req: Request<KubeBody>) -> Self::Future {
        let response = self.respond(&req);
        async move { Ok(response) }.boxed()
    }
}

/// In-memory sink for formatted log lines
#[derive(Clone, Default)]
pub struct LogCapture {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl LogCapture {
    /// Subscriber that writes debug-and-above events to this capture
    pub fn subscriber(&self) -> impl tracing::Subscriber + Send + Sync + 'static {
        let writer = self.clone();
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish()
    }

    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.buffer.lock().unwrap()).into_owned()
    }
}

impl io::Write for LogCapture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
