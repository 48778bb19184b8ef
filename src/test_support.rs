//! In-process mock backend for client tests.
//!
//! Binds an Axum app on `127.0.0.1:0` that answers every request with one
//! canned reply and records what it received.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::Router;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderMap, Method, StatusCode, Uri};
use axum::response::IntoResponse;
use serde_json::Value;

use crate::config::ClientConfig;
use crate::http::ApiClient;
use crate::navigate::RecordingNavigator;
use crate::notify::RecordingSink;
use crate::session::{MemoryTokenStore, SessionContext};

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub query: Option<String>,
    pub token: Option<String>,
    pub content_type: Option<String>,
    pub body: Option<Value>,
}

#[derive(Clone)]
struct MockState {
    status: StatusCode,
    body: String,
    delay: Duration,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

pub struct MockBackend {
    pub base_url: String,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl MockBackend {
    /// Start a backend answering every request with `status` and `body`.
    pub async fn start(status: u16, body: &str) -> Self {
        Self::start_with_delay(status, body, Duration::ZERO).await
    }

    pub async fn start_with_delay(status: u16, body: &str, delay: Duration) -> Self {
        let requests = Arc::new(Mutex::new(Vec::new()));
        let state = MockState {
            status: StatusCode::from_u16(status).expect("valid status"),
            body: body.to_owned(),
            delay,
            requests: requests.clone(),
        };
        let app = Router::new().fallback(record).with_state(state);
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.expect("bind mock backend");
        let addr = listener.local_addr().expect("mock backend addr");
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("mock backend failed");
        });
        Self { base_url: format!("http://{addr}"), requests }
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().expect("requests mutex should lock").clone()
    }

    pub fn single_request(&self) -> RecordedRequest {
        let requests = self.requests();
        assert_eq!(requests.len(), 1, "expected exactly one request, got {requests:?}");
        requests.into_iter().next().expect("one request")
    }
}

async fn record(
    State(state): State<MockState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> impl IntoResponse {
    let header = |name: &str| headers.get(name).and_then(|v| v.to_str().ok()).map(str::to_owned);
    let recorded = RecordedRequest {
        method: method.to_string(),
        path: uri.path().to_owned(),
        query: uri.query().map(str::to_owned),
        token: header("token"),
        content_type: header("content-type"),
        body: serde_json::from_slice(&body).ok(),
    };
    state.requests.lock().expect("requests mutex should lock").push(recorded);
    if !state.delay.is_zero() {
        tokio::time::sleep(state.delay).await;
    }
    (state.status, [(CONTENT_TYPE, "application/json")], state.body)
}

/// Client wired to recording fakes, plus handles to inspect them.
pub struct TestClient {
    pub client: ApiClient,
    pub session: SessionContext,
    pub sink: Arc<RecordingSink>,
    pub navigator: Arc<RecordingNavigator>,
}

impl TestClient {
    pub fn new(base_url: &str, token: Option<&str>) -> Self {
        Self::with_config(ClientConfig::new(base_url).expect("valid base url"), token)
    }

    pub fn with_config(config: ClientConfig, token: Option<&str>) -> Self {
        let session = match token {
            Some(token) => SessionContext::new(MemoryTokenStore::with_token(token)),
            None => SessionContext::in_memory(),
        };
        let sink = Arc::new(RecordingSink::new());
        let navigator = Arc::new(RecordingNavigator::new());
        let client = ApiClient::new(&config, session.clone())
            .expect("client builds")
            .with_sink(sink.clone())
            .with_navigator(navigator.clone());
        Self { client, session, sink, navigator }
    }
}
