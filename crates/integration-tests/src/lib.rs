//! Integration tests for the JWT Pizza client.
//!
//! The tests run the client against [`MockService`], an in-process HTTP
//! server that records every request and answers from a table of canned
//! responses. Nothing external is needed:
//!
//! ```bash
//! cargo test -p jwt-pizza-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `auth` - login, registration, logout and token persistence
//! - `gateway` - URL resolution, headers and error mapping
//! - `orders` - menu, ordering, verification and docs
//! - `franchises` - franchise, store and user administration
//! - `session` - session restore and state transitions

#![allow(clippy::unwrap_used, clippy::missing_panics_doc)]

use std::collections::HashMap;
use std::sync::Arc;

use axum::Router;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderMap, HeaderName, Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use jwt_pizza_client::{ClientConfig, MemoryTokenStore, PizzaClient, Session, TokenStore};
use serde_json::{Value, json};
use tokio::net::TcpListener;
use tokio::sync::Mutex;
use url::Url;

pub mod fixtures;

/// A request as the mock service received it.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub query: Option<String>,
    pub authorization: Option<String>,
    pub content_type: Option<String>,
    /// Parsed JSON body, `Value::Null` when empty or not JSON.
    pub body: Value,
}

impl RecordedRequest {
    /// The bearer token sent, if any.
    #[must_use]
    pub fn bearer(&self) -> Option<&str> {
        self.authorization
            .as_deref()
            .and_then(|h| h.strip_prefix("Bearer "))
    }
}

#[derive(Debug, Clone)]
struct Canned {
    status: StatusCode,
    content_type: &'static str,
    body: String,
}

#[derive(Default)]
struct MockState {
    routes: Mutex<HashMap<(String, String), Canned>>,
    requests: Mutex<Vec<RecordedRequest>>,
}

/// In-process stand-in for the pizza service or the pizza factory.
///
/// Unconfigured routes answer 404 `{"message":"unknown endpoint"}`.
pub struct MockService {
    url: String,
    state: Arc<MockState>,
}

impl MockService {
    /// Bind an ephemeral port and start serving.
    pub async fn start() -> Self {
        let state = Arc::new(MockState::default());
        let app = Router::new()
            .fallback(record_and_respond)
            .with_state(Arc::clone(&state));

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let address = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            url: format!("http://{address}"),
            state,
        }
    }

    /// Base URL, without a trailing slash.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Answer `method path` with a JSON body.
    ///
    /// `path` may carry a query string (`/api/user?page=1&limit=10&name=*`);
    /// such a route wins over the bare path for requests with that exact
    /// query.
    pub async fn respond(&self, method: &str, path: &str, status: u16, body: Value) {
        self.canned(method, path, status, "application/json", body.to_string())
            .await;
    }

    /// Answer `method path` with a raw body of the given content type.
    pub async fn respond_raw(
        &self,
        method: &str,
        path: &str,
        status: u16,
        content_type: &'static str,
        body: &str,
    ) {
        self.canned(method, path, status, content_type, body.to_string())
            .await;
    }

    async fn canned(
        &self,
        method: &str,
        path: &str,
        status: u16,
        content_type: &'static str,
        body: String,
    ) {
        let canned = Canned {
            status: StatusCode::from_u16(status).unwrap(),
            content_type,
            body,
        };
        self.state
            .routes
            .lock()
            .await
            .insert((method.to_string(), path.to_string()), canned);
    }

    /// Everything received so far, oldest first.
    pub async fn requests(&self) -> Vec<RecordedRequest> {
        self.state.requests.lock().await.clone()
    }

    /// Requests received for `method path`.
    pub async fn requests_to(&self, method: &str, path: &str) -> Vec<RecordedRequest> {
        self.requests()
            .await
            .into_iter()
            .filter(|r| r.method == method && r.path == path)
            .collect()
    }

    /// Wait until a request for `method path` arrives, for fire-and-forget
    /// calls.
    pub async fn wait_for(&self, method: &str, path: &str) -> RecordedRequest {
        for _ in 0..200 {
            if let Some(request) = self.requests_to(method, path).await.pop() {
                return request;
            }
            tokio::time::sleep(std::time::Duration::from_millis(10)).await;
        }
        panic!("no {method} {path} request arrived");
    }
}

async fn record_and_respond(
    State(state): State<Arc<MockState>>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let header = |name: HeaderName| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    };

    let recorded = RecordedRequest {
        method: method.to_string(),
        path: uri.path().to_string(),
        query: uri.query().map(str::to_string),
        authorization: header(AUTHORIZATION),
        content_type: header(CONTENT_TYPE),
        body: serde_json::from_slice(&body).unwrap_or(Value::Null),
    };
    let key = (recorded.method.clone(), recorded.path.clone());
    let query_key = recorded
        .query
        .as_ref()
        .map(|q| (recorded.method.clone(), format!("{}?{q}", recorded.path)));
    state.requests.lock().await.push(recorded);

    let routes = state.routes.lock().await;
    let canned = query_key
        .and_then(|k| routes.get(&k))
        .or_else(|| routes.get(&key))
        .cloned();
    drop(routes);

    match canned {
        Some(canned) => (
            canned.status,
            [(CONTENT_TYPE, canned.content_type)],
            canned.body,
        )
            .into_response(),
        None => (
            StatusCode::NOT_FOUND,
            [(CONTENT_TYPE, "application/json")],
            json!({ "message": "unknown endpoint" }).to_string(),
        )
            .into_response(),
    }
}

/// A pizza service and a pizza factory, with a client pointed at both.
pub struct TestContext {
    pub service: MockService,
    pub factory: MockService,
    pub tokens: Arc<dyn TokenStore>,
    pub client: PizzaClient,
}

impl TestContext {
    /// Fresh mocks and an empty in-memory token store.
    pub async fn new() -> Self {
        Self::with_store(Arc::new(MemoryTokenStore::new())).await
    }

    /// Fresh mocks and an in-memory store already holding `token`.
    pub async fn logged_in(token: &str) -> Self {
        Self::with_store(Arc::new(MemoryTokenStore::with_token(token))).await
    }

    /// Fresh mocks around the given store.
    pub async fn with_store(tokens: Arc<dyn TokenStore>) -> Self {
        let service = MockService::start().await;
        let factory = MockService::start().await;
        let config = ClientConfig::new(
            Url::parse(service.url()).unwrap(),
            Url::parse(factory.url()).unwrap(),
        );
        let client = PizzaClient::new(&config, Arc::clone(&tokens)).unwrap();

        Self {
            service,
            factory,
            tokens,
            client,
        }
    }

    /// A session over this context's client.
    #[must_use]
    pub fn session(&self) -> Session {
        Session::new(self.client.clone())
    }

    /// The stored token in plain text.
    #[must_use]
    pub fn stored_token(&self) -> Option<String> {
        use secrecy::ExposeSecret;

        self.tokens
            .load()
            .unwrap()
            .map(|t| t.expose_secret().to_string())
    }
}
