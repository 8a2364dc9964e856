//! Gateway to the pizza service and pizza factory.
//!
//! Every operation funnels through [`PizzaClient::call`], which is the only
//! place that:
//!
//! - resolves request paths against the configured base URL
//! - attaches the bearer token from the injected [`TokenStore`]
//! - turns non-2xx responses and transport failures into [`ServiceError`]
//!
//! Operations are grouped by resource:
//!
//! - [`auth`] - login, register, logout
//! - [`users`] - current user, user administration
//! - [`orders`] - menu, ordering, order history, verification, docs
//! - [`franchises`] - franchises and stores
//!
//! There are no retries, timeouts or backoff: one attempt per call.

pub mod auth;
pub mod franchises;
pub mod orders;
pub mod users;

use std::sync::Arc;

use reqwest::header::{CONTENT_TYPE, HeaderValue};
use reqwest::{Method, RequestBuilder};
use secrecy::{ExposeSecret, SecretString};
use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;
use tracing::{debug, instrument, warn};
use url::Url;

use crate::config::ClientConfig;
use crate::error::ServiceError;
use crate::store::TokenStore;

/// Client for the JWT Pizza services.
///
/// Cheap to clone; clones share the HTTP connection pool, cookie jar and
/// token store, so independent operations can run concurrently.
#[derive(Clone)]
pub struct PizzaClient {
    inner: Arc<PizzaClientInner>,
}

struct PizzaClientInner {
    http: reqwest::Client,
    service_url: Url,
    factory_url: Url,
    tokens: Arc<dyn TokenStore>,
}

impl std::fmt::Debug for PizzaClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PizzaClient")
            .field("service_url", &self.inner.service_url.as_str())
            .field("factory_url", &self.inner.factory_url.as_str())
            .field("tokens", &self.inner.tokens)
            .finish_non_exhaustive()
    }
}

impl PizzaClient {
    /// Create a client for the configured services.
    ///
    /// The underlying HTTP client keeps a cookie store so cookies set by
    /// the services are sent back on later requests.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client fails to build.
    pub fn new(config: &ClientConfig, tokens: Arc<dyn TokenStore>) -> Result<Self, ServiceError> {
        let http = reqwest::Client::builder().cookie_store(true).build()?;

        Ok(Self {
            inner: Arc::new(PizzaClientInner {
                http,
                service_url: config.service_url.clone(),
                factory_url: config.factory_url.clone(),
                tokens,
            }),
        })
    }

    /// The token store this client reads credentials from.
    #[must_use]
    pub fn tokens(&self) -> &Arc<dyn TokenStore> {
        &self.inner.tokens
    }

    #[must_use]
    pub fn service_url(&self) -> &Url {
        &self.inner.service_url
    }

    #[must_use]
    pub fn factory_url(&self) -> &Url {
        &self.inner.factory_url
    }

    /// Resolve a request path to a full URL.
    ///
    /// Absolute `http`/`https` URLs are used verbatim. Anything else is
    /// appended to the service base URL, keeping any path prefix the base
    /// carries.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::InvalidUrl` if the result is not a valid URL.
    pub fn resolve(&self, path: &str) -> Result<Url, ServiceError> {
        if let Ok(url) = Url::parse(path)
            && matches!(url.scheme(), "http" | "https")
        {
            return Ok(url);
        }
        join(&self.inner.service_url, path)
    }

    /// Absolute URL for a path on the pizza factory.
    fn factory_path(&self, path: &str) -> String {
        format!(
            "{}{path}",
            self.inner.factory_url.as_str().trim_end_matches('/')
        )
    }

    /// The stored token, if any.
    ///
    /// A store that cannot be read is treated as holding no token.
    fn current_token(&self) -> Option<SecretString> {
        self.inner.tokens.load().unwrap_or_else(|e| {
            warn!(error = %e, "Could not read session token; sending request unauthenticated");
            None
        })
    }

    /// Persist a token returned by the service.
    fn persist_token(&self, token: &str) -> Result<(), ServiceError> {
        self.inner.tokens.save(token)?;
        Ok(())
    }

    /// Build a request with the JSON content type, the bearer token (when
    /// one is stored) and the serialized body.
    fn request<B: Serialize + ?Sized>(
        &self,
        path: &str,
        method: Method,
        body: Option<&B>,
    ) -> Result<RequestBuilder, ServiceError> {
        let url = self.resolve(path)?;

        let mut request = self
            .inner
            .http
            .request(method, url)
            .header(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        if let Some(token) = self.current_token() {
            request = request.bearer_auth(token.expose_secret());
        }

        if let Some(body) = body {
            let bytes = serde_json::to_vec(body).map_err(|e| ServiceError::Encode(e.to_string()))?;
            request = request.body(bytes);
        }

        Ok(request)
    }

    /// Call an endpoint and decode its JSON response as `T`.
    ///
    /// # Errors
    ///
    /// - `ServiceError::Api` with the status and the body's `message` on a
    ///   non-2xx response
    /// - `ServiceError::Transport` / `ServiceError::Decode` when the request
    ///   fails or the body is not the expected JSON
    #[instrument(skip(self, body), fields(method = %method))]
    pub async fn call<T, B>(
        &self,
        path: &str,
        method: Method,
        body: Option<&B>,
    ) -> Result<T, ServiceError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let request = self.request(path, method, body)?;
        Self::execute(request).await
    }

    /// `GET` an endpoint.
    ///
    /// # Errors
    ///
    /// See [`call`](Self::call).
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ServiceError> {
        self.call::<T, ()>(path, Method::GET, None).await
    }

    /// Send the request and decode the reply.
    ///
    /// The body must be JSON whatever the status: an empty or non-JSON body
    /// is a [`ServiceError::Decode`], so it reports the internal code rather
    /// than the HTTP status.
    async fn execute<T: DeserializeOwned>(request: RequestBuilder) -> Result<T, ServiceError> {
        let response = request.send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;

        debug!(status = status.as_u16(), len = bytes.len(), "Response received");

        let body: Value =
            serde_json::from_slice(&bytes).map_err(|e| ServiceError::Decode(e.to_string()))?;

        if !status.is_success() {
            return Err(ServiceError::Api {
                status: status.as_u16(),
                message: error_message(status, &body),
            });
        }

        serde_json::from_value(body).map_err(|e| ServiceError::Decode(e.to_string()))
    }
}

/// Append `path` to `base`, with exactly one `/` between them.
fn join(base: &Url, path: &str) -> Result<Url, ServiceError> {
    let base = base.as_str().trim_end_matches('/');
    let joined = if path.starts_with('/') {
        format!("{base}{path}")
    } else {
        format!("{base}/{path}")
    };

    Url::parse(&joined).map_err(|e| ServiceError::InvalidUrl(format!("{joined}: {e}")))
}

/// The `message` of an error body, else the status reason phrase.
fn error_message(status: reqwest::StatusCode, body: &Value) -> String {
    body.get("message")
        .and_then(Value::as_str)
        .map_or_else(
            || {
                status
                    .canonical_reason()
                    .map_or_else(|| status.as_str().to_string(), str::to_string)
            },
            str::to_string,
        )
}

/// Encode one URL path segment.
fn segment(value: &impl std::fmt::Display) -> String {
    urlencoding::encode(&value.to_string()).into_owned()
}
