//! HTTP client core shared by every endpoint function.
//!
//! DESIGN
//! ======
//! `send` runs a fixed pipeline:
//!
//! 1. `prepare`  - build the request: base URL + path, query, JSON body,
//!    and the raw credential in the `token` header when one is present.
//! 2. `transmit` - execute with the configured timeout.
//! 3. `classify` - pure mapping of status/body (or transport error) to a
//!    payload or an [`ApiError`].
//! 4. `dispatch` - side effects for failures: one notice to the sink, plus
//!    session teardown and a hard redirect to `/login` on 401.
//!
//! ERROR HANDLING
//! ==============
//! Every failure is returned to the caller after its side effects run.
//! Nothing is retried or deduplicated; two identical failing calls yield two
//! notices.

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;

mod descriptor;
mod error;

pub use descriptor::RequestDescriptor;
pub use error::*;

use std::sync::Arc;

use reqwest::StatusCode;
use reqwest::header::{CONTENT_TYPE, HeaderName, HeaderValue};
use serde_json::Value;
use tracing::Instrument;
use uuid::Uuid;

use crate::config::ClientConfig;
use crate::navigate::{LOGIN_PATH, LoggingNavigator, Navigator};
use crate::notify::{NotificationSink, TracingSink};
use crate::session::{SessionContext, TOKEN_KEY};

const JSON_CONTENT_TYPE: &str = "application/json";

// =============================================================================
// CLIENT
// =============================================================================

/// Single choke point for backend calls. Cheap to clone; clones share the
/// connection pool, session, sink and navigator.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    session: SessionContext,
    sink: Arc<dyn NotificationSink>,
    navigator: Arc<dyn Navigator>,
}

impl ApiClient {
    /// Build a client that reports through `tracing` and only logs redirects.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::ClientFault`] if the HTTP client cannot be built.
    pub fn new(config: &ClientConfig, session: SessionContext) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| ApiError::ClientFault(e.to_string()))?;
        Ok(Self {
            http,
            base_url: config.base_url.clone(),
            session,
            sink: Arc::new(TracingSink),
            navigator: Arc::new(LoggingNavigator),
        })
    }

    #[must_use]
    pub fn with_sink(mut self, sink: Arc<dyn NotificationSink>) -> Self {
        self.sink = sink;
        self
    }

    #[must_use]
    pub fn with_navigator(mut self, navigator: Arc<dyn Navigator>) -> Self {
        self.navigator = navigator;
        self
    }

    #[must_use]
    pub fn session(&self) -> &SessionContext {
        &self.session
    }

    /// Issue one backend call and return the unwrapped response body.
    ///
    /// # Errors
    ///
    /// Returns the classified failure after it has been reported to the sink.
    pub async fn send(&self, descriptor: RequestDescriptor) -> Result<Value, ApiError> {
        let span = tracing::debug_span!(
            "api_request",
            request_id = %Uuid::new_v4(),
            method = %descriptor.method(),
            path = descriptor.path()
        );
        async move {
            let outcome = match self.prepare(&descriptor) {
                Ok(request) => self.transmit(request).await,
                Err(error) => Err(error),
            };
            outcome.map_err(|error| {
                self.dispatch(&error);
                error
            })
        }
        .instrument(span)
        .await
    }

    // =========================================================================
    // PIPELINE
    // =========================================================================

    fn prepare(&self, descriptor: &RequestDescriptor) -> Result<reqwest::Request, ApiError> {
        if let Some(fault) = descriptor.fault() {
            return Err(ApiError::ClientFault(fault.to_owned()));
        }

        let url = format!("{}{}", self.base_url, descriptor.path());
        let mut builder = self
            .http
            .request(descriptor.method().clone(), url)
            .header(CONTENT_TYPE, JSON_CONTENT_TYPE);

        let pairs = descriptor.query_pairs().map_err(ApiError::ClientFault)?;
        if !pairs.is_empty() {
            builder = builder.query(&pairs);
        }
        if let Some(body) = descriptor.body() {
            builder = builder.json(body);
        }

        match self.session.token() {
            Some(token) => {
                let value = HeaderValue::from_str(&token)
                    .map_err(|e| ApiError::ClientFault(format!("invalid credential header: {e}")))?;
                builder = builder.header(HeaderName::from_static(TOKEN_KEY), value);
                tracing::debug!("credential attached");
            }
            None => tracing::warn!("no credential present, sending without token header"),
        }

        builder.build().map_err(|e| ApiError::ClientFault(e.to_string()))
    }

    async fn transmit(&self, request: reqwest::Request) -> Result<Value, ApiError> {
        let response = self.http.execute(request).await.map_err(|e| classify_transport(&e))?;
        let status = response.status();
        let body = response.bytes().await.map_err(|e| classify_transport(&e))?;
        tracing::debug!(status = status.as_u16(), bytes = body.len(), "response received");
        classify_response(status, &body)
    }

    fn dispatch(&self, error: &ApiError) {
        let unauthorized = matches!(error, ApiError::Unauthorized);
        if unauthorized {
            if let Err(store_error) = self.session.clear() {
                tracing::warn!(error = %store_error, "failed to clear credential after 401");
            }
        }
        self.sink.error(&error.notice());
        if unauthorized {
            self.navigator.hard_redirect(LOGIN_PATH);
        }
    }
}

// =============================================================================
// CLASSIFICATION
// =============================================================================

/// Map a delivered response to its payload or failure kind.
///
/// # Errors
///
/// Returns the failure kind for any non-2xx status.
pub fn classify_response(status: StatusCode, body: &[u8]) -> Result<Value, ApiError> {
    if status.is_success() {
        return Ok(parse_body(body));
    }
    Err(match status.as_u16() {
        401 => ApiError::Unauthorized,
        403 => ApiError::Forbidden,
        404 => ApiError::NotFound,
        500 => ApiError::ServerError,
        code => ApiError::RequestFailed { status: code, message: failure_message(status, body) },
    })
}

/// Map a transport error (no usable response) to its failure kind.
#[must_use]
pub fn classify_transport(error: &reqwest::Error) -> ApiError {
    if error.is_builder() {
        ApiError::ClientFault(error.to_string())
    } else {
        ApiError::NoResponse(error.to_string())
    }
}

/// Empty bodies unwrap to `null`; bodies that are not JSON unwrap to a string.
fn parse_body(body: &[u8]) -> Value {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Value::Null;
    }
    serde_json::from_slice(body).unwrap_or_else(|_| Value::String(String::from_utf8_lossy(body).into_owned()))
}

fn failure_message(status: StatusCode, body: &[u8]) -> String {
    serde_json::from_slice::<Value>(body)
        .ok()
        .and_then(|value| value.get("message").and_then(Value::as_str).map(str::to_owned))
        .filter(|message| !message.is_empty())
        .or_else(|| status.canonical_reason().map(str::to_owned))
        .unwrap_or_else(|| REQUEST_FAILED_FALLBACK.to_owned())
}
