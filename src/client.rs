//! HTTP client for the Domotz public API.
//!
//! [`DomotzClient`] wraps `reqwest::Client` with the `X-Api-Key` header
//! attached to every request and executes [`BuiltRequest`]s produced by the
//! request builder. Every outcome, including transport failures, is
//! normalized into an [`ApiOutcome`]; nothing is raised past this boundary.
//!
//! ## Response shaping
//!
//! | Method     | Success payload                                        |
//! |------------|--------------------------------------------------------|
//! | `GET`      | JSON response body                                     |
//! | `HEAD`     | `{"count": n}` from the `x-entities-count` header      |
//! | `DELETE`   | `{"success": true, "status": code}`                    |
//! | `POST/PUT` | JSON body, or `{"success": true, "status": code}` when empty |
//!
//! One invocation is exactly one outbound call: no retries, no circuit
//! breaking. The attempted-call counter exists so callers can assert that
//! structural failures never reached the network.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use serde_json::{json, Value};

use crate::endpoints::Method;
use crate::request::BuiltRequest;

/// Response header carrying the entity count for `HEAD` routes.
const ENTITIES_COUNT_HEADER: &str = "x-entities-count";

/// Normalized result of one upstream call.
///
/// `Failure` without a status code means no response was obtained at all
/// (DNS, connection refused, timeout) rather than an API-level error.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiOutcome {
    Success(Value),
    Failure {
        status: Option<u16>,
        message: String,
        raw: Option<Value>,
    },
}

impl ApiOutcome {
    fn transport(err: reqwest::Error) -> Self {
        ApiOutcome::Failure {
            status: None,
            message: err.to_string(),
            raw: None,
        }
    }
}

/// HTTP client for a single Domotz API cell.
pub struct DomotzClient {
    http: reqwest::Client,
    base_url: String,
    calls: AtomicU64,
}

impl DomotzClient {
    /// Creates a client for the given API base URL and key.
    ///
    /// The key is baked into the default headers so every request carries
    /// it; a key that cannot form a valid header value is a configuration
    /// error reported to the caller.
    pub fn new(base_url: &str, api_key: &str) -> Result<Self, String> {
        let mut default_headers = reqwest::header::HeaderMap::new();
        default_headers.insert(
            reqwest::header::HeaderName::from_static("x-api-key"),
            reqwest::header::HeaderValue::from_str(api_key)
                .map_err(|_| "DOMOTZ_API_KEY contains characters not allowed in a header".to_string())?,
        );
        default_headers.insert(
            reqwest::header::CONTENT_TYPE,
            reqwest::header::HeaderValue::from_static("application/json"),
        );
        let http = reqwest::Client::builder()
            .default_headers(default_headers)
            .connect_timeout(Duration::from_secs(10))
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| format!("Failed to build HTTP client: {e}"))?;
        // Strip trailing slash for consistent URL construction
        let base_url = base_url.trim_end_matches('/').to_string();
        Ok(Self {
            http,
            base_url,
            calls: AtomicU64::new(0),
        })
    }

    /// The API base URL (without trailing slash).
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Number of outbound calls attempted so far.
    pub fn calls_attempted(&self) -> u64 {
        self.calls.load(Ordering::Relaxed)
    }

    /// Executes one built request and normalizes the outcome.
    pub async fn invoke(&self, request: &BuiltRequest) -> ApiOutcome {
        self.calls.fetch_add(1, Ordering::Relaxed);

        let url = format!("{}{}", self.base_url, request.path);
        let mut req = self.http.request(to_http_method(request.method), &url);
        if !request.query.is_empty() {
            req = req.query(&request.query);
        }
        if let Some(body) = &request.body {
            req = req.json(body);
        }

        let resp = match req.send().await {
            Ok(resp) => resp,
            Err(e) => return ApiOutcome::transport(e),
        };
        Self::normalize(request.method, resp).await
    }

    /// Maps a raw HTTP response into the result envelope.
    async fn normalize(method: Method, resp: reqwest::Response) -> ApiOutcome {
        let status = resp.status();

        // HEAD responses carry their result in a header, not a body.
        if method == Method::Head && status.is_success() {
            let count = resp
                .headers()
                .get(ENTITIES_COUNT_HEADER)
                .and_then(|v| v.to_str().ok())
                .and_then(|s| s.parse::<i64>().ok())
                .unwrap_or(0);
            return ApiOutcome::Success(json!({ "count": count }));
        }

        let body = match resp.text().await {
            Ok(body) => body,
            Err(e) => return ApiOutcome::transport(e),
        };
        let parsed: Option<Value> = if body.trim().is_empty() {
            None
        } else {
            serde_json::from_str(&body).ok()
        };

        if status.is_success() {
            let payload = match method {
                Method::Delete => json!({ "success": true, "status": status.as_u16() }),
                Method::Post | Method::Put => parsed
                    .unwrap_or_else(|| json!({ "success": true, "status": status.as_u16() })),
                // 2xx bodies that are not JSON are passed through as text.
                _ => parsed.unwrap_or_else(|| {
                    if body.is_empty() {
                        Value::Null
                    } else {
                        Value::String(body.clone())
                    }
                }),
            };
            return ApiOutcome::Success(payload);
        }

        let message = parsed
            .as_ref()
            .and_then(|v| v.get("message"))
            .and_then(Value::as_str)
            .map(String::from)
            .unwrap_or_else(|| format!("Request failed with status code {}", status.as_u16()));
        let raw = match parsed {
            Some(v) => Some(v),
            None if body.is_empty() => None,
            None => Some(Value::String(body)),
        };
        ApiOutcome::Failure {
            status: Some(status.as_u16()),
            message,
            raw,
        }
    }
}

fn to_http_method(method: Method) -> reqwest::Method {
    match method {
        Method::Get => reqwest::Method::GET,
        Method::Post => reqwest::Method::POST,
        Method::Put => reqwest::Method::PUT,
        Method::Delete => reqwest::Method::DELETE,
        Method::Head => reqwest::Method::HEAD,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{HeaderMap, StatusCode};
    use axum::routing::{delete, get, head, post};
    use axum::{Json, Router};

    async fn spawn_upstream(app: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{addr}")
    }

    fn built(method: Method, path: &str) -> BuiltRequest {
        BuiltRequest {
            method,
            path: path.to_string(),
            query: Vec::new(),
            body: None,
        }
    }

    #[tokio::test]
    async fn get_returns_json_payload_and_sends_api_key() {
        let app = Router::new().route(
            "/agent",
            get(|headers: HeaderMap| async move {
                let key = headers
                    .get("x-api-key")
                    .and_then(|v| v.to_str().ok())
                    .unwrap_or("")
                    .to_string();
                Json(json!({ "seen_key": key }))
            }),
        );
        let base = spawn_upstream(app).await;
        let client = DomotzClient::new(&base, "test-key").unwrap();

        let outcome = client.invoke(&built(Method::Get, "/agent")).await;
        assert_eq!(outcome, ApiOutcome::Success(json!({ "seen_key": "test-key" })));
    }

    #[tokio::test]
    async fn query_pairs_are_forwarded() {
        let app = Router::new().route(
            "/agent",
            get(
                |axum::extract::RawQuery(q): axum::extract::RawQuery| async move {
                    Json(json!({ "query": q.unwrap_or_default() }))
                },
            ),
        );
        let base = spawn_upstream(app).await;
        let client = DomotzClient::new(&base, "k").unwrap();

        let mut req = built(Method::Get, "/agent");
        req.query = vec![
            ("page_size".into(), "10".into()),
            ("team_name".into(), "noc".into()),
        ];
        let outcome = client.invoke(&req).await;
        assert_eq!(
            outcome,
            ApiOutcome::Success(json!({ "query": "page_size=10&team_name=noc" }))
        );
    }

    #[tokio::test]
    async fn upstream_404_maps_to_failure_with_message() {
        let app = Router::new().route(
            "/agent/999",
            get(|| async { (StatusCode::NOT_FOUND, Json(json!({ "message": "not found" }))) }),
        );
        let base = spawn_upstream(app).await;
        let client = DomotzClient::new(&base, "k").unwrap();

        let outcome = client.invoke(&built(Method::Get, "/agent/999")).await;
        assert_eq!(
            outcome,
            ApiOutcome::Failure {
                status: Some(404),
                message: "not found".to_string(),
                raw: Some(json!({ "message": "not found" })),
            }
        );
    }

    #[tokio::test]
    async fn error_without_message_field_gets_status_line() {
        let app = Router::new().route(
            "/boom",
            get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "oops") }),
        );
        let base = spawn_upstream(app).await;
        let client = DomotzClient::new(&base, "k").unwrap();

        let outcome = client.invoke(&built(Method::Get, "/boom")).await;
        assert_eq!(
            outcome,
            ApiOutcome::Failure {
                status: Some(500),
                message: "Request failed with status code 500".to_string(),
                raw: Some(Value::String("oops".to_string())),
            }
        );
    }

    #[tokio::test]
    async fn connection_refused_is_a_transport_failure() {
        // Bind then drop to get a port with nothing listening.
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = DomotzClient::new(&format!("http://{addr}"), "k").unwrap();
        let outcome = client.invoke(&built(Method::Get, "/agent")).await;
        match outcome {
            ApiOutcome::Failure { status, message, raw } => {
                assert_eq!(status, None);
                assert!(!message.is_empty());
                assert_eq!(raw, None);
            }
            other => panic!("expected transport failure, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn head_count_comes_from_the_entities_header() {
        let app = Router::new().route(
            "/agent",
            head(|| async { ([(ENTITIES_COUNT_HEADER, "42")], "") }),
        );
        let base = spawn_upstream(app).await;
        let client = DomotzClient::new(&base, "k").unwrap();

        let outcome = client.invoke(&built(Method::Head, "/agent")).await;
        assert_eq!(outcome, ApiOutcome::Success(json!({ "count": 42 })));
    }

    #[tokio::test]
    async fn head_count_defaults_to_zero_without_header() {
        let app = Router::new().route("/agent", head(|| async { "" }));
        let base = spawn_upstream(app).await;
        let client = DomotzClient::new(&base, "k").unwrap();

        let outcome = client.invoke(&built(Method::Head, "/agent")).await;
        assert_eq!(outcome, ApiOutcome::Success(json!({ "count": 0 })));
    }

    #[tokio::test]
    async fn delete_synthesizes_success_payload() {
        let app = Router::new().route(
            "/agent/5",
            delete(|| async { StatusCode::NO_CONTENT }),
        );
        let base = spawn_upstream(app).await;
        let client = DomotzClient::new(&base, "k").unwrap();

        let outcome = client.invoke(&built(Method::Delete, "/agent/5")).await;
        assert_eq!(
            outcome,
            ApiOutcome::Success(json!({ "success": true, "status": 204 }))
        );
    }

    #[tokio::test]
    async fn post_echoes_body_and_synthesizes_when_empty() {
        let app = Router::new()
            .route("/echo", post(|Json(body): Json<Value>| async move { Json(body) }))
            .route("/silent", post(|| async { StatusCode::CREATED }));
        let base = spawn_upstream(app).await;
        let client = DomotzClient::new(&base, "k").unwrap();

        let mut req = built(Method::Post, "/echo");
        req.body = Some(json!({ "function_id": 2, "value": "90" }));
        assert_eq!(
            client.invoke(&req).await,
            ApiOutcome::Success(json!({ "function_id": 2, "value": "90" }))
        );

        let mut req = built(Method::Post, "/silent");
        req.body = Some(json!({}));
        assert_eq!(
            client.invoke(&req).await,
            ApiOutcome::Success(json!({ "success": true, "status": 201 }))
        );
    }

    #[tokio::test]
    async fn every_invoke_bumps_the_call_counter() {
        let app = Router::new().route("/agent", get(|| async { Json(json!([])) }));
        let base = spawn_upstream(app).await;
        let client = DomotzClient::new(&base, "k").unwrap();

        assert_eq!(client.calls_attempted(), 0);
        client.invoke(&built(Method::Get, "/agent")).await;
        client.invoke(&built(Method::Get, "/agent")).await;
        assert_eq!(client.calls_attempted(), 2);
    }
}
