//! HTTP/SSE transport listener.
//!
//! Serves MCP over Server-Sent Events for clients that speak the HTTP
//! transport instead of stdio.
//!
//! ## Routes
//!
//! | Route            | Description                                        |
//! |------------------|----------------------------------------------------|
//! | `GET /sse`       | Open a session; stream `endpoint` + `message` events |
//! | `POST /messages` | Submit one JSON-RPC message to a session, `202` on accept |
//! | `GET /health`    | Liveness probe                                     |
//! | `GET /`          | Friendly service banner                            |
//! | `GET /mcp`       | `302` redirect to `/sse` (compatibility alias)     |
//!
//! The first event on a new stream is `endpoint`, whose data is the path the
//! client must POST its messages to (`/messages?session_id=<uuid>`). Clients
//! that predate multiplexed sessions may omit the query parameter; the
//! message then goes to the sole open session.
//!
//! Teardown is owned by [`SessionStream`]: whether the client disconnects,
//! the stream ends, or the server shuts down, the session is closed exactly
//! once.

use std::convert::Infallible;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use axum::extract::{Query, State};
use axum::http::{header, StatusCode};
use axum::response::sse::{Event, KeepAlive, Sse};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use futures_util::stream::{self, Stream, StreamExt};
use serde::Deserialize;
use serde_json::{json, Value};
use tokio_stream::wrappers::ReceiverStream;
use tower_http::trace::TraceLayer;
use tracing::warn;

use crate::client::DomotzClient;
use crate::session::{SessionError, SessionRegistry};

/// Maximum concurrent sessions before rejecting new streams with 429.
const MAX_SESSIONS: usize = 64;

/// Shared state for all transport routes.
#[derive(Clone)]
pub struct AppState {
    pub client: Arc<DomotzClient>,
    pub registry: SessionRegistry,
}

/// Builds the transport router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/", get(root))
        .route("/sse", get(open_stream))
        .route("/messages", post(post_message))
        .route("/mcp", get(legacy_redirect))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}

async fn root() -> &'static str {
    "Domotz MCP Server is running. Use /sse (SSE) or /health."
}

async fn legacy_redirect() -> impl IntoResponse {
    (StatusCode::FOUND, [(header::LOCATION, "/sse")])
}

/// `GET /sse`: opens a session and streams its responses.
async fn open_stream(State(state): State<AppState>) -> impl IntoResponse {
    if state.registry.count() >= MAX_SESSIONS {
        return Err((StatusCode::TOO_MANY_REQUESTS, "Too many open sessions"));
    }

    let session = state.registry.open(state.client.clone());
    let endpoint = format!("/messages?session_id={}", session.id);
    let session_id = session.id;

    let first = stream::once(async move {
        Ok::<_, Infallible>(Event::default().event("endpoint").data(endpoint))
    });
    let rest = ReceiverStream::new(session.outbound).map(|message| {
        let data = serde_json::to_string(&message).unwrap_or_default();
        Ok(Event::default().event("message").data(data))
    });

    // Wrap so the session is closed when the stream is dropped
    let stream = SessionStream {
        inner: Box::pin(first.chain(rest)),
        registry: state.registry.clone(),
        session_id,
        closed: false,
    };

    Ok(Sse::new(stream).keep_alive(KeepAlive::default().interval(Duration::from_secs(15))))
}

#[derive(Deserialize)]
struct MessageQuery {
    session_id: Option<String>,
}

/// `POST /messages`: routes one JSON-RPC message to its session.
///
/// The message is queued in arrival order; the response comes back on the
/// session's SSE stream, not in this HTTP response.
async fn post_message(
    State(state): State<AppState>,
    Query(query): Query<MessageQuery>,
    Json(message): Json<Value>,
) -> Response {
    let sender = match state.registry.resolve(query.session_id.as_deref()) {
        Ok(sender) => sender,
        Err(err) => {
            warn!(%err, "rejected inbound message");
            return session_error(&err);
        }
    };
    if sender.send(message).await.is_err() {
        // Session closed between resolve and send
        let id = query.session_id.unwrap_or_default();
        return session_error(&SessionError::MissingSession(id));
    }
    StatusCode::ACCEPTED.into_response()
}

fn session_error(err: &SessionError) -> Response {
    (StatusCode::BAD_REQUEST, Json(json!({ "error": err.to_string() }))).into_response()
}

/// Wrapper that closes the registry entry when the stream is dropped.
struct SessionStream<S> {
    inner: Pin<Box<S>>,
    registry: SessionRegistry,
    session_id: String,
    closed: bool,
}

impl<S> SessionStream<S> {
    fn finish(&mut self) {
        if !self.closed {
            self.registry.close(&self.session_id);
            self.closed = true;
        }
    }
}

impl<S: Stream<Item = Result<Event, Infallible>>> Stream for SessionStream<S> {
    type Item = Result<Event, Infallible>;

    fn poll_next(
        mut self: Pin<&mut Self>,
        cx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Option<Self::Item>> {
        let result = self.inner.as_mut().poll_next(cx);
        if let std::task::Poll::Ready(None) = &result {
            self.finish();
        }
        result
    }
}

impl<S> Drop for SessionStream<S> {
    fn drop(&mut self) {
        self.finish();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn spawn_app() -> (String, AppState) {
        let state = AppState {
            client: Arc::new(DomotzClient::new("http://127.0.0.1:9", "k").unwrap()),
            registry: SessionRegistry::new(),
        };
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let app = router(state.clone());
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        (format!("http://{addr}"), state)
    }

    /// Reads the next SSE event block, skipping keep-alive comments.
    async fn next_event(resp: &mut reqwest::Response, buffer: &mut String) -> (String, String) {
        loop {
            if let Some(pos) = buffer.find("\n\n") {
                let block: String = buffer.drain(..pos + 2).collect();
                let mut event = String::new();
                let mut data = String::new();
                for line in block.lines() {
                    if let Some(rest) = line.strip_prefix("event: ") {
                        event = rest.to_string();
                    } else if let Some(rest) = line.strip_prefix("data: ") {
                        data.push_str(rest);
                    }
                }
                if event.is_empty() && data.is_empty() {
                    continue;
                }
                return (event, data);
            }
            let chunk = tokio::time::timeout(Duration::from_secs(5), resp.chunk())
                .await
                .expect("timed out waiting for SSE data")
                .unwrap()
                .expect("SSE stream ended early");
            buffer.push_str(&String::from_utf8_lossy(&chunk));
        }
    }

    #[tokio::test]
    async fn health_answers_ok() {
        let (base, _state) = spawn_app().await;
        let body = reqwest::get(format!("{base}/health"))
            .await
            .unwrap()
            .text()
            .await
            .unwrap();
        assert_eq!(body, "ok");
    }

    #[tokio::test]
    async fn root_names_the_sse_endpoint() {
        let (base, _state) = spawn_app().await;
        let body = reqwest::get(format!("{base}/"))
            .await
            .unwrap()
            .text()
            .await
            .unwrap();
        assert!(body.contains("/sse"));
    }

    #[tokio::test]
    async fn legacy_path_redirects_to_sse() {
        let (base, _state) = spawn_app().await;
        let client = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .unwrap();
        let resp = client.get(format!("{base}/mcp")).send().await.unwrap();
        assert_eq!(resp.status(), 302);
        assert_eq!(resp.headers()["location"], "/sse");
    }

    #[tokio::test]
    async fn message_without_any_session_is_rejected() {
        let (base, state) = spawn_app().await;
        let resp = reqwest::Client::new()
            .post(format!("{base}/messages"))
            .json(&json!({ "jsonrpc": "2.0", "id": 1, "method": "ping" }))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), 400);
        let body: Value = resp.json().await.unwrap();
        assert!(body["error"]
            .as_str()
            .unwrap()
            .contains("SSE transport not initialized"));
        assert_eq!(state.registry.count(), 0);
    }

    #[tokio::test]
    async fn message_with_unknown_session_id_is_rejected() {
        let (base, state) = spawn_app().await;
        let resp = reqwest::Client::new()
            .post(format!("{base}/messages?session_id=not-a-session"))
            .json(&json!({ "jsonrpc": "2.0", "id": 1, "method": "ping" }))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), 400);
        let body: Value = resp.json().await.unwrap();
        assert!(body["error"].as_str().unwrap().contains("not-a-session"));
        assert_eq!(state.registry.count(), 0);
    }

    #[tokio::test]
    async fn endpoint_event_then_response_round_trip() {
        let (base, state) = spawn_app().await;
        let client = reqwest::Client::new();

        let mut stream_resp = client.get(format!("{base}/sse")).send().await.unwrap();
        assert_eq!(stream_resp.status(), 200);

        let mut buffer = String::new();
        let (event, post_path) = next_event(&mut stream_resp, &mut buffer).await;
        assert_eq!(event, "endpoint");
        assert!(post_path.starts_with("/messages?session_id="));
        assert_eq!(state.registry.count(), 1);

        let accepted = client
            .post(format!("{base}{post_path}"))
            .json(&json!({ "jsonrpc": "2.0", "id": 1, "method": "initialize", "params": {} }))
            .send()
            .await
            .unwrap();
        assert_eq!(accepted.status(), 202);

        let (event, data) = next_event(&mut stream_resp, &mut buffer).await;
        assert_eq!(event, "message");
        let response: Value = serde_json::from_str(&data).unwrap();
        assert_eq!(response["id"], 1);
        assert_eq!(response["result"]["protocolVersion"], "2024-11-05");
    }

    #[tokio::test]
    async fn omitted_session_id_reaches_the_sole_session() {
        let (base, _state) = spawn_app().await;
        let client = reqwest::Client::new();

        let mut stream_resp = client.get(format!("{base}/sse")).send().await.unwrap();
        let mut buffer = String::new();
        let (_, _) = next_event(&mut stream_resp, &mut buffer).await;

        let accepted = client
            .post(format!("{base}/messages"))
            .json(&json!({ "jsonrpc": "2.0", "id": 5, "method": "ping" }))
            .send()
            .await
            .unwrap();
        assert_eq!(accepted.status(), 202);

        let (event, data) = next_event(&mut stream_resp, &mut buffer).await;
        assert_eq!(event, "message");
        let response: Value = serde_json::from_str(&data).unwrap();
        assert_eq!(response["id"], 5);
    }

    #[tokio::test]
    async fn client_disconnect_closes_the_session() {
        let (base, state) = spawn_app().await;
        let client = reqwest::Client::new();

        let mut stream_resp = client.get(format!("{base}/sse")).send().await.unwrap();
        let mut buffer = String::new();
        let (_, _) = next_event(&mut stream_resp, &mut buffer).await;
        assert_eq!(state.registry.count(), 1);

        drop(stream_resp);

        // Teardown is asynchronous; poll until the drop guard has run.
        let deadline = tokio::time::Instant::now() + Duration::from_secs(5);
        while state.registry.count() != 0 {
            assert!(
                tokio::time::Instant::now() < deadline,
                "session was not reaped after disconnect"
            );
            tokio::time::sleep(Duration::from_millis(25)).await;
        }
    }

    #[tokio::test]
    async fn two_streams_are_isolated() {
        let (base, state) = spawn_app().await;
        let client = reqwest::Client::new();

        let mut first = client.get(format!("{base}/sse")).send().await.unwrap();
        let mut first_buf = String::new();
        let (_, first_path) = next_event(&mut first, &mut first_buf).await;

        let mut second = client.get(format!("{base}/sse")).send().await.unwrap();
        let mut second_buf = String::new();
        let (_, second_path) = next_event(&mut second, &mut second_buf).await;

        assert_ne!(first_path, second_path);
        assert_eq!(state.registry.count(), 2);

        drop(second);
        let deadline = tokio::time::Instant::now() + Duration::from_secs(5);
        while state.registry.count() != 1 {
            assert!(
                tokio::time::Instant::now() < deadline,
                "second session was not reaped"
            );
            tokio::time::sleep(Duration::from_millis(25)).await;
        }

        // The surviving session still answers.
        let accepted = client
            .post(format!("{base}{first_path}"))
            .json(&json!({ "jsonrpc": "2.0", "id": 2, "method": "ping" }))
            .send()
            .await
            .unwrap();
        assert_eq!(accepted.status(), 202);
        let (event, data) = next_event(&mut first, &mut first_buf).await;
        assert_eq!(event, "message");
        let response: Value = serde_json::from_str(&data).unwrap();
        assert_eq!(response["id"], 2);
    }
}
