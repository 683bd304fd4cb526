//! Session registry for streaming transports.
//!
//! [`SessionRegistry`] is the single authority for opening, addressing, and
//! closing MCP sessions. Each session owns a pair of bounded queues: an
//! inbound queue drained by a dedicated worker task (so messages on one
//! session are handled strictly in arrival order) and an outbound queue the
//! transport drains into its response stream.
//!
//! Lifecycle is `Open -> Closed`, terminal. [`SessionRegistry::close`] is
//! idempotent: the first call removes the entry and stops the worker, later
//! calls are no-ops. A closed id is never reused; reconnecting clients get a
//! fresh UUID.
//!
//! ## Concurrency
//!
//! The map sits behind a `std::sync::Mutex` with short, synchronous critical
//! sections, never held across an await. Insert happens fully formed under
//! one lock acquisition, so concurrent openers can never observe a
//! half-initialized entry. Queue sends happen after the lock is released.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::{SystemTime, UNIX_EPOCH};

use serde_json::Value;
use tokio::sync::mpsc;
use tracing::{debug, info};
use uuid::Uuid;

use crate::client::DomotzClient;
use crate::mcp;

/// Queue depth per session, for both directions.
const SESSION_QUEUE: usize = 256;

/// Failure to address a session with an inbound message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// The id was never issued, or the session is already closed.
    MissingSession(String),
    /// No id supplied and no session is open.
    NoSession,
    /// No id supplied while several sessions are open.
    AmbiguousSession,
}

impl std::fmt::Display for SessionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SessionError::MissingSession(id) => write!(f, "Session not found: {}", id),
            SessionError::NoSession => {
                write!(f, "SSE transport not initialized. Call GET /sse first.")
            }
            SessionError::AmbiguousSession => write!(
                f,
                "Multiple sessions active; pass the session_id query parameter"
            ),
        }
    }
}

/// Internal bookkeeping for one open session.
struct SessionEntry {
    inbound: mpsc::Sender<Value>,
    /// Epoch milliseconds when the session was opened.
    created_at: u64,
}

/// A freshly opened session, handed to the transport.
///
/// Holds the receiving end of the outbound queue; the registry keeps only
/// the inbound sender. Dropping this (or the stream built from it) without
/// calling `close` leaves the entry to be reaped by the transport's drop
/// guard.
pub struct SessionHandle {
    pub id: String,
    pub outbound: mpsc::Receiver<Value>,
}

/// Registry of open sessions.
///
/// Cloneable; all clones share the same inner map.
#[derive(Clone)]
pub struct SessionRegistry {
    sessions: Arc<Mutex<HashMap<String, SessionEntry>>>,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self {
            sessions: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, SessionEntry>> {
        self.sessions.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Opens a session: allocates an id, registers the entry, and spawns the
    /// worker that drains the inbound queue in FIFO order.
    pub fn open(&self, client: Arc<DomotzClient>) -> SessionHandle {
        let id = Uuid::new_v4().to_string();
        let (inbound_tx, mut inbound_rx) = mpsc::channel::<Value>(SESSION_QUEUE);
        let (outbound_tx, outbound_rx) = mpsc::channel::<Value>(SESSION_QUEUE);

        self.lock().insert(
            id.clone(),
            SessionEntry {
                inbound: inbound_tx,
                created_at: now_ms(),
            },
        );

        let worker_id = id.clone();
        tokio::spawn(async move {
            // One message at a time: the next recv only happens after the
            // previous response (including its upstream call) completed.
            while let Some(message) = inbound_rx.recv().await {
                if let Some(response) = mcp::handle_message(&message, &client).await {
                    if outbound_tx.send(response).await.is_err() {
                        break; // stream side is gone
                    }
                }
            }
            debug!(session_id = %worker_id, "session worker stopped");
        });

        info!(session_id = %id, "session opened");
        SessionHandle {
            id,
            outbound: outbound_rx,
        }
    }

    /// Resolves a message's target session to its inbound queue.
    ///
    /// With an explicit id, the session must exist. Without one, the message
    /// goes to the sole open session (the single-transport convention);
    /// anything else is an addressing error.
    pub fn resolve(&self, explicit: Option<&str>) -> Result<mpsc::Sender<Value>, SessionError> {
        let sessions = self.lock();
        match explicit {
            Some(id) => sessions
                .get(id)
                .map(|entry| entry.inbound.clone())
                .ok_or_else(|| SessionError::MissingSession(id.to_string())),
            None => {
                let mut entries = sessions.values();
                match (entries.next(), entries.next()) {
                    (Some(entry), None) => Ok(entry.inbound.clone()),
                    (None, _) => Err(SessionError::NoSession),
                    (Some(_), Some(_)) => Err(SessionError::AmbiguousSession),
                }
            }
        }
    }

    /// Closes a session. Returns whether this call actually removed it.
    ///
    /// Dropping the entry drops the inbound sender, which stops the worker
    /// after the message it is currently handling.
    pub fn close(&self, id: &str) -> bool {
        let removed = self.lock().remove(id);
        match removed {
            Some(entry) => {
                let age_ms = now_ms().saturating_sub(entry.created_at);
                info!(session_id = %id, age_ms, "session closed");
                true
            }
            None => false,
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.lock().contains_key(id)
    }

    pub fn count(&self) -> usize {
        self.lock().len()
    }
}

impl Default for SessionRegistry {
    fn default() -> Self {
        Self::new()
    }
}

fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
