//! Session persistence keyed by an opaque per-browser cookie
//!
//! The store is an explicit get/put/clear interface injected into the
//! handlers, so game behavior is testable without HTTP. The default backing
//! is an in-process map; concurrent writes from the same client are
//! last-write-wins, which is acceptable for a single-player casual game.

use crate::core::Session;
use axum::http::{HeaderMap, header};
use rand::Rng;
use rand::distr::Alphanumeric;
use rustc_hash::FxHashMap;
use std::sync::{Mutex, PoisonError};

/// Name of the session cookie
pub const SESSION_COOKIE: &str = "nyuki_session";

/// Session keys are this many random alphanumeric characters
const KEY_LEN: usize = 32;

/// Cookie lifetime in seconds; sessions reset daily anyway
const COOKIE_MAX_AGE: u32 = 7 * 86_400;

/// Get/put/clear session state by opaque client key
pub trait SessionStore: Send + Sync {
    fn get(&self, key: &str) -> Option<Session>;
    fn put(&self, key: &str, session: Session);
    fn clear(&self, key: &str);
}

/// In-process session store
#[derive(Debug, Default)]
pub struct MemoryStore {
    sessions: Mutex<FxHashMap<String, Session>>,
}

impl MemoryStore {
    fn lock(&self) -> std::sync::MutexGuard<'_, FxHashMap<String, Session>> {
        self.sessions.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl SessionStore for MemoryStore {
    fn get(&self, key: &str) -> Option<Session> {
        self.lock().get(key).cloned()
    }

    fn put(&self, key: &str, session: Session) {
        self.lock().insert(key.to_string(), session);
    }

    fn clear(&self, key: &str) {
        self.lock().remove(key);
    }
}

/// Extract the session key from a request's Cookie header, if present
#[must_use]
pub fn key_from_headers(headers: &HeaderMap) -> Option<String> {
    let cookie_header = headers.get(header::COOKIE)?;
    let cookie_str = cookie_header.to_str().ok()?;
    for cookie in cookie_str.split(';') {
        let cookie = cookie.trim();
        if let Some(value) = cookie
            .strip_prefix(SESSION_COOKIE)
            .and_then(|rest| rest.strip_prefix('='))
        {
            if !value.is_empty() {
                return Some(value.to_string());
            }
        }
    }
    None
}

/// Generate a fresh opaque session key
#[must_use]
pub fn new_key() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(KEY_LEN)
        .map(char::from)
        .collect()
}

/// Build the Set-Cookie value issuing a session key to the client
#[must_use]
pub fn set_cookie_value(key: &str) -> String {
    format!("{SESSION_COOKIE}={key}; Max-Age={COOKIE_MAX_AGE}; Path=/; HttpOnly; SameSite=Lax")
}
