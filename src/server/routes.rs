//! HTTP route handlers
//!
//! `GET /` renders the page for today's puzzle; `POST /submit` validates one
//! word and returns the updated score as JSON. Every validation failure is a
//! normal `success: false` response; nothing here returns a server error for
//! user input. A malformed or missing body is treated as an empty word, which
//! fails the length check.

use super::page;
use super::session::{key_from_headers, new_key, set_cookie_value};
use super::state::AppState;
use crate::game::{self, snapshot};
use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, HeaderValue, header};
use axum::response::Html;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Body of `POST /submit`
///
/// A missing `word` field defaults to the empty string.
#[derive(Debug, Default, Deserialize)]
pub struct SubmitRequest {
    #[serde(default)]
    pub word: String,
}

/// Response of `POST /submit`
///
/// The score fields are only present on success.
#[derive(Debug, Serialize)]
pub struct SubmitResponse {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub found_count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rank: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub progress: Option<u8>,
}

impl SubmitResponse {
    fn failure(message: String) -> Self {
        Self {
            success: false,
            message,
            found_count: None,
            score: None,
            rank: None,
            progress: None,
        }
    }
}

/// The session key from the request, or a fresh one plus a Set-Cookie header
fn client_key(headers: &HeaderMap) -> (String, HeaderMap) {
    let mut response_headers = HeaderMap::new();
    let key = match key_from_headers(headers) {
        Some(key) => key,
        None => {
            let key = new_key();
            if let Ok(value) = HeaderValue::from_str(&set_cookie_value(&key)) {
                response_headers.insert(header::SET_COOKIE, value);
            }
            key
        }
    };
    (key, response_headers)
}

/// `GET /`: render today's puzzle with the client's session state
///
/// Side effect: a session stored for a previous date is replaced with a
/// fresh one for today.
pub async fn index(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> (HeaderMap, Html<String>) {
    let (day, puzzle, total_possible) = state.daily();
    let date_key = day.key();
    let (key, response_headers) = client_key(&headers);

    let session = state.session_for(&key, &date_key);
    state.store().put(&key, session.clone());

    let view = snapshot(&session, total_possible);
    let html = page::render(&puzzle, &day.long(), session.found_words(), &view);
    (response_headers, Html(html))
}

/// `POST /submit`: validate one word and update the session on success
///
/// The body is parsed leniently: anything that is not a JSON object with a
/// `word` string becomes the empty word, which the length check rejects with
/// a normal user-facing message.
pub async fn submit(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    body: Bytes,
) -> (HeaderMap, Json<SubmitResponse>) {
    let word = serde_json::from_slice::<SubmitRequest>(&body)
        .map(|req| req.word.to_lowercase())
        .unwrap_or_default();

    let (day, puzzle, total_possible) = state.daily();
    let date_key = day.key();
    let (key, response_headers) = client_key(&headers);

    let mut session = state.session_for(&key, &date_key);

    let response = match game::submit(&word, &mut session, &puzzle, state.dictionary()) {
        Ok(accepted) => {
            let view = snapshot(&session, total_possible);
            SubmitResponse {
                success: true,
                message: accepted.message(),
                found_count: Some(view.found_count),
                score: Some(view.score),
                rank: Some(view.rank.to_string()),
                progress: Some(view.progress),
            }
        }
        Err(rejection) => SubmitResponse::failure(rejection.message()),
    };

    // Persist even on rejection so a date rollover sticks
    state.store().put(&key, session);

    (response_headers, Json(response))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::UtcDay;
    use crate::server::session::{MemoryStore, SESSION_COOKIE};
    use crate::wordlists::{self, Dictionary};

    /// 2025-01-01 selects the first catalog puzzle (center A)
    fn test_state() -> Arc<AppState> {
        Arc::new(AppState::with_parts(
            Dictionary::embedded(),
            wordlists::catalog().unwrap(),
            Box::new(MemoryStore::default()),
            || UtcDay::from_ymd(2025, 1, 1),
        ))
    }

    fn headers_with_session(key: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::COOKIE,
            HeaderValue::from_str(&format!("{SESSION_COOKIE}={key}")).unwrap(),
        );
        headers
    }

    fn request(word: &str) -> Bytes {
        Bytes::from(serde_json::json!({ "word": word }).to_string())
    }

    #[tokio::test]
    async fn submit_valid_word_scores() {
        let state = test_state();
        let headers = headers_with_session("player1");

        let (_, Json(resp)) = submit(State(state.clone()), headers, request("mama")).await;

        assert!(resp.success);
        assert!(resp.message.contains("+4"));
        assert_eq!(resp.found_count, Some(1));
        assert_eq!(resp.score, Some(4));
        assert!(resp.rank.is_some());
        assert!(resp.progress.is_some());

        let session = state.store().get("player1").unwrap();
        assert_eq!(session.found_words(), ["mama"]);
    }

    #[tokio::test]
    async fn submit_duplicate_rejected() {
        let state = test_state();

        let (_, Json(first)) = submit(
            State(state.clone()),
            headers_with_session("player1"),
            request("mama"),
        )
        .await;
        assert!(first.success);

        let (_, Json(second)) = submit(
            State(state.clone()),
            headers_with_session("player1"),
            request("mama"),
        )
        .await;

        assert!(!second.success);
        assert!(second.message.contains("Tayari"));
        assert_eq!(second.score, None);
        assert_eq!(state.store().get("player1").unwrap().score(), 4);
    }

    #[tokio::test]
    async fn submit_uppercase_normalized() {
        let state = test_state();
        let (_, Json(resp)) = submit(
            State(state),
            headers_with_session("player1"),
            request("MAMA"),
        )
        .await;
        assert!(resp.success);
    }

    #[tokio::test]
    async fn submit_empty_body_fails_length_check() {
        let state = test_state();
        let (_, Json(resp)) =
            submit(State(state), headers_with_session("player1"), Bytes::new()).await;

        assert!(!resp.success);
        assert!(resp.message.contains("herufi 4"));
    }

    #[tokio::test]
    async fn submit_garbage_body_fails_length_check() {
        let state = test_state();
        let (_, Json(resp)) = submit(
            State(state),
            headers_with_session("player1"),
            Bytes::from_static(b"not json"),
        )
        .await;

        assert!(!resp.success);
        assert!(resp.message.contains("herufi 4"));
    }

    #[tokio::test]
    async fn submit_missing_word_field_defaults_empty() {
        let state = test_state();
        let (_, Json(resp)) = submit(
            State(state),
            headers_with_session("player1"),
            Bytes::from_static(b"{}"),
        )
        .await;

        assert!(!resp.success);
        assert!(resp.message.contains("herufi 4"));
    }

    #[tokio::test]
    async fn submit_without_cookie_issues_one() {
        let state = test_state();
        let (response_headers, Json(resp)) =
            submit(State(state), HeaderMap::new(), request("mama")).await;

        assert!(resp.success);
        let cookie = response_headers.get(header::SET_COOKIE).unwrap();
        assert!(cookie.to_str().unwrap().starts_with(SESSION_COOKIE));
    }

    #[tokio::test]
    async fn submit_resets_stale_session() {
        let state = test_state();
        let mut stale = crate::core::Session::new("2024-12-31");
        stale.record("kaka");
        state.store().put("player1", stale);

        let (_, Json(resp)) = submit(
            State(state.clone()),
            headers_with_session("player1"),
            request("mama"),
        )
        .await;

        assert!(resp.success);
        // Yesterday's word is gone, today's score starts from this word
        assert_eq!(resp.found_count, Some(1));
        assert_eq!(resp.score, Some(4));
        let session = state.store().get("player1").unwrap();
        assert!(session.is_for("2025-01-01"));
    }

    #[tokio::test]
    async fn index_renders_session_state() {
        let state = test_state();

        submit(
            State(state.clone()),
            headers_with_session("player1"),
            request("mama"),
        )
        .await;

        let (_, Html(html)) = index(State(state), headers_with_session("player1")).await;
        assert!(html.contains("MAMA"));
        assert!(html.contains("01 January 2025"));
    }

    #[tokio::test]
    async fn index_resets_stale_session_in_store() {
        let state = test_state();
        let mut stale = crate::core::Session::new("2024-12-31");
        stale.record("kaka");
        state.store().put("player1", stale);

        let (_, Html(html)) = index(State(state.clone()), headers_with_session("player1")).await;

        assert!(!html.contains("KAKA"));
        let session = state.store().get("player1").unwrap();
        assert!(session.is_for("2025-01-01"));
        assert_eq!(session.found_count(), 0);
    }

    #[tokio::test]
    async fn index_issues_cookie_for_new_client() {
        let state = test_state();
        let (response_headers, _) = index(State(state), HeaderMap::new()).await;
        assert!(response_headers.contains_key(header::SET_COOKIE));
    }
}
