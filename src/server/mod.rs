//! Axum-based HTTP surface for the daily puzzle
//!
//! The game logic stays in [`crate::game`]; this module owns the wiring: a
//! router with the two endpoints, shared immutable state, the cookie-keyed
//! session store, and the server-rendered page.
//!
//! # Modules
//!
//! - [`app`]: router setup
//! - [`state`]: shared state (dictionary, catalog, session store, clock)
//! - [`session`]: session store trait, in-memory default, cookie plumbing
//! - [`routes`]: `GET /` and `POST /submit` handlers
//! - [`page`]: HTML rendering for the game page

pub mod app;
pub mod page;
pub mod routes;
pub mod session;
pub mod state;

pub use app::create_app;
pub use session::{MemoryStore, SESSION_COOKIE, SessionStore};
pub use state::AppState;
