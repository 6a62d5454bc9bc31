//! Session Module
//!
//! Derives a session identifier from request cookies, or mints a fresh
//! one, and produces the `Set-Cookie` header value that refreshes the
//! session's expiry on every session-aware response.
//!
//! There is no server-side session table: the only per-session state is
//! the visit history list kept in the store, which this module never
//! touches. Every function here is stateless per call.

pub mod manager;
