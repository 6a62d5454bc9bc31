//! Book Catalog Server Library
//!
//! This library crate defines the components of a small session-aware
//! book catalog site backed by an external key-value store. It is the
//! foundation for the server binary (`main.rs`).
//!
//! ## Architecture Modules
//! - **`config`**: named constants (catalog size, history window, cookie
//!   policy) and the CLI-parsed server settings.
//! - **`store`**: the key-value client trait with its redis and
//!   in-memory backends; books, histories and index sets all live here.
//! - **`session`**: session id derivation from cookies and the
//!   short-lived session cookie written back on every response.
//! - **`recommend`**: the per-session "next book" engine working over a
//!   capped window of recent visits.
//! - **`search`**: exact-term lookup through the inverted index sets,
//!   hydrated with titles from the stored records.
//! - **`router`**: the ordered path-pattern dispatcher, the page
//!   handlers and the HTML rendering layer.

pub mod config;
pub mod recommend;
pub mod router;
pub mod search;
pub mod session;
pub mod store;
