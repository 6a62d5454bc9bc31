//! Store Client Trait
//!
//! The minimal surface the catalog needs from its key-value service,
//! plus the key derivation helpers shared by all callers.

use anyhow::Result;
use async_trait::async_trait;

/// Key under which a book record (HTML fragment) is stored. The id is
/// taken as-is; ids outside the catalog simply miss the store.
pub fn book_key(book_id: impl std::fmt::Display) -> String {
    format!("book:{}", book_id)
}

/// Key under which a session's visit history list is stored.
pub fn history_key(session_id: &str) -> String {
    format!("history:{}", session_id)
}

/// The four key-value primitives the catalog relies on.
///
/// Implementations map these onto GET / SMEMBERS / RPUSH / LRANGE or
/// their in-memory equivalents. All errors surface as `anyhow::Error`;
/// the dispatcher turns them into a 503 response.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Fetch the string value stored under `key`, if any.
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// All members of the set stored under `key`. A missing key reads as
    /// an empty set. Iteration order is not defined across calls.
    async fn set_members(&self, key: &str) -> Result<Vec<String>>;

    /// Append `value` to the tail of the list stored under `key`,
    /// creating the list if it does not exist.
    async fn list_append(&self, key: &str, value: &str) -> Result<()>;

    /// Elements of the list under `key` between `start..=stop`, using
    /// redis index semantics: both bounds inclusive, negative indices
    /// counted from the tail.
    async fn list_range(&self, key: &str, start: isize, stop: isize) -> Result<Vec<String>>;
}
