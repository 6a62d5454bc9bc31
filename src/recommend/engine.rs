use anyhow::Result;
use std::collections::HashSet;

use super::types::Recommendation;
use crate::config::{CATALOG_SIZE, HISTORY_READ_WINDOW};
use crate::store::client::{history_key, KeyValueStore};

/// Record a visit and compute the next book for this session.
///
/// Appends `visited` to the session history exactly as captured from
/// the path, then picks the smallest-numbered catalog id absent from
/// the recent window. Entries that do not parse as book ids, including
/// digit runs too large for a `u32`, are ignored when building the
/// pool.
pub async fn recommend(
    store: &dyn KeyValueStore,
    session_id: &str,
    visited: &str,
) -> Result<Recommendation> {
    let key = history_key(session_id);
    store.list_append(&key, visited).await?;

    let window = store
        .list_range(&key, -(HISTORY_READ_WINDOW as isize), -1)
        .await?;
    tracing::debug!("Session {} history window: {:?}", session_id, window);

    let seen: HashSet<u32> = window
        .iter()
        .filter_map(|entry| entry.parse().ok())
        .collect();

    match (1..=CATALOG_SIZE).find(|id| !seen.contains(id)) {
        Some(next) => Ok(Recommendation::Next(next)),
        None => Ok(Recommendation::AllVisited),
    }
}
