use anyhow::Result;
use regex::Regex;
use std::sync::LazyLock;

use super::types::SearchMatch;
use crate::store::client::{book_key, KeyValueStore};

/// Resolve a literal search term to displayable matches.
///
/// An empty term short-circuits to no matches. Index members that do not
/// parse as book ids, have no stored record, or whose record carries no
/// extractable title are dropped without surfacing an error.
pub async fn search(store: &dyn KeyValueStore, term: &str) -> Result<Vec<SearchMatch>> {
    if term.is_empty() {
        return Ok(Vec::new());
    }

    let members = store.set_members(term).await?;

    let mut matches = Vec::new();
    for raw_id in members {
        let book_id: u32 = match raw_id.parse() {
            Ok(id) => id,
            Err(_) => {
                tracing::warn!(
                    "Ignoring non-numeric index member {:?} for {:?}",
                    raw_id,
                    term
                );
                continue;
            }
        };

        let record = match store.get(&book_key(book_id)).await? {
            Some(record) => record,
            None => continue,
        };

        if let Some(title) = extract_title(&record) {
            matches.push(SearchMatch { book_id, title });
        }
    }

    Ok(matches)
}

static TITLE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<h2[^>]*>(.*?)</h2>").unwrap());

/// Inner text of the first `<h2>` element of a stored book record.
pub fn extract_title(record: &str) -> Option<String> {
    TITLE_RE
        .captures(record)
        .map(|caps| caps[1].trim().to_string())
        .filter(|title| !title.is_empty())
}
