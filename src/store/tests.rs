//! Store Module Tests
//!
//! Validates the in-memory backend against the redis semantics the rest
//! of the crate assumes, plus the key derivation helpers.
//!
//! *Note: the redis backend itself needs a live instance and is covered
//! by running the server against one, not by unit tests.*

#[cfg(test)]
mod tests {
    use crate::store::client::{book_key, history_key, KeyValueStore};
    use crate::store::memory::MemoryStore;

    // ============================================================
    // KEY CONVENTION TESTS
    // ============================================================

    #[test]
    fn test_book_key_is_namespaced() {
        assert_eq!(book_key(7), "book:7");
    }

    #[test]
    fn test_history_key_is_namespaced() {
        assert_eq!(history_key("abc-123"), "history:abc-123");
    }

    // ============================================================
    // STRING VALUE TESTS
    // ============================================================

    #[tokio::test]
    async fn test_get_returns_stored_value() {
        let store = MemoryStore::new();
        store.put("book:1", "<h2>Moby Dick</h2>");

        let value = store.get("book:1").await.unwrap();
        assert_eq!(value.as_deref(), Some("<h2>Moby Dick</h2>"));
    }

    #[tokio::test]
    async fn test_get_missing_key_is_none() {
        let store = MemoryStore::new();
        assert!(store.get("book:99").await.unwrap().is_none());
    }

    // ============================================================
    // SET TESTS
    // ============================================================

    #[tokio::test]
    async fn test_set_members_missing_key_is_empty() {
        let store = MemoryStore::new();
        assert!(store.set_members("nothing").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_set_members_deduplicates() {
        let store = MemoryStore::new();
        store.add_set_member("term", "1");
        store.add_set_member("term", "1");
        store.add_set_member("term", "2");

        let mut members = store.set_members("term").await.unwrap();
        members.sort();
        assert_eq!(members, vec!["1", "2"]);
    }

    // ============================================================
    // LIST TESTS (redis LRANGE semantics)
    // ============================================================

    #[tokio::test]
    async fn test_list_append_then_full_range() {
        let store = MemoryStore::new();
        store.list_append("h", "1").await.unwrap();
        store.list_append("h", "2").await.unwrap();
        store.list_append("h", "3").await.unwrap();

        let all = store.list_range("h", 0, -1).await.unwrap();
        assert_eq!(all, vec!["1", "2", "3"]);
    }

    #[tokio::test]
    async fn test_list_range_negative_indices_take_tail() {
        let store = MemoryStore::new();
        for i in 1..=5 {
            store.list_append("h", &i.to_string()).await.unwrap();
        }

        let tail = store.list_range("h", -2, -1).await.unwrap();
        assert_eq!(tail, vec!["4", "5"]);
    }

    #[tokio::test]
    async fn test_list_range_tail_window_wider_than_list() {
        let store = MemoryStore::new();
        store.list_append("h", "1").await.unwrap();
        store.list_append("h", "2").await.unwrap();

        // Window wider than the list clamps to the whole list.
        let window = store.list_range("h", -11, -1).await.unwrap();
        assert_eq!(window, vec!["1", "2"]);
    }

    #[tokio::test]
    async fn test_list_range_inclusive_bounds() {
        let store = MemoryStore::new();
        for i in 0..5 {
            store.list_append("h", &i.to_string()).await.unwrap();
        }

        let slice = store.list_range("h", 1, 3).await.unwrap();
        assert_eq!(slice, vec!["1", "2", "3"]);
    }

    #[tokio::test]
    async fn test_list_range_inverted_bounds_is_empty() {
        let store = MemoryStore::new();
        store.list_append("h", "1").await.unwrap();

        assert!(store.list_range("h", 2, 1).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_list_range_missing_key_is_empty() {
        let store = MemoryStore::new();
        assert!(store.list_range("nope", 0, -1).await.unwrap().is_empty());
    }

    // ============================================================
    // DEMO SEED TESTS
    // ============================================================

    #[tokio::test]
    async fn test_seed_demo_catalog_covers_full_range() {
        let store = MemoryStore::new();
        store.seed_demo_catalog();

        for id in 1..=crate::config::CATALOG_SIZE {
            let record = store.get(&book_key(id)).await.unwrap();
            assert!(record.is_some(), "book {} should be seeded", id);
            assert!(record.unwrap().contains("<h2>"));
        }
    }

    #[tokio::test]
    async fn test_seed_demo_catalog_indexes_terms() {
        let store = MemoryStore::new();
        store.seed_demo_catalog();

        let hits = store.set_members("scifi").await.unwrap();
        assert_eq!(hits.len(), 2);
    }
}
