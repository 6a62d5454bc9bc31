//! In-memory store backend.
//!
//! Implements the same primitives as the redis backend over `DashMap`s,
//! keyed per value type the way redis separates strings, sets and lists.
//! Used by the test suite and by `--memory` mode, where it is seeded
//! with a small demo catalog.

use anyhow::Result;
use async_trait::async_trait;
use dashmap::DashMap;
use std::collections::HashSet;

use super::client::{book_key, KeyValueStore};

pub struct MemoryStore {
    values: DashMap<String, String>,
    sets: DashMap<String, HashSet<String>>,
    lists: DashMap<String, Vec<String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            values: DashMap::new(),
            sets: DashMap::new(),
            lists: DashMap::new(),
        }
    }

    /// Store a plain string value. Seeding helper.
    pub fn put(&self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
    }

    /// Add a member to the set under `key`. Seeding helper.
    pub fn add_set_member(&self, key: &str, member: &str) {
        self.sets
            .entry(key.to_string())
            .or_default()
            .insert(member.to_string());
    }

    /// Load a small working catalog: ten book records plus a handful of
    /// index terms, so the site is usable without an external redis.
    pub fn seed_demo_catalog(&self) {
        let books: [(u32, &str, &str); 10] = [
            (1, "Moby Dick", "Herman Melville"),
            (2, "Dracula", "Bram Stoker"),
            (3, "Frankenstein", "Mary Shelley"),
            (4, "Treasure Island", "Robert Louis Stevenson"),
            (5, "Pride and Prejudice", "Jane Austen"),
            (6, "The Time Machine", "H. G. Wells"),
            (7, "The War of the Worlds", "H. G. Wells"),
            (8, "The Odyssey", "Homer"),
            (9, "Don Quixote", "Miguel de Cervantes"),
            (10, "The Picture of Dorian Gray", "Oscar Wilde"),
        ];

        for (id, title, author) in books {
            let record = format!("<h2>{}</h2><p>by {}</p>", title, author);
            self.put(&book_key(id), &record);
        }

        let terms: [(&str, &[u32]); 6] = [
            ("dracula", &[2]),
            ("whale", &[1]),
            ("island", &[4]),
            ("monster", &[2, 3]),
            ("scifi", &[6, 7]),
            ("classic", &[1, 5, 9]),
        ];

        for (term, ids) in terms {
            for id in ids {
                self.add_set_member(term, &id.to_string());
            }
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.get(key).map(|entry| entry.value().clone()))
    }

    async fn set_members(&self, key: &str) -> Result<Vec<String>> {
        let members = self
            .sets
            .get(key)
            .map(|entry| entry.value().iter().cloned().collect())
            .unwrap_or_default();
        Ok(members)
    }

    async fn list_append(&self, key: &str, value: &str) -> Result<()> {
        self.lists
            .entry(key.to_string())
            .or_default()
            .push(value.to_string());
        Ok(())
    }

    async fn list_range(&self, key: &str, start: isize, stop: isize) -> Result<Vec<String>> {
        let range = match self.lists.get(key) {
            Some(entry) => {
                let list = entry.value();
                match clamp_range(list.len(), start, stop) {
                    Some((from, to)) => list[from..=to].to_vec(),
                    None => Vec::new(),
                }
            }
            None => Vec::new(),
        };
        Ok(range)
    }
}

/// Resolve redis-style inclusive indices against a list of `len`
/// elements. Returns `None` when the range selects nothing.
fn clamp_range(len: usize, start: isize, stop: isize) -> Option<(usize, usize)> {
    if len == 0 {
        return None;
    }
    let len = len as isize;

    let mut start = if start < 0 { len + start } else { start };
    let mut stop = if stop < 0 { len + stop } else { stop };

    if start < 0 {
        start = 0;
    }
    if stop > len - 1 {
        stop = len - 1;
    }
    if start > stop || start > len - 1 || stop < 0 {
        return None;
    }

    Some((start as usize, stop as usize))
}
