//! Key-Value Store Module
//!
//! The catalog's only persistent state lives in an external key-value
//! service. This module wraps it behind an explicit client trait so the
//! handlers never talk to a concrete backend directly.
//!
//! ## Core Concepts
//! - **Primitives**: exactly four operations are used: `get` (string),
//!   `set_members` (set), `list_append` and `list_range` (list).
//! - **Key conventions**: book records under `book:{id}`, visit history
//!   under `history:{session}`, search index sets under the literal term.
//! - **Backends**: `RedisStore` for production, `MemoryStore` as the
//!   in-process fake used by tests and the `--memory` demo mode.
//!
//! Store calls carry no timeout or retry; a slow backend stalls the
//! request that issued the call.

pub mod client;
pub mod memory;
pub mod redis;

#[cfg(test)]
mod tests;
