//! Recommendation Module
//!
//! Produces the per-session "up next" suggestion shown on every book
//! detail page.
//!
//! ## Algorithm
//! 1. The visited book id is appended to the session's history list,
//!    unconditionally, repeat visits included.
//! 2. The most recent `HISTORY_READ_WINDOW` entries are read back.
//! 3. The candidate pool is the catalog range minus the ids seen in that
//!    window; the smallest-numbered candidate wins the tie-break.
//! 4. An empty pool yields the completion signal instead of a book id.
//!
//! The append and the read are two separate store calls and are not
//! atomic with respect to other writers of the same history key.

pub mod engine;
pub mod types;
