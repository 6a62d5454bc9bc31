//! Search Module
//!
//! Exact-term lookup against the externally maintained inverted index.
//!
//! ## Overview
//! A search term is used verbatim as a set key in the store; the set's
//! members are book ids. Each id is hydrated into a display title by
//! fetching its record and extracting the `<h2>` heading. Ids whose
//! record is missing or has no heading are skipped silently.
//!
//! Result order follows the store's set iteration order, which is not
//! stable across calls. This is a read-only path with no side effects.
//!
//! ## Submodules
//! - **`engine`**: term resolution and title hydration.
//! - **`types`**: the result item handed to the rendering layer.

pub mod engine;
pub mod types;
