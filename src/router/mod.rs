//! Router Module
//!
//! The ordered path-pattern dispatcher and the page handlers behind it.
//!
//! ## Dispatch Contract
//! The route table is a **sequence**, not a set: patterns are evaluated
//! in declaration order and the first match wins. Ordering is
//! load-bearing and must keep specific patterns ahead of general ones;
//! see `RouteTable::catalog_routes` for the canonical order. Named
//! capture groups in a pattern become the handler's parameters. A path
//! matching no pattern produces the generic 404 page. Per request,
//! exactly one handler runs, or none.
//!
//! ## Submodules
//! - **`table`**: the route table, dispatch loop and page request/response types.
//! - **`handlers`**: book detail, index page and search handlers.
//! - **`render`**: HTML fragment construction and output escaping.

pub mod handlers;
pub mod render;
pub mod table;
