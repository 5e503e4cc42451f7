//! Headless state container for a search header UI.
//!
//! Tracks search text, per-tab cached filter state, debounced search
//! triggering and infinite-scroll pagination, and derives the query-string
//! fragments a backend list API consumes. No network I/O happens here; the
//! owning application watches the search-trigger counter and runs its own
//! HTTP calls with the derived fragments.

pub mod header;
pub mod query;

pub use header::constants::{PAGE_SIZE, SEARCH_DEBOUNCE_MS};
pub use header::models::{HeaderOptions, ScrollFetch, TabSlot};
pub use header::state::HeaderState;
pub use header::{SearchHeader, SubscriptionId};
pub use query::fragment::{build_scroll_query, build_search_query};
pub use query::params::{QueryPairs, serialize_query_params};
