//! Constants for the search header store.

// Pagination
/// Default page size for paged search requests
pub const PAGE_SIZE: u32 = 10;

/// First page number
pub const FIRST_PAGE: u32 = 1;

// Timing
/// Trailing-edge debounce window for the search trigger, in milliseconds
pub const SEARCH_DEBOUNCE_MS: u64 = 500;

// Search input
/// Minimum keyword length that commits a search-text update; shorter
/// non-empty input is suppressed
pub const MIN_KEYWORDS_LEN: usize = 4;

// query_params keys
pub const PARAM_PAGE_NUMBER: &str = "PageNumber";
pub const PARAM_PAGE_SIZE: &str = "PageSize";
