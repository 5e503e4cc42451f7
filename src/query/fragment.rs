//! Pure builders for the query-string fragments the header derives.
//!
//! Both fragments start with a literal `&`: the consumer appends them to an
//! endpoint URL whose query string is already open. Keywords are passed
//! through verbatim; percent-encoding is the serializer's concern.

/// Build the committed search fragment:
/// `&PageNumber=<n>&PageSize=<s>[<applied_query>][&Keywords=<search_text>]`.
///
/// The filter fragment and the keywords section are only emitted when
/// non-empty.
pub fn build_search_query(
    page_number: u32,
    page_size: u32,
    applied_query: &str,
    search_text: &str,
) -> String {
    let mut query = format!("&PageNumber={page_number}&PageSize={page_size}");
    if !applied_query.is_empty() {
        query.push_str(applied_query);
    }
    if !search_text.is_empty() {
        query.push_str("&Keywords=");
        query.push_str(search_text);
    }
    query
}

/// Build the infinite-scroll fetch fragment:
/// `&PageNumber=<n>&PageSize=<s><applied_query>&Keywords=<search_text>`.
///
/// Unlike [`build_search_query`], the keywords section is always present,
/// even when the search text is empty.
pub fn build_scroll_query(
    page_number: u32,
    page_size: u32,
    applied_query: &str,
    search_text: &str,
) -> String {
    format!("&PageNumber={page_number}&PageSize={page_size}{applied_query}&Keywords={search_text}")
}
