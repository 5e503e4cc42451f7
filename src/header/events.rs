use serde_json::{Map, Value};

use super::models::{HeaderOptions, TabSlot};

#[derive(Clone, Debug)]
pub enum Message {
    // Search input
    SearchInputChanged(String),
    SearchCleared,

    // Tabs
    TabChanged(TabSlot),

    // Filters
    FilterQueryApplied(String),
    FilterToggled,
    FiltersCountChanged(u32),

    // Pagination / infinite scroll
    ScrollBottomChanged(bool),
    ResponseItemCountChanged(u64),
    QueryParamsMerged(Map<String, Value>),
    QueryParamsReset,

    // Search trigger
    SearchRequested,
    /// Debounce deadline fired; sent by the runtime harness.
    SearchTriggered,

    // Header lifecycle
    HeaderOptionsReplaced(HeaderOptions),
    ReloadChanged(bool),
    TotalItemsChanged(u64),
}
