use serde_json::{Map, Value};
use tracing::trace;

use crate::query::fragment::{build_scroll_query, build_search_query};

use super::commands::Command;
use super::constants::{
    FIRST_PAGE, MIN_KEYWORDS_LEN, PAGE_SIZE, PARAM_PAGE_NUMBER, PARAM_PAGE_SIZE, SEARCH_DEBOUNCE_MS,
};
use super::events::Message;
use super::models::{HeaderOptions, ScrollFetch, TabSlot};
use super::snapshot::{TabCache, TabSnapshot};

/// The search header state record.
///
/// All transitions go through [`HeaderState::update`]; the returned
/// [`Command`] tells the runtime harness which side effect to run. The
/// derived `search_query` string is recomputed from
/// `{page_number, page_size, applied_query, search_text}` whenever one of
/// them changes.
pub struct HeaderState {
    pub active_tab: TabSlot,
    pub search_text: String,
    pub filters_visible: bool,
    /// Monotonically increasing counter; an increment signals "re-run search".
    pub search_trigger: u64,
    /// Last committed filter-query fragment, excluding keyword/pagination.
    pub applied_query: String,
    pub total_items: u64,
    pub total_filters_applied: u32,
    pub total_items_in_last_response: u64,
    pub page_size: u32,
    pub page_number: u32,
    pub is_reloading: bool,
    pub is_at_scroll_bottom: bool,
    pub query_params: Map<String, Value>,
    pub pending_scroll_fetch: ScrollFetch,
    pub tabs: TabCache,
    /// Derived: `&PageNumber=<n>&PageSize=<s>[<filter>][&Keywords=<text>]`.
    pub search_query: String,
    pub header_options: HeaderOptions,
}

impl Default for HeaderState {
    fn default() -> Self {
        Self::new()
    }
}

impl HeaderState {
    pub fn new() -> Self {
        let mut state = Self {
            active_tab: TabSlot::First,
            search_text: String::new(),
            filters_visible: false,
            search_trigger: 0,
            applied_query: String::new(),
            total_items: 0,
            total_filters_applied: 0,
            total_items_in_last_response: 0,
            page_size: PAGE_SIZE,
            page_number: FIRST_PAGE,
            is_reloading: false,
            is_at_scroll_bottom: false,
            query_params: default_query_params(),
            pending_scroll_fetch: ScrollFetch::Idle,
            tabs: TabCache::new(),
            search_query: String::new(),
            header_options: HeaderOptions::default(),
        };
        state.rebuild_search_query();
        state
    }

    pub fn update(&mut self, msg: Message) -> Command {
        match msg {
            Message::SearchInputChanged(text) => {
                if text.is_empty() {
                    return self.update(Message::SearchCleared);
                }
                if text.chars().count() >= MIN_KEYWORDS_LEN {
                    self.search_text = text;
                    self.rebuild_search_query();
                }
                // 1..=3 chars: suppressed, see MIN_KEYWORDS_LEN
                Command::None
            }
            Message::SearchCleared => {
                self.search_text.clear();
                self.rebuild_search_query();
                Command::None
            }
            Message::TabChanged(new_tab) => {
                trace!(from = ?self.active_tab, to = ?new_tab, "tab switch");
                self.tabs.upsert(self.snapshot_current());
                if let Some(cached) = self.tabs.get(new_tab).cloned() {
                    self.restore_snapshot(&cached);
                }
                self.active_tab = new_tab;
                let text = self.search_text.clone();
                self.update(Message::SearchInputChanged(text))
            }
            Message::FilterQueryApplied(query) => {
                self.applied_query = query;
                self.rebuild_search_query();
                Command::None
            }
            Message::FilterToggled => {
                self.filters_visible = !self.filters_visible;
                Command::None
            }
            Message::FiltersCountChanged(count) => {
                self.total_filters_applied = count;
                Command::None
            }
            Message::ScrollBottomChanged(at_bottom) => {
                self.is_at_scroll_bottom = at_bottom;
                if at_bottom && self.pending_scroll_fetch != ScrollFetch::Exhausted {
                    self.pending_scroll_fetch = ScrollFetch::Requested;
                }
                if self.pending_scroll_fetch == ScrollFetch::Requested {
                    let next_page = param_u64(&self.query_params, PARAM_PAGE_NUMBER)
                        .unwrap_or(FIRST_PAGE as u64)
                        + 1;
                    trace!(next_page, "scroll fetch page advance");
                    let mut advance = Map::new();
                    advance.insert(PARAM_PAGE_NUMBER.to_string(), Value::from(next_page));
                    advance.insert(PARAM_PAGE_SIZE.to_string(), Value::from(PAGE_SIZE));
                    self.merge_query_params(advance);
                    return Command::ScheduleSearch(SEARCH_DEBOUNCE_MS);
                }
                Command::None
            }
            Message::ResponseItemCountChanged(count) => {
                self.total_items_in_last_response = count;
                let page_size = param_u64(&self.query_params, PARAM_PAGE_SIZE)
                    .unwrap_or(PAGE_SIZE as u64);
                self.pending_scroll_fetch = if count <= page_size {
                    ScrollFetch::Exhausted
                } else {
                    ScrollFetch::Idle
                };
                Command::None
            }
            Message::QueryParamsMerged(params) => {
                self.merge_query_params(params);
                Command::None
            }
            Message::QueryParamsReset => {
                self.query_params = default_query_params();
                Command::None
            }
            Message::SearchRequested => Command::ScheduleSearch(SEARCH_DEBOUNCE_MS),
            Message::SearchTriggered => {
                self.search_trigger += 1;
                Command::None
            }
            Message::HeaderOptionsReplaced(options) => {
                self.header_options = options;
                // Clear the cached search state; tab snapshots and scroll
                // bookkeeping survive the reset.
                self.search_text.clear();
                self.filters_visible = false;
                self.search_trigger = 0;
                self.applied_query.clear();
                self.total_items = 0;
                self.page_size = PAGE_SIZE;
                self.page_number = FIRST_PAGE;
                self.is_reloading = false;
                self.total_filters_applied = 0;
                self.query_params = default_query_params();
                self.rebuild_search_query();
                Command::None
            }
            Message::ReloadChanged(is_reloading) => {
                self.is_reloading = is_reloading;
                Command::None
            }
            Message::TotalItemsChanged(count) => {
                self.total_items = count;
                Command::None
            }
        }
    }

    /// Standalone fragment for the scroll-triggered fetch URL, built from the
    /// field values independently of `search_query`.
    pub fn scroll_query_url(&self) -> String {
        build_scroll_query(
            self.page_number,
            self.page_size,
            &self.applied_query,
            &self.search_text,
        )
    }

    fn rebuild_search_query(&mut self) {
        self.search_query = build_search_query(
            self.page_number,
            self.page_size,
            &self.applied_query,
            &self.search_text,
        );
    }

    fn merge_query_params(&mut self, params: Map<String, Value>) {
        for (key, value) in params {
            self.query_params.insert(key, value);
        }
    }

    fn snapshot_current(&self) -> TabSnapshot {
        TabSnapshot {
            tab: self.active_tab,
            search_text: self.search_text.clone(),
            filters_visible: self.filters_visible,
            search_trigger: self.search_trigger,
            applied_query: self.applied_query.clone(),
            total_items: self.total_items,
            page_size: self.page_size,
            page_number: self.page_number,
            is_reloading: self.is_reloading,
            total_filters_applied: self.total_filters_applied,
        }
    }

    fn restore_snapshot(&mut self, snapshot: &TabSnapshot) {
        self.search_text = snapshot.search_text.clone();
        self.filters_visible = snapshot.filters_visible;
        self.search_trigger = snapshot.search_trigger;
        self.applied_query = snapshot.applied_query.clone();
        self.total_items = snapshot.total_items;
        self.page_size = snapshot.page_size;
        self.page_number = snapshot.page_number;
        self.is_reloading = snapshot.is_reloading;
        self.total_filters_applied = snapshot.total_filters_applied;
    }
}

fn default_query_params() -> Map<String, Value> {
    let mut params = Map::new();
    params.insert(PARAM_PAGE_SIZE.to_string(), Value::from(PAGE_SIZE));
    params.insert(PARAM_PAGE_NUMBER.to_string(), Value::from(FIRST_PAGE));
    params
}

fn param_u64(params: &Map<String, Value>, key: &str) -> Option<u64> {
    params.get(key).and_then(Value::as_u64)
}
