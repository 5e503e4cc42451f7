//! Search header runtime: state, debounce timer, and change notification.
//!
//! [`SearchHeader`] owns a [`HeaderState`] and drives it through the
//! unidirectional update loop: each operation becomes a [`Message`], and the
//! [`Command`] returned by the transition names the side effect to run. The
//! only side effect in this crate is scheduling the debounced search
//! trigger; the harness keeps that deadline and fires it from
//! [`SearchHeader::tick`], which the owning event loop calls cooperatively.

use std::time::Instant;

use serde::Serialize;
use serde_json::Value;
use tracing::debug;

pub mod commands;
pub mod constants;
pub mod debounce;
pub mod events;
pub mod models;
pub mod snapshot;
pub mod state;


use self::commands::Command;
use self::debounce::DebounceTimer;
use self::events::Message;
use self::models::{HeaderOptions, TabSlot};
use self::state::HeaderState;

/// Identifier for a registered change subscriber.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct SubscriptionId(u64);

type ChangeHandler = Box<dyn Fn(&HeaderState)>;

/// Explicitly owned search-header store.
///
/// One instance per logical page context. Not shared across execution
/// contexts; subscribers run synchronously on the owning thread.
pub struct SearchHeader {
    state: HeaderState,
    debounce: DebounceTimer,
    subscribers: Vec<(SubscriptionId, ChangeHandler)>,
    next_subscription: u64,
}

impl Default for SearchHeader {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchHeader {
    pub fn new() -> Self {
        Self {
            state: HeaderState::new(),
            debounce: DebounceTimer::new(),
            subscribers: Vec::new(),
            next_subscription: 1,
        }
    }

    pub fn state(&self) -> &HeaderState {
        &self.state
    }

    /// Current value of the live search-trigger counter; consumers watch it
    /// for increments and re-run their search call.
    pub fn search_action(&self) -> u64 {
        self.state.search_trigger
    }

    /// The committed query fragment, ready to append to an endpoint URL.
    pub fn search_query(&self) -> &str {
        &self.state.search_query
    }

    /// Standalone fragment for the next scroll-triggered fetch.
    pub fn query_url_more_data_on_scroll(&self) -> String {
        self.state.scroll_query_url()
    }

    // ------------------------------------------------------------------
    // Operations
    // ------------------------------------------------------------------

    /// Commit new search text. Empty input clears the search; input shorter
    /// than the commit threshold is ignored.
    pub fn update_search(&mut self, text: impl Into<String>) {
        self.handle_message(Message::SearchInputChanged(text.into()));
    }

    pub fn clear_search(&mut self) {
        self.handle_message(Message::SearchCleared);
    }

    /// Switch tabs, caching the current tab's state and restoring the
    /// target's cached state when it has been visited before.
    pub fn set_current_tab(&mut self, tab: TabSlot) {
        debug!(?tab, "set current tab");
        self.handle_message(Message::TabChanged(tab));
    }

    /// Commit a filter-query fragment (excluding keyword/pagination).
    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.handle_message(Message::FilterQueryApplied(query.into()));
    }

    /// Replace the header configuration and reset the search state. Tab
    /// snapshots survive.
    pub fn set_header_options(&mut self, options: HeaderOptions) {
        debug!("replace header options");
        self.handle_message(Message::HeaderOptionsReplaced(options));
    }

    pub fn set_reload(&mut self, is_reloading: bool) {
        self.handle_message(Message::ReloadChanged(is_reloading));
    }

    pub fn set_filters_count(&mut self, count: u32) {
        self.handle_message(Message::FiltersCountChanged(count));
    }

    pub fn set_total_items(&mut self, count: u64) {
        self.handle_message(Message::TotalItemsChanged(count));
    }

    /// Merge any serializable record into `query_params`. Non-object
    /// payloads merge nothing.
    pub fn merge_query_params<T: Serialize>(&mut self, params: &T) {
        if let Ok(Value::Object(map)) = serde_json::to_value(params) {
            self.handle_message(Message::QueryParamsMerged(map));
        }
    }

    pub fn set_default_query_params(&mut self) {
        self.handle_message(Message::QueryParamsReset);
    }

    /// Report whether the list view sits at its scroll bottom; drives the
    /// next-page fetch request.
    pub fn set_scroll_bottom(&mut self, at_bottom: bool) {
        self.handle_message(Message::ScrollBottomChanged(at_bottom));
    }

    /// Report the item count of the last search response; a short page marks
    /// the scroll state exhausted.
    pub fn set_total_items_in_last_response(&mut self, count: u64) {
        self.handle_message(Message::ResponseItemCountChanged(count));
    }

    /// Request a debounced search-trigger increment.
    pub fn request_search(&mut self) {
        self.handle_message(Message::SearchRequested);
    }

    /// Toggle filter panel visibility.
    pub fn show_filter(&mut self) {
        self.handle_message(Message::FilterToggled);
    }

    // ------------------------------------------------------------------
    // Debounce
    // ------------------------------------------------------------------

    /// Poll the debounce deadline; fires the search trigger when due.
    pub fn tick(&mut self) {
        self.tick_at(Instant::now());
    }

    pub fn tick_at(&mut self, now: Instant) {
        if self.debounce.poll(now) {
            debug!("debounced search trigger fired");
            self.handle_message(Message::SearchTriggered);
        }
    }

    /// Deadline of the pending search trigger, if one is scheduled.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.debounce.deadline()
    }

    // ------------------------------------------------------------------
    // Change notification
    // ------------------------------------------------------------------

    /// Register a handler called with the state after every applied message.
    pub fn subscribe(&mut self, handler: impl Fn(&HeaderState) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.subscribers.push((id, Box::new(handler)));
        id
    }

    /// Remove a handler; unknown ids are a no-op.
    pub fn unsubscribe(&mut self, id: SubscriptionId) {
        self.subscribers.retain(|(sid, _)| *sid != id);
    }

    fn handle_message(&mut self, message: Message) {
        let command = self.state.update(message);
        self.execute_command(command);
        self.notify_subscribers();
    }

    fn execute_command(&mut self, command: Command) {
        match command {
            Command::None => {}
            Command::ScheduleSearch(delay_ms) => {
                debug!(delay_ms, "search trigger scheduled");
                self.debounce.schedule(Instant::now(), delay_ms);
            }
        }
    }

    fn notify_subscribers(&self) {
        for (_, handler) in &self.subscribers {
            handler(&self.state);
        }
    }
}
