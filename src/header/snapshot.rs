use smallvec::SmallVec;

use super::models::TabSlot;

/// Per-tab search state captured on tab switch and restored on revisit.
///
/// The derived `search_query` string is deliberately not part of the
/// snapshot; it is recomputed from the restored fields.
#[derive(Clone, Debug, PartialEq)]
pub struct TabSnapshot {
    pub tab: TabSlot,
    pub search_text: String,
    pub filters_visible: bool,
    pub search_trigger: u64,
    pub applied_query: String,
    pub total_items: u64,
    pub page_size: u32,
    pub page_number: u32,
    pub is_reloading: bool,
    pub total_filters_applied: u32,
}

/// Snapshot cache keyed by tab identity, one slot per tab.
#[derive(Clone, Debug, Default)]
pub struct TabCache {
    entries: SmallVec<[TabSnapshot; 3]>,
}

impl TabCache {
    pub fn new() -> Self {
        Self {
            entries: SmallVec::new(),
        }
    }

    /// Store a snapshot under its tab: overwrites the existing entry for a
    /// revisited tab, appends on first visit.
    pub fn upsert(&mut self, snapshot: TabSnapshot) {
        match self.entries.iter_mut().find(|e| e.tab == snapshot.tab) {
            Some(entry) => *entry = snapshot,
            None => self.entries.push(snapshot),
        }
    }

    pub fn get(&self, tab: TabSlot) -> Option<&TabSnapshot> {
        self.entries.iter().find(|e| e.tab == tab)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
