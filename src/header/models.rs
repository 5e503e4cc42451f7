use serde::{Deserialize, Serialize};

/// One of the three mutually exclusive tab views sharing a header instance.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TabSlot {
    #[default]
    First,
    Second,
    Third,
}

/// Infinite-scroll fetch coordination.
///
/// `Requested` means the next-page fetch should fire; `Exhausted` means the
/// last response was a short page and no further pages exist.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ScrollFetch {
    #[default]
    Idle,
    Requested,
    Exhausted,
}

/// Static header configuration. Opaque to the core logic; replaced wholesale
/// by `set_header_options`, which also resets the search state.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HeaderOptions {
    pub title: String,
    pub include_tabs_button: bool,
    pub display_reload_button: bool,
    pub use_extend_third_slot: bool,
    pub title_slot_first: String,
    pub title_slot_second: String,
    pub title_slot_third: String,
    pub fab_router_name: String,
    pub sidebar_width: String,
    pub placeholder: String,
}

impl Default for HeaderOptions {
    fn default() -> Self {
        Self {
            title: String::new(),
            include_tabs_button: true,
            display_reload_button: true,
            use_extend_third_slot: false,
            title_slot_first: "List".to_string(),
            title_slot_second: "Drafts".to_string(),
            title_slot_third: "Reports".to_string(),
            fab_router_name: String::new(),
            sidebar_width: "300px".to_string(),
            placeholder: "Search".to_string(),
        }
    }
}
