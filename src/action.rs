//! Actions - intents from the keyboard and results from catalog tasks

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::state::{CreatureDetail, ListEntry};

/// Application actions with automatic category inference
///
/// Result actions carry the sequence token of the request that produced
/// them so the reducer can drop stale responses.
#[derive(tui_dispatch::Action, Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
#[action(infer_categories)]
pub enum Action {
    /// Load the first page on startup
    Init,

    // ===== Page category =====
    PageNext,
    PagePrev,
    PageDidLoad {
        seq: u64,
        offset: u32,
        entries: Vec<ListEntry>,
    },
    PageDidError {
        seq: u64,
        error: String,
    },

    // ===== List category =====
    /// Highlight a row (by index)
    ListSelect(usize),
    /// Open the highlighted row in the detail view
    ListOpen,

    // ===== Search category =====
    SearchFocus,
    SearchBlur,
    /// Search box text changed
    SearchInput(String),
    /// Submit the search box
    SearchSubmit(String),

    // ===== Creature category =====
    CreatureDidLoad {
        seq: u64,
        detail: CreatureDetail,
    },
    CreatureDidError {
        seq: u64,
        error: String,
    },

    // ===== Detail category =====
    /// Leave the detail view
    DetailBack,

    // ===== Error category =====
    /// Hide the current error and show the list again
    ErrorDismiss,

    // ===== Uncategorized (global) =====
    /// Re-issue the request behind the current error
    Retry,
    /// Force a re-render (cursor movement, etc.)
    Render,
    /// Spinner animation tick
    Tick,
    Quit,
}
