//! Reducer - pure function: (state, action) -> DispatchResult

use tui_dispatch::DispatchResult;

use crate::action::Action;
use crate::catalog::{normalize_name, PAGE_SIZE};
use crate::effect::Effect;
use crate::state::{AppState, PendingRequest, Screen};

/// The reducer handles all state transitions
pub fn reducer(state: &mut AppState, action: Action) -> DispatchResult<Effect> {
    match action {
        Action::Init => request_page(state, 0),

        // ===== Page actions =====
        Action::PageNext => {
            if !state.can_page_next() {
                return DispatchResult::unchanged();
            }
            request_page(state, state.offset.saturating_add(PAGE_SIZE))
        }

        Action::PagePrev => {
            if !state.can_page_prev() {
                return DispatchResult::unchanged();
            }
            request_page(state, state.offset.saturating_sub(PAGE_SIZE))
        }

        Action::PageDidLoad {
            seq,
            offset,
            entries,
        } => {
            if is_stale(state, seq) {
                return DispatchResult::unchanged();
            }
            state.entries = entries;
            state.offset = offset;
            state.selected = 0;
            state.loading = false;
            state.error = None;
            state.pending = None;
            DispatchResult::changed()
        }

        Action::PageDidError { seq, error } => {
            if is_stale(state, seq) {
                return DispatchResult::unchanged();
            }
            // Previous entries and offset stay as they were.
            state.loading = false;
            state.error = Some(error);
            DispatchResult::changed()
        }

        // ===== List actions =====
        Action::ListSelect(index) => {
            if index < state.entries.len() && index != state.selected {
                state.selected = index;
                DispatchResult::changed()
            } else {
                DispatchResult::unchanged()
            }
        }

        Action::ListOpen => {
            if state.loading || state.error.is_some() || !state.on_list() {
                return DispatchResult::unchanged();
            }
            let Some(name) = state.selected_entry().map(|entry| entry.name.clone()) else {
                return DispatchResult::unchanged();
            };
            request_lookup(state, name)
        }

        // ===== Search actions =====
        Action::SearchFocus => {
            if state.search_active || !state.on_list() {
                return DispatchResult::unchanged();
            }
            state.search_active = true;
            DispatchResult::changed()
        }

        Action::SearchBlur => {
            if !state.search_active {
                return DispatchResult::unchanged();
            }
            state.search_active = false;
            DispatchResult::changed()
        }

        Action::SearchInput(query) => {
            if query == state.search_query {
                return DispatchResult::unchanged();
            }
            state.search_query = query;
            DispatchResult::changed()
        }

        Action::SearchSubmit(query) => {
            let query = normalize_name(&query);
            state.search_active = false;
            if query.is_empty() {
                state.search_query.clear();
                return request_page(state, 0);
            }
            state.search_query = query.clone();
            request_lookup(state, query)
        }

        // ===== Creature actions =====
        Action::CreatureDidLoad { seq, detail } => {
            if is_stale(state, seq) {
                return DispatchResult::unchanged();
            }
            state.loading = false;
            state.error = None;
            state.pending = None;
            state.search_query.clear();
            state.search_active = false;
            state.screen = Screen::Detail(detail);
            DispatchResult::changed()
        }

        Action::CreatureDidError { seq, error } => {
            if is_stale(state, seq) {
                return DispatchResult::unchanged();
            }
            // No navigation; the list keeps whatever page it had.
            state.loading = false;
            state.error = Some(error);
            DispatchResult::changed()
        }

        // ===== Detail actions =====
        Action::DetailBack => {
            if state.on_list() {
                return DispatchResult::unchanged();
            }
            state.screen = Screen::List;
            DispatchResult::changed()
        }

        // ===== Error actions =====
        Action::ErrorDismiss => {
            if state.error.take().is_some() {
                DispatchResult::changed()
            } else {
                DispatchResult::unchanged()
            }
        }

        // ===== Global actions =====
        Action::Retry => {
            if state.error.is_none() || !state.on_list() {
                return DispatchResult::unchanged();
            }
            match state.pending.clone() {
                Some(PendingRequest::Page { offset }) => request_page(state, offset),
                Some(PendingRequest::Lookup { name }) => request_lookup(state, name),
                None => request_page(state, state.offset),
            }
        }

        Action::Render => DispatchResult::changed(),

        Action::Tick => {
            if state.loading {
                state.tick_count = state.tick_count.wrapping_add(1);
                DispatchResult::changed()
            } else {
                DispatchResult::unchanged()
            }
        }

        Action::Quit => DispatchResult::unchanged(),
    }
}

fn next_seq(state: &mut AppState) -> u64 {
    state.request_seq = state.request_seq.wrapping_add(1);
    state.request_seq
}

fn is_stale(state: &AppState, seq: u64) -> bool {
    seq != state.request_seq
}

fn request_page(state: &mut AppState, offset: u32) -> DispatchResult<Effect> {
    let seq = next_seq(state);
    state.loading = true;
    state.error = None;
    state.tick_count = 0;
    state.pending = Some(PendingRequest::Page { offset });
    DispatchResult::changed_with(Effect::LoadPage {
        seq,
        offset,
        limit: PAGE_SIZE,
    })
}

fn request_lookup(state: &mut AppState, name: String) -> DispatchResult<Effect> {
    let seq = next_seq(state);
    state.loading = true;
    state.error = None;
    state.tick_count = 0;
    state.pending = Some(PendingRequest::Lookup { name: name.clone() });
    DispatchResult::changed_with(Effect::LookupCreature { seq, name })
}
