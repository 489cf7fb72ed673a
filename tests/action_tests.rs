//! Action and state tests using TestHarness
//!
//! - EffectStore for reducer + effect checks
//! - send_keys through the root component
//! - emitted-action assertions

use pokedex::{
    action::Action,
    catalog::PAGE_SIZE,
    components::{Component, PokedexView, PokedexViewProps},
    effect::Effect,
    reducer::reducer,
    state::{AppState, ListEntry},
};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tui_dispatch::testing::*;
use tui_dispatch::{
    assert_emitted, assert_not_emitted, EffectStore, EventKind, NumericComponentId,
};

fn page(offset: u32, count: u32) -> Vec<ListEntry> {
    (offset + 1..=offset + count)
        .map(|id| ListEntry {
            name: format!("mon-{id}"),
            url: format!("https://pokeapi.co/api/v2/pokemon/{id}/"),
        })
        .collect()
}

fn loaded_state() -> AppState {
    AppState {
        entries: page(0, PAGE_SIZE),
        request_seq: 1,
        ..Default::default()
    }
}

#[test]
fn test_init_requests_first_page() {
    let mut store = EffectStore::new(AppState::default(), reducer);

    let result = store.dispatch(Action::Init);
    assert!(result.changed, "State should change");
    assert!(store.state().loading);
    assert_eq!(result.effects.len(), 1);
    assert_eq!(
        result.effects[0],
        Effect::LoadPage {
            seq: 1,
            offset: 0,
            limit: PAGE_SIZE,
        }
    );
}

#[test]
fn test_page_next_then_prev() {
    let mut store = EffectStore::new(loaded_state(), reducer);

    let result = store.dispatch(Action::PageNext);
    assert!(matches!(
        result.effects[0],
        Effect::LoadPage { offset: 20, .. }
    ));

    store.dispatch(Action::PageDidLoad {
        seq: 2,
        offset: 20,
        entries: page(20, PAGE_SIZE),
    });
    assert_eq!(store.state().offset, 20);
    assert_eq!(store.state().page_number(), 2);

    let result = store.dispatch(Action::PagePrev);
    assert!(matches!(
        result.effects[0],
        Effect::LoadPage { offset: 0, .. }
    ));
}

#[test]
fn test_prev_on_first_page_is_ignored() {
    let mut store = EffectStore::new(loaded_state(), reducer);

    let result = store.dispatch(Action::PagePrev);
    assert!(!result.changed);
    assert!(result.effects.is_empty());
}

#[test]
fn test_component_keyboard_events() {
    let mut harness = TestHarness::<AppState, Action>::new(loaded_state());
    let mut component = PokedexView::new();

    let actions = harness.send_keys::<NumericComponentId, _, _>("n", |state, event| {
        let props = PokedexViewProps {
            state,
            is_focused: true,
        };
        component
            .handle_event(&event.kind, props)
            .into_iter()
            .collect::<Vec<_>>()
    });

    actions.assert_count(1);
    actions.assert_first(Action::PageNext);
}

#[test]
fn test_component_ignores_when_unfocused() {
    let mut harness = TestHarness::<AppState, Action>::new(loaded_state());
    let mut component = PokedexView::new();

    let actions = harness.send_keys::<NumericComponentId, _, _>("n p q", |state, event| {
        let props = PokedexViewProps {
            state,
            is_focused: false,
        };
        component
            .handle_event(&event.kind, props)
            .into_iter()
            .collect::<Vec<_>>()
    });

    actions.assert_empty();
}

#[test]
fn test_search_focus_captures_typing() {
    let mut harness = TestHarness::<AppState, Action>::new(AppState {
        search_active: true,
        ..loaded_state()
    });
    let mut component = PokedexView::new();

    let actions = harness.send_keys::<NumericComponentId, _, _>("n", |state, event| {
        let props = PokedexViewProps {
            state,
            is_focused: true,
        };
        component
            .handle_event(&event.kind, props)
            .into_iter()
            .collect::<Vec<_>>()
    });

    assert_not_emitted!(actions, Action::PageNext);
}

#[test]
fn test_action_categories() {
    let next = Action::PageNext;
    let submit = Action::SearchSubmit("pikachu".into());
    let back = Action::DetailBack;
    let tick = Action::Tick;

    assert_eq!(next.category(), Some("page"));
    assert_eq!(submit.category(), Some("search"));
    assert_eq!(back.category(), Some("detail"));
    assert_eq!(tick.category(), None);
}

#[test]
fn test_error_state_keys_retry_and_dismiss() {
    let state = AppState {
        error: Some("Could not load the list. Check your connection.".into()),
        ..loaded_state()
    };
    let mut harness = TestHarness::<AppState, Action>::new(state.clone());
    let mut component = PokedexView::new();

    let mut actions = harness.send_keys::<NumericComponentId, _, _>("r", |state, event| {
        let props = PokedexViewProps {
            state,
            is_focused: true,
        };
        component
            .handle_event(&event.kind, props)
            .into_iter()
            .collect::<Vec<_>>()
    });

    let esc = EventKind::Key(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE));
    actions.extend(component.handle_event(
        &esc,
        PokedexViewProps {
            state: &state,
            is_focused: true,
        },
    ));

    assert_emitted!(actions, Action::Retry);
    assert_emitted!(actions, Action::ErrorDismiss);
    assert_not_emitted!(actions, Action::ListOpen);
}

#[test]
fn test_typed_query_blocks_paging() {
    let mut store = EffectStore::new(
        AppState {
            search_query: "pika".into(),
            ..loaded_state()
        },
        reducer,
    );
    let mut component = PokedexView::new();

    let mut harness = TestHarness::<AppState, Action>::new(store.state().clone());
    let actions = harness.send_keys::<NumericComponentId, _, _>("n", |state, event| {
        let props = PokedexViewProps {
            state,
            is_focused: true,
        };
        component
            .handle_event(&event.kind, props)
            .into_iter()
            .collect::<Vec<_>>()
    });

    // The key still maps to paging; the reducer refuses it while a query is typed
    assert_emitted!(actions, Action::PageNext);
    for action in actions {
        let result = store.dispatch(action);
        assert!(!result.changed);
        assert!(result.effects.is_empty());
    }
    assert!(store.state().pending.is_none());
}
