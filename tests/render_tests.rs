//! Render snapshot tests using RenderHarness
//!
//! Render the root view into a test buffer and check the plain text.

use pokedex::{
    components::{Component, PokedexView, PokedexViewProps, EMPTY_PAGE, NO_IMAGE},
    state::{AppState, BaseStat, CreatureDetail, ListEntry, Screen, SpriteUrls},
};
use tui_dispatch::testing::*;

fn render_state(state: &AppState) -> String {
    let mut render = RenderHarness::new(80, 30);
    let mut component = PokedexView::new();

    render.render_to_string_plain(|frame| {
        let props = PokedexViewProps {
            state,
            is_focused: true,
        };
        component.render(frame, frame.area(), props);
    })
}

fn detail_state(sprites: SpriteUrls) -> AppState {
    AppState {
        screen: Screen::Detail(CreatureDetail {
            id: 6,
            name: "charizard".into(),
            sprites,
            types: vec!["fire".into(), "flying".into()],
            abilities: vec!["blaze".into(), "solar-power".into()],
            stats: vec![
                BaseStat {
                    name: "hp".into(),
                    base_value: 78,
                },
                BaseStat {
                    name: "special-attack".into(),
                    base_value: 109,
                },
            ],
            height: 17,
            weight: 905,
        }),
        ..Default::default()
    }
}

#[test]
fn test_render_loading_state() {
    let state = AppState {
        loading: true,
        ..Default::default()
    };

    let output = render_state(&state);
    assert!(output.contains("Loading..."), "Spinner line missing:\n{output}");
}

#[test]
fn test_render_page_rows() {
    let state = AppState {
        entries: vec![
            ListEntry {
                name: "bulbasaur".into(),
                url: "https://pokeapi.co/api/v2/pokemon/1/".into(),
            },
            ListEntry {
                name: "nidoran-f".into(),
                url: "https://pokeapi.co/api/v2/pokemon/29/".into(),
            },
        ],
        ..Default::default()
    };

    let output = render_state(&state);
    assert!(output.contains("#001"));
    assert!(output.contains("Bulbasaur"));
    assert!(output.contains("#029"));
    assert!(output.contains("Nidoran F"));
    assert!(output.contains("page 1"));
}

#[test]
fn test_render_empty_page() {
    let state = AppState {
        offset: 2000,
        ..Default::default()
    };

    let output = render_state(&state);
    assert!(output.contains(EMPTY_PAGE), "Empty message missing:\n{output}");
    assert!(output.contains("page 101"));
}

#[test]
fn test_render_error_hides_list() {
    let state = AppState {
        entries: vec![ListEntry {
            name: "bulbasaur".into(),
            url: "https://pokeapi.co/api/v2/pokemon/1/".into(),
        }],
        error: Some("Pokémon \"agumon\" not found.".into()),
        ..Default::default()
    };

    let output = render_state(&state);
    assert!(output.contains("not found."));
    assert!(output.contains("try again"));
    assert!(!output.contains("Bulbasaur"));
}

#[test]
fn test_render_detail() {
    let output = render_state(&detail_state(SpriteUrls {
        default: Some("https://img/6.png".into()),
        official_artwork: Some("https://img/artwork/6.png".into()),
    }));

    assert!(output.contains("Charizard #006"));
    assert!(output.contains("Fire, Flying"));
    assert!(output.contains("Blaze, Solar Power"));
    assert!(output.contains("1.7 m"));
    assert!(output.contains("90.5 kg"));
    assert!(output.contains("https://img/artwork/6.png"));
    assert!(output.contains("SP.ATK"));
    assert!(output.contains("Base stats (of 255)"));
}

#[test]
fn test_render_detail_without_sprite() {
    let output = render_state(&detail_state(SpriteUrls::default()));
    assert!(output.contains(NO_IMAGE));
}
