//! Pokedex TUI - paginated PokeAPI browser on tui-dispatch
//!
//! This library exposes the app's modules for testing.

pub mod action;
pub mod catalog;
pub mod components;
pub mod effect;
pub mod reducer;
pub mod state;
