use crossterm::event::KeyCode;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use tui_dispatch::EventKind;
use tui_dispatch_components::{
    BaseStyle, Padding, ScrollbarStyle, SelectList, SelectListBehavior, SelectListProps,
    SelectListStyle, SelectionStyle,
};

use super::Component;
use crate::action::Action;
use crate::state::{display_name, ListEntry};

pub const EMPTY_PAGE: &str = "No Pokémon found.";

/// Selectable page of catalog entries
pub struct DexList {
    list: SelectList,
}

pub struct DexListProps<'a> {
    pub entries: &'a [ListEntry],
    pub selected: usize,
    pub is_focused: bool,
    pub on_select: fn(usize) -> Action,
}

impl Default for DexList {
    fn default() -> Self {
        Self {
            list: SelectList::new(),
        }
    }
}

impl DexList {
    pub fn new() -> Self {
        Self::default()
    }

    fn items(entries: &[ListEntry]) -> Vec<Line<'static>> {
        entries
            .iter()
            .map(|entry| {
                let number = entry
                    .id()
                    .map(|id| format!("#{id:03}"))
                    .unwrap_or_else(|| "#---".to_string());
                Line::from(vec![
                    Span::styled(format!("{number:>6}  "), Style::default().fg(Color::DarkGray)),
                    Span::raw(display_name(&entry.name)),
                ])
            })
            .collect()
    }
}

impl Component<Action> for DexList {
    type Props<'a> = DexListProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        if !props.is_focused || props.entries.is_empty() {
            return Vec::new();
        }

        let EventKind::Key(key) = event else {
            return Vec::new();
        };

        match key.code {
            KeyCode::Enter => vec![Action::ListOpen],
            KeyCode::Up | KeyCode::Down | KeyCode::Home | KeyCode::End => {
                let items = Self::items(props.entries);
                let list_props = SelectListProps {
                    items: &items,
                    count: items.len(),
                    selected: props.selected,
                    is_focused: true,
                    style: SelectListStyle {
                        base: BaseStyle {
                            border: None,
                            padding: Padding::xy(1, 0),
                            bg: None,
                            fg: None,
                        },
                        selection: SelectionStyle::default(),
                        scrollbar: ScrollbarStyle::default(),
                    },
                    behavior: SelectListBehavior::default(),
                    on_select: props.on_select,
                    render_item: &|item| item.clone(),
                };
                self.list
                    .handle_event(event, list_props)
                    .into_iter()
                    .collect()
            }
            _ => Vec::new(),
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        if props.entries.is_empty() {
            let empty = Paragraph::new(Line::from(Span::styled(
                EMPTY_PAGE,
                Style::default().fg(Color::DarkGray),
            )))
            .centered();
            frame.render_widget(empty, area);
            return;
        }

        let items = Self::items(props.entries);
        let list_props = SelectListProps {
            items: &items,
            count: items.len(),
            selected: props.selected,
            is_focused: props.is_focused,
            style: SelectListStyle {
                base: BaseStyle {
                    border: None,
                    padding: Padding::xy(1, 0),
                    bg: None,
                    fg: None,
                },
                selection: SelectionStyle::default(),
                scrollbar: ScrollbarStyle::default(),
            },
            behavior: SelectListBehavior::default(),
            on_select: props.on_select,
            render_item: &|item| item.clone(),
        };
        self.list.render(frame, area, list_props);
    }
}
