use crossterm::event::KeyCode;
use ratatui::layout::{Constraint, Layout};
use ratatui::prelude::{Frame, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Span;
use tui_dispatch::EventKind;
use tui_dispatch_components::{
    StatusBar, StatusBarHint, StatusBarItem, StatusBarProps, StatusBarSection, StatusBarStyle,
};

use super::{
    Component, DetailView, DetailViewProps, DexList, DexListProps, LoadingError,
    LoadingErrorProps, SearchBar, SearchBarProps, TitleBanner, TitleBannerProps,
};
use crate::action::Action;
use crate::state::{AppState, Screen};

/// Props for PokedexView - read-only view of state
pub struct PokedexViewProps<'a> {
    pub state: &'a AppState,
    pub is_focused: bool,
}

/// Root component: list screen or detail screen, plus the key hint bar
#[derive(Default)]
pub struct PokedexView {
    search: SearchBar,
    list: DexList,
}

impl PokedexView {
    pub fn new() -> Self {
        Self::default()
    }

    fn list_key(&mut self, event: &EventKind, state: &AppState) -> Vec<Action> {
        let EventKind::Key(key) = event else {
            return Vec::new();
        };

        if state.search_active {
            let props = SearchBarProps {
                query: &state.search_query,
                is_focused: true,
                on_change: Action::SearchInput,
                on_submit: Action::SearchSubmit,
            };
            return self.search.handle_event(event, props).into_iter().collect();
        }

        match key.code {
            KeyCode::Char('q') => vec![Action::Quit],
            KeyCode::Char('/') => vec![Action::SearchFocus],
            KeyCode::Char('r') => vec![Action::Retry],
            KeyCode::Esc if state.error.is_some() => vec![Action::ErrorDismiss],
            KeyCode::Char('n') | KeyCode::Right | KeyCode::PageDown => vec![Action::PageNext],
            KeyCode::Char('p') | KeyCode::Left | KeyCode::PageUp => vec![Action::PagePrev],
            _ if state.error.is_some() || state.loading => Vec::new(),
            _ => {
                let props = DexListProps {
                    entries: &state.entries,
                    selected: state.selected,
                    is_focused: true,
                    on_select: Action::ListSelect,
                };
                self.list.handle_event(event, props).into_iter().collect()
            }
        }
    }

    fn detail_key(event: &EventKind) -> Vec<Action> {
        match event {
            EventKind::Key(key) => match key.code {
                KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('b') => {
                    vec![Action::DetailBack]
                }
                KeyCode::Char('q') => vec![Action::Quit],
                _ => Vec::new(),
            },
            _ => Vec::new(),
        }
    }

    fn hints(state: &AppState) -> Vec<StatusBarHint<'static>> {
        if !state.on_list() {
            return vec![
                StatusBarHint::new("esc", "back"),
                StatusBarHint::new("q", "quit"),
            ];
        }
        if state.search_active {
            return vec![
                StatusBarHint::new("enter", "search"),
                StatusBarHint::new("esc", "cancel"),
            ];
        }
        let mut hints = vec![
            StatusBarHint::new("↑↓", "select"),
            StatusBarHint::new("enter", "open"),
            StatusBarHint::new("/", "search"),
        ];
        if state.can_page_prev() {
            hints.push(StatusBarHint::new("p", "prev"));
        }
        if state.can_page_next() {
            hints.push(StatusBarHint::new("n", "next"));
        }
        if state.error.is_some() {
            hints.push(StatusBarHint::new("r", "retry"));
        }
        hints.push(StatusBarHint::new("q", "quit"));
        hints
    }

    fn render_list(&mut self, frame: &mut Frame, area: Rect, props: &PokedexViewProps<'_>) {
        let state = props.state;
        let chunks = Layout::vertical([
            Constraint::Length(5), // Title + page indicator
            Constraint::Length(3), // Search box
            Constraint::Min(1),    // List / loading / error
        ])
        .split(area);

        let mut banner = TitleBanner;
        banner.render(
            frame,
            chunks[0],
            TitleBannerProps {
                page: state.page_number(),
                offset: state.offset,
                count: state.entries.len(),
            },
        );

        self.search.render(
            frame,
            chunks[1],
            SearchBarProps {
                query: &state.search_query,
                is_focused: props.is_focused && state.search_active,
                on_change: Action::SearchInput,
                on_submit: Action::SearchSubmit,
            },
        );

        let status = LoadingErrorProps {
            loading: state.loading,
            error: state.error.as_deref(),
            spinner: state.spinner(),
        };
        if status.is_visible() {
            let mut panel = LoadingError;
            panel.render(frame, chunks[2], status);
        } else {
            self.list.render(
                frame,
                chunks[2],
                DexListProps {
                    entries: &state.entries,
                    selected: state.selected,
                    is_focused: props.is_focused && !state.search_active,
                    on_select: Action::ListSelect,
                },
            );
        }
    }
}

impl Component<Action> for PokedexView {
    type Props<'a> = PokedexViewProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        if !props.is_focused {
            return Vec::new();
        }

        match &props.state.screen {
            Screen::List => self.list_key(event, props.state),
            Screen::Detail(_) => Self::detail_key(event),
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: PokedexViewProps<'_>) {
        let chunks = Layout::vertical([
            Constraint::Min(1),    // Main content
            Constraint::Length(1), // Help bar
        ])
        .split(area);

        match &props.state.screen {
            Screen::List => self.render_list(frame, chunks[0], &props),
            Screen::Detail(detail) => {
                let mut view = DetailView;
                view.render(frame, chunks[0], DetailViewProps { detail });
            }
        }

        let hints = Self::hints(props.state);
        let position = Span::styled(
            format!("page {}", props.state.page_number()),
            Style::default().fg(Color::DarkGray),
        );
        let right_items = [StatusBarItem::span(position)];
        let mut status_bar = StatusBar::new();
        <StatusBar as Component<Action>>::render(
            &mut status_bar,
            frame,
            chunks[1],
            StatusBarProps {
                left: StatusBarSection::empty(),
                center: StatusBarSection::hints(&hints),
                right: StatusBarSection::items(&right_items),
                style: StatusBarStyle::default(),
                is_focused: false,
            },
        );
    }
}
