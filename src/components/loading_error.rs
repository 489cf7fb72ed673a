use ratatui::{
    layout::{Constraint, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use super::Component;
use crate::action::Action;

pub const ERROR_ICON: &str = "\u{26a0}\u{fe0f}";

/// Loading spinner or inline error with a retry hint; renders nothing otherwise
pub struct LoadingError;

pub struct LoadingErrorProps<'a> {
    pub loading: bool,
    pub error: Option<&'a str>,
    pub spinner: &'a str,
}

impl LoadingErrorProps<'_> {
    pub fn is_visible(&self) -> bool {
        self.loading || self.error.is_some()
    }
}

impl Component<Action> for LoadingError {
    type Props<'a> = LoadingErrorProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let lines = if props.loading {
            vec![Line::from(vec![
                Span::styled(props.spinner, Style::default().fg(Color::Cyan)),
                Span::raw(" Loading..."),
            ])]
        } else if let Some(error) = props.error {
            vec![
                Line::from(Span::styled(
                    format!("{ERROR_ICON} {error}"),
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                )),
                Line::default(),
                Line::from(vec![
                    Span::styled("r", Style::default().fg(Color::Yellow)),
                    Span::styled(" try again  ", Style::default().fg(Color::DarkGray)),
                    Span::styled("esc", Style::default().fg(Color::Yellow)),
                    Span::styled(" dismiss", Style::default().fg(Color::DarkGray)),
                ]),
            ]
        } else {
            return;
        };

        let height = lines.len() as u16;
        let [centered] = Layout::vertical([Constraint::Length(height)])
            .flex(Flex::Center)
            .areas(area);
        let paragraph = Paragraph::new(lines)
            .centered()
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, centered);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tui_dispatch::testing::*;

    fn render(loading: bool, error: Option<&str>) -> String {
        let mut render = RenderHarness::new(50, 8);
        let mut component = LoadingError;
        render.render_to_string_plain(|frame| {
            let props = LoadingErrorProps {
                loading,
                error,
                spinner: "|",
            };
            component.render(frame, frame.area(), props);
        })
    }

    #[test]
    fn test_render_loading() {
        let output = render(true, None);
        assert!(output.contains("Loading..."));
    }

    #[test]
    fn test_render_error_with_retry_hint() {
        let output = render(false, Some("Could not load the list."));
        assert!(output.contains("Could not load the list."));
        assert!(output.contains("try again"));
    }

    #[test]
    fn test_hidden_when_idle() {
        let props = LoadingErrorProps {
            loading: false,
            error: None,
            spinner: "|",
        };
        assert!(!props.is_visible());
        assert!(render(false, None).trim().is_empty());
    }
}
