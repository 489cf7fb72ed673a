use artbox::{
    integrations::ratatui::ArtBox, Alignment as ArtAlignment, Color as ArtColor, ColorStop, Fill,
    LinearGradient, Renderer, fonts,
};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::Component;
use crate::action::Action;

pub const TITLE: &str = "Pokedex";

/// FIGlet title with the page indicator underneath
pub struct TitleBanner;

pub struct TitleBannerProps {
    pub page: u32,
    pub offset: u32,
    pub count: usize,
}

fn title_fill() -> Fill {
    let stops = vec![
        ColorStop::new(0.0, ArtColor::rgb(239, 83, 80)),
        ColorStop::new(0.5, ArtColor::rgb(255, 205, 80)),
        ColorStop::new(1.0, ArtColor::rgb(239, 83, 80)),
    ];
    Fill::Linear(LinearGradient::new(5.0, stops))
}

impl Component<Action> for TitleBanner {
    type Props<'a> = TitleBannerProps;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let chunks = Layout::vertical([
            Constraint::Fill(1),   // FIGlet title
            Constraint::Length(1), // Page indicator
        ])
        .split(area);

        let renderer = Renderer::new(fonts::stack(&["terminus", "miniwi"]))
            .with_plain_fallback()
            .with_alignment(ArtAlignment::Center)
            .with_fill(title_fill());
        frame.render_widget(ArtBox::new(&renderer, TITLE), chunks[0]);

        let range = if props.count == 0 {
            String::from("empty")
        } else {
            format!(
                "{}-{}",
                props.offset.saturating_add(1),
                (props.offset as usize).saturating_add(props.count)
            )
        };
        let page_line = Line::from(vec![Span::styled(
            format!("page {} · entries {range}", props.page),
            Style::default().fg(Color::DarkGray),
        )])
        .centered();
        frame.render_widget(Paragraph::new(page_line), chunks[1]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tui_dispatch::testing::*;

    fn render(props: TitleBannerProps) -> String {
        let mut render = RenderHarness::new(60, 5);
        let mut banner = TitleBanner;
        let mut props = Some(props);
        render.render_to_string_plain(|frame| {
            if let Some(props) = props.take() {
                banner.render(frame, frame.area(), props);
            }
        })
    }

    #[test]
    fn test_page_range() {
        let output = render(TitleBannerProps {
            page: 2,
            offset: 20,
            count: 20,
        });
        assert!(output.contains("page 2 · entries 21-40"));
    }

    #[test]
    fn test_empty_page() {
        let output = render(TitleBannerProps {
            page: 1,
            offset: 0,
            count: 0,
        });
        assert!(output.contains("entries empty"));
    }

    #[test]
    fn test_huge_offset_does_not_overflow() {
        let output = render(TitleBannerProps {
            page: u32::MAX / 20 + 1,
            offset: u32::MAX,
            count: 3,
        });
        assert!(output.contains("entries 4294967295-"));
    }
}
