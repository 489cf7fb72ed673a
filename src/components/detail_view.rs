use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use super::Component;
use crate::action::Action;
use crate::state::{display_name, stat_fraction, BaseStat, CreatureDetail, MAX_BASE_STAT};

pub const NO_IMAGE: &str = "No image available";

/// Width of the stat bar in cells
const STAT_BAR_WIDTH: usize = 24;

/// Read-only rendering of one creature; no network, no local state
pub struct DetailView;

pub struct DetailViewProps<'a> {
    pub detail: &'a CreatureDetail,
}

/// Filled cells for a stat bar of `width` cells.
pub fn stat_bar_fill(base_value: u16, width: usize) -> usize {
    (stat_fraction(base_value) * width as f64).round() as usize
}

fn stat_label(name: &str) -> String {
    match name {
        "hp" => "HP".to_string(),
        "attack" => "ATK".to_string(),
        "defense" => "DEF".to_string(),
        "special-attack" => "SP.ATK".to_string(),
        "special-defense" => "SP.DEF".to_string(),
        "speed" => "SPD".to_string(),
        _ => name.to_ascii_uppercase(),
    }
}

fn stat_color(base_value: u16) -> Color {
    match base_value {
        0..=49 => Color::Red,
        50..=79 => Color::Yellow,
        80..=109 => Color::Green,
        _ => Color::Cyan,
    }
}

fn stat_line(stat: &BaseStat) -> Line<'static> {
    let filled = stat_bar_fill(stat.base_value, STAT_BAR_WIDTH);
    let empty = STAT_BAR_WIDTH - filled;
    Line::from(vec![
        Span::styled(
            format!("{:>7} ", stat_label(&stat.name)),
            Style::default().fg(Color::Gray),
        ),
        Span::styled(
            format!("{:>3} ", stat.base_value),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::styled("█".repeat(filled), Style::default().fg(stat_color(stat.base_value))),
        Span::styled("░".repeat(empty), Style::default().fg(Color::DarkGray)),
    ])
}

fn joined(names: &[String]) -> String {
    names
        .iter()
        .map(|name| display_name(name))
        .collect::<Vec<_>>()
        .join(", ")
}

fn section<'a>(label: &'a str, value: String) -> Line<'a> {
    Line::from(vec![
        Span::styled(format!("{label:<10}"), Style::default().fg(Color::DarkGray)),
        Span::raw(value),
    ])
}

impl Component<Action> for DetailView {
    type Props<'a> = DetailViewProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let detail = props.detail;
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Red))
            .title(Span::styled(
                format!(" {} ", detail.title()),
                Style::default().add_modifier(Modifier::BOLD),
            ));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let chunks = Layout::vertical([
            Constraint::Length(6),                        // Profile
            Constraint::Length(1),                        // Spacer
            Constraint::Length(1),                        // Stats heading
            Constraint::Length(detail.stats.len() as u16), // Stats
            Constraint::Min(0),
        ])
        .split(inner);

        let sprite = detail
            .display_sprite()
            .map(|url| Span::styled(url.to_string(), Style::default().fg(Color::Blue)))
            .unwrap_or_else(|| Span::styled(NO_IMAGE, Style::default().fg(Color::DarkGray)));

        let profile = vec![
            section("Types", joined(&detail.types)),
            section("Abilities", joined(&detail.abilities)),
            section("Height", detail.height_label()),
            section("Weight", detail.weight_label()),
            Line::from(vec![
                Span::styled(format!("{:<10}", "Sprite"), Style::default().fg(Color::DarkGray)),
                sprite,
            ]),
        ];
        frame.render_widget(
            Paragraph::new(profile).wrap(Wrap { trim: true }),
            chunks[0],
        );

        let heading = Line::from(Span::styled(
            format!("Base stats (of {MAX_BASE_STAT})"),
            Style::default().add_modifier(Modifier::BOLD),
        ));
        frame.render_widget(Paragraph::new(heading), chunks[2]);

        let stats: Vec<Line> = detail.stats.iter().map(stat_line).collect();
        frame.render_widget(Paragraph::new(stats), chunks[3]);
    }
}
