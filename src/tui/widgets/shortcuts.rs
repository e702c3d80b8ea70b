//! Shortcut reference overlay

use crate::tui::theme::{Theme, get_theme};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

pub fn render(frame: &mut Frame, area: Rect) {
    let theme = get_theme();
    let icons = &theme.icons;

    let popup = super::centered_rect(64, 14, area);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_set(theme.border_set())
        .border_style(Style::default().fg(theme.palette.border_focus))
        .style(Style::default().bg(theme.palette.bg_popup))
        .title(format!(" {} Shortcuts ", icons.keyboard))
        .title_style(Style::default().fg(theme.palette.accent));

    frame.render_widget(Clear, popup);
    let inner = block.inner(popup);
    frame.render_widget(block, popup);

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(inner);

    let left = vec![
        section_header("Palette", &theme),
        keybind("Space / r", "New palette", &theme),
        keybind("e", "Export JSON", &theme),
        keybind("n", "Copy notifier", &theme),
        keybind("f / F11", "Fullscreen", &theme),
    ];
    frame.render_widget(Paragraph::new(left).wrap(Wrap { trim: false }), cols[0]);

    let right = vec![
        section_header("Cards", &theme),
        keybind("h / Left", "Previous", &theme),
        keybind("l / Right", "Next", &theme),
        keybind("Enter / c", "Copy hex", &theme),
        keybind("1-9", "Copy card N", &theme),
        keybind("Click", "Copy hex", &theme),
        Line::default(),
        section_header("General", &theme),
        keybind("? / F1", "This help", &theme),
        keybind("Esc", "Close / quit", &theme),
        keybind("q", "Quit", &theme),
    ];
    frame.render_widget(Paragraph::new(right).wrap(Wrap { trim: false }), cols[1]);
}

fn section_header(title: &str, theme: &Theme) -> Line<'static> {
    Line::from(vec![Span::styled(
        format!("━━ {} ━━", title),
        Style::default()
            .fg(theme.palette.accent)
            .add_modifier(Modifier::BOLD),
    )])
}

fn keybind(key: &str, desc: &str, theme: &Theme) -> Line<'static> {
    Line::from(vec![
        Span::styled(" ", Style::default()),
        Span::styled(
            format!("{:11}", key),
            Style::default()
                .fg(theme.palette.accent_alt)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(desc.to_string(), Style::default().fg(theme.palette.fg_primary)),
    ])
}
