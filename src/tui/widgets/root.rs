//! Root layout widget - orchestrates main layout structure

use crate::app::state::{AppState, ToastKind};
use crate::app::{AppOverlays, AppView};
use crate::overlay;
use crate::tui::theme::get_theme;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::{cards, notifier, shortcuts};

/// Main layout structure:
/// ┌─────────────────────────────────────────────┐
/// │ huebox                          notify: on  │
/// ├────────┬────────┬────────┬────────┬─────────┤
/// │████████│████████│████████│████████│█████████│
/// │#A1B2C3 │#...    │        │        │         │
/// │rgb(..) │        │        │        │         │
/// └────────┴────────┴────────┴────────┴─────────┘
///  footer: key hints / toast
///
/// Fullscreen drops the header and footer. Visible overlays draw last.
pub fn render(frame: &mut Frame, state: &mut AppState, view: &AppView, overlays: &AppOverlays) {
    let root = frame.area();

    let cards_area = if state.fullscreen {
        root
    } else {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(6),    // Cards
                Constraint::Length(1), // Footer
            ])
            .split(root);
        render_header(frame, view, rows[0]);
        render_footer(frame, state, rows[2]);
        rows[1]
    };

    state.card_areas = cards::render(frame, view, cards_area);

    for key in overlays.visible() {
        match key {
            overlay::SHORTCUTS => shortcuts::render(frame, root),
            overlay::CLIPBOARD => notifier::render(frame, overlays, root),
            _ => {}
        }
    }
}

fn render_header(frame: &mut Frame, view: &AppView, area: Rect) {
    let theme = get_theme();
    let icons = &theme.icons;

    let block = Block::default()
        .borders(Borders::ALL)
        .border_set(theme.border_set())
        .border_style(Style::default().fg(theme.palette.border));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(10), Constraint::Length(24)])
        .split(inner);

    let title = Line::from(vec![
        Span::styled(format!(" {} ", icons.palette), Style::default().fg(theme.palette.accent)),
        Span::styled(
            "huebox",
            Style::default()
                .fg(theme.palette.fg_primary)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  {} colors", view.cards().len()),
            Style::default().fg(theme.palette.fg_secondary),
        ),
    ]);
    frame.render_widget(Paragraph::new(title), cols[0]);

    let (bell, label) = if view.notifications_enabled() {
        (icons.bell, "notify: on ")
    } else {
        (icons.bell_off, "notify: off")
    };
    let status = Line::from(vec![
        Span::styled(format!("{bell} "), Style::default().fg(theme.palette.accent_alt)),
        Span::styled(label, Style::default().fg(theme.palette.fg_secondary)),
    ])
    .right_aligned();
    frame.render_widget(Paragraph::new(status), cols[1]);
}

fn render_footer(frame: &mut Frame, state: &AppState, area: Rect) {
    let theme = get_theme();
    let icons = &theme.icons;
    let width = area.width as usize;

    if let Some(toast) = &state.toast
        && !toast.is_expired()
    {
        let (prefix, color) = match toast.kind {
            ToastKind::Success => (icons.success, theme.palette.accent),
            ToastKind::Error => (icons.error, theme.palette.fg_primary),
        };
        let line = Line::from(vec![
            Span::styled(format!(" {prefix} "), Style::default().fg(color)),
            Span::styled(
                super::truncate_str(&toast.message, width.saturating_sub(4)),
                Style::default().fg(theme.palette.fg_primary),
            ),
        ]);
        frame.render_widget(Paragraph::new(line), area);
        return;
    }

    let hint = |key: &'static str, desc: &'static str| {
        [
            Span::styled(
                format!(" {key}"),
                Style::default()
                    .fg(theme.palette.accent_alt)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!(" {desc} "), Style::default().fg(theme.palette.fg_secondary)),
        ]
    };
    let mut spans = Vec::new();
    spans.extend(hint("space", "new"));
    spans.extend(hint("enter", "copy"));
    spans.extend(hint("e", "export"));
    spans.extend(hint("f", "fullscreen"));
    spans.extend(hint("?", "help"));
    spans.extend(hint("q", "quit"));
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
