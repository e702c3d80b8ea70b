//! The row of color cards

use crate::app::AppView;
use crate::palette::Card;
use crate::tui::theme::{Theme, get_theme};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Render every card side by side. Returns the area each card occupies, in card order.
pub fn render(frame: &mut Frame, view: &AppView, area: Rect) -> Vec<Rect> {
    let theme = get_theme();
    let cards = view.cards();
    let n = cards.len() as u32;

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints((0..n).map(|_| Constraint::Ratio(1, n)))
        .split(area);

    for (i, (card, rect)) in cards.iter().zip(cols.iter()).enumerate() {
        render_card(frame, card, i, view.focused() == Some(i), *rect, &theme);
    }
    cols.to_vec()
}

fn render_card(frame: &mut Frame, card: &Card, index: usize, focused: bool, area: Rect, theme: &Theme) {
    let border = if focused {
        theme.palette.border_focus
    } else {
        theme.palette.border
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_set(theme.border_set())
        .border_style(Style::default().fg(border));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),    // Color header
            Constraint::Length(1), // Spacing
            Constraint::Length(1), // Hex
            Constraint::Length(1), // rgb(...)
        ])
        .split(inner);

    if let Some(color) = card.header {
        let style = Style::default()
            .bg(Color::Rgb(color.r, color.g, color.b))
            .fg(theme.palette.ink_on(color));
        frame.render_widget(Paragraph::new(format!(" {}", index + 1)).style(style), rows[0]);
    }

    let width = rows[2].width as usize;
    let marker = if focused {
        theme.icons.selected
    } else {
        theme.icons.unselected
    };
    let hex_style = if focused {
        Style::default()
            .fg(theme.palette.accent)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.palette.fg_primary)
    };
    let hex_line = Line::from(vec![
        Span::styled(format!("{marker} "), Style::default().fg(theme.palette.accent)),
        Span::styled(
            super::truncate_str(&card.hex_text, width.saturating_sub(2)),
            hex_style,
        ),
    ]);
    frame.render_widget(Paragraph::new(hex_line).alignment(Alignment::Center), rows[2]);

    let rgb_line = Line::from(Span::styled(
        super::truncate_str(&card.rgb_text, width),
        Style::default().fg(theme.palette.fg_secondary),
    ));
    frame.render_widget(Paragraph::new(rgb_line).alignment(Alignment::Center), rows[3]);
}
