//! "Copied to clipboard" overlay

use crate::app::AppOverlays;
use crate::color::Rgb;
use crate::overlay;
use crate::tui::theme::get_theme;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

pub fn render(frame: &mut Frame, overlays: &AppOverlays, area: Rect) {
    let theme = get_theme();
    let Ok(hex) = overlays.content(overlay::CLIPBOARD, overlay::CLIPBOARD_HEX_SLOT) else {
        return;
    };

    // Bottom-center, above the footer.
    let width = 36u16.min(area.width);
    let height = 3u16.min(area.height);
    let popup = Rect::new(
        area.x + (area.width - width) / 2,
        area.y + area.height.saturating_sub(height + 2),
        width,
        height,
    );

    let block = Block::default()
        .borders(Borders::ALL)
        .border_set(theme.border_set())
        .border_style(Style::default().fg(theme.palette.border_focus))
        .style(Style::default().bg(theme.palette.bg_popup))
        .title(format!(" {} Copied ", theme.icons.clipboard))
        .title_style(Style::default().fg(theme.palette.accent));

    let swatch = match hex.parse::<Rgb>() {
        Ok(c) => Span::styled("  ", Style::default().bg(Color::Rgb(c.r, c.g, c.b))),
        Err(_) => Span::raw(""),
    };
    let line = Line::from(vec![
        swatch,
        Span::raw(" "),
        Span::styled(
            hex.to_string(),
            Style::default()
                .fg(theme.palette.fg_primary)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(" copied", Style::default().fg(theme.palette.fg_secondary)),
    ]);

    frame.render_widget(Clear, popup);
    frame.render_widget(
        Paragraph::new(line).block(block).alignment(Alignment::Center),
        popup,
    );
}
