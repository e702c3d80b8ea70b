//! UI chrome colors - monochrome, so the generated colors stand out

use ratatui::style::Color;

#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub bg_popup: Color,
    pub fg_primary: Color,
    pub fg_secondary: Color,
    pub accent: Color,
    pub accent_alt: Color,
    pub border: Color,
    pub border_focus: Color,
    /// Text drawn on top of a light card header.
    pub ink_dark: Color,
    /// Text drawn on top of a dark card header.
    pub ink_light: Color,
}

impl Palette {
    pub const MONO: Self = Self {
        bg_popup: Color::Rgb(18, 18, 18),       // #121212 near black
        fg_primary: Color::Rgb(255, 255, 255),  // #ffffff white
        fg_secondary: Color::Rgb(136, 136, 136), // #888888 medium gray
        accent: Color::Rgb(255, 255, 255),      // #ffffff white
        accent_alt: Color::Rgb(200, 200, 200),  // #c8c8c8 light gray
        border: Color::Rgb(64, 64, 64),         // #404040 dark gray
        border_focus: Color::Rgb(230, 230, 230), // #e6e6e6
        ink_dark: Color::Rgb(0, 0, 0),
        ink_light: Color::Rgb(255, 255, 255),
    };

    /// Readable text color over a generated color.
    pub fn ink_on(&self, bg: crate::color::Rgb) -> Color {
        if bg.is_light() { self.ink_dark } else { self.ink_light }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::MONO
    }
}
