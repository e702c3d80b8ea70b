//! Nerd Font glyphs used in the header, footer and overlays.
//! Requires a Nerd Font to be installed (https://www.nerdfonts.com)

#[derive(Debug, Clone)]
pub struct Icons {
    pub palette: &'static str,
    pub clipboard: &'static str,
    pub keyboard: &'static str,
    pub bell: &'static str,
    pub bell_off: &'static str,

    // Status
    pub success: &'static str,
    pub error: &'static str,

    // Selection
    pub selected: &'static str,
    pub unselected: &'static str,
}

impl Icons {
    pub const fn nerd() -> Self {
        Self {
            palette: "\u{f1fc}",        // nf-fa-paint_brush
            clipboard: "\u{f0ea}",      // nf-fa-clipboard
            keyboard: "\u{f11c}",       // nf-fa-keyboard_o
            bell: "\u{f0f3}",           // nf-fa-bell
            bell_off: "\u{f1f6}",       // nf-fa-bell_slash

            success: "\u{f00c}",        // nf-fa-check
            error: "\u{f00d}",          // nf-fa-times

            selected: "\u{f054}",       // nf-fa-chevron_right
            unselected: " ",
        }
    }
}

impl Default for Icons {
    fn default() -> Self {
        Self::nerd()
    }
}
