//! Palette view: the card slots, regeneration, and click-to-copy.

mod error;

pub use error::PaletteError;

use crate::clipboard::Clipboard;
use crate::color::Rgb;
use crate::overlay::{self, OverlayRegistry};
use crate::timer::TimerService;
use rand::Rng;

/// Largest number of cards a palette can hold.
pub const MAX_CARDS: usize = 12;

#[derive(Debug, Clone, PartialEq)]
pub struct PaletteConfig {
    pub cards: usize,
    pub notifications: bool,
    pub auto_close_secs: f64,
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            cards: 5,
            notifications: true,
            auto_close_secs: 5.0,
        }
    }
}

/// One rendering slot. Holds only what is displayed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Card {
    pub header: Option<Rgb>,
    pub hex_text: String,
    pub rgb_text: String,
}

impl Card {
    fn render(&mut self, color: Rgb) {
        self.hex_text = color.to_hex_css_string();
        self.rgb_text = color.to_css_string();
        self.header = Some(color);
    }
}

/// Ordered colors as last rendered, one per card.
pub type Palette = Vec<Rgb>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyOutcome {
    /// Copied; `notified` tells whether the clipboard overlay was shown.
    Copied { hex: String, notified: bool },
    /// The clipboard rejected the write. Nothing was shown.
    Failed { hex: String },
}

pub struct PaletteView<R: Rng, C: Clipboard> {
    cards: Vec<Card>,
    current: Palette,
    rng: R,
    clipboard: C,
    notifications: bool,
    auto_close_secs: f64,
    focused: Option<usize>,
}

impl<R: Rng, C: Clipboard> PaletteView<R, C> {
    pub fn new(config: &PaletteConfig, rng: R, clipboard: C) -> Result<Self, PaletteError> {
        match config.cards {
            0 => return Err(PaletteError::NoCards),
            n if n > MAX_CARDS => return Err(PaletteError::TooManyCards(n)),
            _ => {}
        }

        let mut view = Self {
            cards: vec![Card::default(); config.cards],
            current: Vec::new(),
            rng,
            clipboard,
            notifications: config.notifications,
            auto_close_secs: config.auto_close_secs,
            focused: None,
        };
        view.regenerate_palette();
        Ok(view)
    }

    /// Give every card a new color and replace the current palette.
    pub fn regenerate_palette(&mut self) {
        let mut palette = Vec::with_capacity(self.cards.len());
        for card in &mut self.cards {
            let color = Rgb::random(&mut self.rng);
            card.render(color);
            palette.push(color);
        }
        self.current = palette;
    }

    /// Copy the hex text shown on card `index` and, if enabled, confirm it in the clipboard overlay.
    ///
    /// The overlay content is written before the clipboard is touched so it is
    /// already current when the overlay appears. A failed write is logged and
    /// only suppresses the notification.
    pub async fn handle_card_activated<T: TimerService>(
        &mut self,
        index: usize,
        overlays: &mut OverlayRegistry<T>,
    ) -> Result<CopyOutcome, PaletteError> {
        let card = self.cards.get(index).ok_or(PaletteError::UnknownCard(index))?;
        let hex = card.hex_text.clone();
        self.focused = Some(index);

        overlays.set_content(overlay::CLIPBOARD, overlay::CLIPBOARD_HEX_SLOT, hex.clone())?;

        if let Err(e) = self.clipboard.write_text(&hex).await {
            tracing::warn!(card = index, error = %e, "copy failed");
            return Ok(CopyOutcome::Failed { hex });
        }
        tracing::debug!(card = index, hex = %hex, "copied to clipboard");

        let notified = self.notifications;
        if notified {
            overlays
                .open(overlay::CLIPBOARD)?
                .auto_close(overlay::CLIPBOARD, self.auto_close_secs)?;
        }
        Ok(CopyOutcome::Copied { hex, notified })
    }

    /// Returns the new value of the flag.
    pub fn toggle_notifications(&mut self) -> bool {
        self.notifications = !self.notifications;
        self.notifications
    }

    pub fn notifications_enabled(&self) -> bool {
        self.notifications
    }

    pub fn current_palette(&self) -> &[Rgb] {
        &self.current
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn focused(&self) -> Option<usize> {
        self.focused
    }

    pub fn focus(&mut self, index: usize) {
        if index < self.cards.len() {
            self.focused = Some(index);
        }
    }

    #[cfg(test)]
    pub fn clipboard(&self) -> &C {
        &self.clipboard
    }

    #[cfg(test)]
    fn cards_mut(&mut self) -> &mut [Card] {
        &mut self.cards
    }
}
