//! Overlay registry: which dismissible surfaces are visible, with timed auto-close.
//!
//! Each overlay carries a tagged visibility state. A pending auto-close is
//! part of that state, so an overlay can never own more than one live timer:
//! every transition out of `VisiblePendingClose` cancels the handle it holds.
//! The renderer only ever asks the registry what is visible.

mod error;

pub use error::OverlayError;

use crate::timer::{TimerFired, TimerHandle, TimerService};
use std::time::Duration;

/// Clipboard copy confirmation.
pub const CLIPBOARD: &str = "clipboard";
/// Slot inside the clipboard overlay holding the copied hex string.
pub const CLIPBOARD_HEX_SLOT: &str = "hex";
/// Keyboard shortcut reference.
pub const SHORTCUTS: &str = "shortcuts";

/// Overlays known to the application, in draw order.
pub fn default_overlays() -> Vec<OverlayConfig> {
    vec![
        OverlayConfig::new(SHORTCUTS),
        OverlayConfig::new(CLIPBOARD).with_slot(CLIPBOARD_HEX_SLOT),
    ]
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverlayConfig {
    pub key: String,
    pub slots: Vec<String>,
}

impl OverlayConfig {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            slots: Vec::new(),
        }
    }

    pub fn with_slot(mut self, slot: impl Into<String>) -> Self {
        self.slots.push(slot.into());
        self
    }
}

/// Observable overlay state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayState {
    Hidden,
    Visible,
    VisiblePendingClose,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Visibility {
    Hidden,
    Visible,
    VisiblePendingClose(TimerHandle),
}

#[derive(Debug)]
struct Overlay {
    key: String,
    visibility: Visibility,
    /// (slot, text) in declaration order.
    content: Vec<(String, String)>,
}

#[derive(Debug)]
pub struct OverlayRegistry<T: TimerService> {
    overlays: Vec<Overlay>,
    timer: T,
    /// Keys of visible overlays, oldest first.
    open_order: Vec<String>,
}

impl<T: TimerService> OverlayRegistry<T> {
    /// Build the registry from a static overlay list. Every overlay starts hidden.
    pub fn new(configs: Vec<OverlayConfig>, timer: T) -> Result<Self, OverlayError> {
        let mut overlays: Vec<Overlay> = Vec::with_capacity(configs.len());
        for cfg in configs {
            let key = cfg.key.trim().to_string();
            if key.is_empty() {
                return Err(OverlayError::InvalidKey(cfg.key));
            }
            if overlays.iter().any(|o| o.key == key) {
                return Err(OverlayError::DuplicateOverlay(key));
            }
            overlays.push(Overlay {
                key,
                visibility: Visibility::Hidden,
                content: cfg.slots.into_iter().map(|s| (s, String::new())).collect(),
            });
        }

        Ok(Self {
            overlays,
            timer,
            open_order: Vec::new(),
        })
    }

    fn index_of(&self, key: &str) -> Result<usize, OverlayError> {
        let key = key.trim();
        self.overlays
            .iter()
            .position(|o| o.key == key)
            .ok_or_else(|| OverlayError::UnknownOverlay(key.to_string()))
    }

    /// Show the overlay. Any pending auto-close is cancelled, also when already visible.
    pub fn open(&mut self, key: &str) -> Result<&mut Self, OverlayError> {
        let idx = self.index_of(key)?;
        let overlay = &mut self.overlays[idx];
        match overlay.visibility {
            Visibility::Hidden => {
                overlay.visibility = Visibility::Visible;
                self.open_order.push(overlay.key.clone());
                tracing::debug!(key = %overlay.key, "overlay opened");
            }
            Visibility::Visible => {}
            Visibility::VisiblePendingClose(handle) => {
                self.timer.cancel(handle);
                overlay.visibility = Visibility::Visible;
            }
        }
        Ok(self)
    }

    /// Hide the overlay. Closing a hidden overlay does nothing.
    pub fn close(&mut self, key: &str) -> Result<&mut Self, OverlayError> {
        let idx = self.index_of(key)?;
        let overlay = &mut self.overlays[idx];
        match overlay.visibility {
            Visibility::Hidden => return Ok(self),
            Visibility::Visible => {}
            Visibility::VisiblePendingClose(handle) => self.timer.cancel(handle),
        }
        overlay.visibility = Visibility::Hidden;
        self.open_order.retain(|k| *k != overlay.key);
        tracing::debug!(key = %overlay.key, "overlay closed");
        Ok(self)
    }

    /// Close the most recently opened overlay that is still visible.
    /// Returns false when nothing was visible.
    pub fn close_last(&mut self) -> Result<bool, OverlayError> {
        let Some(key) = self.open_order.last().cloned() else {
            return Ok(false);
        };
        self.close(&key)?;
        Ok(true)
    }

    /// Schedule the overlay to close after `after_seconds`.
    ///
    /// Only visible overlays get a timer; on a hidden overlay this is a no-op.
    /// A timer already pending on the overlay is replaced.
    pub fn auto_close(&mut self, key: &str, after_seconds: f64) -> Result<&mut Self, OverlayError> {
        let idx = self.index_of(key)?;
        let overlay = &mut self.overlays[idx];
        match overlay.visibility {
            Visibility::Hidden => return Ok(self),
            Visibility::Visible => {}
            Visibility::VisiblePendingClose(old) => self.timer.cancel(old),
        }
        let handle = self
            .timer
            .schedule(&overlay.key, seconds_to_duration(after_seconds));
        overlay.visibility = Visibility::VisiblePendingClose(handle);
        Ok(self)
    }

    /// Apply an expired timer. Only the handle currently pending on the overlay closes it.
    pub fn handle_timer_fired(&mut self, fired: &TimerFired) -> Result<bool, OverlayError> {
        let idx = self.index_of(&fired.key)?;
        if self.overlays[idx].visibility != Visibility::VisiblePendingClose(fired.handle) {
            tracing::debug!(key = %fired.key, handle = ?fired.handle, "stale timer ignored");
            return Ok(false);
        }
        self.close(&fired.key)?;
        Ok(true)
    }

    /// Set the text of a named content slot inside the overlay.
    pub fn set_content(
        &mut self,
        key: &str,
        slot: &str,
        text: impl Into<String>,
    ) -> Result<&mut Self, OverlayError> {
        let idx = self.index_of(key)?;
        let overlay = &mut self.overlays[idx];
        let entry = overlay
            .content
            .iter_mut()
            .find(|(name, _)| name == slot)
            .ok_or_else(|| OverlayError::MissingChildElement {
                key: overlay.key.clone(),
                slot: slot.to_string(),
            })?;
        entry.1 = text.into();
        Ok(self)
    }

    pub fn content(&self, key: &str, slot: &str) -> Result<&str, OverlayError> {
        let overlay = &self.overlays[self.index_of(key)?];
        overlay
            .content
            .iter()
            .find(|(name, _)| name == slot)
            .map(|(_, text)| text.as_str())
            .ok_or_else(|| OverlayError::MissingChildElement {
                key: overlay.key.clone(),
                slot: slot.to_string(),
            })
    }

    pub fn state(&self, key: &str) -> Result<OverlayState, OverlayError> {
        Ok(match self.overlays[self.index_of(key)?].visibility {
            Visibility::Hidden => OverlayState::Hidden,
            Visibility::Visible => OverlayState::Visible,
            Visibility::VisiblePendingClose(_) => OverlayState::VisiblePendingClose,
        })
    }

    pub fn is_visible(&self, key: &str) -> Result<bool, OverlayError> {
        Ok(self.state(key)? != OverlayState::Hidden)
    }

    /// Keys of visible overlays, in draw order.
    pub fn visible(&self) -> impl Iterator<Item = &str> {
        self.overlays
            .iter()
            .filter(|o| o.visibility != Visibility::Hidden)
            .map(|o| o.key.as_str())
    }

    #[cfg(test)]
    pub fn timer_mut(&mut self) -> &mut T {
        &mut self.timer
    }
}

/// Seconds to a timer delay: milliseconds truncated, negative or non-finite input is zero.
pub fn seconds_to_duration(seconds: f64) -> Duration {
    if !seconds.is_finite() || seconds <= 0.0 {
        return Duration::ZERO;
    }
    Duration::from_millis((seconds * 1000.0).floor() as u64)
}
