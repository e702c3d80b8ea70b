//! System clipboard access

use thiserror::Error;

#[derive(Debug, Error)]
#[error("clipboard write failed: {0}")]
pub struct ClipboardError(String);

impl ClipboardError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self(reason.into())
    }
}

#[allow(async_fn_in_trait)]
pub trait Clipboard {
    async fn write_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// Clipboard backed by `arboard`. The handle is opened lazily and kept alive,
/// since some platforms drop the selection together with its owner.
#[derive(Default)]
pub struct SystemClipboard {
    inner: Option<arboard::Clipboard>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Clipboard for SystemClipboard {
    async fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        if text.is_empty() {
            return Err(ClipboardError::new("nothing to copy"));
        }
        if self.inner.is_none() {
            let c = arboard::Clipboard::new().map_err(|e| ClipboardError::new(e.to_string()))?;
            self.inner = Some(c);
        }
        let Some(clipboard) = self.inner.as_mut() else {
            return Err(ClipboardError::new("clipboard unavailable"));
        };
        clipboard
            .set_text(text.to_string())
            .map_err(|e| ClipboardError::new(e.to_string()))
    }
}

/// Records writes; fails every write when `fail` is set.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct RecordingClipboard {
    pub fail: bool,
    pub written: Vec<String>,
}

#[cfg(test)]
impl RecordingClipboard {
    pub fn failing() -> Self {
        Self {
            fail: true,
            written: Vec::new(),
        }
    }
}

#[cfg(test)]
impl Clipboard for RecordingClipboard {
    async fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        if self.fail {
            return Err(ClipboardError::new("permission denied"));
        }
        self.written.push(text.to_string());
        Ok(())
    }
}
