use ratatui::layout::{Position, Rect};

#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub kind: ToastKind,
    pub created_at: std::time::Instant,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl Toast {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: ToastKind::Success,
            created_at: std::time::Instant::now(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: ToastKind::Error,
            created_at: std::time::Instant::now(),
        }
    }

    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed() > std::time::Duration::from_secs(3)
    }
}

#[derive(Debug, Default)]
pub struct AppState {
    pub should_quit: bool,
    /// Hide header and footer, cards take the whole frame.
    pub fullscreen: bool,

    /// Screen areas of the cards from the last draw, used for mouse hit-testing.
    pub card_areas: Vec<Rect>,

    pub toast: Option<Toast>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn card_at(&self, column: u16, row: u16) -> Option<usize> {
        let pos = Position::new(column, row);
        self.card_areas.iter().position(|area| area.contains(pos))
    }

    pub fn clear_expired_toast(&mut self) {
        if self.toast.as_ref().is_some_and(Toast::is_expired) {
            self.toast = None;
        }
    }
}
