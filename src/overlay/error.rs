use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OverlayError {
    #[error("unknown overlay: {0:?}")]
    UnknownOverlay(String),

    #[error("overlay {key:?} has no content slot {slot:?}")]
    MissingChildElement { key: String, slot: String },

    #[error("overlay {0:?} registered twice")]
    DuplicateOverlay(String),

    #[error("invalid overlay key: {0:?}")]
    InvalidKey(String),
}
