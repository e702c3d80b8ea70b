use crate::overlay::OverlayError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PaletteError {
    #[error("palette needs at least one card")]
    NoCards,

    #[error("palette supports at most {max} cards, got {0}", max = super::MAX_CARDS)]
    TooManyCards(usize),

    #[error("no card at index {0}")]
    UnknownCard(usize),

    #[error(transparent)]
    Overlay(#[from] OverlayError),
}
