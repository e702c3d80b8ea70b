#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,

    // Shortcut actions
    ReloadPalette,
    ToggleCopyNotifier,
    ExportColorsJson,
    ToggleFullscreen,

    // Overlays
    ToggleShortcuts,
    /// Close the last opened overlay, or quit when nothing is open.
    Dismiss,

    // Cards
    SelectPrev,
    SelectNext,
    CopySelected,
    CopyCard(usize),
    /// Left click at a terminal cell.
    Click { column: u16, row: u16 },

    Resize,
}
