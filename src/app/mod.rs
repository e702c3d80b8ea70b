pub mod actions;
pub mod events;
pub mod state;

use crate::clipboard::{Clipboard, SystemClipboard};
use crate::config::Config;
use crate::export;
use crate::input;
use crate::overlay::{self, OverlayRegistry};
use crate::palette::{CopyOutcome, PaletteView};
use crate::timer::{TimerService, TokioTimer};
use crate::tui::{self, TuiTerminal};
use actions::Action;
use anyhow::Context;
use events::Event;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use state::{AppState, Toast};
use tokio::sync::mpsc;

pub type AppView = PaletteView<StdRng, SystemClipboard>;
pub type AppOverlays = OverlayRegistry<TokioTimer>;

/// Event loop state. Generic over its collaborators so tests can drive
/// actions with a simulated clock and an in-memory clipboard.
pub struct App<R: Rng = StdRng, C: Clipboard = SystemClipboard, T: TimerService = TokioTimer> {
    cfg: Config,
    state: AppState,
    view: PaletteView<R, C>,
    overlays: OverlayRegistry<T>,
    tx: mpsc::Sender<Event>,
    rx: Option<mpsc::Receiver<Event>>,
}

/// RNG for palette generation: seeded when configured, otherwise from the OS.
pub fn palette_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    }
}

impl App {
    /// Must be called from within the tokio runtime.
    pub fn new(cfg: Config) -> anyhow::Result<Self> {
        let (tx, rx) = mpsc::channel::<Event>(256);

        let overlays = OverlayRegistry::new(overlay::default_overlays(), TokioTimer::new(tx.clone()))
            .context("build overlays")?;
        let view = PaletteView::new(
            &cfg.palette_config(),
            palette_rng(cfg.palette.seed),
            SystemClipboard::new(),
        )
        .context("build palette")?;

        Ok(Self {
            cfg,
            state: AppState::new(),
            view,
            overlays,
            tx,
            rx: Some(rx),
        })
    }

    pub async fn run(&mut self, terminal: &mut TuiTerminal) -> anyhow::Result<()> {
        let mut rx = self.rx.take().context("app already running")?;

        input::spawn_input_task(self.tx.clone(), self.cfg.input.mouse);

        tui::draw(terminal, &mut self.state, &self.view, &self.overlays)?;

        while let Some(ev) = rx.recv().await {
            match ev {
                Event::Input(input_ev) => {
                    if let Some(action) = input::map_input_to_action(input_ev) {
                        self.handle_action(action).await?;
                    }
                }
                Event::Timer(fired) => {
                    self.overlays
                        .handle_timer_fired(&fired)
                        .context("deliver overlay timer")?;
                }
            }

            if self.state.should_quit {
                break;
            }

            tui::draw(terminal, &mut self.state, &self.view, &self.overlays)?;
        }

        Ok(())
    }
}

impl<R: Rng, C: Clipboard, T: TimerService> App<R, C, T> {
    async fn handle_action(&mut self, action: Action) -> anyhow::Result<()> {
        match action {
            Action::Quit => self.state.should_quit = true,
            Action::ReloadPalette => self.view.regenerate_palette(),
            Action::ToggleCopyNotifier => {
                let on = self.view.toggle_notifications();
                let label = if on { "on" } else { "off" };
                self.state.toast = Some(Toast::success(format!("Copy notifications {label}")));
            }
            Action::ExportColorsJson => {
                let result = export::write_json(
                    self.view.current_palette(),
                    &self.cfg.export.dir,
                    &self.cfg.export.file_name,
                );
                self.state.toast = Some(match result {
                    Ok(path) => Toast::success(format!("Exported {}", path.display())),
                    Err(e) => {
                        tracing::error!("export failed: {e:#}");
                        Toast::error(format!("Export failed: {e:#}"))
                    }
                });
            }
            Action::ToggleFullscreen => self.state.fullscreen = !self.state.fullscreen,
            Action::ToggleShortcuts => {
                if self.overlays.is_visible(overlay::SHORTCUTS)? {
                    self.overlays.close(overlay::SHORTCUTS)?;
                } else {
                    self.overlays.open(overlay::SHORTCUTS)?;
                }
            }
            Action::Dismiss => {
                if !self.overlays.close_last()? {
                    self.state.should_quit = true;
                }
            }
            Action::SelectPrev => {
                let i = self.view.focused().map_or(0, |i| i.saturating_sub(1));
                self.view.focus(i);
            }
            Action::SelectNext => {
                let last = self.view.cards().len() - 1;
                let i = self.view.focused().map_or(0, |i| (i + 1).min(last));
                self.view.focus(i);
            }
            Action::CopySelected => {
                let i = self.view.focused().unwrap_or(0);
                self.copy_card(i).await?;
            }
            Action::CopyCard(i) => {
                if i < self.view.cards().len() {
                    self.copy_card(i).await?;
                }
            }
            Action::Click { column, row } => {
                // The shortcuts popup covers the cards; a click dismisses it.
                if self.overlays.is_visible(overlay::SHORTCUTS)? {
                    self.overlays.close(overlay::SHORTCUTS)?;
                } else if let Some(i) = self.state.card_at(column, row) {
                    self.copy_card(i).await?;
                }
            }
            Action::Resize => {}
        }
        Ok(())
    }

    async fn copy_card(&mut self, index: usize) -> anyhow::Result<()> {
        let outcome = self
            .view
            .handle_card_activated(index, &mut self.overlays)
            .await
            .with_context(|| format!("copy card {}", index + 1))?;
        match outcome {
            CopyOutcome::Copied { hex, notified } => {
                tracing::info!(hex = %hex, notified, "card copied");
            }
            CopyOutcome::Failed { hex } => {
                tracing::debug!(hex = %hex, "copy notifier suppressed");
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::RecordingClipboard;
    use crate::timer::ManualTimer;
    use ratatui::layout::Rect;
    use state::ToastKind;
    use std::time::Duration;

    type TestApp = App<StdRng, RecordingClipboard, ManualTimer>;

    fn app(cfg: Config) -> TestApp {
        let (tx, rx) = mpsc::channel(8);
        App {
            view: PaletteView::new(
                &cfg.palette_config(),
                StdRng::seed_from_u64(9),
                RecordingClipboard::default(),
            )
            .unwrap(),
            overlays: OverlayRegistry::new(overlay::default_overlays(), ManualTimer::new()).unwrap(),
            cfg,
            state: AppState::new(),
            tx,
            rx: Some(rx),
        }
    }

    /// Advance the simulated clock and deliver expiries as the event loop would.
    fn advance(app: &mut TestApp, secs: u64) {
        let fired = app.overlays.timer_mut().advance(Duration::from_secs(secs));
        for f in &fired {
            app.overlays.handle_timer_fired(f).unwrap();
        }
    }

    #[tokio::test]
    async fn test_toggle_shortcuts() {
        let mut app = app(Config::default());
        app.handle_action(Action::ToggleShortcuts).await.unwrap();
        assert!(app.overlays.is_visible(overlay::SHORTCUTS).unwrap());
        app.handle_action(Action::ToggleShortcuts).await.unwrap();
        assert!(!app.overlays.is_visible(overlay::SHORTCUTS).unwrap());
        assert!(!app.state.should_quit);
    }

    #[tokio::test]
    async fn test_dismiss_closes_overlay_before_quitting() {
        let mut app = app(Config::default());
        app.handle_action(Action::ToggleShortcuts).await.unwrap();

        app.handle_action(Action::Dismiss).await.unwrap();
        assert!(!app.overlays.is_visible(overlay::SHORTCUTS).unwrap());
        assert!(!app.state.should_quit);

        app.handle_action(Action::Dismiss).await.unwrap();
        assert!(app.state.should_quit);
    }

    #[tokio::test]
    async fn test_dismiss_after_notifier_expired_closes_shortcuts() {
        let mut app = app(Config::default());
        app.handle_action(Action::ToggleShortcuts).await.unwrap();
        app.handle_action(Action::CopySelected).await.unwrap();
        assert!(app.overlays.is_visible(overlay::CLIPBOARD).unwrap());

        advance(&mut app, 5);
        assert!(!app.overlays.is_visible(overlay::CLIPBOARD).unwrap());

        app.handle_action(Action::Dismiss).await.unwrap();
        assert!(!app.state.should_quit);
        assert!(!app.overlays.is_visible(overlay::SHORTCUTS).unwrap());
    }

    #[tokio::test]
    async fn test_selection_is_clamped() {
        let mut app = app(Config::default());
        let last = app.view.cards().len() - 1;

        app.handle_action(Action::SelectPrev).await.unwrap();
        assert_eq!(app.view.focused(), Some(0));
        app.handle_action(Action::SelectPrev).await.unwrap();
        assert_eq!(app.view.focused(), Some(0));

        for _ in 0..20 {
            app.handle_action(Action::SelectNext).await.unwrap();
        }
        assert_eq!(app.view.focused(), Some(last));
    }

    #[tokio::test]
    async fn test_copy_card_out_of_range_is_ignored() {
        let mut app = app(Config::default());
        app.handle_action(Action::CopyCard(99)).await.unwrap();
        assert!(app.view.clipboard().written.is_empty());
        assert!(!app.overlays.is_visible(overlay::CLIPBOARD).unwrap());

        let hex = app.view.cards()[1].hex_text.clone();
        app.handle_action(Action::CopyCard(1)).await.unwrap();
        assert_eq!(app.view.clipboard().written, vec![hex]);
        assert!(app.overlays.is_visible(overlay::CLIPBOARD).unwrap());
    }

    #[tokio::test]
    async fn test_toggles() {
        let mut app = app(Config::default());

        app.handle_action(Action::ToggleFullscreen).await.unwrap();
        assert!(app.state.fullscreen);
        app.handle_action(Action::ToggleFullscreen).await.unwrap();
        assert!(!app.state.fullscreen);

        assert!(app.view.notifications_enabled());
        app.handle_action(Action::ToggleCopyNotifier).await.unwrap();
        assert!(!app.view.notifications_enabled());
        assert_eq!(app.state.toast.as_ref().unwrap().kind, ToastKind::Success);

        app.handle_action(Action::CopyCard(0)).await.unwrap();
        assert_eq!(app.view.clipboard().written.len(), 1);
        assert!(!app.overlays.is_visible(overlay::CLIPBOARD).unwrap());
    }

    #[tokio::test]
    async fn test_click_copies_card_under_pointer() {
        let mut app = app(Config::default());
        app.state.card_areas = vec![Rect::new(0, 0, 10, 10), Rect::new(10, 0, 10, 10)];
        let hex = app.view.cards()[1].hex_text.clone();

        app.handle_action(Action::Click { column: 12, row: 3 }).await.unwrap();
        assert_eq!(app.view.clipboard().written, vec![hex]);

        app.handle_action(Action::Click { column: 40, row: 3 }).await.unwrap();
        assert_eq!(app.view.clipboard().written.len(), 1);
    }

    #[tokio::test]
    async fn test_click_with_shortcuts_open_only_dismisses() {
        let mut app = app(Config::default());
        app.state.card_areas = vec![Rect::new(0, 0, 10, 10)];
        app.handle_action(Action::ToggleShortcuts).await.unwrap();

        app.handle_action(Action::Click { column: 2, row: 2 }).await.unwrap();
        assert!(!app.overlays.is_visible(overlay::SHORTCUTS).unwrap());
        assert!(!app.overlays.is_visible(overlay::CLIPBOARD).unwrap());
        assert!(app.view.clipboard().written.is_empty());
    }

    #[tokio::test]
    async fn test_export_writes_current_palette() {
        let tmp = tempfile::tempdir().unwrap();
        let mut cfg = Config::default();
        cfg.export.dir = tmp.path().to_path_buf();
        let mut app = app(cfg);

        app.handle_action(Action::ExportColorsJson).await.unwrap();
        assert_eq!(app.state.toast.as_ref().unwrap().kind, ToastKind::Success);

        let raw = std::fs::read_to_string(tmp.path().join("colors.json")).unwrap();
        for c in app.view.current_palette() {
            assert!(raw.contains(&c.to_hex_css_string()));
        }
    }
}
