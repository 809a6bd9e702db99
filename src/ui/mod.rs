//! Terminal UI for the checklist.

pub mod checklist_scene;
mod reset_confirm;

use crate::view::{LoadoutView, Render};
use checklist_scene::{selectable_rows, ChecklistScreen};
use ratatui::{backend::Backend, Terminal};
use std::io;

/// Renderer that draws every manager update onto a ratatui terminal.
///
/// Keeps the latest view so cursor moves can redraw without touching the
/// manager.
pub struct TuiRenderer<B: Backend> {
    terminal: Terminal<B>,
    pub screen: ChecklistScreen,
    view: Option<LoadoutView>,
}

impl<B: Backend> TuiRenderer<B> {
    pub fn new(terminal: Terminal<B>) -> Self {
        Self {
            terminal,
            screen: ChecklistScreen::new(),
            view: None,
        }
    }

    pub fn view(&self) -> Option<&LoadoutView> {
        self.view.as_ref()
    }

    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }

    pub fn terminal_mut(&mut self) -> &mut Terminal<B> {
        &mut self.terminal
    }

    /// Redraw the last view, e.g. after the cursor moved.
    pub fn redraw(&mut self) -> io::Result<()> {
        let Some(view) = &self.view else {
            return Ok(());
        };
        let screen = &self.screen;
        self.terminal.draw(|frame| {
            let area = frame.size();
            screen.draw(frame, area, view);
            if screen.confirming_reset {
                reset_confirm::draw_reset_confirm(frame, view);
            }
        })?;
        Ok(())
    }
}

/// Run `setup`; if it fails, run `undo` before handing back the error.
///
/// Used for terminal setup steps that follow raw mode being enabled.
pub fn undo_on_error<T, E>(
    setup: impl FnOnce() -> Result<T, E>,
    undo: impl FnOnce(),
) -> Result<T, E> {
    let result = setup();
    if result.is_err() {
        undo();
    }
    result
}

impl<B: Backend> Render for TuiRenderer<B> {
    fn render(&mut self, view: &LoadoutView) -> io::Result<()> {
        self.screen.clamp(selectable_rows(view).len());
        self.view = Some(view.clone());
        self.redraw()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loadout::{build_catalog, CheckedState};
    use ratatui::backend::TestBackend;

    fn buffer_text(renderer: &TuiRenderer<TestBackend>) -> String {
        let buffer = renderer.terminal().backend().buffer();
        buffer
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect::<String>()
    }

    fn renderer() -> TuiRenderer<TestBackend> {
        TuiRenderer::new(Terminal::new(TestBackend::new(80, 60)).unwrap())
    }

    #[test]
    fn test_render_shows_zones_and_kits() {
        let mut tui = renderer();
        let view = LoadoutView::build(&build_catalog(&[]), &CheckedState::new(), &[], None);
        tui.render(&view).unwrap();

        let text = buffer_text(&tui);
        assert!(text.contains("Front of Truck"));
        assert!(text.contains("Windshield"));
        assert!(text.contains("Auxiliary Kits"));
        assert!(!text.contains("Helmet"));
    }

    #[test]
    fn test_render_shows_active_kit_zone() {
        let mut tui = renderer();
        let active = vec!["ppe_kit".to_string()];
        let view = LoadoutView::build(&build_catalog(&active), &CheckedState::new(), &active, None);
        tui.render(&view).unwrap();
        assert!(buffer_text(&tui).contains("PPE Kit"));
    }

    #[test]
    fn test_render_clamps_cursor() {
        let mut tui = renderer();
        tui.screen.selected = 500;
        let view = LoadoutView::build(&build_catalog(&[]), &CheckedState::new(), &[], None);
        tui.render(&view).unwrap();
        assert_eq!(tui.screen.selected, 29);
    }

    #[test]
    fn test_reset_dialog_overlay() {
        let mut tui = renderer();
        tui.screen.confirming_reset = true;
        let view = LoadoutView::build(&build_catalog(&[]), &CheckedState::new(), &[], None);
        tui.render(&view).unwrap();
        assert!(buffer_text(&tui).contains("Confirm Reset"));
    }

    #[test]
    fn test_undo_on_error_runs_undo_only_on_failure() {
        let mut undone = false;
        let ok: Result<u8, &str> = undo_on_error(|| Ok(7), || undone = true);
        assert_eq!(ok, Ok(7));
        assert!(!undone);

        let err: Result<u8, &str> = undo_on_error(|| Err("no tty"), || undone = true);
        assert_eq!(err, Err("no tty"));
        assert!(undone);
    }
}
