//! UI-agnostic input handling for the checklist screen.

use crate::loadout::{KitId, LoadoutManager};
use crate::store::KeyValueStore;
use crate::ui::checklist_scene::selectable_rows;
use crate::ui::TuiRenderer;
use crossterm::event::KeyCode;
use ratatui::backend::Backend;

/// Input events for the checklist screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChecklistInput {
    /// Move cursor up
    Up,
    /// Move cursor down
    Down,
    /// Toggle the item under the cursor
    Toggle,
    /// Toggle the n-th kit (0-based, kit bar order)
    Kit(usize),
    /// Ask to reset everything
    Reset,
    /// Answer yes to the reset prompt
    Confirm,
    /// Answer no to the reset prompt; ignored otherwise
    Decline,
    /// Dismiss the reset prompt, or quit when no prompt is open
    Cancel,
    /// Quit
    Quit,
    /// Any other key
    Other,
}

/// Result of processing checklist input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChecklistResult {
    /// Stay on the checklist
    Continue,
    /// Leave the application
    Quit,
    /// An operation failed; the message is also shown in the footer
    Failed(String),
}

impl ChecklistInput {
    pub fn from_key(code: KeyCode) -> Self {
        match code {
            KeyCode::Up | KeyCode::Char('k') => ChecklistInput::Up,
            KeyCode::Down | KeyCode::Char('j') => ChecklistInput::Down,
            KeyCode::Char(' ') | KeyCode::Enter => ChecklistInput::Toggle,
            KeyCode::Char(c @ '1'..='9') => ChecklistInput::Kit(c as usize - '1' as usize),
            KeyCode::Char('r') | KeyCode::Char('R') => ChecklistInput::Reset,
            KeyCode::Char('y') | KeyCode::Char('Y') => ChecklistInput::Confirm,
            KeyCode::Char('n') | KeyCode::Char('N') => ChecklistInput::Decline,
            KeyCode::Esc => ChecklistInput::Cancel,
            KeyCode::Char('q') | KeyCode::Char('Q') => ChecklistInput::Quit,
            _ => ChecklistInput::Other,
        }
    }
}

/// Process input for the checklist screen.
///
/// Cursor moves only redraw; everything else goes through the manager, which
/// persists and then renders through `tui`.
pub fn process_checklist_input<S, B>(
    input: ChecklistInput,
    manager: &mut LoadoutManager<S>,
    tui: &mut TuiRenderer<B>,
) -> ChecklistResult
where
    S: KeyValueStore,
    B: Backend,
{
    if tui.screen.confirming_reset {
        return match input {
            ChecklistInput::Confirm => {
                tui.screen.confirming_reset = false;
                tui.screen.selected = 0;
                tui.screen.message = Some("Checklist reset".to_string());
                outcome(manager.reset(tui), tui)
            }
            ChecklistInput::Decline | ChecklistInput::Cancel | ChecklistInput::Reset => {
                tui.screen.confirming_reset = false;
                outcome(tui.redraw().map_err(Into::into), tui)
            }
            ChecklistInput::Quit => ChecklistResult::Quit,
            _ => ChecklistResult::Continue,
        };
    }

    match input {
        ChecklistInput::Up => {
            tui.screen.move_up();
            outcome(tui.redraw().map_err(Into::into), tui)
        }
        ChecklistInput::Down => {
            let rows = tui.view().map(|v| selectable_rows(v).len()).unwrap_or(0);
            tui.screen.move_down(rows);
            outcome(tui.redraw().map_err(Into::into), tui)
        }
        ChecklistInput::Toggle => {
            let Some((zone, index)) = tui.view().and_then(|v| tui.screen.selected_item(v)) else {
                return ChecklistResult::Continue;
            };
            tui.screen.message = None;
            outcome(
                manager.toggle_item(zone.key(), index, tui).map(|_| ()),
                tui,
            )
        }
        ChecklistInput::Kit(n) => {
            let Some(kit) = KitId::ALL.get(n).copied() else {
                return ChecklistResult::Continue;
            };
            // The result message must be in place before the manager renders
            let enabling = !manager.active_kits().iter().any(|k| k == kit.key());
            tui.screen.message = Some(format!(
                "{} kit {}",
                kit.name(),
                if enabling { "enabled" } else { "disabled" }
            ));
            outcome(manager.toggle_kit(kit.key(), tui).map(|_| ()), tui)
        }
        ChecklistInput::Reset => {
            tui.screen.confirming_reset = true;
            outcome(tui.redraw().map_err(Into::into), tui)
        }
        ChecklistInput::Cancel | ChecklistInput::Quit => ChecklistResult::Quit,
        ChecklistInput::Confirm | ChecklistInput::Decline | ChecklistInput::Other => {
            ChecklistResult::Continue
        }
    }
}

fn outcome<B: Backend>(result: crate::error::Result<()>, tui: &mut TuiRenderer<B>) -> ChecklistResult {
    match result {
        Ok(()) => ChecklistResult::Continue,
        Err(e) => {
            tracing::error!(error = %e, "checklist action failed");
            let message = e.to_string();
            tui.screen.message = Some(message.clone());
            // Best effort: surface the error even if drawing is what failed
            let _ = tui.redraw();
            ChecklistResult::Failed(message)
        }
    }
}
