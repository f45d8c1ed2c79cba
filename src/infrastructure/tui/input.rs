use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::interface_adapter::controller::AppAction;

/// Translate a crossterm `KeyEvent` into an `AppAction`.
///
/// Returns `None` for keys with no binding; those are silently dropped.
pub fn key_to_action(key: KeyEvent) -> Option<AppAction> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(AppAction::Quit),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Tab | KeyCode::Down | KeyCode::Char('j') => Some(AppAction::FocusNext),
        KeyCode::BackTab | KeyCode::Up | KeyCode::Char('k') => Some(AppAction::FocusPrev),
        KeyCode::Enter | KeyCode::Char(' ') => Some(AppAction::Activate),
        KeyCode::Char(c @ '1'..='9') => {
            let index = c.to_digit(10).map(|d| d as usize - 1)?;
            Some(AppAction::ActivateIndex(index))
        }
        KeyCode::Esc | KeyCode::Backspace | KeyCode::Left | KeyCode::Char('h') => {
            Some(AppAction::NavigateBack)
        }
        KeyCode::Char('q') => Some(AppAction::Quit),
        _ => None,
    }
}

// =============================================================================
// Tests
// =============================================================================
