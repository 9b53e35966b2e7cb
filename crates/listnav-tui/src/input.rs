use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use listnav_core::NavKey;

use crate::app::App;
use crate::keymap::{BindingContext, FocusKind, KeyBinding, Keymap};

/// Input action that can be performed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Quit,
    /// Move the selection
    Navigate(NavKey),
    /// Pick the active item
    Select,
    StartFilter,
    ClearFilter,
    Confirm,
    Cancel,
    InputChar(char),
    Backspace,
    None,
}

/// Handle a key event and return the corresponding action
pub fn handle_key_event(key: KeyEvent, app: &App, keymap: &Keymap) -> Action {
    let binding = KeyBinding::new(key.code, key.modifiers);

    if app.is_input_mode() {
        // Non-character keys may still navigate while typing a filter
        if !matches!(key.code, KeyCode::Char(_)) {
            let context = BindingContext {
                scope: App::SCOPE,
                focus: FocusKind::Input,
            };
            if let Some(action @ Action::Navigate(_)) = keymap.resolve(&binding, context) {
                return action;
            }
        }
        return handle_input_mode(key);
    }

    let context = BindingContext {
        scope: App::SCOPE,
        focus: FocusKind::List,
    };
    keymap.resolve(&binding, context).unwrap_or(Action::None)
}

/// Handle key events while the filter input has focus
fn handle_input_mode(key: KeyEvent) -> Action {
    match (key.code, key.modifiers) {
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => Action::Quit,
        (KeyCode::Enter, _) => Action::Confirm,
        (KeyCode::Esc, _) => Action::Cancel,
        (KeyCode::Backspace, _) => Action::Backspace,
        (KeyCode::Char(c), KeyModifiers::NONE) | (KeyCode::Char(c), KeyModifiers::SHIFT) => {
            Action::InputChar(c)
        }
        _ => Action::None,
    }
}
