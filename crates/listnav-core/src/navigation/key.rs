use std::str::FromStr;

use crate::selection::{Hover, SelectionState};
use crate::Error;

/// The six navigation keys the list reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavKey {
    Up,
    Down,
    PageUp,
    PageDown,
    Home,
    End,
}

impl NavKey {
    pub const ALL: [NavKey; 6] = [
        NavKey::Up,
        NavKey::Down,
        NavKey::PageUp,
        NavKey::PageDown,
        NavKey::Home,
        NavKey::End,
    ];

    pub fn name(self) -> &'static str {
        match self {
            NavKey::Up => "up",
            NavKey::Down => "down",
            NavKey::PageUp => "pageup",
            NavKey::PageDown => "pagedown",
            NavKey::Home => "home",
            NavKey::End => "end",
        }
    }
}

impl FromStr for NavKey {
    type Err = Error;

    /// Accepts plain names ("up", "pgdn") and DOM-style names ("ArrowUp", "PageDown").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        let name = lower.strip_prefix("arrow").unwrap_or(lower.as_str());
        match name {
            "up" => Ok(NavKey::Up),
            "down" => Ok(NavKey::Down),
            "pageup" | "pgup" => Ok(NavKey::PageUp),
            "pagedown" | "pgdn" => Ok(NavKey::PageDown),
            "home" => Ok(NavKey::Home),
            "end" => Ok(NavKey::End),
            _ => Err(Error::UnknownKey(s.to_string())),
        }
    }
}

impl std::fmt::Display for NavKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Result of delivering a navigation key to the selection.
///
/// Every outcome counts as handled: hosts suppress the key's default action
/// (page scrolling) even when the list is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    /// The active index was set; `from == to` when the key landed in place
    Moved { from: usize, to: usize },
    /// The list is empty; nothing changed
    Empty,
}

impl KeyOutcome {
    pub fn is_handled(self) -> bool {
        true
    }

    pub fn target(self) -> Option<usize> {
        match self {
            KeyOutcome::Moved { to, .. } => Some(to),
            KeyOutcome::Empty => None,
        }
    }
}

/// Index a key moves to, or `None` for an empty list.
///
/// Movement starts from the hovered item while the pointer is authoritative,
/// otherwise from the active index. Up and Down wrap around.
pub fn next_index(key: NavKey, length: usize, active: usize, hover: Hover) -> Option<usize> {
    if length == 0 {
        return None;
    }
    let base = hover.index().unwrap_or(active);
    let next = match key {
        NavKey::Up => (base % length + length - 1) % length,
        NavKey::Down => (base % length + 1) % length,
        NavKey::PageUp | NavKey::Home => 0,
        NavKey::PageDown | NavKey::End => length - 1,
    };
    Some(next)
}

/// Apply a key to the selection.
///
/// A transition always hands authority back to the keyboard, even if the
/// pointer still sits over an item.
pub fn apply_key<E>(state: &mut SelectionState<E>, key: NavKey) -> KeyOutcome {
    let from = state.active_index();
    match next_index(key, state.length(), from, state.hover()) {
        Some(to) => {
            state.set_active_index(to);
            state.set_hover(Hover::None);
            KeyOutcome::Moved { from, to }
        }
        None => KeyOutcome::Empty,
    }
}
