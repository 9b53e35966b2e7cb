use std::collections::HashMap;
use std::fmt;

use crossterm::event::{KeyCode, KeyModifiers};
use listnav_core::config::{KeyBindingOptions, KeymapConfig};
use listnav_core::NavKey;
use tracing::warn;

use crate::input::Action;

/// Parsed key binding (key code + modifiers)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyBinding {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyBinding {
    pub fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    pub fn simple(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::NONE)
    }

    pub fn ctrl(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::CONTROL)
    }

    pub fn shift(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::SHIFT)
    }
}

impl fmt::Display for KeyBinding {
    /// Vim-style notation, the same format the config accepts
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self.code {
            KeyCode::Char(' ') => "Space".to_string(),
            KeyCode::Char(c) => {
                if self.modifiers == KeyModifiers::SHIFT && c.is_ascii_uppercase() {
                    return write!(f, "{}", c);
                }
                if self.modifiers == KeyModifiers::NONE {
                    return write!(f, "{}", c);
                }
                c.to_string()
            }
            KeyCode::Enter => "CR".to_string(),
            KeyCode::Esc => "Esc".to_string(),
            KeyCode::Tab => "Tab".to_string(),
            KeyCode::BackTab => "BackTab".to_string(),
            KeyCode::Backspace => "BS".to_string(),
            KeyCode::Up => "Up".to_string(),
            KeyCode::Down => "Down".to_string(),
            KeyCode::Left => "Left".to_string(),
            KeyCode::Right => "Right".to_string(),
            KeyCode::Home => "Home".to_string(),
            KeyCode::End => "End".to_string(),
            KeyCode::PageUp => "PageUp".to_string(),
            KeyCode::PageDown => "PageDown".to_string(),
            KeyCode::F(n) => format!("F{}", n),
            other => format!("{:?}", other),
        };
        let prefix = if self.modifiers.contains(KeyModifiers::CONTROL) {
            "C-"
        } else if self.modifiers.contains(KeyModifiers::SHIFT) {
            "S-"
        } else {
            ""
        };
        write!(f, "<{}{}>", prefix, name)
    }
}

/// What currently has keyboard focus in the host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusKind {
    List,
    Input,
}

/// Where a key press happens, checked against `KeyBindingOptions`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BindingContext<'a> {
    pub scope: &'a str,
    pub focus: FocusKind,
}

/// Runtime keymap for efficient key-to-action lookup.
///
/// This is the key binding service of the list: navigation bindings only
/// fire when the `KeyBindingOptions` allow them in the current context.
pub struct Keymap {
    bindings: HashMap<KeyBinding, Action>,
    options: KeyBindingOptions,
}

impl Default for Keymap {
    fn default() -> Self {
        Self::from_config(&KeymapConfig::default(), &KeyBindingOptions::default())
    }
}

impl Keymap {
    /// Create a keymap from configuration
    pub fn from_config(config: &KeymapConfig, options: &KeyBindingOptions) -> Self {
        let mut bindings = HashMap::new();

        // Helper to add binding with conflict detection
        let mut add_binding = |key_str: &str, action: Action| {
            if let Some(binding) = parse_key_binding(key_str) {
                if let Some(existing) = bindings.get(&binding) {
                    warn!(
                        "Key conflict: '{}' already bound to {:?}, ignoring binding to {:?}",
                        key_str, existing, action
                    );
                } else {
                    bindings.insert(binding, action);
                }
            } else {
                warn!("Invalid key binding: '{}', ignoring", key_str);
            }
        };

        add_binding(&config.quit, Action::Quit);
        add_binding(&config.move_up, Action::Navigate(NavKey::Up));
        add_binding(&config.move_down, Action::Navigate(NavKey::Down));
        add_binding(&config.page_up, Action::Navigate(NavKey::PageUp));
        add_binding(&config.page_down, Action::Navigate(NavKey::PageDown));
        add_binding(&config.jump_to_top, Action::Navigate(NavKey::Home));
        add_binding(&config.jump_to_bottom, Action::Navigate(NavKey::End));
        add_binding(&config.select, Action::Select);
        add_binding(&config.filter, Action::StartFilter);

        // Ctrl+C always quits
        bindings.insert(KeyBinding::ctrl(KeyCode::Char('c')), Action::Quit);
        // The six navigation keys are always available
        for (code, key) in NAVIGATION_KEYS {
            bindings
                .entry(KeyBinding::simple(code))
                .or_insert(Action::Navigate(key));
        }
        bindings.insert(KeyBinding::simple(KeyCode::Esc), Action::ClearFilter);

        Self {
            bindings,
            options: options.clone(),
        }
    }

    /// Get action for a key binding, ignoring binding options
    pub fn get(&self, binding: &KeyBinding) -> Option<&Action> {
        self.bindings.get(binding)
    }

    pub fn options(&self) -> &KeyBindingOptions {
        &self.options
    }

    /// Navigation bindings fire in this context
    pub fn allows(&self, context: BindingContext<'_>) -> bool {
        let options = &self.options;
        options.enabled
            && (options.scopes.is_empty() || options.scopes.iter().any(|s| s == context.scope))
            && (context.focus != FocusKind::Input || options.enable_on_input)
    }

    /// Action for a key press, with navigation filtered by the binding options
    pub fn resolve(&self, binding: &KeyBinding, context: BindingContext<'_>) -> Option<Action> {
        match self.bindings.get(binding)? {
            Action::Navigate(_) if !self.allows(context) => None,
            action => Some(action.clone()),
        }
    }

    /// All bindings sorted by their notation
    pub fn entries(&self) -> Vec<(KeyBinding, Action)> {
        let mut entries: Vec<_> = self
            .bindings
            .iter()
            .map(|(binding, action)| (*binding, action.clone()))
            .collect();
        entries.sort_by_key(|(binding, _)| binding.to_string());
        entries
    }
}

/// Navigation keys bound regardless of configuration
pub const NAVIGATION_KEYS: [(KeyCode, NavKey); 6] = [
    (KeyCode::Up, NavKey::Up),
    (KeyCode::Down, NavKey::Down),
    (KeyCode::PageUp, NavKey::PageUp),
    (KeyCode::PageDown, NavKey::PageDown),
    (KeyCode::Home, NavKey::Home),
    (KeyCode::End, NavKey::End),
];

/// Parse Vim-style key notation into KeyBinding
/// Supported formats:
/// - Single char: "j", "k", "q", "/"
/// - Uppercase (Shift): "G"
/// - Ctrl: "<C-f>", "<C-b>"
/// - Shift: "<S-Tab>"
/// - Special keys: "<CR>", "<Esc>", "<Tab>", "<Space>", "<Up>", "<Down>",
///   "<PageUp>", "<PageDown>", "<Home>", "<End>"
pub fn parse_key_binding(s: &str) -> Option<KeyBinding> {
    let s = s.trim();

    if s.len() > 2 && s.starts_with('<') && s.ends_with('>') {
        let inner = &s[1..s.len() - 1];
        return parse_special_key(inner);
    }

    let mut chars = s.chars();
    let c = chars.next()?;
    if chars.next().is_some() {
        return None;
    }
    if c.is_ascii_uppercase() {
        return Some(KeyBinding::shift(KeyCode::Char(c)));
    }
    Some(KeyBinding::simple(KeyCode::Char(c)))
}

/// Parse special key notation (content inside <...>)
fn parse_special_key(inner: &str) -> Option<KeyBinding> {
    if let Some(rest) = inner.strip_prefix("C-") {
        let key = parse_key_name(rest)?;
        return Some(KeyBinding::ctrl(key));
    }

    if let Some(rest) = inner.strip_prefix("S-") {
        let key = parse_key_name(rest)?;
        return Some(KeyBinding::shift(key));
    }

    parse_key_name(inner).map(KeyBinding::simple)
}

/// Parse a key name (without modifiers)
fn parse_key_name(name: &str) -> Option<KeyCode> {
    // Navigation keys share their names with the core parser
    if let Ok(key) = name.parse::<NavKey>() {
        return NAVIGATION_KEYS
            .iter()
            .find(|(_, nav)| *nav == key)
            .map(|(code, _)| *code);
    }
    match name.to_lowercase().as_str() {
        "cr" | "enter" | "return" => Some(KeyCode::Enter),
        "esc" | "escape" => Some(KeyCode::Esc),
        "tab" => Some(KeyCode::Tab),
        "backtab" => Some(KeyCode::BackTab),
        "space" | "spc" => Some(KeyCode::Char(' ')),
        "bs" | "backspace" => Some(KeyCode::Backspace),
        "left" => Some(KeyCode::Left),
        "right" => Some(KeyCode::Right),
        other => {
            if let Some(n) = other.strip_prefix('f').and_then(|n| n.parse::<u8>().ok()) {
                return (1..=12).contains(&n).then_some(KeyCode::F(n));
            }
            let mut chars = name.chars();
            let c = chars.next()?;
            if chars.next().is_some() {
                return None;
            }
            Some(KeyCode::Char(c.to_ascii_lowercase()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list_context() -> BindingContext<'static> {
        BindingContext {
            scope: "list",
            focus: FocusKind::List,
        }
    }

    #[test]
    fn test_parse_simple_keys() {
        assert_eq!(
            parse_key_binding("j"),
            Some(KeyBinding::simple(KeyCode::Char('j')))
        );
        assert_eq!(
            parse_key_binding("/"),
            Some(KeyBinding::simple(KeyCode::Char('/')))
        );
        assert_eq!(
            parse_key_binding("G"),
            Some(KeyBinding::shift(KeyCode::Char('G')))
        );
        assert_eq!(parse_key_binding("gg"), None);
        assert_eq!(parse_key_binding(""), None);
    }

    #[test]
    fn test_parse_special_keys() {
        assert_eq!(
            parse_key_binding("<C-f>"),
            Some(KeyBinding::ctrl(KeyCode::Char('f')))
        );
        assert_eq!(
            parse_key_binding("<CR>"),
            Some(KeyBinding::simple(KeyCode::Enter))
        );
        assert_eq!(
            parse_key_binding("<PageDown>"),
            Some(KeyBinding::simple(KeyCode::PageDown))
        );
        assert_eq!(
            parse_key_binding("<pgup>"),
            Some(KeyBinding::simple(KeyCode::PageUp))
        );
        assert_eq!(
            parse_key_binding("<S-Tab>"),
            Some(KeyBinding::shift(KeyCode::Tab))
        );
        assert_eq!(
            parse_key_binding("<F5>"),
            Some(KeyBinding::simple(KeyCode::F(5)))
        );
        assert_eq!(parse_key_binding("<Nope>"), None);
    }

    #[test]
    fn test_display_round_trips_through_parser() {
        for text in ["j", "G", "/", "<C-f>", "<CR>", "<PageUp>", "<S-Tab>", "<Space>"] {
            let binding = parse_key_binding(text).unwrap();
            assert_eq!(parse_key_binding(&binding.to_string()), Some(binding), "{}", text);
        }
    }

    #[test]
    fn test_default_keymap() {
        let keymap = Keymap::default();
        assert_eq!(
            keymap.get(&KeyBinding::simple(KeyCode::Char('j'))),
            Some(&Action::Navigate(NavKey::Down))
        );
        assert_eq!(
            keymap.get(&KeyBinding::simple(KeyCode::End)),
            Some(&Action::Navigate(NavKey::End))
        );
        assert_eq!(
            keymap.get(&KeyBinding::ctrl(KeyCode::Char('c'))),
            Some(&Action::Quit)
        );
        assert_eq!(
            keymap.get(&KeyBinding::simple(KeyCode::Enter)),
            Some(&Action::Select)
        );
    }

    #[test]
    fn test_conflicting_binding_keeps_first() {
        let config = KeymapConfig {
            move_down: "q".to_string(),
            ..Default::default()
        };
        let keymap = Keymap::from_config(&config, &KeyBindingOptions::default());
        assert_eq!(
            keymap.get(&KeyBinding::simple(KeyCode::Char('q'))),
            Some(&Action::Quit)
        );
        // Arrow key still navigates
        assert_eq!(
            keymap.get(&KeyBinding::simple(KeyCode::Down)),
            Some(&Action::Navigate(NavKey::Down))
        );
    }

    #[test]
    fn test_disabled_bindings_drop_navigation_only() {
        let options = KeyBindingOptions {
            enabled: false,
            ..Default::default()
        };
        let keymap = Keymap::from_config(&KeymapConfig::default(), &options);
        let down = KeyBinding::simple(KeyCode::Down);
        assert_eq!(keymap.resolve(&down, list_context()), None);
        assert_eq!(
            keymap.resolve(&KeyBinding::simple(KeyCode::Char('q')), list_context()),
            Some(Action::Quit)
        );
    }

    #[test]
    fn test_scopes_and_input_focus() {
        let options = KeyBindingOptions {
            enabled: true,
            scopes: vec!["list".to_string()],
            enable_on_input: false,
        };
        let keymap = Keymap::from_config(&KeymapConfig::default(), &options);
        let up = KeyBinding::simple(KeyCode::Up);

        assert_eq!(
            keymap.resolve(&up, list_context()),
            Some(Action::Navigate(NavKey::Up))
        );
        let other_scope = BindingContext {
            scope: "preview",
            focus: FocusKind::List,
        };
        assert_eq!(keymap.resolve(&up, other_scope), None);
        let input = BindingContext {
            scope: "list",
            focus: FocusKind::Input,
        };
        assert_eq!(keymap.resolve(&up, input), None);
    }

    #[test]
    fn test_entries_are_sorted() {
        let keymap = Keymap::default();
        let entries = keymap.entries();
        let names: Vec<String> = entries.iter().map(|(b, _)| b.to_string()).collect();
        let mut sorted = names.clone();
        sorted.sort();
        assert_eq!(names, sorted);
        assert!(entries.len() >= 12);
    }
}
