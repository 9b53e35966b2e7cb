use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub keymap: KeymapConfig,
    #[serde(default)]
    pub bindings: KeyBindingOptions,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Data directory path (log file lives here)
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    /// Log level, overridden by RUST_LOG
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            log_level: default_log_level(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Tick rate in milliseconds
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
    /// Attribute carrying the item index on rendered rows
    #[serde(default = "default_index_attribute")]
    pub index_attribute: String,
    /// Smooth scrolling of the list viewport
    #[serde(default)]
    pub scroll: ScrollConfig,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate(),
            index_attribute: default_index_attribute(),
            scroll: ScrollConfig::default(),
        }
    }
}

/// Easing curve applied to viewport scroll animations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EasingType {
    /// Jump at the end of the animation
    None,
    Linear,
    #[default]
    Cubic,
    Quintic,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrollConfig {
    /// Animate scroll requests instead of jumping
    #[serde(default = "default_true")]
    pub smooth_enabled: bool,
    /// Duration of one scroll animation
    #[serde(default = "default_animation_duration")]
    pub animation_duration_ms: u64,
    #[serde(default)]
    pub easing: EasingType,
    /// Redraw rate while an animation is running
    #[serde(default = "default_animation_fps")]
    pub animation_fps: u32,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            smooth_enabled: default_true(),
            animation_duration_ms: default_animation_duration(),
            easing: EasingType::default(),
            animation_fps: default_animation_fps(),
        }
    }
}

impl ScrollConfig {
    /// Redraw interval while animating; never below 1ms so polling cannot spin
    pub fn frame_interval(&self) -> Duration {
        match self.animation_fps {
            0 => Duration::from_millis(16),
            fps => Duration::from_millis((1000 / u64::from(fps)).max(1)),
        }
    }
}

/// Options forwarded verbatim to the key binding service.
///
/// The navigator stores them; their meaning belongs to whatever delivers the
/// keys (see `listnav_tui::keymap`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyBindingOptions {
    /// Bindings fire at all
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Scopes the bindings are restricted to; empty means every scope
    #[serde(default)]
    pub scopes: Vec<String>,
    /// Bindings fire while a text input has focus
    #[serde(default = "default_true")]
    pub enable_on_input: bool,
}

impl Default for KeyBindingOptions {
    fn default() -> Self {
        Self {
            enabled: true,
            scopes: Vec::new(),
            enable_on_input: true,
        }
    }
}

/// Keymap configuration using Vim-style notation
/// Format: "j", "k", "<C-j>" (Ctrl+j), "G" (Shift+g), "<CR>" (Enter), "<PageUp>"
///
/// Arrow keys, PageUp/PageDown, Home/End, Ctrl-C and Esc are always bound.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeymapConfig {
    #[serde(default = "default_key_quit")]
    pub quit: String,
    #[serde(default = "default_key_move_up")]
    pub move_up: String,
    #[serde(default = "default_key_move_down")]
    pub move_down: String,
    #[serde(default = "default_key_page_up")]
    pub page_up: String,
    #[serde(default = "default_key_page_down")]
    pub page_down: String,
    #[serde(default = "default_key_jump_to_top")]
    pub jump_to_top: String,
    #[serde(default = "default_key_jump_to_bottom")]
    pub jump_to_bottom: String,
    /// Pick the active item
    #[serde(default = "default_key_select")]
    pub select: String,
    /// Start typing a filter query
    #[serde(default = "default_key_filter")]
    pub filter: String,
}

impl Default for KeymapConfig {
    fn default() -> Self {
        Self {
            quit: default_key_quit(),
            move_up: default_key_move_up(),
            move_down: default_key_move_down(),
            page_up: default_key_page_up(),
            page_down: default_key_page_down(),
            jump_to_top: default_key_jump_to_top(),
            jump_to_bottom: default_key_jump_to_bottom(),
            select: default_key_select(),
            filter: default_key_filter(),
        }
    }
}

fn default_key_quit() -> String { "q".to_string() }
fn default_key_move_up() -> String { "k".to_string() }
fn default_key_move_down() -> String { "j".to_string() }
fn default_key_page_up() -> String { "<C-b>".to_string() }
fn default_key_page_down() -> String { "<C-f>".to_string() }
fn default_key_jump_to_top() -> String { "g".to_string() }
fn default_key_jump_to_bottom() -> String { "G".to_string() }
fn default_key_select() -> String { "<CR>".to_string() }
fn default_key_filter() -> String { "/".to_string() }

fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("listnav")
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

fn default_tick_rate() -> u64 {
    100
}

fn default_index_attribute() -> String {
    "data-index".to_string()
}

fn default_animation_duration() -> u64 {
    120
}

fn default_animation_fps() -> u32 {
    60
}

/// Expand tilde (~) in path to user's home directory
fn expand_tilde(path: &std::path::Path) -> PathBuf {
    if let Some(path_str) = path.to_str() {
        if let Some(stripped) = path_str.strip_prefix("~/") {
            if let Some(home) = dirs::home_dir() {
                return home.join(stripped);
            }
        } else if path_str == "~" {
            if let Some(home) = dirs::home_dir() {
                return home;
            }
        }
    }
    path.to_path_buf()
}

impl AppConfig {
    /// Load configuration from file or return defaults
    pub fn load() -> crate::Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load configuration from an explicit path; a missing file yields defaults
    pub fn load_from(path: &std::path::Path) -> crate::Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            Self::from_toml(&content)
        } else {
            Ok(Self::default())
        }
    }

    pub fn from_toml(content: &str) -> crate::Result<Self> {
        toml::from_str(content).map_err(|e| crate::Error::Config(e.to_string()))
    }

    pub fn to_toml(&self) -> crate::Result<String> {
        toml::to_string_pretty(self).map_err(|e| crate::Error::Config(e.to_string()))
    }

    /// Save configuration to file
    pub fn save(&self) -> crate::Result<()> {
        self.save_to(&Self::config_path())
    }

    /// Save configuration to an explicit path, creating parent directories
    pub fn save_to(&self, path: &std::path::Path) -> crate::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, self.to_toml()?)?;

        Ok(())
    }

    /// Get the configuration file path
    /// Always uses ~/.config/listnav/config.toml on all platforms
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("listnav")
            .join("config.toml")
    }

    /// Get the log file path
    pub fn log_path(&self) -> PathBuf {
        self.data_dir().join("listnav.log")
    }

    /// Get the data directory (with tilde expansion)
    pub fn data_dir(&self) -> PathBuf {
        expand_tilde(&self.general.data_dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_uses_defaults() {
        let config = AppConfig::from_toml("").unwrap();
        assert_eq!(config.ui.index_attribute, "data-index");
        assert_eq!(config.keymap.move_down, "j");
        assert!(config.bindings.enabled);
        assert!(config.bindings.scopes.is_empty());
        assert_eq!(config.ui.scroll.easing, EasingType::Cubic);
    }

    #[test]
    fn test_partial_sections() {
        let config = AppConfig::from_toml(
            r#"
            [ui]
            index_attribute = "data-row"

            [ui.scroll]
            easing = "linear"
            smooth_enabled = false

            [bindings]
            scopes = ["list"]
            enable_on_input = false
            "#,
        )
        .unwrap();
        assert_eq!(config.ui.index_attribute, "data-row");
        assert_eq!(config.ui.tick_rate_ms, 100);
        assert_eq!(config.ui.scroll.easing, EasingType::Linear);
        assert!(!config.ui.scroll.smooth_enabled);
        assert_eq!(config.ui.scroll.animation_fps, 60);
        assert_eq!(config.bindings.scopes, vec!["list".to_string()]);
        assert!(!config.bindings.enable_on_input);
        assert!(config.bindings.enabled);
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let err = AppConfig::from_toml("[ui\nbroken").unwrap_err();
        assert!(matches!(err, crate::Error::Config(_)));
    }

    #[test]
    fn test_serialized_config_reloads() {
        let mut config = AppConfig::default();
        config.keymap.quit = "<C-q>".to_string();
        let text = config.to_toml().unwrap();
        let reloaded = AppConfig::from_toml(&text).unwrap();
        assert_eq!(reloaded.keymap.quit, "<C-q>");
        assert_eq!(reloaded.bindings, config.bindings);
    }

    #[test]
    fn test_frame_interval() {
        let mut scroll = ScrollConfig::default();
        assert_eq!(scroll.frame_interval(), Duration::from_millis(16));
        scroll.animation_fps = 50;
        assert_eq!(scroll.frame_interval(), Duration::from_millis(20));
        scroll.animation_fps = 0;
        assert_eq!(scroll.frame_interval(), Duration::from_millis(16));
        // Absurd rates still leave the poll a timeout
        scroll.animation_fps = 5000;
        assert_eq!(scroll.frame_interval(), Duration::from_millis(1));
    }

    #[test]
    fn test_expand_tilde_leaves_absolute_paths() {
        let path = PathBuf::from("/tmp/listnav");
        assert_eq!(expand_tilde(&path), path);
    }
}
