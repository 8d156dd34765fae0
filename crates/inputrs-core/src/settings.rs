// Inputrs Settings Module
// File-backed default implementation of the toolkit context

use std::path::{Path, PathBuf};

use crate::context::ToolkitContext;

/// Default number of buttons reported when the settings file is silent.
const DEFAULT_BUTTON_COUNT: i32 = 5;

/// Toolkit configuration loaded from a TOML file
/// (default: ~/.config/inputrs/settings.toml).
///
/// The button fields are static configuration; Caps Lock state and the
/// active layout identifier are live values the embedder updates through the
/// setters as the platform reports changes.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Forward buttons beyond the standard three
    extra_buttons_enabled: bool,

    /// Number of buttons the platform reports
    button_count: i32,

    /// Prefer national-layout key codes
    national_layouts: bool,

    /// Current Caps Lock latch state
    caps_lock_on: bool,

    /// Active keyboard layout / input-method identifier
    keyboard_layout_id: String,

    /// Path the settings were loaded from (for reload)
    source_path: Option<PathBuf>,
}

/// Errors that can occur when loading settings
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(String),

    #[error("Invalid setting value: {0}")]
    InvalidValue(String),
}

/// TOML representation for deserializing settings
#[derive(Debug, Clone, serde::Deserialize, Default)]
struct SettingsToml {
    #[serde(default)]
    buttons: Option<ButtonSettings>,

    #[serde(default)]
    keyboard: Option<KeyboardSettings>,
}

#[derive(Debug, Clone, serde::Deserialize, Default)]
struct ButtonSettings {
    #[serde(default)]
    extra_buttons: Option<bool>,

    #[serde(default)]
    count: Option<i32>,
}

#[derive(Debug, Clone, serde::Deserialize, Default)]
struct KeyboardSettings {
    #[serde(default)]
    national_layouts: Option<bool>,

    #[serde(default)]
    layout_id: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self::new()
    }
}

impl Settings {
    /// Create settings with the built-in defaults
    pub fn new() -> Self {
        Self {
            extra_buttons_enabled: true,
            button_count: DEFAULT_BUTTON_COUNT,
            national_layouts: false,
            caps_lock_on: false,
            keyboard_layout_id: String::new(),
            source_path: None,
        }
    }

    /// Load settings from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, SettingsError> {
        let content = std::fs::read_to_string(&path)?;
        let mut settings = Self::from_toml(&content)?;
        settings.source_path = Some(path.as_ref().to_path_buf());
        Ok(settings)
    }

    /// Load settings from a TOML string
    pub fn from_toml(content: &str) -> Result<Self, SettingsError> {
        let toml_settings: SettingsToml =
            toml::from_str(content).map_err(|e| SettingsError::TomlParse(e.to_string()))?;

        let mut settings = Self::new();

        if let Some(buttons) = toml_settings.buttons {
            if let Some(extra) = buttons.extra_buttons {
                settings.extra_buttons_enabled = extra;
            }
            if let Some(count) = buttons.count {
                if count < 0 {
                    return Err(SettingsError::InvalidValue(format!(
                        "buttons.count must be non-negative, got {}",
                        count
                    )));
                }
                settings.button_count = count;
            }
        }

        if let Some(keyboard) = toml_settings.keyboard {
            if let Some(national) = keyboard.national_layouts {
                settings.national_layouts = national;
            }
            if let Some(layout) = keyboard.layout_id {
                settings.keyboard_layout_id = layout;
            }
        }

        Ok(settings)
    }

    /// Get the default settings path
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("inputrs").join("settings.toml"))
    }

    /// Load settings from the default path, or the built-in defaults when no
    /// file exists there
    pub fn load_default() -> Result<Self, SettingsError> {
        match Self::default_path() {
            Some(path) if path.exists() => Self::from_file(path),
            _ => Ok(Self::new()),
        }
    }

    /// Reload from the file the settings were originally loaded from.
    /// Live state (lock state, layout id) is preserved across the reload.
    pub fn reload(&mut self) -> Result<(), SettingsError> {
        let Some(path) = self.source_path.clone() else {
            return Ok(());
        };
        let fresh = Self::from_file(&path)?;
        self.extra_buttons_enabled = fresh.extra_buttons_enabled;
        self.button_count = fresh.button_count;
        self.national_layouts = fresh.national_layouts;
        Ok(())
    }

    /// Override the reported button count
    pub fn set_button_count(&mut self, count: i32) {
        self.button_count = count;
    }

    /// Enable or disable forwarding of extra buttons
    pub fn set_extra_buttons_enabled(&mut self, enabled: bool) {
        self.extra_buttons_enabled = enabled;
    }

    /// Update the Caps Lock latch state
    pub fn set_caps_lock_on(&mut self, on: bool) {
        self.caps_lock_on = on;
    }

    /// Update the active keyboard layout identifier
    pub fn set_keyboard_layout_id(&mut self, id: impl Into<String>) {
        self.keyboard_layout_id = id.into();
    }
}

impl ToolkitContext for Settings {
    fn extra_buttons_enabled(&self) -> bool {
        self.extra_buttons_enabled
    }

    fn button_count(&self) -> i32 {
        self.button_count
    }

    fn national_layouts(&self) -> bool {
        self.national_layouts
    }

    fn caps_lock_on(&self) -> bool {
        self.caps_lock_on
    }

    fn keyboard_layout_id(&self) -> &str {
        &self.keyboard_layout_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::new();
        assert!(settings.extra_buttons_enabled());
        assert_eq!(settings.button_count(), DEFAULT_BUTTON_COUNT);
        assert!(!settings.national_layouts());
        assert!(!settings.caps_lock_on());
        assert_eq!(settings.keyboard_layout_id(), "");
    }

    #[test]
    fn test_from_toml() {
        let settings = Settings::from_toml(
            r#"
            [buttons]
            extra_buttons = false
            count = 3

            [keyboard]
            national_layouts = true
            layout_id = "com.apple.keylayout.ABC"
            "#,
        )
        .unwrap();

        assert!(!settings.extra_buttons_enabled());
        assert_eq!(settings.button_count(), 3);
        assert!(settings.national_layouts());
        assert_eq!(settings.keyboard_layout_id(), "com.apple.keylayout.ABC");
    }

    #[test]
    fn test_from_toml_partial() {
        let settings = Settings::from_toml("[buttons]\ncount = 8\n").unwrap();
        assert_eq!(settings.button_count(), 8);
        assert!(settings.extra_buttons_enabled());
    }

    #[test]
    fn test_negative_button_count_rejected() {
        let result = Settings::from_toml("[buttons]\ncount = -1\n");
        assert!(matches!(result, Err(SettingsError::InvalidValue(_))));
    }

    #[test]
    fn test_invalid_toml_rejected() {
        let result = Settings::from_toml("buttons = nonsense [");
        assert!(matches!(result, Err(SettingsError::TomlParse(_))));
    }

    #[test]
    fn test_live_state_setters() {
        let mut settings = Settings::new();
        settings.set_caps_lock_on(true);
        settings.set_keyboard_layout_id("com.apple.inputmethod.SCIM.ITABC");
        assert!(settings.caps_lock_on());
        assert_eq!(
            settings.keyboard_layout_id(),
            "com.apple.inputmethod.SCIM.ITABC"
        );
    }
}
