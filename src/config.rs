use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    /// Editor behavior settings
    #[serde(default)]
    pub editor: EditorConfig,

    /// Key assignments for navigation and commands
    #[serde(default)]
    pub keys: KeyConfig,
}

/// Editor behavior configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditorConfig {
    /// Reserve the bottom row for the status bar
    #[serde(default = "default_true")]
    pub show_status_bar: bool,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            show_status_bar: true,
        }
    }
}

/// Key assignments
///
/// Navigation keys are plain characters interpreted in Navigate mode.
/// `save` and `quit` are letters pressed together with Ctrl in any mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyConfig {
    #[serde(default = "default_left")]
    pub left: char,
    #[serde(default = "default_down")]
    pub down: char,
    #[serde(default = "default_up")]
    pub up: char,
    #[serde(default = "default_right")]
    pub right: char,

    /// Enter Insert mode at the cursor
    #[serde(default = "default_insert")]
    pub insert: char,

    /// Open a new line below the cursor and enter Insert mode
    #[serde(default = "default_open_below")]
    pub open_below: char,

    /// Delete the cursor's line
    #[serde(default = "default_delete_line")]
    pub delete_line: char,

    /// Ctrl+<key> writes the buffer
    #[serde(default = "default_save")]
    pub save: char,

    /// Ctrl+<key> leaves the editor
    #[serde(default = "default_quit")]
    pub quit: char,
}

fn default_true() -> bool {
    true
}

fn default_left() -> char {
    'h'
}

fn default_down() -> char {
    'j'
}

fn default_up() -> char {
    'k'
}

fn default_right() -> char {
    'l'
}

fn default_insert() -> char {
    'i'
}

fn default_open_below() -> char {
    'o'
}

fn default_delete_line() -> char {
    'd'
}

fn default_save() -> char {
    's'
}

fn default_quit() -> char {
    'c'
}

impl Default for KeyConfig {
    fn default() -> Self {
        Self {
            left: default_left(),
            down: default_down(),
            up: default_up(),
            right: default_right(),
            insert: default_insert(),
            open_below: default_open_below(),
            delete_line: default_delete_line(),
            save: default_save(),
            quit: default_quit(),
        }
    }
}

impl KeyConfig {
    /// Keys interpreted in Navigate mode, paired with their setting names
    fn navigate_keys(&self) -> [(&'static str, char); 7] {
        [
            ("left", self.left),
            ("down", self.down),
            ("up", self.up),
            ("right", self.right),
            ("insert", self.insert),
            ("open_below", self.open_below),
            ("delete_line", self.delete_line),
        ]
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let navigate = self.navigate_keys();
        for (i, (name, key)) in navigate.iter().enumerate() {
            if key.is_control() || key.is_whitespace() {
                return Err(ConfigError::ValidationError(format!(
                    "keys.{name} must be a printable character"
                )));
            }
            if let Some((other, _)) = navigate[..i].iter().find(|(_, k)| k == key) {
                return Err(ConfigError::ValidationError(format!(
                    "keys.{name} and keys.{other} are both bound to '{key}'"
                )));
            }
        }

        for (name, key) in [("save", self.save), ("quit", self.quit)] {
            if !key.is_ascii_alphabetic() {
                return Err(ConfigError::ValidationError(format!(
                    "keys.{name} must be an ASCII letter (used with Ctrl)"
                )));
            }
        }
        if self.save.eq_ignore_ascii_case(&self.quit) {
            return Err(ConfigError::ValidationError(format!(
                "keys.save and keys.quit are both bound to Ctrl+{}",
                self.save
            )));
        }
        Ok(())
    }
}

impl Config {
    /// Load configuration from a JSON file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::IoError(e.to_string()))?;

        let config: Config =
            serde_json::from_str(&contents).map_err(|e| ConfigError::ParseError(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a JSON file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        self.validate()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| ConfigError::SerializeError(e.to_string()))?;

        std::fs::write(path.as_ref(), contents).map_err(|e| ConfigError::IoError(e.to_string()))?;

        Ok(())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.keys.validate()
    }
}

/// Configuration error types
#[derive(Debug)]
pub enum ConfigError {
    IoError(String),
    ParseError(String),
    SerializeError(String),
    ValidationError(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::IoError(msg) => write!(f, "IO error: {msg}"),
            ConfigError::ParseError(msg) => write!(f, "Parse error: {msg}"),
            ConfigError::SerializeError(msg) => write!(f, "Serialize error: {msg}"),
            ConfigError::ValidationError(msg) => write!(f, "Validation error: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}
