//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/expltree/expltree.toml`
//! 3. Explicit config file (`--config`)
//! 4. Environment variables: `EXPLTREE_*` prefix, `__` between sections
//!    (e.g. `EXPLTREE_OUTPUT__FORMAT=json`)

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::application::ApplicationError;

/// How a selection is printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("unknown output format: {other}")),
        }
    }
}

/// Interactive selector settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SelectorConfig {
    /// Height of the selector window (skim syntax, e.g. "50%" or "20")
    pub height: String,
    /// Appended to the variable name to form the prompt
    pub prompt: String,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            height: "50%".into(),
            prompt: "> ".into(),
        }
    }
}

/// Output settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
    /// Bold "Other" labels and colored status lines
    pub color: bool,
    /// Show payload summaries next to leaves in `tree`
    pub payload: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            color: true,
            payload: false,
        }
    }
}

/// Raw settings for intermediate parsing (`None` → not specified, inherit).
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub selector: RawSelectorConfig,
    pub output: RawOutputConfig,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSelectorConfig {
    pub height: Option<String>,
    pub prompt: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawOutputConfig {
    pub format: Option<OutputFormat>,
    pub color: Option<bool>,
    pub payload: Option<bool>,
}

/// Unified configuration for expltree.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    pub selector: SelectorConfig,
    pub output: OutputConfig,
}

/// Get the XDG config directory for expltree.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "expltree").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("expltree.toml"))
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> Result<RawSettings, ApplicationError> {
    let content = std::fs::read_to_string(path).map_err(|e| ApplicationError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

impl Settings {
    /// Overlay wins where it specifies a value.
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            selector: SelectorConfig {
                height: overlay
                    .selector
                    .height
                    .clone()
                    .unwrap_or_else(|| self.selector.height.clone()),
                prompt: overlay
                    .selector
                    .prompt
                    .clone()
                    .unwrap_or_else(|| self.selector.prompt.clone()),
            },
            output: OutputConfig {
                format: overlay.output.format.unwrap_or(self.output.format),
                color: overlay.output.color.unwrap_or(self.output.color),
                payload: overlay.output.payload.unwrap_or(self.output.payload),
            },
        }
    }

    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `explicit` - Optional config file given on the command line; must exist
    pub fn load(explicit: Option<&Path>) -> Result<Self, ApplicationError> {
        // 1. Start with defaults
        let mut current = Self::default();

        // 2. Global config
        if let Some(global_path) = global_config_path() {
            if global_path.exists() {
                let raw = load_raw_settings(&global_path)?;
                current = current.merge_with(&raw);
            }
        }

        // 3. Explicit config file
        if let Some(path) = explicit {
            let raw = load_raw_settings(path)?;
            current = current.merge_with(&raw);
        }

        // 4. Environment variables (explicit override)
        Self::apply_env_overrides(current)
    }

    /// Apply EXPLTREE_* environment variables as explicit overrides.
    fn apply_env_overrides(mut settings: Self) -> Result<Self, ApplicationError> {
        let config = Config::builder()
            .add_source(Environment::with_prefix("EXPLTREE").separator("__"))
            .build()
            .map_err(config_err)?;

        if let Ok(val) = config.get_string("selector.height") {
            settings.selector.height = val;
        }
        if let Ok(val) = config.get_string("selector.prompt") {
            settings.selector.prompt = val;
        }
        if let Ok(val) = config.get_string("output.format") {
            settings.output.format = val
                .parse()
                .map_err(|message| ApplicationError::Config { message })?;
        }
        if let Ok(val) = config.get_bool("output.color") {
            settings.output.color = val;
        }
        if let Ok(val) = config.get_bool("output.payload") {
            settings.output.payload = val;
        }

        Ok(settings)
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize config: {e}"),
        })
    }

    /// Generate a template config file.
    pub fn template() -> String {
        r#"# expltree configuration
#
# Locations (by precedence, lowest to highest):
#   Global:   ~/.config/expltree/expltree.toml
#   Explicit: expltree --config <file>
#   Env:      EXPLTREE_* environment variables, e.g. EXPLTREE_OUTPUT__FORMAT=json

[selector]
# Height of the interactive selector (skim syntax)
# height = "50%"

# Prompt suffix shown after the variable name
# prompt = "> "

[output]
# Selection output: "text" or "json"
# format = "text"

# Bold "Other" labels and colored messages (NO_COLOR is respected)
# color = true

# Show payload summaries next to leaves in `expltree tree`
# payload = false
"#
        .to_string()
    }
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}
