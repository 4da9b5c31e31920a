//! User configuration.

use std::path::{Path, PathBuf};

use config::{Config, Environment, File, Map};
use serde::{Deserialize, Serialize};

use crate::error::{DatePickError, DatePickResult};
use crate::picker::PickerOptions;

static DEFAULT_STATE_FILE: &str = "~/.datepick/form.json";

fn default_state_file() -> PathBuf {
    PathBuf::from(DEFAULT_STATE_FILE)
}

fn default_field_name() -> String {
    "dates".to_string()
}

fn default_excluded_field() -> String {
    "excludedDates".to_string()
}

fn default_dependent_fields() -> Vec<String> {
    vec!["numberOfDays".to_string()]
}

/// Configuration at ~/.config/datepick/config.toml
///
/// Any key can be overridden from the environment with a `DATEPICK_`
/// prefix, e.g. `DATEPICK_FIELD_NAME=eventDays`. Lists are comma-separated.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct DatepickConfig {
    #[serde(default = "default_state_file")]
    pub state_file: PathBuf,

    #[serde(default = "default_field_name")]
    pub field_name: String,

    /// Empty disables writing the excluded days to the form
    #[serde(default = "default_excluded_field")]
    pub excluded_field: String,

    #[serde(default = "default_dependent_fields")]
    pub dependent_fields: Vec<String>,
}

impl Default for DatepickConfig {
    fn default() -> Self {
        DatepickConfig {
            state_file: default_state_file(),
            field_name: default_field_name(),
            excluded_field: default_excluded_field(),
            dependent_fields: default_dependent_fields(),
        }
    }
}

impl DatepickConfig {
    /// Load from the default location, creating a commented-out file on
    /// first use.
    pub fn load() -> DatePickResult<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
        }

        Self::load_from(&config_path)
    }

    pub fn load_from(path: &Path) -> DatePickResult<Self> {
        Self::load_with_env(path, None)
    }

    /// `env` replaces the process environment for the `DATEPICK_` layer
    /// when given.
    fn load_with_env(path: &Path, env: Option<Map<String, String>>) -> DatePickResult<Self> {
        Config::builder()
            .add_source(File::from(path.to_path_buf()).required(false))
            .add_source(
                Environment::with_prefix("DATEPICK")
                    .source(env)
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("dependent_fields"),
            )
            .build()
            .map_err(|e| DatePickError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| DatePickError::Config(e.to_string()))
    }

    pub fn config_path() -> DatePickResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| DatePickError::Config("Could not determine config directory".into()))?
            .join("datepick");

        Ok(config_dir.join("config.toml"))
    }

    /// The state file with `~` expanded.
    pub fn state_path(&self) -> PathBuf {
        let expanded = shellexpand::tilde(&self.state_file.to_string_lossy()).into_owned();
        PathBuf::from(expanded)
    }

    pub fn picker_options(&self) -> PickerOptions {
        PickerOptions {
            field_name: self.field_name.clone(),
            excluded_field: Some(self.excluded_field.clone()).filter(|f| !f.is_empty()),
            dependent_fields: self.dependent_fields.clone(),
        }
    }

    /// Write the current config as TOML.
    pub fn save(&self, path: &Path) -> DatePickResult<()> {
        let content =
            toml::to_string_pretty(self).map_err(|e| DatePickError::Config(e.to_string()))?;

        std::fs::write(path, content)
            .map_err(|e| DatePickError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> DatePickResult<()> {
        let contents = format!(
            "\
# datepick configuration

# Where the form values are kept between runs:
# state_file = \"{}\"

# Form field receiving the selected days:
# field_name = \"dates\"

# Form field receiving the excluded days (empty to disable):
# excluded_field = \"excludedDates\"

# Fields derived from the selection, cleared on reset:
# dependent_fields = [\"numberOfDays\"]
",
            DEFAULT_STATE_FILE
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                DatePickError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| DatePickError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}
