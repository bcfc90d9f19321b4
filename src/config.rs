use crate::assign::{AssignOptions, DEFAULT_MULT, DEFAULT_POWER};
use crate::error::{ChoiceError, Result};
use crate::logging::DEFAULT_LOG_LEVEL;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Optional TOML settings file. Command-line flags take precedence over
/// anything set here.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub log_level: Option<String>,
    pub generate: GenerateSettings,
    pub assign: AssignSettings,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GenerateSettings {
    pub seed: Option<u64>,
    pub output: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AssignSettings {
    pub mult: Option<i64>,
    pub power: Option<u32>,
    pub num_choices: Option<usize>,
    pub verbose: bool,
}

impl Settings {
    pub fn from_toml(text: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)?;
        Self::from_toml(&text).map_err(|source| ChoiceError::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Loads `path` when given, defaults otherwise.
    pub fn load_optional(path: Option<&Path>) -> Result<Self> {
        path.map_or_else(|| Ok(Settings::default()), Self::load)
    }

    pub fn log_level(&self) -> &str {
        self.log_level.as_deref().unwrap_or(DEFAULT_LOG_LEVEL)
    }
}

impl AssignSettings {
    /// Fills anything the command line left unset from this section.
    pub fn merge(
        &self,
        mult: Option<i64>,
        power: Option<u32>,
        num_choices: Option<usize>,
    ) -> AssignOptions {
        AssignOptions {
            mult: mult.or(self.mult).unwrap_or(DEFAULT_MULT),
            power: power.or(self.power).unwrap_or(DEFAULT_POWER),
            num_choices: num_choices.or(self.num_choices),
        }
    }
}
