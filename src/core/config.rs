use serde::Deserialize;
use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};

use crate::core::codec::Codec;
use crate::encoders::algorithms::errors::{
    AlphabetNotFoundError, ConfigError, find_closest_alphabet,
};

/// Configuration for a single alphabet loaded from TOML.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct AlphabetConfig {
    /// The characters of the alphabet, in symbol order
    pub chars: String,
    /// Whether encoded output keeps its trailing `=` (default: true)
    #[serde(default = "default_true")]
    pub padding: bool,
    /// Free-form description shown by `basen list`
    #[serde(default)]
    pub description: Option<String>,
}

impl AlphabetConfig {
    /// Builds a codec from this configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the characters do not form a valid alphabet.
    pub fn codec(&self) -> Result<Codec, ConfigError> {
        Codec::new(&self.chars, self.padding)
    }
}

fn default_true() -> bool {
    true
}

/// Global settings.
#[derive(Debug, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    /// Alphabet used when the CLI is not given one
    #[serde(default)]
    pub default_alphabet: Option<String>,
}

/// Collection of named alphabets loaded from TOML files.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct AlphabetRegistry {
    /// Map of alphabet names to their configurations
    #[serde(default)]
    pub alphabets: HashMap<String, AlphabetConfig>,
    /// Global settings
    #[serde(default)]
    pub settings: Settings,
}

/// Error loading a registry file.
#[derive(Debug)]
pub enum LoadError {
    Io { path: PathBuf, source: std::io::Error },
    Parse(toml::de::Error),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Io { path, source } => {
                write!(f, "cannot read {}: {}", path.display(), source)
            }
            LoadError::Parse(e) => write!(f, "invalid alphabet configuration: {}", e),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Io { source, .. } => Some(source),
            LoadError::Parse(e) => Some(e),
        }
    }
}

impl From<toml::de::Error> for LoadError {
    fn from(e: toml::de::Error) -> Self {
        LoadError::Parse(e)
    }
}

/// Error resolving a name to a codec.
#[derive(Debug)]
pub enum RegistryError {
    NotFound(AlphabetNotFoundError),
    Invalid { name: String, source: ConfigError },
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegistryError::NotFound(e) => fmt::Display::fmt(e, f),
            RegistryError::Invalid { name, source } => {
                writeln!(f, "alphabet '{}' is misconfigured", name)?;
                fmt::Display::fmt(source, f)
            }
        }
    }
}

impl std::error::Error for RegistryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RegistryError::NotFound(e) => Some(e),
            RegistryError::Invalid { source, .. } => Some(source),
        }
    }
}

const CONFIG_FILE: &str = "alphabets.toml";

impl AlphabetRegistry {
    /// Parses alphabet configurations from TOML content.
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Loads the built-in alphabet configurations.
    pub fn load_default() -> Result<Self, LoadError> {
        let content = include_str!("../../alphabets.toml");
        Ok(Self::from_toml(content)?)
    }

    /// Loads configuration from a custom file path.
    pub fn load_from_file(path: &Path) -> Result<Self, LoadError> {
        let content = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::from_toml(&content)?)
    }

    /// Path of the per-user override file, if the platform has a config directory.
    pub fn user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("basen").join(CONFIG_FILE))
    }

    /// Loads configuration with user overrides from standard locations.
    ///
    /// Searches in priority order:
    /// 1. Built-in alphabets (from library)
    /// 2. `~/.config/basen/alphabets.toml` (user overrides)
    /// 3. `./alphabets.toml` (project-local overrides)
    ///
    /// Later configurations override earlier ones for matching alphabet names.
    /// An override file that cannot be read or parsed is skipped with a warning.
    pub fn load_with_overrides() -> Result<Self, LoadError> {
        let mut config = Self::load_default()?;

        let candidates = Self::user_config_path()
            .into_iter()
            .chain(std::iter::once(PathBuf::from(CONFIG_FILE)));

        for path in candidates {
            if !path.exists() {
                continue;
            }
            match Self::load_from_file(&path) {
                Ok(overrides) => {
                    log::debug!("merged alphabet overrides from {}", path.display());
                    config.merge(overrides);
                }
                Err(e) => {
                    log::warn!("ignoring alphabet config {}: {}", path.display(), e);
                }
            }
        }

        Ok(config)
    }

    /// Merges another configuration into this one.
    ///
    /// Alphabets from `other` override alphabets with the same name in `self`.
    /// A default alphabet set in `other` replaces the current one.
    pub fn merge(&mut self, other: AlphabetRegistry) {
        self.alphabets.extend(other.alphabets);
        if other.settings.default_alphabet.is_some() {
            self.settings.default_alphabet = other.settings.default_alphabet;
        }
    }

    /// Retrieves an alphabet configuration by name.
    pub fn get_alphabet(&self, name: &str) -> Option<&AlphabetConfig> {
        self.alphabets.get(name)
    }

    /// Alphabet names in sorted order.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.alphabets.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Builds the codec registered under `name`.
    ///
    /// # Errors
    ///
    /// [`RegistryError::NotFound`] (with a spelling suggestion when one is
    /// close) or [`RegistryError::Invalid`] if the stored alphabet is unusable.
    pub fn codec(&self, name: &str) -> Result<Codec, RegistryError> {
        let config = self.get_alphabet(name).ok_or_else(|| {
            let available: Vec<String> = self.alphabets.keys().cloned().collect();
            let suggestion = find_closest_alphabet(name, &available);
            RegistryError::NotFound(AlphabetNotFoundError::new(name, suggestion))
        })?;

        config.codec().map_err(|source| RegistryError::Invalid {
            name: name.to_string(),
            source,
        })
    }
}
