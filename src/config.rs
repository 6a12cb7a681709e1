use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

use crate::alphabet::Alphabet;
use crate::errors::{RegistryError, find_closest_alphabet};

/// Configuration for a single named alphabet loaded from TOML.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct AlphabetConfig {
    /// The symbols, in value order
    pub chars: String,
    /// Optional padding character (e.g., "=" for base64)
    #[serde(default)]
    pub padding: Option<String>,
    /// Accept either case of each symbol when decoding
    #[serde(default)]
    pub case_insensitive: bool,
    /// Characters skipped anywhere in decode input
    #[serde(default)]
    pub ignore: String,
    /// Symbol -> extra characters that decode to the same value
    #[serde(default)]
    pub synonyms: BTreeMap<String, String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl AlphabetConfig {
    /// Builds the alphabet this entry describes. `name` is only used for
    /// error context.
    pub fn build(&self, name: &str) -> Result<Alphabet, RegistryError> {
        let padding = match self.padding.as_deref() {
            None => None,
            Some(value) => Some(single_char(value).ok_or_else(|| {
                RegistryError::MalformedPadding {
                    name: name.to_string(),
                    value: value.to_string(),
                }
            })?),
        };

        let mut builder = Alphabet::builder(&self.chars)
            .padding(padding)
            .case_insensitive(self.case_insensitive)
            .ignore(&self.ignore);

        for (key, aliases) in &self.synonyms {
            let symbol = single_char(key).ok_or_else(|| RegistryError::MalformedSynonym {
                name: name.to_string(),
                key: key.clone(),
            })?;
            for alias in aliases.chars() {
                builder = builder.synonym(symbol, alias);
            }
        }

        builder.build().map_err(|source| RegistryError::Alphabet {
            name: name.to_string(),
            source,
        })
    }
}

fn single_char(s: &str) -> Option<char> {
    let mut chars = s.chars();
    let c = chars.next()?;
    chars.next().is_none().then_some(c)
}

/// A set of named alphabets.
#[derive(Debug, Deserialize, Default)]
pub struct AlphabetsConfig {
    #[serde(default)]
    pub alphabets: BTreeMap<String, AlphabetConfig>,
}

impl AlphabetsConfig {
    pub fn from_toml(content: &str) -> Result<Self, RegistryError> {
        Ok(toml::from_str(content)?)
    }

    /// The alphabets compiled into the crate.
    pub fn load_default() -> Result<Self, RegistryError> {
        let content = include_str!("../alphabets.toml");
        Self::from_toml(content)
    }

    /// Load configuration from custom file path
    pub fn load_from_file(path: &Path) -> Result<Self, RegistryError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Load configuration with user overrides from standard locations
    /// 1. Start with built-in alphabets
    /// 2. Override with ~/.config/alphabase/alphabets.toml if it exists
    /// 3. Override with ./alphabets.toml if it exists in current directory
    ///
    /// Override files that fail to load are logged and skipped.
    pub fn load_with_overrides() -> Result<Self, RegistryError> {
        let mut config = Self::load_default()?;

        if let Some(config_dir) = dirs::config_dir() {
            let user_config_path = config_dir.join("alphabase").join("alphabets.toml");
            config.merge_optional(&user_config_path);
        }

        config.merge_optional(Path::new("alphabets.toml"));

        Ok(config)
    }

    fn merge_optional(&mut self, path: &Path) {
        if !path.exists() {
            return;
        }
        match Self::load_from_file(path) {
            Ok(overrides) => {
                log::info!(
                    "loaded {} alphabet(s) from {}",
                    overrides.alphabets.len(),
                    path.display()
                );
                self.merge(overrides);
            }
            Err(e) => {
                log::warn!("skipping alphabet config {}: {e}", path.display());
            }
        }
    }

    /// Merge another config into this one, overriding existing alphabets
    pub fn merge(&mut self, other: AlphabetsConfig) {
        self.alphabets.extend(other.alphabets);
    }

    pub fn get_alphabet(&self, name: &str) -> Option<&AlphabetConfig> {
        self.alphabets.get(name)
    }

    /// Resolves and builds a named alphabet, suggesting a close name when
    /// the lookup misses.
    pub fn alphabet(&self, name: &str) -> Result<Alphabet, RegistryError> {
        match self.get_alphabet(name) {
            Some(entry) => entry.build(name),
            None => {
                let suggestion = find_closest_alphabet(name, self.alphabets.keys());
                Err(RegistryError::not_found(name, suggestion))
            }
        }
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.alphabets.keys().map(String::as_str)
    }
}
