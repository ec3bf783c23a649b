use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::charset::CharClass;
use crate::error::{Error, Result};

/// Password generation options: target length plus which classes to include.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    /// Number of characters in the generated password (must be > 0)
    pub length: usize,
    pub include_uppercase: bool,
    pub include_lowercase: bool,
    pub include_digits: bool,
    pub include_symbols: bool,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            length: 8,
            include_uppercase: false,
            include_lowercase: true,
            include_digits: false,
            include_symbols: false,
        }
    }
}

impl GenerationConfig {
    /// Parse a configuration from JSON. Missing fields take their defaults.
    pub fn from_json(data: &str) -> Result<Self> {
        Ok(serde_json::from_str(data)?)
    }

    /// Load a configuration from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let data = fs::read_to_string(path)?;
        Self::from_json(&data)
    }

    pub fn includes(&self, class: CharClass) -> bool {
        match class {
            CharClass::Uppercase => self.include_uppercase,
            CharClass::Lowercase => self.include_lowercase,
            CharClass::Digits => self.include_digits,
            CharClass::Symbols => self.include_symbols,
        }
    }

    /// Enabled classes in pool order.
    pub fn enabled_classes(&self) -> impl Iterator<Item = CharClass> + '_ {
        CharClass::ALL
            .into_iter()
            .filter(move |&class| self.includes(class))
    }

    pub fn enabled_count(&self) -> usize {
        self.enabled_classes().count()
    }

    /// Checks everything that can be known before drawing a single random value.
    pub fn validate(&self) -> Result<()> {
        if self.length == 0 {
            return Err(Error::InvalidConfiguration(
                "password length must be greater than zero".into(),
            ));
        }
        let enabled = self.enabled_count();
        if enabled == 0 {
            return Err(Error::EmptyCharacterPool);
        }
        if enabled > self.length {
            return Err(Error::InvalidConfiguration(format!(
                "length {} is too short for {} required character classes",
                self.length, enabled
            )));
        }
        Ok(())
    }
}
