use std::fmt;

use zeroize::Zeroizing;

use crate::config::GenerationConfig;
use crate::error::Result;
use crate::password::generate_password;

/// A generated password together with the options that produced it.
///
/// The secret is wiped from memory when the value is dropped.
pub struct Password {
    config: GenerationConfig,
    secret: Zeroizing<String>,
}

impl Password {
    pub fn as_str(&self) -> &str {
        &self.secret
    }

    pub fn len(&self) -> usize {
        self.secret.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.secret.is_empty()
    }

    pub fn config(&self) -> &GenerationConfig {
        &self.config
    }

    /// Discards the secret, keeping the options for another round.
    pub fn into_config(self) -> GenerationConfig {
        self.config
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Password")
            .field("config", &self.config)
            .field("secret", &"<redacted>")
            .finish()
    }
}

/// Chained construction of a [`GenerationConfig`], finished by [`build`](Self::build).
#[derive(Debug, Clone, Copy, Default)]
pub struct PasswordBuilder {
    config: GenerationConfig,
}

impl PasswordBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts from existing options instead of the defaults.
    pub fn from_config(config: GenerationConfig) -> Self {
        Self { config }
    }

    pub fn length(mut self, length: usize) -> Self {
        self.config.length = length;
        self
    }

    pub fn include_uppercase(mut self, include: bool) -> Self {
        self.config.include_uppercase = include;
        self
    }

    pub fn include_lowercase(mut self, include: bool) -> Self {
        self.config.include_lowercase = include;
        self
    }

    pub fn include_digits(mut self, include: bool) -> Self {
        self.config.include_digits = include;
        self
    }

    pub fn include_symbols(mut self, include: bool) -> Self {
        self.config.include_symbols = include;
        self
    }

    pub fn config(&self) -> GenerationConfig {
        self.config
    }

    /// Generates a password from the accumulated options.
    pub fn build(self) -> Result<Password> {
        let secret = Zeroizing::new(generate_password(&self.config)?);
        Ok(Password {
            config: self.config,
            secret,
        })
    }
}
