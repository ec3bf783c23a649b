//! Random password generation with guaranteed character-class coverage.
//!
//! A password is produced in three stages:
//!
//! 1. one character is drawn from each enabled class (uppercase, lowercase,
//!    digits, symbols), guaranteeing every class appears;
//! 2. the remaining positions are filled from the union of enabled alphabets;
//! 3. the whole buffer is permuted with a Fisher–Yates shuffle.
//!
//! Every draw goes through [`SecureRandom`], which only accepts
//! cryptographically secure generators and defaults to the OS entropy source.
//!
//! ```
//! use passgen::{GenerationConfig, generate_password};
//!
//! let config = GenerationConfig {
//!     length: 12,
//!     include_uppercase: true,
//!     include_lowercase: true,
//!     include_digits: true,
//!     include_symbols: false,
//! };
//! let password = generate_password(&config).unwrap();
//! assert_eq!(password.len(), 12);
//! assert!(password.chars().all(|c| c.is_ascii_alphanumeric()));
//! ```
//!
//! The same options can be chained:
//!
//! ```
//! use passgen::PasswordBuilder;
//!
//! let password = PasswordBuilder::new()
//!     .length(16)
//!     .include_symbols(true)
//!     .build()
//!     .unwrap();
//! assert_eq!(password.len(), 16);
//! ```

pub mod builder;
pub mod charset;
pub mod config;
pub mod error;
pub mod password;
pub mod pool;
pub mod random;
pub mod shuffle;

pub use builder::{Password, PasswordBuilder};
pub use charset::CharClass;
pub use config::GenerationConfig;
pub use error::{Error, Result};
pub use password::{generate_password, generate_password_with};
pub use random::SecureRandom;
pub use shuffle::secure_shuffle;
