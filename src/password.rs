use rand::TryCryptoRng;
use tracing::{debug, instrument};
use zeroize::Zeroizing;

use crate::config::GenerationConfig;
use crate::error::Result;
use crate::pool;
use crate::random::SecureRandom;
use crate::shuffle::secure_shuffle;

/// Generates a password for `config` using the operating system's entropy source.
///
/// Every enabled class is represented at least once; the remaining positions
/// are drawn from the union of the enabled alphabets, and the result is
/// shuffled so no position is tied to a class.
pub fn generate_password(config: &GenerationConfig) -> Result<String> {
    generate_password_with(config, &mut SecureRandom::os())
}

/// Same as [`generate_password`], drawing from the given source.
#[instrument(level = "debug", skip_all, fields(length = config.length))]
pub fn generate_password_with<R: TryCryptoRng>(
    config: &GenerationConfig,
    rng: &mut SecureRandom<R>,
) -> Result<String> {
    let mut chars = Zeroizing::new(pool::assemble(config, rng)?);
    secure_shuffle(chars.as_mut_slice(), rng)?;
    debug!(classes = config.enabled_count(), "password generated");
    Ok(chars.iter().collect())
}

// ------------------ TESTS ------------------
#[cfg(test)]
mod tests {
    use super::*;
    use crate::charset::CharClass;
    use crate::error::Error;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn all_classes(length: usize) -> GenerationConfig {
        GenerationConfig {
            length,
            include_uppercase: true,
            include_lowercase: true,
            include_digits: true,
            include_symbols: true,
        }
    }

    #[test]
    fn test_generate_password_min_length() {
        let config = GenerationConfig {
            length: 1,
            ..Default::default()
        };
        let pwd = generate_password(&config).unwrap();
        assert_eq!(pwd.chars().count(), 1);
        assert!(pwd.chars().all(|c| c.is_ascii_lowercase()));
    }

    #[test]
    fn test_generate_password_all_options() {
        let pwd = generate_password(&all_classes(16)).unwrap();
        assert_eq!(pwd.len(), 16);
        for class in CharClass::ALL {
            assert!(pwd.chars().any(|c| class.contains(c)), "missing {:?}", class);
        }
    }

    #[test]
    fn test_generate_password_alphanumeric_only() {
        let config = GenerationConfig {
            length: 12,
            include_uppercase: true,
            include_lowercase: true,
            include_digits: true,
            include_symbols: false,
        };
        for _ in 0..200 {
            let pwd = generate_password(&config).unwrap();
            assert_eq!(pwd.len(), 12);
            assert!(pwd.chars().any(|c| c.is_ascii_uppercase()));
            assert!(pwd.chars().any(|c| c.is_ascii_lowercase()));
            assert!(pwd.chars().any(|c| c.is_ascii_digit()));
            assert!(pwd.chars().all(|c| c.is_ascii_alphanumeric()));
        }
    }

    #[test]
    fn test_generate_password_symbols_only() {
        let config = GenerationConfig {
            length: 10,
            include_lowercase: false,
            include_symbols: true,
            ..Default::default()
        };
        let pwd = generate_password(&config).unwrap();
        assert_eq!(pwd.len(), 10);
        assert!(pwd.chars().all(|c| CharClass::Symbols.contains(c)));
    }

    #[test]
    fn test_generate_password_no_fallback_alphabet() {
        let config = GenerationConfig {
            length: 10,
            include_lowercase: false,
            ..Default::default()
        };
        assert!(matches!(
            generate_password(&config),
            Err(Error::EmptyCharacterPool)
        ));
    }

    #[test]
    fn test_seeded_source_is_reproducible() {
        let config = all_classes(24);
        let a = generate_password_with(&config, &mut SecureRandom::from_rng(StdRng::seed_from_u64(8)))
            .unwrap();
        let b = generate_password_with(&config, &mut SecureRandom::from_rng(StdRng::seed_from_u64(8)))
            .unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_consecutive_passwords_differ() {
        let config = all_classes(20);
        let a = generate_password(&config).unwrap();
        let b = generate_password(&config).unwrap();
        assert_ne!(a, b);
    }
}
