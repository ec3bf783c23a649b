use rand::TryCryptoRng;
use tracing::trace;

use crate::charset::CharClass;
use crate::config::GenerationConfig;
use crate::error::Result;
use crate::random::SecureRandom;

/// The union of every enabled alphabet, in class order.
#[derive(Debug, Clone)]
pub struct CharacterPool {
    classes: Vec<CharClass>,
    chars: Vec<char>,
}

impl CharacterPool {
    pub fn from_config(config: &GenerationConfig) -> Self {
        let classes: Vec<CharClass> = config.enabled_classes().collect();
        let chars = classes
            .iter()
            .flat_map(|class| class.alphabet().chars())
            .collect();
        Self { classes, chars }
    }

    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    pub fn classes(&self) -> &[CharClass] {
        &self.classes
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// One character from each enabled class, in class order.
    pub fn draw_required<R: TryCryptoRng>(&self, rng: &mut SecureRandom<R>) -> Result<Vec<char>> {
        self.classes
            .iter()
            .map(|class| {
                let alphabet: Vec<char> = class.alphabet().chars().collect();
                rng.choose(&alphabet)
            })
            .collect()
    }

    /// `count` characters sampled with replacement from the whole pool.
    pub fn draw_fillers<R: TryCryptoRng>(
        &self,
        count: usize,
        rng: &mut SecureRandom<R>,
    ) -> Result<Vec<char>> {
        (0..count).map(|_| rng.choose(&self.chars)).collect()
    }
}

/// Validates `config`, then returns the required characters followed by the fillers.
///
/// No random value is drawn unless the configuration is valid.
pub fn assemble<R: TryCryptoRng>(
    config: &GenerationConfig,
    rng: &mut SecureRandom<R>,
) -> Result<Vec<char>> {
    config.validate()?;
    let pool = CharacterPool::from_config(config);

    let mut chars = Vec::with_capacity(config.length);
    chars.extend(pool.draw_required(rng)?);
    let filler_count = config.length - chars.len();
    trace!(
        pool_size = pool.chars().len(),
        required = chars.len(),
        filler_count,
        "assembling characters"
    );
    chars.extend(pool.draw_fillers(filler_count, rng)?);
    Ok(chars)
}
