//! Cryptographically secure index source.
//!
//! Every random decision made while generating a password goes through
//! [`SecureRandom::next_index`]. The wrapped generator must implement
//! [`TryCryptoRng`], so a simulation-grade PRNG cannot be plugged in by
//! accident. The default is the operating system's entropy source.
//!
//! Reduction into `[0, bound)` uses rejection sampling rather than a plain
//! modulo. A 32-bit draw taken modulo an alphabet size that does not divide
//! 2^32 would favour the low indices slightly; draws that land in that
//! incomplete final block are discarded and redrawn instead, so every index
//! is exactly equally likely.

use rand::TryCryptoRng;
use rand::rngs::OsRng;
use tracing::trace;

use crate::error::{Error, Result};

pub struct SecureRandom<R = OsRng> {
    rng: R,
}

impl SecureRandom<OsRng> {
    /// A source backed by the operating system's entropy pool.
    pub fn os() -> Self {
        Self { rng: OsRng }
    }
}

impl Default for SecureRandom<OsRng> {
    fn default() -> Self {
        Self::os()
    }
}

impl<R: TryCryptoRng> SecureRandom<R> {
    pub fn from_rng(rng: R) -> Self {
        Self { rng }
    }

    #[cfg(test)]
    pub(crate) fn inner(&self) -> &R {
        &self.rng
    }

    /// Reads 4 random bytes as a little-endian `u32`.
    fn next_u32(&mut self) -> Result<u32> {
        let mut bytes = [0u8; 4];
        self.rng
            .try_fill_bytes(&mut bytes)
            .map_err(|e| Error::EntropyUnavailable(e.to_string()))?;
        Ok(u32::from_le_bytes(bytes))
    }

    /// Returns a uniformly distributed index in `[0, bound)`.
    pub fn next_index(&mut self, bound: usize) -> Result<usize> {
        if bound == 0 {
            return Err(Error::EmptyCharacterPool);
        }
        let bound = u32::try_from(bound).map_err(|_| {
            Error::InvalidConfiguration(format!("index bound {} exceeds u32 range", bound))
        })?;

        // Largest multiple of `bound` representable in a u32.
        let zone = u32::MAX - (u32::MAX % bound);
        loop {
            let value = self.next_u32()?;
            if value < zone {
                return Ok((value % bound) as usize);
            }
            trace!(bound, "discarding biased draw");
        }
    }

    /// Picks one element of `items` uniformly.
    pub fn choose<T: Copy>(&mut self, items: &[T]) -> Result<T> {
        let idx = self.next_index(items.len())?;
        Ok(items[idx])
    }
}
