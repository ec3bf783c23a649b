use rand::TryCryptoRng;

use crate::error::Result;
use crate::random::SecureRandom;

/// Fisher–Yates shuffle driven by a secure index source.
///
/// For `n` from `items.len()` down to 2, swaps position `n - 1` with a
/// position drawn from `[0, n)`. Performs exactly `len - 1` draws.
pub fn secure_shuffle<T, R: TryCryptoRng>(items: &mut [T], rng: &mut SecureRandom<R>) -> Result<()> {
    for n in (2..=items.len()).rev() {
        let k = rng.next_index(n)?;
        items.swap(k, n - 1);
    }
    Ok(())
}
