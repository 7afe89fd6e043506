// Copyright 2025 Nelson Dominguez
// SPDX-License-Identifier: MIT OR Apache-2.0

use log::debug;
use num_bigint_dig::BigUint;
use num_traits::{One, Zero};
use rand::{CryptoRng, RngCore};

use crate::util::sampling::random_range;
use crate::{Error, Result};

/// Upper bound on generator draws before giving up.
///
/// A uniform candidate fails only when its order modulo p² divides p - 1,
/// which happens with probability about 1/p, so this cap is never reached
/// with a working random source.
pub(crate) const MAX_GENERATOR_ATTEMPTS: usize = 1000;

/// Find a generator `g` for Okamoto-Uchiyama encryption.
///
/// Candidates are drawn uniformly from `[2, n)` and accepted the first time
/// `g^(p-1) mod p² != 1`. Candidates divisible by `p` are skipped since they
/// are not units modulo p² and would make the L-function undefined.
///
/// Returns `(g, g^(p-1) mod p²)` so the caller can cache the latter.
pub(crate) fn find_generator<R>(
    rng: &mut R,
    n: &BigUint,
    p: &BigUint,
    p_squared: &BigUint,
) -> Result<(BigUint, BigUint)>
where
    R: RngCore + CryptoRng + ?Sized,
{
    let two = BigUint::from(2u32);
    let p_minus_1 = p - BigUint::one();

    for attempt in 1..=MAX_GENERATOR_ATTEMPTS {
        let candidate = random_range(rng, &two, n)?;
        if (&candidate % p).is_zero() {
            continue;
        }

        let gd = candidate.modpow(&p_minus_1, p_squared);
        if gd != BigUint::one() {
            debug!("generator accepted after {attempt} draw(s)");
            return Ok((candidate, gd));
        }
    }

    Err(Error::RandomSourceFailure(format!(
        "no generator found after {MAX_GENERATOR_ATTEMPTS} draws"
    )))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    /// A source that only ever yields the same byte.
    struct StuckRng(u8);

    impl RngCore for StuckRng {
        fn next_u32(&mut self) -> u32 {
            u32::from_be_bytes([self.0; 4])
        }

        fn next_u64(&mut self) -> u64 {
            u64::from_be_bytes([self.0; 8])
        }

        fn fill_bytes(&mut self, dest: &mut [u8]) {
            dest.fill(self.0);
        }

        fn try_fill_bytes(&mut self, dest: &mut [u8]) -> std::result::Result<(), rand::Error> {
            self.fill_bytes(dest);
            Ok(())
        }
    }

    impl CryptoRng for StuckRng {}

    #[test]
    fn generator_satisfies_order_condition() {
        let mut rng = ChaCha20Rng::seed_from_u64(5);
        let p = BigUint::from(65_519u32);
        let q = BigUint::from(65_521u32);
        let p_squared = &p * &p;
        let n = &p_squared * &q;

        let (g, gd) = find_generator(&mut rng, &n, &p, &p_squared).unwrap();

        assert!(g >= BigUint::from(2u32) && g < n);
        assert_eq!(gd, g.modpow(&(&p - 1u32), &p_squared));
        assert_ne!(gd, BigUint::one());
        assert_eq!(&gd % &p, BigUint::one());
    }

    #[test]
    fn exhausted_search_reports_random_source_failure() {
        // n = 5² · 3 = 75. The byte 0x03 always decodes to candidate 2 + 3 = 5,
        // a multiple of p, so every draw is skipped.
        let mut rng = StuckRng(3);
        let p = BigUint::from(5u32);
        let p_squared = &p * &p;
        let n = &p_squared * 3u32;

        let result = find_generator(&mut rng, &n, &p, &p_squared);
        assert!(matches!(result, Err(Error::RandomSourceFailure(_))));
    }
}
