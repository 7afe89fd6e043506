// Copyright 2025 Nelson Dominguez
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Fallible sampling of big integers from a cryptographically secure source.
//!
//! Every draw goes through [`RngCore::try_fill_bytes`] so that an exhausted or
//! broken entropy source surfaces as [`Error::RandomSourceFailure`] instead of
//! a panic deep inside the bignum library. Intermediate byte buffers are wiped
//! once a candidate has been decoded.

use num_bigint_dig::BigUint;
use num_bigint_dig::prime::probably_prime;
use num_traits::{One, Zero};
use rand::{CryptoRng, RngCore};
use zeroize::Zeroizing;

use crate::{Error, Result};

/// Small odd primes used to reject prime candidates before Miller-Rabin.
const SIEVE_PRIMES: &[u32] = &[
    3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47, 53, 59, 61, 67, 71, 73, 79, 83, 89, 97,
    101, 103, 107, 109, 113, 127, 131, 137, 139, 149, 151, 157, 163, 167, 173, 179, 181, 191, 193,
    197, 199, 211, 223, 227, 229, 233, 239, 241, 251, 257, 263, 269, 271, 277, 281, 283, 293, 307,
    311, 313, 317, 331, 337, 347, 349, 353, 359, 367, 373, 379, 383, 389, 397, 401, 409, 419, 421,
    431, 433, 439, 443, 449, 457, 461, 463, 467, 479, 487, 491, 499, 503, 509, 521, 523, 541,
];

/// Smallest prime size this module will produce.
pub(crate) const MIN_PRIME_BITS: usize = 2;

/// Draw an integer uniformly from `[0, bound)`.
///
/// Uses rejection sampling on `bits(bound)`-bit candidates, so the expected
/// number of draws is below two.
pub(crate) fn random_below<R>(rng: &mut R, bound: &BigUint) -> Result<BigUint>
where
    R: RngCore + CryptoRng + ?Sized,
{
    if bound.is_zero() {
        return Err(Error::InvalidKeyState("sampling bound must be non-zero".into()));
    }

    let bits = bound.bits();
    let len = bits.div_ceil(8);
    let excess = len * 8 - bits;

    let mut buf = Zeroizing::new(vec![0u8; len]);
    loop {
        rng.try_fill_bytes(&mut buf)?;
        buf[0] &= 0xffu8 >> excess;

        let candidate = BigUint::from_bytes_be(&buf);
        if &candidate < bound {
            return Ok(candidate);
        }
    }
}

/// Draw an integer uniformly from `[low, high)`.
pub(crate) fn random_range<R>(rng: &mut R, low: &BigUint, high: &BigUint) -> Result<BigUint>
where
    R: RngCore + CryptoRng + ?Sized,
{
    if low >= high {
        return Err(Error::InvalidKeyState("empty sampling range".into()));
    }

    let width = high - low;
    Ok(random_below(rng, &width)? + low)
}

/// Generate a random prime of exactly `bits` bits.
///
/// The two most significant bits are forced on so that the product of two
/// such primes has exactly `2 * bits` bits, and the low bit is forced on so
/// only odd candidates reach the primality test.
pub(crate) fn random_prime<R>(rng: &mut R, bits: usize) -> Result<BigUint>
where
    R: RngCore + CryptoRng + ?Sized,
{
    if bits < MIN_PRIME_BITS {
        return Err(Error::KeyGenerationFailed(format!(
            "prime size must be at least {MIN_PRIME_BITS} bits, got {bits}"
        )));
    }

    let rounds = miller_rabin_rounds(bits);
    let len = bits.div_ceil(8);
    let excess = len * 8 - bits;

    let mut buf = Zeroizing::new(vec![0u8; len]);
    loop {
        rng.try_fill_bytes(&mut buf)?;
        buf[0] &= 0xffu8 >> excess;

        let mut candidate = BigUint::from_bytes_be(&buf);
        candidate |= BigUint::from(3u32) << (bits - 2);
        candidate |= BigUint::one();

        if has_small_factor(&candidate) {
            continue;
        }

        if probably_prime(&candidate, rounds) {
            return Ok(candidate);
        }
    }
}

/// Returns true if `n` is a proper multiple of one of the sieve primes.
#[inline]
fn has_small_factor(n: &BigUint) -> bool {
    SIEVE_PRIMES
        .iter()
        .any(|&prime| (n % prime).is_zero() && *n != BigUint::from(prime))
}

/// Miller-Rabin round count targeting an error probability below 2^-128.
///
/// | Bits  | Rounds |
/// |-------|--------|
/// | ≤256  | 40     |
/// | ≤512  | 15     |
/// | ≤1024 | 10     |
/// | ≤2048 | 6      |
/// | ≤4096 | 4      |
#[inline]
const fn miller_rabin_rounds(bits: usize) -> usize {
    match bits {
        0..=256 => 40,
        257..=512 => 15,
        513..=1024 => 10,
        1025..=2048 => 6,
        2049..=4096 => 4,
        _ => 3,
    }
}

/// An entropy source that always fails.
#[cfg(test)]
pub(crate) struct BrokenRng;

#[cfg(test)]
impl RngCore for BrokenRng {
    fn next_u32(&mut self) -> u32 {
        0
    }

    fn next_u64(&mut self) -> u64 {
        0
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        dest.fill(0);
    }

    fn try_fill_bytes(&mut self, _dest: &mut [u8]) -> std::result::Result<(), rand::Error> {
        Err(rand::Error::new("entropy exhausted"))
    }
}

#[cfg(test)]
impl CryptoRng for BrokenRng {}
