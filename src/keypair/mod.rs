// Copyright 2025 Nelson Dominguez
// SPDX-License-Identifier: MIT OR Apache-2.0

mod util;

use crate::error::{Error, Result};
use crate::util::sampling::random_prime;

use log::{debug, warn};
use num_bigint_dig::BigUint;
use num_traits::{One, Zero};
use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Public parameters of the cryptosystem.
///
/// The modulus follows the form `n = p²q`. `g` is a base whose order modulo
/// p² is a multiple of p, and `h = g^n mod n`. Public keys are plain values
/// and can be cloned and shared freely.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicKey {
    pub(crate) n: BigUint,
    pub(crate) g: BigUint,
    pub(crate) h: BigUint,
}

impl PublicKey {
    /// Construct a new public key from its components.
    ///
    /// All parameters must be non-zero and `g`, `h` strictly smaller than `n`.
    pub fn new(n: BigUint, g: BigUint, h: BigUint) -> Result<Self> {
        if n.is_zero() || g.is_zero() || h.is_zero() {
            return Err(Error::InvalidKeyState("public key components must be non-zero".into()));
        }
        if g >= n || h >= n {
            return Err(Error::InvalidKeyState("g and h must be smaller than n".into()));
        }

        Ok(Self { n, g, h })
    }

    /// Return the public modulus `n`.
    pub fn n(&self) -> &BigUint {
        &self.n
    }

    /// Return the generator `g`.
    pub fn g(&self) -> &BigUint {
        &self.g
    }

    /// Return `h = g^n mod n`.
    pub fn h(&self) -> &BigUint {
        &self.h
    }
}

/// Secret key material.
///
/// Holds the public key together with the secret prime `p`, `p²` and the
/// cached value `g^(p-1) mod p²` used on every decryption. The second prime
/// `q` is only needed while generating and is never stored. Secret fields are
/// zeroized on drop.
#[allow(missing_debug_implementations)]
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
#[cfg_attr(feature = "expose-secret", derive(Debug))]
pub struct PrivateKey {
    #[zeroize(skip)]
    pub(crate) public_key: PublicKey,
    pub(crate) p: BigUint,
    pub(crate) p_squared: BigUint,

    /// Precomputed value `g^(p-1) mod p²`.
    pub(crate) gd: BigUint,
}

impl PrivateKey {
    /// Generate a private key of `bit_length` bits using the operating
    /// system's random source.
    pub fn generate(bit_length: usize) -> Result<Self> {
        KeyGenerator::new().bit_length(bit_length).generate(&mut OsRng)
    }

    /// Rebuild a private key from its public key and secret prime `p`.
    ///
    /// Checks that `p²` divides `n` with a non-trivial cofactor, that `g` is
    /// usable for decryption and that `h = g^n mod n`, then recomputes the
    /// cached values.
    pub fn from_parts(public_key: PublicKey, p: BigUint) -> Result<Self> {
        if p <= BigUint::one() {
            return Err(Error::InvalidKeyState("p must be greater than one".into()));
        }

        let p_squared = &p * &p;
        let cofactor = public_key.n() / &p_squared;
        if cofactor <= BigUint::one() || &cofactor * &p_squared != *public_key.n() {
            return Err(Error::InvalidKeyState("n is not of the form p²q".into()));
        }

        if (public_key.g() % &p).is_zero() {
            return Err(Error::InvalidKeyState("g is not a unit modulo p²".into()));
        }

        let p_minus_1 = &p - BigUint::one();
        let gd = public_key.g().modpow(&p_minus_1, &p_squared);
        if gd == BigUint::one() {
            return Err(Error::InvalidKeyState("g^(p-1) mod p² must not be 1".into()));
        }

        if *public_key.h() != public_key.g().modpow(public_key.n(), public_key.n()) {
            return Err(Error::InvalidKeyState("h is not g^n mod n".into()));
        }

        Ok(Self { public_key, p, p_squared, gd })
    }

    /// Return a reference to the associated public key.
    pub fn public_key(&self) -> &PublicKey {
        &self.public_key
    }

    /// Return the secret prime `p`. Plaintexts are recovered modulo `p`.
    pub fn p(&self) -> &BigUint {
        &self.p
    }

    /// Return `p²`.
    pub fn p_squared(&self) -> &BigUint {
        &self.p_squared
    }

    /// Return the cached `g^(p-1) mod p²`.
    pub fn gd(&self) -> &BigUint {
        &self.gd
    }
}

/// Generate a private key with a modulus built from two `bit_length / 2`-bit
/// primes drawn from `rng`.
pub fn generate_key<R>(rng: &mut R, bit_length: usize) -> Result<PrivateKey>
where
    R: RngCore + CryptoRng + ?Sized,
{
    KeyGenerator::new().bit_length(bit_length).generate(rng)
}

/// Builder for generating keys with configurable parameters.
#[derive(Debug, Clone)]
pub struct KeyGenerator {
    bit_length: usize,
}

impl KeyGenerator {
    /// Bit length used when none is configured.
    pub const DEFAULT_BITS: usize = 2048;

    /// Minimum recommended for production (NIST/ENISA standard).
    pub const MIN_SECURE_BITS: usize = 2048;

    /// Absolute minimum: two 8-bit primes.
    pub const MIN_BITS: usize = 16;

    /// Create a generator with default parameters.
    pub fn new() -> Self {
        Self { bit_length: Self::DEFAULT_BITS }
    }

    /// Set the security parameter. Each prime gets half of these bits.
    pub fn bit_length(mut self, bits: usize) -> Self {
        self.bit_length = bits;
        self
    }

    /// Generate a private key, drawing all randomness from `rng`.
    ///
    /// ## Errors
    ///
    /// - [`Error::InvalidKeySize`] below [`Self::MIN_BITS`].
    /// - [`Error::RandomSourceFailure`] if `rng` fails or the generator
    ///   search is exhausted.
    pub fn generate<R>(&self, rng: &mut R) -> Result<PrivateKey>
    where
        R: RngCore + CryptoRng + ?Sized,
    {
        if self.bit_length < Self::MIN_BITS {
            return Err(Error::InvalidKeySize { min: Self::MIN_BITS, actual: self.bit_length });
        }

        if self.bit_length < Self::MIN_SECURE_BITS {
            warn!(
                "{}-bit key is cryptographically weak, use at least {} bits in production",
                self.bit_length,
                Self::MIN_SECURE_BITS
            );
        }

        let prime_bits = self.bit_length / 2;
        debug!("generating two {prime_bits}-bit primes");

        let p = random_prime(rng, prime_bits)?;
        let mut q = random_prime(rng, prime_bits)?;
        while q == p {
            q = random_prime(rng, prime_bits)?;
        }

        let p_squared = &p * &p;
        let n = &p_squared * &q;
        q.zeroize();

        let (g, gd) = util::find_generator(rng, &n, &p, &p_squared)?;
        let h = g.modpow(&n, &n);
        debug!("generated key with {}-bit modulus", n.bits());

        let public_key = PublicKey::new(n, g, h)?;
        Ok(PrivateKey { public_key, p, p_squared, gd })
    }
}

impl Default for KeyGenerator {
    fn default() -> Self {
        Self::new()
    }
}
