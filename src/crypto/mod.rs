// Copyright 2025 Nelson Dominguez
// SPDX-License-Identifier: MIT OR Apache-2.0

mod combine;
mod decrypt;
mod encrypt;
mod util;

pub(crate) use util::biguint_to_bytes_minimal;

use crate::ciphertext::Ciphertext;
use crate::error::Result;

use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};

/// Encrypts a single plaintext.
pub trait Encrypt {
    /// Encrypt `plaintext` drawing the blinding factor from `rng`.
    ///
    /// The plaintext, interpreted as a big-endian integer `m`, must be
    /// strictly smaller than the public modulus `n`.
    ///
    /// ## Plaintext Space
    ///
    /// Decryption recovers `m mod p`, so only `m < p` round-trips. Values in
    /// `[p, n)` are accepted here but come back reduced modulo `p`.
    ///
    /// ## Errors
    ///
    /// [`Error::MessageTooLarge`](crate::Error::MessageTooLarge) if `m >= n`,
    /// [`Error::RandomSourceFailure`](crate::Error::RandomSourceFailure) if
    /// `rng` fails.
    fn encrypt_with_rng<R, P>(&self, rng: &mut R, plaintext: P) -> Result<Ciphertext>
    where
        R: RngCore + CryptoRng + ?Sized,
        P: AsRef<[u8]>;

    /// Encrypt `plaintext` using the operating system's random source.
    fn encrypt<P: AsRef<[u8]>>(&self, plaintext: P) -> Result<Ciphertext> {
        self.encrypt_with_rng(&mut OsRng, plaintext)
    }
}

/// Decrypts a single ciphertext into its plaintext representation.
pub trait Decrypt {
    /// Recover the plaintext `m` from a ciphertext `c`, as minimal big-endian
    /// bytes (zero decrypts to an empty vector).
    fn decrypt(&self, ciphertext: &Ciphertext) -> Result<Vec<u8>>;
}

/// Additive homomorphism over ciphertexts.
///
/// Multiplying ciphertexts modulo `n` adds the underlying plaintexts modulo
/// `p`. Every operand must be strictly smaller than `n`.
pub trait Combine {
    /// Combine two ciphertexts into an encryption of the sum of their
    /// plaintexts.
    fn combine(&self, a: &Ciphertext, b: &Ciphertext) -> Result<Ciphertext>;

    /// Combine any non-empty sequence of ciphertexts. A single ciphertext is
    /// returned unchanged.
    fn combine_many<'c, I>(&self, ciphertexts: I) -> Result<Ciphertext>
    where
        I: IntoIterator<Item = &'c Ciphertext>;
}

#[cfg(test)]
mod test_support {
    #![allow(clippy::unwrap_used)]

    use crate::keypair::{PrivateKey, generate_key};
    use num_bigint_dig::BigUint;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    pub(super) fn create_test_key() -> PrivateKey {
        let mut rng = ChaCha20Rng::seed_from_u64(0x0u64);
        generate_key(&mut rng, 256).unwrap()
    }

    pub(super) fn bytes_of(value: u64) -> Vec<u8> {
        BigUint::from(value).to_bytes_be()
    }

    pub(super) fn int_of(bytes: &[u8]) -> BigUint {
        BigUint::from_bytes_be(bytes)
    }
}

#[cfg(test)]
mod test_encryption {
    #![allow(clippy::unwrap_used)]

    use super::test_support::*;
    use super::*;
    use crate::Error;
    use crate::util::sampling::BrokenRng;
    use num_bigint_dig::BigUint;
    use num_traits::One;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    #[test]
    fn encrypt_single_block() {
        let key = create_test_key();
        let message = b"Hello, World!";

        let ciphertext = key.public_key().encrypt(message).unwrap();
        let plaintext = key.decrypt(&ciphertext).unwrap();

        assert_eq!(message, plaintext.as_slice());
    }

    #[test]
    fn probabilistic_encryption() {
        let key = create_test_key();
        let message = b"Same message";

        let c1 = key.public_key().encrypt(message).unwrap();
        let c2 = key.public_key().encrypt(message).unwrap();

        // different random r values MUST produce different ciphertexts
        assert_ne!(c1, c2);
        assert_eq!(key.decrypt(&c1).unwrap(), key.decrypt(&c2).unwrap());
    }

    #[test]
    fn seeded_encryption_is_reproducible() {
        let key = create_test_key();

        let mut rng1 = ChaCha20Rng::seed_from_u64(99);
        let mut rng2 = ChaCha20Rng::seed_from_u64(99);

        let c1 = key.public_key().encrypt_with_rng(&mut rng1, b"abc").unwrap();
        let c2 = key.public_key().encrypt_with_rng(&mut rng2, b"abc").unwrap();
        assert_eq!(c1, c2);
    }

    #[test]
    fn ciphertext_is_below_modulus() {
        let key = create_test_key();
        for value in [0u64, 1, 42, u64::MAX] {
            let c = key.public_key().encrypt(bytes_of(value)).unwrap();
            assert!(c.value() < key.public_key().n());
        }
    }

    #[test]
    fn plaintext_equal_to_modulus() {
        let key = create_test_key();
        let n = key.public_key().n().to_bytes_be();

        let result = key.public_key().encrypt(n);
        assert_eq!(result, Err(Error::MessageTooLarge));
    }

    #[test]
    fn plaintext_too_large() {
        let key = create_test_key();
        let too_large = key.public_key().n() + BigUint::one();

        let result = key.public_key().encrypt(too_large.to_bytes_be());
        assert_eq!(result, Err(Error::MessageTooLarge));
    }

    #[test]
    fn plaintext_between_p_and_n_wraps() {
        let key = create_test_key();
        let m = key.p() + BigUint::from(5u32);

        let c = key.public_key().encrypt(m.to_bytes_be()).unwrap();
        let decrypted = key.decrypt(&c).unwrap();

        assert_eq!(int_of(&decrypted), BigUint::from(5u32));
    }

    #[test]
    fn zero_message() {
        let key = create_test_key();

        let c = key.public_key().encrypt(b"").unwrap();
        let decrypted = key.decrypt(&c).unwrap();

        assert!(decrypted.is_empty());
    }

    #[test]
    fn private_key_encrypts_like_public_key() {
        let key = create_test_key();

        let mut rng1 = ChaCha20Rng::seed_from_u64(5);
        let mut rng2 = ChaCha20Rng::seed_from_u64(5);

        let from_private = key.encrypt_with_rng(&mut rng1, b"x").unwrap();
        let from_public = key.public_key().encrypt_with_rng(&mut rng2, b"x").unwrap();
        assert_eq!(from_private, from_public);
    }

    #[test]
    fn entropy_failure_during_encryption() {
        let key = create_test_key();

        let result = key.public_key().encrypt_with_rng(&mut BrokenRng, bytes_of(42));
        assert!(matches!(result, Err(Error::RandomSourceFailure(_))));
    }
}
