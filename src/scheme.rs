// Copyright 2025 Nelson Dominguez
// SPDX-License-Identifier: MIT OR Apache-2.0

use rand::{CryptoRng, RngCore};

use crate::ciphertext::Ciphertext;
use crate::crypto::{Combine, Decrypt, Encrypt};
use crate::error::Result;
use crate::keypair::{PrivateKey, PublicKey, generate_key};

/// Byte-oriented entry points.
///
/// Every plaintext and ciphertext crosses this API as an unsigned big-endian
/// integer encoding with no framing. Keys stay typed.
pub struct OkamotoUchiyama;

impl OkamotoUchiyama {
    /// Generate a private key from two `bit_length / 2`-bit primes.
    pub fn generate_key<R>(rng: &mut R, bit_length: usize) -> Result<PrivateKey>
    where
        R: RngCore + CryptoRng + ?Sized,
    {
        generate_key(rng, bit_length)
    }

    /// Encrypt `plaintext` under `pub_key` with randomness from the OS.
    pub fn encrypt<P: AsRef<[u8]>>(pub_key: &PublicKey, plaintext: P) -> Result<Vec<u8>> {
        Ok(pub_key.encrypt(plaintext)?.to_bytes())
    }

    /// Encrypt `plaintext` under `pub_key` with randomness from `rng`.
    pub fn encrypt_with_rng<R, P>(rng: &mut R, pub_key: &PublicKey, plaintext: P) -> Result<Vec<u8>>
    where
        R: RngCore + CryptoRng + ?Sized,
        P: AsRef<[u8]>,
    {
        Ok(pub_key.encrypt_with_rng(rng, plaintext)?.to_bytes())
    }

    /// Decrypt `ciphertext` with `priv_key`.
    pub fn decrypt<C: AsRef<[u8]>>(priv_key: &PrivateKey, ciphertext: C) -> Result<Vec<u8>> {
        priv_key.decrypt(&Ciphertext::from(ciphertext))
    }

    /// Combine two ciphertexts into one that decrypts to the sum of their
    /// plaintexts modulo `p`.
    pub fn combine_two<A, B>(pub_key: &PublicKey, a: A, b: B) -> Result<Vec<u8>>
    where
        A: AsRef<[u8]>,
        B: AsRef<[u8]>,
    {
        let a = Ciphertext::from(a);
        let b = Ciphertext::from(b);
        Ok(pub_key.combine(&a, &b)?.to_bytes())
    }

    /// Combine a non-empty list of ciphertexts.
    pub fn combine_many<I, C>(pub_key: &PublicKey, ciphertexts: I) -> Result<Vec<u8>>
    where
        I: IntoIterator<Item = C>,
        C: AsRef<[u8]>,
    {
        let ciphertexts: Vec<Ciphertext> = ciphertexts.into_iter().map(Ciphertext::from).collect();
        Ok(pub_key.combine_many(&ciphertexts)?.to_bytes())
    }
}
