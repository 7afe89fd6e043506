// Copyright 2025 Nelson Dominguez
// SPDX-License-Identifier: MIT OR Apache-2.0

use super::Encrypt;
use crate::ciphertext::Ciphertext;
use crate::error::{Error, Result};
use crate::keypair::{PrivateKey, PublicKey};
use crate::util::sampling::random_range;

use log::trace;
use num_bigint_dig::BigUint;
use num_traits::One;
use rand::{CryptoRng, RngCore};

impl Encrypt for PublicKey {
    fn encrypt_with_rng<R, P>(&self, rng: &mut R, plaintext: P) -> Result<Ciphertext>
    where
        R: RngCore + CryptoRng + ?Sized,
        P: AsRef<[u8]>,
    {
        let m = BigUint::from_bytes_be(plaintext.as_ref());
        if m >= self.n {
            return Err(Error::MessageTooLarge);
        }

        // Fresh blinding factor r ∈ [1, n).
        let r = random_range(rng, &BigUint::one(), &self.n)?;

        // c = g^m · h^r mod n
        let gm = self.g.modpow(&m, &self.n);
        let hr = self.h.modpow(&r, &self.n);
        let c = (gm * hr) % &self.n;

        trace!("encrypted {}-bit plaintext", m.bits());
        Ok(Ciphertext::new(c))
    }
}

impl Encrypt for PrivateKey {
    fn encrypt_with_rng<R, P>(&self, rng: &mut R, plaintext: P) -> Result<Ciphertext>
    where
        R: RngCore + CryptoRng + ?Sized,
        P: AsRef<[u8]>,
    {
        self.public_key.encrypt_with_rng(rng, plaintext)
    }
}
