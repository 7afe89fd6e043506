// Copyright 2025 Nelson Dominguez
// SPDX-License-Identifier: MIT OR Apache-2.0

use super::Decrypt;
use super::util::{biguint_to_bytes_minimal, l_function, mod_inverse};
use crate::ciphertext::Ciphertext;
use crate::error::{Error, Result};
use crate::keypair::PrivateKey;

use log::trace;
use num_bigint_dig::BigUint;
use num_traits::One;

impl Decrypt for PrivateKey {
    fn decrypt(&self, ciphertext: &Ciphertext) -> Result<Vec<u8>> {
        let c = ciphertext.value();
        if c >= self.public_key.n() {
            return Err(Error::CipherTooLarge);
        }

        let p_minus_1 = &self.p - BigUint::one();

        // a = c^(p-1) mod p²
        let a = c.modpow(&p_minus_1, &self.p_squared);

        let l_a = l_function(&a, &self.p).ok_or(Error::InvalidCiphertext)?;
        let l_gd = l_function(&self.gd, &self.p)
            .ok_or_else(|| Error::InvalidKeyState("cached g^(p-1) is not 1 mod p".into()))?;
        let l_gd_inv = mod_inverse(&l_gd, &self.p)?;

        let m = (l_a * l_gd_inv) % &self.p;

        trace!("decrypted {}-bit plaintext", m.bits());
        Ok(biguint_to_bytes_minimal(&m))
    }
}
