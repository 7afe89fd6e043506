// Copyright 2025 Nelson Dominguez
// SPDX-License-Identifier: MIT OR Apache-2.0

use super::Combine;
use crate::ciphertext::Ciphertext;
use crate::error::{Error, Result};
use crate::keypair::{PrivateKey, PublicKey};

use log::trace;
use num_bigint_dig::BigUint;

impl PublicKey {
    /// Borrow the value of `ciphertext` if it lies below the modulus.
    fn checked_operand<'c>(&self, ciphertext: &'c Ciphertext) -> Result<&'c BigUint> {
        let c = ciphertext.value();
        if c >= &self.n {
            return Err(Error::CipherTooLarge);
        }
        Ok(c)
    }
}

impl Combine for PublicKey {
    fn combine(&self, a: &Ciphertext, b: &Ciphertext) -> Result<Ciphertext> {
        self.combine_many([a, b])
    }

    fn combine_many<'c, I>(&self, ciphertexts: I) -> Result<Ciphertext>
    where
        I: IntoIterator<Item = &'c Ciphertext>,
    {
        let mut ciphertexts = ciphertexts.into_iter();
        let first = ciphertexts.next().ok_or(Error::EmptyInput)?;

        // E(m₁) · E(m₂) mod n = E(m₁ + m₂)
        let mut product = self.checked_operand(first)?.clone();
        let mut count = 1usize;
        for ciphertext in ciphertexts {
            product = (product * self.checked_operand(ciphertext)?) % &self.n;
            count += 1;
        }

        trace!("combined {count} ciphertexts");
        Ok(Ciphertext::new(product))
    }
}

impl Combine for PrivateKey {
    fn combine(&self, a: &Ciphertext, b: &Ciphertext) -> Result<Ciphertext> {
        self.public_key.combine(a, b)
    }

    fn combine_many<'c, I>(&self, ciphertexts: I) -> Result<Ciphertext>
    where
        I: IntoIterator<Item = &'c Ciphertext>,
    {
        self.public_key.combine_many(ciphertexts)
    }
}
