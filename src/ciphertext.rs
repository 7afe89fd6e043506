// Copyright 2025 Nelson Dominguez
// SPDX-License-Identifier: MIT OR Apache-2.0

use std::convert::From;

use num_bigint_dig::BigUint;

use crate::crypto::biguint_to_bytes_minimal;

/// An Okamoto-Uchiyama ciphertext `c = g^m · h^r mod n`.
///
/// On the wire a ciphertext is the minimal unsigned big-endian encoding of
/// `c`, with no length prefix or version byte.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ciphertext {
    value: BigUint,
}

impl Ciphertext {
    pub fn new(value: BigUint) -> Self {
        Self { value }
    }

    pub fn value(&self) -> &BigUint {
        &self.value
    }

    pub fn into_inner(self) -> BigUint {
        self.value
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        biguint_to_bytes_minimal(&self.value)
    }
}

impl<T> From<T> for Ciphertext
where
    T: AsRef<[u8]>,
{
    fn from(data: T) -> Self {
        Self { value: BigUint::from_bytes_be(data.as_ref()) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ciphertext_serialization() {
        let val = BigUint::from(0xDEADBEEFu64);
        let c = Ciphertext::new(val.clone());

        let bytes = c.to_bytes();
        assert_eq!(bytes, vec![0xDE, 0xAD, 0xBE, 0xEF]);

        let restored = Ciphertext::from(&bytes);
        assert_eq!(c, restored);
        assert_eq!(restored.into_inner(), val);
    }

    #[test]
    fn leading_zeros_are_dropped() {
        let c = Ciphertext::from([0u8, 0, 1, 2]);
        assert_eq!(c.to_bytes(), vec![1, 2]);
    }

    #[test]
    fn empty_bytes_decode_to_zero() {
        let c = Ciphertext::from(Vec::<u8>::new());
        assert_eq!(c.value(), &BigUint::from(0u32));
        assert!(c.to_bytes().is_empty());
    }
}
