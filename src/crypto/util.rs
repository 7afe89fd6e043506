// Copyright 2025 Nelson Dominguez
// SPDX-License-Identifier: MIT OR Apache-2.0

use num_bigint_dig::{BigUint, ModInverse};
use num_traits::{CheckedSub, One, Zero};

/// L(x) = (x - 1) / p
///
/// Defined only for `x ≡ 1 (mod p)`, which holds for `x = c^(p-1) mod p²`
/// whenever `c` is a unit. Returns `None` otherwise instead of silently
/// flooring a non-exact division.
#[inline]
pub(crate) fn l_function(x: &BigUint, p: &BigUint) -> Option<BigUint> {
    if p.is_zero() {
        return None;
    }

    let x_minus_1 = x.checked_sub(&BigUint::one())?;
    if !(&x_minus_1 % p).is_zero() {
        return None;
    }

    Some(x_minus_1 / p)
}

/// Computes modular inverse a⁻¹ mod b.
///
/// A missing inverse here means the key is malformed, so failure is reported
/// as [`crate::Error::InvalidKeyState`].
pub(crate) fn mod_inverse<'i>(a: &'i BigUint, b: &'i BigUint) -> crate::Result<BigUint> {
    let modinv = a
        .mod_inverse(b)
        .ok_or_else(|| crate::Error::InvalidKeyState("modular inverse does not exist".into()))?
        .to_biguint()
        .ok_or_else(|| {
            crate::Error::InvalidKeyState("inverse resulted in negative value".into())
        })?;

    Ok(modinv)
}

/// Converts a [`BigUint`] into its minimal big-endian byte form.
///
/// Zero encodes as an empty byte sequence, so `b""` and `b"\x00"` both decode
/// to zero and both encode back to `b""`. Callers that need to tell them
/// apart must frame their messages themselves.
pub(crate) fn biguint_to_bytes_minimal(m: &BigUint) -> Vec<u8> {
    if m.is_zero() {
        return Vec::new();
    }
    m.to_bytes_be()
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn l_function_exact_division() {
        let p = BigUint::from(11u32);
        // 1 + 5·11
        let x = BigUint::from(56u32);
        assert_eq!(l_function(&x, &p), Some(BigUint::from(5u32)));
        assert_eq!(l_function(&BigUint::one(), &p), Some(BigUint::zero()));
    }

    #[test]
    fn l_function_rejects_non_congruent_input() {
        let p = BigUint::from(11u32);
        assert_eq!(l_function(&BigUint::zero(), &p), None);
        assert_eq!(l_function(&BigUint::from(57u32), &p), None);
        assert_eq!(l_function(&BigUint::from(56u32), &BigUint::zero()), None);
    }

    #[test]
    fn inverse_modulo_prime() {
        let p = BigUint::from(11u32);
        let inv = mod_inverse(&BigUint::from(3u32), &p).unwrap();
        assert_eq!(inv, BigUint::from(4u32));
    }

    #[test]
    fn missing_inverse_is_invalid_key_state() {
        let p = BigUint::from(11u32);
        let result = mod_inverse(&BigUint::from(22u32), &p);
        assert!(matches!(result, Err(crate::Error::InvalidKeyState(_))));
    }

    #[test]
    fn zero_is_empty() {
        assert!(biguint_to_bytes_minimal(&BigUint::zero()).is_empty());
        assert_eq!(biguint_to_bytes_minimal(&BigUint::from(258u32)), vec![1, 2]);
    }
}
