// Copyright 2025 Nelson Dominguez
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Okamoto-Uchiyama Cryptosystem
//!
//! Probabilistic public-key encryption with an additive homomorphism, based
//! on the hardness of factoring n = p²q.
//!
//! Reference: [Okamoto & Uchiyama (1998), EUROCRYPT](https://link.springer.com/chapter/10.1007/BFb0054135)
//!
//! ## Plaintext space
//!
//! Plaintexts and ciphertexts are unsigned big-endian integers. Encryption
//! rejects plaintexts `>= n`, but only plaintexts `< p` decrypt back to
//! themselves; larger values come back reduced modulo `p`. Framing, padding
//! and key serialization are left to the caller.
//!
//! ## Security
//!
//! The private key is zeroized on drop via the `zeroize` crate. Arithmetic is
//! not constant-time.
//!
//! ## Example
//!
//! ```rust,no_run
//! use okamoto_uchiyama::{Combine, Decrypt, Encrypt, PrivateKey};
//! use num_bigint_dig::BigUint;
//!
//! let key = PrivateKey::generate(2048).expect("key generation failed");
//! let pk = key.public_key();
//!
//! let c1 = pk.encrypt(BigUint::from(5u32).to_bytes_be()).expect("encryption failed");
//! let c2 = pk.encrypt(BigUint::from(7u32).to_bytes_be()).expect("encryption failed");
//! let sum = pk.combine(&c1, &c2).expect("combination failed");
//!
//! let decrypted = key.decrypt(&sum).expect("decryption failed");
//! assert_eq!(BigUint::from_bytes_be(&decrypted), BigUint::from(12u32));
//! ```

mod ciphertext;
mod crypto;
mod error;
mod keypair;
mod scheme;
mod util;

pub use ciphertext::Ciphertext;
pub use crypto::{Combine, Decrypt, Encrypt};
pub use error::{Error, Result};
pub use keypair::{KeyGenerator, PrivateKey, PublicKey, generate_key};
pub use scheme::OkamotoUchiyama;
