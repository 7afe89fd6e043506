// Copyright 2025 Nelson Dominguez
// SPDX-License-Identifier: MIT OR Apache-2.0

/// Errors that can occur during key generation, encryption, decryption and
/// homomorphic combination.
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// The secure random source failed to produce bytes, or a bounded
    /// sampling loop ran out of attempts.
    #[error("random source failure: {0}")]
    RandomSourceFailure(String),

    #[error("plaintext is not smaller than the public modulus")]
    MessageTooLarge,

    #[error("ciphertext is not smaller than the public modulus")]
    CipherTooLarge,

    /// Key material is internally inconsistent. Never produced by keys that
    /// came out of [`KeyGenerator`](crate::KeyGenerator).
    #[error("invalid key state: {0}")]
    InvalidKeyState(String),

    #[error("ciphertext is not a valid encryption under this key")]
    InvalidCiphertext,

    #[error("invalid key size: must be at least {min} bits, got {actual}")]
    InvalidKeySize { min: usize, actual: usize },

    #[error("key generation failed: {0}")]
    KeyGenerationFailed(String),

    #[error("at least one ciphertext is required")]
    EmptyInput,
}

impl From<rand::Error> for Error {
    fn from(err: rand::Error) -> Self {
        Error::RandomSourceFailure(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
