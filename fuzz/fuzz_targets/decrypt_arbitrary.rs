#![no_main]

use std::sync::OnceLock;

use libfuzzer_sys::fuzz_target;
use num_bigint_dig::BigUint;
use okamoto_uchiyama::{Ciphertext, Error, OkamotoUchiyama, PrivateKey, generate_key};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

static KEY: OnceLock<PrivateKey> = OnceLock::new();

// Arbitrary bytes must never panic: they either decrypt to something below p
// or fail with a typed error.
fuzz_target!(|data: &[u8]| {
    let key = KEY.get_or_init(|| {
        let mut rng = ChaCha20Rng::seed_from_u64(3);
        generate_key(&mut rng, 128).unwrap()
    });

    let c = Ciphertext::from(data);
    match OkamotoUchiyama::decrypt(key, data) {
        Ok(m) => assert!(&BigUint::from_bytes_be(&m) < key.p()),
        Err(Error::CipherTooLarge) => assert!(c.value() >= key.public_key().n()),
        Err(Error::InvalidCiphertext) => assert!(c.value() < key.public_key().n()),
        Err(err) => panic!("unexpected decryption error: {err}"),
    }

    let _ = OkamotoUchiyama::combine_two(key.public_key(), data, data);
});
