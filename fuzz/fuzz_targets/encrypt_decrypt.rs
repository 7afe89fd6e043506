#![no_main]

use std::sync::OnceLock;

use libfuzzer_sys::fuzz_target;
use num_bigint_dig::BigUint;
use okamoto_uchiyama::{Decrypt, Encrypt, Error, PrivateKey, generate_key};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

static KEY: OnceLock<PrivateKey> = OnceLock::new();

fuzz_target!(|data: &[u8]| {
    let key = KEY.get_or_init(|| {
        let mut rng = ChaCha20Rng::seed_from_u64(1);
        generate_key(&mut rng, 256).unwrap()
    });

    let m = BigUint::from_bytes_be(data);
    let ciphertext = match key.public_key().encrypt(data) {
        Ok(ct) => ct,
        Err(Error::MessageTooLarge) => {
            assert!(&m >= key.public_key().n());
            return;
        }
        Err(err) => panic!("unexpected encryption error: {err}"),
    };

    let decrypted = key
        .decrypt(&ciphertext)
        .unwrap_or_else(|err| panic!("decryption failed for valid ciphertext: {err}"));

    // plaintexts are recovered modulo p
    assert_eq!(BigUint::from_bytes_be(&decrypted), m % key.p());
});
