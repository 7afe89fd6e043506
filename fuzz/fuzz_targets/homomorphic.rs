#![no_main]

use std::sync::OnceLock;

use libfuzzer_sys::fuzz_target;
use num_bigint_dig::BigUint;
use okamoto_uchiyama::{Combine, Decrypt, Encrypt, PrivateKey, generate_key};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

static KEY: OnceLock<PrivateKey> = OnceLock::new();

fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }
    let key = KEY.get_or_init(|| {
        let mut rng = ChaCha20Rng::seed_from_u64(2);
        generate_key(&mut rng, 256).unwrap()
    });
    let public_key = key.public_key();

    let (m1_bytes, m2_bytes) = data.split_at(data.len() / 2);
    let (Ok(c1), Ok(c2)) = (public_key.encrypt(m1_bytes), public_key.encrypt(m2_bytes)) else {
        return;
    };

    let sum = public_key.combine(&c1, &c2).unwrap();
    let decrypted = key.decrypt(&sum).unwrap();

    let expected = (BigUint::from_bytes_be(m1_bytes) + BigUint::from_bytes_be(m2_bytes)) % key.p();
    assert_eq!(BigUint::from_bytes_be(&decrypted), expected);
});
