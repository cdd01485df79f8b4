use std::sync::Arc;

use symmetric_crypto::crypto::cipher_context::CipherContext;
use symmetric_crypto::crypto::cipher_types::CipherError;
use symmetric_crypto::crypto::utils::random_bytes;
use symmetric_crypto::crypto::way3::{gamma, mu, Way3};

fn key_from_words(words: [u32; 3]) -> Vec<u8> {
    words.iter().flat_map(|w| w.to_le_bytes()).collect()
}

#[test]
fn key_must_be_12_bytes() {
    assert_eq!(
        Way3::new(&[0u8; 11]).err(),
        Some(CipherError::InvalidKeyLength(11))
    );
    assert_eq!(
        Way3::new(&[0u8; 16]).err(),
        Some(CipherError::InvalidKeyLength(16))
    );
    assert!(Way3::new(&[0u8; 12]).is_ok());
}

#[test]
fn block_known_answers() {
    let cases: [([u32; 3], [u32; 3], [u32; 3]); 2] = [
        ([0, 0, 0], [1, 1, 1], [0x4059c76e, 0x83ae9dc4, 0xad21ecf7]),
        (
            [0xdef01234, 0x456789ab, 0xbcdef012],
            [0x23456789, 0x9abcdef0, 0x01234567],
            [0x0aa55dbb, 0x9cdddb6d, 0x7cdb76b2],
        ),
    ];

    for (key, plain, expected) in cases {
        let w3 = Way3::new(&key_from_words(key)).unwrap();
        let cipher = w3.encrypt_words(plain);
        assert_eq!(cipher, expected);
        assert_eq!(w3.decrypt_words(cipher), plain);
    }
}

#[test]
fn gamma_vectors() {
    assert_eq!(gamma([0, 0, 0]), [0xffffffff, 0xffffffff, 0xffffffff]);
    assert_eq!(
        gamma([0x01234567, 0x89abcdef, 0xfedcba98]),
        [0x88888888, 0x77777777, 0x89abcdef]
    );
}

#[test]
fn mu_reverses_bits() {
    assert_eq!(
        mu([0x01010101, 0x02020202, 0x03030303]),
        [0xc0c0c0c0, 0x40404040, 0x80808080]
    );
    // mu is an involution.
    let a = [0xdeadbeef, 0x01234567, 0x89abcdef];
    assert_eq!(mu(mu(a)), a);
}

#[test]
fn cbc_roundtrip() {
    let plain = b"ninety-six bit blocks need their own length cases";

    for _ in 0..10 {
        let mut key = [0u8; 12];
        random_bytes(&mut key);

        let ctx = CipherContext::new(Arc::new(Way3::new(&key).unwrap()));
        let cipher = ctx.encrypt_cbc(plain, None).unwrap();
        // 49 bytes pad to 60, plus one block of IV.
        assert_eq!(cipher.len(), 60 + 12);
        assert_eq!(ctx.decrypt_cbc(&cipher).unwrap(), plain);
    }
}

#[test]
fn block_roundtrip_random() {
    let mut key = [0u8; 12];
    random_bytes(&mut key);
    let w3 = Way3::new(&key).unwrap();

    for _ in 0..32 {
        let mut bytes = [0u8; 12];
        random_bytes(&mut bytes);
        let a = [
            u32::from_le_bytes(bytes[0..4].try_into().unwrap()),
            u32::from_le_bytes(bytes[4..8].try_into().unwrap()),
            u32::from_le_bytes(bytes[8..12].try_into().unwrap()),
        ];
        assert_eq!(w3.decrypt_words(w3.encrypt_words(a)), a);
    }
}
