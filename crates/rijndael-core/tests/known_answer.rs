//! Published FIPS-197 vectors for every key size.

use rijndael_core::{decrypt_block, encrypt_block, expand_key, Aes, Error, KeySize};

fn unhex(s: &str) -> Vec<u8> {
    (0..s.len())
        .step_by(2)
        .map(|i| u8::from_str_radix(&s[i..i + 2], 16).unwrap())
        .collect()
}

struct Vector {
    key: &'static str,
    plaintext: &'static str,
    ciphertext: &'static str,
}

const VECTORS: &[Vector] = &[
    // Appendix C.1
    Vector {
        key: "000102030405060708090a0b0c0d0e0f",
        plaintext: "00112233445566778899aabbccddeeff",
        ciphertext: "69c4e0d86a7b0430d8cdb78070b4c55a",
    },
    // Appendix C.2
    Vector {
        key: "000102030405060708090a0b0c0d0e0f1011121314151617",
        plaintext: "00112233445566778899aabbccddeeff",
        ciphertext: "dda97ca4864cdfe06eaf70a0ec0d7191",
    },
    // Appendix C.3
    Vector {
        key: "000102030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f",
        plaintext: "00112233445566778899aabbccddeeff",
        ciphertext: "8ea2b7ca516745bfeafc49904b496089",
    },
    // All-zero key and block.
    Vector {
        key: "00000000000000000000000000000000",
        plaintext: "00000000000000000000000000000000",
        ciphertext: "66e94bd4ef8a2c3b884cfa59ca342b2e",
    },
    Vector {
        key: "000000000000000000000000000000000000000000000000",
        plaintext: "00000000000000000000000000000000",
        ciphertext: "aae06992acbf52a3e8f4a96ec9300bd7",
    },
    Vector {
        key: "0000000000000000000000000000000000000000000000000000000000000000",
        plaintext: "00000000000000000000000000000000",
        ciphertext: "dc95c078a2408989ad48a21492842087",
    },
    // Appendix B
    Vector {
        key: "2b7e151628aed2a6abf7158809cf4f3c",
        plaintext: "3243f6a8885a308d313198a2e0370734",
        ciphertext: "3925841d02dc09fbdc118597196a0b32",
    },
];

#[test]
fn encrypt_matches_published_vectors() {
    for v in VECTORS {
        let round_keys = expand_key(&unhex(v.key)).unwrap();
        let ct = encrypt_block(&unhex(v.plaintext), &round_keys).unwrap();
        assert_eq!(ct.to_vec(), unhex(v.ciphertext), "key {}", v.key);
    }
}

#[test]
fn decrypt_matches_published_vectors() {
    for v in VECTORS {
        let round_keys = expand_key(&unhex(v.key)).unwrap();
        let pt = decrypt_block(&unhex(v.ciphertext), &round_keys).unwrap();
        assert_eq!(pt.to_vec(), unhex(v.plaintext), "key {}", v.key);
    }
}

#[test]
fn key_expansion_matches_appendix_a() {
    let cases = [
        ("2b7e151628aed2a6abf7158809cf4f3c", KeySize::Aes128, "b6630ca6"),
        (
            "8e73b0f7da0e6452c810f32b809079e562f8ead2522c6b7b",
            KeySize::Aes192,
            "01002202",
        ),
        (
            "603deb1015ca71be2b73aef0857d77811f352c073b6108d72d9810a30914dff4",
            KeySize::Aes256,
            "706c631e",
        ),
    ];
    for (key, size, last_word) in cases {
        let round_keys = expand_key(&unhex(key)).unwrap();
        assert_eq!(round_keys.key_size(), size);
        assert_eq!(round_keys.words().len(), size.schedule_len());
        let last = round_keys.words().last().unwrap();
        assert_eq!(last.to_vec(), unhex(last_word), "{size}");
    }
}

#[test]
fn aes256_applies_extra_sub_word() {
    // w[12] of the Appendix A.3 schedule is the first word built with the
    // SubWord-only step (i mod 8 == 4).
    let key = unhex("603deb1015ca71be2b73aef0857d77811f352c073b6108d72d9810a30914dff4");
    let round_keys = expand_key(&key).unwrap();
    assert_eq!(round_keys.words()[8].to_vec(), unhex("9ba35411"));
    assert_eq!(round_keys.words()[12].to_vec(), unhex("a8b09c1a"));
}

#[test]
fn round_keys_slice_by_round() {
    let round_keys = expand_key(&unhex("000102030405060708090a0b0c0d0e0f")).unwrap();
    assert_eq!(round_keys.rounds(), 10);
    assert_eq!(round_keys.round_key(0), &round_keys.words()[..4]);
    assert_eq!(round_keys.round_key(10), &round_keys.words()[40..44]);
}

#[test]
fn boundaries_fail_with_the_matching_error() {
    assert_eq!(
        expand_key(&[0u8; 20]).map(|_| ()),
        Err(Error::Configuration { len: 20 })
    );
    assert_eq!(Aes::new(&[0u8; 20]).map(|_| ()), Err(Error::Configuration { len: 20 }));

    let round_keys = expand_key(&[0u8; 16]).unwrap();
    assert_eq!(
        encrypt_block(&[0u8; 15], &round_keys),
        Err(Error::InvalidInput { len: 15 })
    );
    assert_eq!(
        decrypt_block(&[0u8; 17], &round_keys),
        Err(Error::InvalidInput { len: 17 })
    );
}

#[test]
fn error_messages_name_accepted_lengths() {
    assert_eq!(
        Error::Configuration { len: 20 }.to_string(),
        "invalid key length: 20 bytes (expected 16, 24 or 32)"
    );
    assert_eq!(
        Error::InvalidInput { len: 15 }.to_string(),
        "invalid block length: 15 bytes (expected 16)"
    );
}
