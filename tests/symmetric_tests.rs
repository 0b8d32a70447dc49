// tests/symmetric_tests.rs
mod common;
use common::{init_tracing, sequential_iv, sequential_key, RAW_VALUE};

use shelf_crypto::{decrypt_with, encrypt_with, CryptoError, SymmetricCipher, TextCipher};

#[test]
fn test_hello_roundtrip_with_sequential_key_and_iv() {
    init_tracing();
    let cipher = SymmetricCipher::new(&sequential_key(), &sequential_iv()).unwrap();

    let ciphertext = cipher.encrypt("hello");

    assert_ne!(ciphertext.as_slice(), "hello".as_bytes());
    assert_eq!(ciphertext.len(), 16);
    assert_eq!(cipher.decrypt(&ciphertext).unwrap(), "hello");
}

#[test]
fn test_free_functions_match_instance_methods() {
    init_tracing();
    let (key, iv) = (sequential_key(), sequential_iv());
    let cipher = SymmetricCipher::new(&key, &iv).unwrap();

    let ciphertext = encrypt_with(RAW_VALUE, &key, &iv).unwrap();

    assert_eq!(ciphertext, cipher.encrypt(RAW_VALUE));
    assert_eq!(decrypt_with(&ciphertext, &key, &iv).unwrap(), RAW_VALUE);
}

#[test]
fn test_encrypt_is_deterministic_for_fixed_key_and_iv() {
    init_tracing();
    let a = SymmetricCipher::new(&sequential_key(), &sequential_iv()).unwrap();
    let b = SymmetricCipher::new(&sequential_key(), &sequential_iv()).unwrap();
    assert_eq!(a.encrypt(RAW_VALUE), b.encrypt(RAW_VALUE));
}

#[test]
fn test_roundtrip_multibyte_and_empty_text() {
    init_tracing();
    let cipher = SymmetricCipher::new(&[0xA5; 32], &[0x5A; 16]).unwrap();
    let long = "x".repeat(1000);
    for text in ["", "zażółć gęślą jaźń", "🔐 sixteen bytes!", long.as_str()] {
        let ciphertext = cipher.encrypt(text);
        assert_eq!(ciphertext.len() % 16, 0);
        assert_eq!(cipher.decrypt(&ciphertext).unwrap(), text);
    }
}

#[test]
fn test_different_iv_changes_ciphertext() {
    init_tracing();
    let a = SymmetricCipher::new(&sequential_key(), &sequential_iv()).unwrap();
    let b = SymmetricCipher::new(&sequential_key(), &[0u8; 16]).unwrap();
    assert_ne!(a.encrypt(RAW_VALUE), b.encrypt(RAW_VALUE));
}

#[test]
fn test_wrong_key_or_iv_length_is_invalid_key_material() {
    init_tracing();
    for (key, iv) in [
        (vec![0u8; 16], vec![0u8; 16]),
        (vec![0u8; 33], vec![0u8; 16]),
        (vec![0u8; 32], vec![0u8; 15]),
        (vec![], vec![]),
    ] {
        let result = SymmetricCipher::new(&key, &iv);
        assert!(matches!(result, Err(CryptoError::InvalidKeyMaterial(_))));
    }

    assert!(matches!(
        encrypt_with("x", &[0u8; 31], &[0u8; 16]),
        Err(CryptoError::InvalidKeyMaterial(_))
    ));
}

#[test]
fn test_truncated_or_empty_ciphertext_is_invalid() {
    init_tracing();
    let cipher = SymmetricCipher::new(&sequential_key(), &sequential_iv()).unwrap();
    let ciphertext = cipher.encrypt(RAW_VALUE);

    let truncated = cipher.decrypt(&ciphertext[..ciphertext.len() - 1]);
    assert!(matches!(truncated, Err(CryptoError::InvalidCiphertext(_))));

    let empty = cipher.decrypt(&[]);
    assert!(matches!(empty, Err(CryptoError::InvalidCiphertext(_))));
}

#[test]
fn test_text_form_is_base64_and_roundtrips() {
    init_tracing();
    let cipher = SymmetricCipher::new(&sequential_key(), &sequential_iv()).unwrap();

    let encoded = cipher.encrypt_text(RAW_VALUE);

    assert_ne!(encoded, RAW_VALUE);
    assert_eq!(encoded.len(), 24); // one ciphertext block
    assert_eq!(cipher.decrypt_text(&encoded).unwrap(), RAW_VALUE);
    assert!(matches!(
        cipher.decrypt_text("not base64!"),
        Err(CryptoError::MalformedEnvelope(_))
    ));
}

#[test]
fn test_debug_output_hides_key_material() {
    let cipher = SymmetricCipher::new(&[0x42; 32], &[0x42; 16]).unwrap();
    let debug = format!("{cipher:?}");
    assert!(debug.contains("REDACTED"));
    assert!(!debug.contains("66")); // 0x42
}
