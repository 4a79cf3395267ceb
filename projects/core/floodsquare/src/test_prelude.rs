//! Common test imports and utilities.
//!
//! This module provides a common prelude for test modules to avoid
//! duplicate imports across the codebase.

// External crates commonly used in tests
pub use rstest::rstest;

// Core functionality from this crate
pub use crate::{
    decrypt, encrypt, Direction, FloodSquareError, FloodSquareSettings, Salt, Square,
    TransformMode,
};

pub use alloc::vec::Vec;

/// Deterministic, well mixed test bytes (golden ratio hash of the index).
pub(crate) fn generate_test_data(num_bytes: usize) -> Vec<u8> {
    (0..num_bytes as u32)
        .map(|i| (i.wrapping_mul(0x9E37_79B9) >> 24) as u8)
        .collect()
}

/// Encrypts then decrypts `plaintext`, asserting the round trip is lossless.
pub(crate) fn assert_roundtrip(plaintext: &[u8], key: &str, settings: FloodSquareSettings) {
    let ciphertext = encrypt(plaintext, key, settings).unwrap();
    let decrypted = decrypt(&ciphertext, key, settings).unwrap();
    assert_eq!(
        decrypted,
        plaintext,
        "round trip failed for {} bytes with a {} digit key and {:?}",
        plaintext.len(),
        key.len(),
        settings
    );
}

#[test]
fn validate_test_data_generator() {
    assert_eq!(
        generate_test_data(16),
        [
            0x00, 0x9E, 0x3C, 0xDA, 0x78, 0x17, 0xB5, 0x53, //
            0xF1, 0x8F, 0x2E, 0xCC, 0x6A, 0x08, 0xA7, 0x45,
        ]
    );
}
