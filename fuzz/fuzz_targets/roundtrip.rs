#![no_main]

// Every plaintext must survive encrypt then decrypt with the same key and settings.

use floodsquare::{decrypt, encrypt, grid_geometry, FloodSquareSettings, Salt};
use libfuzzer_sys::{arbitrary, fuzz_target};

#[derive(Clone, Debug, arbitrary::Arbitrary)]
pub struct Input {
    pub key_nibbles: Vec<u8>,
    pub salt: u16,
    pub plaintext: Vec<u8>,
}

fuzz_target!(|input: Input| {
    // Long keys only make runs slower without reaching new code.
    let key: String = input
        .key_nibbles
        .iter()
        .take(16)
        .map(|nibble| char::from_digit(u32::from(nibble & 0xF), 16).unwrap())
        .collect();
    let settings = FloodSquareSettings::default().with_salt(Salt(input.salt));

    let ciphertext = encrypt(&input.plaintext, &key, settings).unwrap();
    assert_eq!(
        ciphertext.len(),
        grid_geometry(input.plaintext.len() + 4).unwrap().byte_size
    );

    let decrypted = decrypt(&ciphertext, &key, settings).unwrap();
    assert_eq!(
        decrypted, input.plaintext,
        "Round trip failed\nKey: {key}\nSalt: {:#06X}",
        input.salt
    );
});
