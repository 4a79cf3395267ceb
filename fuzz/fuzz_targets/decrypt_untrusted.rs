#![no_main]

// Decrypting arbitrary bytes with an arbitrary key must never panic. Anything
// accepted with the padding check on must encrypt back to the same bytes.

use floodsquare::{decrypt, encrypt, grid_geometry, FloodSquareSettings, Salt};
use libfuzzer_sys::{arbitrary, fuzz_target};

#[derive(Clone, Debug, arbitrary::Arbitrary)]
pub struct Input {
    pub key: String,
    pub salt: u16,
    pub verify_padding: bool,
    pub ciphertext: Vec<u8>,
}

fuzz_target!(|input: Input| {
    let settings = FloodSquareSettings::default()
        .with_salt(Salt(input.salt))
        .with_verify_padding(input.verify_padding);

    let Ok(plaintext) = decrypt(&input.ciphertext, &input.key, settings) else {
        return;
    };

    assert!(plaintext.len() + 4 <= input.ciphertext.len());
    let fits_exactly =
        grid_geometry(plaintext.len() + 4).unwrap().byte_size == input.ciphertext.len();
    if input.verify_padding && fits_exactly {
        assert_eq!(
            encrypt(&plaintext, &input.key, settings).unwrap(),
            input.ciphertext
        );
    }
});
