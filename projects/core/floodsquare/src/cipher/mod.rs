//! Key-driven encryption and decryption.
//!
//! Encryption seals the payload into a grid, then for every key digit (left to
//! right) runs a `Regular` pass in the digit's first direction followed by one in
//! its second direction. Decryption walks the key right to left and runs the
//! passes in `Invert` mode, second direction first.

mod envelope;
mod observer;
mod settings;

pub use envelope::{LENGTH_PREFIX_SIZE, MAX_PAYLOAD_SIZE};
pub use observer::{TransformObserver, TransformStep};
pub use settings::FloodSquareSettings;

use crate::direction::{Direction, TransformMode};
use crate::error::FloodSquareError;
use crate::grid::{GridView, Square};
use crate::key::Key;
use alloc::vec::Vec;
use log::debug;

/// Encrypts `plaintext` with a hex `key`.
///
/// The output is a full grid: `edge * edge / 8` bytes, large enough for a 4 byte
/// length prefix plus `plaintext`. The result is deterministic for a given input,
/// key and settings. An empty key is allowed and leaves the sealed grid unpermuted.
///
/// # Errors
///
/// - [`FloodSquareError::InvalidKeyCharacter`] if `key` is not all hex digits.
/// - [`FloodSquareError::PayloadTooLarge`] if `plaintext` exceeds [`MAX_PAYLOAD_SIZE`].
/// - [`FloodSquareError::AllocationFailed`] if the grid cannot be allocated.
///
/// # Examples
///
/// ```
/// use floodsquare::{encrypt, FloodSquareSettings};
///
/// let ciphertext = encrypt(b"hello world", "1A", FloodSquareSettings::default())?;
/// assert_eq!(ciphertext.len(), 18); // 12x12 grid
/// # Ok::<(), floodsquare::FloodSquareError>(())
/// ```
pub fn encrypt(
    plaintext: &[u8],
    key: &str,
    settings: FloodSquareSettings,
) -> Result<Vec<u8>, FloodSquareError> {
    let mut ignore = |_: TransformStep, _: GridView<'_>| {};
    encrypt_with_observer(plaintext, key, settings, &mut ignore)
}

/// [`encrypt`], reporting the grid to `observer` after every pass.
pub fn encrypt_with_observer<O>(
    plaintext: &[u8],
    key: &str,
    settings: FloodSquareSettings,
    observer: &mut O,
) -> Result<Vec<u8>, FloodSquareError>
where
    O: TransformObserver + ?Sized,
{
    let key = Key::parse(key)?;
    if plaintext.len() > MAX_PAYLOAD_SIZE {
        return Err(FloodSquareError::PayloadTooLarge(plaintext.len()));
    }

    let mut square = Square::new(plaintext.len() + LENGTH_PREFIX_SIZE)?;
    envelope::seal(square.source_mut(), plaintext, settings.salt);
    debug!(
        "Encrypting {} bytes into a {edge}x{edge} grid ({} bytes) with {} key digits",
        plaintext.len(),
        square.byte_size(),
        key.len(),
        edge = square.edge(),
    );

    let mut passes = Passes::new(&mut square, TransformMode::Regular, observer);
    for digit in key.digits() {
        passes.run(digit.first);
        passes.run(digit.second);
    }

    Ok(square.source().to_vec())
}

/// Decrypts a ciphertext produced by [`encrypt`] with the same key and settings.
///
/// # Errors
///
/// - [`FloodSquareError::InvalidKeyCharacter`] if `key` is not all hex digits.
/// - [`FloodSquareError::InvalidCiphertextSize`] if `ciphertext` is not exactly one grid.
/// - [`FloodSquareError::Corrupted`] if the decrypted grid holds no valid envelope,
///   which means a wrong key, a different salt or modified ciphertext.
/// - [`FloodSquareError::AllocationFailed`] if the grid cannot be allocated.
///
/// # Examples
///
/// ```
/// use floodsquare::{decrypt, encrypt, FloodSquareSettings, Salt};
///
/// let settings = FloodSquareSettings::default().with_salt(Salt::DEFAULT);
/// let ciphertext = encrypt(b"attack at dawn", "e1f020c9", settings)?;
/// assert_eq!(decrypt(&ciphertext, "E1F020C9", settings)?, b"attack at dawn");
/// # Ok::<(), floodsquare::FloodSquareError>(())
/// ```
pub fn decrypt(
    ciphertext: &[u8],
    key: &str,
    settings: FloodSquareSettings,
) -> Result<Vec<u8>, FloodSquareError> {
    let mut ignore = |_: TransformStep, _: GridView<'_>| {};
    decrypt_with_observer(ciphertext, key, settings, &mut ignore)
}

/// [`decrypt`], reporting the grid to `observer` after every pass.
pub fn decrypt_with_observer<O>(
    ciphertext: &[u8],
    key: &str,
    settings: FloodSquareSettings,
    observer: &mut O,
) -> Result<Vec<u8>, FloodSquareError>
where
    O: TransformObserver + ?Sized,
{
    let key = Key::parse(key)?;
    let mut square = Square::from_ciphertext(ciphertext)?;
    debug!(
        "Decrypting a {edge}x{edge} grid ({} bytes) with {} key digits",
        square.byte_size(),
        key.len(),
        edge = square.edge(),
    );

    let mut passes = Passes::new(&mut square, TransformMode::Invert, observer);
    for digit in key.digits().rev() {
        passes.run(digit.second);
        passes.run(digit.first);
    }

    let plaintext = envelope::open(square.source(), settings.salt, settings.verify_padding)?;
    debug!("Recovered {} bytes", plaintext.len());
    Ok(plaintext)
}

/// Runs passes of one mode over a square, numbering them for the observer.
struct Passes<'a, O: TransformObserver + ?Sized> {
    square: &'a mut Square,
    mode: TransformMode,
    observer: &'a mut O,
    index: usize,
}

impl<'a, O: TransformObserver + ?Sized> Passes<'a, O> {
    fn new(square: &'a mut Square, mode: TransformMode, observer: &'a mut O) -> Self {
        Self {
            square,
            mode,
            observer,
            index: 0,
        }
    }

    fn run(&mut self, direction: Direction) {
        self.square.transform(direction, self.mode);
        let step = TransformStep {
            index: self.index,
            direction,
            mode: self.mode,
        };
        self.observer.on_transform(step, self.square.view());
        self.index += 1;
    }
}
