//! Error types for FloodSquare operations.

use crate::allocate::AllocateError;
use thiserror::Error;

/// Errors that can occur while encrypting or decrypting.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FloodSquareError {
    /// A key character is not a hex digit.
    #[error("Invalid key character {character:?} at position {position}. Keys may only contain hex digits (0-9, A-F).")]
    InvalidKeyCharacter {
        /// The offending character.
        character: char,
        /// Character index of the offending character within the key.
        position: usize,
    },

    /// Memory allocation for the grid buffers failed.
    #[error("Memory allocation failed: {0}")]
    AllocationFailed(#[from] AllocateError),

    /// The decrypted grid does not hold a valid envelope.
    /// Usually a wrong key, mismatched salt or tampered ciphertext.
    #[error("Decrypted data is corrupted: {0}")]
    Corrupted(CorruptionKind),

    /// The ciphertext length is not the byte size of any square grid.
    #[error("Invalid ciphertext size: {0} bytes. Ciphertext must be exactly one square grid (edge * edge / 8 bytes, edge a multiple of 4).")]
    InvalidCiphertextSize(usize),

    /// The payload does not fit in the largest supported grid.
    #[error("Payload too large: {0} bytes.")]
    PayloadTooLarge(usize),
}

/// Why a decrypted grid was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CorruptionKind {
    /// The recovered length prefix points past the end of the container.
    #[error("recovered length {recovered} does not fit in a {capacity} byte container")]
    LengthOutOfRange {
        /// Length read from the decrypted prefix.
        recovered: u32,
        /// Bytes available for the payload after the prefix.
        capacity: usize,
    },

    /// Bytes after the payload are not the `0xFF` padding written on encrypt.
    #[error("padding after the payload was altered")]
    DamagedPadding,
}
