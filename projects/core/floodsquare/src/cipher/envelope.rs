//! The plaintext envelope inside the grid.
//!
//! ```text
//! | length: u32 LE | payload (salted) | 0xFF padding ... |
//! ```

use crate::error::{CorruptionKind, FloodSquareError};
use crate::salt::Salt;
use alloc::vec::Vec;

/// Size of the payload length prefix, in bytes.
pub const LENGTH_PREFIX_SIZE: usize = 4;

/// Largest payload that fits in a grid. The grid's bit count must fit in 32 bits.
pub const MAX_PAYLOAD_SIZE: usize = (u32::MAX / 8) as usize - LENGTH_PREFIX_SIZE;

/// Writes prefix and payload to the start of `grid` and whitens the payload.
///
/// `grid` must already be padded with `0xFF` past the envelope.
pub(crate) fn seal(grid: &mut [u8], payload: &[u8], salt: Salt) {
    debug_assert!(payload.len() <= MAX_PAYLOAD_SIZE);
    debug_assert!(grid.len() >= LENGTH_PREFIX_SIZE + payload.len());

    let (prefix, rest) = grid.split_at_mut(LENGTH_PREFIX_SIZE);
    prefix.copy_from_slice(&(payload.len() as u32).to_le_bytes());

    let body = &mut rest[..payload.len()];
    body.copy_from_slice(payload);
    salt.apply(body);
}

/// Extracts the payload from a decrypted grid and removes the whitening.
///
/// # Errors
///
/// - [`CorruptionKind::LengthOutOfRange`] if the prefix claims more bytes than follow it.
/// - [`CorruptionKind::DamagedPadding`] if `verify_padding` is set and a byte past
///   the payload is not `0xFF`.
pub(crate) fn open(
    grid: &[u8],
    salt: Salt,
    verify_padding: bool,
) -> Result<Vec<u8>, FloodSquareError> {
    let (prefix, rest) = grid.split_at(LENGTH_PREFIX_SIZE);
    let recovered = u32::from_le_bytes([prefix[0], prefix[1], prefix[2], prefix[3]]);

    if recovered as usize > rest.len() {
        return Err(FloodSquareError::Corrupted(
            CorruptionKind::LengthOutOfRange {
                recovered,
                capacity: rest.len(),
            },
        ));
    }

    let (body, padding) = rest.split_at(recovered as usize);
    if verify_padding && padding.iter().any(|&b| b != 0xFF) {
        return Err(FloodSquareError::Corrupted(CorruptionKind::DamagedPadding));
    }

    let mut payload = body.to_vec();
    salt.apply(&mut payload);
    Ok(payload)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seal_writes_little_endian_prefix() {
        let mut grid = [0xFF; 8];
        seal(&mut grid, b"abc", Salt::NONE);
        assert_eq!(grid, [3, 0, 0, 0, b'a', b'b', b'c', 0xFF]);
    }

    #[test]
    fn seal_salts_only_the_payload() {
        let mut grid = [0xFF; 8];
        seal(&mut grid, &[0, 0, 0], Salt::DEFAULT);
        assert_eq!(grid, [3, 0, 0, 0, 0x3C, 0xA5, 0x3C, 0xFF]);
    }

    #[test]
    fn open_reverses_seal() {
        let mut grid = [0xFF; 18];
        seal(&mut grid, b"hello world", Salt::DEFAULT);
        assert_eq!(open(&grid, Salt::DEFAULT, true).unwrap(), b"hello world");
    }

    #[test]
    fn open_accepts_a_completely_full_grid() {
        let mut grid = [0u8; 8];
        seal(&mut grid, &[1, 2, 3, 4], Salt::NONE);
        assert_eq!(open(&grid, Salt::NONE, true).unwrap(), [1, 2, 3, 4]);
    }

    #[test]
    fn open_rejects_length_past_the_end() {
        let grid = [5, 0, 0, 0, 1, 2, 3, 4];
        assert_eq!(
            open(&grid, Salt::NONE, true),
            Err(FloodSquareError::Corrupted(
                CorruptionKind::LengthOutOfRange {
                    recovered: 5,
                    capacity: 4
                }
            ))
        );
    }

    #[test]
    fn open_checks_padding_only_when_asked() {
        let grid = [1, 0, 0, 0, 9, 0xFF, 0xFE, 0xFF];
        assert_eq!(
            open(&grid, Salt::NONE, true),
            Err(FloodSquareError::Corrupted(CorruptionKind::DamagedPadding))
        );
        assert_eq!(open(&grid, Salt::NONE, false).unwrap(), [9]);
    }
}
