//! Hex keys.
//!
//! Every hex digit `v` of a key drives two transform passes: first in direction
//! `v & 0b0011`, then in direction `(v & 0b1100) >> 2`.

use crate::direction::Direction;
use crate::error::FloodSquareError;
use alloc::vec::Vec;
use zeroize::Zeroize;

/// The two passes driven by one key digit, in encryption order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyDigit {
    /// Direction of the first pass (low two bits of the digit).
    pub first: Direction,
    /// Direction of the second pass (high two bits of the digit).
    pub second: Direction,
}

impl KeyDigit {
    /// Splits a nibble into its two direction codes.
    pub const fn from_nibble(nibble: u8) -> Self {
        Self {
            first: Direction::from_bits(nibble & 0b0011),
            second: Direction::from_bits((nibble & 0b1100) >> 2),
        }
    }
}

/// A parsed key: a sequence of hex nibbles. Wiped on drop.
#[derive(Clone, PartialEq, Eq)]
pub struct Key {
    nibbles: Vec<u8>,
}

impl Key {
    /// Parses a hex string. Digits are case-insensitive; the empty key is valid
    /// and performs no transforms.
    ///
    /// # Errors
    ///
    /// - [`FloodSquareError::InvalidKeyCharacter`] for the first character that is not
    ///   a hex digit, with its character position.
    ///
    /// # Examples
    ///
    /// ```
    /// use floodsquare::{Direction, Key, FloodSquareError};
    ///
    /// let key = Key::parse("1a").unwrap();
    /// assert_eq!(key.len(), 2);
    /// assert_eq!(key.digits().next().unwrap().first, Direction::West);
    ///
    /// assert_eq!(
    ///     Key::parse("12G4"),
    ///     Err(FloodSquareError::InvalidKeyCharacter { character: 'G', position: 2 })
    /// );
    /// ```
    pub fn parse(key: &str) -> Result<Self, FloodSquareError> {
        let mut nibbles = Vec::with_capacity(key.len());
        for (position, character) in key.chars().enumerate() {
            match hex_value(character) {
                Some(nibble) => nibbles.push(nibble),
                None => {
                    nibbles.zeroize();
                    return Err(FloodSquareError::InvalidKeyCharacter {
                        character,
                        position,
                    });
                }
            }
        }
        Ok(Self { nibbles })
    }

    /// Number of hex digits.
    pub fn len(&self) -> usize {
        self.nibbles.len()
    }

    /// Whether the key has no digits.
    pub fn is_empty(&self) -> bool {
        self.nibbles.is_empty()
    }

    /// Digits in key order. Decryption walks this in reverse.
    pub fn digits(&self) -> impl DoubleEndedIterator<Item = KeyDigit> + '_ {
        self.nibbles.iter().map(|&nibble| KeyDigit::from_nibble(nibble))
    }
}

impl Drop for Key {
    fn drop(&mut self) {
        self.nibbles.zeroize();
    }
}

impl core::fmt::Debug for Key {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Key")
            .field("len", &self.nibbles.len())
            .finish_non_exhaustive()
    }
}

const fn hex_value(character: char) -> Option<u8> {
    match character {
        '0'..='9' => Some(character as u8 - b'0'),
        'a'..='f' => Some(character as u8 - b'a' + 10),
        'A'..='F' => Some(character as u8 - b'A' + 10),
        _ => None,
    }
}
