//! XOR whitening.
//!
//! Breaks up long runs of identical bits before they reach the flood fill. This
//! is not encryption: the salt value is public and independent of the key. Data
//! that is already compressed does not need it.

/// A 16-bit whitening value. Zero disables whitening.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Salt(pub u16);

impl Salt {
    /// No whitening.
    pub const NONE: Salt = Salt(0x0000);

    /// The standard whitening pattern.
    pub const DEFAULT: Salt = Salt(0xA53C);

    /// Whether applying this salt changes any data.
    pub const fn is_enabled(self) -> bool {
        self.0 != 0
    }

    /// XORs even offsets with the low byte and odd offsets with the high byte.
    ///
    /// Applying the same salt twice restores the input.
    ///
    /// # Examples
    ///
    /// ```
    /// use floodsquare::Salt;
    ///
    /// let mut data = *b"abc";
    /// Salt::DEFAULT.apply(&mut data);
    /// assert_eq!(data, [b'a' ^ 0x3C, b'b' ^ 0xA5, b'c' ^ 0x3C]);
    /// Salt::DEFAULT.apply(&mut data);
    /// assert_eq!(&data, b"abc");
    /// ```
    pub fn apply(self, data: &mut [u8]) {
        if !self.is_enabled() {
            return;
        }

        let [low, high] = self.0.to_le_bytes();
        let mut pairs = data.chunks_exact_mut(2);
        for pair in &mut pairs {
            pair[0] ^= low;
            pair[1] ^= high;
        }
        if let [last] = pairs.into_remainder() {
            *last ^= low;
        }
    }
}
