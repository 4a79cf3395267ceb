//! Compass directions select the coordinate frame a flood fill runs in.
//!
//! Rather than rotating the buffers, every pixel access is passed through
//! [`Direction::transpose`], so the same row-major scan explores the grid as if
//! it had been rotated or reflected.

use derive_enum_all_values::AllValues;

/// One of the four rotation/reflection frames of a transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AllValues)]
pub enum Direction {
    /// Identity.
    North,
    /// Transpose, then mirror the column.
    East,
    /// Rotate by 180 degrees.
    South,
    /// Transpose, then mirror the row.
    West,
}

impl Direction {
    /// Decodes a 2-bit direction code. Bits above the lowest two are ignored.
    ///
    /// | code | direction |
    /// |------|-----------|
    /// | 0    | North     |
    /// | 1    | West      |
    /// | 2    | South     |
    /// | 3    | East      |
    pub const fn from_bits(code: u8) -> Self {
        match code & 0b11 {
            0 => Direction::North,
            1 => Direction::West,
            2 => Direction::South,
            _ => Direction::East,
        }
    }

    /// The 2-bit code of this direction. Inverse of [`Direction::from_bits`].
    pub const fn code(self) -> u8 {
        match self {
            Direction::North => 0,
            Direction::West => 1,
            Direction::South => 2,
            Direction::East => 3,
        }
    }

    /// Maps `(cx, cy)` into this direction's frame on a grid of side `edge`.
    ///
    /// Arithmetic wraps, so coordinates just outside the grid (`u32::MAX` after
    /// stepping left of column 0, or `edge`) stay outside after transposition.
    #[inline(always)]
    pub const fn transpose(self, cx: u32, cy: u32, edge: u32) -> (u32, u32) {
        let last = edge.wrapping_sub(1);
        match self {
            Direction::North => (cx, cy),
            Direction::East => (last.wrapping_sub(cy), cx),
            Direction::West => (cy, last.wrapping_sub(cx)),
            Direction::South => (last.wrapping_sub(cx), last.wrapping_sub(cy)),
        }
    }
}

impl TryFrom<u8> for Direction {
    type Error = u8;

    /// Strict decode; codes above 3 are returned as the error.
    fn try_from(code: u8) -> Result<Self, Self::Error> {
        if code > 0b11 {
            return Err(code);
        }
        Ok(Direction::from_bits(code))
    }
}

/// Which way a transform moves bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AllValues)]
pub enum TransformMode {
    /// Spatial to sequential: serializes the source grid in flood-fill order.
    Regular,
    /// Sequential to spatial: rebuilds the source grid from the serialized stream.
    Invert,
}
