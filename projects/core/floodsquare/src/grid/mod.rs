//! Square bit grids.
//!
//! A grid of side `edge` is stored as `edge * edge / 8` bytes. Bits are packed
//! MSB first, so bit `i` lives in byte `i / 8` under mask `0x80 >> (i % 8)`, and
//! pixel `(x, y)` is bit `x + edge * y`.

mod square;

pub use square::Square;

use crate::error::FloodSquareError;
use crate::isqrt::integer_square_root;

/// Edge length and byte capacity of the grid that holds a given number of bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridGeometry {
    /// Side length of the grid, in bits. Always a multiple of 4.
    pub edge: u32,
    /// Number of bytes backing the grid, `edge * edge / 8`.
    pub byte_size: usize,
}

/// Computes the smallest square grid able to hold `byte_size` bytes.
///
/// If `byte_size * 8` is a perfect square the grid fits exactly; otherwise the
/// edge is rounded up to the next multiple of 4. Zero bytes still get the
/// smallest 4x4 grid.
///
/// # Errors
///
/// - [`FloodSquareError::PayloadTooLarge`] if `byte_size * 8` does not fit in 32 bits.
///
/// # Examples
///
/// ```
/// use floodsquare::grid_geometry;
///
/// let geometry = grid_geometry(15).unwrap();
/// assert_eq!(geometry.edge, 12);
/// assert_eq!(geometry.byte_size, 18);
/// ```
pub fn grid_geometry(byte_size: usize) -> Result<GridGeometry, FloodSquareError> {
    let bit_count = u32::try_from(byte_size)
        .ok()
        .and_then(|bytes| bytes.checked_mul(8))
        .ok_or(FloodSquareError::PayloadTooLarge(byte_size))?;

    let mut edge = integer_square_root(bit_count);
    if edge == 0 || edge * edge != bit_count {
        edge = ((edge + 4) / 4) * 4;
    }

    // edge can reach 65536 here, so square it in 64 bits.
    let grid_bits = u64::from(edge) * u64::from(edge);
    let byte_size = usize::try_from(grid_bits / 8)
        .map_err(|_| FloodSquareError::PayloadTooLarge(byte_size))?;

    Ok(GridGeometry { edge, byte_size })
}

/// Read-only view of one grid's bits.
#[derive(Debug, Clone, Copy)]
pub struct GridView<'a> {
    edge: u32,
    bits: &'a [u8],
}

impl<'a> GridView<'a> {
    /// Wraps `bits` as a grid of side `edge`.
    ///
    /// # Panics
    ///
    /// If `bits` is not exactly `edge * edge / 8` bytes long.
    pub fn new(edge: u32, bits: &'a [u8]) -> Self {
        assert_eq!(
            (edge as usize * edge as usize) / 8,
            bits.len(),
            "grid of edge {edge} needs {} bytes",
            (edge as usize * edge as usize) / 8
        );
        Self { edge, bits }
    }

    /// Side length of the grid, in bits.
    pub fn edge(&self) -> u32 {
        self.edge
    }

    /// Whether pixel `(x, y)` is set (black).
    ///
    /// # Panics
    ///
    /// If the coordinates are outside the grid.
    pub fn is_set(&self, x: u32, y: u32) -> bool {
        assert!(x < self.edge && y < self.edge, "({x}, {y}) is outside the grid");
        is_set(self.bits, pixel_index(self.edge, x, y))
    }

    /// The packed bytes behind the grid.
    pub fn as_bytes(&self) -> &'a [u8] {
        self.bits
    }

    /// Number of set pixels.
    pub fn count_set(&self) -> u32 {
        self.bits.iter().map(|b| b.count_ones()).sum()
    }
}

#[inline(always)]
pub(crate) fn pixel_index(edge: u32, x: u32, y: u32) -> usize {
    x as usize + edge as usize * y as usize
}

#[inline(always)]
pub(crate) fn is_set(bits: &[u8], index: usize) -> bool {
    bits[index / 8] & (0x80 >> (index % 8)) != 0
}

#[inline(always)]
pub(crate) fn set_bit(bits: &mut [u8], index: usize) {
    bits[index / 8] |= 0x80 >> (index % 8);
}
