//! Pixel access during one flood-fill pass.

use crate::direction::{Direction, TransformMode};
use crate::grid::{is_set, pixel_index, set_bit};

/// Result of reading a pixel during a flood fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Pixel {
    /// Set bit, seen for the first time in this pass.
    Black,
    /// Clear bit, or a pixel already visited in this pass.
    White,
    /// Outside the grid; acts as a flood-fill boundary.
    OutOfRange,
}

/// Borrowed state of a single transform pass.
///
/// `sequence` numbers fresh pixels in the order the flood fill reaches them. As
/// long as the Black/White answers agree, that order is the same in `Regular` and
/// `Invert` mode, which is what lets `Invert` put every bit back where it came from.
pub(crate) struct PixelCursor<'a> {
    edge: u32,
    direction: Direction,
    mode: TransformMode,
    source: &'a mut [u8],
    transform: &'a mut [u8],
    visited: &'a mut [u8],
    sequence: usize,
}

impl<'a> PixelCursor<'a> {
    pub(crate) fn new(
        edge: u32,
        direction: Direction,
        mode: TransformMode,
        source: &'a mut [u8],
        transform: &'a mut [u8],
        visited: &'a mut [u8],
    ) -> Self {
        Self {
            edge,
            direction,
            mode,
            source,
            transform,
            visited,
            sequence: 0,
        }
    }

    /// Reads `(cx, cy)` in this pass's frame, marking it visited.
    ///
    /// In `Regular` mode a black pixel also writes a set bit at the current
    /// sequence position of the transform grid. In `Invert` mode the answer is
    /// read from that position instead of from the source grid.
    #[inline]
    pub(crate) fn get_pixel(&mut self, cx: u32, cy: u32) -> Pixel {
        let (cx, cy) = self.direction.transpose(cx, cy, self.edge);
        if cx >= self.edge || cy >= self.edge {
            return Pixel::OutOfRange;
        }

        let index = pixel_index(self.edge, cx, cy);
        if is_set(self.visited, index) {
            return Pixel::White;
        }
        set_bit(self.visited, index);

        let black = match self.mode {
            TransformMode::Regular => {
                let black = is_set(self.source, index);
                if black {
                    set_bit(self.transform, self.sequence);
                }
                black
            }
            TransformMode::Invert => is_set(self.transform, self.sequence),
        };

        self.sequence += 1;
        if black {
            Pixel::Black
        } else {
            Pixel::White
        }
    }

    /// Sets source pixel `(cx, cy)` in this pass's frame.
    ///
    /// Only called for coordinates [`Self::get_pixel`] reported as black.
    #[inline]
    pub(crate) fn light_pixel(&mut self, cx: u32, cy: u32) {
        let (cx, cy) = self.direction.transpose(cx, cy, self.edge);
        set_bit(self.source, pixel_index(self.edge, cx, cy));
    }

    /// Number of fresh pixels visited so far.
    pub(crate) fn sequence(&self) -> usize {
        self.sequence
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn revisit_is_white_and_does_not_advance() {
        let mut source = [0xFF, 0xFF];
        let mut transform = [0u8; 2];
        let mut visited = [0u8; 2];
        let mut cursor = PixelCursor::new(
            4,
            Direction::North,
            TransformMode::Regular,
            &mut source,
            &mut transform,
            &mut visited,
        );

        assert_eq!(cursor.get_pixel(1, 1), Pixel::Black);
        assert_eq!(cursor.sequence(), 1);
        assert_eq!(cursor.get_pixel(1, 1), Pixel::White);
        assert_eq!(cursor.sequence(), 1);
        assert_eq!(transform, [0b1000_0000, 0]);
        assert_eq!(visited, [0b0000_0100, 0]);
    }

    #[test]
    fn out_of_range_does_not_advance() {
        let mut source = [0xFF, 0xFF];
        let mut transform = [0u8; 2];
        let mut visited = [0u8; 2];
        let mut cursor = PixelCursor::new(
            4,
            Direction::East,
            TransformMode::Regular,
            &mut source,
            &mut transform,
            &mut visited,
        );

        assert_eq!(cursor.get_pixel(u32::MAX, 0), Pixel::OutOfRange);
        assert_eq!(cursor.get_pixel(0, 4), Pixel::OutOfRange);
        assert_eq!(cursor.sequence(), 0);
        assert_eq!(visited, [0, 0]);
    }

    #[test]
    fn white_pixel_advances_without_writing() {
        let mut source = [0u8; 2];
        let mut transform = [0u8; 2];
        let mut visited = [0u8; 2];
        let mut cursor = PixelCursor::new(
            4,
            Direction::North,
            TransformMode::Regular,
            &mut source,
            &mut transform,
            &mut visited,
        );

        assert_eq!(cursor.get_pixel(0, 0), Pixel::White);
        assert_eq!(cursor.get_pixel(1, 0), Pixel::White);
        assert_eq!(cursor.sequence(), 2);
        assert_eq!(transform, [0, 0]);
    }

    #[test]
    fn invert_reads_the_sequence_stream() {
        let mut source = [0u8; 2];
        let mut transform = [0b0100_0000, 0];
        let mut visited = [0u8; 2];
        let mut cursor = PixelCursor::new(
            4,
            Direction::South,
            TransformMode::Invert,
            &mut source,
            &mut transform,
            &mut visited,
        );

        // The answers come from positions 0 and 1 of the stream, whatever the coordinates.
        assert_eq!(cursor.get_pixel(2, 2), Pixel::White);
        assert_eq!(cursor.get_pixel(0, 0), Pixel::Black);
        cursor.light_pixel(0, 0);
        // South maps (0, 0) onto (3, 3), the last bit of the grid.
        assert_eq!(source, [0, 0b0000_0001]);
    }
}
