//! The flood-fill permutation.
//!
//! A `Regular` pass scans the grid column by column. Every fresh black pixel seeds
//! a flood fill over its 4-connected black neighbours, and each fresh pixel, black
//! or white, takes the next position in the transform stream. The stream then
//! replaces the source grid.
//!
//! An `Invert` pass replays the same scan, but answers "is this pixel black?" from
//! the stream position instead of the grid. Given the stream a `Regular` pass
//! produced, every answer matches, so the traversal is identical and each set bit
//! is written back to its original coordinate.

pub(crate) mod pixel;

use crate::direction::{Direction, TransformMode};
use crate::grid::Square;
use alloc::vec::Vec;
use pixel::{Pixel, PixelCursor};

/// Neighbour offsets, explored in this order.
const LOOK_AROUND: [(i32, i32); 4] = [(-1, 0), (0, -1), (1, 0), (0, 1)];

#[derive(Debug, Clone, Copy)]
struct Point {
    x: u32,
    y: u32,
}

impl Square {
    /// Runs one flood-fill pass in the frame of `direction`.
    ///
    /// `Regular` permutes the source grid. `Invert` with the same direction undoes a
    /// preceding `Regular` pass. Both leave the source and transform grids equal.
    pub fn transform(&mut self, direction: Direction, mode: TransformMode) {
        let edge = self.edge;
        let source = self.source.as_mut_slice();
        let transform = self.transform.as_mut_slice();
        let visited = self.visited.as_mut_slice();

        match mode {
            TransformMode::Regular => transform.fill(0),
            TransformMode::Invert => source.fill(0),
        }
        visited.fill(0);

        let mut cursor = PixelCursor::new(edge, direction, mode, source, transform, visited);
        let mut stack: Vec<Point> = Vec::new();

        for cx in 0..edge {
            for cy in 0..edge {
                if cursor.get_pixel(cx, cy) == Pixel::Black {
                    stack.push(Point { x: cx, y: cy });
                }

                while let Some(point) = stack.pop() {
                    cursor.light_pixel(point.x, point.y);

                    for (ox, oy) in LOOK_AROUND {
                        let x = point.x.wrapping_add_signed(ox);
                        let y = point.y.wrapping_add_signed(oy);
                        if cursor.get_pixel(x, y) == Pixel::Black {
                            stack.push(Point { x, y });
                        }
                    }
                }
            }
        }

        debug_assert_eq!(cursor.sequence(), edge as usize * edge as usize);
        log::trace!("{mode:?} pass facing {direction:?} over a {edge}x{edge} grid");

        let source = self.source.as_mut_slice();
        let transform = self.transform.as_mut_slice();
        match mode {
            TransformMode::Regular => source.copy_from_slice(transform),
            TransformMode::Invert => transform.copy_from_slice(source),
        }
    }
}
