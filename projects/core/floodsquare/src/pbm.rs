//! Plain (ASCII) portable bitmap output.
//!
//! Set bits are written as `1` (black) and clear bits as `0` (white), row by row.
//! A line break follows every 36th pixel; every other pixel is followed by a
//! space.

use crate::grid::GridView;
use std::io::{self, Write};

/// Pixels written per line of bitmap data.
const PIXELS_PER_LINE: usize = 36;

/// Writes `view` as a plain `P1` portable bitmap.
///
/// # Examples
///
/// ```
/// use floodsquare::{pbm::write_portable_bitmap, GridView};
///
/// let mut out = Vec::new();
/// write_portable_bitmap(GridView::new(4, &[0b1001_0110, 0b0011_1100]), &mut out)?;
/// assert!(out.starts_with(b"P1\n# SquareData\n4 4\n1 0 0 1"));
/// # Ok::<(), std::io::Error>(())
/// ```
pub fn write_portable_bitmap<W: Write>(view: GridView<'_>, mut writer: W) -> io::Result<()> {
    let edge = view.edge();
    write!(writer, "P1\n# SquareData\n{edge} {edge}\n")?;

    let mut on_line = 0;
    for y in 0..edge {
        for x in 0..edge {
            writer.write_all(if view.is_set(x, y) { b"1" } else { b"0" })?;
            on_line += 1;
            if on_line == PIXELS_PER_LINE {
                writer.write_all(b"\n")?;
                on_line = 0;
            } else {
                writer.write_all(b" ")?;
            }
        }
    }

    if on_line != 0 {
        writer.write_all(b"\n")?;
    }
    writer.flush()
}
