#![no_main]

// A Regular pass followed by an Invert pass in the same direction restores the grid.

use floodsquare::{Direction, Square, TransformMode};
use libfuzzer_sys::{arbitrary, fuzz_target};

#[derive(Clone, Debug, arbitrary::Arbitrary)]
pub struct Input {
    pub direction: u8,
    pub data: Vec<u8>,
}

fuzz_target!(|input: Input| {
    let direction = Direction::from_bits(input.direction);
    let mut square = Square::from_bytes(&input.data).unwrap();
    let original = square.source().to_vec();
    let popcount = square.view().count_set();

    square.transform(direction, TransformMode::Regular);
    assert_eq!(square.view().count_set(), popcount);

    square.transform(direction, TransformMode::Invert);
    assert_eq!(
        square.source(),
        original.as_slice(),
        "Invert did not undo Regular facing {direction:?}"
    );
});
