#![doc = include_str!(concat!("../", core::env!("CARGO_PKG_README")))]
#![no_std]
#![warn(missing_docs)]

#[cfg(feature = "std")]
extern crate std;

extern crate alloc;

/// Fallible, aligned buffer allocation.
pub mod allocate;

/// Encrypt and decrypt entry points, settings and transform observers.
pub mod cipher;

/// Compass directions and coordinate transposition.
pub mod direction;

/// Error types returned by the cipher.
pub mod error;

/// Square bit grids: sizing, bit access and the three-buffer working set.
pub mod grid;

/// Integer square root used for grid sizing.
pub mod isqrt;

/// Hex key parsing.
pub mod key;

/// Portable bitmap (PBM) dumps of grid state.
#[cfg(feature = "std")]
pub mod pbm;

/// XOR whitening.
pub mod salt;

/// The flood-fill permutation.
pub mod transform;

#[cfg(test)]
pub mod test_prelude;

pub use cipher::{
    decrypt, decrypt_with_observer, encrypt, encrypt_with_observer, FloodSquareSettings,
    TransformObserver, TransformStep,
};
pub use direction::{Direction, TransformMode};
pub use error::{CorruptionKind, FloodSquareError};
pub use grid::{grid_geometry, GridGeometry, GridView, Square};
pub use isqrt::integer_square_root;
pub use key::{Key, KeyDigit};
pub use salt::Salt;
