use super::{grid_geometry, GridGeometry, GridView};
use crate::allocate::allocate_filled;
use crate::error::FloodSquareError;
use safe_allocator_api::RawAlloc;
use zeroize::Zeroize;

/// The working set of one cipher context: three equally sized bit grids.
///
/// - `source`: the current spatial bit pattern.
/// - `transform`: the sequential bit stream written or consumed by the flood fill.
/// - `visited`: one-shot markers, cleared at the start of every transform.
///
/// All three buffers are wiped before they are freed.
pub struct Square {
    pub(crate) edge: u32,
    pub(crate) source: RawAlloc,
    pub(crate) transform: RawAlloc,
    pub(crate) visited: RawAlloc,
}

impl Square {
    /// Creates the smallest grid able to hold `data_size` bytes.
    ///
    /// The source grid starts out all black (`0xFF`); the transform and visited
    /// grids start out clear.
    ///
    /// # Errors
    ///
    /// - [`FloodSquareError::PayloadTooLarge`] if no grid can hold `data_size` bytes.
    /// - [`FloodSquareError::AllocationFailed`] if a buffer cannot be allocated.
    pub fn new(data_size: usize) -> Result<Self, FloodSquareError> {
        let geometry = grid_geometry(data_size)?;
        Self::with_geometry(geometry, 0xFF, 0x00)
    }

    /// Creates the smallest grid able to hold `data` and copies `data` to the
    /// start of the source grid. The remainder is padded with `0xFF`.
    pub fn from_bytes(data: &[u8]) -> Result<Self, FloodSquareError> {
        let mut square = Self::new(data.len())?;
        square.source.as_mut_slice()[..data.len()].copy_from_slice(data);
        Ok(square)
    }

    /// Loads a ciphertext, which must be exactly one full grid.
    ///
    /// The bytes land in both the source and the transform grid, so the square
    /// is in the state a `Regular` transform leaves behind.
    ///
    /// # Errors
    ///
    /// - [`FloodSquareError::InvalidCiphertextSize`] if `ciphertext` is shorter than
    ///   a length prefix or is not the byte size of a square grid.
    /// - [`FloodSquareError::AllocationFailed`] if a buffer cannot be allocated.
    pub fn from_ciphertext(ciphertext: &[u8]) -> Result<Self, FloodSquareError> {
        let invalid = || FloodSquareError::InvalidCiphertextSize(ciphertext.len());
        if ciphertext.len() < 4 {
            return Err(invalid());
        }

        let geometry = grid_geometry(ciphertext.len()).map_err(|_| invalid())?;
        if geometry.byte_size != ciphertext.len() {
            return Err(invalid());
        }

        let mut square = Self::with_geometry(geometry, 0x00, 0x00)?;
        square.source.as_mut_slice().copy_from_slice(ciphertext);
        square.transform.as_mut_slice().copy_from_slice(ciphertext);
        Ok(square)
    }

    fn with_geometry(
        geometry: GridGeometry,
        source_fill: u8,
        transform_fill: u8,
    ) -> Result<Self, FloodSquareError> {
        // Early returns drop (and free) whatever was already allocated.
        let source = allocate_filled(geometry.byte_size, source_fill)?;
        let transform = allocate_filled(geometry.byte_size, transform_fill)?;
        let visited = allocate_filled(geometry.byte_size, 0x00)?;
        Ok(Self {
            edge: geometry.edge,
            source,
            transform,
            visited,
        })
    }

    /// Side length of the grid, in bits.
    pub fn edge(&self) -> u32 {
        self.edge
    }

    /// Number of bytes in each grid.
    pub fn byte_size(&self) -> usize {
        self.source.len()
    }

    /// The source grid bytes.
    pub fn source(&self) -> &[u8] {
        self.source.as_slice()
    }

    /// Mutable access to the source grid bytes.
    pub fn source_mut(&mut self) -> &mut [u8] {
        self.source.as_mut_slice()
    }

    /// Read-only view of the source grid.
    pub fn view(&self) -> GridView<'_> {
        GridView::new(self.edge, self.source.as_slice())
    }
}

impl Drop for Square {
    fn drop(&mut self) {
        self.source.as_mut_slice().zeroize();
        self.transform.as_mut_slice().zeroize();
        self.visited.as_mut_slice().zeroize();
    }
}

impl core::fmt::Debug for Square {
    // Grid contents are secret; only the shape is printed.
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Square")
            .field("edge", &self.edge)
            .field("byte_size", &self.byte_size())
            .finish_non_exhaustive()
    }
}
