//! Aligned allocation of grid buffers.
//!
//! Grid buffers are allocated through [`RawAlloc`] so that an allocation failure
//! surfaces as an [`AllocateError`] instead of aborting the process. Buffers are
//! freed when the [`RawAlloc`] is dropped.

use core::alloc::{Layout, LayoutError};
use safe_allocator_api::{AllocError, RawAlloc};
use thiserror::Error;

/// Allocates `num_bytes` bytes aligned to 64 bytes and fills them with `value`.
///
/// # Parameters
///
/// - `num_bytes`: The number of bytes to allocate
/// - `value`: The byte every position is initialized to
///
/// # Returns
///
/// A fully initialized [`RawAlloc`]
pub fn allocate_filled(num_bytes: usize, value: u8) -> Result<RawAlloc, AllocateError> {
    let layout = Layout::from_size_align(num_bytes, 64)?;
    let mut alloc = RawAlloc::new(layout)?;

    // Safety: the allocation is exactly `num_bytes` long.
    unsafe {
        core::ptr::write_bytes(alloc.as_mut_ptr(), value, num_bytes);
    }

    Ok(alloc)
}

/// An error that happened in memory allocation within the library.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AllocateError {
    /// An error that occurred while creating a layout for allocation.
    #[error("Invalid layout provided. Likely due to `num_bytes` being larger than isize::MAX. {0}")]
    LayoutError(#[from] LayoutError),

    /// An error that occurred while allocating memory.
    #[error(transparent)]
    AllocationFailed(#[from] AllocError),
}
