use crate::direction::{Direction, TransformMode};
use crate::grid::GridView;

/// Identifies one transform pass within an encrypt or decrypt call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransformStep {
    /// Zero-based pass number. Every key digit contributes two passes.
    pub index: usize,
    /// Frame the pass ran in.
    pub direction: Direction,
    /// Whether the pass encrypted or decrypted.
    pub mode: TransformMode,
}

/// Receives the grid after every transform pass.
///
/// Used for debugging and visualisation, e.g. dumping every step as a bitmap with
/// [`write_portable_bitmap`](crate::pbm::write_portable_bitmap). Observers cannot
/// change the result.
///
/// Any `FnMut(TransformStep, GridView<'_>)` closure is an observer.
pub trait TransformObserver {
    /// Called once the pass described by `step` has finished.
    fn on_transform(&mut self, step: TransformStep, grid: GridView<'_>);
}

impl<F> TransformObserver for F
where
    F: FnMut(TransformStep, GridView<'_>),
{
    fn on_transform(&mut self, step: TransformStep, grid: GridView<'_>) {
        self(step, grid)
    }
}
