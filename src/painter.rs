use crate::core::{CellPos, Rgb8};
use crate::error::GridgifResult;

/// A painter decides the color of each cell of a frame.
///
/// Painters are queried exactly once per cell per fill pass and may mutate
/// internal state on every query. A single instance is shared across a whole
/// sequence fill, which is how cross-frame animation state works: the painter
/// observes every query in strict canvas order, frame after frame.
///
/// An error returned here aborts the in-progress fill and propagates to the
/// caller, leaving the canvas partially painted.
pub trait Painter {
    fn color_at(&mut self, cell: CellPos) -> GridgifResult<Rgb8>;
}

/// Closures work as painters.
impl<F> Painter for F
where
    F: FnMut(CellPos) -> GridgifResult<Rgb8>,
{
    fn color_at(&mut self, cell: CellPos) -> GridgifResult<Rgb8> {
        self(cell)
    }
}
