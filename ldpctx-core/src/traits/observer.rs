//! Diagnostics hook for the systematic-form reducer
//!
//! The reducer never prints. Callers that want to see what elimination did
//! pass an observer; everyone else uses [`NoopObserver`].

/// Receives progress events from [`systematic_form_with`](crate::systematic_form_with)
pub trait ReductionObserver {
    /// Trailing block was already the identity; no row operation performed
    fn already_systematic(&mut self, _rows: usize, _cols: usize) {}

    /// Row `pivot` was swapped with row `with` to obtain a pivot
    fn pivot_swapped(&mut self, _pivot: usize, _with: usize) {}

    /// Pivot `pivot` cleared its column from `eliminated` other rows
    fn column_cleared(&mut self, _pivot: usize, _column: usize, _eliminated: usize) {}

    /// Elimination finished with the identity in place
    fn reduced(&mut self, _swaps: usize, _row_ops: usize) {}
}

/// Observer that discards every event
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl ReductionObserver for NoopObserver {}

impl<O: ReductionObserver + ?Sized> ReductionObserver for &mut O {
    fn already_systematic(&mut self, rows: usize, cols: usize) {
        (**self).already_systematic(rows, cols)
    }

    fn pivot_swapped(&mut self, pivot: usize, with: usize) {
        (**self).pivot_swapped(pivot, with)
    }

    fn column_cleared(&mut self, pivot: usize, column: usize, eliminated: usize) {
        (**self).column_cleared(pivot, column, eliminated)
    }

    fn reduced(&mut self, swaps: usize, row_ops: usize) {
        (**self).reduced(swaps, row_ops)
    }
}
