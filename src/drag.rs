//! Pointer capture for one drag gesture.
//!
//! A [`DragCapture`] exists only between drag start and drag end: it is created
//! on start, fed every move, and consumed on release. Dropping it without calling
//! [`DragCapture::finish`] cancels the gesture with no effect.

use crate::grid::Cell;
use crate::matcher::MIN_SELECTION_CELLS;
use crate::snapping::{cells_between, is_valid_line, snap};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragCapture {
    start: Cell,
    current: Cell,
    grid_size: usize,
}

impl DragCapture {
    /// Begin a drag at `start`. Returns `None` if `start` is outside the grid.
    #[must_use]
    pub fn begin(start: Cell, grid_size: usize) -> Option<Self> {
        (start.row < grid_size && start.col < grid_size).then_some(Self { start, current: start, grid_size })
    }

    /// Record the cell under the pointer; the stored end is the snapped cell.
    pub fn move_to(&mut self, pointer: Cell) {
        self.current = snap(self.start, pointer, self.grid_size);
    }

    #[must_use]
    pub fn start(&self) -> Cell {
        self.start
    }

    #[must_use]
    pub fn current(&self) -> Cell {
        self.current
    }

    /// Cells currently highlighted, start to current. Empty on a degenerate line.
    #[must_use]
    pub fn preview(&self) -> Vec<Cell> {
        cells_between(self.start, self.current)
    }

    /// End the gesture. Yields the selected line when it is straight and at
    /// least [`MIN_SELECTION_CELLS`] long; otherwise the release is a no-op.
    #[must_use]
    pub fn finish(self) -> Option<Vec<Cell>> {
        if !is_valid_line(self.start, self.current) {
            log::debug!("ignoring drag {} -> {}: not a straight line", self.start, self.current);
            return None;
        }
        let cells = cells_between(self.start, self.current);
        (cells.len() >= MIN_SELECTION_CELLS).then_some(cells)
    }
}
