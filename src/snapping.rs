//! Selection snapping: turn an imprecise drag into a straight grid line.
//!
//! A drag from `start` to wherever the pointer is now is classified by its
//! dominant axis with a 2:1 rule:
//!
//! - `|d_col| > 2·|d_row|` snaps to horizontal
//! - `|d_row| > 2·|d_col|` snaps to vertical
//! - anything else snaps to the diagonal, shortened to the smaller of the two deltas
//!
//! ```
//! use milim::grid::Cell;
//! use milim::snapping::snap;
//!
//! assert_eq!(snap(Cell::new(2, 2), Cell::new(4, 6), 12), Cell::new(4, 4));
//! assert_eq!(snap(Cell::new(2, 2), Cell::new(3, 7), 12), Cell::new(2, 7));
//! ```

use crate::grid::Cell;

#[inline]
fn delta(a: Cell, b: Cell) -> (i64, i64) {
    (b.row as i64 - a.row as i64, b.col as i64 - a.col as i64)
}

fn clamp_to_grid(v: i64, size: usize) -> usize {
    let max = size.saturating_sub(1) as i64;
    v.clamp(0, max) as usize
}

/// Snapped end cell for a drag from `start` to `end`, clamped into the grid.
#[must_use]
pub fn snap(start: Cell, end: Cell, grid_size: usize) -> Cell {
    let (d_row, d_col) = delta(start, end);
    if d_row == 0 && d_col == 0 {
        return start;
    }

    let (row, col) = if d_col.abs() > 2 * d_row.abs() {
        (start.row as i64, start.col as i64 + d_col)
    } else if d_row.abs() > 2 * d_col.abs() {
        (start.row as i64 + d_row, start.col as i64)
    } else {
        let dist = d_row.abs().min(d_col.abs());
        (start.row as i64 + d_row.signum() * dist, start.col as i64 + d_col.signum() * dist)
    };

    Cell::new(clamp_to_grid(row, grid_size), clamp_to_grid(col, grid_size))
}

/// True if `a` and `b` lie on one horizontal, vertical, or 45° diagonal line.
#[must_use]
pub fn is_valid_line(a: Cell, b: Cell) -> bool {
    let (d_row, d_col) = delta(a, b);
    d_row == 0 || d_col == 0 || d_row.abs() == d_col.abs()
}

/// Inclusive, ordered cells from `a` to `b`. Empty if they are not on a valid line.
#[must_use]
pub fn cells_between(a: Cell, b: Cell) -> Vec<Cell> {
    if !is_valid_line(a, b) {
        return Vec::new();
    }
    let (d_row, d_col) = delta(a, b);
    let (step_row, step_col) = (d_row.signum(), d_col.signum());
    let steps = d_row.abs().max(d_col.abs());
    (0..=steps)
        .map(|i| Cell::new((a.row as i64 + step_row * i) as usize, (a.col as i64 + step_col * i) as usize))
        .collect()
}
