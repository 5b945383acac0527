//! Placement validation: can a word be laid along a vector from a start cell?

use crate::direction::StepVector;
use crate::grid::{Cell, DraftGrid, WordPosition};
use crate::hebrew_char::letters_equivalent;

/// Cells a word of `len` letters would occupy, or `None` if any falls off the grid.
fn walk(start: Cell, vector: StepVector, len: usize, size: usize) -> Option<Vec<Cell>> {
    (0..len).map(|i| start.offset(vector, i, size)).collect()
}

/// True if `word` fits from `start` along `vector` without leaving the grid and
/// without clashing with letters already placed.
///
/// An occupied cell is compatible when its letter and the new letter normalize
/// to the same form, so a final letter may share a cell with its base letter.
#[must_use]
pub fn can_place(grid: &DraftGrid, word: &str, start: Cell, vector: StepVector) -> bool {
    let letters: Vec<char> = word.chars().collect();
    let Some(cells) = walk(start, vector, letters.len(), grid.size()) else {
        return false;
    };
    cells
        .iter()
        .zip(&letters)
        .all(|(&cell, &letter)| grid.get(cell).map_or(true, |existing| letters_equivalent(existing, letter)))
}

/// Writes `word` (literal letters, not normalized) from `start` along `vector`.
///
/// Callers must have checked [`can_place`] first; cells falling off the grid are
/// skipped rather than reported.
pub fn place(grid: &mut DraftGrid, word: &str, start: Cell, vector: StepVector) -> WordPosition {
    let size = grid.size();
    let mut cells = Vec::with_capacity(word.chars().count());
    for (i, letter) in word.chars().enumerate() {
        if let Some(cell) = start.offset(vector, i, size) {
            grid.set(cell, letter);
            cells.push(cell);
        }
    }
    WordPosition {
        word: word.to_string(),
        start,
        end: cells.last().copied().unwrap_or(start),
        cells,
    }
}
