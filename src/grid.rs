//! Grid cells and letter grids.
//!
//! A [`DraftGrid`] is the partially filled grid the generator works on (`None`
//! for unset cells). Once every cell has a letter it becomes a [`Grid`].

use std::fmt;
use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::direction::StepVector;

/// A 0-based `(row, col)` position. Identity by value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// The cell `steps` unit moves away along `vector`, if it stays inside
    /// a `size` x `size` grid.
    #[must_use]
    pub fn offset(self, vector: StepVector, steps: usize, size: usize) -> Option<Cell> {
        let steps = i64::try_from(steps).ok()?;
        let row = self.row as i64 + i64::from(vector.d_row) * steps;
        let col = self.col as i64 + i64::from(vector.d_col) * steps;
        let size = size as i64;
        if (0..size).contains(&row) && (0..size).contains(&col) {
            Some(Cell::new(row as usize, col as usize))
        } else {
            None
        }
    }
}

impl Display for Cell {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Where one word ended up: ordered from the placement's start to its end.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordPosition {
    pub word: String,
    pub start: Cell,
    pub end: Cell,
    pub cells: Vec<Cell>,
}

impl WordPosition {
    /// The step vector between consecutive cells, or `None` for a one-letter word.
    #[must_use]
    pub fn vector(&self) -> Option<StepVector> {
        let (a, b) = (self.cells.first()?, self.cells.get(1)?);
        Some(StepVector {
            d_row: b.row as i32 - a.row as i32,
            d_col: b.col as i32 - a.col as i32,
        })
    }
}

/// Square grid under construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DraftGrid {
    size: usize,
    cells: Vec<Option<char>>,
}

impl DraftGrid {
    #[must_use]
    pub fn new(size: usize) -> Self {
        Self { size, cells: vec![None; size * size] }
    }

    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    fn index(&self, cell: Cell) -> Option<usize> {
        (cell.row < self.size && cell.col < self.size).then(|| cell.row * self.size + cell.col)
    }

    /// Letter at `cell`; `None` if unset or out of bounds.
    #[must_use]
    pub fn get(&self, cell: Cell) -> Option<char> {
        self.index(cell).and_then(|i| self.cells[i])
    }

    /// Writes `letter` at `cell`. Out-of-bounds writes are ignored.
    pub fn set(&mut self, cell: Cell, letter: char) {
        if let Some(i) = self.index(cell) {
            self.cells[i] = Some(letter);
        }
    }

    /// Number of cells that still have no letter.
    #[must_use]
    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_none()).count()
    }

    /// Fills every unset cell with `fill()` and freezes the grid.
    pub fn fill_with(self, mut fill: impl FnMut() -> char) -> Grid {
        let size = self.size;
        let letters: Vec<char> = self.cells.into_iter().map(|c| c.unwrap_or_else(&mut fill)).collect();
        let rows = if size == 0 {
            Vec::new()
        } else {
            letters.chunks(size).map(<[char]>::to_vec).collect()
        };
        Grid { size, rows }
    }
}

/// Fully populated square letter grid.
///
/// Serializes as its rows; deserializing goes through [`Grid::from_rows`] so a
/// ragged or non-square payload is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<char>>", into = "Vec<Vec<char>>")]
pub struct Grid {
    size: usize,
    rows: Vec<Vec<char>>,
}

impl Grid {
    /// Builds a grid from rows. Returns `None` unless the rows form a square.
    #[must_use]
    pub fn from_rows(rows: Vec<Vec<char>>) -> Option<Self> {
        let size = rows.len();
        rows.iter().all(|r| r.len() == size).then_some(Self { size, rows })
    }

    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    #[must_use]
    pub fn rows(&self) -> &[Vec<char>] {
        &self.rows
    }

    #[must_use]
    pub fn get(&self, cell: Cell) -> Option<char> {
        self.rows.get(cell.row).and_then(|r| r.get(cell.col)).copied()
    }

    #[must_use]
    pub fn contains(&self, cell: Cell) -> bool {
        cell.row < self.size && cell.col < self.size
    }

    /// Letters along `cells`, in order. `None` if any cell is outside the grid.
    #[must_use]
    pub fn read(&self, cells: &[Cell]) -> Option<String> {
        cells.iter().map(|&c| self.get(c)).collect()
    }

    /// Rows as strings, the shape the rendering side consumes.
    #[must_use]
    pub fn to_string_rows(&self) -> Vec<Vec<String>> {
        self.rows.iter().map(|r| r.iter().map(char::to_string).collect()).collect()
    }
}

impl TryFrom<Vec<Vec<char>>> for Grid {
    type Error = String;

    fn try_from(rows: Vec<Vec<char>>) -> Result<Self, Self::Error> {
        let height = rows.len();
        Grid::from_rows(rows).ok_or_else(|| format!("grid rows must form a square of side {height}"))
    }
}

impl From<Grid> for Vec<Vec<char>> {
    fn from(grid: Grid) -> Self {
        grid.rows
    }
}

impl Display for Grid {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            let line: Vec<String> = row.iter().map(char::to_string).collect();
            write!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_within_bounds() {
        let c = Cell::new(2, 2);
        assert_eq!(c.offset(StepVector::RIGHT, 3, 8), Some(Cell::new(2, 5)));
        assert_eq!(c.offset(StepVector::UP_LEFT, 2, 8), Some(Cell::new(0, 0)));
        assert_eq!(c.offset(StepVector::DOWN, 0, 8), Some(c));
    }

    #[test]
    fn test_offset_out_of_bounds() {
        let c = Cell::new(0, 7);
        assert_eq!(c.offset(StepVector::UP, 1, 8), None);
        assert_eq!(c.offset(StepVector::RIGHT, 1, 8), None);
        assert_eq!(c.offset(StepVector::LEFT, 8, 8), None);
    }

    #[test]
    fn test_draft_grid_set_and_get() {
        let mut g = DraftGrid::new(3);
        assert_eq!(g.empty_count(), 9);
        g.set(Cell::new(1, 2), 'א');
        assert_eq!(g.get(Cell::new(1, 2)), Some('א'));
        assert_eq!(g.get(Cell::new(0, 0)), None);
        // ignored
        g.set(Cell::new(3, 0), 'ב');
        assert_eq!(g.empty_count(), 8);
    }

    #[test]
    fn test_fill_with_keeps_existing_letters() {
        let mut g = DraftGrid::new(2);
        g.set(Cell::new(0, 1), 'ם');
        let grid = g.fill_with(|| 'ש');
        assert_eq!(grid.rows(), &[vec!['ש', 'ם'], vec!['ש', 'ש']]);
        assert_eq!(grid.to_string(), "ש ם\nש ש");
    }

    #[test]
    fn test_grid_read() {
        let grid = Grid::from_rows(vec![vec!['א', 'ב'], vec!['ג', 'ד']]).unwrap();
        assert_eq!(grid.read(&[Cell::new(0, 0), Cell::new(1, 1)]).as_deref(), Some("אד"));
        assert_eq!(grid.read(&[Cell::new(0, 0), Cell::new(2, 0)]), None);
        assert_eq!(grid.to_string_rows()[1], vec!["ג".to_string(), "ד".to_string()]);
    }

    #[test]
    fn test_from_rows_rejects_non_square() {
        assert!(Grid::from_rows(vec![vec!['א', 'ב'], vec!['ג']]).is_none());
        assert!(Grid::from_rows(vec![vec!['א', 'ב']]).is_none());
    }

    #[test]
    fn test_grid_json_goes_through_from_rows() {
        let grid: Grid = serde_json::from_str(r#"[["א","ב"],["ג","ד"]]"#).unwrap();
        assert_eq!(grid.size(), 2);
        assert!(grid.contains(Cell::new(1, 1)));
        assert_eq!(grid.get(Cell::new(1, 1)), Some('ד'));
        assert_eq!(serde_json::to_string(&grid).unwrap(), r#"[["א","ב"],["ג","ד"]]"#);

        assert!(serde_json::from_str::<Grid>(r#"[["א","ב"],["ג"]]"#).is_err());
        assert!(serde_json::from_str::<Grid>(r#"{"size": 3, "rows": [["א"]]}"#).is_err());
    }

    #[test]
    fn test_word_position_vector() {
        let pos = WordPosition {
            word: "אב".to_string(),
            start: Cell::new(3, 3),
            end: Cell::new(2, 4),
            cells: vec![Cell::new(3, 3), Cell::new(2, 4)],
        };
        assert_eq!(pos.vector(), Some(StepVector::UP_RIGHT));
    }
}
