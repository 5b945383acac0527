//! Match evaluation for a finished selection.

use crate::grid::{Cell, Grid};
use crate::hebrew_char::normalize_word;

/// Fewer cells than this never match, whatever the word list holds.
pub const MIN_SELECTION_CELLS: usize = 2;

/// The first word in `words` spelled by `cells`, read forward or backward.
///
/// Letters are compared after normalization, so a final letter in the grid
/// matches its base letter in the word and vice versa. Returns `None` for
/// selections shorter than [`MIN_SELECTION_CELLS`] or touching cells outside
/// the grid.
#[must_use]
pub fn match_word<'w, S: AsRef<str>>(grid: &Grid, cells: &[Cell], words: &'w [S]) -> Option<&'w str> {
    if cells.len() < MIN_SELECTION_CELLS {
        return None;
    }
    let forward = normalize_word(&grid.read(cells)?);
    let backward: String = forward.chars().rev().collect();

    words
        .iter()
        .map(|w| w.as_ref())
        .find(|word| {
            let candidate = normalize_word(word);
            candidate == forward || candidate == backward
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid() -> Grid {
        Grid::from_rows(vec![
            vec!['ש', 'ל', 'ו', 'ם'],
            vec!['א', 'ב', 'ג', 'ד'],
            vec!['מ', 'י', 'מ', 'ה'],
            vec!['ס', 'פ', 'ר', 'ך'],
        ])
        .unwrap()
    }

    fn row(r: usize, cols: std::ops::Range<usize>) -> Vec<Cell> {
        cols.map(|c| Cell::new(r, c)).collect()
    }

    #[test]
    fn test_forward_match() {
        let words = ["ספר", "שלום"];
        assert_eq!(match_word(&grid(), &row(0, 0..4), &words), Some("שלום"));
        assert_eq!(match_word(&grid(), &row(3, 0..3), &words), Some("ספר"));
    }

    #[test]
    fn test_backward_match() {
        let words = ["שלום"];
        let mut cells = row(0, 0..4);
        cells.reverse();
        assert_eq!(match_word(&grid(), &cells, &words), Some("שלום"));
    }

    #[test]
    fn test_single_cell_never_matches() {
        let words = ["ש", "א"];
        assert_eq!(match_word(&grid(), &[Cell::new(0, 0)], &words), None);
        assert_eq!(match_word(&grid(), &[], &words), None);
    }

    #[test]
    fn test_base_letter_in_grid_matches_final_in_word() {
        // row 2 reads "מימה"; the word ends with final mem
        let words = ["מים"];
        assert_eq!(match_word(&grid(), &row(2, 0..3), &words), Some("מים"));
    }

    #[test]
    fn test_final_letter_in_grid_matches_base_in_word() {
        // (0, 3) holds final mem
        let words = ["מד"];
        let cells = vec![Cell::new(0, 3), Cell::new(1, 3)];
        assert_eq!(match_word(&grid(), &cells, &words), Some("מד"));
    }

    #[test]
    fn test_first_listed_word_wins() {
        // row 1 reads אבג forward and גבא backward
        assert_eq!(match_word(&grid(), &row(1, 0..3), &["גבא", "אבג"]), Some("גבא"));
        assert_eq!(match_word(&grid(), &row(1, 0..3), &["אבג", "גבא"]), Some("אבג"));
    }

    #[test]
    fn test_no_match() {
        let words = ["ספר"];
        assert_eq!(match_word(&grid(), &row(1, 0..3), &words), None);
        assert_eq!(match_word(&grid(), &row(3, 0..2), &words), None);
    }

    #[test]
    fn test_out_of_grid_cells() {
        let words = ["ספר"];
        let cells = vec![Cell::new(3, 2), Cell::new(3, 3), Cell::new(3, 4)];
        assert_eq!(match_word(&grid(), &cells, &words), None);
    }
}
