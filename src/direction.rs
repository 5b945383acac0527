//! Direction categories and the unit step vectors that realize them.

use std::fmt;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::ContentError;

/// A permitted line orientation. A category, not a vector: each one resolves to
/// both traversal senses (e.g. right-to-left and left-to-right).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Horizontal,
    Vertical,
    Diagonal,
}

impl Direction {
    pub const ALL: [Direction; 3] = [Direction::Horizontal, Direction::Vertical, Direction::Diagonal];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Horizontal => "horizontal",
            Direction::Vertical => "vertical",
            Direction::Diagonal => "diagonal",
        }
    }
}

impl Display for Direction {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = Box<ContentError>;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "horizontal" => Ok(Direction::Horizontal),
            "vertical" => Ok(Direction::Vertical),
            "diagonal" => Ok(Direction::Diagonal),
            other => Err(Box::new(ContentError::UnknownDirection { name: other.to_string() })),
        }
    }
}

/// A unit `(d_row, d_col)` increment. Never `(0, 0)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StepVector {
    pub d_row: i32,
    pub d_col: i32,
}

impl StepVector {
    pub const RIGHT: StepVector = StepVector { d_row: 0, d_col: 1 };
    pub const LEFT: StepVector = StepVector { d_row: 0, d_col: -1 };
    pub const DOWN: StepVector = StepVector { d_row: 1, d_col: 0 };
    pub const UP: StepVector = StepVector { d_row: -1, d_col: 0 };
    pub const DOWN_RIGHT: StepVector = StepVector { d_row: 1, d_col: 1 };
    pub const DOWN_LEFT: StepVector = StepVector { d_row: 1, d_col: -1 };
    pub const UP_RIGHT: StepVector = StepVector { d_row: -1, d_col: 1 };
    pub const UP_LEFT: StepVector = StepVector { d_row: -1, d_col: -1 };

    /// The vector pointing the other way.
    #[must_use]
    pub fn reversed(self) -> StepVector {
        StepVector { d_row: -self.d_row, d_col: -self.d_col }
    }

    /// The category this vector belongs to.
    #[must_use]
    pub fn direction(self) -> Direction {
        match (self.d_row, self.d_col) {
            (0, _) => Direction::Horizontal,
            (_, 0) => Direction::Vertical,
            _ => Direction::Diagonal,
        }
    }
}

/// Concrete step vectors for one direction category.
#[must_use]
pub fn vectors_for(direction: Direction) -> &'static [StepVector] {
    match direction {
        Direction::Horizontal => &[StepVector::RIGHT, StepVector::LEFT],
        Direction::Vertical => &[StepVector::DOWN, StepVector::UP],
        Direction::Diagonal => &[
            StepVector::DOWN_RIGHT,
            StepVector::DOWN_LEFT,
            StepVector::UP_RIGHT,
            StepVector::UP_LEFT,
        ],
    }
}

/// Concatenation of [`vectors_for`] over a direction list.
///
/// A category listed twice contributes its vectors only once, so the result never
/// holds duplicates.
#[must_use]
pub fn vectors_for_all(directions: &[Direction]) -> Vec<StepVector> {
    let mut seen: Vec<Direction> = Vec::with_capacity(directions.len());
    let mut vectors = Vec::new();
    for &direction in directions {
        if seen.contains(&direction) {
            continue;
        }
        seen.push(direction);
        vectors.extend_from_slice(vectors_for(direction));
    }
    vectors
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_horizontal_and_vertical_have_two_vectors() {
        assert_eq!(vectors_for(Direction::Horizontal), &[StepVector::RIGHT, StepVector::LEFT]);
        assert_eq!(vectors_for(Direction::Vertical), &[StepVector::DOWN, StepVector::UP]);
    }

    #[test]
    fn test_diagonal_has_four_unit_vectors() {
        let diagonals = vectors_for(Direction::Diagonal);
        assert_eq!(diagonals.len(), 4);
        for v in diagonals {
            assert_eq!(v.d_row.abs(), 1);
            assert_eq!(v.d_col.abs(), 1);
        }
    }

    #[test]
    fn test_no_zero_vector() {
        for v in vectors_for_all(&Direction::ALL) {
            assert_ne!((v.d_row, v.d_col), (0, 0));
        }
    }

    #[test]
    fn test_vectors_for_all_is_concatenation_without_duplicates() {
        let all = vectors_for_all(&Direction::ALL);
        assert_eq!(all.len(), 8);
        let unique: HashSet<_> = all.iter().collect();
        assert_eq!(unique.len(), 8);

        let repeated = vectors_for_all(&[Direction::Vertical, Direction::Vertical]);
        assert_eq!(repeated, vec![StepVector::DOWN, StepVector::UP]);
    }

    #[test]
    fn test_every_vector_has_its_reverse() {
        for direction in Direction::ALL {
            let vectors = vectors_for(direction);
            for v in vectors {
                assert!(vectors.contains(&v.reversed()), "{v:?} missing its reverse");
                assert_eq!(v.direction(), direction);
            }
        }
    }

    #[test]
    fn test_direction_from_str() {
        assert_eq!("horizontal".parse::<Direction>().unwrap(), Direction::Horizontal);
        assert_eq!(" Vertical ".parse::<Direction>().unwrap(), Direction::Vertical);
        assert_eq!("DIAGONAL".parse::<Direction>().unwrap(), Direction::Diagonal);
        let err = "sideways".parse::<Direction>().unwrap_err();
        assert_eq!(err.code(), "C006");
    }

    #[test]
    fn test_direction_serde_names() {
        let json = serde_json::to_string(&Direction::Diagonal).unwrap();
        assert_eq!(json, "\"diagonal\"");
        let parsed: Vec<Direction> = serde_json::from_str(r#"["horizontal","vertical"]"#).unwrap();
        assert_eq!(parsed, vec![Direction::Horizontal, Direction::Vertical]);
    }
}
