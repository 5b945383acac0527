//! Grid generation: place every word along a straight line, then fill the rest.
//!
//! # Algorithm
//!
//! Words are placed one at a time, in input order, so earlier words get first
//! choice of cells. For each word:
//!
//! 1. Up to [`MAX_RANDOM_ATTEMPTS`] randomized trials: pick a uniformly random
//!    start cell, shuffle the candidate vectors, and place along the first vector
//!    that fits.
//! 2. Otherwise scan every cell in row-major order and every vector in resolver
//!    order, placing at the first combination that fits.
//! 3. Otherwise the word is left out and reported in [`GenerationResult::unplaced`].
//!
//! The randomized phase gives visual variety across regenerations; the scan makes
//! placement succeed whenever the word still fits somewhere. Placement is greedy
//! per word, so an unlucky ordering can strand a later word even when a global
//! arrangement exists.
//!
//! Every cell left empty is then filled with a letter drawn uniformly from
//! [`FILL_ALPHABET`].
//!
//! # Examples
//!
//! ```
//! use milim::direction::Direction;
//! use milim::generator::generate_grid;
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let mut rng = StdRng::seed_from_u64(1);
//! let result = generate_grid(&["אבג"], 8, &[Direction::Horizontal], &mut rng)?;
//! assert!(result.unplaced.is_empty());
//! assert_eq!(result.word_positions[0].cells.len(), 3);
//! # Ok::<(), Box<milim::errors::ContentError>>(())
//! ```

use instant::Instant;
use log::{debug, warn};
use serde::Serialize;

use crate::content::PuzzleContent;
use crate::direction::{vectors_for_all, Direction, StepVector};
use crate::errors::ContentError;
use crate::grid::{Cell, DraftGrid, Grid, WordPosition};
use crate::hebrew_char::FILL_ALPHABET;
use crate::placement::{can_place, place};
use crate::random::{shuffle, RandomSource};

/// Randomized trials per word before falling back to the exhaustive scan.
pub const MAX_RANDOM_ATTEMPTS: usize = 100;

/// Output of one generation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationResult {
    /// Fully populated `size` x `size` grid.
    pub grid: Grid,
    /// One entry per placed word, in input order.
    pub word_positions: Vec<WordPosition>,
    /// Words for which no placement was found. Empty on full success.
    pub unplaced: Vec<String>,
}

impl GenerationResult {
    /// True when every word was placed.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.unplaced.is_empty()
    }

    #[must_use]
    pub fn position_of(&self, word: &str) -> Option<&WordPosition> {
        self.word_positions.iter().find(|p| p.word == word)
    }
}

/// Generate a grid for already-validated puzzle content.
pub fn generate<R: RandomSource + ?Sized>(content: &PuzzleContent, rng: &mut R) -> GenerationResult {
    let vectors = vectors_for_all(content.directions());
    build(content.words(), content.grid_size(), &vectors, rng)
}

/// Generate a grid from raw parts.
///
/// Words are trimmed and blank words skipped. A word longer than `grid_size` is
/// not an error here; it simply ends up in `unplaced`.
///
/// # Errors
///
/// Returns `ContentError` if `grid_size` is zero, `directions` is empty, or no
/// non-blank word is given.
pub fn generate_grid<S, R>(
    words: &[S],
    grid_size: usize,
    directions: &[Direction],
    rng: &mut R,
) -> Result<GenerationResult, Box<ContentError>>
where
    S: AsRef<str>,
    R: RandomSource + ?Sized,
{
    if grid_size == 0 {
        return Err(Box::new(ContentError::ZeroGridSize));
    }
    if directions.is_empty() {
        return Err(Box::new(ContentError::NoDirections));
    }
    let words: Vec<String> = words
        .iter()
        .map(|w| w.as_ref().trim())
        .filter(|w| !w.is_empty())
        .map(str::to_string)
        .collect();
    if words.is_empty() {
        return Err(Box::new(ContentError::EmptyWordList));
    }

    let vectors = vectors_for_all(directions);
    Ok(build(&words, grid_size, &vectors, rng))
}

fn build<R: RandomSource + ?Sized>(
    words: &[String],
    grid_size: usize,
    vectors: &[StepVector],
    rng: &mut R,
) -> GenerationResult {
    let t_start = Instant::now();
    let mut draft = DraftGrid::new(grid_size);
    let mut word_positions = Vec::with_capacity(words.len());
    let mut unplaced = Vec::new();

    for word in words {
        match place_word(&mut draft, word, vectors, rng) {
            Some(position) => word_positions.push(position),
            None => {
                warn!("could not place \"{word}\" on a {grid_size}x{grid_size} grid");
                unplaced.push(word.clone());
            }
        }
    }

    let filler_count = draft.empty_count();
    let grid = draft.fill_with(|| FILL_ALPHABET[rng.next_index(FILL_ALPHABET.len())]);

    debug!(
        "generated {grid_size}x{grid_size} grid in {:.3}ms: {} placed, {} unplaced, {filler_count} filler cells",
        t_start.elapsed().as_secs_f64() * 1000.0,
        word_positions.len(),
        unplaced.len(),
    );

    GenerationResult { grid, word_positions, unplaced }
}

/// Try the randomized trials, then the exhaustive scan.
fn place_word<R: RandomSource + ?Sized>(
    draft: &mut DraftGrid,
    word: &str,
    vectors: &[StepVector],
    rng: &mut R,
) -> Option<WordPosition> {
    let size = draft.size();
    if word.chars().count() > size || vectors.is_empty() {
        return None;
    }

    let mut order = vectors.to_vec();
    for attempt in 0..MAX_RANDOM_ATTEMPTS {
        let start = Cell::new(rng.next_index(size), rng.next_index(size));
        shuffle(&mut order, rng);
        if let Some(&vector) = order.iter().find(|&&v| can_place(draft, word, start, v)) {
            debug!("placed \"{word}\" at {start} along {vector:?} on attempt {}", attempt + 1);
            return Some(place(draft, word, start, vector));
        }
    }

    for row in 0..size {
        for col in 0..size {
            let start = Cell::new(row, col);
            if let Some(&vector) = vectors.iter().find(|&&v| can_place(draft, word, start, v)) {
                debug!("placed \"{word}\" at {start} along {vector:?} by exhaustive scan");
                return Some(place(draft, word, start, vector));
            }
        }
    }

    None
}
