//! Puzzle sessions: found words, score and sequencing across puzzles.
//!
//! # State transitions
//!
//! Per-puzzle progress lives in [`PuzzleState`], which is never mutated in place:
//! [`PuzzleState::apply_match`] returns the next state together with the events
//! the match produced. A session swaps in the new state in a single assignment,
//! so reporting the same release twice cannot drop or double an update.
//!
//! - Finding a word adds it and its cells, and adds [`POINTS_PER_WORD`].
//! - Finding a word that is already found changes nothing.
//! - Finding the last word awards [`COMPLETION_BONUS`] once; the `completed`
//!   flag (not the found-word count) guards the bonus.
//!
//! # Sequencing
//!
//! Content is shuffled once when the session starts. Moving to the next puzzle
//! or restarting the current one clears the puzzle-local state but carries the
//! score forward. Only [`PuzzleSession::restart_session`] zeroes the score.
//!
//! # Matching
//!
//! A selection lying exactly on a placed word (in either reading order) credits
//! that word. Otherwise the first listed word spelled by the selection wins, so
//! a word and its reverse both stay findable.
//!
//! # Error Handling
//!
//! The session uses [`SessionError`] with two variants:
//!
//! - S001: `NoPuzzles` (Session created without any puzzle content)
//! - S002: `InvalidContent` (Content failed validation (wraps [`ContentError`]))

use std::collections::HashSet;

use log::{debug, info, warn};
use serde::Serialize;

use crate::content::PuzzleContent;
use crate::drag::DragCapture;
use crate::errors::ContentError;
use crate::generator::{generate, GenerationResult};
use crate::grid::{Cell, Grid, WordPosition};
use crate::matcher::{match_word, MIN_SELECTION_CELLS};
use crate::random::{shuffle, RandomSource};
use crate::snapping::cells_between;

/// Points for each newly found word.
pub const POINTS_PER_WORD: u32 = 10;
/// One-time bonus for finding every word of a puzzle.
pub const COMPLETION_BONUS: u32 = 50;
/// Generation runs per puzzle while some words remain unplaced.
pub const MAX_GENERATION_RETRIES: usize = 5;

/// Something the host UI should react to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum SessionEvent {
    WordFound { word: String, cells: Vec<Cell> },
    PuzzleCompleted { bonus: u32, score: u32 },
}

/// Progress on the active puzzle.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PuzzleState {
    found_words: HashSet<String>,
    found_cells: HashSet<Cell>,
    score: u32,
    completed: bool,
    total_words: usize,
}

/// Result of applying a match: the next state and what happened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub state: PuzzleState,
    pub events: Vec<SessionEvent>,
}

impl PuzzleState {
    /// Fresh state for a puzzle of `total_words` words, starting from `score`.
    #[must_use]
    pub fn new(total_words: usize, score: u32) -> Self {
        Self { total_words, score, ..Self::default() }
    }

    #[must_use]
    pub fn apply_match(&self, word: &str, cells: &[Cell]) -> Transition {
        if self.found_words.contains(word) {
            debug!("\"{word}\" already found");
            return Transition { state: self.clone(), events: Vec::new() };
        }

        let mut next = self.clone();
        next.found_words.insert(word.to_string());
        next.found_cells.extend(cells.iter().copied());
        next.score += POINTS_PER_WORD;
        let mut events = vec![SessionEvent::WordFound { word: word.to_string(), cells: cells.to_vec() }];

        let completion = next.check_completion();
        events.extend(completion.events);
        Transition { state: completion.state, events }
    }

    /// Award the completion bonus if every word is found and it was not awarded yet.
    #[must_use]
    pub fn check_completion(&self) -> Transition {
        let mut next = self.clone();
        let mut events = Vec::new();
        if !self.completed && self.total_words > 0 && self.found_words.len() >= self.total_words {
            next.completed = true;
            next.score += COMPLETION_BONUS;
            events.push(SessionEvent::PuzzleCompleted { bonus: COMPLETION_BONUS, score: next.score });
        }
        Transition { state: next, events }
    }

    #[must_use]
    pub fn found_words(&self) -> &HashSet<String> {
        &self.found_words
    }

    #[must_use]
    pub fn found_cells(&self) -> &HashSet<Cell> {
        &self.found_cells
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.completed
    }

    /// `(found, total)`
    #[must_use]
    pub fn progress(&self) -> (usize, usize) {
        (self.found_words.len(), self.total_words)
    }
}

/// Unified error type for starting a session.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("no puzzles to play")]
    NoPuzzles,

    #[error("invalid puzzle content: {0}")]
    InvalidContent(#[from] Box<ContentError>),
}

impl SessionError {
    /// Returns the error code for this error variant
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            SessionError::NoPuzzles => "S001",
            SessionError::InvalidContent(_) => "S002",
        }
    }

    /// Returns a short description of this error type (for documentation)
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            SessionError::NoPuzzles => "Session created without any puzzle content",
            SessionError::InvalidContent(_) => "Puzzle content failed validation",
        }
    }

    /// Returns detailed explanation of this error type (for documentation)
    #[must_use]
    pub fn details(&self) -> &'static str {
        match self {
            SessionError::NoPuzzles => "A session plays through a list of puzzles and needs at least one to start.",
            SessionError::InvalidContent(_) => "The puzzle content could not be loaded or validated. This wraps an underlying ContentError (see Content Errors section for specific error codes).",
        }
    }

    /// Returns a helpful suggestion for this error
    #[must_use]
    pub fn help(&self) -> Option<&'static str> {
        match self {
            SessionError::NoPuzzles => Some("Pass at least one puzzle, e.g. [{\"words\": [\"אבג\"], \"gridSize\": 8, \"directions\": [\"horizontal\"]}]"),
            SessionError::InvalidContent(_) => None, // ContentError has its own help
        }
    }

    /// Formats the error with code and optional help text
    #[must_use]
    pub fn display_detailed(&self) -> String {
        match self {
            SessionError::InvalidContent(ce) => {
                format!("{}\n  caused by: {}", self.code(), ce.display_detailed())
            }
            SessionError::NoPuzzles => {
                crate::errors::format_error_with_code_and_help(&self.to_string(), self.code(), self.help())
            }
        }
    }
}

/// Generate up to [`MAX_GENERATION_RETRIES`] times, keeping the run with the fewest unplaced words.
fn generate_best<R: RandomSource + ?Sized>(content: &PuzzleContent, rng: &mut R) -> GenerationResult {
    let mut best = generate(content, rng);
    for retry in 1..MAX_GENERATION_RETRIES {
        if best.is_complete() {
            break;
        }
        warn!("retrying generation ({retry}/{}): unplaced {:?}", MAX_GENERATION_RETRIES - 1, best.unplaced);
        let candidate = generate(content, rng);
        if candidate.unplaced.len() < best.unplaced.len() {
            best = candidate;
        }
    }
    if !best.is_complete() {
        warn!("puzzle left partially unsolvable: unplaced {:?}", best.unplaced);
    }
    best
}

/// A player's run through a list of puzzles.
pub struct PuzzleSession<R: RandomSource> {
    contents: Vec<PuzzleContent>,
    current_index: usize,
    generation: GenerationResult,
    state: PuzzleState,
    score_at_puzzle_start: u32,
    drag: Option<DragCapture>,
    rng: R,
}

impl<R: RandomSource> PuzzleSession<R> {
    /// Shuffle `contents` and generate the first puzzle.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NoPuzzles` if `contents` is empty.
    pub fn new(mut contents: Vec<PuzzleContent>, mut rng: R) -> Result<Self, SessionError> {
        if contents.is_empty() {
            return Err(SessionError::NoPuzzles);
        }
        shuffle(&mut contents, &mut rng);
        let generation = generate_best(&contents[0], &mut rng);
        let state = PuzzleState::new(contents[0].words().len(), 0);
        info!("session started with {} puzzle(s)", contents.len());
        Ok(Self {
            contents,
            current_index: 0,
            generation,
            state,
            score_at_puzzle_start: 0,
            drag: None,
            rng,
        })
    }

    /// Parse JSON content (see [`PuzzleContent::parse_from_str`]) and start a session.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::InvalidContent` if the content does not parse or
    /// validate, and `SessionError::NoPuzzles` for an empty array.
    pub fn from_json(text: &str, rng: R) -> Result<Self, SessionError> {
        let contents = PuzzleContent::parse_from_str(text)?;
        Self::new(contents, rng)
    }

    fn start_current_puzzle(&mut self) {
        self.drag = None;
        let content = &self.contents[self.current_index];
        self.generation = generate_best(content, &mut self.rng);
        self.state = PuzzleState::new(content.words().len(), self.score_at_puzzle_start);
        info!(
            "puzzle {}/{}: {} words on {}x{}",
            self.current_index + 1,
            self.contents.len(),
            content.words().len(),
            content.grid_size(),
            content.grid_size()
        );
    }

    #[must_use]
    pub fn content(&self) -> &PuzzleContent {
        &self.contents[self.current_index]
    }

    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.generation.grid
    }

    #[must_use]
    pub fn generation(&self) -> &GenerationResult {
        &self.generation
    }

    #[must_use]
    pub fn word_positions(&self) -> &[WordPosition] {
        &self.generation.word_positions
    }

    #[must_use]
    pub fn state(&self) -> &PuzzleState {
        &self.state
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    #[must_use]
    pub fn puzzle_count(&self) -> usize {
        self.contents.len()
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.state.score()
    }

    /// `(found, total)` for the active puzzle.
    #[must_use]
    pub fn progress(&self) -> (usize, usize) {
        self.state.progress()
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.state.is_complete()
    }

    /// Words of the active puzzle not found yet, in content order.
    #[must_use]
    pub fn remaining_words(&self) -> Vec<&str> {
        self.content()
            .words()
            .iter()
            .filter(|w| !self.state.found_words().contains(*w))
            .map(String::as_str)
            .collect()
    }

    /// Evaluate a finished line of cells against the active puzzle.
    pub fn submit_selection(&mut self, cells: &[Cell]) -> Vec<SessionEvent> {
        if cells.len() < MIN_SELECTION_CELLS {
            return Vec::new();
        }
        let (Some(&first), Some(&last)) = (cells.first(), cells.last()) else {
            return Vec::new();
        };
        if cells_between(first, last) != cells {
            debug!("ignoring selection that is not a straight run of cells");
            return Vec::new();
        }
        let Some(word) = self
            .placed_word_at(cells)
            .or_else(|| match_word(&self.generation.grid, cells, self.contents[self.current_index].words()))
        else {
            return Vec::new();
        };
        let transition = self.state.apply_match(word, cells);
        self.state = transition.state;
        for event in &transition.events {
            info!("{event:?}");
        }
        transition.events
    }

    /// The placed word whose cells are exactly `cells`, read either way.
    /// Words still to be found come first, for words sharing the same cells.
    fn placed_word_at(&self, cells: &[Cell]) -> Option<&str> {
        let mut on_line = self
            .generation
            .word_positions
            .iter()
            .filter(|pos| pos.cells == cells || pos.cells.iter().rev().eq(cells.iter()))
            .map(|pos| pos.word.as_str());
        let first = on_line.next()?;
        let found = self.state.found_words();
        if !found.contains(first) {
            return Some(first);
        }
        Some(on_line.find(|w| !found.contains(*w)).unwrap_or(first))
    }

    /// Start tracking a drag. Returns false if `cell` is outside the grid.
    pub fn on_drag_start(&mut self, cell: Cell) -> bool {
        self.drag = DragCapture::begin(cell, self.generation.grid.size());
        self.drag.is_some()
    }

    pub fn on_drag_move(&mut self, cell: Cell) {
        if let Some(drag) = self.drag.as_mut() {
            drag.move_to(cell);
        }
    }

    /// Release the drag and evaluate the snapped line. Non-matches emit nothing.
    pub fn on_drag_end(&mut self) -> Vec<SessionEvent> {
        match self.drag.take().and_then(DragCapture::finish) {
            Some(cells) => self.submit_selection(&cells),
            None => Vec::new(),
        }
    }

    /// Abandon the drag in progress without evaluating it.
    pub fn cancel_drag(&mut self) {
        self.drag = None;
    }

    /// Cells highlighted by the drag in progress.
    #[must_use]
    pub fn preview(&self) -> Vec<Cell> {
        self.drag.as_ref().map(DragCapture::preview).unwrap_or_default()
    }

    #[must_use]
    pub fn has_next(&self) -> bool {
        self.current_index + 1 < self.contents.len()
    }

    /// Move to the next puzzle, keeping the score. Returns false on the last puzzle.
    pub fn advance(&mut self) -> bool {
        if !self.has_next() {
            return false;
        }
        self.score_at_puzzle_start = self.state.score();
        self.current_index += 1;
        self.start_current_puzzle();
        true
    }

    /// Regenerate the active puzzle and clear its found words. The score is kept.
    pub fn restart_puzzle(&mut self) {
        self.score_at_puzzle_start = self.state.score();
        self.start_current_puzzle();
    }

    /// Reshuffle all content and start over from zero.
    pub fn restart_session(&mut self) {
        shuffle(&mut self.contents, &mut self.rng);
        self.current_index = 0;
        self.score_at_puzzle_start = 0;
        self.start_current_puzzle();
        info!("session restarted");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::direction::Direction;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn cells(n: usize) -> Vec<Cell> {
        (0..n).map(|c| Cell::new(0, c)).collect()
    }

    #[test]
    fn test_apply_match_adds_word_cells_and_points() {
        let state = PuzzleState::new(2, 0);
        let t = state.apply_match("אבג", &cells(3));
        assert_eq!(t.state.score(), POINTS_PER_WORD);
        assert!(t.state.found_words().contains("אבג"));
        assert_eq!(t.state.found_cells().len(), 3);
        assert_eq!(t.events, vec![SessionEvent::WordFound { word: "אבג".to_string(), cells: cells(3) }]);
        assert!(!t.state.is_complete());
        // input state untouched
        assert_eq!(state.score(), 0);
        assert!(state.found_words().is_empty());
    }

    #[test]
    fn test_duplicate_match_is_ignored() {
        let once = PuzzleState::new(2, 0).apply_match("אבג", &cells(3)).state;
        let twice = once.apply_match("אבג", &cells(3));
        assert_eq!(twice.state, once);
        assert!(twice.events.is_empty());
    }

    #[test]
    fn test_completion_bonus_awarded_once() {
        let t = PuzzleState::new(1, 0).apply_match("אבג", &cells(3));
        assert!(t.state.is_complete());
        assert_eq!(t.state.score(), POINTS_PER_WORD + COMPLETION_BONUS);
        assert_eq!(
            t.events.last(),
            Some(&SessionEvent::PuzzleCompleted { bonus: COMPLETION_BONUS, score: POINTS_PER_WORD + COMPLETION_BONUS })
        );

        let again = t.state.check_completion();
        assert!(again.events.is_empty());
        assert_eq!(again.state.score(), POINTS_PER_WORD + COMPLETION_BONUS);

        let repeat = t.state.apply_match("אבג", &cells(3));
        assert_eq!(repeat.state.score(), POINTS_PER_WORD + COMPLETION_BONUS);
    }

    #[test]
    fn test_found_cells_grow_monotonically() {
        let s1 = PuzzleState::new(3, 0).apply_match("אב", &cells(2)).state;
        let s2 = s1.apply_match("גד", &[Cell::new(0, 1), Cell::new(1, 1)]).state;
        assert!(s1.found_cells().is_subset(s2.found_cells()));
        assert_eq!(s2.found_cells().len(), 3);
        assert_eq!(s2.progress(), (2, 3));
    }

    #[test]
    fn test_empty_session_rejected() {
        let err = PuzzleSession::new(Vec::new(), StdRng::seed_from_u64(0)).err().unwrap();
        assert_eq!(err.code(), "S001");
        assert!(err.display_detailed().contains("S001"));
    }

    #[test]
    fn test_invalid_json_wraps_content_error() {
        let err = PuzzleSession::from_json("{", StdRng::seed_from_u64(0)).err().unwrap();
        assert_eq!(err.code(), "S002");
        let detailed = err.display_detailed();
        assert!(detailed.contains("S002") && detailed.contains("C007"));
    }

    #[test]
    fn test_drag_finds_placed_word() {
        let content = PuzzleContent::new(&["שלום", "ספר"], 8, &Direction::ALL).unwrap();
        let mut session = PuzzleSession::new(vec![content], StdRng::seed_from_u64(4)).unwrap();
        let pos = session.generation().position_of("ספר").unwrap().clone();

        assert!(session.on_drag_start(pos.start));
        session.on_drag_move(pos.end);
        assert_eq!(session.preview(), pos.cells);
        let events = session.on_drag_end();
        assert_eq!(events[0], SessionEvent::WordFound { word: "ספר".to_string(), cells: pos.cells.clone() });
        assert_eq!(session.progress(), (1, 2));
        assert_eq!(session.remaining_words(), vec!["שלום"]);
        assert!(session.preview().is_empty());
    }

    #[test]
    fn test_cancelled_drag_changes_nothing() {
        let content = PuzzleContent::new(&["שלום"], 8, &Direction::ALL).unwrap();
        let mut session = PuzzleSession::new(vec![content], StdRng::seed_from_u64(4)).unwrap();
        let pos = session.word_positions()[0].clone();
        session.on_drag_start(pos.start);
        session.on_drag_move(pos.end);
        session.cancel_drag();
        assert!(session.on_drag_end().is_empty());
        assert_eq!(session.score(), 0);
    }

    #[test]
    fn test_drag_start_outside_grid() {
        let content = PuzzleContent::new(&["שלום"], 8, &Direction::ALL).unwrap();
        let mut session = PuzzleSession::new(vec![content], StdRng::seed_from_u64(4)).unwrap();
        assert!(!session.on_drag_start(Cell::new(8, 8)));
        session.on_drag_move(Cell::new(0, 0));
        assert!(session.on_drag_end().is_empty());
    }

    #[test]
    fn test_advance_and_restart_scores() {
        let a = PuzzleContent::new(&["אבג"], 8, &[Direction::Horizontal]).unwrap();
        let b = PuzzleContent::new(&["דהו"], 8, &[Direction::Horizontal]).unwrap();
        let mut session = PuzzleSession::new(vec![a, b], StdRng::seed_from_u64(8)).unwrap();
        assert_eq!(session.puzzle_count(), 2);

        let pos = session.word_positions()[0].clone();
        session.submit_selection(&pos.cells);
        let after_first = POINTS_PER_WORD + COMPLETION_BONUS;
        assert_eq!(session.score(), after_first);
        assert!(session.is_complete());

        assert!(session.has_next());
        assert!(session.advance());
        assert_eq!(session.current_index(), 1);
        assert_eq!(session.score(), after_first);
        assert!(!session.is_complete());
        assert_eq!(session.progress(), (0, 1));

        let pos = session.word_positions()[0].clone();
        session.submit_selection(&pos.cells);
        assert_eq!(session.score(), 2 * after_first);

        session.restart_puzzle();
        assert_eq!(session.score(), 2 * after_first);
        assert_eq!(session.progress(), (0, 1));
        assert!(!session.is_complete());

        assert!(!session.advance());

        // the restarted puzzle can be played again and earns on top of the kept score
        let pos = session.word_positions()[0].clone();
        session.submit_selection(&pos.cells);
        assert_eq!(session.score(), 3 * after_first);

        session.restart_session();
        assert_eq!(session.current_index(), 0);
        assert_eq!(session.score(), 0);
    }

    #[test]
    fn test_reversed_word_pair_credits_the_placed_word() {
        let content = PuzzleContent::new(&["אבג", "גבא"], 8, &[Direction::Horizontal]).unwrap();
        let mut session = PuzzleSession::new(vec![content], StdRng::seed_from_u64(12)).unwrap();
        let positions = session.word_positions().to_vec();
        assert_eq!(positions.len(), 2);

        // second listed word first, selected back to front; it reads as the first word
        let second = positions.iter().find(|p| p.word == "גבא").unwrap();
        let mut backwards = second.cells.clone();
        backwards.reverse();
        let events = session.submit_selection(&backwards);
        let SessionEvent::WordFound { word, .. } = &events[0] else {
            panic!("expected a found word, got {events:?}");
        };
        let credited = positions.iter().find(|p| &p.word == word).unwrap();
        assert!(credited.cells == backwards || credited.cells == second.cells, "{word} credited off its cells");

        let first = positions.iter().find(|p| p.word == "אבג").unwrap();
        assert_eq!(session.submit_selection(&first.cells).first().map(|e| matches!(e, SessionEvent::WordFound { .. })), Some(true));
        assert!(session.is_complete());
        assert_eq!(session.score(), 2 * POINTS_PER_WORD + COMPLETION_BONUS);
    }

    #[test]
    fn test_restart_puzzle_keeps_score() {
        let content = PuzzleContent::new(&["אבג", "דהו"], 8, &[Direction::Horizontal]).unwrap();
        let mut session = PuzzleSession::new(vec![content], StdRng::seed_from_u64(3)).unwrap();
        let cells = session.word_positions()[0].cells.clone();
        session.submit_selection(&cells);
        let before = session.score();
        assert_eq!(before, POINTS_PER_WORD);

        session.restart_puzzle();
        assert_eq!(session.score(), before);
        assert_eq!(session.progress(), (0, 2));
        assert!(session.state().found_cells().is_empty());
    }

    #[test]
    fn test_scattered_cells_never_match() {
        let content = PuzzleContent::new(&["אבג"], 8, &[Direction::Horizontal]).unwrap();
        let mut session = PuzzleSession::new(vec![content], StdRng::seed_from_u64(5)).unwrap();
        let mut cells = session.word_positions()[0].cells.clone();
        cells.swap(0, 1);
        assert!(session.submit_selection(&cells).is_empty());
        assert!(session.submit_selection(&cells[..1]).is_empty());
        assert_eq!(session.score(), 0);
    }
}
