//! `content` — puzzle content supplied by the host: words, grid size, directions.
//!
//! Content arrives as JSON, either a single object or an array of objects:
//!
//! ```json
//! {"words": ["שלום", "ספר"], "gridSize": 10, "directions": ["horizontal", "diagonal"]}
//! ```
//!
//! Parsing validates the contract up front so that generation never sees
//! malformed input:
//! - words are trimmed and blank words are dropped; at least one must remain
//! - `gridSize` must be one of [`SUPPORTED_GRID_SIZES`]
//! - every word must fit within `gridSize` letters
//! - `directions` must be non-empty and use known names
//! - no two words may read the same once final letters are normalized
//!
//! `parse_from_str` works everywhere (including WASM); `load_from_path` is
//! native-only.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::direction::Direction;
use crate::errors::ContentError;
use crate::hebrew_char::normalize_word;

/// Grid sizes the renderer supports.
pub const SUPPORTED_GRID_SIZES: [usize; 3] = [8, 10, 12];

/// Immutable, validated content for one puzzle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PuzzleContent {
    words: Vec<String>,
    grid_size: usize,
    directions: Vec<Direction>,
}

/// Wire shape, before validation.
#[derive(Debug, Deserialize)]
struct RawPuzzleContent {
    words: Vec<String>,
    #[serde(rename = "gridSize", alias = "grid_size")]
    grid_size: usize,
    directions: Vec<String>,
}

impl PuzzleContent {
    /// Validate and build puzzle content.
    ///
    /// # Errors
    ///
    /// Returns `ContentError` if the word list is empty after trimming, the grid
    /// size is unsupported, a word is longer than the grid, or no direction is given.
    pub fn new<S: AsRef<str>>(
        words: &[S],
        grid_size: usize,
        directions: &[Direction],
    ) -> Result<Self, Box<ContentError>> {
        let words: Vec<String> = words
            .iter()
            .map(|w| w.as_ref().trim())
            .filter(|w| !w.is_empty())
            .map(str::to_string)
            .collect();

        if words.is_empty() {
            return Err(Box::new(ContentError::EmptyWordList));
        }
        if grid_size == 0 {
            return Err(Box::new(ContentError::ZeroGridSize));
        }
        if !SUPPORTED_GRID_SIZES.contains(&grid_size) {
            return Err(Box::new(ContentError::UnsupportedGridSize { size: grid_size }));
        }
        if let Some(word) = words.iter().find(|w| w.chars().count() > grid_size) {
            return Err(Box::new(ContentError::WordTooLong {
                word: word.clone(),
                len: word.chars().count(),
                grid_size,
            }));
        }
        if directions.is_empty() {
            return Err(Box::new(ContentError::NoDirections));
        }
        let mut seen: HashMap<String, &String> = HashMap::with_capacity(words.len());
        for word in &words {
            if let Some(first) = seen.insert(normalize_word(word), word) {
                return Err(Box::new(ContentError::DuplicateWord { word: word.clone(), first: first.clone() }));
            }
        }

        Ok(Self { words, grid_size, directions: directions.to_vec() })
    }

    fn from_raw(raw: RawPuzzleContent) -> Result<Self, Box<ContentError>> {
        let directions = raw
            .directions
            .iter()
            .map(|d| d.parse::<Direction>())
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(&raw.words, raw.grid_size, &directions)
    }

    /// Parse one puzzle object or an array of puzzle objects.
    ///
    /// # Errors
    ///
    /// Returns `ContentError::Json` for malformed JSON and the validation errors of
    /// [`PuzzleContent::new`] for well-formed but invalid content.
    pub fn parse_from_str(text: &str) -> Result<Vec<Self>, Box<ContentError>> {
        let value: serde_json::Value = serde_json::from_str(text)?;
        let raws: Vec<RawPuzzleContent> = match value {
            serde_json::Value::Array(items) => items
                .into_iter()
                .map(serde_json::from_value)
                .collect::<Result<_, _>>()?,
            other => vec![serde_json::from_value(other)?],
        };
        let puzzles = raws.into_iter().map(Self::from_raw).collect::<Result<Vec<_>, _>>()?;
        log::debug!("parsed {} puzzle(s)", puzzles.len());
        Ok(puzzles)
    }

    /// Read and parse a content file. Native builds only.
    ///
    /// # Errors
    ///
    /// Returns `ContentError::Io` if the file cannot be read, otherwise as
    /// [`PuzzleContent::parse_from_str`].
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> Result<Vec<Self>, Box<ContentError>> {
        let text = std::fs::read_to_string(path)?;
        Self::parse_from_str(&text)
    }

    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    #[must_use]
    pub fn grid_size(&self) -> usize {
        self.grid_size
    }

    #[must_use]
    pub fn directions(&self) -> &[Direction] {
        &self.directions
    }
}
