//! Error types for puzzle content with error codes and helpful messages.
//!
//! # Error Codes
//!
//! Each error variant has a unique code (C001-C010) for documentation lookup:
//!
//! - C001: `EmptyWordList` (No words left after trimming)
//! - C002: `NoDirections` (Direction list is empty)
//! - C003: `ZeroGridSize` (Grid size is zero)
//! - C004: `UnsupportedGridSize` (Grid size is not 8, 10 or 12)
//! - C005: `WordTooLong` (A word cannot fit in the grid)
//! - C006: `UnknownDirection` (Direction name not recognized)
//! - C007: `Json` (Malformed puzzle content JSON)
//! - C008: `Io` (Puzzle content file could not be read)
//! - C009: `NoSuchPuzzle` (Puzzle index past the end of the content)
//! - C010: `DuplicateWord` (Two words read the same after normalization)
//!
//! Content errors are contract violations: they are reported loudly at the
//! boundary. A word that merely fails to find room in a crowded grid is *not*
//! an error; it is reported in `GenerationResult::unplaced`.
//!
//! # Examples
//!
//! ```
//! use milim::content::PuzzleContent;
//!
//! match PuzzleContent::parse_from_str(r#"{"words": [], "gridSize": 8, "directions": ["horizontal"]}"#) {
//!     Err(e) => {
//!         println!("Error: {}", e);
//!         println!("Code: {}", e.code());
//!         if let Some(help) = e.help() {
//!             println!("Help: {}", help);
//!         }
//!     }
//!     Ok(puzzles) => println!("Loaded {} puzzles", puzzles.len()),
//! }
//! ```

use std::io;

/// Errors raised while building or validating `PuzzleContent`.
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("Word list is empty")]
    EmptyWordList,

    #[error("No directions given")]
    NoDirections,

    #[error("Grid size must be positive")]
    ZeroGridSize,

    #[error("Unsupported grid size {size}")]
    UnsupportedGridSize { size: usize },

    #[error("Word \"{word}\" has {len} letters but the grid is only {grid_size} wide")]
    WordTooLong { word: String, len: usize, grid_size: usize },

    #[error("Unknown direction \"{name}\"")]
    UnknownDirection { name: String },

    #[error("Malformed puzzle content: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Could not read puzzle content: {0}")]
    Io(#[from] io::Error),

    #[error("No puzzle at index {index} (content has {count})")]
    NoSuchPuzzle { index: usize, count: usize },

    #[error("Word \"{word}\" duplicates \"{first}\"")]
    DuplicateWord { word: String, first: String },
}

impl From<serde_json::Error> for Box<ContentError> {
    fn from(e: serde_json::Error) -> Self {
        Box::new(ContentError::Json(e))
    }
}

impl From<io::Error> for Box<ContentError> {
    fn from(e: io::Error) -> Self {
        Box::new(ContentError::Io(e))
    }
}

impl ContentError {
    /// Returns the error code for this error variant
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            ContentError::EmptyWordList => "C001",
            ContentError::NoDirections => "C002",
            ContentError::ZeroGridSize => "C003",
            ContentError::UnsupportedGridSize { .. } => "C004",
            ContentError::WordTooLong { .. } => "C005",
            ContentError::UnknownDirection { .. } => "C006",
            ContentError::Json(_) => "C007",
            ContentError::Io(_) => "C008",
            ContentError::NoSuchPuzzle { .. } => "C009",
            ContentError::DuplicateWord { .. } => "C010",
        }
    }

    /// Returns a short description of this error type (for documentation)
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            ContentError::EmptyWordList => "No words left after trimming",
            ContentError::NoDirections => "Direction list is empty",
            ContentError::ZeroGridSize => "Grid size is zero",
            ContentError::UnsupportedGridSize { .. } => "Grid size is not 8, 10 or 12",
            ContentError::WordTooLong { .. } => "A word cannot fit in the grid",
            ContentError::UnknownDirection { .. } => "Direction name not recognized",
            ContentError::Json(_) => "Malformed puzzle content JSON",
            ContentError::Io(_) => "Puzzle content file could not be read",
            ContentError::NoSuchPuzzle { .. } => "Puzzle index past the end of the content",
            ContentError::DuplicateWord { .. } => "Two words read the same after normalization",
        }
    }

    /// Returns detailed explanation of this error type (for documentation)
    #[must_use]
    pub fn details(&self) -> &'static str {
        match self {
            ContentError::EmptyWordList => "Every puzzle needs at least one word. Words are trimmed and blank entries are dropped before this check.",
            ContentError::NoDirections => "Words are placed along the permitted directions; with none permitted nothing can be placed.",
            ContentError::ZeroGridSize => "A grid needs at least one row and one column.",
            ContentError::UnsupportedGridSize { .. } => "Puzzle content may only use the grid sizes the renderer supports: 8, 10 or 12.",
            ContentError::WordTooLong { .. } => "A word is laid out along a straight line of cells, so it can never be longer than the grid is wide.",
            ContentError::UnknownDirection { .. } => "Directions are categories: horizontal, vertical or diagonal. Each one covers both reading senses.",
            ContentError::Json(_) => "The content must be a JSON object with `words`, `gridSize` and `directions`, or an array of such objects.",
            ContentError::Io(_) => "The content file could not be opened or read from disk.",
            ContentError::NoSuchPuzzle { .. } => "Puzzles in a content file are numbered from 0; the requested index does not exist.",
            ContentError::DuplicateWord { .. } => "Final letters count as their base letters, so words such as מים and מימ are the same word. A puzzle listing one word twice could never be completed.",
        }
    }

    /// Returns a helpful suggestion or example for this error
    #[must_use]
    pub fn help(&self) -> Option<&'static str> {
        match self {
            ContentError::EmptyWordList => Some("Example: \"words\": [\"שלום\", \"ספר\"]"),
            ContentError::NoDirections => Some("Example: \"directions\": [\"horizontal\", \"vertical\"]"),
            ContentError::ZeroGridSize | ContentError::UnsupportedGridSize { .. } => Some("Use \"gridSize\": 8, 10 or 12"),
            ContentError::WordTooLong { .. } => Some("Shorten the word or choose a larger grid size"),
            ContentError::UnknownDirection { .. } => Some("Valid directions are 'horizontal', 'vertical' and 'diagonal'"),
            ContentError::Json(_) => Some("Example: {\"words\": [\"אבג\"], \"gridSize\": 8, \"directions\": [\"horizontal\"]}"),
            ContentError::NoSuchPuzzle { .. } => Some("Pick an index below the number of puzzles in the file"),
            ContentError::DuplicateWord { .. } => Some("List each word once"),
            ContentError::Io(_) => None,
        }
    }

    /// Formats the error with code and optional help text
    #[must_use]
    pub fn display_detailed(&self) -> String {
        format_error_with_code_and_help(&self.to_string(), self.code(), self.help())
    }
}

/// Helper function to format error messages with code and optional help text
pub(crate) fn format_error_with_code_and_help(base_msg: &str, code: &str, help: Option<&str>) -> String {
    if let Some(help_text) = help {
        format!("{base_msg} ({code})\n{help_text}")
    } else {
        format!("{base_msg} ({code})")
    }
}
