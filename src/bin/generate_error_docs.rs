//! Generate error code documentation from the source of truth (error enums).
//!
//! This binary reads the error codes, descriptions, details, and help text
//! directly from the `ContentError` and `SessionError` implementations via their
//! `code()`, `description()`, `details()`, and `help()` methods.
//!
//! Run with:
//! ```bash
//! cargo run --bin generate_error_docs > docs/ERROR_CODES.md
//! ```

use milim::errors::ContentError;
use milim::session::SessionError;

/// Macro to generate error documentation for any error type
/// with `code()`, `description()`, `details()`, `help()`, and `display_detailed()` methods
macro_rules! generate_error_docs {
    ($errors:expr) => {
        for error in $errors {
            println!("### {}: {}\n", error.code(), error.description());
            println!("**Details:** {}\n", error.details());

            if let Some(help_text) = error.help() {
                println!("**How to fix:**");
                println!("```");
                println!("{}", help_text);
                println!("```\n");
            }

            println!("**Example error message:**");
            println!("```");
            println!("{}", error);
            println!("```\n");

            println!("**Detailed format:**");
            println!("```");
            println!("{}", error.display_detailed());
            println!("```\n");

            println!("---\n");
        }
    };
}

/// One instance of every `ContentError` variant
fn all_content_error_variants() -> Vec<ContentError> {
    vec![
        ContentError::EmptyWordList,
        ContentError::NoDirections,
        ContentError::ZeroGridSize,
        ContentError::UnsupportedGridSize { size: 9 },
        ContentError::WordTooLong { word: "אבגדהוזחט".to_string(), len: 9, grid_size: 8 },
        ContentError::UnknownDirection { name: "sideways".to_string() },
        // Json--create by parsing truncated input
        ContentError::Json(serde_json::from_str::<serde_json::Value>("{\"words\": [").unwrap_err()),
        ContentError::Io(std::io::Error::new(std::io::ErrorKind::NotFound, "puzzles.json: No such file or directory")),
        ContentError::NoSuchPuzzle { index: 5, count: 3 },
        ContentError::DuplicateWord { word: "מימ".to_string(), first: "מים".to_string() },
    ]
}

/// One instance of every `SessionError` variant
fn all_session_error_variants() -> Vec<SessionError> {
    vec![
        SessionError::NoPuzzles,
        SessionError::InvalidContent(Box::new(ContentError::EmptyWordList)),
    ]
}

fn main() {
    println!("# Error Code Reference\n");
    println!("**⚠️ This document is auto-generated from the source code. Do not edit manually.**\n");

    println!("## Table of Contents\n");
    println!("- [Session Errors (S001–S002)](#session-errors)");
    println!("- [Content Errors (C001–C010)](#content-errors)\n");

    println!("## Session Errors\n");
    println!("Errors from starting a puzzle session. These wrap lower-level content errors or indicate session-specific issues.\n");
    generate_error_docs!(all_session_error_variants());

    println!("## Content Errors\n");
    println!("Errors from loading and validating puzzle content (words, grid size, directions).\n");
    generate_error_docs!(all_content_error_variants());

    println!("\n## Error Display Formats\n");
    println!("### Simple Format");
    println!("```");
    println!("Error: <message>");
    println!("```\n");
    println!("### Detailed Format (via `display_detailed()`)");
    println!("```");
    println!("<message> (<code>)");
    println!("<help text if available>");
    println!("```\n");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_content_code_documented_once() {
        let codes: Vec<&str> = all_content_error_variants().iter().map(ContentError::code).collect();
        let expected: Vec<String> = (1..=10).map(|n| format!("C{n:03}")).collect();
        assert_eq!(codes, expected);
    }

    #[test]
    fn test_every_session_code_documented_once() {
        let codes: Vec<&str> = all_session_error_variants().iter().map(SessionError::code).collect();
        assert_eq!(codes, vec!["S001", "S002"]);
    }
}
