use crate::content::PuzzleContent;
use crate::errors::ContentError;
use crate::generator::generate;
use crate::grid::Cell;
use crate::hebrew_char::normalize_word;
use crate::log::init_logger;
use crate::session::{PuzzleSession, SessionError, SessionEvent};
use rand::rngs::StdRng;
use rand::SeedableRng;
use wasm_bindgen::prelude::*;

use serde_wasm_bindgen::to_value;

/// Structured error information for JavaScript consumers
#[derive(serde::Serialize)]
struct WasmError {
    /// Error code (e.g., "C001", "S002")
    code: String,
    /// Display message
    message: String,
    /// Short description of error type
    description: String,
    /// Detailed explanation
    details: String,
    /// Optional helpful suggestion
    #[serde(skip_serializing_if = "Option::is_none")]
    help: Option<String>,
}

impl From<Box<ContentError>> for WasmError {
    fn from(e: Box<ContentError>) -> Self {
        WasmError {
            code: e.code().to_string(),
            message: e.to_string(),
            description: e.description().to_string(),
            details: e.details().to_string(),
            help: e.help().map(|s| s.to_string()),
        }
    }
}

impl From<SessionError> for WasmError {
    fn from(e: SessionError) -> Self {
        // For InvalidContent, surface the nested ContentError details
        match e {
            SessionError::InvalidContent(ce) => WasmError::from(ce),
            other => WasmError {
                code: other.code().to_string(),
                message: other.to_string(),
                description: other.description().to_string(),
                details: other.details().to_string(),
                help: other.help().map(|s| s.to_string()),
            },
        }
    }
}

impl From<WasmError> for JsValue {
    fn from(e: WasmError) -> Self {
        let mut msg = format!("Error {}: {}", e.code, e.message);

        if !e.details.is_empty() {
            msg.push_str(&format!("\n\n{}", e.details));
        }

        if let Some(help) = e.help {
            msg.push_str(&format!("\n\nSuggestion: {}", help));
        }

        js_sys::Error::new(&msg).into()
    }
}

fn serialization_error(code: &str, what: &str, e: serde_wasm_bindgen::Error) -> JsValue {
    WasmError {
        code: code.to_string(),
        message: format!("serialization failed: {e}"),
        description: format!("Failed to serialize {what}"),
        details: format!("The {what} could not be converted to JavaScript format."),
        help: Some("This is an internal error. Please report this issue.".to_string()),
    }
    .into()
}

fn rng_from_seed(seed: Option<u32>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(u64::from(s)),
        None => StdRng::from_entropy(),
    }
}

/// The puzzle to generate from a parsed batch; an empty batch has nothing to play.
fn first_puzzle(puzzles: &[PuzzleContent]) -> Result<&PuzzleContent, WasmError> {
    puzzles.first().ok_or_else(|| WasmError::from(SessionError::NoPuzzles))
}

/// Initialize logging and the panic hook.
///
/// This function must be called from JavaScript after the WASM module loads.
#[wasm_bindgen]
pub fn initialize(debug_enabled: bool) {
    console_error_panic_hook::set_once();
    init_logger(debug_enabled);

    log::info!("WASM module initialized");
    if !debug_enabled {
        log::info!("Debug logging disabled");
    }
}

/// JS entry: (content: PuzzleContent, seed?: number) -> GenerationResult
///
/// The result holds `grid` (string[][]), `wordPositions` and `unplaced`.
#[wasm_bindgen]
pub fn generate_puzzle_wasm(content: JsValue, seed: Option<u32>) -> Result<JsValue, JsValue> {
    let text = js_sys::JSON::stringify(&content)
        .ok()
        .and_then(|s| s.as_string())
        .ok_or_else(|| WasmError {
            code: "WASM001".to_string(),
            message: "content must be a plain object".to_string(),
            description: "Invalid puzzle content".to_string(),
            details: "The content parameter must be a JSON-serializable object.".to_string(),
            help: Some("Example: {words: ['אבג'], gridSize: 8, directions: ['horizontal']}".to_string()),
        })?;
    let puzzles = PuzzleContent::parse_from_str(&text).map_err(WasmError::from)?;
    let first = first_puzzle(&puzzles)?;

    let mut rng = rng_from_seed(seed);
    let result = generate(first, &mut rng);

    #[derive(serde::Serialize)]
    #[serde(rename_all = "camelCase")]
    struct WasmGenerationResult<'a> {
        grid: Vec<Vec<String>>,
        word_positions: &'a [crate::grid::WordPosition],
        unplaced: &'a [String],
    }

    to_value(&WasmGenerationResult {
        grid: result.grid.to_string_rows(),
        word_positions: &result.word_positions,
        unplaced: &result.unplaced,
    })
    .map_err(|e| serialization_error("WASM002", "generation result", e))
}

/// Comparison form of a word (final letters replaced by base letters).
#[wasm_bindgen]
pub fn normalize_word_wasm(word: &str) -> String {
    normalize_word(word)
}

/// A playable session driven by pointer events from the host page.
#[wasm_bindgen]
pub struct WasmGame {
    session: PuzzleSession<StdRng>,
}

#[wasm_bindgen]
impl WasmGame {
    /// `contents`: a puzzle object or an array of them.
    #[wasm_bindgen(constructor)]
    pub fn new(contents: JsValue, seed: Option<u32>) -> Result<WasmGame, JsValue> {
        let text = js_sys::JSON::stringify(&contents)
            .ok()
            .and_then(|s| s.as_string())
            .unwrap_or_default();
        let session = PuzzleSession::from_json(&text, rng_from_seed(seed)).map_err(WasmError::from)?;
        Ok(WasmGame { session })
    }

    /// Current grid as string[][].
    pub fn grid(&self) -> Result<JsValue, JsValue> {
        to_value(&self.session.grid().to_string_rows()).map_err(|e| serialization_error("WASM003", "grid", e))
    }

    #[wasm_bindgen(js_name = onDragStart)]
    pub fn on_drag_start(&mut self, row: usize, col: usize) -> bool {
        self.session.on_drag_start(Cell::new(row, col))
    }

    #[wasm_bindgen(js_name = onDragMove)]
    pub fn on_drag_move(&mut self, row: usize, col: usize) {
        self.session.on_drag_move(Cell::new(row, col));
    }

    /// Returns the found word, or `undefined` when the selection matched nothing.
    #[wasm_bindgen(js_name = onDragEnd)]
    pub fn on_drag_end(&mut self) -> Option<String> {
        self.session.on_drag_end().into_iter().find_map(|event| match event {
            SessionEvent::WordFound { word, .. } => Some(word),
            SessionEvent::PuzzleCompleted { .. } => None,
        })
    }

    #[wasm_bindgen(js_name = cancelDrag)]
    pub fn cancel_drag(&mut self) {
        self.session.cancel_drag();
    }

    /// Highlighted cells of the drag in progress as {row, col}[].
    pub fn preview(&self) -> Result<JsValue, JsValue> {
        to_value(&self.session.preview()).map_err(|e| serialization_error("WASM004", "preview", e))
    }

    /// `[found, total]`
    pub fn progress(&self) -> Vec<u32> {
        let (found, total) = self.session.progress();
        vec![found as u32, total as u32]
    }

    #[wasm_bindgen(js_name = isComplete)]
    pub fn is_complete(&self) -> bool {
        self.session.is_complete()
    }

    pub fn score(&self) -> u32 {
        self.session.score()
    }

    #[wasm_bindgen(js_name = foundCells)]
    pub fn found_cells(&self) -> Result<JsValue, JsValue> {
        let cells: Vec<Cell> = self.session.state().found_cells().iter().copied().collect();
        to_value(&cells).map_err(|e| serialization_error("WASM005", "found cells", e))
    }

    #[wasm_bindgen(js_name = nextPuzzle)]
    pub fn next_puzzle(&mut self) -> bool {
        self.session.advance()
    }

    #[wasm_bindgen(js_name = restartPuzzle)]
    pub fn restart_puzzle(&mut self) {
        self.session.restart_puzzle();
    }

    #[wasm_bindgen(js_name = restartSession)]
    pub fn restart_session(&mut self) {
        self.session.restart_session();
    }
}

/// Generate a debug report for troubleshooting.
///
/// The report holds the error message, the puzzle content that was being
/// played, and environment information, ready to paste into an issue.
#[wasm_bindgen]
pub fn get_debug_info(content_json: &str, error_message: &str, seed: Option<u32>) -> String {
    use std::fmt::Write;
    let mut report = String::new();

    // writing to a String never fails
    let _ = writeln!(&mut report, "=== MILIM DEBUG REPORT ===");
    let _ = writeln!(&mut report, "Version: {} ({})", env!("CARGO_PKG_VERSION"), env!("GIT_HASH"));
    let _ = writeln!(&mut report, "Generated: {}", js_sys::Date::new_0().to_iso_string().as_string().unwrap_or_else(|| "unknown".to_string()));
    let _ = writeln!(&mut report);

    let _ = writeln!(&mut report, "## Error");
    let _ = writeln!(&mut report, "{}", error_message);
    let _ = writeln!(&mut report);

    let _ = writeln!(&mut report, "## Input");
    let _ = writeln!(&mut report, "Content: {}", content_json);
    let _ = writeln!(&mut report, "Seed: {}", seed.map_or_else(|| "none".to_string(), |s| s.to_string()));
    let _ = writeln!(&mut report);

    let _ = writeln!(&mut report, "## Environment");
    if let Some(window) = web_sys::window() {
        if let Ok(user_agent) = window.navigator().user_agent() {
            let _ = writeln!(&mut report, "User Agent: {}", user_agent);
        }
        let _ = writeln!(&mut report, "Location: {}", window.location().href().unwrap_or_else(|_| "unknown".to_string()));
    }
    let _ = writeln!(&mut report);

    let _ = writeln!(&mut report, "=== END DEBUG REPORT ===");

    report
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_error_surfaces_nested_content_code() {
        let err = SessionError::InvalidContent(Box::new(ContentError::NoDirections));
        let wasm = WasmError::from(err);
        assert_eq!(wasm.code, "C002");
        assert!(wasm.help.is_some());
    }

    #[test]
    fn test_no_puzzles_error_keeps_session_code() {
        let wasm = WasmError::from(SessionError::NoPuzzles);
        assert_eq!(wasm.code, "S001");
    }

    #[test]
    fn test_empty_batch_reports_no_puzzles() {
        let puzzles = PuzzleContent::parse_from_str("[]").unwrap();
        let err = first_puzzle(&puzzles).err().unwrap();
        assert_eq!(err.code, "S001");

        let puzzles = PuzzleContent::parse_from_str(r#"[{"words": ["אבג"], "gridSize": 8, "directions": ["vertical"]}]"#).unwrap();
        assert_eq!(first_puzzle(&puzzles).ok().map(|p| p.grid_size()), Some(8));
    }

    #[test]
    fn test_seeded_rng_is_reproducible() {
        use crate::random::RandomSource;
        let mut a = rng_from_seed(Some(9));
        let mut b = rng_from_seed(Some(9));
        assert_eq!(a.next(), b.next());
    }
}
