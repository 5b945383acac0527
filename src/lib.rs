// Reusable library API — visible to both CLI and WASM builds
pub mod content;
pub mod direction;
pub mod drag;
pub mod errors;
pub mod generator;
pub mod grid;
pub mod hebrew_char;
pub mod log;
pub mod matcher;
pub mod placement;
pub mod random;
pub mod session;
pub mod snapping;

// Compile the wasm glue only when targeting wasm32.
#[cfg(target_arch = "wasm32")]
pub mod wasm;
