//! Logger setup shared by the CLI, the helper binaries and the browser build.
//!
//! The engine itself only talks to the `log` facade: placement decisions at
//! `debug`, puzzle lifecycle at `info`, unplaced words and regeneration at `warn`.

#[cfg(not(target_arch = "wasm32"))]
use log::LevelFilter;

/// Install the milim logger once per process.
///
/// With `debug_enabled` the per-word placement trace is shown; otherwise only
/// puzzle lifecycle and warnings. Natively `RUST_LOG` overrides both. In the
/// browser, records go to the devtools console.
///
/// A second call keeps the logger already installed and says so at `warn`.
pub fn init_logger(debug_enabled: bool) {
    #[cfg(target_arch = "wasm32")]
    {
        let level = if debug_enabled { log::Level::Debug } else { log::Level::Info };

        if let Err(e) = console_log::init_with_level(level) {
            // the facade is not wired up, so report straight to the console
            let msg = format!("milim: console logger unavailable ({e}); puzzle logs will not be shown");
            web_sys::console::error_1(&msg.into());
            return;
        }
        log::debug!("milim logging to the browser console at {level:?}");
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let level = if debug_enabled { LevelFilter::Debug } else { LevelFilter::Info };

        let mut builder = env_logger::Builder::new();
        builder
            .filter(None, level)
            .format_timestamp(None)
            .format_module_path(false)
            .format_target(false);
        if let Ok(filters) = std::env::var("RUST_LOG") {
            builder.parse_filters(&filters);
        }

        if let Err(e) = builder.try_init() {
            log::warn!("milim logger not installed, keeping the existing one: {e}");
            return;
        }
        log::debug!("milim logging to stderr at {level:?}");
    }
}
