//! Logging setup
//!
//! Backs the `log` facade with `console_log` in the browser and `simplelog`
//! on native builds (tests and tooling).

use log::{LevelFilter, SetLoggerError};

use crate::error::{FrontendError, Result};

/// Install the logger at `level`. Fails if a logger is already installed.
pub fn init(level: LevelFilter) -> Result<()> {
    install(level).map_err(|e| FrontendError::Config(format!("logger already installed: {e}")))
}

#[cfg(target_arch = "wasm32")]
fn install(level: LevelFilter) -> std::result::Result<(), SetLoggerError> {
    match level.to_level() {
        Some(level) => console_log::init_with_level(level),
        None => {
            log::set_max_level(LevelFilter::Off);
            Ok(())
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn install(level: LevelFilter) -> std::result::Result<(), SetLoggerError> {
    simplelog::SimpleLogger::init(level, simplelog::Config::default())
}
