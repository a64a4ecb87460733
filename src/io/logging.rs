//! Logger setup for the `log` facade
//!
//! Records go to stderr through `env_logger`; the level comes from the
//! `-v` count and `--quiet`.

use log::LevelFilter;

use crate::io::error::{AlgorithmError, Result};

/// Level for a `-v` count, with `quiet` taking precedence
pub const fn level_for(verbosity: u8, quiet: bool) -> LevelFilter {
    if quiet {
        return LevelFilter::Error;
    }
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Install the stderr logger at `level`
///
/// # Errors
///
/// Returns an error if another logger is already installed
pub fn init(level: LevelFilter) -> Result<()> {
    env_logger::Builder::new()
        .filter_level(level)
        .format_timestamp(None)
        .format_target(true)
        .try_init()
        .map_err(|e| AlgorithmError::Logging {
            reason: e.to_string(),
        })
}
