//! Logging for the setup tools
//!
//! Nothing is written to disk here: a failed precondition must leave the
//! project directory untouched, so logs only go to stderr.

use flexi_logger::{FlexiLoggerError, Logger, LoggerHandle};

pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Start the stderr logger. `RUST_LOG` overrides the level when set.
pub fn initialize_logging(verbose: bool) -> Result<LoggerHandle, FlexiLoggerError> {
    let level = if verbose { "debug" } else { DEFAULT_LOG_LEVEL };

    Logger::try_with_env_or_str(level)?
        .log_to_stderr()
        .format(flexi_logger::colored_opt_format)
        .start()
}
