//! Application-level logging configuration.
//!
//! The library only emits `log` records; this logger is installed by the
//! `disize` binary. Records go to stderr so they never mix with JSON on stdout.

use log::{LevelFilter, SetLoggerError};

/// The application-level logger.
struct SizeLogger;

impl log::Log for SizeLogger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &log::Record) {
        if self.enabled(record.metadata()) {
            eprintln!(
                "[{} {}] {}",
                chrono::Local::now().format("%H:%M:%S%.3f"),
                record.level(),
                record.args()
            );
        }
    }

    fn flush(&self) {}
}

/// The global logging instance.
static LOGGER: SizeLogger = SizeLogger;

/// Select the maximum level for the given verbosity.
#[must_use]
pub const fn level_for(verbose: bool) -> LevelFilter {
    if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    }
}

/// Initializes logging.
///
/// Call this before anything that logs. The level can be changed later with
/// [`set_verbosity`] once every source of the verbose setting is known.
///
/// # Errors
///
/// This will return an error if the logger has already been initialized.
pub fn init_logger(verbose: bool) -> Result<(), SetLoggerError> {
    log::set_logger(&LOGGER).map(|()| set_verbosity(verbose))
}

/// Set the maximum level records must reach to be printed.
pub fn set_verbosity(verbose: bool) {
    log::set_max_level(level_for(verbose));
}
