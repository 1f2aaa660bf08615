//! Log dispatch for the command-line demo
//!
//! The library only emits through the `log` facade; installing a sink is
//! left to binaries.

use log::LevelFilter;

use crate::io::error::Result;

/// Map the number of `-v` flags to a level filter
///
/// Quiet runs only report errors.
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

/// Build the dispatcher writing `[LEVEL target] message` lines to stderr
pub fn dispatch(level: LevelFilter) -> fern::Dispatch {
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {}] {}",
                record.level(),
                record.target(),
                message
            ));
        })
        .level(level)
        .chain(std::io::stderr())
}

/// Install the global logger
///
/// # Errors
///
/// Returns [`crate::FovError::Logging`] if a logger is already installed.
pub fn init(level: LevelFilter) -> Result<()> {
    dispatch(level).apply()?;
    Ok(())
}
