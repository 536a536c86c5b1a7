//! Logger setup.
//!
//! Diagnostics go through the `log` facade to stderr via `env_logger`;
//! progress markers are separate and go to stdout. The level comes from the
//! verbosity flags, and `TPCFIX_LOG` can refine it with the usual
//! `env_logger` filter syntax.

use log::LevelFilter;

use crate::config::LOG_ENV;

/// Map `-v` count and `-q` to a level: warn by default, then info, debug,
/// trace; quiet keeps errors only.
pub fn level_filter(verbose: u8, quiet: bool) -> LevelFilter {
    if quiet {
        return LevelFilter::Error;
    }
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Install the global logger. A second call is a no-op.
pub fn init_logging(verbose: u8, quiet: bool) {
    let _ = env_logger::Builder::new()
        .filter_level(level_filter(verbose, quiet))
        .parse_env(LOG_ENV)
        .format_timestamp(None)
        .format_target(false)
        .try_init();
}
