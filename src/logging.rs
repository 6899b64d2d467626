//! Logger initialisation for the command-line front end
//!
//! The library only talks to the `log` facade; binaries decide where records go.

use log::LevelFilter;

/// Map a repeated `-v` count to a level filter
#[must_use]
pub const fn level_for_verbosity(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Install `env_logger` writing to stderr
///
/// `RUST_LOG` takes precedence over the verbosity flag when set. Calling this
/// more than once is harmless.
pub fn init(verbosity: u8) {
    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(level_for_verbosity(verbosity))
        .format_timestamp(None)
        .parse_default_env();

    if builder.try_init().is_err() {
        log::debug!("logger already initialised");
    }
}
