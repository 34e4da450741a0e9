//! Logging setup on the `log` facade with an `env_logger` backend.

use env_logger::Builder;
use log::LevelFilter;

/// Initialize logging from CLI verbosity flags.
///
/// `RUST_LOG` takes precedence when set. Safe to call more than once; only
/// the first initialization takes effect.
pub fn init(verbose: u8, quiet: bool) {
    let mut builder = Builder::new();
    if std::env::var("RUST_LOG").is_ok() {
        builder.parse_default_env();
    } else {
        builder.filter_level(level_for(verbose, quiet));
    }
    builder.format_timestamp(None);
    let _ = builder.try_init();
}

const fn level_for(verbose: u8, quiet: bool) -> LevelFilter {
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

#[cfg(test)]
#[path = "logging_tests.rs"]
mod tests;
