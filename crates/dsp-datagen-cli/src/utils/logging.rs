//! Logging through `tracing` and `tracing-subscriber`.
//!
//! Diagnostics go to stderr so stdout stays reserved for the command's own
//! report. `RUST_LOG` is honored when no verbosity flag is given.
//!
//! - default: warnings and errors
//! - `-v`: one line per written file
//! - `-vv`: loader and region details
//! - `-vvv`: everything

use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Maps the `-v` count and `--quiet` flag to a level.
pub fn level_filter(verbosity: u8, quiet: bool) -> LevelFilter {
    if quiet {
        return LevelFilter::ERROR;
    }
    match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

pub fn init_logging(verbosity: u8, quiet: bool) {
    let level = level_filter(verbosity, quiet);
    let filter = if verbosity == 0 && !quiet {
        EnvFilter::builder()
            .with_default_directive(level.into())
            .from_env_lossy()
    } else {
        EnvFilter::default().add_directive(level.into())
    };

    // A subscriber may already be installed when running inside tests.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}
