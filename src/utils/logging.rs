//! Diagnostic logging on stderr. User-facing status lines go through
//! `ui::messages` instead.

use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Map the `-v` count to a level: none → warn, -v → info, -vv and more → debug.
pub fn level_for(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        _ => LevelFilter::DEBUG,
    }
}

/// Install the global subscriber. `RUST_LOG` wins over the `-v` count.
/// Calling it twice is harmless (the second install is ignored).
pub fn enable_logging(verbose: u8) {
    let level = std::env::var("RUST_LOG").unwrap_or_else(|_| {
        format!(
            "{}={}",
            env!("CARGO_PKG_NAME").replace('-', "_"),
            level_for(verbose)
        )
    });

    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(level))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
