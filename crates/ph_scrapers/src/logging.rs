use std::sync::Once;
use tracing::Level;

static INIT: Once = Once::new();

/// Maps the number of `-v` flags to a log level. Quiet by default so only
/// the report reaches the terminal.
pub fn level_for_verbosity(verbosity: u8) -> Level {
    match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Installs the stderr subscriber once; later calls are no-ops.
pub fn init_logging(verbosity: u8) {
    if !tracing::dispatcher::has_been_set() {
        INIT.call_once(|| {
            tracing_subscriber::fmt()
                .with_max_level(level_for_verbosity(verbosity))
                .with_writer(std::io::stderr)
                .init();
        });
    }
}
