use tracing_subscriber::{fmt, EnvFilter};

const DEFAULT_LOG_FILTER: &str = "warn";
const VERBOSE_LOG_FILTER: &str = "addrbook=debug,addrbook_app=debug,addrbook_adapters=debug";

/// Logs go to stderr so they never interleave with the menu on stdout.
/// `RUST_LOG` wins over `--verbose` when set.
pub fn init_logging(verbose: bool) {
    let fallback = if verbose {
        VERBOSE_LOG_FILTER
    } else {
        DEFAULT_LOG_FILTER
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
