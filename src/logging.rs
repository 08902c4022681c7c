use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Initialize a tracing subscriber writing to stderr.
///
/// The `RUST_LOG` environment variable takes precedence; otherwise the level
/// is `debug` when `verbose` is set and `warn` when it is not. Calling this
/// more than once is harmless: later calls leave the first subscriber in place.
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(verbose)
        .with_level(true)
        .compact();

    let filter_layer =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing::{debug, warn};

    #[test]
    fn test_logging_init_twice() {
        init(false);
        init(true);

        debug!("This is a debug message");
        warn!("This is a warning message");
    }
}
