use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Filter used when `RUST_LOG` is unset. Without `-v` only this crate's
/// warnings (such as a degraded catalog or price load) are shown; other
/// crates stay at `warn` at most.
pub fn default_directives(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "off,tokswap=warn",
        1 => "warn,tokswap=debug",
        _ => "warn,tokswap=trace",
    }
}

/// Installs the global subscriber on stderr so rendered output on stdout stays clean.
pub fn init_logging(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(verbosity)));
    let verbose = verbosity > 0;

    tracing_subscriber::registry()
        .with(filter)
        .with(verbose.then(|| {
            fmt::layer()
                .pretty()
                .without_time()
                .with_writer(std::io::stderr)
        }))
        .with((!verbose).then(|| {
            fmt::layer()
                .compact()
                .without_time()
                .with_target(false)
                .with_writer(std::io::stderr)
        }))
        .init();
}
