//! `tracing` subscriber setup.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install a compact stderr subscriber.
///
/// `RUST_LOG` takes precedence; otherwise `verbose` selects `debug` for the
/// tariff crates and `info` for everything else.
pub fn init_cli_logger(verbose: bool) {
    let default = if verbose {
        "tariff=debug,tariff_engine=debug,info"
    } else {
        "tariff=info,tariff_engine=info,warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    // A second call (e.g. from tests) leaves the first subscriber in place.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact(),
        )
        .try_init();
}
