// src/logging.rs
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset.
pub fn default_directives(debug: bool) -> &'static str {
    if debug {
        "warn,mongo_probe=debug,mongodb=info"
    } else {
        "warn"
    }
}

/// Install the global subscriber. Logs go to stderr so stdout only carries
/// the probe's status lines. `RUST_LOG` overrides the level chosen here.
pub fn setup_logging(debug: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(debug)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_writer(std::io::stderr),
        )
        .init();
}
