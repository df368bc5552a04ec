use tracing::Subscriber;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter used when `RUST_LOG` is not set.
///
/// Library events stay silent unless `verbose` is on, so nothing is written
/// next to the user-facing notifications by default.
pub fn default_filter(verbose: bool) -> EnvFilter {
    if verbose {
        EnvFilter::new("book_library=debug")
    } else {
        EnvFilter::new("warn")
    }
}

/// Compact diagnostic subscriber writing through `make_writer`.
pub fn cli_subscriber<W>(
    filter: EnvFilter,
    ansi: bool,
    make_writer: W,
) -> impl Subscriber + Send + Sync + 'static
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    tracing_subscriber::registry().with(filter).with(
        tracing_subscriber::fmt::layer()
            .with_writer(make_writer)
            .with_ansi(ansi)
            .with_target(false)
            .without_time()
            .compact(),
    )
}

/// Install the diagnostic subscriber for the binary.
///
/// Diagnostics go to stderr so they never mix with the notifications on
/// stdout. `RUST_LOG` overrides the default filter.
pub fn init_cli_logger(verbose: bool, color: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter(verbose));
    cli_subscriber(filter, color, std::io::stderr).init();
}
