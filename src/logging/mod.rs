// Tracing setup
//
// Logs go to stderr so they never interleave with answers on stdout. The
// default filter is quiet; RUST_LOG always wins when set.

use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber.
///
/// `debug` lowers the default filter to `debug` for this crate.
pub fn init_tracing(debug: bool) {
    let default_filter = if debug {
        "warn,workitem_analyzer=debug"
    } else {
        "warn"
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    // A second call (e.g. from tests) keeps the first subscriber
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
