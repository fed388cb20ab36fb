use super::messages::macros::is_debug_mode;
use tracing_subscriber::EnvFilter;

/// Installs the `tracing` subscriber when debug mode is on.
///
/// `RUST_LOG` selects the filter; with only `POSITRACK_DEBUG` set everything
/// from this crate at `debug` and above is shown.
pub fn init() {
    if !is_debug_mode() {
        return;
    }

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("positrack=debug"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).with_target(false).try_init();
}
