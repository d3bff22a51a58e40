use tracing::debug;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

const LOG_FILTER: &str = "RUST_LOG";
const DEFAULT_FILTER: &str = "application=debug,driver=debug,app=debug";

/// Installs the global subscriber. `RUST_LOG` (also read from `.env`) overrides the default filter.
/// Later calls keep the subscriber that is already installed.
pub fn init() {
    let filter = dotenvy::var(LOG_FILTER).unwrap_or_else(|_| DEFAULT_FILTER.into());
    let installed = tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_filter(EnvFilter::new(filter)))
        .try_init();
    if installed.is_err() {
        debug!("Tracing subscriber is already installed");
    }
}
