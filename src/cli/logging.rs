use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

/// Environment variable holding the tracing filter directives
pub const LOG_ENV_VAR: &str = "CHAT_SCRIBE_LOG";

const DEFAULT_DIRECTIVES: &str = "warn";

/// Install the stderr tracing subscriber. Calling it more than once is harmless.
pub fn init_logging() {
    let filter =
        EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVES));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .try_init();
}
