use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::nr::shims::error::{Result, ToolError};

/// Installs the global subscriber. `RUST_LOG` wins when set; otherwise the
/// verbosity count picks `warn`, `info` or `debug`. Events go to stderr so
/// they never interleave with the progress lines on stdout.
pub fn init(verbosity: u8) -> Result<()> {
    let default_filter = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_writer(std::io::stderr).without_time())
        .try_init()
        .map_err(|error| ToolError::Logging(error.to_string()))
}
