//! Tracing subscriber setup.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::LogFormat;
use crate::error::AppError;

/// Install the global tracing subscriber.
///
/// `filter` uses `EnvFilter` directive syntax, e.g. `heartbeat=debug,tower_http=info`.
pub fn init_tracing(filter: &str, format: LogFormat) -> Result<(), AppError> {
    let filter = EnvFilter::try_new(filter).map_err(|e| AppError::Logging(e.to_string()))?;
    let registry = tracing_subscriber::registry().with(filter);

    let result = match format {
        LogFormat::Text => registry.with(tracing_subscriber::fmt::layer()).try_init(),
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json())
            .try_init(),
    };

    result.map_err(|e| AppError::Logging(e.to_string()))
}
