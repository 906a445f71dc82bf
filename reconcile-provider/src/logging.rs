use crate::config::ProviderConfig;
use crate::error::{ProviderError, ProviderResult};
use tracing_subscriber::EnvFilter;

/// Installs a `fmt` subscriber filtered by `config.log_filter`.
///
/// Returns `Ok(())` without changes if a global subscriber is already set.
pub fn init_tracing(config: &ProviderConfig) -> ProviderResult<()> {
    let filter = EnvFilter::try_new(&config.log_filter)
        .map_err(|e| ProviderError::Config(format!("invalid log_filter: {e}")))?;

    if tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .compact()
        .try_init()
        .is_err()
    {
        tracing::debug!("tracing subscriber already installed");
    }
    Ok(())
}
