//! CLI error types.

use mdsite_config::ConfigError;
use mdsite_diagrams::InjectError;
use mdsite_site::ConvertError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Convert(#[from] ConvertError),

    #[error("{0}")]
    Inject(#[from] InjectError),
}
