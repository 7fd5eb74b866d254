use thiserror::Error;

/// Failures of the one-shot mount sequence. All of them are fatal for the
/// page: there is no fallback UI once mounting fails.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BootError {
    #[error("mount point '#{id}' not found in document")]
    MissingMountPoint { id: String },

    #[error("host failed to attach root view: {0}")]
    Host(String),
}

/// Problems with the embedded runtime configuration. Callers recover by
/// falling back to [`crate::config::AppConfig::default`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("config is not valid JSON: {0}")]
    Parse(String),

    #[error("unknown log level '{0}'")]
    InvalidLogLevel(String),

    #[error("mount id must not be empty")]
    EmptyMountId,
}
