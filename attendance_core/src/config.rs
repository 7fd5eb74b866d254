use crate::error::ConfigError;
use crate::redirect::RedirectPolicy;
use serde::{Deserialize, Serialize};

/// Runtime configuration, embedded in the host page as JSON.
///
/// Every field is optional in the document; missing ones take the defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub mount_id: String,
    pub redirect_policy: RedirectPolicy,
    pub session_key: String,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            mount_id: "root".to_string(),
            redirect_policy: RedirectPolicy::Latch,
            session_key: "attendance.session".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Id of the `<script type="application/json">` element holding the config.
    pub const ELEMENT_ID: &'static str = "app-config";

    /// Parses and validates a JSON config document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the JSON is malformed, names an unknown
    /// redirect policy or log level, or leaves the mount id empty.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(raw).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidLogLevel`] if `log_level` is not a `log` level name.
    pub fn log_level(&self) -> Result<log::Level, ConfigError> {
        self.log_level
            .parse()
            .map_err(|_| ConfigError::InvalidLogLevel(self.log_level.clone()))
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.mount_id.trim().is_empty() {
            return Err(ConfigError::EmptyMountId);
        }
        self.log_level()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_yields_defaults() {
        assert_eq!(AppConfig::from_json("{}"), Ok(AppConfig::default()));
    }

    #[test]
    fn partial_document_keeps_other_defaults() {
        let config = AppConfig::from_json(r#"{"redirect_policy":"follow_auth","log_level":"debug"}"#);
        let Ok(config) = config else {
            panic!("expected valid config, got {config:?}");
        };
        assert_eq!(config.redirect_policy, RedirectPolicy::FollowAuth);
        assert_eq!(config.log_level(), Ok(log::Level::Debug));
        assert_eq!(config.mount_id, "root");
        assert_eq!(config.session_key, "attendance.session");
    }

    #[test]
    fn rejects_unknown_level() {
        assert_eq!(
            AppConfig::from_json(r#"{"log_level":"chatty"}"#),
            Err(ConfigError::InvalidLogLevel("chatty".to_string()))
        );
    }

    #[test]
    fn rejects_unknown_policy_and_bad_json() {
        assert!(matches!(
            AppConfig::from_json(r#"{"redirect_policy":"sometimes"}"#),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(AppConfig::from_json("{"), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn rejects_blank_mount_id() {
        assert_eq!(
            AppConfig::from_json(r#"{"mount_id":"  "}"#),
            Err(ConfigError::EmptyMountId)
        );
    }
}
