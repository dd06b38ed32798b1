//! Boundary configuration
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("CONFIG/{0}")]
    Parse(#[from] serde_yaml::Error),
}

/// How errors are presented when they leave the service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoundaryConfig {
    /// Replace the message of unclassified errors with `unclassified_message`
    pub redact_unclassified: bool,
    pub unclassified_message: String,
    /// Emit a warning whenever an unclassified error crosses the boundary
    pub log_unclassified: bool,
}

impl Default for BoundaryConfig {
    fn default() -> Self {
        Self {
            redact_unclassified: true,
            unclassified_message: "internal error".to_string(),
            log_unclassified: true,
        }
    }
}

impl BoundaryConfig {
    /// Load from a YAML document. Missing fields keep their defaults.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Forward every message verbatim
    pub fn transparent() -> Self {
        Self {
            redact_unclassified: false,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = BoundaryConfig::default();
        assert!(config.redact_unclassified);
        assert!(config.log_unclassified);
        assert_eq!(config.unclassified_message, "internal error");
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let config = BoundaryConfig::from_yaml_str("unclassified_message: something broke\n").unwrap();
        assert_eq!(config.unclassified_message, "something broke");
        assert!(config.redact_unclassified);
    }

    #[test]
    fn test_full_yaml() {
        let yaml = r#"
redact_unclassified: false
unclassified_message: oops
log_unclassified: false
"#;
        let config = BoundaryConfig::from_yaml_str(yaml).unwrap();
        assert_eq!(
            config,
            BoundaryConfig {
                redact_unclassified: false,
                unclassified_message: "oops".to_string(),
                log_unclassified: false,
            }
        );
    }

    #[test]
    fn test_invalid_yaml() {
        let err = BoundaryConfig::from_yaml_str("redact_unclassified: [1, 2]").unwrap_err();
        assert!(err.to_string().starts_with("CONFIG/"));
    }
}
