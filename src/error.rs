use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file is absent. Distinct from other read failures so the
    /// caller can treat it as a first run.
    #[error("config file {path} does not exist")]
    DoesNotExist { path: PathBuf },

    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to open new config file for writing {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Fewer bytes reached the file than were handed to the write call.
    #[error("short write to {path}")]
    ShortWrite { path: PathBuf },

    #[error("failed to back up existing config: {source}")]
    Backup { source: std::io::Error },

    #[error("failed to parse config: {source}")]
    Parse { source: serde_yaml::Error },

    #[error("failed to serialize config: {source}")]
    Serialize { source: serde_yaml::Error },

    /// The document parsed but is empty.
    #[error("malformed config")]
    MalformedConfig,

    /// The document's root is something other than a mapping.
    #[error("expected a top level map")]
    NotTopLevelMap,

    /// The `hosts` mapping violates the host-name → auth-sequence shape.
    #[error("malformed hosts config")]
    MalformedHosts,

    #[error("could not find config entry for {hostname:?}")]
    HostNotFound { hostname: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn host_not_found_quotes_the_name() {
        let err = ConfigError::HostNotFound {
            hostname: "github.com".into(),
        };
        assert_eq!(
            err.to_string(),
            "could not find config entry for \"github.com\""
        );
    }

    #[test]
    fn schema_errors_use_fixed_messages() {
        assert_eq!(ConfigError::MalformedConfig.to_string(), "malformed config");
        assert_eq!(
            ConfigError::NotTopLevelMap.to_string(),
            "expected a top level map"
        );
        assert_eq!(
            ConfigError::MalformedHosts.to_string(),
            "malformed hosts config"
        );
    }

    #[test]
    fn backup_error_names_the_operation() {
        let err = ConfigError::Backup {
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(err.to_string().starts_with("failed to back up"));
    }
}
