use super::{types::Config, ConfigError};

/// Validate configuration
/// Currently validates:
/// - Catalog path and namespace are not empty
/// - Report path is not empty
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    if config.catalog.path.as_os_str().is_empty() {
        return Err(ConfigError::ValidationError(
            "catalog.path cannot be empty".to_string(),
        ));
    }

    if config.catalog.namespace.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "catalog.namespace cannot be empty".to_string(),
        ));
    }

    if config.report.path.as_os_str().is_empty() {
        return Err(ConfigError::ValidationError(
            "report.path cannot be empty".to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_validate_default_config() {
        assert!(validate_config(&Config::default()).is_ok());
    }

    #[test]
    fn test_validate_empty_catalog_path_fails() {
        let mut config = Config::default();
        config.catalog.path = PathBuf::new();
        let result = validate_config(&config);
        assert!(matches!(result, Err(ConfigError::ValidationError(_))));
    }

    #[test]
    fn test_validate_blank_namespace_fails() {
        let mut config = Config::default();
        config.catalog.namespace = "  ".to_string();
        let err = validate_config(&config).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Configuration validation failed: catalog.namespace cannot be empty"
        );
    }

    #[test]
    fn test_validate_empty_report_path_fails() {
        let mut config = Config::default();
        config.report.path = PathBuf::new();
        assert!(validate_config(&config).is_err());
    }
}
