use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::catalog::DEFAULT_NAMESPACE;
use crate::presenter::DEFAULT_SEPARATOR_MARGIN;

/// Root configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub report: ReportConfig,
    #[serde(default)]
    pub filters: FiltersConfig,
}

/// Catalog database configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CatalogConfig {
    /// Path to the SQLite release dump
    #[serde(default = "default_catalog_path")]
    pub path: PathBuf,
    /// Category prefix searches are restricted to
    #[serde(default = "default_namespace")]
    pub namespace: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            path: default_catalog_path(),
            namespace: default_namespace(),
        }
    }
}

fn default_catalog_path() -> PathBuf {
    PathBuf::from("rarbg_db.sqlite")
}

fn default_namespace() -> String {
    DEFAULT_NAMESPACE.to_string()
}

/// Report file configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ReportConfig {
    /// File the result listing is written to (overwritten every run)
    #[serde(default = "default_report_path")]
    pub path: PathBuf,
    /// Extra separator characters beyond each entry's width
    #[serde(default = "default_margin")]
    pub margin: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            path: default_report_path(),
            margin: default_margin(),
        }
    }
}

fn default_report_path() -> PathBuf {
    PathBuf::from("results.txt")
}

fn default_margin() -> usize {
    DEFAULT_SEPARATOR_MARGIN
}

/// Filter prompt configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct FiltersConfig {
    /// Skip the filter questions and show everything
    #[serde(default)]
    pub minimal: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_empty_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.catalog.path.to_str().unwrap(), "rarbg_db.sqlite");
        assert_eq!(config.catalog.namespace, "movie");
        assert_eq!(config.report.path.to_str().unwrap(), "results.txt");
        assert_eq!(config.report.margin, 4);
        assert!(!config.filters.minimal);
    }

    #[test]
    fn test_deserialize_custom_catalog() {
        let toml = r#"
[catalog]
path = "/data/dump.sqlite"
namespace = "tv"
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.catalog.path.to_str().unwrap(), "/data/dump.sqlite");
        assert_eq!(config.catalog.namespace, "tv");
        assert_eq!(config.report.margin, 4);
    }

    #[test]
    fn test_deserialize_partial_section_fills_defaults() {
        let toml = r#"
[report]
margin = 12

[filters]
minimal = true
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.report.margin, 12);
        assert_eq!(config.report.path.to_str().unwrap(), "results.txt");
        assert!(config.filters.minimal);
    }

    #[test]
    fn test_deserialize_wrong_type_fails() {
        let toml = r#"
[report]
margin = "wide"
"#;
        let result: Result<Config, _> = toml::from_str(toml);
        assert!(result.is_err());
    }
}
