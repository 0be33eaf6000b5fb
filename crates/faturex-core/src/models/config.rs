//! Configuration structures for the extraction pipeline.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration for the faturex pipeline.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FaturexConfig {
    /// PDF processing configuration.
    pub pdf: PdfConfig,

    /// Category mapping configuration.
    pub categories: CategoryConfig,
}

/// PDF processing configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PdfConfig {
    /// Maximum pages to process (0 = unlimited).
    pub max_pages: usize,

    /// Minimum text length below which the report is likely scanned.
    pub min_text_length: usize,
}

impl Default for PdfConfig {
    fn default() -> Self {
        Self {
            max_pages: 0,
            min_text_length: 50,
        }
    }
}

/// Category mapping configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CategoryConfig {
    /// Path to a category map CSV; the embedded map is used when unset.
    pub map_file: Option<PathBuf>,
}

impl FaturexConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &std::path::Path) -> Result<Self, std::io::Error> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &std::path::Path) -> Result<(), std::io::Error> {
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))?;
        std::fs::write(path, content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = FaturexConfig::default();
        assert_eq!(config.pdf.max_pages, 0);
        assert_eq!(config.pdf.min_text_length, 50);
        assert!(config.categories.map_file.is_none());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("faturex.json");

        let mut config = FaturexConfig::default();
        config.pdf.max_pages = 7;
        config.categories.map_file = Some(PathBuf::from("data/categorias_map.csv"));
        config.save(&path).unwrap();

        let loaded = FaturexConfig::from_file(&path).unwrap();
        assert_eq!(loaded.pdf.max_pages, 7);
        assert_eq!(
            loaded.categories.map_file,
            Some(PathBuf::from("data/categorias_map.csv"))
        );
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("partial.json");
        std::fs::write(&path, r#"{"pdf": {"max_pages": 3}}"#).unwrap();

        let loaded = FaturexConfig::from_file(&path).unwrap();
        assert_eq!(loaded.pdf.max_pages, 3);
        assert_eq!(loaded.pdf.min_text_length, 50);
    }
}
