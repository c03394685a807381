//! Grid configuration.
//!
//! Every option has a default, so a configuration file only needs the keys
//! it changes:
//!
//! ```rust
//! use bubbletea_datagrid::grid::{GridConfig, SelectAllScope};
//!
//! let config = GridConfig::from_toml_str(
//!     r#"
//!     title = "Vendors"
//!     page_size = 25
//!     select_all_scope = "filtered"
//!     "#,
//! )
//! .unwrap();
//! assert_eq!(config.page_size, 25);
//! assert_eq!(config.select_all_scope, SelectAllScope::Filtered);
//! assert!(config.searchable);
//! ```

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// How the search term is matched against a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchMode {
    /// Case-insensitive substring.
    #[default]
    Substring,
    /// Skim-style fuzzy match.
    Fuzzy,
}

/// Which rows "select all" toggles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectAllScope {
    /// Rows on the current page.
    #[default]
    Page,
    /// Every row that passes the search.
    Filtered,
}

/// Display and behavior options of a grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GridConfig {
    /// Show the loading state instead of the table.
    pub loading: bool,
    /// Show the search box.
    pub searchable: bool,
    /// Search only columns marked filterable; when false every column is searched.
    pub filterable: bool,
    /// Offer the export action.
    pub exportable: bool,
    /// Show checkboxes and allow selection.
    pub selectable: bool,
    /// Rows per page.
    pub page_size: usize,
    /// Show the pagination footer.
    pub show_pagination: bool,
    /// Text shown when no rows are visible.
    pub empty_message: String,
    /// Heading above the grid.
    pub title: Option<String>,
    /// Line under the heading.
    pub description: Option<String>,
    /// Search matching.
    pub search_mode: SearchMode,
    /// Select-all scope.
    pub select_all_scope: SelectAllScope,
    /// Show the key help line.
    pub show_help: bool,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            loading: false,
            searchable: true,
            filterable: true,
            exportable: true,
            selectable: true,
            page_size: 10,
            show_pagination: true,
            empty_message: "No data available".to_string(),
            title: None,
            description: None,
            search_mode: SearchMode::Substring,
            select_all_scope: SelectAllScope::Page,
            show_help: true,
        }
    }
}

impl GridConfig {
    /// Parses and validates a TOML document.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Serializes to TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::InvalidConfig(e.to_string()))
    }

    /// Rejects values the grid cannot work with.
    pub fn validate(&self) -> Result<()> {
        if self.page_size == 0 {
            return Err(Error::InvalidConfig(
                "page_size must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GridConfig::default();
        assert!(!config.loading);
        assert!(config.searchable && config.filterable && config.exportable);
        assert!(config.selectable && config.show_pagination && config.show_help);
        assert_eq!(config.page_size, 10);
        assert_eq!(config.empty_message, "No data available");
        assert_eq!(config.search_mode, SearchMode::Substring);
        assert_eq!(config.select_all_scope, SelectAllScope::Page);
    }

    #[test]
    fn test_empty_document_is_default() {
        assert_eq!(GridConfig::from_toml_str("").unwrap(), GridConfig::default());
    }

    #[test]
    fn test_partial_document() {
        let config = GridConfig::from_toml_str(
            r#"
            searchable = false
            empty_message = "No vendors yet"
            search_mode = "fuzzy"
            "#,
        )
        .unwrap();
        assert!(!config.searchable);
        assert_eq!(config.empty_message, "No vendors yet");
        assert_eq!(config.search_mode, SearchMode::Fuzzy);
        assert_eq!(config.page_size, 10);
    }

    #[test]
    fn test_unknown_key_rejected() {
        let err = GridConfig::from_toml_str("pagesize = 5").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_zero_page_size_rejected() {
        let err = GridConfig::from_toml_str("page_size = 0").unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)));
    }

    #[test]
    fn test_toml_round_trip_keeps_title() {
        let config = GridConfig {
            title: Some("Tax Rates".into()),
            ..GridConfig::default()
        };
        let text = config.to_toml_string().unwrap();
        assert_eq!(GridConfig::from_toml_str(&text).unwrap(), config);
    }
}
