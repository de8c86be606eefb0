//! Selector configuration document.
//!
//! Connectors usually receive the four lists as string properties. This
//! module gives them a serde representation that accepts both the plain
//! field names and the dotted connector-style property names.

use crate::error::{Result, SelectorError};
use crate::filter::{TableSelector, TableSelectorBuilder};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// The four raw comma-separated pattern lists.
///
/// Missing and blank values both mean "not configured".
///
/// # Example
/// ```rust
/// use dbselect_core::{SelectorConfig, TableId};
///
/// let config = SelectorConfig::from_json_str(
///     r#"{ "database.include.list": "db1", "table.exclude.list": "db1\\.audit" }"#,
/// )
/// .unwrap();
///
/// let selector = config.build_selector().unwrap();
/// assert!(selector.test(&TableId::new("db1", "orders")));
/// assert!(!selector.test(&TableId::new("db1", "audit")));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SelectorConfig {
    /// Database names to include
    #[serde(
        default,
        alias = "database.include.list",
        alias = "database.whitelist",
        skip_serializing_if = "Option::is_none"
    )]
    pub include_databases: Option<String>,

    /// Database names to exclude (ignored when `include_databases` is set)
    #[serde(
        default,
        alias = "database.exclude.list",
        alias = "database.blacklist",
        skip_serializing_if = "Option::is_none"
    )]
    pub exclude_databases: Option<String>,

    /// `database.table` names to include
    #[serde(
        default,
        alias = "table.include.list",
        alias = "table.whitelist",
        skip_serializing_if = "Option::is_none"
    )]
    pub include_tables: Option<String>,

    /// `database.table` names to exclude (ignored when `include_tables` is set)
    #[serde(
        default,
        alias = "table.exclude.list",
        alias = "table.blacklist",
        skip_serializing_if = "Option::is_none"
    )]
    pub exclude_tables: Option<String>,
}

impl SelectorConfig {
    /// Creates an empty configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a JSON configuration document.
    ///
    /// # Errors
    /// Returns [`SelectorError::Serialization`] if the document is not a
    /// valid configuration object.
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json)
            .map_err(|e| SelectorError::serialization("Failed to parse selector configuration", e))
    }

    /// Reads a JSON configuration file.
    ///
    /// # Errors
    /// Returns [`SelectorError::Io`] if the file cannot be read, or
    /// [`SelectorError::Serialization`] if it is not a valid configuration.
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            SelectorError::io(
                format!("Failed to read configuration file {}", path.display()),
                e,
            )
        })?;
        tracing::debug!("Loaded selector configuration from {}", path.display());
        Self::from_json_str(&contents)
    }

    /// Overlays every value set in `other` onto this configuration.
    #[must_use]
    pub fn merge(mut self, other: Self) -> Self {
        if other.include_databases.is_some() {
            self.include_databases = other.include_databases;
        }
        if other.exclude_databases.is_some() {
            self.exclude_databases = other.exclude_databases;
        }
        if other.include_tables.is_some() {
            self.include_tables = other.include_tables;
        }
        if other.exclude_tables.is_some() {
            self.exclude_tables = other.exclude_tables;
        }
        self
    }

    /// Converts the configuration into a selector builder.
    pub fn to_builder(&self) -> TableSelectorBuilder {
        let value = |v: &Option<String>| v.clone().unwrap_or_default();
        TableSelector::builder()
            .include_databases(value(&self.include_databases))
            .exclude_databases(value(&self.exclude_databases))
            .include_tables(value(&self.include_tables))
            .exclude_tables(value(&self.exclude_tables))
    }

    /// Builds the selector described by this configuration.
    ///
    /// # Errors
    /// Returns [`SelectorError::InvalidPattern`] for the first list entry
    /// that does not compile.
    pub fn build_selector(&self) -> Result<TableSelector> {
        self.to_builder().build()
    }

    /// Validates the configuration by compiling every list.
    ///
    /// # Errors
    /// Same as [`SelectorConfig::build_selector`].
    pub fn validate(&self) -> Result<()> {
        self.build_selector().map(|_| ())
    }
}
