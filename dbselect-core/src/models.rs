//! Table identifier model.
//!
//! A [`TableId`] names a table the way change-data-capture connectors see it:
//! a database (catalog), an optional schema, and a table name.

use crate::error::{Result, SelectorError};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Identifier of a table encountered during discovery or streaming.
///
/// Only `database` and `table` take part in selection. The schema is carried
/// for display and for collaborators that need it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TableId {
    pub database: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,
    pub table: String,
}

impl TableId {
    /// Creates an identifier without a schema component.
    pub fn new(database: impl Into<String>, table: impl Into<String>) -> Self {
        Self {
            database: database.into(),
            schema: None,
            table: table.into(),
        }
    }

    /// Creates an identifier with a schema component.
    pub fn with_schema(
        database: impl Into<String>,
        schema: impl Into<String>,
        table: impl Into<String>,
    ) -> Self {
        Self {
            database: database.into(),
            schema: Some(schema.into()),
            table: table.into(),
        }
    }

    /// Returns the `database.table` string matched by table patterns.
    ///
    /// The schema is never part of this string, even when present.
    pub fn match_string(&self) -> String {
        format!("{}.{}", self.database, self.table)
    }

    /// Parses `database.table` or `database.schema.table`.
    ///
    /// # Errors
    /// Returns [`SelectorError::InvalidTableId`] for any other number of
    /// parts or when a part is empty.
    ///
    /// # Example
    /// ```rust
    /// use dbselect_core::TableId;
    ///
    /// let id = TableId::parse("inventory.public.orders").unwrap();
    /// assert_eq!(id.database, "inventory");
    /// assert_eq!(id.schema.as_deref(), Some("public"));
    /// assert_eq!(id.match_string(), "inventory.orders");
    /// ```
    pub fn parse(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        let parts: Vec<&str> = trimmed.split('.').collect();
        if parts.iter().any(|part| part.is_empty()) {
            return Err(SelectorError::invalid_table_id(input));
        }

        match parts.as_slice() {
            [database, table] => Ok(Self::new(*database, *table)),
            [database, schema, table] => Ok(Self::with_schema(*database, *schema, *table)),
            _ => Err(SelectorError::invalid_table_id(input)),
        }
    }
}

impl FromStr for TableId {
    type Err = SelectorError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl std::fmt::Display for TableId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.schema {
            Some(schema) => write!(f, "{}.{}.{}", self.database, schema, self.table),
            None => write!(f, "{}.{}", self.database, self.table),
        }
    }
}
