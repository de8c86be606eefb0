//! Table selector and its builder.
//!
//! The builder accumulates the four raw specifications; [`TableSelector`] is
//! the frozen predicate produced from them.

use super::axis::AxisFilter;
use crate::error::Result;
use crate::models::TableId;
use tracing::{debug, trace, warn};

/// Immutable predicate deciding which tables are replicated.
///
/// A table passes when its database passes the database axis and its
/// `database.table` string passes the table axis.
///
/// # Example
/// ```rust
/// use dbselect_core::{TableId, TableSelector};
///
/// let selector = TableSelector::builder()
///     .include_databases("db1,db2")
///     .include_tables(r"db1\.A,db1\.B,db2\.C")
///     .build()
///     .unwrap();
///
/// assert!(selector.test(&TableId::new("db1", "A")));
/// assert!(!selector.test(&TableId::new("db1", "D")));
/// assert!(!selector.test(&TableId::new("db3", "A")));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableSelector {
    databases: AxisFilter,
    tables: AxisFilter,
}

impl TableSelector {
    /// Starts a new builder with no lists configured.
    pub fn builder() -> TableSelectorBuilder {
        TableSelectorBuilder::default()
    }

    /// A selector that allows every table.
    pub fn allow_all() -> Self {
        Self::default()
    }

    /// Decides whether the table identified by `id` is selected.
    #[inline]
    pub fn test(&self, id: &TableId) -> bool {
        self.allows(&id.database, &id.table)
    }

    /// Decides whether `database.table` is selected.
    pub fn allows(&self, database: &str, table: &str) -> bool {
        let selected = self.databases.allows(database)
            && self.tables.allows(&format!("{database}.{table}"));
        trace!(database, table, selected, "Evaluated table selection");
        selected
    }

    /// Checks the database axis alone.
    ///
    /// Useful during discovery to skip whole databases before listing their
    /// tables. A database passing this check may still have no selected
    /// tables.
    pub fn allows_database(&self, database: &str) -> bool {
        self.databases.allows(database)
    }

    /// Filters an iterator of identifiers down to the selected ones.
    pub fn select<'a, I>(&'a self, ids: I) -> impl Iterator<Item = &'a TableId> + 'a
    where
        I: IntoIterator<Item = &'a TableId>,
        I::IntoIter: 'a,
    {
        ids.into_iter().filter(move |id| self.test(id))
    }

    /// The database-name axis.
    pub const fn database_filter(&self) -> &AxisFilter {
        &self.databases
    }

    /// The `database.table` axis.
    pub const fn table_filter(&self) -> &AxisFilter {
        &self.tables
    }
}

/// Accumulates selector configuration.
///
/// Each setter takes a comma-separated list of full-match regular
/// expressions. Not calling a setter is the same as passing an empty string;
/// calling it again replaces the previous value.
#[derive(Debug, Clone, Default)]
pub struct TableSelectorBuilder {
    include_databases: String,
    exclude_databases: String,
    include_tables: String,
    exclude_tables: String,
}

impl TableSelectorBuilder {
    /// Sets the database include list.
    #[must_use]
    pub fn include_databases(mut self, spec: impl Into<String>) -> Self {
        self.include_databases = spec.into();
        self
    }

    /// Sets the database exclude list. Ignored if an include list is set.
    #[must_use]
    pub fn exclude_databases(mut self, spec: impl Into<String>) -> Self {
        self.exclude_databases = spec.into();
        self
    }

    /// Sets the table include list, matched against `database.table`.
    #[must_use]
    pub fn include_tables(mut self, spec: impl Into<String>) -> Self {
        self.include_tables = spec.into();
        self
    }

    /// Sets the table exclude list, matched against `database.table`.
    /// Ignored if an include list is set.
    #[must_use]
    pub fn exclude_tables(mut self, spec: impl Into<String>) -> Self {
        self.exclude_tables = spec.into();
        self
    }

    /// Compiles all four lists into a [`TableSelector`].
    ///
    /// # Errors
    /// Returns [`SelectorError::InvalidPattern`](crate::SelectorError::InvalidPattern)
    /// for the first token that does not compile.
    pub fn build(self) -> Result<TableSelector> {
        let databases = AxisFilter::new(&self.include_databases, &self.exclude_databases)?;
        let tables = AxisFilter::new(&self.include_tables, &self.exclude_tables)?;

        if databases.exclude_ignored() {
            warn!(
                "Both database include and exclude lists are set; ignoring exclude list '{}'",
                databases.exclude()
            );
        }
        if tables.exclude_ignored() {
            warn!(
                "Both table include and exclude lists are set; ignoring exclude list '{}'",
                tables.exclude()
            );
        }

        debug!(
            database_mode = %databases.mode(),
            database_patterns = databases.include().len().saturating_add(databases.exclude().len()),
            table_mode = %tables.mode(),
            table_patterns = tables.include().len().saturating_add(tables.exclude().len()),
            "Built table selector"
        );

        Ok(TableSelector { databases, tables })
    }
}
