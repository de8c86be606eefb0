//! Library module for the dbselect CLI
//!
//! Argument parsing and command implementations live here so they can be
//! tested without spawning the binary. The entry point is in main.rs.

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use dbselect_core::{AxisFilter, AxisMode, SelectorConfig, TableId, TableSelector};
use serde::Serialize;
use std::io::{BufRead, Write};
use std::path::PathBuf;
use tracing::{debug, error, info};

/// CLI argument structure
#[derive(Debug, Parser)]
#[command(name = "dbselect")]
#[command(about = "Check table identifiers against CDC include/exclude lists")]
#[command(version)]
#[command(long_about = "
dbselect - table selection for change-data-capture connectors

Each list is a comma-separated set of regular expressions that must match
the whole name. Database lists match the database name; table lists match
'database.table', so literal dots must be escaped (db1\\.orders).

On each axis an include list wins over an exclude list. A table is selected
only when both the database axis and the table axis allow it.

EXAMPLES:
  dbselect --include-databases db1,db2 check db1.orders db3.orders
  dbselect --exclude-tables 'db1\\.audit' filter < tables.txt
  dbselect --config selector.json show --json
")]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(flatten)]
    pub selector: SelectorArgs,

    #[command(subcommand)]
    pub command: Command,
}

/// Verbosity flags shared by every command
#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// Increase verbosity
    #[arg(
        short,
        long,
        global = true,
        action = clap::ArgAction::Count,
        help = "Increase verbosity (-v, -vv)"
    )]
    pub verbose: u8,

    /// Suppress output
    #[arg(
        short,
        long,
        global = true,
        help = "Suppress all log output except errors"
    )]
    pub quiet: bool,
}

/// Selector lists, from flags or environment
#[derive(Debug, Default, Args)]
pub struct SelectorArgs {
    /// JSON configuration file
    #[arg(long, value_name = "FILE", env = "DBSELECT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Database names to include
    #[arg(long, value_name = "PATTERNS", env = "DBSELECT_INCLUDE_DATABASES")]
    pub include_databases: Option<String>,

    /// Database names to exclude
    #[arg(long, value_name = "PATTERNS", env = "DBSELECT_EXCLUDE_DATABASES")]
    pub exclude_databases: Option<String>,

    /// Qualified table names to include
    #[arg(long, value_name = "PATTERNS", env = "DBSELECT_INCLUDE_TABLES")]
    pub include_tables: Option<String>,

    /// Qualified table names to exclude
    #[arg(long, value_name = "PATTERNS", env = "DBSELECT_EXCLUDE_TABLES")]
    pub exclude_tables: Option<String>,
}

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Report whether each identifier is selected
    Check {
        /// Identifiers as database.table or database.schema.table
        #[arg(required = true, value_name = "ID")]
        ids: Vec<String>,
    },
    /// Read identifiers from stdin and print the selected ones
    Filter,
    /// Print the effective selector configuration
    Show {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
}

impl SelectorArgs {
    /// Resolves the configuration: file values first, then flags and
    /// environment variables on top.
    ///
    /// # Errors
    /// Returns an error if the configuration file cannot be read or parsed.
    pub fn resolve(&self) -> anyhow::Result<SelectorConfig> {
        let base = match &self.config {
            Some(path) => SelectorConfig::from_file(path)
                .with_context(|| format!("loading {}", path.display()))?,
            None => SelectorConfig::new(),
        };

        Ok(base.merge(SelectorConfig {
            include_databases: self.include_databases.clone(),
            exclude_databases: self.exclude_databases.clone(),
            include_tables: self.include_tables.clone(),
            exclude_tables: self.exclude_tables.clone(),
        }))
    }

    /// Resolves the configuration and builds the selector.
    ///
    /// # Errors
    /// Returns an error for unreadable configuration or invalid patterns.
    pub fn build_selector(&self) -> anyhow::Result<TableSelector> {
        let config = self.resolve()?;
        config
            .build_selector()
            .context("invalid table selection configuration")
    }
}

fn verdict(selected: bool) -> &'static str {
    if selected { "allowed" } else { "excluded" }
}

/// Writes `<id>\t<allowed|excluded>` for each identifier.
///
/// Returns false if any identifier could not be parsed; those are logged
/// and skipped.
///
/// # Errors
/// Returns an error if writing to `out` fails.
pub fn run_check<W: Write>(
    selector: &TableSelector,
    ids: &[String],
    out: &mut W,
) -> anyhow::Result<bool> {
    let mut all_valid = true;
    for raw in ids {
        match TableId::parse(raw) {
            Ok(id) => writeln!(out, "{id}\t{}", verdict(selector.test(&id)))?,
            Err(e) => {
                error!("{e}");
                all_valid = false;
            }
        }
    }
    Ok(all_valid)
}

/// Copies selected identifiers from `input` to `out`, one per line.
///
/// Blank lines and lines starting with `#` are skipped. Returns the number
/// of identifiers read and the number selected.
///
/// # Errors
/// Returns an error on I/O failure or an unparsable identifier, naming the
/// line number.
pub fn run_filter<R: BufRead, W: Write>(
    selector: &TableSelector,
    input: R,
    out: &mut W,
) -> anyhow::Result<(usize, usize)> {
    let mut seen = 0usize;
    let mut selected = 0usize;

    for (index, line) in input.lines().enumerate() {
        let line = line.context("reading identifiers")?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let id = TableId::parse(trimmed)
            .with_context(|| format!("line {}", index.saturating_add(1)))?;
        seen = seen.saturating_add(1);
        if selector.test(&id) {
            selected = selected.saturating_add(1);
            writeln!(out, "{id}")?;
        } else {
            debug!("Excluded {id}");
        }
    }

    info!("Selected {selected} of {seen} tables");
    Ok((seen, selected))
}

/// Serializable view of one axis.
#[derive(Debug, Serialize)]
pub struct AxisSummary {
    pub mode: AxisMode,
    pub include: Vec<String>,
    pub exclude: Vec<String>,
}

impl From<&AxisFilter> for AxisSummary {
    fn from(axis: &AxisFilter) -> Self {
        let owned = |patterns: Vec<&str>| patterns.into_iter().map(str::to_string).collect();
        Self {
            mode: axis.mode(),
            include: owned(axis.include().patterns()),
            exclude: owned(axis.exclude().patterns()),
        }
    }
}

/// Serializable view of a selector.
#[derive(Debug, Serialize)]
pub struct SelectorSummary {
    pub databases: AxisSummary,
    pub tables: AxisSummary,
}

impl From<&TableSelector> for SelectorSummary {
    fn from(selector: &TableSelector) -> Self {
        Self {
            databases: selector.database_filter().into(),
            tables: selector.table_filter().into(),
        }
    }
}

/// Prints the effective per-axis configuration.
///
/// # Errors
/// Returns an error if writing or serialization fails.
pub fn run_show<W: Write>(selector: &TableSelector, json: bool, out: &mut W) -> anyhow::Result<()> {
    let summary = SelectorSummary::from(selector);
    if json {
        serde_json::to_writer_pretty(&mut *out, &summary)?;
        writeln!(out)?;
        return Ok(());
    }

    for (name, axis) in [("databases", &summary.databases), ("tables", &summary.tables)] {
        writeln!(out, "{name}: {}", axis.mode)?;
        if !axis.include.is_empty() {
            writeln!(out, "  include: {}", axis.include.join(","))?;
        }
        if !axis.exclude.is_empty() {
            let note = if axis.mode == AxisMode::Include {
                " (ignored)"
            } else {
                ""
            };
            writeln!(out, "  exclude: {}{note}", axis.exclude.join(","))?;
        }
    }
    Ok(())
}
