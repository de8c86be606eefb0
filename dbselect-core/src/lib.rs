//! Table selection predicates for change-data-capture connectors.
//!
//! A connector is configured once with include/exclude lists for database
//! names and for `database.table` names. This crate compiles those lists
//! into a [`TableSelector`], an immutable predicate consulted for every
//! table seen during schema discovery and streaming.
//!
//! # Guarantees
//! - All pattern errors surface when the selector is built
//! - Evaluating a built selector never fails and has no side effects
//! - A built selector is `Send + Sync` and can be shared freely
//!
//! # Example
//! ```rust
//! use dbselect_core::{TableId, TableSelector};
//!
//! let selector = TableSelector::builder()
//!     .exclude_databases("db3,db4")
//!     .exclude_tables(r"db1\.A,db1\.B,db2\.C")
//!     .build()
//!     .unwrap();
//!
//! assert!(!selector.test(&TableId::new("db1", "A")));
//! assert!(selector.test(&TableId::new("db1", "D")));
//! assert!(!selector.test(&TableId::new("db3", "A")));
//! ```

pub mod config;
pub mod error;
pub mod filter;
pub mod logging;
pub mod models;

// Re-export commonly used types
pub use config::SelectorConfig;
pub use error::{Result, SelectorError};
pub use filter::{AxisFilter, AxisMode, Pattern, PatternSet, TableSelector, TableSelectorBuilder};
pub use logging::init_logging;
pub use models::TableId;
