//! Include/exclude table selection.
//!
//! Selection runs along two independent axes:
//! - the database name, and
//! - the `database.table` string of each table.
//!
//! Each axis has an include list and an exclude list of full-match regular
//! expressions. On one axis a configured include list wins and the exclude
//! list is ignored. A table is selected only if both axes allow it.

mod axis;
mod pattern;
mod selector;

pub use axis::{AxisFilter, AxisMode};
pub use pattern::{Pattern, PatternSet};
pub use selector::{TableSelector, TableSelectorBuilder};
