//! Include/exclude filtering along a single axis.

use super::pattern::PatternSet;
use crate::error::Result;
use serde::Serialize;

/// Which rule an [`AxisFilter`] applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AxisMode {
    /// Neither list configured; every candidate is allowed
    Unconstrained,
    /// Only candidates matching the include list are allowed
    Include,
    /// Candidates matching the exclude list are rejected
    Exclude,
}

impl std::fmt::Display for AxisMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unconstrained => write!(f, "unconstrained"),
            Self::Include => write!(f, "include"),
            Self::Exclude => write!(f, "exclude"),
        }
    }
}

/// Include and exclude pattern sets for one axis.
///
/// A non-empty include list takes precedence: the exclude list is then never
/// consulted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AxisFilter {
    include: PatternSet,
    exclude: PatternSet,
}

impl AxisFilter {
    /// Parses both specifications into an axis filter.
    ///
    /// # Errors
    /// Returns [`SelectorError::InvalidPattern`](crate::SelectorError::InvalidPattern)
    /// if either list contains a token that does not compile.
    pub fn new(include_spec: &str, exclude_spec: &str) -> Result<Self> {
        Ok(Self::from_sets(
            PatternSet::parse(include_spec)?,
            PatternSet::parse(exclude_spec)?,
        ))
    }

    /// Builds an axis filter from already parsed sets.
    pub const fn from_sets(include: PatternSet, exclude: PatternSet) -> Self {
        Self { include, exclude }
    }

    /// Decides whether `candidate` passes this axis.
    #[inline]
    pub fn allows(&self, candidate: &str) -> bool {
        match self.mode() {
            AxisMode::Include => self.include.matches_any(candidate),
            AxisMode::Exclude => !self.exclude.matches_any(candidate),
            AxisMode::Unconstrained => true,
        }
    }

    /// Returns the rule currently in force.
    pub fn mode(&self) -> AxisMode {
        if !self.include.is_empty() {
            AxisMode::Include
        } else if !self.exclude.is_empty() {
            AxisMode::Exclude
        } else {
            AxisMode::Unconstrained
        }
    }

    /// Returns true when neither list is configured.
    pub fn is_unconstrained(&self) -> bool {
        self.mode() == AxisMode::Unconstrained
    }

    /// Returns true when both lists are configured, so the exclude list is dead.
    pub fn exclude_ignored(&self) -> bool {
        !self.include.is_empty() && !self.exclude.is_empty()
    }

    /// The include pattern set.
    pub const fn include(&self) -> &PatternSet {
        &self.include
    }

    /// The exclude pattern set.
    pub const fn exclude(&self) -> &PatternSet {
        &self.exclude
    }
}
