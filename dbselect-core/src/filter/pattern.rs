//! Compiled full-match patterns and comma-separated pattern sets.

use crate::error::{Result, SelectorError};
use regex::Regex;

/// A single compiled pattern.
///
/// The pattern must match the whole candidate, so `db` matches `db` but not
/// `db1`. Matching is case-sensitive.
#[derive(Debug, Clone)]
pub struct Pattern {
    /// Token as configured (for display/debugging)
    source: String,
    /// Compiled regex anchored at both ends
    regex: Regex,
}

impl Pattern {
    /// Compiles a single token into a full-match pattern.
    ///
    /// # Errors
    /// Returns [`SelectorError::InvalidPattern`] if the token is not a valid
    /// regular expression.
    pub fn new(source: &str) -> Result<Self> {
        // The token must be valid on its own: `a)|(b` only parses once wrapped
        Regex::new(source).map_err(|e| SelectorError::invalid_pattern(source, e))?;

        // Non-capturing group keeps alternations like `a|b` inside the anchors
        let anchored = format!("^(?:{source})$");
        let regex =
            Regex::new(&anchored).map_err(|e| SelectorError::invalid_pattern(source, e))?;

        Ok(Self {
            source: source.to_string(),
            regex,
        })
    }

    /// Returns true if `candidate` matches this pattern in its entirety.
    #[inline]
    pub fn matches(&self, candidate: &str) -> bool {
        self.regex.is_match(candidate)
    }

    /// Returns the token this pattern was compiled from.
    pub fn as_str(&self) -> &str {
        &self.source
    }
}

impl PartialEq for Pattern {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source
    }
}

impl Eq for Pattern {}

impl std::fmt::Display for Pattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.source)
    }
}

/// An ordered set of distinct patterns parsed from a comma-separated list.
///
/// An empty set means the list was not configured and never matches.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PatternSet {
    patterns: Vec<Pattern>,
}

impl PatternSet {
    /// Creates an empty pattern set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a comma-separated specification.
    ///
    /// Tokens are trimmed and empty tokens dropped, so `""`, `"  "` and `" , "`
    /// all produce the empty set. Repeated tokens keep their first position.
    ///
    /// # Errors
    /// Returns [`SelectorError::InvalidPattern`] naming the first token that
    /// fails to compile.
    ///
    /// # Example
    /// ```rust
    /// use dbselect_core::PatternSet;
    ///
    /// let set = PatternSet::parse(r"db1\.A, db1\.B").unwrap();
    /// assert_eq!(set.len(), 2);
    /// assert!(set.matches_any("db1.A"));
    /// assert!(!set.matches_any("db1.AB"));
    /// ```
    pub fn parse(raw: &str) -> Result<Self> {
        let mut set = Self::new();
        for token in raw.split(',').map(str::trim).filter(|t| !t.is_empty()) {
            if set.contains(token) {
                continue;
            }
            set.patterns.push(Pattern::new(token)?);
        }
        Ok(set)
    }

    /// Parses an optional specification; `None` is the empty set.
    ///
    /// # Errors
    /// Same as [`PatternSet::parse`].
    pub fn parse_optional(raw: Option<&str>) -> Result<Self> {
        raw.map_or_else(|| Ok(Self::new()), Self::parse)
    }

    /// Returns true if `candidate` fully matches at least one pattern.
    #[inline]
    pub fn matches_any(&self, candidate: &str) -> bool {
        self.patterns.iter().any(|p| p.matches(candidate))
    }

    /// Returns true if no patterns were configured.
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Returns the number of distinct patterns.
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// Iterates over the patterns in configuration order.
    pub fn iter(&self) -> impl Iterator<Item = &Pattern> {
        self.patterns.iter()
    }

    /// Returns the configured tokens in order.
    pub fn patterns(&self) -> Vec<&str> {
        self.patterns.iter().map(Pattern::as_str).collect()
    }

    fn contains(&self, token: &str) -> bool {
        self.patterns.iter().any(|p| p.source == token)
    }
}

impl std::fmt::Display for PatternSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.patterns().join(","))
    }
}
