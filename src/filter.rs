// Extension filter predicate.
// Decides whether a record is reported and how it is flagged.

use regex::{Regex, RegexBuilder};

use crate::catalog::Extension;
use crate::error::Result;

/// Why a record was selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchKind {
    /// Written by the highlighted creator.
    Creator,
    /// Name or description matches the keyword pattern.
    Keyword,
}

/// Selection criteria for the report.
#[derive(Debug, Clone)]
pub struct Matcher {
    creator: String,
    pattern: Regex,
    current_version: String,
}

impl Matcher {
    /// Build a matcher. The pattern is case-insensitive and spans lines.
    pub fn new(creator: &str, pattern: &str, current_version: &str) -> Result<Self> {
        let pattern = RegexBuilder::new(pattern)
            .case_insensitive(true)
            .multi_line(true)
            .dot_matches_new_line(true)
            .build()?;

        Ok(Self {
            creator: creator.to_string(),
            pattern,
            current_version: current_version.to_string(),
        })
    }

    pub fn classify(&self, extension: &Extension) -> Option<MatchKind> {
        if extension.creator() == Some(self.creator.as_str()) {
            Some(MatchKind::Creator)
        } else if self.pattern.is_match(&extension.search_text()) {
            Some(MatchKind::Keyword)
        } else {
            None
        }
    }

    /// True when the record has no release for the current shell version.
    pub fn is_old(&self, extension: &Extension) -> bool {
        !extension.supports_shell(&self.current_version)
    }
}
