//! The ordered table mapping keywords to resolvers.
//!
//! A [`Registry`] is built once and only read afterwards, so a single
//! instance can be shared across threads without synchronization. Entries are
//! tried in registration order and the first full match wins.

use std::fmt;
use std::sync::OnceLock;

use chrono::NaiveDate;

use crate::error::{RangeError, Result};
use crate::range::DateRange;
use crate::resolver::{self, Resolver};
use crate::ResolveOptions;

// ── Matchers ────────────────────────────────────────────────────────────────

/// How a registry entry recognizes its keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Matcher {
    /// The input must equal this keyword exactly.
    Exact(&'static str),
    /// The input must be `prefix`, one or more ASCII digits, then `suffix`.
    Templated {
        prefix: &'static str,
        suffix: &'static str,
    },
}

/// What a successful match captured from the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capture<'a> {
    /// A literal keyword; it resolves with a count of one.
    Literal,
    /// The digit run embedded in a templated keyword, not yet range-checked.
    Digits(&'a str),
}

impl Matcher {
    /// Match the entire input, case-sensitively.
    pub fn capture<'a>(&self, input: &'a str) -> Option<Capture<'a>> {
        match *self {
            Matcher::Exact(keyword) => (input == keyword).then_some(Capture::Literal),
            Matcher::Templated { prefix, suffix } => {
                let digits = input.strip_prefix(prefix)?.strip_suffix(suffix)?;
                let all_digits = !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit());
                all_digits.then_some(Capture::Digits(digits))
            }
        }
    }
}

impl fmt::Display for Matcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Matcher::Exact(keyword) => f.write_str(keyword),
            Matcher::Templated { prefix, suffix } => write!(f, "{prefix}<n>{suffix}"),
        }
    }
}

// ── Entries ─────────────────────────────────────────────────────────────────

/// A matcher bound to the rule that computes its range.
#[derive(Clone, Copy)]
pub struct PatternEntry {
    pub matcher: Matcher,
    pub resolver: Resolver,
}

impl PatternEntry {
    pub const fn exact(keyword: &'static str, resolver: Resolver) -> Self {
        Self {
            matcher: Matcher::Exact(keyword),
            resolver,
        }
    }

    pub const fn templated(prefix: &'static str, suffix: &'static str, resolver: Resolver) -> Self {
        Self {
            matcher: Matcher::Templated { prefix, suffix },
            resolver,
        }
    }
}

impl fmt::Debug for PatternEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PatternEntry")
            .field("matcher", &self.matcher)
            .finish_non_exhaustive()
    }
}

/// The standard vocabulary. Literal aliases share the resolver of their family.
const STANDARD_ENTRIES: &[PatternEntry] = &[
    PatternEntry::exact("today", resolver::this_days),
    PatternEntry::exact("this_day", resolver::this_days),
    PatternEntry::exact("this_week", resolver::this_weeks),
    PatternEntry::exact("this_month", resolver::this_months),
    PatternEntry::exact("this_year", resolver::this_years),
    PatternEntry::templated("this_", "_days", resolver::this_days),
    PatternEntry::templated("this_", "_weeks", resolver::this_weeks),
    PatternEntry::templated("this_", "_months", resolver::this_months),
    PatternEntry::templated("this_", "_years", resolver::this_years),
    PatternEntry::exact("tomorrow", resolver::next_days),
    PatternEntry::exact("next_day", resolver::next_days),
    PatternEntry::exact("yesterday", resolver::previous_days),
    PatternEntry::exact("previous_day", resolver::previous_days),
    PatternEntry::templated("next_", "_days", resolver::next_days),
    PatternEntry::exact("next_week", resolver::next_weeks),
    PatternEntry::templated("next_", "_weeks", resolver::next_weeks),
    PatternEntry::exact("next_month", resolver::next_months),
    PatternEntry::templated("next_", "_months", resolver::next_months),
    PatternEntry::exact("next_year", resolver::next_years),
    PatternEntry::templated("next_", "_years", resolver::next_years),
    PatternEntry::templated("previous_", "_days", resolver::previous_days),
    PatternEntry::templated("previous_", "_weeks", resolver::previous_weeks),
    PatternEntry::exact("previous_week", resolver::previous_weeks),
    PatternEntry::templated("previous_", "_months", resolver::previous_months),
    PatternEntry::exact("previous_month", resolver::previous_months),
    PatternEntry::templated("previous_", "_years", resolver::previous_years),
    PatternEntry::exact("previous_year", resolver::previous_years),
];

// ── Registry ────────────────────────────────────────────────────────────────

/// An immutable, ordered list of pattern entries.
#[derive(Debug, Clone)]
pub struct Registry {
    entries: Vec<PatternEntry>,
}

impl Registry {
    /// A registry over a custom table. Earlier entries take priority.
    pub fn new(entries: Vec<PatternEntry>) -> Self {
        Self { entries }
    }

    /// The standard keyword vocabulary.
    pub fn standard() -> Self {
        Self::new(STANDARD_ENTRIES.to_vec())
    }

    pub fn entries(&self) -> &[PatternEntry] {
        &self.entries
    }

    /// Accepted keywords and templates in registration order, e.g. `this_<n>_days`.
    pub fn keywords(&self) -> Vec<String> {
        self.entries.iter().map(|e| e.matcher.to_string()).collect()
    }

    /// The first entry matching the whole input, with what it captured.
    pub fn find<'a>(&self, input: &'a str) -> Option<(&PatternEntry, Capture<'a>)> {
        self.entries
            .iter()
            .find_map(|entry| entry.matcher.capture(input).map(|c| (entry, c)))
    }

    /// Resolve `input` against `reference`.
    ///
    /// # Errors
    ///
    /// - [`RangeError::Parse`] if no entry matches the input.
    /// - [`RangeError::InvalidCount`] if the embedded count is zero or exceeds `u32`.
    /// - [`RangeError::OutOfRange`] if the range leaves the supported calendar.
    pub fn resolve(
        &self,
        input: &str,
        reference: NaiveDate,
        options: &ResolveOptions,
    ) -> Result<DateRange> {
        let Some((entry, capture)) = self.find(input) else {
            tracing::debug!(input, "no pattern matched");
            return Err(RangeError::Parse {
                input: input.to_string(),
            });
        };

        let count = match capture {
            Capture::Literal => 1,
            Capture::Digits(digits) => parse_count(input, digits)?,
        };

        let range = (entry.resolver)(reference, count, options.week_start).ok_or_else(|| {
            RangeError::OutOfRange {
                input: input.to_string(),
            }
        })?;

        tracing::debug!(
            input,
            pattern = %entry.matcher,
            count,
            %reference,
            %range,
            "resolved date range"
        );
        Ok(range)
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::standard()
    }
}

/// The process-wide standard registry, built on first use.
pub fn standard_registry() -> &'static Registry {
    static REGISTRY: OnceLock<Registry> = OnceLock::new();
    REGISTRY.get_or_init(Registry::standard)
}

/// Range-check a captured digit run; counts start at 1.
fn parse_count(input: &str, digits: &str) -> Result<u32> {
    match digits.parse::<u32>() {
        Ok(n) if n >= 1 => Ok(n),
        _ => Err(RangeError::InvalidCount {
            input: input.to_string(),
            count: digits.to_string(),
        }),
    }
}
