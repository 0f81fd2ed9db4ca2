use crate::config::DigestConfig;
use crate::error::Result;
use crate::types::{CareerHighlightMap, HighlightKey};
use chrono::{Datelike, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

/// First four-digit run starting with 19 or 20, anywhere in the entry.
/// ASCII digits only; `\d` would also accept other Unicode decimal digits.
static YEAR_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:19|20)[0-9]{2}").expect("year pattern is valid"));

const ENTRY_SEPARATOR: char = ';';
const BODY_SEPARATOR: char = '@';

/// Why a digest entry was dropped or only partially classified
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DigestIssue {
    /// No year found in the entry
    UnparseableEntry,
    /// Year precedes the retention window
    StaleEntry { year: i32, minimum_year: i32 },
    /// Year is after the reference year (only with an enforced upper bound)
    FutureEntry { year: i32, reference_year: i32 },
    /// Nothing after the `@` marker, or no marker at all
    EmptyBody { year: i32 },
    /// Title matched no known label; the entry is kept under `Unknown`
    UnknownCategory { year: i32, title: String },
}

impl DigestIssue {
    /// Whether the entry contributed nothing to the output
    #[must_use]
    pub const fn is_dropped(&self) -> bool {
        !matches!(self, Self::UnknownCategory { .. })
    }
}

/// A digest entry that was dropped or degraded
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportedEntry {
    /// Zero-based position in the `;`-separated digest
    pub index: usize,
    /// Raw entry text
    pub entry: String,
    pub issue: DigestIssue,
}

/// Parsed highlights plus every entry that did not parse cleanly
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParseReport {
    pub highlights: CareerHighlightMap,
    pub issues: Vec<ReportedEntry>,
}

impl ParseReport {
    /// Entries that contributed nothing
    pub fn dropped(&self) -> impl Iterator<Item = &ReportedEntry> {
        self.issues.iter().filter(|reported| reported.issue.is_dropped())
    }
}

/// Turns event digests into year-keyed career highlights
#[derive(Debug, Clone, Default)]
pub struct DigestParser {
    config: DigestConfig,
}

impl DigestParser {
    /// Create a parser with a validated configuration
    pub fn new(config: DigestConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    #[must_use]
    pub const fn config(&self) -> &DigestConfig {
        &self.config
    }

    /// Parse `digest` relative to the year of `now`
    pub fn parse(&self, digest: &str, now: &impl Datelike) -> CareerHighlightMap {
        self.parse_year(digest, now.year())
    }

    /// Parse `digest` relative to an explicit reference year
    pub fn parse_year(&self, digest: &str, reference_year: i32) -> CareerHighlightMap {
        self.parse_year_with_report(digest, reference_year)
            .highlights
    }

    /// Parse and keep a record of dropped and unclassified entries
    pub fn parse_with_report(&self, digest: &str, now: &impl Datelike) -> ParseReport {
        self.parse_year_with_report(digest, now.year())
    }

    pub fn parse_year_with_report(&self, digest: &str, reference_year: i32) -> ParseReport {
        let mut report = ParseReport::default();
        if digest.is_empty() {
            return report;
        }

        let minimum_year = self.config.minimum_year(reference_year);
        for (index, entry) in digest.split(ENTRY_SEPARATOR).enumerate() {
            // Trailing or doubled separators leave blank segments behind
            if entry.trim().is_empty() {
                continue;
            }
            if let Some(issue) = self.accept_entry(
                entry,
                reference_year,
                minimum_year,
                &mut report.highlights,
            ) {
                if issue.is_dropped() {
                    log::debug!("Dropped digest entry {index} ({entry:?}): {issue:?}");
                } else {
                    log::debug!("Unclassified digest entry {index} ({entry:?})");
                }
                report.issues.push(ReportedEntry {
                    index,
                    entry: entry.to_string(),
                    issue,
                });
            }
        }

        log::trace!(
            "Parsed digest into {} year(s), {} issue(s)",
            report.highlights.len(),
            report.issues.len()
        );
        report
    }

    fn accept_entry(
        &self,
        entry: &str,
        reference_year: i32,
        minimum_year: i32,
        highlights: &mut CareerHighlightMap,
    ) -> Option<DigestIssue> {
        let Some(found) = YEAR_PATTERN.find(entry) else {
            return Some(DigestIssue::UnparseableEntry);
        };
        let year_str = found.as_str();
        let Ok(year) = year_str.parse::<i32>() else {
            return Some(DigestIssue::UnparseableEntry);
        };

        if year < minimum_year {
            return Some(DigestIssue::StaleEntry { year, minimum_year });
        }
        if self.config.enforce_upper_bound && year > reference_year {
            return Some(DigestIssue::FutureEntry {
                year,
                reference_year,
            });
        }

        let remainder = entry.replacen(year_str, "", 1);
        let remainder = remainder.trim();
        let (title, body) = match remainder.split_once(BODY_SEPARATOR) {
            Some((title, body)) => (title.trim(), body.trim()),
            None => (remainder, ""),
        };
        if body.is_empty() {
            return Some(DigestIssue::EmptyBody { year });
        }

        let key = HighlightKey::from_title(title);
        if !highlights.year_mut(year).insert(key, body) {
            log::trace!("Duplicate {key} entry for {year}: {body:?}");
        }

        match key {
            HighlightKey::Unknown => Some(DigestIssue::UnknownCategory {
                year,
                title: title.to_string(),
            }),
            HighlightKey::Category(_) => None,
        }
    }
}

/// Parse `digest` with the default retention window
pub fn parse(digest: &str, now: &impl Datelike) -> CareerHighlightMap {
    DigestParser::default().parse(digest, now)
}

/// Parse `digest` relative to today's date (UTC)
pub fn parse_current(digest: &str) -> CareerHighlightMap {
    parse(digest, &Utc::now())
}
