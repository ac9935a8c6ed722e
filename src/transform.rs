//! Field-level reshaping of bibliography entries.
//!
//! Strips LaTeX grouping braces, rewrites "Last, First" author names as
//! "F. Last", expands journal macros and fills absent optional fields.

use std::cmp::Reverse;

use crate::bib::Entry;
use crate::journals::journal_name;

/// An entry with every field ready to be dropped into the LaTeX template.
#[derive(Debug, Clone, PartialEq)]
pub struct TransformedEntry {
    pub title: String,
    /// Authors in "F. Last" form, in original order
    pub authors: Vec<String>,
    pub month: String,
    pub year: String,
    pub journal: String,
    /// Empty when the entry has no volume
    pub volume: String,
    /// Empty when the entry has no pages
    pub pages: String,
    pub link: String,
}

/// Removes every `{` and `}` from the string.
pub fn strip_braces(s: &str) -> String {
    s.chars().filter(|c| !matches!(c, '{' | '}')).collect()
}

/// Converts a first-name portion to space-separated initials.
///
/// `"Jane Q"` becomes `"J. Q."`; a token that is already an initial keeps a
/// single period (`"J."` becomes `"J."`).
pub fn initials(first: &str) -> String {
    first
        .split_whitespace()
        .filter_map(|token| token.chars().next())
        .map(|c| format!("{}.", c))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Rewrites a "Last, First" author name as "F. Last".
///
/// Only the first comma splits the name. Names without a comma, or with an
/// empty first-name part, come back trimmed but otherwise unchanged.
///
/// # Examples
///
/// ```
/// use bib2tex::reformat_author;
///
/// assert_eq!(reformat_author("Doe, Jane Q"), "J. Q. Doe");
/// assert_eq!(reformat_author("others"), "others");
/// ```
pub fn reformat_author(author: &str) -> String {
    match author.split_once(',') {
        Some((last, first)) => {
            let last = last.trim();
            let initials = initials(first);
            if initials.is_empty() {
                last.to_string()
            } else {
                format!("{} {}", initials, last)
            }
        }
        None => author.trim().to_string(),
    }
}

/// Sorts entries by year, newest first.
///
/// The sort is stable, so entries from the same year keep their file order.
pub fn sort_by_year_desc(entries: &mut [Entry]) {
    entries.sort_by_key(|entry| Reverse(entry.year_number()));
}

/// Produces the template-ready view of one entry.
pub fn transform_entry(entry: &Entry) -> TransformedEntry {
    let optional = |value: &Option<String>| value.as_deref().map(strip_braces).unwrap_or_default();

    TransformedEntry {
        title: strip_braces(&entry.title),
        authors: entry
            .authors
            .iter()
            .map(|author| reformat_author(&strip_braces(author)))
            .collect(),
        month: strip_braces(&entry.month),
        year: strip_braces(&entry.year),
        journal: journal_name(&strip_braces(&entry.journal)).to_string(),
        volume: optional(&entry.volume),
        pages: optional(&entry.pages),
        link: strip_braces(&entry.link),
    }
}
