//! BibTeX bibliography loading.
//!
//! Entries are read with `biblatex`'s raw parser, so field values keep
//! their LaTeX source (`\&`, `\%`, `--`, accents) exactly as written. Only
//! `@string` abbreviations and the standard month macros are resolved.

use std::fs;
use std::path::Path;

use biblatex::{Pair, RawBibliography, RawChunk, RawEntry, Spanned};
use thiserror::Error;
use tracing::debug;

/// Nesting limit when an `@string` abbreviation refers to another one.
const MAX_ABBREVIATION_DEPTH: usize = 8;

/// Errors that can occur when loading a bibliography.
#[derive(Error, Debug)]
pub enum BibError {
    #[error("Failed to read file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid BibTeX: {0}")]
    Parse(String),

    #[error("Entry '{key}' is missing required field '{field}'")]
    MissingField { key: String, field: &'static str },

    #[error("Entry '{key}' has a non-numeric year '{year}'")]
    InvalidYear { key: String, year: String },

    #[error("Entry '{key}' uses unknown abbreviation '{name}'")]
    UnknownAbbreviation { key: String, name: String },
}

/// One bibliographic record, as read from the database.
///
/// Values are LaTeX source with whitespace runs collapsed. Authors are kept
/// in "Last, First" form; braces are left for the transformer to strip.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    /// Citation key, used in error messages
    pub key: String,
    pub title: String,
    pub authors: Vec<String>,
    pub month: String,
    pub year: String,
    pub journal: String,
    pub volume: Option<String>,
    pub pages: Option<String>,
    /// Link target for the title (the ADS abstract page for ADS exports)
    pub link: String,
}

impl Entry {
    /// Numeric year, ignoring braces and surrounding whitespace.
    pub fn year_number(&self) -> Option<i32> {
        crate::transform::strip_braces(&self.year).trim().parse().ok()
    }
}

/// Loads all entries from a BibTeX file, in file order.
///
/// # Errors
///
/// Returns an error if the file cannot be read, is not valid BibTeX, or
/// contains an entry without one of the required fields.
pub fn load_bib(path: &Path) -> Result<Vec<Entry>, BibError> {
    let content = fs::read_to_string(path)?;
    parse_bib(&content)
}

/// Parses BibTeX source into entries, in source order.
pub fn parse_bib(content: &str) -> Result<Vec<Entry>, BibError> {
    let raw = RawBibliography::parse(content).map_err(|e| BibError::Parse(e.to_string()))?;

    let entries = raw
        .entries
        .iter()
        .map(|entry| extract_entry(&entry.v, &raw.abbreviations))
        .collect::<Result<Vec<_>, _>>()?;

    debug!(count = entries.len(), "loaded bibliography entries");
    Ok(entries)
}

/// Pulls the publication-list fields out of a raw entry.
fn extract_entry(entry: &RawEntry<'_>, abbreviations: &[Pair<'_>]) -> Result<Entry, BibError> {
    let key = entry.key.v.to_string();
    let field = |name: &str| -> Result<Option<String>, BibError> {
        entry
            .fields
            .iter()
            .find(|pair| pair.key.v.eq_ignore_ascii_case(name))
            .map(|pair| {
                resolve(&pair.value.v, abbreviations, 0).map_err(|name| {
                    BibError::UnknownAbbreviation {
                        key: key.clone(),
                        name,
                    }
                })
            })
            .transpose()
    };
    let missing = |field: &'static str| BibError::MissingField {
        key: key.clone(),
        field,
    };

    let title = field("title")?.ok_or_else(|| missing("title"))?;
    let authors = split_names(&field("author")?.ok_or_else(|| missing("author"))?)
        .iter()
        .map(|name| last_first(name))
        .collect();
    let month = field("month")?.ok_or_else(|| missing("month"))?;
    let year = field("year")?.ok_or_else(|| missing("year"))?;
    let journal = match field("journal")? {
        Some(journal) => journal,
        None => field("journaltitle")?.ok_or_else(|| missing("journal"))?,
    };
    let volume = field("volume")?;
    let pages = field("pages")?;
    let link = match field("adsurl")? {
        Some(link) => link,
        None => field("url")?.ok_or_else(|| missing("adsurl"))?,
    };

    let entry = Entry {
        key,
        title,
        authors,
        month,
        year,
        journal,
        volume,
        pages,
        link,
    };

    if entry.year_number().is_none() {
        return Err(BibError::InvalidYear {
            key: entry.key,
            year: entry.year,
        });
    }

    Ok(entry)
}

/// Concatenates a raw field's `#`-joined pieces, expanding abbreviations.
///
/// Returns the name of the first abbreviation that cannot be resolved.
fn resolve(
    chunks: &[Spanned<RawChunk<'_>>],
    abbreviations: &[Pair<'_>],
    depth: usize,
) -> Result<String, String> {
    let mut out = String::new();
    for chunk in chunks {
        match chunk.v {
            RawChunk::Normal(s) => out.push_str(s),
            RawChunk::Abbreviation(name) => {
                let defined = abbreviations
                    .iter()
                    .find(|pair| pair.key.v.eq_ignore_ascii_case(name));
                match defined {
                    Some(pair) if depth < MAX_ABBREVIATION_DEPTH => {
                        out.push_str(&resolve(&pair.value.v, abbreviations, depth + 1)?)
                    }
                    _ => out.push_str(month_name(name).ok_or_else(|| name.to_string())?),
                }
            }
        }
    }
    Ok(collapse_whitespace(&out))
}

/// Full name for the standard BibTeX month macros (`jan` .. `dec`).
fn month_name(abbr: &str) -> Option<&'static str> {
    let name = match abbr.to_ascii_lowercase().as_str() {
        "jan" => "January",
        "feb" => "February",
        "mar" => "March",
        "apr" => "April",
        "may" => "May",
        "jun" => "June",
        "jul" => "July",
        "aug" => "August",
        "sep" => "September",
        "oct" => "October",
        "nov" => "November",
        "dec" => "December",
        _ => return None,
    };
    Some(name)
}

fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Splits `s` on `sep` wherever it is not inside braces.
fn split_top_level(s: &str, sep: char) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;

    for (i, c) in s.char_indices() {
        match c {
            '{' => depth += 1,
            '}' => depth = depth.saturating_sub(1),
            c if c == sep && depth == 0 => {
                parts.push(&s[start..i]);
                start = i + c.len_utf8();
            }
            _ => {}
        }
    }
    parts.push(&s[start..]);
    parts
}

/// Splits a BibTeX name list on the top-level `and` separators.
fn split_names(authors: &str) -> Vec<String> {
    let mut names = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for token in split_top_level(authors, ' ').into_iter().filter(|t| !t.is_empty()) {
        if token.eq_ignore_ascii_case("and") {
            if !current.is_empty() {
                names.push(current.join(" "));
            }
            current.clear();
        } else {
            current.push(token);
        }
    }
    if !current.is_empty() {
        names.push(current.join(" "));
    }
    names
}

/// Normalizes one BibTeX name to "Last, First" form.
///
/// Handles "Last, First", "Last, Jr, First" and "First von Last". A single
/// token (or a braced corporate name) has no first-name part.
fn last_first(name: &str) -> String {
    let parts: Vec<&str> = split_top_level(name, ',').into_iter().map(str::trim).collect();

    match parts.as_slice() {
        [last, jr, first, ..] => format!("{} {}, {}", last, jr, first),
        [last, first] if first.is_empty() => last.to_string(),
        [last, first] => format!("{}, {}", last, first),
        _ => {
            let tokens: Vec<&str> = split_top_level(name, ' ')
                .into_iter()
                .filter(|t| !t.is_empty())
                .collect();
            if tokens.len() < 2 {
                return name.trim().to_string();
            }
            // "von" particles start lowercase; the last token is always a surname
            let last_start = tokens[1..tokens.len() - 1]
                .iter()
                .position(|t| t.starts_with(|c: char| c.is_lowercase()))
                .map_or(tokens.len() - 1, |i| i + 1);
            format!(
                "{}, {}",
                tokens[last_start..].join(" "),
                tokens[..last_start].join(" ")
            )
        }
    }
}
