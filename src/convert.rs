//! The end-to-end conversion: BibTeX source in, updated document out.

use thiserror::Error;
use tracing::info;

use crate::bib::{parse_bib, BibError, Entry};
use crate::config::Config;
use crate::format::format_entries;
use crate::splice::{splice_sections, SpliceError};
use crate::transform::{sort_by_year_desc, transform_entry, TransformedEntry};

/// Errors from any stage of the conversion.
#[derive(Error, Debug)]
pub enum ConvertError {
    #[error(transparent)]
    Bib(#[from] BibError),

    #[error(transparent)]
    Splice(#[from] SpliceError),
}

/// The result of a successful conversion.
#[derive(Debug, Clone, PartialEq)]
pub struct Conversion {
    /// The full document with both sections replaced
    pub document: String,
    /// Number of entries placed in the first-author section
    pub first_author_count: usize,
    /// Number of entries placed in the contributing-author section
    pub contributing_count: usize,
}

/// Loads, sorts, transforms and formats the bibliography, then splices the
/// result into `document`.
///
/// # Errors
///
/// Fails if the bibliography is invalid or lacks a required field, or if the
/// document does not contain the configured markers in order.
///
/// # Examples
///
/// ```
/// use bib2tex::{convert, Config};
///
/// let bib = r#"@ARTICLE{key,
///     author = {Dhandha, Jiten},
///      title = {Result},
///    journal = {Journal},
///       year = {2024},
///      month = {May},
///     adsurl = {https://example.org/abs}
/// }"#;
/// let document = "% Start of first author papers\n% End of first author papers\n\
///                 % Start of contributing author papers\n% End of contributing author papers\n";
///
/// let conversion = convert(bib, document, &Config::default()).unwrap();
/// assert_eq!(conversion.first_author_count, 1);
/// assert!(conversion.document.contains("\\textbf{J. Dhandha}"));
/// ```
pub fn convert(bib: &str, document: &str, config: &Config) -> Result<Conversion, ConvertError> {
    let entries = parse_bib(bib)?;
    Ok(convert_entries(entries, document, config)?)
}

/// Sorts, transforms and formats already-loaded entries, then splices the
/// result into `document`.
pub fn convert_entries(
    mut entries: Vec<Entry>,
    document: &str,
    config: &Config,
) -> Result<Conversion, SpliceError> {
    sort_by_year_desc(&mut entries);

    let transformed: Vec<TransformedEntry> = entries.iter().map(transform_entry).collect();
    let sections = format_entries(&transformed, config);
    let document = splice_sections(document, &sections, &config.markers)?;

    info!(
        first_author = sections.first_author.len(),
        contributing = sections.contributing.len(),
        "converted bibliography"
    );

    Ok(Conversion {
        document,
        first_author_count: sections.first_author.len(),
        contributing_count: sections.contributing.len(),
    })
}
