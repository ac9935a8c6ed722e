//! bib2tex: splice a BibTeX publication list into a LaTeX document.
//!
//! This library provides functionality to:
//! - Load BibTeX entries and sort them newest first
//! - Reshape fields (braces, author initials, journal macros)
//! - Render entries as LaTeX table rows, split by first authorship
//! - Replace the regions between marker comments in a document

pub mod bib;
pub mod config;
pub mod convert;
pub mod format;
pub mod journals;
pub mod splice;
pub mod transform;

pub use bib::{load_bib, parse_bib, BibError, Entry};
pub use config::{Config, Markers};
pub use convert::{convert, convert_entries, Conversion, ConvertError};
pub use format::{format_entries, render_entry, Sections};
pub use journals::journal_name;
pub use splice::{splice_sections, SpliceError};
pub use transform::{
    reformat_author, sort_by_year_desc, strip_braces, transform_entry, TransformedEntry,
};
