//! Rendering of transformed entries into LaTeX table rows.
//!
//! Each entry becomes one block of a two-column `tabular` (date, then the
//! citation), routed to the first-author or contributing-author section.

use tracing::debug;

use crate::config::Config;
use crate::transform::TransformedEntry;

/// Rendered blocks for the two sections of the publication list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Sections {
    /// Papers whose first author is the designated author
    pub first_author: Vec<String>,
    /// Every other paper
    pub contributing: Vec<String>,
}

impl Sections {
    /// The first-author blocks as a single string, in insertion order.
    pub fn first_author_text(&self) -> String {
        self.first_author.concat()
    }

    /// The contributing-author blocks as a single string, in insertion order.
    pub fn contributing_text(&self) -> String {
        self.contributing.concat()
    }
}

/// Renders one entry with the designated author in bold.
///
/// Absent optional fields leave a `", ,"` in the journal line, which is
/// collapsed to `","`.
pub fn render_entry(entry: &TransformedEntry, designated_author: &str) -> String {
    let authors = entry
        .authors
        .iter()
        .map(|author| {
            if author == designated_author {
                format!("\\textbf{{{}}}", author)
            } else {
                author.clone()
            }
        })
        .collect::<Vec<_>>()
        .join(", ");

    let block = format!(
        "\n    {} {} &\n    {}\n    \\href{{{}}}{{\\textit{{{}}}}},\n    {}, {}, {} \\\\\n",
        entry.month,
        entry.year,
        authors,
        entry.link,
        entry.title,
        entry.journal,
        entry.volume,
        entry.pages,
    );

    block.replace(", ,", ",")
}

/// Whether the entry belongs in the first-author section.
pub fn is_first_author(entry: &TransformedEntry, designated_author: &str) -> bool {
    entry
        .authors
        .first()
        .is_some_and(|first| first == designated_author)
}

/// Renders all entries, in order, into their sections.
pub fn format_entries(entries: &[TransformedEntry], config: &Config) -> Sections {
    let mut sections = Sections::default();

    for entry in entries {
        let block = render_entry(entry, &config.designated_author);
        if is_first_author(entry, &config.designated_author) {
            debug!(title = %entry.title, "first-author paper");
            sections.first_author.push(block);
        } else {
            debug!(title = %entry.title, "contributing-author paper");
            sections.contributing.push(block);
        }
    }

    sections
}
