//! Splicing rendered sections into the target document.
//!
//! The document is treated as opaque text. Everything between a start
//! marker and its end marker is replaced; everything else is kept byte for
//! byte, so running the conversion again on its own output is a no-op.

use thiserror::Error;
use tracing::debug;

use crate::config::Markers;
use crate::format::Sections;

/// Errors that can occur when splicing.
#[derive(Error, Debug, PartialEq)]
pub enum SpliceError {
    #[error("Marker not found in document: '{0}'")]
    MarkerNotFound(String),

    #[error("Marker '{later}' appears before '{earlier}'")]
    MarkersOutOfOrder { earlier: String, later: String },
}

/// Byte offsets of the four markers, in document order.
#[derive(Debug, Clone, Copy, PartialEq)]
struct MarkerOffsets {
    first_author_start: usize,
    first_author_end: usize,
    contributing_start: usize,
    contributing_end: usize,
}

/// Finds the first occurrence of every marker and checks their order.
fn locate_markers(document: &str, markers: &Markers) -> Result<MarkerOffsets, SpliceError> {
    let names = markers.in_order();
    let mut offsets = [0usize; 4];

    for (i, marker) in names.iter().enumerate() {
        offsets[i] = document
            .find(marker)
            .ok_or_else(|| SpliceError::MarkerNotFound(marker.to_string()))?;
    }

    for i in 1..offsets.len() {
        if offsets[i] < offsets[i - 1] {
            return Err(SpliceError::MarkersOutOfOrder {
                earlier: names[i - 1].to_string(),
                later: names[i].to_string(),
            });
        }
    }

    debug!(?offsets, "located markers");

    Ok(MarkerOffsets {
        first_author_start: offsets[0],
        first_author_end: offsets[1],
        contributing_start: offsets[2],
        contributing_end: offsets[3],
    })
}

/// Inserts both sections after their start markers.
///
/// Each start marker is followed by a single space and then its section
/// text, up to (and not including) the matching end marker. Text before the
/// first marker, between the two regions, and after the last marker is
/// preserved unchanged.
///
/// # Errors
///
/// Returns an error if a marker is missing or the markers are out of order;
/// the document is never partially rewritten.
pub fn splice_sections(
    document: &str,
    sections: &Sections,
    markers: &Markers,
) -> Result<String, SpliceError> {
    let at = locate_markers(document, markers)?;

    let first_author = sections.first_author_text();
    let contributing = sections.contributing_text();

    let mut result = String::with_capacity(document.len() + first_author.len() + contributing.len());
    result.push_str(&document[..at.first_author_start]);
    result.push_str(&markers.first_author_start);
    result.push(' ');
    result.push_str(&first_author);
    result.push_str(&document[at.first_author_end..at.contributing_start]);
    result.push_str(&markers.contributing_start);
    result.push(' ');
    result.push_str(&contributing);
    result.push_str(&document[at.contributing_end..]);

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOCUMENT: &str = "\\section{Publications}
\\begin{tabular}{ll}
% Start of first author papers
% End of first author papers
\\end{tabular}
Contributions:
\\begin{tabular}{ll}
% Start of contributing author papers
% End of contributing author papers
\\end{tabular}
";

    fn sections(first: &[&str], contributing: &[&str]) -> Sections {
        Sections {
            first_author: first.iter().map(|s| s.to_string()).collect(),
            contributing: contributing.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_splice_inserts_after_start_markers() {
        let result = splice_sections(
            DOCUMENT,
            &sections(&["\n    FIRST \\\\\n"], &["\n    OTHER \\\\\n"]),
            &Markers::default(),
        )
        .unwrap();

        assert_eq!(
            result,
            concat!(
                "\\section{Publications}\n",
                "\\begin{tabular}{ll}\n",
                "% Start of first author papers \n",
                "    FIRST \\\\\n",
                "% End of first author papers\n",
                "\\end{tabular}\n",
                "Contributions:\n",
                "\\begin{tabular}{ll}\n",
                "% Start of contributing author papers \n",
                "    OTHER \\\\\n",
                "% End of contributing author papers\n",
                "\\end{tabular}\n",
            )
        );
    }

    #[test]
    fn test_splice_preserves_outside_text() {
        let result = splice_sections(
            DOCUMENT,
            &sections(&["\n    A \\\\\n", "\n    B \\\\\n"], &[]),
            &Markers::default(),
        )
        .unwrap();

        assert!(result.starts_with("\\section{Publications}\n\\begin{tabular}{ll}\n"));
        assert!(result.contains(
            "% End of first author papers\n\\end{tabular}\nContributions:\n\\begin{tabular}{ll}\n% Start of contributing author papers "
        ));
        assert!(result.ends_with("% End of contributing author papers\n\\end{tabular}\n"));
    }

    #[test]
    fn test_splice_is_idempotent() {
        // Given: a document already spliced once
        let s = sections(&["\n    A \\\\\n"], &["\n    B \\\\\n"]);
        let once = splice_sections(DOCUMENT, &s, &Markers::default()).unwrap();

        // When: the same sections are spliced again
        let twice = splice_sections(&once, &s, &Markers::default()).unwrap();

        // Then: nothing changes
        assert_eq!(once, twice);
    }

    #[test]
    fn test_splice_replaces_previous_content() {
        let stale = DOCUMENT.replace(
            "% Start of first author papers\n",
            "% Start of first author papers\n    STALE \\\\\n",
        );

        let result = splice_sections(
            &stale,
            &sections(&["\n    FRESH \\\\\n"], &[]),
            &Markers::default(),
        )
        .unwrap();

        assert!(!result.contains("STALE"));
        assert!(result.contains("FRESH"));
    }

    #[test]
    fn test_splice_missing_marker_is_error() {
        let document = DOCUMENT.replace("% End of contributing author papers\n", "");

        let err = splice_sections(&document, &Sections::default(), &Markers::default())
            .unwrap_err();

        assert_eq!(
            err,
            SpliceError::MarkerNotFound("% End of contributing author papers".to_string())
        );
    }

    #[test]
    fn test_splice_markers_out_of_order_is_error() {
        let document = "% Start of contributing author papers\n% End of contributing author papers\n% Start of first author papers\n% End of first author papers\n";

        let err = splice_sections(document, &Sections::default(), &Markers::default())
            .unwrap_err();

        assert!(
            matches!(err, SpliceError::MarkersOutOfOrder { .. }),
            "got {:?}",
            err
        );
    }

    #[test]
    fn test_splice_empty_sections() {
        let result =
            splice_sections(DOCUMENT, &Sections::default(), &Markers::default()).unwrap();

        assert!(result.contains("% Start of first author papers % End of first author papers"));
    }
}
