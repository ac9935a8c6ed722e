//! Conversion settings.
//!
//! The CLI always runs with [`Config::default`]; library callers and test
//! fixtures can override individual fields (missing fields keep their
//! defaults).

use serde::Deserialize;

/// Author whose papers go to the first-author section and whose name is bolded.
pub const DEFAULT_DESIGNATED_AUTHOR: &str = "J. Dhandha";

/// Settings shared by the formatter and the splicer.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Author name in reformatted "F. Last" form, matched exactly
    pub designated_author: String,
    /// Marker comments delimiting the insertion regions
    pub markers: Markers,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            designated_author: DEFAULT_DESIGNATED_AUTHOR.to_string(),
            markers: Markers::default(),
        }
    }
}

/// The four marker substrings, in the order they must appear in the document.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Markers {
    pub first_author_start: String,
    pub first_author_end: String,
    pub contributing_start: String,
    pub contributing_end: String,
}

impl Default for Markers {
    fn default() -> Self {
        Self {
            first_author_start: "% Start of first author papers".to_string(),
            first_author_end: "% End of first author papers".to_string(),
            contributing_start: "% Start of contributing author papers".to_string(),
            contributing_end: "% End of contributing author papers".to_string(),
        }
    }
}

impl Markers {
    /// Markers in the order they must appear in the document.
    pub fn in_order(&self) -> [&str; 4] {
        [
            &self.first_author_start,
            &self.first_author_end,
            &self.contributing_start,
            &self.contributing_end,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_uses_designated_author() {
        let config = Config::default();
        assert_eq!(config.designated_author, "J. Dhandha");
    }

    #[test]
    fn test_default_markers_in_document_order() {
        let markers = Markers::default();
        assert_eq!(
            markers.in_order(),
            [
                "% Start of first author papers",
                "% End of first author papers",
                "% Start of contributing author papers",
                "% End of contributing author papers",
            ]
        );
    }
}
