//! Journal macro expansion.
//!
//! ADS exports abbreviate common astronomy journals with AASTeX macros such
//! as `\apj`. The CV needs the full name, so known macros are expanded and
//! everything else is passed through.

/// Single source of truth for known journal macros: (macro, full name).
const JOURNAL_MACROS: &[(&str, &str)] = &[
    (r"\mnras", "Monthly Notices of the Royal Astronomical Society"),
    (r"\apj", "The Astrophysical Journal"),
    (r"\apjl", "The Astrophysical Journal Letters"),
    (r"\apjs", "The Astrophysical Journal Supplement Series"),
    (r"\aap", r"Astronomy \& Astrophysics"),
];

/// Returns the full journal name for a known macro, or the input unchanged.
///
/// Matching is exact: `\apj` and `\apjl` are distinct entries, and values
/// with surrounding text (`\apj, in press`) are not expanded.
pub fn journal_name(journal: &str) -> &str {
    expand_macro(journal).unwrap_or(journal)
}

/// Returns the full name for a known journal macro.
pub fn expand_macro(journal: &str) -> Option<&'static str> {
    JOURNAL_MACROS
        .iter()
        .find(|(m, _)| *m == journal)
        .map(|(_, name)| *name)
}
