//! Shared test constants and helpers for integration tests.

/// Two papers: one led by the designated author (2023), one where they
/// contribute (2022, no volume). The older paper comes first in the file.
pub const TWO_PAPERS_BIB: &str = r#"
@ARTICLE{2022MNRAS.510L...5S,
       author = {Smith, John A and Dhandha, Jiten},
        title = {Foregrounds},
      journal = {Monthly Notices of the Royal Astronomical Society},
         year = 2022,
        month = {Feb},
        pages = {L5},
       adsurl = {https://ui.adsabs.harvard.edu/abs/2022MNRAS.510L...5S}
}

@ARTICLE{2023ApJ...950...12D,
       author = {Dhandha, Jiten and Smith, John A},
        title = {Cosmic Dawn with {HERA}},
      journal = {The Astrophysical Journal},
         year = 2023,
        month = {Jun},
       volume = {950},
        pages = {12},
       adsurl = {https://ui.adsabs.harvard.edu/abs/2023ApJ...950...12D}
}
"#;

/// A CV skeleton with all four markers and nothing between the pairs.
pub const CV_DOCUMENT: &str = "\\documentclass{article}
\\begin{document}
\\section*{First author}
\\begin{tabular}{ll}
% Start of first author papers
% End of first author papers
\\end{tabular}
\\section*{Contributing author}
\\begin{tabular}{ll}
% Start of contributing author papers
% End of contributing author papers
\\end{tabular}
\\end{document}
";

/// The first-author block rendered from [`TWO_PAPERS_BIB`].
pub const FIRST_AUTHOR_BLOCK: &str = "
    Jun 2023 &
    \\textbf{J. Dhandha}, J. A. Smith
    \\href{https://ui.adsabs.harvard.edu/abs/2023ApJ...950...12D}{\\textit{Cosmic Dawn with HERA}},
    The Astrophysical Journal, 950, 12 \\\\
";

/// The contributing-author block rendered from [`TWO_PAPERS_BIB`].
pub const CONTRIBUTING_BLOCK: &str = "
    Feb 2022 &
    J. A. Smith, \\textbf{J. Dhandha}
    \\href{https://ui.adsabs.harvard.edu/abs/2022MNRAS.510L...5S}{\\textit{Foregrounds}},
    Monthly Notices of the Royal Astronomical Society, L5 \\\\
";

/// The document [`CV_DOCUMENT`] should become after converting [`TWO_PAPERS_BIB`].
pub fn expected_cv() -> String {
    CV_DOCUMENT
        .replace(
            "% Start of first author papers\n",
            &format!("% Start of first author papers {}", FIRST_AUTHOR_BLOCK),
        )
        .replace(
            "% Start of contributing author papers\n",
            &format!("% Start of contributing author papers {}", CONTRIBUTING_BLOCK),
        )
}
