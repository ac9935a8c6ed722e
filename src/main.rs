//! CLI for bib2tex - Splice a BibTeX publication list into a LaTeX document.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::process;

use clap::error::ErrorKind;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use bib2tex::{convert_entries, load_bib, BibError, Config};

// ---------------------------------------------------------------------------
// CLI definition
// ---------------------------------------------------------------------------

/// Splice a BibTeX publication list into a LaTeX document
#[derive(Parser)]
#[command(name = "bib2tex")]
#[command(version)]
#[command(after_help = "\
The document must contain these marker lines, in this order:
  % Start of first author papers
  % End of first author papers
  % Start of contributing author papers
  % End of contributing author papers

Everything between a Start marker and its End marker is replaced.

Example:
  bib2tex papers.bib cv.tex")]
struct Cli {
    /// BibTeX file with the publication list
    bib_file: PathBuf,

    /// LaTeX document to update in place
    tex_file: PathBuf,
}

// ---------------------------------------------------------------------------
// AppError — semantic exit codes
// ---------------------------------------------------------------------------

enum AppError {
    /// Exit 10 — bibliography file not found / unreadable
    BibFile(String),
    /// Exit 11 — bibliography invalid or missing a required field
    BibContent(String),
    /// Exit 12 — document not found / unreadable
    TexFile(String),
    /// Exit 13 — marker missing or out of order
    Markers(String),
    /// Exit 14 — cannot write the document back
    OutputFile(String),
}

impl AppError {
    fn exit_code(&self) -> i32 {
        match self {
            AppError::BibFile(_) => 10,
            AppError::BibContent(_) => 11,
            AppError::TexFile(_) => 12,
            AppError::Markers(_) => 13,
            AppError::OutputFile(_) => 14,
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::BibFile(msg) | AppError::TexFile(msg) => {
                write!(f, "{}\n  hint: verify the file path is correct", msg)
            }
            AppError::BibContent(msg) => {
                write!(
                    f,
                    "{}\n  hint: every entry needs title, author, month, year, journal and adsurl (or url)",
                    msg
                )
            }
            AppError::Markers(msg) => {
                let markers = Config::default().markers.in_order().join("\n    ");
                write!(
                    f,
                    "{}\n  hint: the document must contain, in this order:\n    {}",
                    msg, markers
                )
            }
            AppError::OutputFile(msg) => {
                write!(f, "{}\n  hint: check that the document is writable", msg)
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bib2tex=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => match e.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => e.exit(),
            _ => {
                let _ = e.print();
                process::exit(1);
            }
        },
    };

    if let Err(e) = run(&cli.bib_file, &cli.tex_file) {
        eprintln!("Error: {}", e);
        process::exit(e.exit_code());
    }
}

/// Convert the bibliography and rewrite the document in place.
///
/// The document is only written once the whole conversion has succeeded.
fn run(bib_file: &Path, tex_file: &Path) -> Result<(), AppError> {
    let entries = load_bib(bib_file).map_err(|e| match e {
        BibError::IoError(io) => AppError::BibFile(format!("'{}': {}", bib_file.display(), io)),
        e => AppError::BibContent(format!("'{}': {}", bib_file.display(), e)),
    })?;

    let document = fs::read_to_string(tex_file)
        .map_err(|e| AppError::TexFile(format!("'{}': {}", tex_file.display(), e)))?;

    let conversion = convert_entries(entries, &document, &Config::default())
        .map_err(|e| AppError::Markers(format!("'{}': {}", tex_file.display(), e)))?;

    fs::write(tex_file, &conversion.document)
        .map_err(|e| AppError::OutputFile(format!("'{}': {}", tex_file.display(), e)))?;

    eprintln!(
        "wrote {} first-author and {} contributing-author entries to {}",
        conversion.first_author_count,
        conversion.contributing_count,
        tex_file.display()
    );

    Ok(())
}
