//! CLI argument parsing for pdf-burger.
//!
//! This module defines the command-line interface structure using `clap`.
//! `build.rs` includes it as well to render the man page.

use clap::Parser;
use std::path::{Path, PathBuf};

use pdfburger::config::Config;

/// Merge PDF files and folders of PDFs into a single document.
///
/// Inputs are merged in the order given. Directories contribute their PDF
/// files in natural order (2.pdf before 10.pdf). Missing or unreadable files
/// are skipped with a warning.
#[derive(Parser, Debug)]
#[command(name = "pdf-burger")]
#[command(version)]
#[command(about = "Merge PDF files and folders of PDFs into a single document")]
#[command(author)]
#[command(arg_required_else_help = true)]
#[command(after_help = "Examples:
  pdf-burger a.pdf b.pdf c.pdf              merge files in order -> merged.pdf
  pdf-burger ./invoices/                    merge a folder -> invoices.pdf
  pdf-burger ./scans/ -r -o all.pdf         include subfolders
  pdf-burger cover.pdf chapters/ end.pdf    mix files and folders
  pdf-burger *.pdf --dry-run                preview target files only")]
pub struct Cli {
    /// Input PDF files, directories or glob patterns (in order)
    ///
    /// Files are merged in the order provided. A directory is replaced by the
    /// PDFs it contains, sorted naturally.
    #[arg(required = true, value_name = "INPUT")]
    pub inputs: Vec<PathBuf>,

    /// Output PDF file path
    ///
    /// Defaults to `<dir>.pdf` for a single directory input and `merged.pdf`
    /// otherwise, in the current directory. Default names are numbered
    /// (`merged_001.pdf`, ...) instead of replacing existing files.
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Descend into subdirectories of directory inputs
    #[arg(short, long)]
    pub recursive: bool,

    /// Replace the output file given with --output if it exists
    #[arg(long)]
    pub overwrite: bool,

    /// Show per-file details and statistics
    #[arg(long)]
    pub verbose: bool,

    /// Suppress all non-error output
    ///
    /// Only errors and warnings will be printed.
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// List the files that would be merged and the output path, then exit
    #[arg(long)]
    pub dry_run: bool,

    /// Print the result as JSON on stdout
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    /// Build the run configuration, resolving relative paths against
    /// `working_dir`.
    pub fn to_config(&self, working_dir: &Path) -> Config {
        Config {
            inputs: self.inputs.clone(),
            output: self.output.clone(),
            recursive: self.recursive,
            overwrite: self.overwrite,
            verbose: self.verbose,
            quiet: self.quiet,
            dry_run: self.dry_run,
            json: self.json,
            working_dir: working_dir.to_path_buf(),
        }
    }
}
