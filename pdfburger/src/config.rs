//! Configuration module for pdfburger.
//!
//! This module holds the validated options that drive one run. The CLI builds
//! a [`Config`] from its arguments; library callers can start from
//! [`Config::new`] and adjust fields.

use std::path::PathBuf;

use crate::error::{PdfBurgerError, Result};

/// Options for a single invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Input files, directories or glob patterns, in merge order.
    pub inputs: Vec<PathBuf>,

    /// Explicit output path; computed from the inputs when `None`.
    pub output: Option<PathBuf>,

    /// Descend into subdirectories of directory inputs.
    pub recursive: bool,

    /// Replace an existing explicit output.
    pub overwrite: bool,

    /// Report per-file decisions and statistics.
    pub verbose: bool,

    /// Suppress everything but warnings and errors.
    pub quiet: bool,

    /// Resolve inputs and output without writing anything.
    pub dry_run: bool,

    /// Print the run outcome as JSON.
    pub json: bool,

    /// Directory that relative paths and default outputs resolve against.
    pub working_dir: PathBuf,
}

impl Config {
    /// Config with default options for `inputs`, rooted at `"."`.
    pub fn new(inputs: Vec<PathBuf>) -> Self {
        Self {
            inputs,
            output: None,
            recursive: false,
            overwrite: false,
            verbose: false,
            quiet: false,
            dry_run: false,
            json: false,
            working_dir: PathBuf::from("."),
        }
    }

    /// Set the working directory.
    pub fn with_working_dir(mut self, working_dir: impl Into<PathBuf>) -> Self {
        self.working_dir = working_dir.into();
        self
    }

    /// Set an explicit output path.
    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = Some(output.into());
        self
    }

    /// Input paths in merge order.
    pub fn inputs(&self) -> &[PathBuf] {
        &self.inputs
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`PdfBurgerError::InvalidConfig`] if there are no inputs, or
    /// both `verbose` and `quiet` are set.
    pub fn validate(&self) -> Result<()> {
        if self.inputs.is_empty() {
            return Err(PdfBurgerError::invalid_config("no input paths given"));
        }

        if self.verbose && self.quiet {
            return Err(PdfBurgerError::invalid_config(
                "cannot use both --verbose and --quiet",
            ));
        }

        if self
            .output
            .as_ref()
            .is_some_and(|o| o.as_os_str().is_empty())
        {
            return Err(PdfBurgerError::invalid_config("output path is empty"));
        }

        Ok(())
    }

    /// Whether informational messages should be printed.
    pub fn should_print(&self) -> bool {
        !self.quiet || self.dry_run
    }
}
