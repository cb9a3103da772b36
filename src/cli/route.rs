//! CLI route: run context that turns parsed arguments into one core call.

use crate::api::{HashService, Mode};
use crate::cli::parse::{Cli, OutputFormat};
use crate::cli::presentation::{format_outcome_json, format_outcome_text};
use crate::error::HashError;
use tracing::debug;

/// Runtime context for CLI execution
pub struct RunContext {
    service: HashService,
    format: OutputFormat,
}

impl RunContext {
    pub fn new(format: OutputFormat) -> Self {
        Self {
            service: HashService::new(),
            format,
        }
    }

    /// Execute the command and return the text to print on stdout
    pub fn execute(&self, cli: &Cli) -> Result<String, HashError> {
        let mode = if cli.hash { Mode::HashOnly } else { Mode::Rename };
        debug!(path = %cli.path.display(), ?mode, "Dispatching");

        let outcome = self.service.run(&cli.path, mode)?;
        Ok(match self.format {
            OutputFormat::Text => format_outcome_text(&outcome),
            OutputFormat::Json => format_outcome_json(&outcome),
        })
    }
}
