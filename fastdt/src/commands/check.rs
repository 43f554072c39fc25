//! Check command implementation.
//!
//! Lexes each given configuration file and reports the first lexical error
//! of every file that has one.

use std::io::{self, Read};
use std::path::{Path, PathBuf};

use fastdc_lex::{LexError, Lexer, LexerConfig};
use fastdc_util::{Diagnostic, DiagnosticBuilder, Handler};
use tracing::debug;

use crate::commands::common::{display_name, lexer_config, open_input};
use crate::config::Config;
use crate::error::{FastdtError, Result};

/// Arguments for the check command.
#[derive(Debug, Clone, Default)]
pub struct CheckArgs {
    /// Configuration files; `-` reads standard input.
    pub inputs: Vec<PathBuf>,
    /// Lookahead window size; the configured one if unset.
    pub capacity: Option<usize>,
}

/// Check command handler.
pub struct CheckCommand {
    args: CheckArgs,
    config: Config,
}

impl CheckCommand {
    /// Create a new CheckCommand.
    pub fn new(args: CheckArgs, config: Config) -> Self {
        Self { args, config }
    }

    /// Execute the command.
    pub fn run(&self) -> Result<()> {
        self.validate_inputs()?;
        let lexer_config = lexer_config(self.args.capacity, &self.config)?;

        let mut handler = Handler::new();
        let stderr = io::stderr();
        let mut err_out = stderr.lock();

        for path in &self.args.inputs {
            let name = display_name(path);

            match check_file(path, lexer_config)? {
                None => debug!(file = %name, "no lexical errors"),
                Some(diagnostic) => {
                    diagnostic.write_to(&mut err_out, &name)?;
                    handler.emit(diagnostic);
                },
            }
        }

        let total = self.args.inputs.len();
        let failed = handler.error_count();
        if failed > 0 {
            return Err(FastdtError::CheckFailed { failed, total });
        }

        println!("{} file(s) checked, no lexical errors", total);
        Ok(())
    }

    /// Validate that input files are provided.
    fn validate_inputs(&self) -> Result<()> {
        if self.args.inputs.is_empty() {
            return Err(FastdtError::Validation("No input files specified".to_string()));
        }
        Ok(())
    }
}

/// Checks one input. A file that cannot be opened counts as failed and
/// does not stop the run.
fn check_file(path: &Path, config: LexerConfig) -> Result<Option<Diagnostic>> {
    match open_input(path) {
        Ok(mut reader) => Ok(first_error(&mut reader, config).map(|err| err.to_diagnostic())),
        Err(FastdtError::Input { source, .. }) => Ok(Some(
            DiagnosticBuilder::error(format!("cannot open: {}", source)).build(),
        )),
        Err(err) => Err(err),
    }
}

/// Lexes `reader` to the end and returns its first error, if any.
pub fn first_error<R: Read + ?Sized>(reader: &mut R, config: LexerConfig) -> Option<LexError> {
    Lexer::with_config(reader, config).find_map(|token| token.err())
}
