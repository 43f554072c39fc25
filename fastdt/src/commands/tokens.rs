//! Tokens command implementation.
//!
//! Lexes one configuration file and prints its tokens, one per line.

use std::io::{self, BufWriter, Read, Write};
use std::path::PathBuf;

use fastdc_lex::{Lexer, LexerConfig, Span, Token};
use serde::Serialize;
use tracing::debug;

use crate::commands::common::{display_name, lexer_config, open_input, OutputFormat};
use crate::config::Config;
use crate::error::{FastdtError, Result};

/// Arguments for the tokens command.
#[derive(Debug, Clone, Default)]
pub struct TokensArgs {
    /// Configuration file, or `-` for standard input.
    pub input: PathBuf,
    /// Output format; the configured one if unset.
    pub format: Option<OutputFormat>,
    /// Leave token locations out.
    pub no_spans: bool,
    /// Lookahead window size; the configured one if unset.
    pub capacity: Option<usize>,
}

/// How tokens are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenOutput {
    /// Line format.
    pub format: OutputFormat,
    /// Whether each token carries its span.
    pub show_spans: bool,
}

/// One token in JSON output.
#[derive(Debug, Serialize)]
struct TokenRecord {
    kind: &'static str,
    text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    span: Option<SpanRecord>,
}

#[derive(Debug, Serialize)]
struct SpanRecord {
    first_line: u32,
    first_column: u32,
    last_line: u32,
    last_column: u32,
}

impl From<Span> for SpanRecord {
    fn from(span: Span) -> Self {
        Self {
            first_line: span.first_line,
            first_column: span.first_column,
            last_line: span.last_line,
            last_column: span.last_column,
        }
    }
}

/// Tokens command handler.
pub struct TokensCommand {
    args: TokensArgs,
    config: Config,
}

impl TokensCommand {
    /// Create a new TokensCommand.
    pub fn new(args: TokensArgs, config: Config) -> Self {
        Self { args, config }
    }

    /// Execute the command.
    pub fn run(&self) -> Result<()> {
        let lexer_config = lexer_config(self.args.capacity, &self.config)?;
        let output = self.effective_output();
        let name = display_name(&self.args.input);

        debug!(file = %name, capacity = lexer_config.capacity, "listing tokens");

        let mut reader = open_input(&self.args.input)?;
        let stdout = io::stdout();
        let mut out = BufWriter::new(stdout.lock());

        let count = write_tokens(&mut reader, &mut out, &name, lexer_config, output)?;
        out.flush()?;

        debug!(file = %name, tokens = count, "done");
        Ok(())
    }

    /// Get the effective output settings.
    pub fn effective_output(&self) -> TokenOutput {
        TokenOutput {
            format: self.args.format.unwrap_or(self.config.output.format),
            show_spans: self.config.output.show_spans && !self.args.no_spans,
        }
    }
}

/// Lexes `reader` and writes every token before `Eof` to `out`.
///
/// Tokens read before a lexical error are written before the error is
/// returned. Returns the number of tokens written.
pub fn write_tokens<R: Read + ?Sized, W: Write>(
    reader: &mut R,
    out: &mut W,
    name: &str,
    config: LexerConfig,
    output: TokenOutput,
) -> Result<usize> {
    let mut lexer = Lexer::with_config(reader, config);
    let mut count = 0;

    loop {
        let token = lexer.next_token().map_err(|source| FastdtError::Lex {
            file: name.to_string(),
            source,
        })?;
        if token.is_eof() {
            return Ok(count);
        }
        write_token(out, &token, output)?;
        count += 1;
    }
}

fn write_token<W: Write>(out: &mut W, token: &Token, output: TokenOutput) -> Result<()> {
    match output.format {
        OutputFormat::Text if output.show_spans => writeln!(out, "{}\t{}", token.span, token)?,
        OutputFormat::Text => writeln!(out, "{}", token)?,
        OutputFormat::Json => {
            let record = TokenRecord {
                kind: token.kind.name(),
                text: token.kind.to_string(),
                span: output.show_spans.then(|| token.span.into()),
            };
            serde_json::to_writer(&mut *out, &record)?;
            writeln!(out)?;
        },
    }
    Ok(())
}
