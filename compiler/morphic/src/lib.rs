//! The `morphi` driver.
//!
//! Loads a YAML lexer configuration, streams an input through the lexer
//! and prints one `<type> (<content>)` line per token. The binary in
//! `main.rs` only parses arguments; everything else lives here so it can
//! be tested without spawning a process.

use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Once;

use morphi_config::ConfigFileError;
use morphi_lexer::{LexError, Lexer, LexerConfig, ReaderSource, RuneSource};
use tracing::debug;

/// Anything that stops the driver. Printed to stderr by `main`.
#[derive(Debug, thiserror::Error)]
pub enum DriverError {
    #[error(transparent)]
    Config(#[from] ConfigFileError),

    #[error("cannot open input '{}': {source}", path.display())]
    Input {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Lex(#[from] LexError),

    #[error("failed to write output: {0}")]
    Output(#[source] io::Error),
}

/// Where the text to tokenize comes from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Input {
    Stdin,
    File(PathBuf),
}

impl Input {
    /// Interpret a command-line operand. Missing or `-` means stdin.
    pub fn from_arg(arg: Option<&Path>) -> Self {
        match arg {
            Some(path) if path != Path::new("-") => Input::File(path.to_path_buf()),
            _ => Input::Stdin,
        }
    }
}

static TRACING_INIT: Once = Once::new();

/// Install the global tracing subscriber, writing to stderr.
///
/// `verbose` turns on every scanning checkpoint. Otherwise a subscriber is
/// installed only when `RUST_LOG` is set.
pub fn init_tracing(verbose: bool) {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        let filter = if verbose {
            EnvFilter::new("morphi_lexer=trace,morphi_config=debug,morphic=debug")
        } else if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else {
            return;
        };
        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(io::stderr)
                    .with_target(true)
                    .with_level(true),
            )
            .with(filter)
            .init();
    });
}

/// Load the configuration and tokenize `input` into `out`.
///
/// Returns the number of tokens printed.
pub fn run(config_path: &Path, input: &Input, out: &mut impl Write) -> Result<usize, DriverError> {
    let config = morphi_config::read_config_file(config_path)?;
    match input {
        Input::Stdin => tokenize(&config, ReaderSource::new(io::stdin().lock()), out),
        Input::File(path) => {
            let file = File::open(path).map_err(|source| DriverError::Input {
                path: path.clone(),
                source,
            })?;
            tokenize(&config, ReaderSource::new(file), out)
        }
    }
}

/// Print every token of `source` to `out`, one per line.
///
/// Tokens produced before an error are still written. Any error the lexer
/// records, an unrecognized fragment included, is returned.
pub fn tokenize<S: RuneSource>(
    config: &LexerConfig,
    source: S,
    out: &mut impl Write,
) -> Result<usize, DriverError> {
    let mut lexer = Lexer::new(config, source);
    let mut count = 0;
    for token in lexer.by_ref() {
        writeln!(out, "{token}").map_err(DriverError::Output)?;
        count += 1;
    }
    out.flush().map_err(DriverError::Output)?;
    debug!(tokens = count, state = ?lexer.state(), "tokenization stopped");

    match lexer.into_error() {
        Some(err) => Err(err.into()),
        None => Ok(count),
    }
}
