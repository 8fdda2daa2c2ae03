//! jptr CLI - Command-line tool for JSON Pointers
//!
//! This binary provides command-line interfaces for:
//! - get: print the value a pointer addresses in a JSON document
//! - set: write a value at a pointer and print the new document
//! - build: escape raw tokens into a pointer
//! - split: decode a pointer into its raw tokens

use clap::{ArgAction, Parser, Subcommand};
use jptr_core::{Document, Limits, Pointer, PointerError};
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use thiserror::Error;
use tracing::{debug, info, Level};

#[derive(Parser)]
#[command(name = "jptr")]
#[command(about = "JSON Pointer (RFC 6901) tool")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pretty: bool,
    /// Reject '~' not followed by '0' or '1' in pointers
    #[arg(long, global = true)]
    strict: bool,
    /// Maximum number of reference tokens in a pointer
    #[arg(long, global = true, default_value_t = Limits::default().max_depth)]
    max_depth: usize,
    /// Maximum pointer length in bytes
    #[arg(long, global = true, default_value_t = Limits::default().max_pointer_length)]
    max_length: usize,
    /// Log to stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the value at a pointer
    ///
    /// Examples:
    ///   jptr get /foo/0 doc.json
    ///   cat doc.json | jptr get /a~1b
    Get {
        /// JSON Pointer ("" for the whole document)
        pointer: String,
        /// Input JSON file (stdin if omitted or "-")
        input: Option<PathBuf>,
    },
    /// Write a value at a pointer and print the resulting document
    ///
    /// Examples:
    ///   jptr set /array/- 5 doc.json
    ///   jptr set /name alice --string doc.json -o out.json
    Set {
        /// JSON Pointer with at least one token; "-" as last token appends
        pointer: String,
        /// New value as JSON text
        #[arg(allow_hyphen_values = true)]
        value: String,
        /// Input JSON file (stdin if omitted or "-")
        input: Option<PathBuf>,
        /// Take VALUE as a plain string instead of JSON
        #[arg(long)]
        string: bool,
        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Escape raw tokens into a pointer
    Build {
        /// Raw reference tokens
        #[arg(allow_hyphen_values = true)]
        tokens: Vec<String>,
    },
    /// Decode a pointer into a JSON array of raw tokens
    Split {
        /// JSON Pointer
        pointer: String,
    },
}

/// Errors reported by the CLI
#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Pointer(#[from] PointerError),
    #[error("{path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("JSON error ({context}): {source}")]
    Json {
        context: String,
        #[source]
        source: serde_json::Error,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<(), CliError> {
    let limits = Limits {
        max_depth: cli.max_depth,
        max_pointer_length: cli.max_length,
        strict_escapes: cli.strict,
    };
    let pretty = cli.pretty;

    match cli.command {
        Commands::Get { pointer, input } => {
            let pointer = Pointer::parse_with(&pointer, &limits)?;
            let document = read_document(input.as_deref())?;
            let value = pointer.get(&document)?;
            write_json(io::stdout().lock(), value, pretty, "stdout")
        }
        Commands::Set {
            pointer,
            value,
            input,
            string,
            output,
        } => {
            let pointer = Pointer::parse_with(&pointer, &limits)?;
            let value = if string {
                Document::from(value)
            } else {
                serde_json::from_str(&value).map_err(|source| CliError::Json {
                    context: "VALUE".to_string(),
                    source,
                })?
            };
            let document = read_document(input.as_deref())?;
            let updated = pointer.set(&document, value)?;
            info!(pointer = %pointer, "value written");

            match output {
                Some(path) => {
                    let file = File::create(&path).map_err(|source| io_error(&path, source))?;
                    write_json(BufWriter::new(file), &updated, pretty, &path.display().to_string())
                }
                None => write_json(io::stdout().lock(), &updated, pretty, "stdout"),
            }
        }
        Commands::Build { tokens } => {
            let pointer = Pointer::build(&tokens);
            debug!(tokens = tokens.len(), pointer = %pointer, "built pointer");
            let mut out = io::stdout().lock();
            writeln!(out, "{pointer}").map_err(|source| io_error(Path::new("stdout"), source))
        }
        Commands::Split { pointer } => {
            let pointer = Pointer::parse_with(&pointer, &limits)?;
            write_json(io::stdout().lock(), &pointer.split(), pretty, "stdout")
        }
    }
}

/// Read a JSON document from `path`, or stdin for `None` and `-`.
fn read_document(path: Option<&Path>) -> Result<Document, CliError> {
    match path {
        Some(path) if path != Path::new("-") => {
            debug!(path = %path.display(), "reading document");
            let file = File::open(path).map_err(|source| io_error(path, source))?;
            parse_document(BufReader::new(file), &path.display().to_string())
        }
        _ => {
            debug!("reading document from stdin");
            parse_document(io::stdin().lock(), "stdin")
        }
    }
}

fn parse_document<R: Read>(reader: R, context: &str) -> Result<Document, CliError> {
    serde_json::from_reader(reader).map_err(|source| CliError::Json {
        context: context.to_string(),
        source,
    })
}

fn write_json<W: Write, T: serde::Serialize + ?Sized>(
    mut writer: W,
    value: &T,
    pretty: bool,
    target: &str,
) -> Result<(), CliError> {
    let result = if pretty {
        serde_json::to_writer_pretty(&mut writer, value)
    } else {
        serde_json::to_writer(&mut writer, value)
    };
    result.map_err(|source| CliError::Json {
        context: target.to_string(),
        source,
    })?;
    writeln!(writer)
        .and_then(|()| writer.flush())
        .map_err(|source| io_error(Path::new(target), source))
}

fn io_error(path: &Path, source: io::Error) -> CliError {
    CliError::Io {
        path: path.display().to_string(),
        source,
    }
}
