mod report;

use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand, ValueEnum};
use jsv_core::{Error, Scanner};

use crate::report::{emit, error_report, report_error, tokens_report, tree_report};

/// Document was read but rejected (lexical, syntax, semantic or dump error).
const EXIT_REJECTED: i32 = 1;
/// Input could not be read or the report could not be written.
const EXIT_IO: i32 = 2;

/// Output format for CLI responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    Text,
    Json,
}

/// Strict JSON-like document validator.
#[derive(Parser)]
#[command(
    name = "jsv",
    version,
    about = "Strict JSON-like document validator"
)]
struct Cli {
    /// Output format (text or json)
    #[arg(long, global = true, default_value = "text", value_enum)]
    output: OutputFormat,

    /// Suppress error output on stderr
    #[arg(long, global = true)]
    quiet: bool,

    /// Log pipeline progress to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Scan, parse and validate a document, then print its parse tree
    Parse {
        /// Path to the document, or to a token dump with --tokens
        file: PathBuf,
        /// Read the input as a token dump (one `<tag, value>` per line)
        #[arg(long)]
        tokens: bool,
        /// Write the report (tree or error) to this file
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Scan a document and print its token dump
    Tokenize {
        /// Path to the document
        file: PathBuf,
        /// Write the dump to this file
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let code = match cli.command {
        Commands::Parse { file, tokens, out } => {
            cmd_parse(&file, tokens, out.as_deref(), cli.output, cli.quiet)
        }
        Commands::Tokenize { file, out } => {
            cmd_tokenize(&file, out.as_deref(), cli.output, cli.quiet)
        }
    };
    process::exit(code);
}

fn init_tracing(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn read_input(file: &Path, output: OutputFormat, quiet: bool) -> Option<String> {
    match std::fs::read_to_string(file) {
        Ok(text) => {
            tracing::debug!(path = %file.display(), bytes = text.len(), "read input");
            Some(text)
        }
        Err(e) => {
            let msg = format!("error reading file '{}': {}", file.display(), e);
            report_error(&msg, output, quiet);
            None
        }
    }
}

fn cmd_parse(
    file: &Path,
    dump: bool,
    out: Option<&Path>,
    output: OutputFormat,
    quiet: bool,
) -> i32 {
    let Some(text) = read_input(file, output, quiet) else {
        return EXIT_IO;
    };

    let result = if dump {
        jsv_core::read_dump(&text)
            .map_err(Error::from)
            .and_then(|tokens| {
                tracing::debug!(tokens = tokens.len(), "read token dump");
                jsv_core::analyze_tokens(tokens)
            })
    } else {
        jsv_core::analyze_text(&text)
    };

    match result {
        Ok(root) => {
            tracing::debug!(items = root.children().len(), "document accepted");
            finish(out, &tree_report(&root, output), output, quiet)
        }
        Err(e) => {
            tracing::debug!(kind = e.kind(), code = ?e.code(), "document rejected");
            reject(out, &error_report(&e, output), output, quiet)
        }
    }
}

fn cmd_tokenize(file: &Path, out: Option<&Path>, output: OutputFormat, quiet: bool) -> i32 {
    let Some(text) = read_input(file, output, quiet) else {
        return EXIT_IO;
    };

    match Scanner::new(&text).tokenize() {
        Ok(tokens) => {
            tracing::debug!(tokens = tokens.len(), "scanned document");
            finish(out, &tokens_report(&tokens, output), output, quiet)
        }
        Err(e) => {
            let e = Error::from(e);
            reject(out, &error_report(&e, output), output, quiet)
        }
    }
}

/// Emit a success report; stdout unless `--out` names a file.
fn finish(out: Option<&Path>, body: &str, output: OutputFormat, quiet: bool) -> i32 {
    match emit(out, body) {
        Ok(()) => 0,
        Err(e) => {
            report_error(&format!("error writing report: {}", e), output, quiet);
            EXIT_IO
        }
    }
}

/// Emit a rejection report; stderr unless `--out` names a file.
fn reject(out: Option<&Path>, body: &str, output: OutputFormat, quiet: bool) -> i32 {
    match out {
        Some(_) => {
            if let Err(e) = emit(out, body) {
                report_error(&format!("error writing report: {}", e), output, quiet);
                return EXIT_IO;
            }
        }
        None => {
            if !quiet {
                eprint!("{}", body);
            }
        }
    }
    EXIT_REJECTED
}
