//! Report rendering for the `parse` and `tokenize` subcommands.

use std::io::Write;
use std::path::Path;

use jsv_core::{Error, Node, Token};

use crate::OutputFormat;

pub(crate) fn tree_report(root: &Node, output: OutputFormat) -> String {
    match output {
        OutputFormat::Text => format!("Parse Tree:\n{}", root.render()),
        OutputFormat::Json => to_json(root),
    }
}

pub(crate) fn tokens_report(tokens: &[Token], output: OutputFormat) -> String {
    match output {
        OutputFormat::Text => jsv_core::write_dump(tokens),
        OutputFormat::Json => to_json(&tokens),
    }
}

/// `Syntax Error: ...` style line, or the error's JSON form.
pub(crate) fn error_report(e: &Error, output: OutputFormat) -> String {
    match output {
        OutputFormat::Text => format!("{}: {}\n", heading(e), e),
        OutputFormat::Json => to_json(&e.to_json_value()),
    }
}

/// Content rules are reported under the grammar heading, as one class of
/// document error.
fn heading(e: &Error) -> &'static str {
    match e {
        Error::Lexical(_) => "Lexical Error",
        Error::Syntax(_) | Error::Semantic(_) => "Syntax Error",
        Error::Dump(_) => "Token Dump Error",
    }
}

fn to_json<T: serde::Serialize + ?Sized>(value: &T) -> String {
    match serde_json::to_string_pretty(value) {
        Ok(s) => s + "\n",
        Err(e) => format!("{{\"error\": \"serialization error: {}\"}}\n", e),
    }
}

/// Write to the named file, or to stdout.
pub(crate) fn emit(out: Option<&Path>, body: &str) -> std::io::Result<()> {
    match out {
        Some(path) => {
            std::fs::write(path, body)?;
            tracing::debug!(path = %path.display(), "wrote report");
            Ok(())
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(body.as_bytes())?;
            stdout.flush()
        }
    }
}

pub(crate) fn report_error(msg: &str, output: OutputFormat, quiet: bool) {
    if quiet {
        return;
    }
    match output {
        OutputFormat::Text => eprintln!("{}", msg),
        OutputFormat::Json => eprintln!("{}", serde_json::json!({ "error": msg })),
    }
}
