//! Purpose: `jsonidx` CLI entry point.
//! Role: Binary crate root; loads a JSON document, applies indexes, prints the result.
//! Invariants: Each positional argument is exactly one index; no expression parsing happens here.
//! Invariants: Results go to stdout as JSON; errors go to stderr (text on a TTY, JSON otherwise).
//! Invariants: Process exit code is derived from `core::error::to_exit_code`.
use std::fs::File;
use std::io::{self, BufReader, IsTerminal};
use std::path::{Path, PathBuf};

use clap::{Parser, ValueHint, error::ErrorKind as ClapErrorKind};
use serde_json::{Map, Value, json};
use std::error::Error as StdError;
use tracing_subscriber::EnvFilter;

use jsonidx::core::error::to_exit_code;
use jsonidx::json::parse;
use jsonidx::{Error, ErrorKind, EvaluationContext, Index};

#[derive(Parser, Debug)]
#[command(
    name = "jsonidx",
    version,
    about = "Index into JSON arrays: `jsonidx 1 '0'` reads doc[1]['0']"
)]
struct Cli {
    #[arg(
        long,
        short = 'f',
        help = "Read the document from this file instead of stdin",
        value_hint = ValueHint::FilePath
    )]
    file: Option<PathBuf>,
    #[arg(long, help = "Pretty-print the result")]
    pretty: bool,
    #[arg(
        allow_negative_numbers = true,
        value_name = "INDEX",
        help = "Indexes applied left to right; quote as '1' for a string index"
    )]
    indexes: Vec<String>,
}

fn main() {
    init_tracing();
    let exit_code = match run() {
        Ok(code) => code,
        Err(err) => {
            emit_error(&err);
            to_exit_code(err.kind())
        }
    };
    std::process::exit(exit_code);
}

fn run() -> Result<i32, Error> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => match err.kind() {
            ClapErrorKind::DisplayHelp | ClapErrorKind::DisplayVersion => {
                err.print().map_err(|io_err| {
                    Error::new(ErrorKind::Io)
                        .with_message("failed to write help")
                        .with_source(io_err)
                })?;
                return Ok(0);
            }
            _ => {
                return Err(Error::new(ErrorKind::Usage)
                    .with_message(clap_error_summary(&err))
                    .with_hint("Try `jsonidx --help`."));
            }
        },
    };

    let document = load_document(cli.file.as_deref())?;
    let path: Vec<Index> = cli.indexes.iter().map(|arg| Index::from_arg(arg)).collect();
    tracing::debug!(indexes = path.len(), "reading index path");

    let context = EvaluationContext::default();
    let result = context.read_path(&document, &path)?.to_json();
    let rendered = if cli.pretty {
        serde_json::to_string_pretty(&result)
    } else {
        serde_json::to_string(&result)
    }
    .map_err(|err| {
        Error::new(ErrorKind::Internal)
            .with_message("failed to encode result")
            .with_source(err)
    })?;
    println!("{rendered}");
    Ok(0)
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(io::stderr)
        .try_init();
}

fn load_document(file: Option<&Path>) -> Result<Value, Error> {
    match file {
        Some(path) => {
            let handle = File::open(path).map_err(|err| {
                Error::new(ErrorKind::Io)
                    .with_message("failed to open input")
                    .with_path(path)
                    .with_source(err)
            })?;
            parse::from_reader(BufReader::new(handle))
                .map_err(|err| decode_error(err, &path.display().to_string()).with_path(path))
        }
        None => parse::from_reader(io::stdin().lock()).map_err(|err| decode_error(err, "stdin")),
    }
}

fn decode_error(err: serde_json::Error, context: &str) -> Error {
    let kind = if err.is_io() {
        ErrorKind::Io
    } else {
        ErrorKind::Usage
    };
    Error::new(kind)
        .with_message("failed to decode input document")
        .with_hint(parse::hint_for_error(&err, context))
        .with_source(err)
}

fn clap_error_summary(err: &clap::Error) -> String {
    for line in err.to_string().lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        if let Some(rest) = trimmed.strip_prefix("error:") {
            return rest.trim().to_string();
        }
        return trimmed.to_string();
    }
    "invalid arguments".to_string()
}

fn emit_error(err: &Error) {
    if io::stderr().is_terminal() {
        eprintln!("{}", error_text(err));
        return;
    }

    let json = serde_json::to_string(&error_json(err)).unwrap_or_else(|_| {
        "{\"error\":{\"kind\":\"Internal\",\"message\":\"json encode failed\"}}".to_string()
    });
    eprintln!("{json}");
}

fn error_message(err: &Error) -> String {
    if let Some(message) = err.message() {
        return message.to_string();
    }
    match err.kind() {
        ErrorKind::Internal => "internal error".to_string(),
        ErrorKind::Usage => "usage error".to_string(),
        ErrorKind::NotFound => "not found".to_string(),
        ErrorKind::Unsupported => "operation not supported".to_string(),
        ErrorKind::Access => "access failed".to_string(),
        ErrorKind::Io => "i/o error".to_string(),
    }
}

fn error_causes(err: &Error) -> Vec<String> {
    let mut causes = Vec::new();
    let mut cur = err.source();
    while let Some(source) = cur {
        causes.push(source.to_string());
        cur = source.source();
    }
    causes
}

fn error_json(err: &Error) -> Value {
    let mut inner = Map::new();
    inner.insert("kind".to_string(), json!(format!("{:?}", err.kind())));
    inner.insert("message".to_string(), json!(error_message(err)));
    if let Some(hint) = err.hint() {
        inner.insert("hint".to_string(), json!(hint));
    }
    if let Some(index) = err.index() {
        inner.insert("index".to_string(), json!(index));
    }
    if let Some(path) = err.path() {
        inner.insert("path".to_string(), json!(path.display().to_string()));
    }
    let causes = error_causes(err);
    if !causes.is_empty() {
        inner.insert("causes".to_string(), json!(causes));
    }

    let mut outer = Map::new();
    outer.insert("error".to_string(), Value::Object(inner));
    Value::Object(outer)
}

fn error_text(err: &Error) -> String {
    let mut lines = vec![format!("error: {}", error_message(err))];
    if let Some(hint) = err.hint() {
        lines.push(format!("hint: {hint}"));
    }
    if let Some(index) = err.index() {
        lines.push(format!("index: {index}"));
    }
    if let Some(path) = err.path() {
        lines.push(format!("path: {}", path.display()));
    }
    for cause in error_causes(err) {
        lines.push(format!("caused by: {cause}"));
    }
    lines.join("\n")
}
