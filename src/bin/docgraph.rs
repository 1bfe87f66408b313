#![allow(clippy::print_stderr)]

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use docgraph::{CodecError, DocumentKey, decode, to_json_string};

/// Validate and normalize encoded component documents.
#[derive(Parser, Debug)]
#[command(name = "docgraph", version, about)]
struct CliArgs {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Decode documents and check every reference resolves.
    Check {
        /// Encoded documents (JSON).
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
    /// Re-encode a document in canonical form on stdout.
    Fmt {
        file: PathBuf,
        /// Indent the output.
        #[arg(long)]
        pretty: bool,
    },
}

fn main() -> Result<ExitCode> {
    docgraph::tracing_config::init_tracing();

    let args = CliArgs::parse();
    match args.command {
        Command::Check { files } => {
            let mut failed = false;
            for file in &files {
                if let Err(message) = check(file)? {
                    eprintln!("{message}");
                    failed = true;
                }
            }
            Ok(if failed { ExitCode::FAILURE } else { ExitCode::SUCCESS })
        }
        Command::Fmt { file, pretty } => {
            let text = read(&file)?;
            let component = match docgraph::from_json_str(&text) {
                Ok(component) => component,
                Err(err) => {
                    eprintln!("{}", describe(&file, &err));
                    return Ok(ExitCode::FAILURE);
                }
            };
            println!("{}", to_json_string(&component, pretty)?);
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn read(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

/// Outer error: the file could not be read. Inner error: the document is
/// invalid, with a printable message.
fn check(path: &Path) -> Result<std::result::Result<(), String>> {
    let text = read(path)?;
    let tree: serde_json::Value = match serde_json::from_str(&text) {
        Ok(tree) => tree,
        Err(err) => return Ok(Err(describe(path, &CodecError::Malformed(err)))),
    };
    match decode(&tree) {
        Ok(component) => {
            println!(
                "{}: ok ({} props, {} types, key {})",
                path.display(),
                component.props.len(),
                component.types.len(),
                DocumentKey::compute(&path.to_string_lossy(), &text)
            );
            Ok(Ok(()))
        }
        Err(err) => Ok(Err(describe(path, &err))),
    }
}

fn describe(path: &Path, err: &CodecError) -> String {
    let code = err.code();
    format!(
        "{}: error {code} [{}]: {err}\n  see {}",
        path.display(),
        code.as_str(),
        code.docs_url()
    )
}
