//! bin2ea - converts a binary file into assembler hex data statements.

mod args;
mod document;

use std::fs;
use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use tracing::debug;

use b2ea_core::{encode_to_string, Encoding};

use crate::args::{parse_args, Invocation, OutputSink, RunConfig};

fn main() -> ExitCode {
    #[cfg(feature = "logging")]
    init_logging();

    let argv: Vec<String> = std::env::args().skip(1).collect();

    if argv.is_empty() {
        args::print_usage();
        return ExitCode::SUCCESS;
    }

    let config = match parse_args(&argv) {
        Ok(Invocation::Run(config)) => config,
        Ok(Invocation::Help) => return ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("bin2ea: {err}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(err) = run(&config) {
        eprintln!("bin2ea: {err:#}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

fn run(config: &RunConfig) -> Result<()> {
    let data = fs::read(&config.input)
        .with_context(|| format!("Couldn't open file for read: {}", config.input))?;
    debug!("read {} bytes from {}", data.len(), config.input);

    let encoding = Encoding {
        width: config.width,
        endianness: config.endianness,
        policy: config.policy,
    };

    let code = encode_to_string(&data, &encoding)?;
    let document = document::wrap_document(&code, &config.document);
    debug!("emitted {} characters of code", document.len());

    // The document is assembled in full before the sink is opened, so a
    // failure past this point never leaves a truncated output file behind.
    match &config.sink {
        OutputSink::Stdout => io::stdout()
            .write_all(document.as_bytes())
            .context("Couldn't write to standard output")?,
        OutputSink::File(path) => fs::write(path, &document)
            .with_context(|| format!("Couldn't open file for write: {path}"))?,
    }

    Ok(())
}

#[cfg(feature = "logging")]
fn init_logging() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_env("BIN2EA_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
