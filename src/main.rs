use std::{
    fs,
    path::{Path, PathBuf},
    process::ExitCode,
};

use clap::{CommandFactory, Parser, Subcommand};
use mansa::{
    diagnostics,
    errors::errors::Error,
    lexer::stream::{CharStream, EOF},
};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(
    name = "Mansa",
    bin_name = "mansa",
    version = concat!("Genesis ", env!("CARGO_PKG_VERSION")),
    about = "Mansa: Building the PERFECT systems language.",
    after_help = ": Embryonic Bootstrapper for Building the PERFECT systems language."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Print every positioned character of a source file
    Chars {
        /// Path to the source file
        file: PathBuf,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Some(Commands::Chars { file }) => chars(&file),
        None => match Cli::command().print_help() {
            Ok(()) => ExitCode::SUCCESS,
            Err(err) => {
                eprintln!("Error: failed to print help: {}", err);
                ExitCode::FAILURE
            }
        },
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn chars(file: &Path) -> ExitCode {
    let file_name = file.as_os_str().to_string_lossy();

    let bytes = match fs::read(file) {
        Ok(bytes) => bytes,
        Err(err) => {
            eprintln!("Error: failed to read {}: {}", file_name, err);
            return ExitCode::FAILURE;
        }
    };
    info!(file = %file_name, bytes = bytes.len(), "read source file");

    let stream = match String::from_utf8(bytes) {
        Ok(source) => CharStream::new(source),
        Err(err) => {
            let error = Error::from(err.utf8_error());
            eprint!("{}", diagnostics::invalid_source(err.as_bytes(), &file_name, &error));
            return ExitCode::FAILURE;
        }
    };

    for (index, ch, position) in stream {
        if ch == EOF && position.span().is_empty() {
            println!("{}\tEOF\t{}", index, position);
        } else {
            println!("{}\t{:?}\t{}", index, ch, position);
        }
    }

    ExitCode::SUCCESS
}
