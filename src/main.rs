use std::{
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
    process::ExitCode,
};

use clap::Parser;
use lang::repl::{self, Mode};

/// Parse source files of the language, or explore the parser interactively.
#[derive(Parser, Debug)]
#[command(name = "lang", version, about)]
struct Cli {
    /// Source file to parse. Starts an interactive session when omitted.
    file: Option<PathBuf>,

    /// Print the token stream instead of the syntax tree
    #[arg(long)]
    tokens: bool,
}

fn main() -> ExitCode {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .try_init();

    let cli = Cli::parse();
    let mode = if cli.tokens { Mode::Tokens } else { Mode::Ast };

    match cli.file {
        Some(path) => run_file(&path, mode),
        None => run_prompt(mode),
    }
}

fn run_file(path: &Path, mode: Mode) -> ExitCode {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) => {
            eprintln!("Error: could not read {}: {}", path.display(), err);
            return ExitCode::FAILURE;
        }
    };

    let name = path.to_string_lossy();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match repl::run_source(&contents, &name, mode, &mut out) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn run_prompt(mode: Mode) -> ExitCode {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let result = repl::start(stdin.lock(), &mut out, mode).and_then(|_| out.flush());

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::FAILURE
        }
    }
}
