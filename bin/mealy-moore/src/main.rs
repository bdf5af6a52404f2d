use std::io::{IsTerminal, Read};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use mealy_moore::prelude::*;
use thiserror::Error;
use tracing::{debug, error};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::Layer;

/// Converts between Mealy and Moore machines given as integer transition tables.
#[derive(Debug, Clone, clap::Parser)]
struct Cli {
    #[clap(subcommand)]
    direction: Direction,
    /// How the result is written to stdout.
    #[clap(short = 'f', long, value_enum, default_value = "json", global = true)]
    format: Format,
    /// Increases the amount of logging on stderr, may be given multiple times.
    #[clap(short = 'v', long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Debug, Clone, Subcommand)]
enum Direction {
    /// Reads a Mealy table (one line of `next output` pairs per state) and splits it into a Moore table.
    ToMoore {
        /// File holding the table, stdin is read if omitted.
        file: Option<PathBuf>,
    },
    /// Reads a Moore table (a line of outputs followed by one line of successors per state) and folds it into a Mealy table.
    ToMealy {
        /// File holding the table, stdin is read if omitted.
        file: Option<PathBuf>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Json,
    PrettyJson,
    Table,
}

#[derive(Debug, Error)]
enum Failure {
    #[error("could not read input: {0}")]
    Io(#[from] std::io::Error),
    #[error("{0}")]
    Table(#[from] ParseError),
    #[error("could not serialize result: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl Failure {
    fn exit_code(&self) -> ExitCode {
        match self {
            Failure::Table(_) => ExitCode::from(2),
            _ => ExitCode::FAILURE,
        }
    }
}

fn read_input(file: Option<&PathBuf>) -> Result<String, Failure> {
    match file {
        Some(path) => {
            debug!("reading table from {}", path.display());
            Ok(std::fs::read_to_string(path)?)
        }
        None => {
            debug!("reading table from stdin");
            let mut raw = String::new();
            std::io::stdin().read_to_string(&mut raw)?;
            Ok(raw)
        }
    }
}

fn render<T: Show>(table: &T, highlight: bool) -> String {
    if highlight {
        table.show_highlighted()
    } else {
        table.show()
    }
}

fn run(cli: &Cli) -> Result<String, Failure> {
    let highlight = std::io::stdout().is_terminal();

    match &cli.direction {
        Direction::ToMoore { file } => {
            let raw = read_input(file.as_ref())?;
            match cli.format {
                Format::Table => {
                    let mealy = parse_mealy(&raw)?;
                    let moore = mealy.to_moore();
                    Ok(format!(
                        "Mealy machine\n{}\n\nMoore machine\n{}",
                        render(&mealy, highlight),
                        render(&moore, highlight)
                    ))
                }
                Format::Json => Ok(mealy_to_moore(&raw)?.to_json()?),
                Format::PrettyJson => Ok(mealy_to_moore(&raw)?.to_json_pretty()?),
            }
        }
        Direction::ToMealy { file } => {
            let raw = read_input(file.as_ref())?;
            match cli.format {
                Format::Table => {
                    let moore = parse_moore(&raw)?;
                    let mealy = moore.to_mealy();
                    Ok(format!(
                        "Moore machine\n{}\n\nMealy machine\n{}",
                        render(&moore, highlight),
                        render(&mealy, highlight)
                    ))
                }
                Format::Json => Ok(moore_to_mealy(&raw)?.to_json()?),
                Format::PrettyJson => Ok(moore_to_mealy(&raw)?.to_json_pretty()?),
            }
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_filter(level),
        )
        .init();

    match run(&cli) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(failure) => {
            error!("conversion failed: {failure}");
            eprintln!("error: {failure}");
            failure.exit_code()
        }
    }
}
