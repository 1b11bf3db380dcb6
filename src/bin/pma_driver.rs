//! Line-oriented driver for the packed memory array.
//!
//! Replays a command file against a [`PmaSet`] and writes the results to an
//! output file. One command per line, whitespace-separated; a blank line
//! stops processing:
//!
//! - `INC n` inserts `n`
//! - `REM n` removes `n`
//! - `SUC n` prints the successor of `n`, or `n` itself if none exists
//! - `IMP` prints the current items in order, space-separated
//!
//! Unknown commands are reported to stderr and skipped; a wrong argument
//! count or a non-numeric argument is fatal.

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use thiserror::Error;

use pma::{PmaError, PmaSet};

/// Replays a line-oriented command file against a packed memory array.
#[derive(Parser, Debug)]
#[command(name = "pma_driver", version, about)]
struct Cli {
    /// File holding one command per line: INC n, REM n, SUC n, or IMP.
    input: PathBuf,

    /// File the SUC and IMP results are written to (created or truncated).
    output: PathBuf,
}

#[derive(Debug, Error)]
enum DriverError {
    #[error("line {line}: {command} takes {expected} argument(s): {text}")]
    BadArity {
        line: usize,
        command: &'static str,
        expected: usize,
        text: String,
    },

    #[error("line {line}: invalid integer {token:?}: {text}")]
    BadNumber { line: usize, token: String, text: String },

    #[error("could not open {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Io(#[from] io::Error),

    #[error(transparent)]
    Store(#[from] PmaError),
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match open_and_run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("{error}");
            ExitCode::FAILURE
        }
    }
}

fn open_and_run(cli: &Cli) -> Result<(), DriverError> {
    let input = File::open(&cli.input).map_err(|source| DriverError::Open {
        path: cli.input.clone(),
        source,
    })?;
    let output = File::create(&cli.output).map_err(|source| DriverError::Open {
        path: cli.output.clone(),
        source,
    })?;

    let mut writer = BufWriter::new(output);
    run(BufReader::new(input), &mut writer)?;
    writer.flush()?;
    Ok(())
}

/// Processes the command stream until it ends or a blank line is read.
fn run(input: impl BufRead, mut output: impl Write) -> Result<(), DriverError> {
    let mut store: PmaSet<i64> = PmaSet::new();

    for (index, line) in input.lines().enumerate() {
        let line = line?;
        let number = index + 1;
        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.is_empty() {
            break;
        }

        match tokens[0] {
            "INC" => {
                let value = parse_argument("INC", &tokens, number, &line)?;
                match store.insert(value) {
                    // Re-inserting a present value has no observable effect.
                    Ok(()) | Err(PmaError::DuplicateKey) => {}
                    Err(error) => return Err(error.into()),
                }
            }
            "REM" => {
                let value = parse_argument("REM", &tokens, number, &line)?;
                store.remove(&value);
            }
            "SUC" => {
                let value = parse_argument("SUC", &tokens, number, &line)?;
                let answer = store.successor(&value).copied().unwrap_or(value);
                writeln!(output, "{answer}")?;
            }
            "IMP" => {
                if tokens.len() != 1 {
                    return Err(DriverError::BadArity {
                        line: number,
                        command: "IMP",
                        expected: 0,
                        text: line.clone(),
                    });
                }
                for item in &store {
                    write!(output, "{item} ")?;
                }
                writeln!(output)?;
            }
            unknown => {
                eprintln!("line {number}: unknown command {unknown:?}: {line}");
            }
        }
    }

    Ok(())
}

/// Extracts the single integer argument of `command`, or fails fatally.
fn parse_argument(command: &'static str, tokens: &[&str], number: usize, text: &str) -> Result<i64, DriverError> {
    if tokens.len() != 2 {
        return Err(DriverError::BadArity {
            line: number,
            command,
            expected: 1,
            text: text.to_owned(),
        });
    }

    tokens[1].parse().map_err(|_| DriverError::BadNumber {
        line: number,
        token: tokens[1].to_owned(),
        text: text.to_owned(),
    })
}
