use clap::Parser;
use color_eyre::Result;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use matrix_summary::error::MatrixError;
use matrix_summary::input::read_matrix;
use matrix_summary::matrix::parse_table_rows;
use matrix_summary::report;
use matrix_summary::summary::summarize;

/// Smoke-test matrix summarizer
#[derive(Parser, Debug)]
#[command(
    version,
    about = "Summarize accuracy and confidence statistics from the smoke-test matrix"
)]
struct Args {
    /// Path to the markdown matrix file
    #[arg(long, default_value = "docs/smoke-test-matrix-v0.1.0-beta.md")]
    matrix: PathBuf,
}

fn main() -> Result<ExitCode> {
    color_eyre::install()?;
    env_logger::init();

    let args = Args::parse();

    let content = match read_matrix(&args.matrix) {
        Ok(content) => content,
        Err(err @ MatrixError::NotFound(_)) => {
            // Reported on stdout, like the rest of the report surface
            println!("{err}");
            return Ok(ExitCode::FAILURE);
        }
        Err(err) => return Err(err.into()),
    };

    let rows = parse_table_rows(&content);
    log::debug!(
        "parsed {} executed rows from {}",
        rows.len(),
        args.matrix.display()
    );

    let mut stdout = io::stdout().lock();
    match summarize(&rows) {
        Some(summary) => report::render(&summary, &mut stdout)?,
        None => writeln!(stdout, "{}", report::EMPTY_MESSAGE)?,
    }

    Ok(ExitCode::SUCCESS)
}
