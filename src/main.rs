// src/main.rs

use std::io::{self, Write};
use std::process::ExitCode;

use batblock::core::block::StatusBlock;
use batblock::core::reporter::{Report, StatusReporter};
use tracing_subscriber::EnvFilter;

// Exit codes the bar framework keys on: 1 for any read/parse failure, 33 as
// the distinguished urgent-low-battery signal.
const EXIT_FAILURE: u8 = 1;
const EXIT_URGENT: u8 = 33;

fn main() -> ExitCode {
    // Diagnostics go to stderr only; stdout belongs to the bar protocol.
    // Silent unless RUST_LOG enables something.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let stdout = io::stdout();
    let mut stdout = stdout.lock();

    let reporter = match StatusReporter::new() {
        Ok(reporter) => reporter,
        Err(err) => return fail(&mut stdout, &err),
    };

    match reporter.report() {
        Ok(Report::Status(status)) => {
            if status.write_to(&mut stdout).is_err() {
                return ExitCode::from(EXIT_FAILURE);
            }
            ExitCode::SUCCESS
        }
        Ok(Report::UrgentLow) => {
            let _ = StatusBlock::fallback().write_to(&mut stdout);
            ExitCode::from(EXIT_URGENT)
        }
        Err(err) => fail(&mut stdout, &anyhow::Error::new(err)),
    }
}

// Write the diagnostic to stderr and the fallback pair to stdout; the bar
// still gets its two lines on every failure path.
fn fail<W: Write>(stdout: &mut W, err: &anyhow::Error) -> ExitCode {
    eprint!("[batblock] {err:#}");
    let _ = StatusBlock::fallback().write_to(stdout);
    ExitCode::from(EXIT_FAILURE)
}
