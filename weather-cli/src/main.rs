//! Binary crate for the `weather` command-line tool.
//!
//! This crate focuses on:
//! - Parsing the location argument
//! - Human-friendly output formatting
//! - Mapping failures to the process exit status

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod output;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    init_tracing();

    let status = match cli::Cli::try_parse() {
        Ok(cmd) => run_status(cmd.run().await),
        Err(err) => {
            print!("{}", err.render());
            usage_status(&err)
        }
    };

    ExitCode::from(status)
}

/// Exit status after clap rejected the arguments; --help and --version land here too.
fn usage_status(err: &clap::Error) -> u8 {
    if err.use_stderr() { 1 } else { 0 }
}

/// Exit status of a run; failures are reported on stdout alongside normal output.
fn run_status(result: anyhow::Result<()>) -> u8 {
    match result {
        Ok(()) => 0,
        Err(err) => {
            println!("Error: {err:#}");
            1
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
