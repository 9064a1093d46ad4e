//! `aes256cbc` binary entry point.
//!
//! Sequence:
//! 1. Load and validate logging [`config::Config`] from the environment.
//! 2. Initialise tracing (stderr).
//! 3. Extract and validate the four positional arguments.
//! 4. Build key material and run one AES-256-CBC operation.
//! 5. Print the result to stdout, or a one-line diagnostic to stderr.

mod cli;
mod config;
mod crypto;
mod invoker;
mod telemetry;

use std::process::ExitCode;

use common::CliError;
use tracing::{debug, info};

use cli::Args;
use crypto::Aes256Cbc;

fn main() -> ExitCode {
    // -----------------------------------------------------------------------
    // 1. Configuration
    // -----------------------------------------------------------------------
    let cfg = match config::Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            // Telemetry is not yet up; write to stderr directly.
            eprintln!("ERROR: configuration invalid: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    // -----------------------------------------------------------------------
    // 2. Telemetry
    // -----------------------------------------------------------------------
    if let Err(e) = telemetry::init(&cfg) {
        eprintln!("ERROR: {e:#}");
        return ExitCode::FAILURE;
    }
    debug!(version = env!("CARGO_PKG_VERSION"), "aes256cbc starting");

    // -----------------------------------------------------------------------
    // 3-5. Validate, invoke, report
    // -----------------------------------------------------------------------
    match execute() {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            match &e {
                CliError::Usage(reason) => debug!(%reason, "usage rejected"),
                CliError::InputTooLong { len } => debug!(len, "input rejected"),
                _ => {}
            }
            info!(kind = e.kind(), "invocation failed");
            eprintln!("{e}");
            ExitCode::from(e.exit_code())
        }
    }
}

fn execute() -> Result<String, CliError> {
    let args = Args::from_argv(std::env::args_os())?;
    let request = args.validate()?;
    invoker::run(&Aes256Cbc, &request)
}
