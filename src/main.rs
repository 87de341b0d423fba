//! iotsim CLI
//!
//! Usage: iotsim <COMMAND>
//!
//! Commands:
//!   plan       Derive the topology and print (or write) the resource plan
//!   validate   Validate the deployment config
//!   outputs    Print the stack outputs
//!   diff       Compare the derived plan with a written one
//!   provision  Issue and publish the device identity
//!   init       Write a commented config template

mod commands;

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use iotsim::presentation::{output, Cli};

/// Overrides the `-v` derived filter when set
const LOG_ENV: &str = "IOTSIM_LOG";

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let json = cli.json;
    match commands::dispatch(cli.command, json) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if json {
                let _ = output::emit(output::error_event(&err));
            } else {
                eprint!("{}", output::render_error(&err));
            }
            ExitCode::FAILURE
        }
    }
}

/// Logs go to stderr so stdout stays clean for plans and JSON events
fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "iotsim=info,warn",
        1 => "iotsim=debug,warn",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(verbose > 0)
        .init();
}
