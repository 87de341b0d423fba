//! Command handlers
//!
//! Each handler builds its use case through the factory, runs it, and
//! renders the result as text or JSON.

mod diff;
mod init;
mod outputs;
mod plan;
mod provision;
mod validate;

use anyhow::Result;

use iotsim::config::ConfigWarning;
use iotsim::presentation::{output, Commands};

pub fn dispatch(command: Commands, json: bool) -> Result<()> {
    match command {
        Commands::Plan {
            config,
            format,
            out,
        } => plan::cmd_plan(&config, format, out, json),
        Commands::Validate { config } => validate::cmd_validate(&config, json),
        Commands::Outputs { config } => outputs::cmd_outputs(&config, json),
        Commands::Diff { config, against } => diff::cmd_diff(&config, &against, json),
        Commands::Provision {
            config,
            identity_dir,
            store,
        } => provision::cmd_provision(&config, identity_dir, store, json),
        Commands::Init {
            variant,
            path,
            force,
        } => init::cmd_init(variant, &path, force, json),
    }
}

/// Warnings go to stderr in text mode; JSON events carry their own
fn print_warnings(warnings: &[ConfigWarning], json: bool) {
    if !json && !warnings.is_empty() {
        eprint!("{}", output::render_warnings(warnings));
    }
}
