//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! ## Design Notes
//!
//! - Global flags (--json, --verbose) are inherited by all subcommands
//! - Every derivation command reads the same `--config` / `--variant` pair

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::application::ConfigSource;
use crate::domain::entities::PlanFormat;
use crate::domain::value_objects::Variant;

/// Default config file name
pub const DEFAULT_CONFIG: &str = "iotsim.toml";

/// iotsim - topology composer for IoT load testing and fault injection
#[derive(Parser, Debug)]
#[command(name = "iotsim")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Machine-readable JSON output
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Where the deployment configuration comes from
#[derive(Args, Debug, Clone)]
pub struct ConfigArgs {
    /// Deployment config file
    #[arg(short, long, default_value = DEFAULT_CONFIG)]
    pub config: PathBuf,

    /// Override the deployment variant
    #[arg(long, value_enum)]
    pub variant: Option<Variant>,
}

impl ConfigArgs {
    pub fn source(&self) -> ConfigSource {
        ConfigSource::new(&self.config).with_variant(self.variant)
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Derive the topology and print (or write) the resource plan
    Plan {
        #[command(flatten)]
        config: ConfigArgs,

        /// Plan format
        #[arg(long, value_enum, default_value_t)]
        format: PlanFormat,

        /// Write the plan to a file instead of stdout
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Validate the deployment config without deriving anything
    Validate {
        #[command(flatten)]
        config: ConfigArgs,
    },

    /// Print the stack outputs of the derived topology
    Outputs {
        #[command(flatten)]
        config: ConfigArgs,
    },

    /// Compare the derived plan with a previously written one
    Diff {
        #[command(flatten)]
        config: ConfigArgs,

        /// Plan file to compare against
        #[arg(long)]
        against: PathBuf,
    },

    /// Issue the device identity and publish it to a parameter store
    Provision {
        #[command(flatten)]
        config: ConfigArgs,

        /// Directory holding `<thing-name>/cert.pem` and `<thing-name>/private.key`
        #[arg(long)]
        identity_dir: PathBuf,

        /// JSON parameter store file
        #[arg(long)]
        store: PathBuf,
    },

    /// Write a commented config template
    Init {
        /// Variant the template is written for
        #[arg(long, value_enum, default_value = "load-testing")]
        variant: Variant,

        /// Where to write the template
        #[arg(short, long, default_value = DEFAULT_CONFIG)]
        path: PathBuf,

        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },
}
