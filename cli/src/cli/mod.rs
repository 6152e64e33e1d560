pub mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "iqc-relay")]
#[command(author, version, about = "JSON relay - forwards fixed GET actions to the IQC script service")]
pub struct Cli {
    /// Path to config file (checked in order: local config.toml, ~/.config/iqc-relay/config.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the relay server
    Start {
        /// Port to listen on (overrides config and LISTEN_PORT)
        #[arg(short, long)]
        port: Option<u16>,
    },
}
