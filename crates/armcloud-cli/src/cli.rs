use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "armcloud",
    about = "Resolve Azure cloud environments and their Resource Manager endpoints",
    version
)]
pub struct Cli {
    /// Output format.
    #[arg(long, default_value = "text", global = true)]
    pub output: OutputFormat,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List the well-known clouds.
    List,

    /// Show one well-known cloud.
    Show {
        /// public, government, china, or a full name such as AzureUSGovernment.
        cloud: String,
    },

    /// Parse a metadata document on disk.
    Parse {
        /// Path to a JSON metadata document.
        file: PathBuf,
    },

    /// Fetch metadata from a Resource Manager endpoint (e.g. Azure Stack).
    Discover {
        /// Base URL of the Resource Manager endpoint.
        #[arg(env = "ARMCLOUD_METADATA_ENDPOINT")]
        endpoint: String,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
