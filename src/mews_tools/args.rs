use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Where the frontend keeps its lookup data files, relative to the repo root.
pub const DEFAULT_UTILS_DIR: &str = "frontend/src/utils";

#[derive(Parser, Debug)]
#[command(name = "mews-tools")]
#[command(about = "Maintenance utilities for MEWS lookup data", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the hard-coded lookup lists with their options sorted
    #[command(alias = "ls")]
    Lists,

    /// Rewrite the lookup data files so their arrays are sorted
    #[command(alias = "sort")]
    Normalize {
        /// Directory holding the lookup data files
        #[arg(long, default_value = DEFAULT_UTILS_DIR)]
        dir: PathBuf,
    },
}
