//! CLI type definitions
//!
//! This module contains clap command structures that define the CLI interface.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "bibliotheca-gateway")]
#[command(about = "Bibliotheca gateway - branch metadata and project forwarding", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file (defaults to .bibliotheca/config.yaml + local.yaml)
    #[arg(short, long, global = true, env = "BIBLIOTHECA_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output in JSON format
    #[arg(short, long, global = true)]
    pub json: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Branch management commands
    #[command(subcommand)]
    Branch(BranchCommands),
}

#[derive(Subcommand)]
pub enum BranchCommands {
    /// List the branches of a project
    List {
        /// Project ID
        project: String,
    },

    /// Show a single branch, read fresh from the repository service
    Show {
        /// Project ID
        project: String,

        /// Branch name
        branch: String,
    },

    /// Create a branch from a site configuration file
    Create {
        /// Project ID
        project: String,

        /// Branch name
        branch: String,

        /// Path to the branch's mkdocs.yml
        #[arg(short, long)]
        mkdocs: PathBuf,
    },

    /// Replace a branch's site configuration
    Update {
        /// Project ID
        project: String,

        /// Branch name
        branch: String,

        /// Path to the branch's mkdocs.yml
        #[arg(short, long)]
        mkdocs: PathBuf,
    },

    /// Delete a branch
    Delete {
        /// Project ID
        project: String,

        /// Branch name
        branch: String,
    },
}
