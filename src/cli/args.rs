//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand, ValueHint};

use crate::config::OutputFormat;

/// Explore partition-tree explanations: drill into nested variable partitions and select leaf verdicts
#[derive(Parser, Debug)]
#[command(name = "expltree")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase log verbosity (-d info, -dd debug, -ddd trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub debug: u8,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Config file (applied on top of the global config)
    #[arg(long, global = true, value_hint = ValueHint::FilePath, env = "EXPLTREE_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Explanation document and column selection
#[derive(Args, Debug)]
pub struct InputArgs {
    /// Explanation document (JSON); `-` reads stdin
    #[arg(value_hint = ValueHint::FilePath, env = "EXPLTREE_FILE")]
    pub file: PathBuf,

    /// Column to show (default: all columns; `select` uses column 0)
    #[arg(short, long)]
    pub column: Option<usize>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show explanations as partition trees
    Tree {
        #[command(flatten)]
        input: InputArgs,
        /// Show payload summaries next to leaves
        #[arg(short, long)]
        payload: bool,
    },

    /// List every leaf with its selection path
    Leaves {
        #[command(flatten)]
        input: InputArgs,
    },

    /// Drill into an explanation interactively (fzf) and print the selected leaf
    Select {
        #[command(flatten)]
        input: InputArgs,
        /// Output format (overrides config)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show merged config
    Show,

    /// Create global config template
    Init {
        /// Overwrite an existing config file
        #[arg(short, long)]
        force: bool,
    },

    /// Show config paths
    Path,
}
