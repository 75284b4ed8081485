//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueHint};

/// Guess the animal you are thinking of, and learn the ones it does not know
#[derive(Parser, Debug)]
#[command(name = "animals")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Knowledge base file
    #[arg(value_hint = ValueHint::FilePath)]
    pub database: Option<PathBuf>,

    /// Create a new knowledge base instead of loading DATABASE
    #[arg(short, long)]
    pub create: bool,

    /// Print the knowledge tree and exit
    #[arg(short, long)]
    pub show: bool,

    /// Print the effective configuration and exit
    #[arg(long)]
    pub show_config: bool,

    /// Debug output: -d info, -dd debug, -ddd trace
    #[arg(short, long, action = ArgAction::Count)]
    pub debug: u8,

    /// Generate shell completions
    #[arg(long, value_enum, value_name = "SHELL")]
    pub completion: Option<clap_complete::Shell>,
}
