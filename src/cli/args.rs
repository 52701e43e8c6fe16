//! Command line argument parsing for the Parlance CLI using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

/// Parlance - conversational sentence classification
#[derive(Parser, Debug, Clone)]
#[command(name = "parlance")]
#[command(about = "Conversational sentence classification for Rust")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct ParlanceArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl ParlanceArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Classify an analyzed-text file
    Classify(ClassifyArgs),

    /// Inspect a trained model artifact
    #[command(name = "model-info")]
    ModelInfo(ModelInfoArgs),
}

/// Arguments for classifying analyzed text
#[derive(Args, Debug, Clone)]
pub struct ClassifyArgs {
    /// Path to the trained topic model artifact
    #[arg(short, long)]
    pub model: PathBuf,

    /// Label vocabulary the model was trained over
    #[arg(
        long,
        value_delimiter = ',',
        default_value = "greeting,farewell,weather,other"
    )]
    pub labels: Vec<String>,

    /// Path to the analyzed-text JSON file (sentences with tokens and tags)
    #[arg(short, long)]
    pub input: PathBuf,

    /// Unit identifier the text is staged under
    #[arg(long, default_value = "cli")]
    pub unit_id: String,

    /// Disable interrogative detection
    #[arg(long)]
    pub no_interrogatives: bool,
}

/// Arguments for inspecting a model artifact
#[derive(Args, Debug, Clone)]
pub struct ModelInfoArgs {
    /// Path to the model artifact
    #[arg(short, long)]
    pub model: PathBuf,
}

/// Output format options
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
