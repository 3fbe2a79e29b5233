//! Command-line arguments

use std::path::PathBuf;

use clap::Parser;
use game_tree::Algorithm;

use crate::config::OutputFormat;

/// Build a binary minimax tree, fill in its leaves, and evaluate it.
#[derive(Parser, Debug, Default)]
#[command(name = "minimax", version)]
pub struct Args {
    /// TOML file with run settings; flags below override it
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Number of levels, root included
    #[arg(short, long, allow_negative_numbers = true)]
    pub depth: Option<i64>,

    /// minimax or alpha-beta
    #[arg(short, long)]
    pub algorithm: Option<Algorithm>,

    /// Leaf values, left to right (e.g. 3,5,2,9)
    #[arg(long, value_delimiter = ',', allow_negative_numbers = true)]
    pub values: Option<Vec<i32>>,

    /// Fill the leaves with seeded random values
    #[arg(long, conflicts_with = "values")]
    pub random: bool,

    /// Seed for random leaves (from --random or the config file)
    #[arg(long)]
    pub seed: Option<u64>,

    #[arg(long, allow_negative_numbers = true)]
    pub min: Option<i32>,

    #[arg(long, allow_negative_numbers = true)]
    pub max: Option<i32>,

    /// Ask for every leaf value on the terminal
    #[arg(long, conflicts_with_all = ["values", "random"])]
    pub prompt: bool,

    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Run both evaluators on the same leaves and report the difference
    #[arg(long)]
    pub compare: bool,

    /// Log every cutoff to stderr
    #[arg(short, long)]
    pub verbose: bool,
}
