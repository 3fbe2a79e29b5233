//! Minimax CLI
//!
//! Builds a tree, collects its leaf values, evaluates it and prints the
//! result.
//!
//! ```bash
//! minimax --depth 3 --values 3,5,2,9 --algorithm alpha-beta
//! minimax --depth 6 --random --seed 42 --compare --format json
//! minimax --config run.toml --verbose
//! ```

mod cli;
mod config;
mod prompt;
mod render;

use anyhow::{bail, Context, Result};
use clap::Parser;
use game_tree::{Algorithm, GameTree, RandomValues, TreeSnapshot};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::cli::Args;
use crate::config::{LeafConfig, OutputFormat, RunConfig};
use crate::prompt::PromptValues;
use crate::render::Comparison;

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn fill_leaves(tree: &mut GameTree, leaves: &LeafConfig) -> Result<()> {
    match leaves {
        LeafConfig::Fixed { values } => tree.assign_leaf_values(values)?,
        LeafConfig::Random { seed, min, max } => {
            info!(seed, min, max, "random leaf values");
            let mut source = RandomValues::new(*seed, *min, *max);
            match tree.assign_leaves(&mut source) {
                Ok(()) => {}
                Err(never) => match never {},
            }
        }
        LeafConfig::Prompt => tree
            .assign_leaves(&mut PromptValues)
            .context("failed to read leaf values")?,
    }
    Ok(())
}

fn evaluate(tree: &mut GameTree, algorithm: Algorithm) -> Result<TreeSnapshot> {
    let outcome = algorithm.run(tree)?;
    Ok(TreeSnapshot::new(tree, algorithm, &outcome))
}

fn run(config: &RunConfig) -> Result<String> {
    let mut tree = GameTree::build(config.depth)?;
    fill_leaves(&mut tree, &config.leaves)?;

    if config.compare {
        let mut plain = tree.clone();
        let cmp = Comparison {
            minimax: evaluate(&mut plain, Algorithm::Minimax)?,
            alpha_beta: evaluate(&mut tree, Algorithm::AlphaBeta)?,
        };
        if cmp.minimax.value != cmp.alpha_beta.value {
            bail!(
                "evaluators disagree: minimax {} vs alpha-beta {}",
                cmp.minimax.value,
                cmp.alpha_beta.value
            );
        }
        return match config.format {
            OutputFormat::Text => Ok(render::comparison_text(&cmp)),
            OutputFormat::Json => render::json(&cmp),
        };
    }

    let snap = evaluate(&mut tree, config.algorithm)?;
    match config.format {
        OutputFormat::Text => Ok(render::text(&snap)),
        OutputFormat::Json => render::json(&snap),
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let config = match &args.config {
        Some(path) => RunConfig::load(path)?,
        None => RunConfig::default(),
    }
    .overlay(&args);

    let output = run(&config)?;
    println!("{}", output.trim_end());
    Ok(())
}
