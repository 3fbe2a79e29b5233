//! Run settings, from a TOML file and the command line

use std::path::Path;

use anyhow::{Context, Result};
use clap::ValueEnum;
use game_tree::Algorithm;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::cli::Args;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Where terminal values come from.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "source", rename_all = "lowercase")]
pub enum LeafConfig {
    Fixed {
        values: Vec<i32>,
    },
    Random {
        #[serde(default)]
        seed: u64,
        #[serde(default = "default_min")]
        min: i32,
        #[serde(default = "default_max")]
        max: i32,
    },
    #[default]
    Prompt,
}

fn default_min() -> i32 {
    -10
}

fn default_max() -> i32 {
    10
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    pub depth: i64,
    pub algorithm: Algorithm,
    pub format: OutputFormat,
    pub compare: bool,
    pub leaves: LeafConfig,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            depth: 3,
            algorithm: Algorithm::AlphaBeta,
            format: OutputFormat::Text,
            compare: false,
            leaves: LeafConfig::Prompt,
        }
    }
}

impl RunConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        Self::parse(&contents).with_context(|| format!("failed to parse config {}", path.display()))
    }

    pub fn parse(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Lets command-line flags win over file settings.
    pub fn overlay(mut self, args: &Args) -> Self {
        if let Some(depth) = args.depth {
            self.depth = depth;
        }
        if let Some(algorithm) = args.algorithm {
            self.algorithm = algorithm;
        }
        if let Some(format) = args.format {
            self.format = format;
        }
        self.compare |= args.compare;

        if let Some(values) = &args.values {
            self.leaves = LeafConfig::Fixed {
                values: values.clone(),
            };
        } else if args.random {
            if !matches!(self.leaves, LeafConfig::Random { .. }) {
                self.leaves = LeafConfig::Random {
                    seed: 0,
                    min: default_min(),
                    max: default_max(),
                };
            }
        } else if args.prompt {
            self.leaves = LeafConfig::Prompt;
        }

        if let LeafConfig::Random { seed, min, max } = &mut self.leaves {
            *seed = args.seed.unwrap_or(*seed);
            *min = args.min.unwrap_or(*min);
            *max = args.max.unwrap_or(*max);
        } else if args.seed.is_some() || args.min.is_some() || args.max.is_some() {
            warn!("--seed/--min/--max only apply to random leaves; ignored");
        }
        self
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
