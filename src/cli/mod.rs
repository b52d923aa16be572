// src/cli/mod.rs — CLI definition (clap derive)

pub mod compare;
pub mod funds;
pub mod models;

use clap::{Parser, Subcommand, ValueEnum};

use crate::infra::config::Config;
use crate::playground::SimilarityMethod;

#[derive(Parser)]
#[command(
    name = "embedscope",
    about = "Compare text embeddings: similarity scatter and 3-D PCA view",
    version
)]
pub struct Cli {
    /// Embedding model (see `embedscope models`)
    #[arg(short, long, global = true)]
    pub model: Option<String>,

    /// Scoring service base URL
    #[arg(long, global = true)]
    pub endpoint: Option<String>,

    /// Config file path
    #[arg(long, global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score texts once and print the results (first text is the anchor)
    Compare {
        /// Texts to compare
        #[arg(required = true)]
        texts: Vec<String>,
        /// Metric used for the ranking
        #[arg(long, value_enum, default_value_t = MethodArg::Cosine)]
        method: MethodArg,
        /// Print the raw scoring result as JSON
        #[arg(long)]
        json: bool,
    },
    /// List the models the service can embed with
    Models,
    /// Show how much of the service budget is left
    Funds,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum MethodArg {
    Cosine,
    Euclidean,
    DotProduct,
}

impl From<MethodArg> for SimilarityMethod {
    fn from(m: MethodArg) -> Self {
        match m {
            MethodArg::Cosine => SimilarityMethod::Cosine,
            MethodArg::Euclidean => SimilarityMethod::Euclidean,
            MethodArg::DotProduct => SimilarityMethod::DotProduct,
        }
    }
}

impl Cli {
    /// Fold command-line overrides into the loaded config.
    pub fn apply_overrides(&self, config: &mut Config) -> anyhow::Result<()> {
        if let Some(endpoint) = &self.endpoint {
            config.service.base_url = endpoint.clone();
        }
        if let Some(model) = &self.model {
            config.models.default = model.clone();
        }
        config.validate()?;
        Ok(())
    }
}
