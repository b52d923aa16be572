// src/infra/config.rs — Configuration loading (TOML)

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::infra::errors::PlaygroundError;
use crate::infra::paths;
use crate::playground::types::{SimilarityMethod, ViewMode};

pub const DEFAULT_BASE_URL: &str = "https://embeddings.replit.app";
pub const DEFAULT_MODEL: &str = "openai/text-embedding-3-small";

/// Models the hosted service knows how to embed with.
pub const KNOWN_MODELS: [&str; 9] = [
    "openai/text-embedding-3-small",
    "openai/text-embedding-3-large",
    "openai/text-embedding-ada-002",
    "nvidia/nv-embed-v1",
    "voyageai/voyage-3-large",
    "voyageai/voyage-3-lite",
    "voyageai/voyage-3",
    "google/text-embedding-004",
    "google/text-embedding-005",
];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub service: ServiceConfig,

    #[serde(default)]
    pub models: ModelsConfig,

    #[serde(default)]
    pub limits: LimitsConfig,

    #[serde(default)]
    pub display: DisplayConfig,

    /// Items the list starts with.
    #[serde(default = "default_seed")]
    pub seed: Vec<SeedItem>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            service: ServiceConfig::default(),
            models: ModelsConfig::default(),
            limits: LimitsConfig::default(),
            display: DisplayConfig::default(),
            seed: default_seed(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    pub base_url: String,
    pub timeout_seconds: u64,
    /// Query `/remaining_funds` at startup and warn when it is used up.
    #[serde(default = "default_true")]
    pub show_funds: bool,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.into(),
            timeout_seconds: 30,
            show_funds: true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelsConfig {
    pub default: String,
    #[serde(default = "default_models")]
    pub available: Vec<String>,
}

impl Default for ModelsConfig {
    fn default() -> Self {
        Self {
            default: DEFAULT_MODEL.into(),
            available: default_models(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LimitsConfig {
    pub min_items: usize,
    pub max_items: usize,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            min_items: 2,
            max_items: 20,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DisplayConfig {
    #[serde(default)]
    pub method: SimilarityMethod,
    #[serde(default)]
    pub view: ViewMode,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedItem {
    pub text: String,
    pub color: String,
}

fn default_true() -> bool {
    true
}

fn default_models() -> Vec<String> {
    KNOWN_MODELS.iter().map(|m| m.to_string()).collect()
}

fn default_seed() -> Vec<SeedItem> {
    [
        ("#F3F3A4", "Manchester Football"),
        ("#fabc4b", "Man Utd"),
        ("orange", "Red Devils"),
        ("#DA291C", "Manchester United"),
        ("#6CABDD", "Manchester City"),
        ("blue", "ManCity"),
        ("#000000", "Marcus Rashford"),
        ("#FFC0CB", "kevin de bruyne"),
    ]
    .into_iter()
    .map(|(color, text)| SeedItem {
        text: text.into(),
        color: color.into(),
    })
    .collect()
}

impl Config {
    /// Load config from file, falling back to defaults.
    pub fn load() -> anyhow::Result<Self> {
        let path = paths::config_file_path();
        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings the rest of the app cannot work with.
    pub fn validate(&self) -> Result<(), PlaygroundError> {
        url::Url::parse(&self.service.base_url).map_err(|e| {
            PlaygroundError::Config(format!(
                "service.base_url '{}' is not a URL: {e}",
                self.service.base_url
            ))
        })?;
        if self.limits.min_items > self.limits.max_items {
            return Err(PlaygroundError::Config(format!(
                "limits.min_items ({}) exceeds limits.max_items ({})",
                self.limits.min_items, self.limits.max_items
            )));
        }
        if self.models.available.is_empty() {
            return Err(PlaygroundError::Config(
                "models.available must list at least one model".into(),
            ));
        }
        Ok(())
    }

    /// The model list shown in the selector, with the default always present.
    pub fn model_choices(&self) -> Vec<String> {
        let mut models = self.models.available.clone();
        if !models.iter().any(|m| m == &self.models.default) {
            models.insert(0, self.models.default.clone());
        }
        models
    }
}
