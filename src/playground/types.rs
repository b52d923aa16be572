// src/playground/types.rs — Items, scoring results, and the display enums

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;

/// One user-entered snippet. Order in the store is significant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: String,
    pub color: String,
    pub text: String,
}

impl Item {
    pub fn new(id: impl Into<String>, color: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            color: color.into(),
            text: text.into(),
        }
    }

    /// Whether the item would be dropped at submission time.
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// anchor id -> (other id -> score)
pub type SimilarityTable = HashMap<String, HashMap<String, f64>>;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Similarity {
    #[serde(default)]
    pub cosine: SimilarityTable,
    #[serde(default)]
    pub dot_product: SimilarityTable,
    #[serde(default)]
    pub euclidean: SimilarityTable,
}

impl Similarity {
    pub fn table(&self, method: SimilarityMethod) -> &SimilarityTable {
        match method {
            SimilarityMethod::Cosine => &self.cosine,
            SimilarityMethod::Euclidean => &self.euclidean,
            SimilarityMethod::DotProduct => &self.dot_product,
        }
    }

    /// Score of `other` relative to `anchor`, if the service reported one.
    pub fn score(&self, method: SimilarityMethod, anchor: &str, other: &str) -> Option<f64> {
        self.table(method)
            .get(anchor)
            .and_then(|row| row.get(other))
            .copied()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PcaPoint {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// What `/process` returns. Replaced wholesale on every successful request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringResult {
    pub model: String,
    pub similarity: Similarity,
    pub pca: HashMap<String, PcaPoint>,
}

impl ScoringResult {
    /// Ids from `items` the result has no data for. Every id must be a PCA
    /// key and an anchor in each similarity table.
    pub fn missing_ids<'a>(&self, items: &'a [Item]) -> Vec<&'a str> {
        items
            .iter()
            .filter(|item| {
                !self.pca.contains_key(&item.id)
                    || SimilarityMethod::ALL
                        .iter()
                        .any(|m| !self.similarity.table(*m).contains_key(&item.id))
            })
            .map(|item| item.id.as_str())
            .collect()
    }
}

/// Request body for `/process`.
#[derive(Debug, Clone, Serialize)]
pub struct ScoreBody<'a> {
    pub model: &'a str,
    pub items: &'a [Item],
}

/// `/remaining_funds` response.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FundsAccount {
    #[serde(default, deserialize_with = "null_as_zero")]
    pub funds: f64,
    #[serde(default, deserialize_with = "null_as_zero")]
    pub costs_incurred: f64,
}

/// The service reports unknown amounts as `null`; treat those as 0.
fn null_as_zero<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(0.0))
}

impl FundsAccount {
    pub fn remaining(&self) -> f64 {
        self.funds - self.costs_incurred
    }

    pub fn is_exhausted(&self) -> bool {
        self.remaining() <= 0.0
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SimilarityMethod {
    #[default]
    Cosine,
    Euclidean,
    DotProduct,
}

impl SimilarityMethod {
    pub const ALL: [SimilarityMethod; 3] = [
        SimilarityMethod::Cosine,
        SimilarityMethod::Euclidean,
        SimilarityMethod::DotProduct,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SimilarityMethod::Cosine => "cosine",
            SimilarityMethod::Euclidean => "euclidean",
            SimilarityMethod::DotProduct => "dot product",
        }
    }

    /// What the service actually reports for this method.
    pub fn axis_title(&self) -> &'static str {
        match self {
            SimilarityMethod::Cosine => "cosine distance",
            SimilarityMethod::Euclidean => "euclidean distance",
            SimilarityMethod::DotProduct => "dot product",
        }
    }

    pub fn next(&self) -> SimilarityMethod {
        let idx = SimilarityMethod::ALL
            .iter()
            .position(|m| m == self)
            .unwrap_or(0);
        SimilarityMethod::ALL[(idx + 1) % SimilarityMethod::ALL.len()]
    }
}

/// Which chart the results pane shows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewMode {
    #[default]
    Similarity,
    Pca,
}

impl ViewMode {
    pub fn label(&self) -> &'static str {
        match self {
            ViewMode::Similarity => "Similarity",
            ViewMode::Pca => "3D Visualization (PCA)",
        }
    }

    pub fn toggle(&self) -> ViewMode {
        match self {
            ViewMode::Similarity => ViewMode::Pca,
            ViewMode::Pca => ViewMode::Similarity,
        }
    }
}
