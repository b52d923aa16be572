// src/client/mod.rs — Scoring backend layer

pub mod http;

use async_trait::async_trait;
use std::sync::Arc;

use crate::infra::errors::PlaygroundError;
use crate::playground::types::{FundsAccount, Item, ScoringResult};
use crate::playground::ScoreRequest;

pub use http::HttpScoringClient;

/// Anything that can turn items into similarity scores and PCA coordinates.
#[async_trait]
pub trait ScoringBackend: Send + Sync {
    /// Human-readable name for logs and the status line.
    fn name(&self) -> &str;

    async fn score(&self, model: &str, items: &[Item]) -> Result<ScoringResult, PlaygroundError>;

    async fn remaining_funds(&self) -> Result<FundsAccount, PlaygroundError>;
}

/// Outcome of a dispatched request, tagged with its sequence number.
#[derive(Debug)]
pub struct ScoreOutcome {
    pub seq: u64,
    pub result: Result<ScoringResult, PlaygroundError>,
}

/// Send `request` to `backend` and tag the answer.
pub async fn run_request(backend: Arc<dyn ScoringBackend>, request: ScoreRequest) -> ScoreOutcome {
    tracing::debug!(
        backend = backend.name(),
        seq = request.seq,
        model = %request.model,
        "sending scoring request"
    );
    let result = backend.score(&request.model, &request.items).await;
    ScoreOutcome {
        seq: request.seq,
        result,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::playground::types::Similarity;
    use std::collections::HashMap;

    struct Refusing;

    #[async_trait]
    impl ScoringBackend for Refusing {
        fn name(&self) -> &str {
            "refusing"
        }

        async fn score(&self, model: &str, _items: &[Item]) -> Result<ScoringResult, PlaygroundError> {
            if model == "ok" {
                return Ok(ScoringResult {
                    model: model.into(),
                    similarity: Similarity::default(),
                    pca: HashMap::new(),
                });
            }
            Err(PlaygroundError::Service(format!("unknown model {model}")))
        }

        async fn remaining_funds(&self) -> Result<FundsAccount, PlaygroundError> {
            Ok(FundsAccount::default())
        }
    }

    fn request(seq: u64, model: &str) -> ScoreRequest {
        ScoreRequest {
            seq,
            model: model.into(),
            items: Vec::new(),
        }
    }

    #[test]
    fn test_outcome_tagged_with_seq() {
        let outcome = tokio_test::block_on(run_request(Arc::new(Refusing), request(7, "ok")));
        assert_eq!(outcome.seq, 7);
        assert_eq!(outcome.result.unwrap().model, "ok");
    }

    #[test]
    fn test_failure_keeps_seq() {
        let outcome = tokio_test::block_on(run_request(Arc::new(Refusing), request(3, "nope")));
        assert_eq!(outcome.seq, 3);
        assert_eq!(outcome.result.unwrap_err().kind(), "service");
    }
}
