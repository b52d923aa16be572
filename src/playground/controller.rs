// src/playground/controller.rs — Root controller: model, snapshot, result, loading
//
// The controller never performs I/O. It hands out `ScoreRequest`s for the
// caller to dispatch and takes the outcomes back through `complete`, so
// the TUI and the one-shot command drive the same state machine.

use super::types::{Item, ScoringResult, SimilarityMethod, ViewMode};
use super::view::ResultView;
use crate::infra::config::LimitsConfig;
use crate::infra::errors::PlaygroundError;

/// A request the caller must send to the scoring backend.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreRequest {
    /// Monotonic per controller. Only the latest one gets applied.
    pub seq: u64,
    pub model: String,
    pub items: Vec<Item>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Loading { seq: u64 },
}

/// Last failure, kept for display until the next success.
#[derive(Debug, Clone, PartialEq)]
pub struct FailedRequest {
    pub kind: &'static str,
    pub message: String,
    /// The scoring service failed, as opposed to a request refused locally.
    pub remote: bool,
}

impl From<&PlaygroundError> for FailedRequest {
    fn from(e: &PlaygroundError) -> Self {
        Self {
            kind: e.kind(),
            message: e.to_string(),
            remote: e.is_remote(),
        }
    }
}

pub struct Controller {
    model: String,
    limits: LimitsConfig,
    phase: Phase,
    /// Items of the request in flight; become the snapshot on success.
    pending: Vec<Item>,
    snapshot: Vec<Item>,
    result: Option<ScoringResult>,
    last_error: Option<FailedRequest>,
    next_seq: u64,
}

impl Controller {
    pub fn new(model: impl Into<String>, limits: LimitsConfig) -> Self {
        Self {
            model: model.into(),
            limits,
            phase: Phase::Idle,
            pending: Vec::new(),
            snapshot: Vec::new(),
            result: None,
            last_error: None,
            next_seq: 1,
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.phase, Phase::Loading { .. })
    }

    pub fn snapshot(&self) -> &[Item] {
        &self.snapshot
    }

    pub fn result(&self) -> Option<&ScoringResult> {
        self.result.as_ref()
    }

    pub fn last_error(&self) -> Option<&FailedRequest> {
        self.last_error.as_ref()
    }

    pub fn view(&self, mode: ViewMode, method: SimilarityMethod) -> ResultView {
        ResultView::build(&self.snapshot, self.result.as_ref(), mode, method)
    }

    /// Start scoring `items` under the current model.
    ///
    /// `None` while a request is in flight, for an empty list, or when the
    /// list size is outside what the service accepts (the error is recorded).
    pub fn compare(&mut self, items: Vec<Item>) -> Option<ScoreRequest> {
        if self.is_loading() {
            tracing::debug!("compare ignored: request in flight");
            return None;
        }
        if items.is_empty() {
            tracing::debug!("compare ignored: nothing to score");
            return None;
        }
        if let Err(e) = self.check_size(items.len()) {
            tracing::warn!("{e}");
            self.last_error = Some(FailedRequest::from(&e));
            return None;
        }
        Some(self.dispatch(items))
    }

    /// Select a model. Re-scores the current snapshot when the model
    /// actually changed and there is something to re-score.
    ///
    /// Allowed while loading: the new request supersedes the one in flight
    /// and carries its items, so a pending compare is not lost.
    pub fn set_model(&mut self, model: impl Into<String>) -> Option<ScoreRequest> {
        let model = model.into();
        if model == self.model {
            return None;
        }
        tracing::info!(from = %self.model, to = %model, "model changed");
        self.model = model;
        if self.snapshot.is_empty() {
            return None;
        }
        let items = if self.is_loading() {
            self.pending.clone()
        } else {
            self.snapshot.clone()
        };
        Some(self.dispatch(items))
    }

    /// Apply the outcome of request `seq`. Returns `false` for stale
    /// outcomes, which are dropped without touching any state.
    pub fn complete(
        &mut self,
        seq: u64,
        outcome: Result<ScoringResult, PlaygroundError>,
    ) -> bool {
        match self.phase {
            Phase::Loading { seq: current } if current == seq => {}
            _ => {
                tracing::debug!(seq, "dropping stale scoring outcome");
                return false;
            }
        }
        self.phase = Phase::Idle;
        let items = std::mem::take(&mut self.pending);
        match outcome {
            Ok(result) => {
                tracing::info!(seq, model = %result.model, items = items.len(), "scoring complete");
                self.snapshot = items;
                self.result = Some(result);
                self.last_error = None;
            }
            Err(e) => {
                tracing::warn!(seq, "scoring failed: {e}");
                self.last_error = Some(FailedRequest::from(&e));
            }
        }
        true
    }

    /// Mirror a cosmetic change of the live list (new color, new position)
    /// into the snapshot. Text is not copied: it only changes by re-scoring.
    pub fn sync_cosmetic(&mut self, item: &Item, new_index: usize) {
        let Some(from) = self.snapshot.iter().position(|i| i.id == item.id) else {
            return;
        };
        let mut moved = self.snapshot.remove(from);
        moved.color = item.color.clone();
        let to = new_index.min(self.snapshot.len());
        self.snapshot.insert(to, moved);
    }

    fn check_size(&self, n: usize) -> Result<(), PlaygroundError> {
        if n < self.limits.min_items {
            return Err(PlaygroundError::InvalidRequest(format!(
                "at least {} items are required, got {n}",
                self.limits.min_items
            )));
        }
        if n > self.limits.max_items {
            return Err(PlaygroundError::InvalidRequest(format!(
                "at most {} items can be compared, got {n}",
                self.limits.max_items
            )));
        }
        Ok(())
    }

    fn dispatch(&mut self, items: Vec<Item>) -> ScoreRequest {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.phase = Phase::Loading { seq };
        self.pending = items.clone();
        tracing::debug!(seq, model = %self.model, items = items.len(), "scoring request issued");
        ScoreRequest {
            seq,
            model: self.model.clone(),
            items,
        }
    }
}
