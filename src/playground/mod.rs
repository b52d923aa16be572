// src/playground/mod.rs — Playground state: item list, controller, result views
//
// Everything here is synchronous and I/O free; the TUI and the CLI own the
// event loop and the scoring backend.

pub mod color;
pub mod controller;
pub mod store;
pub mod types;
pub mod view;

pub use controller::{Controller, FailedRequest, Phase, ScoreRequest};
pub use store::ItemStore;
pub use types::{
    FundsAccount, Item, PcaPoint, ScoringResult, Similarity, SimilarityMethod, ViewMode,
};
pub use view::{Camera, PcaItem, ResultView, ScorePoint};
