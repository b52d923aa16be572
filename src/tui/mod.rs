// src/tui/mod.rs — Interactive playground, built with ratatui.
//
// Left pane edits the item list, right pane shows the last scored
// snapshot as a similarity scatter or a 3-D PCA view.

pub mod app;
pub mod theme;
pub mod widgets;

pub use app::run_playground;
