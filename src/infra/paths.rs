// src/infra/paths.rs — XDG-compliant path management
//
// EMBEDSCOPE_HOME overrides everything. Otherwise config lives in
// ~/.embedscope/ and data (logs) in XDG_DATA_HOME/embedscope.

use directories::{BaseDirs, ProjectDirs};
use std::path::PathBuf;

/// Returns the EMBEDSCOPE_HOME override, if set.
fn embedscope_home() -> Option<PathBuf> {
    std::env::var_os("EMBEDSCOPE_HOME").map(PathBuf::from)
}

/// Home directory, if the platform can tell us one.
pub fn dirs_home() -> Option<PathBuf> {
    BaseDirs::new().map(|d| d.home_dir().to_path_buf())
}

/// Configuration directory: $EMBEDSCOPE_HOME/ or ~/.embedscope/
pub fn config_dir() -> PathBuf {
    if let Some(home) = embedscope_home() {
        return home;
    }
    dirs_home()
        .map(|h| h.join(".embedscope"))
        .unwrap_or_else(|| PathBuf::from(".embedscope"))
}

/// Data directory: $EMBEDSCOPE_HOME/data/ or ~/.local/share/embedscope/
pub fn data_dir() -> PathBuf {
    if let Some(home) = embedscope_home() {
        return home.join("data");
    }
    match ProjectDirs::from("", "", "embedscope") {
        Some(dirs) => dirs.data_local_dir().to_path_buf(),
        None => config_dir().join("data"),
    }
}

pub fn config_file_path() -> PathBuf {
    config_dir().join("config.toml")
}

/// Where the TUI writes its logs.
pub fn log_file_path() -> PathBuf {
    data_dir().join("embedscope.log")
}
