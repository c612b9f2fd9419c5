// crates/generate_report/src/config.rs

use std::path::PathBuf;

/// Centralized runtime configuration composed from the CLI.
/// The orchestration entry point receives this value explicitly; there is
/// no ambient settings module to mutate.
#[derive(Clone, Debug)]
pub struct AppConfig {
    /// Root directory to scan for notes.
    pub root: PathBuf,
    /// Basenames (with extension) skipped entirely during aggregation.
    pub except_files: Vec<String>,
    /// Path of the report artifact, truncated and rewritten each run.
    pub results_path: PathBuf,
    /// Extension of the note files the traversal yields.
    pub extension: String,
    /// Enable verbose logging.
    pub verbose: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            except_files: Vec::new(),
            results_path: PathBuf::from("uncompleted_tasks.md"),
            extension: "md".to_string(),
            verbose: false,
        }
    }
}
