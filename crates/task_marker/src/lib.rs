// crates/task_marker/src/lib.rs

//! The checklist marker literals shared across the report tool-chain.

/// Exact form **without** the trailing space.
pub const TASK_MARKER: &str = "- [ ]";

/// Exact form **with** a trailing space (the version the
/// extraction pattern and the report formatting use).
pub const TASK_MARKER_WS: &str = "- [ ] ";
