// crates/extract_tasks/src/lib.rs

use regex::Regex;
use task_marker::TASK_MARKER_WS;

/// A single unfinished checklist item found in a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskOccurrence {
    /// The item description, trimmed of surrounding whitespace.
    pub text: String,
    /// 1-based line number within the document, blank lines included.
    pub line_number: usize,
}

/// A helper struct that holds the precompiled checklist pattern.
pub struct TaskExtractor {
    re_task: Regex,
}

impl TaskExtractor {
    /// Creates a new `TaskExtractor` with a precompiled pattern built
    /// from the shared marker literal.
    pub fn new() -> Result<Self, regex::Error> {
        Ok(Self {
            re_task: Regex::new(&format!(r"^\s*{}(.+)$", regex::escape(TASK_MARKER_WS)))?,
        })
    }

    /// Scans `text` line by line and returns every unfinished checklist
    /// item together with its 1-based line number, in source order.
    ///
    /// Lines are separated by `'\n'` only; blank lines still count toward
    /// the numbering. A checked item (`- [x]`) or a bare marker with no
    /// description never matches.
    pub fn extract(&self, text: &str) -> Vec<TaskOccurrence> {
        let mut tasks = Vec::new();
        for (idx, line) in text.split('\n').enumerate() {
            if let Some(caps) = self.re_task.captures(line) {
                tasks.push(TaskOccurrence {
                    text: caps[1].trim().to_string(),
                    line_number: idx + 1,
                });
            }
        }
        tasks
    }
}

/// Public API: returns all unfinished checklist items in `text`.
///
/// # Arguments
///
/// * `text` - The document contents to scan.
///
/// # Returns
///
/// A `Result` containing the ordered list of task occurrences on success.
///
/// # Errors
///
/// Returns an error only if the internal pattern fails to compile.
pub fn extract_uncompleted_tasks(text: &str) -> Result<Vec<TaskOccurrence>, regex::Error> {
    let extractor = TaskExtractor::new()?;
    Ok(extractor.extract(text))
}
