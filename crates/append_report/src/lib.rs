// crates/append_report/src/lib.rs

use std::io::{self, Write};
use std::path::Path;

use extract_tasks::TaskOccurrence;
use task_marker::TASK_MARKER_WS;

/// Fixed first lines of the report artifact: the title plus a blank line.
pub const REPORT_TITLE: &str = "# Uncompleted tasks\n\n";

/// Public API: appends one report section for a document to the shared
/// report sink.
///
/// A document contributes a section only when its basename-with-extension
/// is not excluded and it has at least one task; otherwise this is a no-op.
/// Exclusion matching is exact and case-sensitive, against the full
/// basename. The section is a `[[<name>]]` header (basename without
/// extension) followed by one checklist line per task, in input order.
///
/// # Arguments
///
/// * `sink` - The report sink, appended to as one contiguous block.
/// * `file_name_with_ext` - Document basename, e.g. `notes.md`.
/// * `relative_path` - Path relative to the scanned root, for the progress notice.
/// * `tasks` - Extracted task occurrences, in source order.
/// * `except_files` - Basenames to skip entirely.
///
/// # Returns
///
/// `Ok(true)` if a section was appended, `Ok(false)` if the document was
/// skipped. Sink write failures propagate untouched.
pub fn append_task_section<W: Write>(
    sink: &mut W,
    file_name_with_ext: &str,
    relative_path: &str,
    tasks: &[TaskOccurrence],
    except_files: &[String],
) -> io::Result<bool> {
    if except_files.iter().any(|name| name == file_name_with_ext) {
        return Ok(false);
    }
    if tasks.is_empty() {
        return Ok(false);
    }

    let file_name = Path::new(file_name_with_ext)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(file_name_with_ext);

    let mut section = String::new();
    section.push_str(&format!("[[{}]]\n", file_name));
    for task in tasks {
        section.push_str(&format!(
            "{}{}. Line {}\n",
            TASK_MARKER_WS, task.text, task.line_number
        ));
    }
    sink.write_all(section.as_bytes())?;

    println!("Processed file: {}", relative_path);
    Ok(true)
}
