// crates/find_note_files/src/lib.rs

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Searches the given directory (and its subdirectories) for plain files
/// whose extension matches `extension`, and returns them sorted
/// lexicographically so that report sections come out in a stable order.
/// If `verbose` is true, logs extra details.
///
/// Unreadable directory entries are skipped; a nonexistent root yields an
/// empty list (callers validate the root up front).
pub fn find_note_files_in_dir(root: &Path, extension: &str, verbose: bool) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkDir::new(root)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.into_path())
        .filter(|path| {
            path.extension()
                .and_then(|s| s.to_str())
                .map(|ext| ext == extension)
                .unwrap_or(false)
        })
        .collect();
    files.sort();

    if verbose {
        log::debug!(
            "[VERBOSE] {} matching file(s) found under {}",
            files.len(),
            root.display()
        );
        for file in &files {
            log::debug!("[VERBOSE]   {}", file.display());
        }
    }

    files
}
