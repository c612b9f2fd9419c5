// crates/generate_report/src/lib.rs

use std::fs::{self, File};
use std::io::{ErrorKind, Write};

use anyhow::{Context, Result};

use append_report::{append_task_section, REPORT_TITLE};
use extract_tasks::TaskExtractor;
use find_note_files::find_note_files_in_dir;

pub mod config;
pub use config::AppConfig;

/// Per-run counters, printed as the closing summary.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ScanStats {
    pub processed: usize,
    pub skipped: usize,
    pub total: usize,
}

/// Runs the whole scan based on the provided configuration.
/// This function encapsulates the bulk of the business logic; `main` only
/// parses the CLI and reports the outcome.
///
/// Failures scoped to a single document (unreadable or undecodable file)
/// are diagnosed and skipped; failures in setup or in the shared report
/// file are returned and abort the run.
pub fn run(config: &AppConfig) -> Result<ScanStats> {
    // 1. Validate the root before touching anything else.
    if !config.root.is_dir() {
        anyhow::bail!("Directory {} does not exist!", config.root.display());
    }

    // 2. Drop any previous report, then recreate it with the fixed header.
    //    The handle stays open for the whole run; every qualifying document
    //    appends to it in traversal order.
    if config.results_path.exists() {
        fs::remove_file(&config.results_path).with_context(|| {
            format!(
                "Failed to remove old report file {}",
                config.results_path.display()
            )
        })?;
    }
    let mut report = File::create(&config.results_path).with_context(|| {
        format!(
            "Failed to create report file {}",
            config.results_path.display()
        )
    })?;
    report
        .write_all(REPORT_TITLE.as_bytes())
        .context("Failed to write the report header")?;

    // 3. Enumerate the note files. The freshly created report may itself
    //    live under the scanned root (it does with the default settings);
    //    it must never be fed back into the scan.
    println!("Searching for uncompleted tasks...");
    let mut note_files = find_note_files_in_dir(&config.root, &config.extension, config.verbose);
    if let Ok(results_canon) = fs::canonicalize(&config.results_path) {
        note_files.retain(|p| fs::canonicalize(p).ok().as_deref() != Some(results_canon.as_path()));
    }
    println!(
        "Found {} .{} files in {}",
        note_files.len(),
        config.extension,
        config.root.display()
    );

    let extractor = TaskExtractor::new().context("Failed to compile the checklist pattern")?;

    let mut stats = ScanStats {
        total: note_files.len(),
        ..Default::default()
    };

    // 4. Process each document. Read failures are local to the document;
    //    the append against the shared report handle is not, so its errors
    //    propagate instead of being downgraded to a skip.
    for path in &note_files {
        let file_name_with_ext = path
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or_default()
            .to_string();
        let relative_path = path.strip_prefix(&config.root).unwrap_or(path.as_path());

        match fs::read_to_string(path) {
            Ok(content) => {
                let tasks = extractor.extract(&content);
                append_task_section(
                    &mut report,
                    &file_name_with_ext,
                    &relative_path.display().to_string(),
                    &tasks,
                    &config.except_files,
                )
                .with_context(|| {
                    format!(
                        "Failed to write report section for {}",
                        relative_path.display()
                    )
                })?;
                stats.processed += 1;
            }
            Err(err) if err.kind() == ErrorKind::InvalidData => {
                eprintln!("Encoding error in file: {}", path.display());
                stats.skipped += 1;
            }
            Err(err) => {
                eprintln!("Error processing file {}: {}", path.display(), err);
                stats.skipped += 1;
            }
        }
    }

    // 5. Closing summary.
    println!();
    println!("Processing statistics:");
    println!("  Successfully processed: {}", stats.processed);
    println!("  Skipped with errors: {}", stats.skipped);
    println!("  Total files: {}", stats.total);

    Ok(stats)
}
