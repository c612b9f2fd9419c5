// crates/generate_report/src/main.rs

use std::path::PathBuf;

use anyhow::Result;
use clap::{Arg, Command};

use generate_report::{run, AppConfig};

fn main() -> Result<()> {
    let matches = Command::new("generate_report")
        .version("0.1.0")
        .about("Scans a directory of notes and aggregates uncompleted checklist items into a single report")
        .arg(
            Arg::new("root")
                .long("root")
                .num_args(1)
                .default_value(".")
                .help("Root directory to scan for notes"),
        )
        .arg(
            Arg::new("output")
                .long("output")
                .num_args(1)
                .default_value("uncompleted_tasks.md")
                .help("Path of the report file (truncated each run)"),
        )
        .arg(
            Arg::new("extension")
                .long("extension")
                .num_args(1)
                .default_value("md")
                .help("Extension of the note files to scan"),
        )
        .arg(
            Arg::new("exclude")
                .long("exclude")
                .action(clap::ArgAction::Append)
                .help("Exclude file(s) whose basename match the given name"),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose logging")
                .action(clap::ArgAction::SetTrue)
                .default_value("false"),
        )
        .get_matches();

    let config = AppConfig {
        root: PathBuf::from(matches.get_one::<String>("root").unwrap()),
        except_files: matches
            .get_many::<String>("exclude")
            .unwrap_or_default()
            .map(|s| s.to_string())
            .collect(),
        results_path: PathBuf::from(matches.get_one::<String>("output").unwrap()),
        extension: matches.get_one::<String>("extension").unwrap().to_string(),
        verbose: *matches.get_one::<bool>("verbose").unwrap(),
    };

    if let Err(err) = run(&config) {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }

    println!("Done!");
    Ok(())
}
