use anyhow::{Result, bail};
use std::collections::HashSet;
use std::io::Write;
use std::path::Path;

use crate::diff::compare_translations;
use crate::formatters;
use crate::loader::load_translation;
use crate::traversal::{TraversalOptions, collect_translation_files};
use crate::types::{CheckReport, MissingReport, Status};

use super::Args;

pub fn run_with_args(args: &Args) -> Result<Status> {
    let report = check_translations(args)?;

    if args.json {
        let s = serde_json::to_string_pretty(&report)?;
        println!("{}", s);
    } else if args.csv {
        print!("{}", formatters::csv::format(&report));
    } else {
        print!("{}", formatters::text::format(&report));
    }
    std::io::stdout().flush()?;

    Ok(Status::from_report(&report))
}

/// Loads the default translation and compares every sibling file against it.
///
/// # Errors
/// Returns an error if any translation file fails to load or the directory cannot be listed.
pub fn check_translations(args: &Args) -> Result<CheckReport> {
    let default_name = Path::new(&args.default_file);
    if default_name.file_name() != Some(default_name.as_os_str()) {
        bail!(
            "--default must be a file name inside --dir, got {}",
            args.default_file
        );
    }

    let default_path = args.dir.join(default_name);
    if args.verbose > 0 {
        eprintln!("Translations directory: {}", args.dir.display());
        eprintln!("Default translation: {}", default_path.display());
    }
    let default = load_translation(&default_path)?;

    let allowed_exts = match args.extensions {
        Some(ref list) => parse_ext_list(list),
        None => HashSet::from([default_name
            .extension()
            .and_then(|s| s.to_str())
            .unwrap_or("json")
            .to_ascii_lowercase()]),
    };
    if allowed_exts.is_empty() {
        bail!("--ext must name at least one extension");
    }

    let opts = TraversalOptions {
        exclude: Some(default_name.as_os_str().to_os_string()),
        allowed_exts,
    };
    let files = collect_translation_files(&args.dir, &opts)?;
    if args.verbose > 0 {
        eprintln!(
            "Found {} translation files besides {} ({} keys)",
            files.len(),
            args.default_file,
            default.len()
        );
    }

    let mut missing_reports = Vec::new();
    for path in &files {
        let other = load_translation(path)?;
        let missing = compare_translations(&default, &other);
        let file = path
            .file_name()
            .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned());
        if args.verbose > 1 {
            eprintln!("Compared {}: {} missing", file, missing.len());
        }
        if !missing.is_empty() {
            missing_reports.push(MissingReport { file, missing });
        }
    }

    let report = CheckReport::new(
        args.dir.display().to_string(),
        args.default_file.clone(),
        files.len(),
        missing_reports,
    );
    if args.verbose > 0 {
        eprintln!(
            "Files with missing keys: {}, missing keys: {}",
            report.missing.len(),
            report.missing_total()
        );
    }
    Ok(report)
}

fn parse_ext_list(list: &str) -> HashSet<String> {
    list.split(',')
        .filter(|t| !t.trim().is_empty())
        .map(|t| t.trim().trim_start_matches('.').to_ascii_lowercase())
        .collect()
}
