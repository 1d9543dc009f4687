use std::path::PathBuf;

use anyhow::Result;
use clap::{ArgAction, Parser, ValueHint};

use crate::types::Status;

mod run_impl;

pub use run_impl::check_translations;

#[derive(Parser, Debug, Clone)]
#[command(name = "transcheck", version, about = "Report keys missing from translation files", long_about = None)]
pub struct Args {
    /// Directory holding one translation file per language
    #[arg(long = "dir", value_name = "PATH", default_value = "lang", value_hint = ValueHint::DirPath)]
    pub dir: PathBuf,

    /// File name of the default translation inside --dir
    #[arg(long = "default", value_name = "FILE", default_value = "en.json")]
    pub default_file: String,

    /// Compare only these comma-separated extensions (no dots); defaults to the default file's
    #[arg(long = "ext", value_name = "LIST")]
    pub extensions: Option<String>,

    /// Output JSON instead of text
    #[arg(long = "json", action = ArgAction::SetTrue, conflicts_with = "csv")]
    pub json: bool,

    /// Output CSV instead of text
    #[arg(long = "csv", action = ArgAction::SetTrue, conflicts_with = "json")]
    pub csv: bool,

    /// Verbose logging
    #[arg(long = "verbose", short = 'v', action = ArgAction::Count)]
    pub verbose: u8,
}

/// Runs the CLI application and reports whether every translation is complete.
///
/// # Errors
/// Returns an error if a translation file cannot be loaded or the directory cannot be listed.
pub fn run() -> Result<Status> {
    let args = Args::parse();
    run_impl::run_with_args(&args)
}
