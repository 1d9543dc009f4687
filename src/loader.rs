use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::types::Translation;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("translation file not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("read translation file: {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("parse translation file: {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Loads a translation file as a flat JSON object.
///
/// # Errors
/// Returns [`LoadError`] if the file is missing, unreadable, or not a JSON object.
pub fn load_translation(path: &Path) -> Result<Translation, LoadError> {
    let text = fs::read_to_string(path).map_err(|source| {
        if source.kind() == io::ErrorKind::NotFound {
            LoadError::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            LoadError::Read {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;
    parse_translation(&text, path)
}

/// Parses translation text; `path_hint` only labels errors.
///
/// # Errors
/// Returns [`LoadError::Parse`] if the text is not a JSON object.
pub fn parse_translation(text: &str, path_hint: &Path) -> Result<Translation, LoadError> {
    // editors on Windows like to leave a BOM behind
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    serde_json::from_str(text).map_err(|source| LoadError::Parse {
        path: path_hint.to_path_buf(),
        source,
    })
}
