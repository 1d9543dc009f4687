use std::collections::HashSet;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use ignore::WalkBuilder;

pub struct TraversalOptions {
    pub exclude: Option<OsString>, // file name of the default translation
    pub allowed_exts: HashSet<String>, // lowercase, no dot
}

/// Lists translation files directly inside `dir`, sorted by file name.
///
/// The excluded file is filtered out when present; its absence is not an error.
///
/// # Errors
/// Returns an error if `dir` is not a readable directory.
pub fn collect_translation_files(dir: &Path, opts: &TraversalOptions) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        bail!("translations directory not found: {}", dir.display());
    }

    let mut builder = WalkBuilder::new(dir);
    builder.standard_filters(false);
    builder.max_depth(Some(1));
    builder.sort_by_file_name(|a, b| a.cmp(b));

    let mut out = Vec::new();
    for dent in builder.build() {
        let dent = dent.with_context(|| format!("list directory: {}", dir.display()))?;
        let path = dent.path();
        if !path.is_file() {
            continue;
        }

        if let Some(ref excluded) = opts.exclude {
            if path.file_name() == Some(excluded.as_os_str()) {
                continue;
            }
        }

        match path.extension().and_then(|s| s.to_str()) {
            Some(ext) if opts.allowed_exts.contains(&ext.to_ascii_lowercase()) => {}
            _ => continue,
        }

        out.push(path.to_path_buf());
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn json_opts(exclude: &str) -> TraversalOptions {
        TraversalOptions {
            exclude: Some(exclude.into()),
            allowed_exts: HashSet::from(["json".to_string()]),
        }
    }

    fn names(paths: &[PathBuf]) -> Vec<String> {
        paths
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect()
    }

    #[test]
    fn excludes_default_and_foreign_extensions() {
        let dir = tempdir().unwrap();
        for f in ["en.json", "fr.json", "de.JSON", "README.md", ".hidden.json"] {
            fs::write(dir.path().join(f), "{}").unwrap();
        }
        fs::create_dir(dir.path().join("nested.json")).unwrap();
        fs::write(dir.path().join("nested.json").join("es.json"), "{}").unwrap();

        let files = collect_translation_files(dir.path(), &json_opts("en.json")).unwrap();
        assert_eq!(names(&files), [".hidden.json", "de.JSON", "fr.json"]);
    }

    #[test]
    fn absent_default_excludes_nothing() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("it.json"), "{}").unwrap();
        fs::write(dir.path().join("fr.json"), "{}").unwrap();
        let files = collect_translation_files(dir.path(), &json_opts("en.json")).unwrap();
        assert_eq!(names(&files), ["fr.json", "it.json"]);
    }

    #[test]
    fn git_ignored_files_are_still_listed() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(".gitignore"), "pt.json\n").unwrap();
        fs::write(dir.path().join("pt.json"), "{}").unwrap();
        let files = collect_translation_files(dir.path(), &json_opts("en.json")).unwrap();
        assert_eq!(names(&files), ["pt.json"]);
    }

    #[test]
    fn missing_directory_is_an_error() {
        let dir = tempdir().unwrap();
        let err = collect_translation_files(&dir.path().join("lang"), &json_opts("en.json"))
            .unwrap_err();
        assert!(err.to_string().contains("translations directory not found"));
    }
}
