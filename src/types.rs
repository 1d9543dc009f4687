use indexmap::IndexMap;
use serde::Serialize;

/// Top-level keys of a translation file, in file order. Values are not interpreted.
pub type Translation = IndexMap<String, serde_json::Value>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MissingReport {
    pub file: String,
    pub missing: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CheckReport {
    pub dir: String,
    pub default_file: String,
    pub files_checked: usize,
    pub complete: bool,
    #[serde(rename = "files")]
    pub missing: Vec<MissingReport>,
}

impl CheckReport {
    pub fn new(
        dir: String,
        default_file: String,
        files_checked: usize,
        missing: Vec<MissingReport>,
    ) -> Self {
        CheckReport {
            dir,
            default_file,
            files_checked,
            complete: missing.is_empty(),
            missing,
        }
    }

    pub fn missing_total(&self) -> usize {
        self.missing.iter().map(|m| m.missing.len()).sum()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Complete,
    Incomplete,
}

impl Status {
    pub fn from_report(report: &CheckReport) -> Self {
        if report.missing.is_empty() {
            Status::Complete
        } else {
            Status::Incomplete
        }
    }

    /// Process exit code for this status.
    pub fn code(self) -> i32 {
        match self {
            Status::Complete => 0,
            Status::Incomplete => 1,
        }
    }
}
