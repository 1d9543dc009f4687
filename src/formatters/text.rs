use crate::types::CheckReport;

pub const ALL_PRESENT: &str = "All translations are present";

pub fn format(r: &CheckReport) -> String {
    use std::fmt::Write as _;
    let mut out = String::new();
    if r.missing.is_empty() {
        out.push_str(ALL_PRESENT);
        out.push('\n');
        return out;
    }
    for m in &r.missing {
        let _ = writeln!(out, "Translations missing in {}/{} are", r.dir, m.file);
        for key in &m.missing {
            let _ = writeln!(out, " {key}");
        }
    }
    out
}
