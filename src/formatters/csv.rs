use crate::types::CheckReport;

pub fn format(r: &CheckReport) -> String {
    let mut out = String::new();
    out.push_str("file,key\n");
    for m in &r.missing {
        for key in &m.missing {
            push_row(&mut out, &m.file, key);
        }
    }
    out
}

fn push_row(out: &mut String, file: &str, key: &str) {
    use std::fmt::Write as _;
    let _ = writeln!(out, "{},{}", escape(file), escape(key));
}

fn escape(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
