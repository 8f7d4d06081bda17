// src/file.rs

use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::data::Abstract;
use crate::error::Result;

/// Render records as a JSON array with one-space indentation.
/// Non-ASCII text is written as-is, not `\u` escaped.
pub fn to_export_string(records: &[Abstract]) -> Result<String> {
    let mut buf = Vec::new();
    let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b" "));
    records.serialize(&mut ser)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Write the whole dataset to `path` in one shot. Returns the path written to.
pub fn write_export(path: &Path, records: &[Abstract]) -> Result<PathBuf> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }
    let contents = to_export_string(records)?;
    fs::write(path, contents)?;
    Ok(path.to_path_buf())
}

pub fn ensure_directory(dir: &Path) -> Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(std::io::Error::other(format!(
            "Path exists but is not a directory: {}",
            dir.display()
        ))
        .into());
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_space_indent_and_literal_unicode() {
        let mut a = Abstract::new(3, "http://x/3");
        a.software_demo = Some(false);
        a.authors = Some(strs!["Müller K"]);
        a.body = Some(strs!["naïve"]);
        let s = to_export_string(&[a]).unwrap();
        assert!(s.starts_with("[\n {\n  \"number\": 3,"));
        assert!(s.contains("\"software-demo\": false"));
        assert!(s.contains("\"Müller K\""));
        assert!(s.contains("\"naïve\""));
        assert!(!s.contains("\\u"));
    }

    #[test]
    fn unextracted_record_has_no_optional_fields() {
        let s = to_export_string(&[Abstract::new(1, "u")]).unwrap();
        assert!(!s.contains("software-demo"));
        assert!(!s.contains("authors"));
        assert!(!s.contains("keywords"));
        assert!(!s.contains("abstract"));
    }
}
