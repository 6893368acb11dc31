//! # Parsing
//!
//! Reads and decodes every discovered file before validation starts, so
//! later checks can consult any document without touching the disk again.

use std::path::Path;

use seedlint_core::{FileName, LintError};
use serde_yaml::Value;

use crate::discovery::DiscoverySet;

/// A discovered file and its decoded YAML tree.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedFile {
    /// File the document was read from.
    pub name: FileName,
    /// Untyped YAML content. An empty file decodes to `Value::Null`.
    pub value: Value,
}

impl ParsedFile {
    /// The raw `type` entry, if the document is a mapping that has one.
    pub fn declared_type(&self) -> Option<&Value> {
        self.value.get("type")
    }
}

/// Read and decode a single file from `root`.
///
/// # Errors
///
/// Returns [`LintError::Parse`] for malformed YAML or non UTF-8 content, and
/// [`LintError::Discovery`] if the file cannot be read.
pub fn parse_file(root: &Path, name: &FileName) -> Result<ParsedFile, LintError> {
    let path = root.join(name.as_str());
    let content = std::fs::read_to_string(&path).map_err(|source| {
        if source.kind() == std::io::ErrorKind::InvalidData {
            LintError::Parse {
                file: name.clone(),
                reason: "file is not valid UTF-8".to_string(),
            }
        } else {
            LintError::Discovery {
                path: path.display().to_string(),
                source,
            }
        }
    })?;

    let value = parse_str(name, &content)?;
    tracing::debug!(file = %name, "parsed content file");
    Ok(ParsedFile {
        name: name.clone(),
        value,
    })
}

/// Decode YAML text attributed to `name`.
pub fn parse_str(name: &FileName, content: &str) -> Result<Value, LintError> {
    serde_yaml::from_str(content).map_err(|e| LintError::Parse {
        file: name.clone(),
        reason: e.to_string(),
    })
}

/// Parse every file in `discovered`, in order, stopping at the first failure.
pub fn parse_all(root: &Path, discovered: &DiscoverySet) -> Result<Vec<ParsedFile>, LintError> {
    discovered
        .files()
        .iter()
        .map(|name| parse_file(root, name))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_str_decodes_mapping() {
        let value = parse_str(
            &FileName::new("a.yaml"),
            "type: topic\ntitle: Hello\ncount: 3\n",
        )
        .unwrap();
        assert_eq!(value["type"], Value::String("topic".into()));
        assert_eq!(value["count"].as_u64(), Some(3));
    }

    #[test]
    fn parse_str_empty_is_null() {
        let value = parse_str(&FileName::new("empty.yaml"), "").unwrap();
        assert!(value.is_null());
    }

    #[test]
    fn malformed_yaml_is_parse_error_naming_file() {
        let err = parse_str(&FileName::new("broken.yaml"), "title: [unclosed\n").unwrap_err();
        assert!(matches!(err, LintError::Parse { .. }), "got: {err}");
        assert!(err.to_string().contains("broken.yaml"));
    }

    #[test]
    fn duplicate_keys_are_rejected() {
        let err = parse_str(&FileName::new("dup.yaml"), "body: a\nbody: b\n").unwrap_err();
        assert!(matches!(err, LintError::Parse { .. }), "got: {err}");
    }

    #[test]
    fn declared_type_reads_type_entry() {
        let parsed = ParsedFile {
            name: FileName::new("a.yaml"),
            value: parse_str(&FileName::new("a.yaml"), "type: post").unwrap(),
        };
        assert_eq!(parsed.declared_type().and_then(Value::as_str), Some("post"));

        let scalar = ParsedFile {
            name: FileName::new("s.yaml"),
            value: parse_str(&FileName::new("s.yaml"), "just text").unwrap(),
        };
        assert!(scalar.declared_type().is_none());
    }

    #[test]
    fn parse_all_stops_at_first_bad_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("a.yaml"), b"type: topic").unwrap();
        std::fs::write(dir.path().join("b.yaml"), b"type: [").unwrap();
        std::fs::write(dir.path().join("c.yaml"), b"type: {").unwrap();

        let discovered = crate::discovery::discover(dir.path()).unwrap();
        let err = parse_all(dir.path(), &discovered).unwrap_err();
        assert_eq!(err.file().map(FileName::as_str), Some("b.yaml"));
    }

    #[test]
    fn parse_file_rejects_non_utf8() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("bin.yaml"), [0xff, 0xfe, 0x00]).unwrap();
        let err = parse_file(dir.path(), &FileName::new("bin.yaml")).unwrap_err();
        assert!(matches!(err, LintError::Parse { .. }), "got: {err}");
    }
}
