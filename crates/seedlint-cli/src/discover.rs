//! # Discover Subcommand
//!
//! Lists the files a validation run would see, in run order, with each
//! file's declared type. Parses every file but applies no rules.

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;

use seedlint_core::{ApiUserAllowList, LintConfig};
use seedlint_schema::{ContentValidator, DocumentKind};

/// Arguments for the `seedlint discover` subcommand.
#[derive(Args, Debug)]
pub struct DiscoverArgs {
    /// Directory holding the topic and post YAML files.
    #[arg(value_name = "PATH", env = "INPUT_PATH_TO_FILES")]
    pub path: PathBuf,

    /// Print a JSON object instead of one line per file.
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
struct Listing<'a> {
    file: &'a str,
    #[serde(rename = "type")]
    kind: Option<DocumentKind>,
}

#[derive(Serialize)]
struct JsonOut<T: Serialize> {
    ok: bool,
    data: T,
}

/// Execute the discover subcommand.
pub fn run_discover(args: &DiscoverArgs) -> Result<u8> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    list(args, &mut out)
}

fn list(args: &DiscoverArgs, out: &mut dyn Write) -> Result<u8> {
    let config = LintConfig::new(args.path.clone(), ApiUserAllowList::unrestricted());
    let validator = ContentValidator::load(&config)
        .with_context(|| format!("failed to load {}", args.path.display()))?;

    let rows: Vec<Listing<'_>> = validator
        .declared_kinds()
        .into_iter()
        .map(|(file, kind)| Listing {
            file: file.as_str(),
            kind,
        })
        .collect();

    if args.json {
        writeln!(
            out,
            "{}",
            serde_json::to_string_pretty(&JsonOut { ok: true, data: &rows })?
        )?;
    } else {
        for row in &rows {
            let kind = row.kind.map_or("?", |k| k.as_str());
            writeln!(out, "{:<8} {}", kind, row.file)?;
        }
        writeln!(out, "Total: {} files", rows.len())?;
    }

    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(args: &DiscoverArgs) -> String {
        let mut buf = Vec::new();
        list(args, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn lists_files_with_declared_types() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("a.yaml"), "type: topic\n").unwrap();
        std::fs::write(dir.path().join("b.yml"), "type: posts\n").unwrap();
        std::fs::write(dir.path().join("c.yaml"), "title: untyped\n").unwrap();

        let text = render(&DiscoverArgs {
            path: dir.path().to_path_buf(),
            json: false,
        });
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "topic    a.yaml");
        assert_eq!(lines[1], "posts    b.yml");
        assert_eq!(lines[2], "?        c.yaml");
        assert_eq!(lines[3], "Total: 3 files");
    }

    #[test]
    fn json_listing() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("a.yaml"), "type: post\n").unwrap();

        let text = render(&DiscoverArgs {
            path: dir.path().to_path_buf(),
            json: true,
        });
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["ok"], true);
        assert_eq!(value["data"][0]["file"], "a.yaml");
        assert_eq!(value["data"][0]["type"], "post");
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("a.yaml"), "type: [\n").unwrap();

        let mut buf = Vec::new();
        let result = list(
            &DiscoverArgs {
                path: dir.path().to_path_buf(),
                json: false,
            },
            &mut buf,
        );
        assert!(result.is_err());
    }
}
