//! # Status Reporting
//!
//! The bridge between a run's outcome and the CI host. Exactly one message
//! is written per run: a success summary or the single failure.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::ValueEnum;
use serde::Serialize;

use seedlint_core::{ErrorKind, LintError};
use seedlint_schema::{DocumentKind, ValidatedFile, ValidationReport};

/// Output format selected with `--report`.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    /// `github` under GitHub Actions, `plain` elsewhere.
    Auto,
    /// `OK:` / `FAIL:` lines.
    Plain,
    /// GitHub Actions workflow commands (`::error::`, `::notice::`).
    Github,
    /// A single JSON object.
    Json,
}

impl ReportFormat {
    /// Replace `Auto` with a concrete format.
    pub fn resolve(self, in_github_actions: bool) -> Self {
        match self {
            Self::Auto if in_github_actions => Self::Github,
            Self::Auto => Self::Plain,
            other => other,
        }
    }
}

/// True when running as a GitHub Actions step.
pub fn in_github_actions() -> bool {
    std::env::var("GITHUB_ACTIONS").is_ok_and(|v| v == "true")
}

/// Writes the outcome of a run.
pub trait StatusReporter {
    /// Report that every file passed.
    fn success(&self, out: &mut dyn Write, report: &ValidationReport) -> Result<()>;

    /// Report the failure that ended the run.
    fn failure(&self, out: &mut dyn Write, error: &LintError) -> Result<()>;
}

/// Build the reporter for a resolved format. `root` is the content
/// directory, used to point annotations at files.
pub fn reporter_for(format: ReportFormat, root: &Path) -> Box<dyn StatusReporter> {
    match format {
        ReportFormat::Github => Box::new(GithubReporter {
            root: root.to_path_buf(),
        }),
        ReportFormat::Json => Box::new(JsonReporter),
        ReportFormat::Auto | ReportFormat::Plain => Box::new(PlainReporter),
    }
}

/// Human-readable lines.
#[derive(Debug, Default)]
pub struct PlainReporter;

impl StatusReporter for PlainReporter {
    fn success(&self, out: &mut dyn Write, report: &ValidationReport) -> Result<()> {
        writeln!(out, "OK: {report}")?;
        Ok(())
    }

    fn failure(&self, out: &mut dyn Write, error: &LintError) -> Result<()> {
        writeln!(out, "FAIL: {error}")?;
        Ok(())
    }
}

/// GitHub Actions workflow commands. The failure becomes an error
/// annotation on the offending file.
#[derive(Debug)]
pub struct GithubReporter {
    root: PathBuf,
}

impl StatusReporter for GithubReporter {
    fn success(&self, out: &mut dyn Write, report: &ValidationReport) -> Result<()> {
        writeln!(out, "::notice::{}", escape_data(&report.to_string()))?;
        Ok(())
    }

    fn failure(&self, out: &mut dyn Write, error: &LintError) -> Result<()> {
        let message = escape_data(&error.to_string());
        match error.file() {
            Some(file) => {
                let path = self.root.join(file.as_str());
                writeln!(
                    out,
                    "::error file={}::{message}",
                    escape_property(&path.display().to_string())
                )?;
            }
            None => writeln!(out, "::error::{message}")?,
        }
        Ok(())
    }
}

/// Escape a workflow command message.
pub fn escape_data(s: &str) -> String {
    s.replace('%', "%25").replace('\r', "%0D").replace('\n', "%0A")
}

/// Escape a workflow command property value.
pub fn escape_property(s: &str) -> String {
    escape_data(s).replace(':', "%3A").replace(',', "%2C")
}

/// `{"ok": ..., "data" | "error": ...}` on one pretty-printed object.
#[derive(Debug, Default)]
pub struct JsonReporter;

#[derive(Serialize)]
struct JsonOut<T: Serialize> {
    ok: bool,
    #[serde(flatten)]
    body: T,
}

#[derive(Serialize)]
struct Data<'a> {
    data: Summary<'a>,
}

#[derive(Serialize)]
struct Summary<'a> {
    files: &'a [ValidatedFile],
    topics: usize,
    posts: usize,
    batches: usize,
    inline_posts: usize,
}

#[derive(Serialize)]
struct Failure<'a> {
    error: FailureDetail<'a>,
}

#[derive(Serialize)]
struct FailureDetail<'a> {
    kind: ErrorKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    file: Option<&'a str>,
    message: String,
}

impl StatusReporter for JsonReporter {
    fn success(&self, out: &mut dyn Write, report: &ValidationReport) -> Result<()> {
        let body = Data {
            data: Summary {
                files: report.files(),
                topics: report.count(DocumentKind::Topic),
                posts: report.count(DocumentKind::Post),
                batches: report.count(DocumentKind::Posts),
                inline_posts: report.inline_post_total(),
            },
        };
        writeln!(
            out,
            "{}",
            serde_json::to_string_pretty(&JsonOut { ok: true, body })?
        )?;
        Ok(())
    }

    fn failure(&self, out: &mut dyn Write, error: &LintError) -> Result<()> {
        let body = Failure {
            error: FailureDetail {
                kind: error.kind(),
                file: error.file().map(|f| f.as_str()),
                message: error.to_string(),
            },
        };
        writeln!(
            out,
            "{}",
            serde_json::to_string_pretty(&JsonOut { ok: false, body })?
        )?;
        Ok(())
    }
}
