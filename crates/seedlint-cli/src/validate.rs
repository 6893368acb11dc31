//! # Validate Subcommand
//!
//! Validates one content directory and reports the outcome. Inputs can
//! come from flags or from the GitHub Actions input variables, so the same
//! binary works as an action step and from a shell.

use std::io::Write;
use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use seedlint_core::{ApiUserAllowList, LintConfig};
use seedlint_schema::validate_directory;

use crate::report::{in_github_actions, reporter_for, ReportFormat, StatusReporter};

/// Arguments for the `seedlint validate` subcommand.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Directory holding the topic and post YAML files.
    #[arg(value_name = "PATH", env = "INPUT_PATH_TO_FILES")]
    pub path: PathBuf,

    /// Comma-separated API users documents may be attributed to.
    /// Empty means any non-empty user is accepted.
    #[arg(long, value_name = "USERS", env = "INPUT_API_USERS", default_value = "")]
    pub api_users: ApiUserAllowList,

    /// How to report the outcome.
    #[arg(long, value_enum, default_value_t = ReportFormat::Auto)]
    pub report: ReportFormat,
}

impl ValidateArgs {
    /// The immutable run configuration these arguments describe.
    pub fn to_config(&self) -> LintConfig {
        LintConfig::new(self.path.clone(), self.api_users.clone())
    }
}

/// Execute the validate subcommand.
///
/// Returns exit code: 0 when every file passed, 1 on the first failure.
pub fn run_validate(args: &ValidateArgs) -> Result<u8> {
    let config = args.to_config();
    let format = args.report.resolve(in_github_actions());
    let reporter = reporter_for(format, config.root());
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run_with_reporter(&config, reporter.as_ref(), &mut out)
}

/// Validate `config.root()` and write exactly one outcome message to `out`.
pub fn run_with_reporter(
    config: &LintConfig,
    reporter: &dyn StatusReporter,
    out: &mut dyn Write,
) -> Result<u8> {
    tracing::debug!(
        root = %config.root().display(),
        api_users = %config.api_users(),
        "starting validation"
    );

    match validate_directory(config) {
        Ok(report) => {
            reporter.success(out, &report)?;
            Ok(0)
        }
        Err(e) => {
            tracing::debug!(kind = %e.kind(), "validation failed");
            reporter.failure(out, &e)?;
            Ok(1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::{JsonReporter, PlainReporter};
    use std::path::Path;

    const TOPIC_A: &str = "type: topic\ntitle: T\nbody: B\napi:\n  user: alice\n";
    const POST_B: &str = "type: post\ntopic: a\nbody: B2\napi:\n  user: alice\n";

    fn run(dir: &Path, users: &str) -> (u8, String) {
        let config = LintConfig::new(dir, ApiUserAllowList::parse(users));
        let mut buf = Vec::new();
        let code = run_with_reporter(&config, &PlainReporter, &mut buf).unwrap();
        (code, String::from_utf8(buf).unwrap())
    }

    #[test]
    fn valid_directory_exits_zero() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("a.yaml"), TOPIC_A).unwrap();
        std::fs::write(dir.path().join("b.yaml"), POST_B).unwrap();

        let (code, text) = run(dir.path(), "alice");
        assert_eq!(code, 0);
        assert!(text.starts_with("OK: 2 files validated"), "got: {text}");
    }

    #[test]
    fn missing_topic_exits_one_with_single_message() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("b.yaml"), POST_B).unwrap();

        let (code, text) = run(dir.path(), "alice");
        assert_eq!(code, 1);
        assert_eq!(text.lines().count(), 1);
        assert!(text.contains("b.yaml"));
        assert!(text.contains("a.yaml"));
    }

    #[test]
    fn unlisted_user_exits_one() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("a.yaml"), TOPIC_A).unwrap();

        let (code, text) = run(dir.path(), "bob");
        assert_eq!(code, 1);
        assert!(text.contains("must be one of bob"), "got: {text}");
    }

    #[test]
    fn missing_directory_exits_one() {
        let (code, text) = run(Path::new("/tmp/seedlint-cli-no-such-dir"), "");
        assert_eq!(code, 1);
        assert!(text.starts_with("FAIL: cannot read"), "got: {text}");
    }

    #[test]
    fn json_reporter_through_run() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("a.yaml"), "type: nope\n").unwrap();
        let config = LintConfig::new(dir.path(), ApiUserAllowList::unrestricted());
        let mut buf = Vec::new();
        let code = run_with_reporter(&config, &JsonReporter, &mut buf).unwrap();
        assert_eq!(code, 1);
        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(value["error"]["kind"], "unknown_type");
    }

    #[test]
    fn to_config_carries_arguments() {
        let args = ValidateArgs {
            path: PathBuf::from("content"),
            api_users: ApiUserAllowList::parse("alice"),
            report: ReportFormat::Plain,
        };
        let config = args.to_config();
        assert_eq!(config.root(), Path::new("content"));
        assert!(config.api_users().permits("alice"));
        assert!(!config.api_users().permits("bob"));
    }
}
