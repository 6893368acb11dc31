//! # Run Configuration
//!
//! The content directory and the API-user allow-list, read once when a run
//! starts and never changed afterwards. Validators receive a `&LintConfig`.

use std::convert::Infallible;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// The API users a document may be attributed to.
///
/// An empty list is unrestricted: any non-empty user is accepted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApiUserAllowList {
    users: Vec<String>,
}

impl ApiUserAllowList {
    /// An allow-list that accepts any non-empty user.
    pub fn unrestricted() -> Self {
        Self::default()
    }

    /// Parse a comma-separated list such as `alice, bob`.
    ///
    /// Entries are trimmed; empty entries are dropped; duplicates keep their
    /// first position.
    pub fn parse(raw: &str) -> Self {
        Self::from_users(raw.split(','))
    }

    /// Build from individual user names, applying the same normalization as
    /// [`parse`](Self::parse).
    pub fn from_users<I, S>(users: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut out: Vec<String> = Vec::new();
        for user in users {
            let user = user.as_ref().trim();
            if !user.is_empty() && !out.iter().any(|u| u == user) {
                out.push(user.to_string());
            }
        }
        Self { users: out }
    }

    /// True when no restriction is configured.
    pub fn is_unrestricted(&self) -> bool {
        self.users.is_empty()
    }

    /// Whether `user` may be credited on a document.
    pub fn permits(&self, user: &str) -> bool {
        self.is_unrestricted() || self.users.iter().any(|u| u == user)
    }

    /// The configured users, in the order given.
    pub fn users(&self) -> &[String] {
        &self.users
    }
}

impl FromStr for ApiUserAllowList {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl std::fmt::Display for ApiUserAllowList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.users.join(", "))
    }
}

/// Immutable settings for one lint run.
#[derive(Debug, Clone)]
pub struct LintConfig {
    root: PathBuf,
    api_users: ApiUserAllowList,
}

impl LintConfig {
    /// Configure a run over `root`.
    pub fn new(root: impl Into<PathBuf>, api_users: ApiUserAllowList) -> Self {
        Self {
            root: root.into(),
            api_users,
        }
    }

    /// Directory holding the content files.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// API users documents may be attributed to.
    pub fn api_users(&self) -> &ApiUserAllowList {
        &self.api_users
    }
}
