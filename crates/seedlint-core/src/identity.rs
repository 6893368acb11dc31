//! # Identity Newtypes
//!
//! A document is identified by the name of the file it was read from.
//! Posts point at topics by base name, without an extension. Keeping the
//! two in separate types means a topic reference can only be resolved
//! through [`TopicRef::candidates`].

use serde::{Deserialize, Serialize};

/// File extensions recognized as content documents, without the dot.
pub const DOCUMENT_EXTENSIONS: [&str; 2] = ["yaml", "yml"];

/// Name of a discovered content file, e.g. `welcome.yaml`.
///
/// This is the file name only, never a path: discovery is flat, so the name
/// is unique within a run.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FileName(String);

impl FileName {
    /// Wrap a file name.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Access the inner string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The file name without a recognized document extension.
    ///
    /// `intro.yaml` and `intro.yml` both yield `intro`. Names with any other
    /// extension are returned unchanged.
    pub fn stem(&self) -> &str {
        for ext in DOCUMENT_EXTENSIONS {
            if let Some(stem) = self
                .0
                .strip_suffix(ext)
                .and_then(|rest| rest.strip_suffix('.'))
            {
                return stem;
            }
        }
        &self.0
    }

    /// Whether the name ends in one of [`DOCUMENT_EXTENSIONS`].
    pub fn has_document_extension(&self) -> bool {
        self.stem().len() != self.0.len()
    }
}

impl std::fmt::Display for FileName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// The `topic` value of a post or posts batch: a topic file's base name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TopicRef(String);

impl TopicRef {
    /// Wrap a topic reference.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Access the inner string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// File names this reference resolves to, in preference order.
    pub fn candidates(&self) -> impl Iterator<Item = FileName> + '_ {
        DOCUMENT_EXTENSIONS
            .iter()
            .map(move |ext| FileName::new(format!("{}.{ext}", self.0)))
    }
}

impl std::fmt::Display for TopicRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
