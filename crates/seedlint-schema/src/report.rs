//! # Validation Report
//!
//! What a successful run saw, in discovery order.

use serde::Serialize;

use seedlint_core::{FileName, TopicRef};

use crate::document::DocumentKind;

/// One validated file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidatedFile {
    /// File name.
    pub file: FileName,
    /// Declared document type.
    pub kind: DocumentKind,
    /// Topic the document points at (posts and batches only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topic: Option<TopicRef>,
    /// Inline posts carried (batches only; zero otherwise).
    pub inline_posts: usize,
}

/// Summary of a run in which every file passed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    files: Vec<ValidatedFile>,
}

impl ValidationReport {
    pub(crate) fn push(&mut self, file: ValidatedFile) {
        self.files.push(file);
    }

    /// Validated files, in discovery order.
    pub fn files(&self) -> &[ValidatedFile] {
        &self.files
    }

    /// Total number of files.
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// True if the directory held no content files.
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Number of files of a given type.
    pub fn count(&self, kind: DocumentKind) -> usize {
        self.files.iter().filter(|f| f.kind == kind).count()
    }

    /// Inline posts across every batch.
    pub fn inline_post_total(&self) -> usize {
        self.files.iter().map(|f| f.inline_posts).sum()
    }
}

impl std::fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} files validated ({} topics, {} posts, {} batches with {} inline posts)",
            self.len(),
            self.count(DocumentKind::Topic),
            self.count(DocumentKind::Post),
            self.count(DocumentKind::Posts),
            self.inline_post_total()
        )
    }
}
