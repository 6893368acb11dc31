//! # Content Validation
//!
//! Runs the three stages over one directory: discovery, eager parsing, and
//! per-file validation in discovery order.
//!
//! ## Invariant
//!
//! Every file is parsed before any file is validated, and the first
//! violation ends the run. A report is only produced when every file
//! passed.

use std::path::Path;

use seedlint_core::{FileName, LintConfig, LintError};

use crate::discovery::{discover, DiscoverySet};
use crate::document::{Document, DocumentKind};
use crate::parse::{parse_all, ParsedFile};
use crate::report::{ValidatedFile, ValidationReport};
use crate::rules::{check_post, check_posts, check_topic, topic_of, RuleContext};

/// A content directory, discovered and parsed, ready to validate.
///
/// Loading happens once at construction. Validation only reads the loaded
/// documents and the configuration.
#[derive(Debug)]
pub struct ContentValidator<'c> {
    config: &'c LintConfig,
    discovered: DiscoverySet,
    parsed: Vec<ParsedFile>,
}

impl<'c> ContentValidator<'c> {
    /// Discover and parse every content file under `config.root()`.
    ///
    /// # Errors
    ///
    /// [`LintError::Discovery`] if the directory cannot be listed or a file
    /// cannot be read; [`LintError::Parse`] for the first malformed file.
    pub fn load(config: &'c LintConfig) -> Result<Self, LintError> {
        let discovered = discover(config.root())?;
        let parsed = parse_all(config.root(), &discovered)?;
        Ok(Self {
            config,
            discovered,
            parsed,
        })
    }

    /// Returns the content directory.
    pub fn root(&self) -> &Path {
        self.config.root()
    }

    /// Returns the number of loaded files.
    pub fn file_count(&self) -> usize {
        self.parsed.len()
    }

    /// Loaded files in discovery order.
    pub fn files(&self) -> &[ParsedFile] {
        &self.parsed
    }

    /// The discovery set topic references resolve against.
    pub fn discovered(&self) -> &DiscoverySet {
        &self.discovered
    }

    /// Validate every loaded file in order, stopping at the first failure.
    pub fn validate_all(&self) -> Result<ValidationReport, LintError> {
        let mut report = ValidationReport::default();
        for parsed in &self.parsed {
            report.push(self.validate_file(parsed)?);
        }
        tracing::info!(count = report.len(), "all content files valid");
        Ok(report)
    }

    /// Decode one loaded file and apply the rule for its type.
    pub fn validate_file(&self, parsed: &ParsedFile) -> Result<ValidatedFile, LintError> {
        let document = Document::decode(parsed)?;
        self.validate_document(&parsed.name, &document)
    }

    /// Apply the rule for a decoded document's type.
    pub fn validate_document(
        &self,
        file: &FileName,
        document: &Document,
    ) -> Result<ValidatedFile, LintError> {
        let ctx = RuleContext {
            config: self.config,
            discovered: &self.discovered,
        };
        tracing::debug!(file = %file, kind = %document.kind(), "validating");

        let (topic, inline_posts) = match document {
            Document::Topic(doc) => {
                check_topic(ctx, file, doc)?;
                (None, 0)
            }
            Document::Post(doc) => {
                check_post(ctx, file, doc)?;
                (topic_of(&doc.topic), 0)
            }
            Document::Posts(doc) => {
                check_posts(ctx, file, doc)?;
                (topic_of(&doc.topic), doc.posts.len())
            }
        };

        Ok(ValidatedFile {
            file: file.clone(),
            kind: document.kind(),
            topic,
            inline_posts,
        })
    }

    /// The declared type of every loaded file, without validating.
    ///
    /// Files whose `type` is missing or unrecognized map to `None`.
    pub fn declared_kinds(&self) -> Vec<(&FileName, Option<DocumentKind>)> {
        self.parsed
            .iter()
            .map(|p| (&p.name, DocumentKind::declared_in(p).ok()))
            .collect()
    }
}

/// Load and validate the directory named by `config` in one call.
pub fn validate_directory(config: &LintConfig) -> Result<ValidationReport, LintError> {
    let validator = ContentValidator::load(config)?;
    tracing::info!(
        root = %validator.root().display(),
        count = validator.file_count(),
        "loaded content files"
    );
    validator.validate_all()
}
