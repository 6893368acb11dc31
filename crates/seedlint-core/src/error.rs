//! # Error Types — Lint Failure Taxonomy
//!
//! Every failure seedlint can report. All errors use `thiserror` for
//! derive-based `Display` and `Error` implementations.
//!
//! ## Design
//!
//! - Every variant except [`LintError::Discovery`] names the offending file.
//! - Messages carry the field name, the value found, and for enum-like
//!   fields the accepted alternatives, so a failure can be diagnosed
//!   without opening the file.
//! - [`ErrorKind`] is the coarse category used by machine-readable reports.

use serde::Serialize;
use thiserror::Error;

use crate::identity::{FileName, TopicRef};

/// Stable failure categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// The content directory could not be listed or a file could not be read.
    Discovery,
    /// File content is not valid YAML.
    Parse,
    /// A required field is absent, empty, or has the wrong shape.
    Schema,
    /// A `topic` reference does not resolve to a discovered file.
    Reference,
    /// A document or trigger `type` is absent or unrecognized.
    UnknownType,
    /// An `api.user` is not in the configured allow-list.
    Authorization,
}

impl ErrorKind {
    /// The snake_case label, matching the serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Discovery => "discovery",
            Self::Parse => "parse",
            Self::Schema => "schema",
            Self::Reference => "reference",
            Self::UnknownType => "unknown_type",
            Self::Authorization => "authorization",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The single failure that ends a lint run.
#[derive(Error, Debug)]
pub enum LintError {
    /// The content directory or one of its files could not be read.
    #[error("cannot read {path}: {source}")]
    Discovery {
        /// Directory or file that failed.
        path: String,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid YAML.
    #[error("error parsing file {file}: {reason}")]
    Parse {
        /// Offending file.
        file: FileName,
        /// Parser message, including line and column when available.
        reason: String,
    },

    /// A field holds a value of the wrong shape (e.g. a list where a
    /// mapping is expected).
    #[error("file {file} does not match the {document_type} schema: {reason}")]
    Decode {
        /// Offending file.
        file: FileName,
        /// Declared document type.
        document_type: String,
        /// Decoder message naming the field.
        reason: String,
    },

    /// One or more required top-level fields are absent or empty.
    #[error("file {file} with type {document_type} must have a {}", join_fields(.fields))]
    MissingFields {
        /// Offending file.
        file: FileName,
        /// Declared document type.
        document_type: String,
        /// All fields the type requires, named collectively.
        fields: &'static [&'static str],
    },

    /// An inline post in a batch has no body.
    #[error("file {file} has an inline post at posts[{index}] without a body")]
    MissingInlineBody {
        /// Offending file.
        file: FileName,
        /// Zero-based position in the `posts` sequence.
        index: usize,
    },

    /// API attribution is absent or has no user.
    #[error("file {file} is missing the \"{field}\" entry")]
    MissingApiUser {
        /// Offending file.
        file: FileName,
        /// Dotted path of the missing entry, e.g. `posts[1].api.user`.
        field: String,
    },

    /// The API user is not in the configured allow-list.
    #[error("file {file} has an invalid API user {user} at \"{field}\", must be one of {allowed}")]
    UnauthorizedApiUser {
        /// Offending file.
        file: FileName,
        /// Dotted path of the entry.
        field: String,
        /// User found.
        user: String,
        /// The allow-list, comma separated.
        allowed: String,
    },

    /// A trigger lacks the field its type requires.
    #[error("file {file} is using a {trigger_type} trigger, but is missing the \"{field}\" field")]
    MissingTriggerField {
        /// Offending file.
        file: FileName,
        /// Trigger type found.
        trigger_type: String,
        /// Required discriminant field.
        field: &'static str,
    },

    /// The topic reference does not resolve to any discovered file.
    #[error("file {file} has an invalid topic, {topic}.yaml (or {topic}.yml) does not exist")]
    UnresolvedTopic {
        /// Offending file.
        file: FileName,
        /// Reference found.
        topic: TopicRef,
    },

    /// The document `type` is absent or not a recognized literal.
    #[error("file {file} must be of type {expected}, found {found}")]
    UnknownDocumentType {
        /// Offending file.
        file: FileName,
        /// Value found, or `<missing>`.
        found: String,
        /// Accepted literals.
        expected: String,
    },

    /// The trigger `type` is absent or not a recognized literal.
    #[error("file {file} has an invalid trigger type {found}, must be one of {expected}")]
    UnknownTriggerType {
        /// Offending file.
        file: FileName,
        /// Value found, or `<missing>`.
        found: String,
        /// Accepted literals.
        expected: String,
    },
}

impl LintError {
    /// The failure category.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Discovery { .. } => ErrorKind::Discovery,
            Self::Parse { .. } => ErrorKind::Parse,
            Self::Decode { .. }
            | Self::MissingFields { .. }
            | Self::MissingInlineBody { .. }
            | Self::MissingApiUser { .. }
            | Self::MissingTriggerField { .. } => ErrorKind::Schema,
            Self::UnresolvedTopic { .. } => ErrorKind::Reference,
            Self::UnknownDocumentType { .. } | Self::UnknownTriggerType { .. } => {
                ErrorKind::UnknownType
            }
            Self::UnauthorizedApiUser { .. } => ErrorKind::Authorization,
        }
    }

    /// The offending file, when the failure is tied to one.
    pub fn file(&self) -> Option<&FileName> {
        match self {
            Self::Discovery { .. } => None,
            Self::Parse { file, .. }
            | Self::Decode { file, .. }
            | Self::MissingFields { file, .. }
            | Self::MissingInlineBody { file, .. }
            | Self::MissingApiUser { file, .. }
            | Self::UnauthorizedApiUser { file, .. }
            | Self::MissingTriggerField { file, .. }
            | Self::UnresolvedTopic { file, .. }
            | Self::UnknownDocumentType { file, .. }
            | Self::UnknownTriggerType { file, .. } => Some(file),
        }
    }
}

/// `["title", "body"]` → `title and body`; three or more use commas.
fn join_fields(fields: &[&str]) -> String {
    match fields {
        [] => String::new(),
        [only] => (*only).to_string(),
        [init @ .., last] => format!("{} and {last}", init.join(", ")),
    }
}
