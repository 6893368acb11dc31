//! # seedlint-schema — Content Directory Validation
//!
//! Checks a flat directory of YAML content definitions (topics, posts, and
//! post batches) against their structural rules.
//!
//! ## Pipeline
//!
//! 1. [`discovery`] lists the `.yml`/`.yaml` files directly inside the
//!    directory. The list is the universe topic references resolve against.
//! 2. [`parse`] reads and decodes every file before anything is validated.
//! 3. [`validate`] decodes each file into a typed [`Document`] by its `type`
//!    and applies the matching rule from [`rules`]. The rules share
//!    [`api_user`] and [`trigger`].
//!
//! The entry point is [`validate_directory`]; [`ContentValidator`] exposes
//! the stages separately.
//!
//! ## Crate Policy
//!
//! - Depends only on `seedlint-core` internally.
//! - Reads files; never writes or rewrites them.
//! - The first violation is returned as a [`seedlint_core::LintError`];
//!   there is no accumulation.

pub mod api_user;
pub mod discovery;
pub mod document;
pub mod parse;
pub mod report;
pub mod rules;
pub mod trigger;
pub mod validate;

pub use api_user::{validate_api_user, AttributionSite};
pub use discovery::{discover, DiscoverySet};
pub use document::{
    ApiAttribution, Document, DocumentKind, InlinePost, PostDocument, PostsDocument, Text,
    TopicDocument, TriggerSpec,
};
pub use parse::{parse_all, parse_file, ParsedFile};
pub use report::{ValidatedFile, ValidationReport};
pub use trigger::{validate_trigger, TriggerKind};
pub use validate::{validate_directory, ContentValidator};
