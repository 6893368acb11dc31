//! # seedlint-core — Foundational Types for seedlint
//!
//! This crate is the leaf of the seedlint workspace. It defines the types
//! that every other crate agrees on: how a failure is described, how a run
//! is configured, and how a content file is identified.
//!
//! ## Key Design Principles
//!
//! 1. **One error per run.** [`LintError`] describes exactly one violation
//!    and always names the offending file. Validators return it through
//!    `Result` and the first one short-circuits the run.
//!
//! 2. **Configuration is a value.** [`LintConfig`] is built once at entry and
//!    passed by reference. There is no ambient global state.
//!
//! 3. **Newtypes for identities.** [`FileName`] and [`TopicRef`] keep a
//!    document's own name apart from the topic it points at.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `seedlint-*` crates.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod config;
pub mod error;
pub mod identity;

pub use config::{ApiUserAllowList, LintConfig};
pub use error::{ErrorKind, LintError};
pub use identity::{FileName, TopicRef, DOCUMENT_EXTENSIONS};
