//! # seedlint-cli — Command-Line Interface for seedlint
//!
//! Provides the `seedlint` binary, meant to run as a CI gate over a
//! directory of topic and post YAML definitions.
//!
//! ## Subcommands
//!
//! - `seedlint validate`: validate a content directory; exit 0 when every
//!   file passes, 1 on the first failure.
//! - `seedlint discover`: list the files a run would see and their types.
//!
//! ## Inputs
//!
//! Both subcommands take the directory as `PATH`, falling back to
//! `INPUT_PATH_TO_FILES`. The allow-list comes from `--api-users`, falling
//! back to `INPUT_API_USERS`. These are the variables GitHub Actions sets
//! for the `path_to_files` and `api_users` inputs:
//!
//! ```bash
//! seedlint validate content/ --api-users alice,bob
//! INPUT_PATH_TO_FILES=content seedlint validate --report github
//! ```
//!
//! ## Crate Policy
//!
//! - Argument parsing lives here; every rule lives in `seedlint-schema`.
//! - Exactly one outcome message is written per validation run.

pub mod discover;
pub mod report;
pub mod validate;
