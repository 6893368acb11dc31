//! # API-User Attribution
//!
//! One check, shared by every place a document can credit a user: topics,
//! posts, and both the batch level and each inline post of a `posts`
//! document.

use seedlint_core::{ApiUserAllowList, FileName, LintError};

use crate::document::{present, ApiAttribution};

/// Where in a document an `api` entry sits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributionSite {
    /// Top-level `api`.
    Document,
    /// `api` of the inline post at this index.
    InlinePost(usize),
}

impl AttributionSite {
    /// Dotted path of the `user` entry, as shown in messages.
    pub fn user_field(&self) -> String {
        match self {
            Self::Document => "api.user".to_string(),
            Self::InlinePost(index) => format!("posts[{index}].api.user"),
        }
    }
}

/// Check an `api` entry and return the credited user.
///
/// Absence is a failure: callers for which attribution is optional only
/// call this when an entry is present.
///
/// # Errors
///
/// [`LintError::MissingApiUser`] when `api` or its `user` is absent or
/// empty; [`LintError::UnauthorizedApiUser`] when a non-empty allow-list
/// does not contain the user.
pub fn validate_api_user<'a>(
    file: &FileName,
    site: AttributionSite,
    api: Option<&'a ApiAttribution>,
    allow_list: &ApiUserAllowList,
) -> Result<&'a str, LintError> {
    let user = api
        .and_then(|a| present(&a.user))
        .ok_or_else(|| LintError::MissingApiUser {
            file: file.clone(),
            field: site.user_field(),
        })?;

    if !allow_list.permits(user) {
        return Err(LintError::UnauthorizedApiUser {
            file: file.clone(),
            field: site.user_field(),
            user: user.to_string(),
            allowed: allow_list.to_string(),
        });
    }

    tracing::trace!(file = %file, user, "api user accepted");
    Ok(user)
}
