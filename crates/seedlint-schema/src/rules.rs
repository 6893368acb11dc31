//! # Per-Type Rules
//!
//! Field requirements for topics, posts, and post batches. Each rule
//! returns the first violation it finds; order within a document is
//! required fields, then topic reference, then attribution, then trigger.

use seedlint_core::{FileName, LintConfig, LintError, TopicRef};

use crate::api_user::{validate_api_user, AttributionSite};
use crate::discovery::DiscoverySet;
use crate::document::{present, PostDocument, PostsDocument, Text, TopicDocument, TriggerSpec};
use crate::trigger::validate_trigger;

/// What a rule may consult besides the document itself.
#[derive(Debug, Clone, Copy)]
pub struct RuleContext<'a> {
    /// Run configuration.
    pub config: &'a LintConfig,
    /// Every file discovered in this run.
    pub discovered: &'a DiscoverySet,
}

/// `type: topic`: `title` and `body`, mandatory `api`, optional `trigger`.
pub fn check_topic(ctx: RuleContext<'_>, file: &FileName, doc: &TopicDocument) -> Result<(), LintError> {
    if present(&doc.title).is_none() || present(&doc.body).is_none() {
        return Err(LintError::MissingFields {
            file: file.clone(),
            document_type: "topic".to_string(),
            fields: &["title", "body"],
        });
    }

    validate_api_user(
        file,
        AttributionSite::Document,
        doc.api.as_ref(),
        ctx.config.api_users(),
    )?;
    check_optional_trigger(file, doc.trigger.as_ref())
}

/// `type: post`: `topic` and `body`, a resolvable topic, mandatory `api`,
/// optional `trigger`.
pub fn check_post(ctx: RuleContext<'_>, file: &FileName, doc: &PostDocument) -> Result<(), LintError> {
    let topic = match (present(&doc.topic), present(&doc.body)) {
        (Some(topic), Some(_)) => topic,
        _ => {
            return Err(LintError::MissingFields {
                file: file.clone(),
                document_type: "post".to_string(),
                fields: &["topic", "body"],
            })
        }
    };

    resolve_topic(ctx, file, topic)?;
    validate_api_user(
        file,
        AttributionSite::Document,
        doc.api.as_ref(),
        ctx.config.api_users(),
    )?;
    check_optional_trigger(file, doc.trigger.as_ref())
}

/// `type: posts`: `topic` only at the top, a body on every inline post,
/// optional `api` at both levels, optional `trigger`.
pub fn check_posts(ctx: RuleContext<'_>, file: &FileName, doc: &PostsDocument) -> Result<(), LintError> {
    let topic = present(&doc.topic).ok_or_else(|| LintError::MissingFields {
        file: file.clone(),
        document_type: "posts".to_string(),
        fields: &["topic"],
    })?;

    resolve_topic(ctx, file, topic)?;

    if let Some(api) = doc.api.as_ref() {
        validate_api_user(file, AttributionSite::Document, Some(api), ctx.config.api_users())?;
    }

    for (index, post) in doc.posts.iter().enumerate() {
        if present(&post.body).is_none() {
            return Err(LintError::MissingInlineBody {
                file: file.clone(),
                index,
            });
        }
        if let Some(api) = post.api.as_ref() {
            validate_api_user(
                file,
                AttributionSite::InlinePost(index),
                Some(api),
                ctx.config.api_users(),
            )?;
        }
    }

    check_optional_trigger(file, doc.trigger.as_ref())
}

fn resolve_topic(ctx: RuleContext<'_>, file: &FileName, topic: &str) -> Result<(), LintError> {
    let topic = TopicRef::new(topic);
    match ctx.discovered.resolve(&topic) {
        Some(target) => {
            tracing::trace!(file = %file, target = %target, "topic reference resolved");
            Ok(())
        }
        None => Err(LintError::UnresolvedTopic {
            file: file.clone(),
            topic,
        }),
    }
}

fn check_optional_trigger(file: &FileName, trigger: Option<&TriggerSpec>) -> Result<(), LintError> {
    if let Some(spec) = trigger {
        validate_trigger(file, spec)?;
    }
    Ok(())
}

/// Text of a batch's `topic`, for reports.
pub fn topic_of(topic: &Option<Text>) -> Option<TopicRef> {
    present(topic).map(TopicRef::new)
}
