//! # Triggers
//!
//! A trigger is one of three shapes, selected by its `type`. Each shape
//! requires exactly one extra field.

use seedlint_core::{FileName, LintError};

use crate::document::{present, Text, TriggerSpec, MISSING};

/// Recognized trigger types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TriggerKind {
    /// Fires when a tag is set; requires `tag`.
    Flag,
    /// Fires after a delay; requires `after`.
    Timer,
    /// Fires at a score threshold; requires `value`.
    Score,
}

impl TriggerKind {
    /// Every kind, in the order listed in messages.
    pub const ALL: [TriggerKind; 3] = [Self::Flag, Self::Timer, Self::Score];

    /// The `type` literal.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Flag => "flag",
            Self::Timer => "timer",
            Self::Score => "score",
        }
    }

    /// Match a `type` literal exactly.
    pub fn from_literal(literal: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.as_str() == literal)
    }

    /// The discriminant field this kind requires.
    pub fn required_field(&self) -> &'static str {
        match self {
            Self::Flag => "tag",
            Self::Timer => "after",
            Self::Score => "value",
        }
    }

    /// `flag, timer, score`.
    pub fn expected_literals() -> String {
        Self::ALL
            .iter()
            .map(TriggerKind::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }

    fn discriminant<'a>(&self, spec: &'a TriggerSpec) -> &'a Option<Text> {
        match self {
            Self::Flag => &spec.tag,
            Self::Timer => &spec.after,
            Self::Score => &spec.value,
        }
    }
}

impl std::fmt::Display for TriggerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Check a present trigger entry and return its kind.
///
/// # Errors
///
/// [`LintError::UnknownTriggerType`] for a missing or unrecognized `type`;
/// [`LintError::MissingTriggerField`] when the kind's field is absent or
/// empty.
pub fn validate_trigger(file: &FileName, spec: &TriggerSpec) -> Result<TriggerKind, LintError> {
    let declared = spec.kind.as_ref().map(Text::as_str);
    let kind = declared
        .and_then(TriggerKind::from_literal)
        .ok_or_else(|| LintError::UnknownTriggerType {
            file: file.clone(),
            found: match declared {
                Some("") => "\"\"".to_string(),
                Some(found) => found.to_string(),
                None => MISSING.to_string(),
            },
            expected: TriggerKind::expected_literals(),
        })?;

    if present(kind.discriminant(spec)).is_none() {
        return Err(LintError::MissingTriggerField {
            file: file.clone(),
            trigger_type: kind.as_str().to_string(),
            field: kind.required_field(),
        });
    }

    Ok(kind)
}
