//! # Document Model
//!
//! Typed shapes of the three content documents. Decoding happens in two
//! steps: the `type` literal is checked against [`DocumentKind`] first, and
//! only then is the tree deserialized into the matching variant. An unknown
//! `type` therefore never reaches a field-level rule.
//!
//! Fields the rules check for presence are `Option`s. Whether a present
//! value is acceptable (non-empty, allow-listed, resolvable) is decided by
//! the rules, so failures can name the field instead of surfacing a
//! decoder message.

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use serde_yaml::Value;

use seedlint_core::{FileName, LintError};

use crate::parse::ParsedFile;

/// Rendering used in messages when a `type` entry is absent.
pub(crate) const MISSING: &str = "<missing>";

/// The three document types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentKind {
    /// A top-level content item.
    Topic,
    /// A single post attached to a topic.
    Post,
    /// A batch of inline posts attached to one topic.
    Posts,
}

impl DocumentKind {
    /// Every kind, in the order listed in messages.
    pub const ALL: [DocumentKind; 3] = [Self::Topic, Self::Post, Self::Posts];

    /// The `type` literal.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Topic => "topic",
            Self::Post => "post",
            Self::Posts => "posts",
        }
    }

    /// Match a `type` literal exactly.
    pub fn from_literal(literal: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.as_str() == literal)
    }

    /// `"topic", "post" or "posts"`, for messages.
    pub fn expected_literals() -> String {
        let quoted: Vec<String> = Self::ALL.iter().map(|k| format!("\"{}\"", k.as_str())).collect();
        match quoted.split_last() {
            Some((last, init)) if !init.is_empty() => format!("{} or {last}", init.join(", ")),
            _ => quoted.join(""),
        }
    }

    /// Read and check the `type` entry of a parsed file.
    ///
    /// # Errors
    ///
    /// [`LintError::UnknownDocumentType`] citing the value found.
    pub fn declared_in(parsed: &ParsedFile) -> Result<Self, LintError> {
        let declared = parsed.declared_type();
        declared
            .and_then(Value::as_str)
            .and_then(Self::from_literal)
            .ok_or_else(|| LintError::UnknownDocumentType {
                file: parsed.name.clone(),
                found: declared.map_or_else(|| MISSING.to_string(), describe_value),
                expected: Self::expected_literals(),
            })
    }
}

impl std::fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A scalar field rendered as text.
///
/// YAML happily reads `title: 2024` as a number and `tag: yes` as a
/// string; both are acceptable content, so any scalar is taken and kept in
/// its textual form. Falsy scalars (`null`, `false`, zero, NaN) decode to
/// the empty text and so count as absent. Sequences and mappings are
/// rejected.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Text(String);

impl Text {
    /// Wrap a string.
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// The textual value.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True for the empty string.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'de> Deserialize<'de> for Text {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match Value::deserialize(deserializer)? {
            Value::Null | Value::Bool(false) => Ok(Self::default()),
            Value::Bool(true) => Ok(Self::new("true")),
            Value::Number(n) if is_falsy_number(&n) => Ok(Self::default()),
            Value::Number(n) => Ok(Self(n.to_string())),
            Value::String(s) => Ok(Self(s)),
            other => Err(de::Error::custom(format!(
                "expected a scalar, found {}",
                describe_value(&other)
            ))),
        }
    }
}

fn is_falsy_number(n: &serde_yaml::Number) -> bool {
    n.as_f64().map_or(false, |f| f == 0.0 || f.is_nan())
}

/// The text of a field if it is present and non-empty.
pub fn present(field: &Option<Text>) -> Option<&str> {
    field.as_ref().filter(|t| !t.is_empty()).map(Text::as_str)
}

/// API attribution: the user credited for a document.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ApiAttribution {
    /// Credited user.
    #[serde(default)]
    pub user: Option<Text>,
}

/// Raw trigger entry. Its `type` is checked by
/// [`validate_trigger`](crate::trigger::validate_trigger).
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct TriggerSpec {
    /// `flag`, `timer`, or `score`.
    #[serde(rename = "type", default)]
    pub kind: Option<Text>,
    /// Required for `flag`.
    #[serde(default)]
    pub tag: Option<Text>,
    /// Required for `timer`.
    #[serde(default)]
    pub after: Option<Text>,
    /// Required for `score`.
    #[serde(default)]
    pub value: Option<Text>,
}

/// `type: topic`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct TopicDocument {
    #[serde(default)]
    pub title: Option<Text>,
    #[serde(default)]
    pub body: Option<Text>,
    #[serde(default)]
    pub api: Option<ApiAttribution>,
    #[serde(default)]
    pub trigger: Option<TriggerSpec>,
}

/// `type: post`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PostDocument {
    #[serde(default)]
    pub topic: Option<Text>,
    #[serde(default)]
    pub body: Option<Text>,
    #[serde(default)]
    pub api: Option<ApiAttribution>,
    #[serde(default)]
    pub trigger: Option<TriggerSpec>,
}

/// One entry of a batch's `posts` sequence.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct InlinePost {
    #[serde(default)]
    pub body: Option<Text>,
    #[serde(default)]
    pub api: Option<ApiAttribution>,
}

/// `type: posts`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PostsDocument {
    #[serde(default)]
    pub topic: Option<Text>,
    #[serde(default)]
    pub posts: Vec<InlinePost>,
    #[serde(default)]
    pub api: Option<ApiAttribution>,
    #[serde(default)]
    pub trigger: Option<TriggerSpec>,
}

/// A decoded content document.
#[derive(Debug, Clone, PartialEq)]
pub enum Document {
    Topic(TopicDocument),
    Post(PostDocument),
    Posts(PostsDocument),
}

impl Document {
    /// Check the `type` literal and decode the matching variant.
    ///
    /// # Errors
    ///
    /// [`LintError::UnknownDocumentType`] for a missing or unknown `type`,
    /// [`LintError::Decode`] when a field has the wrong shape.
    pub fn decode(parsed: &ParsedFile) -> Result<Self, LintError> {
        let kind = DocumentKind::declared_in(parsed)?;
        let document = match kind {
            DocumentKind::Topic => Self::Topic(decode_as(parsed, kind)?),
            DocumentKind::Post => Self::Post(decode_as(parsed, kind)?),
            DocumentKind::Posts => Self::Posts(decode_as(parsed, kind)?),
        };
        Ok(document)
    }

    /// Which variant this is.
    pub fn kind(&self) -> DocumentKind {
        match self {
            Self::Topic(_) => DocumentKind::Topic,
            Self::Post(_) => DocumentKind::Post,
            Self::Posts(_) => DocumentKind::Posts,
        }
    }
}

fn decode_as<T>(parsed: &ParsedFile, kind: DocumentKind) -> Result<T, LintError>
where
    T: for<'de> Deserialize<'de>,
{
    serde_yaml::from_value(parsed.value.clone()).map_err(|e| LintError::Decode {
        file: parsed.name.clone(),
        document_type: kind.as_str().to_string(),
        reason: e.to_string(),
    })
}

/// Short human rendering of a YAML value for messages.
pub(crate) fn describe_value(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) if s.is_empty() => "\"\"".to_string(),
        Value::String(s) => s.clone(),
        Value::Sequence(_) => "a sequence".to_string(),
        Value::Mapping(_) => "a mapping".to_string(),
        Value::Tagged(tagged) => format!("{} {}", tagged.tag, describe_value(&tagged.value)),
    }
}

/// Decode a YAML tree attributed to `name` without going through the disk.
pub fn decode_named(name: &FileName, value: Value) -> Result<Document, LintError> {
    Document::decode(&ParsedFile {
        name: name.clone(),
        value,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(yaml: &str) -> Result<Document, LintError> {
        decode_named(&FileName::new("doc.yaml"), serde_yaml::from_str(yaml).unwrap())
    }

    #[test]
    fn topic_decodes_all_fields() {
        let doc = decode(
            "type: topic\ntitle: T\nbody: B\napi:\n  user: alice\ntrigger:\n  type: flag\n  tag: x\n",
        )
        .unwrap();
        match doc {
            Document::Topic(t) => {
                assert_eq!(present(&t.title), Some("T"));
                assert_eq!(present(&t.body), Some("B"));
                assert_eq!(t.api.and_then(|a| a.user), Some(Text::new("alice")));
                let trigger = t.trigger.unwrap();
                assert_eq!(trigger.kind, Some(Text::new("flag")));
                assert_eq!(trigger.tag, Some(Text::new("x")));
            }
            other => panic!("Expected topic, got: {other:?}"),
        }
    }

    #[test]
    fn unknown_type_is_rejected_before_fields() {
        let err = decode("type: article\ntitle: [not, checked]\n").unwrap_err();
        match &err {
            LintError::UnknownDocumentType { found, expected, .. } => {
                assert_eq!(found, "article");
                assert_eq!(expected, "\"topic\", \"post\" or \"posts\"");
            }
            other => panic!("Expected UnknownDocumentType, got: {other}"),
        }
    }

    #[test]
    fn missing_type_reports_missing() {
        let err = decode("title: T\n").unwrap_err();
        assert!(err.to_string().contains(MISSING), "got: {err}");
    }

    #[test]
    fn empty_document_reports_missing_type() {
        let err = decode_named(&FileName::new("e.yaml"), Value::Null).unwrap_err();
        assert!(matches!(err, LintError::UnknownDocumentType { .. }));
    }

    #[test]
    fn type_literal_is_case_sensitive() {
        let err = decode("type: Topic\n").unwrap_err();
        assert!(matches!(err, LintError::UnknownDocumentType { .. }));
    }

    #[test]
    fn non_string_type_is_described() {
        let err = decode("type: [topic]\n").unwrap_err();
        assert!(err.to_string().contains("a sequence"), "got: {err}");
    }

    #[test]
    fn scalar_fields_accept_numbers_and_bools() {
        let doc = decode("type: post\ntopic: 2024\nbody: true\n").unwrap();
        match doc {
            Document::Post(p) => {
                assert_eq!(present(&p.topic), Some("2024"));
                assert_eq!(present(&p.body), Some("true"));
            }
            other => panic!("Expected post, got: {other:?}"),
        }
    }

    #[test]
    fn falsy_scalars_are_absent() {
        let doc = decode("type: post\ntopic: false\nbody: 0\n").unwrap();
        match doc {
            Document::Post(p) => {
                assert_eq!(present(&p.topic), None);
                assert_eq!(present(&p.body), None);
            }
            other => panic!("Expected post, got: {other:?}"),
        }

        let doc = decode("type: topic\ntitle: 0.0\nbody: .nan\n").unwrap();
        match doc {
            Document::Topic(t) => {
                assert_eq!(present(&t.title), None);
                assert_eq!(present(&t.body), None);
            }
            other => panic!("Expected topic, got: {other:?}"),
        }
    }

    #[test]
    fn mapping_in_text_field_is_decode_error() {
        let err = decode("type: topic\ntitle:\n  nested: value\nbody: B\n").unwrap_err();
        assert!(matches!(err, LintError::Decode { .. }), "got: {err}");
        assert!(err.to_string().contains("expected a scalar"));
    }

    #[test]
    fn scalar_api_is_decode_error() {
        let err = decode("type: topic\ntitle: T\nbody: B\napi: alice\n").unwrap_err();
        assert!(matches!(err, LintError::Decode { .. }), "got: {err}");
    }

    #[test]
    fn null_fields_are_absent() {
        let doc = decode("type: topic\ntitle: ~\nbody: ''\napi: ~\ntrigger: ~\n").unwrap();
        match doc {
            Document::Topic(t) => {
                assert_eq!(present(&t.title), None);
                assert_eq!(present(&t.body), None);
                assert!(t.api.is_none());
                assert!(t.trigger.is_none());
            }
            other => panic!("Expected topic, got: {other:?}"),
        }
    }

    #[test]
    fn posts_batch_keeps_order() {
        let doc = decode(
            "type: posts\ntopic: a\nposts:\n  - body: one\n  - body: two\n    api:\n      user: bob\n",
        )
        .unwrap();
        assert_eq!(doc.kind(), DocumentKind::Posts);
        match doc {
            Document::Posts(p) => {
                let bodies: Vec<_> = p.posts.iter().map(|ip| present(&ip.body)).collect();
                assert_eq!(bodies, vec![Some("one"), Some("two")]);
                assert!(p.posts[0].api.is_none());
                assert!(p.posts[1].api.is_some());
            }
            other => panic!("Expected posts, got: {other:?}"),
        }
    }

    #[test]
    fn posts_without_sequence_is_empty_batch() {
        let doc = decode("type: posts\ntopic: a\n").unwrap();
        match doc {
            Document::Posts(p) => assert!(p.posts.is_empty()),
            other => panic!("Expected posts, got: {other:?}"),
        }
    }

    #[test]
    fn kind_literals_round_trip() {
        for kind in DocumentKind::ALL {
            assert_eq!(DocumentKind::from_literal(kind.as_str()), Some(kind));
        }
        assert_eq!(DocumentKind::from_literal("banana"), None);
    }
}
