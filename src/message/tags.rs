//! IRCv3 message tags: the `@key=value;key2=value2 ` blob prefixed to a
//! line, its per-value escaping, and the ordered [`Tag`] list that
//! preserves duplicates for round-trip fidelity.

use std::fmt::{Result as FmtResult, Write};

use crate::error::ValidationError;

/// A single IRCv3 message tag.
///
/// Tags are kept in arrival order and duplicates are preserved (last-wins
/// is only applied by lookup helpers), matching the tag parser's contract
/// in the codec spec.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tag {
    /// The tag key, e.g. `time`, `+draft/reply`, `msgid`.
    pub key: String,
    /// The tag's unescaped value. An absent `=` on the wire is represented
    /// as an empty string here, which also renders back without `=`.
    pub value: String,
}

impl Tag {
    /// Construct a tag, validating the key grammar.
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Result<Self, ValidationError> {
        let key = key.into();
        if !is_valid_tag_key(&key) {
            return Err(ValidationError::InvalidTag);
        }
        Ok(Tag {
            key,
            value: value.into(),
        })
    }
}

/// Check a tag key against the IRCv3 grammar: an optional `+` client-tag
/// prefix, an optional `vendor/` namespace, then one or more letters,
/// digits, or hyphens.
pub fn is_valid_tag_key(key: &str) -> bool {
    let key = key.strip_prefix('+').unwrap_or(key);
    let key = match key.split_once('/') {
        Some((vendor, rest)) => {
            if vendor.is_empty() || !vendor.chars().all(is_vendor_char) {
                return false;
            }
            rest
        }
        None => key,
    };
    !key.is_empty() && key.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
}

fn is_vendor_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '.'
}

/// Escape a tag value for serialization.
///
/// Escapes special characters according to the IRCv3 message-tags spec.
pub fn escape_tag_value(f: &mut dyn Write, value: &str) -> FmtResult {
    for c in value.chars() {
        match c {
            ';' => f.write_str("\\:")?,
            ' ' => f.write_str("\\s")?,
            '\\' => f.write_str("\\\\")?,
            '\r' => f.write_str("\\r")?,
            '\n' => f.write_str("\\n")?,
            c => f.write_char(c)?,
        }
    }
    Ok(())
}

/// Unescape a tag value from wire format.
///
/// Reverses the escaping applied by [`escape_tag_value`]. An unrecognized
/// `\x` escape tolerantly decodes to the literal `x`, per the codec's
/// tolerant-parsing stance.
pub fn unescape_tag_value(value: &str) -> String {
    let mut unescaped = String::with_capacity(value.len());
    let mut iter = value.chars();
    while let Some(c) = iter.next() {
        let r = if c == '\\' {
            match iter.next() {
                Some(':') => ';',
                Some('s') => ' ',
                Some('\\') => '\\',
                Some('r') => '\r',
                Some('n') => '\n',
                Some(c) => c,
                None => break,
            }
        } else {
            c
        };
        unescaped.push(r);
    }
    unescaped
}

/// Parse a tag blob (the part after `@`, before the separating space) into
/// an ordered list of tags.
///
/// Duplicate keys are all preserved, in arrival order. An empty blob
/// yields an empty list.
pub fn parse_tag_blob(blob: &str) -> Result<Vec<Tag>, ValidationError> {
    if blob.is_empty() {
        return Ok(Vec::new());
    }

    blob.split(';')
        .map(|pair| {
            let (key, value) = match pair.split_once('=') {
                Some((k, v)) => (k, unescape_tag_value(v)),
                None => (pair, String::new()),
            };
            if !is_valid_tag_key(key) {
                return Err(ValidationError::InvalidTag);
            }
            Ok(Tag {
                key: key.to_owned(),
                value,
            })
        })
        .collect()
}

/// Render a tag list back to its `k1=v1;k2=v2` wire form (without the
/// leading `@` or trailing space).
pub fn encode_tag_blob(tags: &[Tag]) -> String {
    let mut out = String::new();
    for (i, tag) in tags.iter().enumerate() {
        if i > 0 {
            out.push(';');
        }
        out.push_str(&tag.key);
        if !tag.value.is_empty() {
            out.push('=');
            let _ = escape_tag_value(&mut out, &tag.value);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_round_trips_all_sequences() {
        let value = "a;b c\\d\re\nf";
        let mut escaped = String::new();
        escape_tag_value(&mut escaped, value).unwrap();
        assert_eq!(unescape_tag_value(&escaped), value);
    }

    #[test]
    fn unknown_escape_preserves_literal_char() {
        assert_eq!(unescape_tag_value("a\\xb"), "axb");
    }

    #[test]
    fn empty_value_has_no_equals_sign() {
        let tags = vec![Tag::new("draft/reply", "").unwrap()];
        assert_eq!(encode_tag_blob(&tags), "draft/reply");
    }

    #[test]
    fn parses_duplicate_keys_preserving_order() {
        let tags = parse_tag_blob("a=1;a=2").unwrap();
        assert_eq!(
            tags,
            vec![
                Tag {
                    key: "a".to_string(),
                    value: "1".to_string()
                },
                Tag {
                    key: "a".to_string(),
                    value: "2".to_string()
                },
            ]
        );
    }

    #[test]
    fn key_grammar_accepts_vendor_and_client_prefix() {
        assert!(is_valid_tag_key("time"));
        assert!(is_valid_tag_key("+draft/reply"));
        assert!(is_valid_tag_key("example.com/foo"));
        assert!(!is_valid_tag_key(""));
        assert!(!is_valid_tag_key("has space"));
    }

    #[test]
    fn blob_round_trip() {
        let tags = vec![
            Tag::new("time", "2023-01-01T12:00:00Z").unwrap(),
            Tag::new("msgid", "abc 123").unwrap(),
        ];
        let blob = encode_tag_blob(&tags);
        let parsed = parse_tag_blob(&blob).unwrap();
        assert_eq!(parsed, tags);
    }
}
