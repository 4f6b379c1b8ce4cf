//! JSON text writer.
//!
//! Output layout: members and elements are joined with `", "`, keys are
//! followed by a bare `:`, and empty containers render as `{}` / `[]`.
//! Object keys and string values share one escape table.

use std::fmt::{self, Write};

use crate::error::SerializeError;
use crate::node::JsonNode;

/// Render `node` as JSON text.
///
/// Fails if `node` is, or contains, [`JsonNode::Absent`].
///
/// # Example
///
/// ```
/// use json_node::{serialize, JsonNode};
///
/// let mut root = JsonNode::new_object();
/// root.set("a", JsonNode::from(vec![1.into(), true.into(), JsonNode::new_null()]));
/// root.set("b", "x".into());
/// assert_eq!(serialize(&root).unwrap(), r#"{"a":[1, true, null], "b":"x"}"#);
/// ```
pub fn serialize(node: &JsonNode) -> Result<String, SerializeError> {
    let mut out = String::new();
    serialize_into(node, &mut out)?;
    Ok(out)
}

/// Append the JSON text of `node` to `out`.
///
/// On error `out` may hold a partial rendering.
pub fn serialize_into(node: &JsonNode, out: &mut String) -> Result<(), SerializeError> {
    // Writing into a String is infallible; the only error source is Absent.
    write_node(node, out).map_err(|_| SerializeError::Absent)
}

fn write_node<W: Write>(node: &JsonNode, out: &mut W) -> fmt::Result {
    match node {
        JsonNode::Object(map) => {
            if map.is_empty() {
                return out.write_str("{}");
            }
            out.write_char('{')?;
            for (i, (key, value)) in map.iter().enumerate() {
                if i > 0 {
                    out.write_str(", ")?;
                }
                write_str(key, out)?;
                out.write_char(':')?;
                write_node(value, out)?;
            }
            out.write_char('}')
        }
        JsonNode::Array(items) => {
            if items.is_empty() {
                return out.write_str("[]");
            }
            out.write_char('[')?;
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.write_str(", ")?;
                }
                write_node(item, out)?;
            }
            out.write_char(']')
        }
        JsonNode::Number(n) => out.write_str(n.as_str()),
        JsonNode::String(s) => write_str(s, out),
        JsonNode::Boolean(true) => out.write_str("true"),
        JsonNode::Boolean(false) => out.write_str("false"),
        JsonNode::Null => out.write_str("null"),
        JsonNode::Absent => Err(fmt::Error),
    }
}

/// Write `s` as a quoted string literal.
///
/// Characters outside the escape table, including other control characters
/// and non-ASCII text, are written raw.
fn write_str<W: Write>(s: &str, out: &mut W) -> fmt::Result {
    out.write_char('"')?;
    let mut last = 0;
    for (i, ch) in s.char_indices() {
        let escaped = match ch {
            '"' => "\\\"",
            '\\' => "\\\\",
            '/' => "\\/",
            '\0' => "\\0",
            '\u{0008}' => "\\b",
            '\t' => "\\t",
            '\n' => "\\n",
            '\u{000C}' => "\\f",
            '\r' => "\\r",
            _ => continue,
        };
        out.write_str(&s[last..i])?;
        out.write_str(escaped)?;
        last = i + ch.len_utf8();
    }
    out.write_str(&s[last..])?;
    out.write_char('"')
}

/// Escape `s` for use inside a JSON string literal, without the quotes.
pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    // String never fails as a fmt::Write target.
    write_str(s, &mut out).ok();
    out[1..out.len() - 1].to_owned()
}

/// Renders the JSON text. Formatting [`JsonNode::Absent`], or a tree that
/// contains it, returns [`fmt::Error`].
impl fmt::Display for JsonNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_node(self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;

    #[test]
    fn test_escape_table() {
        assert_eq!(
            serialize(&JsonNode::wrap_string("a\"b\\c/d\n")).unwrap(),
            "\"a\\\"b\\\\c\\/d\\n\""
        );
        assert_eq!(
            serialize(&JsonNode::wrap_string("\0\u{8}\t\u{c}\r")).unwrap(),
            r#""\0\b\t\f\r""#
        );
        // Outside the table: written raw.
        assert_eq!(
            serialize(&JsonNode::wrap_string("\u{1}é😀")).unwrap(),
            "\"\u{1}é😀\""
        );
    }

    #[test]
    fn test_escape_helper() {
        assert_eq!(escape("plain"), "plain");
        assert_eq!(escape("a/b"), "a\\/b");
        assert_eq!(escape(""), "");
    }

    #[test]
    fn test_keys_are_escaped() {
        let mut obj = JsonNode::new_object();
        obj.set("q\"k", JsonNode::Null);
        assert_eq!(serialize(&obj).unwrap(), r#"{"q\"k":null}"#);
    }

    #[test]
    fn test_layout() {
        assert_eq!(serialize(&JsonNode::new_object()).unwrap(), "{}");
        assert_eq!(serialize(&JsonNode::new_array()).unwrap(), "[]");
        let root = parse(r#"{ "a" : [ 1 , 2 ] , "b" : { } }"#).unwrap();
        assert_eq!(serialize(&root).unwrap(), r#"{"a":[1, 2], "b":{}}"#);
    }

    #[test]
    fn test_absent_fails() {
        assert_eq!(serialize(&JsonNode::Absent), Err(SerializeError::Absent));
        let mut arr = JsonNode::new_array();
        arr.as_array_mut().unwrap().push(JsonNode::Absent);
        assert_eq!(serialize(&arr), Err(SerializeError::Absent));
        assert!(fmt::write(&mut String::new(), format_args!("{}", JsonNode::Absent)).is_err());
    }

    #[test]
    fn test_display_matches_serialize() {
        let root = parse(r#"{"n": -1.5e3, "s": "x/y"}"#).unwrap();
        assert_eq!(root.to_string(), serialize(&root).unwrap());
        assert_eq!(root.to_string(), r#"{"n":-1.5e3, "s":"x\/y"}"#);
    }

    #[test]
    fn test_serialize_into_appends() {
        let mut out = String::from("value=");
        serialize_into(&JsonNode::wrap_boolean(false), &mut out).unwrap();
        assert_eq!(out, "value=false");
    }
}
