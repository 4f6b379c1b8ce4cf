//! A single JSON value type with a recursive-descent parser and a
//! round-tripping serializer.
//!
//! [`JsonNode`] holds an object, array, number, string, boolean or null.
//! Failed lookups return [`JsonNode::Absent`] instead of an error, so access
//! chains read naturally. Numbers keep their literal text, so nothing is lost
//! to floating-point rounding.
//!
//! # Example
//!
//! ```
//! use json_node::{parse, serialize, JsonNode, NodeType};
//!
//! let mut root = parse(r#"{"name": "widget", "sizes": [1, 2.5]}"#).unwrap();
//! assert_eq!(root.get("name").as_str(), Some("widget"));
//! assert_eq!(root.get("sizes").get(1).as_str(), Some("2.5"));
//! assert_eq!(root.get("missing").node_type(), NodeType::Absent);
//!
//! root.get_mut("sizes").unwrap().append(JsonNode::wrap_number(3));
//! root.set("ok", JsonNode::wrap_boolean(true));
//! assert_eq!(
//!     serialize(&root).unwrap(),
//!     r#"{"name":"widget", "sizes":[1, 2.5, 3], "ok":true}"#
//! );
//! ```

mod convert;
mod cursor;
mod error;
mod node;
mod number;
mod options;
mod parser;
mod serializer;

pub use error::{ConvertError, NumericConversionError, ParseError, SerializeError};
pub use node::{JsonNode, Map, NodeIndex, NodeType};
pub use number::{is_number_literal, IntoJsonNumber, JsonNumber};
pub use options::{ParseMode, ParseOptions};
pub use parser::{parse, parse_with_options, Parser};
pub use serializer::{escape, serialize, serialize_into};
