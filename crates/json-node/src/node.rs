//! The single value type used for every JSON value.
//!
//! Lookups never fail. A miss, or a lookup on the wrong variant, returns
//! [`JsonNode::Absent`], so call sites can chain accesses without
//! intermediate checks:
//!
//! ```
//! use json_node::{parse, NodeType};
//!
//! let root = parse(r#"{"a": ["x", "y"]}"#).unwrap();
//! assert_eq!(root.get("a").get(1).as_str(), Some("y"));
//! assert_eq!(root.get("b").get(0).node_type(), NodeType::Absent);
//! ```
//!
//! Containers own their children by value, so a tree can never contain
//! itself.

use std::fmt;
use std::ops;

use indexmap::IndexMap;

use crate::error::NumericConversionError;
use crate::number::{IntoJsonNumber, JsonNumber};

/// Object payload. Iteration follows insertion order.
pub type Map = IndexMap<String, JsonNode>;

static ABSENT: JsonNode = JsonNode::Absent;

/// Tag of the active [`JsonNode`] variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeType {
    Object,
    Array,
    Number,
    String,
    Boolean,
    Null,
    /// Result of a failed lookup. Not a JSON value.
    Absent,
}

impl fmt::Display for NodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            NodeType::Object => "object",
            NodeType::Array => "array",
            NodeType::Number => "number",
            NodeType::String => "string",
            NodeType::Boolean => "boolean",
            NodeType::Null => "null",
            NodeType::Absent => "absent",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum JsonNode {
    Object(Map),
    Array(Vec<JsonNode>),
    /// Literal text of the number, exactly as read or canonically rendered.
    Number(JsonNumber),
    /// Decoded string; escaping happens on serialization.
    String(String),
    Boolean(bool),
    #[default]
    Null,
    /// Returned by lookups that miss. The mutators and `From` conversions
    /// refuse to store it; a tree that holds one through `get_mut` or the
    /// `_mut` payload accessors fails to serialize.
    Absent,
}

impl JsonNode {
    pub fn new_object() -> Self {
        JsonNode::Object(Map::new())
    }

    pub fn new_array() -> Self {
        JsonNode::Array(Vec::new())
    }

    pub fn new_null() -> Self {
        JsonNode::Null
    }

    pub fn wrap_string(s: impl Into<String>) -> Self {
        JsonNode::String(s.into())
    }

    /// Wrap a number in its canonical textual form.
    ///
    /// Non-finite floats have no JSON spelling and become `Null`.
    ///
    /// ```
    /// use json_node::JsonNode;
    ///
    /// assert_eq!(JsonNode::wrap_number(42).to_string(), "42");
    /// assert_eq!(JsonNode::wrap_number(0.25).to_string(), "0.25");
    /// assert!(JsonNode::wrap_number(f64::NAN).is_null());
    /// ```
    pub fn wrap_number(n: impl IntoJsonNumber) -> Self {
        n.into_json_number().map_or(JsonNode::Null, JsonNode::Number)
    }

    pub fn wrap_boolean(b: bool) -> Self {
        JsonNode::Boolean(b)
    }

    pub fn node_type(&self) -> NodeType {
        match self {
            JsonNode::Object(_) => NodeType::Object,
            JsonNode::Array(_) => NodeType::Array,
            JsonNode::Number(_) => NodeType::Number,
            JsonNode::String(_) => NodeType::String,
            JsonNode::Boolean(_) => NodeType::Boolean,
            JsonNode::Null => NodeType::Null,
            JsonNode::Absent => NodeType::Absent,
        }
    }

    /// Look up an object key or an array index.
    ///
    /// Returns [`JsonNode::Absent`] when the key is unknown, the index is
    /// negative or past the end, or `self` is not a container of the right
    /// kind.
    pub fn get<I: NodeIndex>(&self, index: I) -> &JsonNode {
        index.index_into(self).unwrap_or(&ABSENT)
    }

    pub fn get_mut<I: NodeIndex>(&mut self, index: I) -> Option<&mut JsonNode> {
        index.index_into_mut(self)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        matches!(self, JsonNode::Object(map) if map.contains_key(key))
    }

    /// Set `key` on an object, replacing any previous value.
    ///
    /// No-op on other variants, and when `value` is `Absent`.
    pub fn set(&mut self, key: impl Into<String>, value: JsonNode) -> &mut Self {
        if let (JsonNode::Object(map), false) = (&mut *self, value.is_absent()) {
            map.insert(key.into(), value);
        }
        self
    }

    /// Remove `key` from an object, keeping the order of the remaining keys.
    pub fn remove(&mut self, key: &str) -> Option<JsonNode> {
        match self {
            JsonNode::Object(map) => map.shift_remove(key),
            _ => None,
        }
    }

    /// Insert into an array at `index`, shifting later elements right.
    ///
    /// An index past the end appends. No-op on other variants, and when
    /// `value` is `Absent`.
    pub fn insert(&mut self, index: usize, value: JsonNode) -> &mut Self {
        if let (JsonNode::Array(arr), false) = (&mut *self, value.is_absent()) {
            let index = index.min(arr.len());
            arr.insert(index, value);
        }
        self
    }

    /// Push onto an array. No-op on other variants, and when `value` is
    /// `Absent`.
    pub fn append(&mut self, value: JsonNode) -> &mut Self {
        if let (JsonNode::Array(arr), false) = (&mut *self, value.is_absent()) {
            arr.push(value);
        }
        self
    }

    /// Number of children of an object or array; zero for anything else.
    pub fn len(&self) -> usize {
        match self {
            JsonNode::Object(map) => map.len(),
            JsonNode::Array(arr) => arr.len(),
            _ => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, JsonNode::Absent)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, JsonNode::Null)
    }

    pub fn as_object(&self) -> Option<&Map> {
        match self {
            JsonNode::Object(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_object_mut(&mut self) -> Option<&mut Map> {
        match self {
            JsonNode::Object(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&Vec<JsonNode>> {
        match self {
            JsonNode::Array(arr) => Some(arr),
            _ => None,
        }
    }

    pub fn as_array_mut(&mut self) -> Option<&mut Vec<JsonNode>> {
        match self {
            JsonNode::Array(arr) => Some(arr),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<&JsonNumber> {
        match self {
            JsonNode::Number(n) => Some(n),
            _ => None,
        }
    }

    /// The decoded text of a String, or the literal text of a Number.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            JsonNode::String(s) => Some(s),
            JsonNode::Number(n) => Some(n.as_str()),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            JsonNode::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Integer value of a Number.
    ///
    /// `Ok(None)` when `self` is not a Number; an error when the literal has
    /// a fraction or exponent, or does not fit in `i64`.
    ///
    /// ```
    /// use json_node::{parse, NumericConversionError};
    ///
    /// assert_eq!(parse("[12]").unwrap().get(0).as_integer(), Ok(Some(12)));
    /// assert_eq!(parse(r#""12""#).unwrap().as_integer(), Ok(None));
    /// assert!(matches!(
    ///     parse("1.5").unwrap().as_integer(),
    ///     Err(NumericConversionError::NotAnInteger(_))
    /// ));
    /// ```
    pub fn as_integer(&self) -> Result<Option<i64>, NumericConversionError> {
        match self {
            JsonNode::Number(n) => n.as_i64().map(Some),
            _ => Ok(None),
        }
    }
}

mod private {
    pub trait Sealed {}
    impl Sealed for str {}
    impl Sealed for String {}
    impl Sealed for usize {}
    impl Sealed for i32 {}
    impl Sealed for i64 {}
    impl<T: ?Sized + Sealed> Sealed for &T {}
}

/// Types usable as a lookup key: strings for objects, integers for arrays.
pub trait NodeIndex: private::Sealed {
    #[doc(hidden)]
    fn index_into<'v>(&self, node: &'v JsonNode) -> Option<&'v JsonNode>;
    #[doc(hidden)]
    fn index_into_mut<'v>(&self, node: &'v mut JsonNode) -> Option<&'v mut JsonNode>;
}

impl NodeIndex for str {
    fn index_into<'v>(&self, node: &'v JsonNode) -> Option<&'v JsonNode> {
        node.as_object()?.get(self)
    }

    fn index_into_mut<'v>(&self, node: &'v mut JsonNode) -> Option<&'v mut JsonNode> {
        node.as_object_mut()?.get_mut(self)
    }
}

impl NodeIndex for String {
    fn index_into<'v>(&self, node: &'v JsonNode) -> Option<&'v JsonNode> {
        self.as_str().index_into(node)
    }

    fn index_into_mut<'v>(&self, node: &'v mut JsonNode) -> Option<&'v mut JsonNode> {
        self.as_str().index_into_mut(node)
    }
}

impl NodeIndex for usize {
    fn index_into<'v>(&self, node: &'v JsonNode) -> Option<&'v JsonNode> {
        node.as_array()?.get(*self)
    }

    fn index_into_mut<'v>(&self, node: &'v mut JsonNode) -> Option<&'v mut JsonNode> {
        node.as_array_mut()?.get_mut(*self)
    }
}

macro_rules! impl_signed_index {
    ($($ty:ty),*) => {
        $(
            impl NodeIndex for $ty {
                fn index_into<'v>(&self, node: &'v JsonNode) -> Option<&'v JsonNode> {
                    usize::try_from(*self).ok()?.index_into(node)
                }

                fn index_into_mut<'v>(&self, node: &'v mut JsonNode) -> Option<&'v mut JsonNode> {
                    usize::try_from(*self).ok()?.index_into_mut(node)
                }
            }
        )*
    };
}

impl_signed_index!(i32, i64);

impl<T: ?Sized + NodeIndex> NodeIndex for &T {
    fn index_into<'v>(&self, node: &'v JsonNode) -> Option<&'v JsonNode> {
        (**self).index_into(node)
    }

    fn index_into_mut<'v>(&self, node: &'v mut JsonNode) -> Option<&'v mut JsonNode> {
        (**self).index_into_mut(node)
    }
}

impl<I: NodeIndex> ops::Index<I> for JsonNode {
    type Output = JsonNode;

    fn index(&self, index: I) -> &JsonNode {
        self.get(index)
    }
}

impl From<&str> for JsonNode {
    fn from(s: &str) -> Self {
        JsonNode::String(s.to_owned())
    }
}

impl From<String> for JsonNode {
    fn from(s: String) -> Self {
        JsonNode::String(s)
    }
}

impl From<bool> for JsonNode {
    fn from(b: bool) -> Self {
        JsonNode::Boolean(b)
    }
}

impl From<JsonNumber> for JsonNode {
    fn from(n: JsonNumber) -> Self {
        JsonNode::Number(n)
    }
}

macro_rules! impl_from_int {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for JsonNode {
                fn from(value: $ty) -> Self {
                    JsonNode::Number(JsonNumber::from(value))
                }
            }
        )*
    };
}

impl_from_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl From<f64> for JsonNode {
    fn from(value: f64) -> Self {
        JsonNumber::from_f64(value).map_or(JsonNode::Null, JsonNode::Number)
    }
}

impl From<f32> for JsonNode {
    fn from(value: f32) -> Self {
        JsonNumber::from_f32(value).map_or(JsonNode::Null, JsonNode::Number)
    }
}

impl From<Vec<JsonNode>> for JsonNode {
    fn from(mut items: Vec<JsonNode>) -> Self {
        items.retain(|item| !item.is_absent());
        JsonNode::Array(items)
    }
}

impl From<Map> for JsonNode {
    fn from(mut map: Map) -> Self {
        map.retain(|_, value| !value.is_absent());
        JsonNode::Object(map)
    }
}

impl FromIterator<JsonNode> for JsonNode {
    fn from_iter<T: IntoIterator<Item = JsonNode>>(iter: T) -> Self {
        let mut node = JsonNode::new_array();
        for item in iter {
            node.append(item);
        }
        node
    }
}

impl<K: Into<String>> FromIterator<(K, JsonNode)> for JsonNode {
    fn from_iter<T: IntoIterator<Item = (K, JsonNode)>>(iter: T) -> Self {
        let mut node = JsonNode::new_object();
        for (key, value) in iter {
            node.set(key, value);
        }
        node
    }
}
