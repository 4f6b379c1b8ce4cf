//! Conversions between [`JsonNode`] and `serde_json::Value`.

use serde_json::Value;

use crate::error::ConvertError;
use crate::node::{JsonNode, Map};
use crate::number::JsonNumber;

impl From<Value> for JsonNode {
    fn from(v: Value) -> Self {
        match v {
            Value::Null => JsonNode::Null,
            Value::Bool(b) => JsonNode::Boolean(b),
            // serde_json renders finite numbers in grammar-conformant form.
            Value::Number(n) => JsonNode::Number(JsonNumber::from_literal_unchecked(n.to_string())),
            Value::String(s) => JsonNode::String(s),
            Value::Array(arr) => JsonNode::Array(arr.into_iter().map(JsonNode::from).collect()),
            Value::Object(obj) => JsonNode::Object(
                obj.into_iter()
                    .map(|(k, v)| (k, JsonNode::from(v)))
                    .collect::<Map>(),
            ),
        }
    }
}

impl TryFrom<&JsonNode> for Value {
    type Error = ConvertError;

    fn try_from(node: &JsonNode) -> Result<Self, Self::Error> {
        Ok(match node {
            JsonNode::Object(map) => {
                let mut obj = serde_json::Map::with_capacity(map.len());
                for (key, value) in map {
                    obj.insert(key.clone(), Value::try_from(value)?);
                }
                Value::Object(obj)
            }
            JsonNode::Array(items) => Value::Array(
                items
                    .iter()
                    .map(Value::try_from)
                    .collect::<Result<Vec<_>, _>>()?,
            ),
            JsonNode::Number(n) => {
                let number = n
                    .as_str()
                    .parse::<serde_json::Number>()
                    .map_err(|_| ConvertError::Number(n.as_str().to_owned()))?;
                Value::Number(number)
            }
            JsonNode::String(s) => Value::String(s.clone()),
            JsonNode::Boolean(b) => Value::Bool(*b),
            JsonNode::Null => Value::Null,
            JsonNode::Absent => return Err(ConvertError::Absent),
        })
    }
}

impl TryFrom<JsonNode> for Value {
    type Error = ConvertError;

    fn try_from(node: JsonNode) -> Result<Self, Self::Error> {
        Value::try_from(&node)
    }
}
