// Message — the unit of work flowing through every filter.
//
// Messages are value objects: transforms build a new Message through
// `with_content` and never touch the input. Fields other than `content` and
// `category` are kept verbatim in `extra` so they survive every transform.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{Result, SieveError};

/// A chat message as produced by an upstream source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub content: String,
    /// Label assigned by the producer. Read by category filters, never set here.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Any other producer fields (author, timestamps, ids...).
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Message {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            category: None,
            extra: Map::new(),
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Return a copy of this message with only `content` replaced.
    pub fn with_content(&self, content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            category: self.category.clone(),
            extra: self.extra.clone(),
        }
    }

    /// Parse a message from a JSON object.
    pub fn from_json(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_value(value)
    }

    /// Validate and convert a JSON value into a message.
    ///
    /// Fails fast with `InvalidInput` when `content` is missing or not a
    /// string, instead of letting a string operation blow up later.
    pub fn from_value(value: Value) -> Result<Self> {
        let Value::Object(fields) = &value else {
            return Err(SieveError::InvalidInput(format!(
                "message must be a JSON object, got {}",
                json_kind(&value)
            )));
        };

        match fields.get("content") {
            Some(Value::String(_)) => {}
            Some(other) => {
                return Err(SieveError::InvalidInput(format!(
                    "message content must be a string, got {}",
                    json_kind(other)
                )));
            }
            None => {
                return Err(SieveError::InvalidInput(
                    "message is missing required field `content`".to_string(),
                ));
            }
        }

        match fields.get("category") {
            None | Some(Value::Null) | Some(Value::String(_)) => {}
            Some(other) => {
                return Err(SieveError::InvalidInput(format!(
                    "message category must be a string, got {}",
                    json_kind(other)
                )));
            }
        }

        Ok(serde_json::from_value(value)?)
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
