use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::{GenError, Result};

/// A block with optional properties, serialized as `{"Name", "Properties"}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BlockState {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Properties", skip_serializing_if = "Map::is_empty")]
    pub properties: Map<String, Value>,
}

impl BlockState {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            properties: Map::new(),
        }
    }

    /// Parses the `name[key=value,...]` shorthand.
    pub fn parse(value: &str) -> Result<Self> {
        let Some((name, rest)) = value.split_once('[') else {
            return Ok(Self::new(value));
        };
        let body = rest
            .strip_suffix(']')
            .ok_or_else(|| GenError::MalformedBlockState(value.to_string()))?;

        let mut properties = Map::new();
        for pair in body.split(',').filter(|p| !p.is_empty()) {
            let (key, val) = pair
                .split_once('=')
                .ok_or_else(|| GenError::MalformedBlockState(value.to_string()))?;
            properties.insert(key.to_string(), Value::String(val.to_string()));
        }
        Ok(Self {
            name: name.to_string(),
            properties,
        })
    }
}
