//! Custom string-keyed properties attached to objects, materials and scenes.
//!
//! Lookups are best effort: a missing property and a property of an
//! unexpected type both read as absent.

use serde::Deserialize;
use std::collections::BTreeMap;

/// A single property value as found in a scene description
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum PropertyValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    List(Vec<String>),
    /// Anything else; never read back
    Other(serde_json::Value),
}

impl From<&str> for PropertyValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<bool> for PropertyValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<Vec<&str>> for PropertyValue {
    fn from(value: Vec<&str>) -> Self {
        Self::List(value.into_iter().map(String::from).collect())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct Properties(BTreeMap<String, PropertyValue>);

impl Properties {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: &str, value: impl Into<PropertyValue>) {
        self.0.insert(name.to_string(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&PropertyValue> {
        self.0.get(name)
    }

    /// Non-blank text value of a property
    pub fn text(&self, name: &str) -> Option<&str> {
        match self.get(name)? {
            PropertyValue::Text(text) if !text.trim().is_empty() => Some(text),
            _ => None,
        }
    }

    /// Free-form tokens of a property, in order.
    ///
    /// A text value yields one token, a list yields each of its non-blank
    /// items.
    pub fn tokens(&self, name: &str) -> Vec<&str> {
        match self.get(name) {
            Some(PropertyValue::Text(text)) if !text.trim().is_empty() => vec![text.as_str()],
            Some(PropertyValue::List(items)) => items
                .iter()
                .filter(|item| !item.trim().is_empty())
                .map(String::as_str)
                .collect(),
            _ => Vec::new(),
        }
    }

    /// Boolean reading of a property.
    ///
    /// Text is false when blank, `0` or `false` (any case), true otherwise.
    pub fn flag(&self, name: &str) -> Option<bool> {
        match self.get(name)? {
            PropertyValue::Bool(value) => Some(*value),
            PropertyValue::Int(value) => Some(*value != 0),
            PropertyValue::Float(value) => Some(*value != 0.0),
            PropertyValue::Text(text) => {
                let text = text.trim().to_lowercase();
                Some(!(text.is_empty() || text == "0" || text == "false"))
            }
            PropertyValue::List(_) | PropertyValue::Other(_) => None,
        }
    }
}
