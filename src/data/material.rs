//! Materials referenced by curve objects.

use crate::constants::{ONLY_PROPERTIES_PROPERTY, STYLE_PROPERTY};
use crate::data::properties::{Properties, PropertyValue};
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Material {
    pub name: String,
    /// RGB components in 0..1
    #[serde(default = "default_color")]
    pub color: [f64; 3],
    #[serde(default = "default_alpha")]
    pub alpha: f64,
    #[serde(default)]
    pub properties: Properties,
}

fn default_color() -> [f64; 3] {
    [1.0, 1.0, 1.0]
}

fn default_alpha() -> f64 {
    1.0
}

impl Material {
    pub fn new(name: &str, color: [f64; 3]) -> Self {
        Self {
            name: name.to_string(),
            color,
            alpha: default_alpha(),
            properties: Properties::new(),
        }
    }

    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    pub fn with_property(mut self, name: &str, value: impl Into<PropertyValue>) -> Self {
        self.properties.insert(name, value);
        self
    }

    /// Free-form TikZ options stored in the material's `style` property
    pub fn style_override(&self) -> Option<&str> {
        self.properties.text(STYLE_PROPERTY)
    }

    /// Per-material override of the global only-properties setting
    pub fn only_properties(&self) -> Option<bool> {
        self.properties.flag(ONLY_PROPERTIES_PROPERTY)
    }
}
