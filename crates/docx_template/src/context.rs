//! Substitution context
//!
//! A context maps tag names to values. Scalar values substitute
//! directly; list values drive loop tags, each element being a context
//! of its own.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A value a tag can resolve to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TagValue {
    /// Text inserted verbatim (the pipeline pre-formats currency and
    /// dates before they get here)
    Text(String),
    /// Numeric value; integer-like numbers print without a decimal point
    Number(f64),
    /// Ordered sequence of element contexts for a loop tag
    List(Vec<TagContext>),
}

impl TagValue {
    pub fn text(value: impl Into<String>) -> Self {
        TagValue::Text(value.into())
    }

    pub fn number(value: f64) -> Self {
        TagValue::Number(value)
    }

    pub fn list(elements: Vec<TagContext>) -> Self {
        TagValue::List(elements)
    }

    pub fn is_list(&self) -> bool {
        matches!(self, TagValue::List(_))
    }

    /// String form substituted into the document for scalar tags
    pub fn to_display_string(&self) -> String {
        match self {
            TagValue::Text(s) => s.clone(),
            TagValue::Number(n) => {
                if n.fract() == 0.0 && n.abs() < 1e15 {
                    format!("{}", *n as i64)
                } else {
                    format!("{}", n)
                }
            }
            TagValue::List(_) => String::new(),
        }
    }
}

impl From<&str> for TagValue {
    fn from(value: &str) -> Self {
        TagValue::Text(value.to_string())
    }
}

impl From<String> for TagValue {
    fn from(value: String) -> Self {
        TagValue::Text(value)
    }
}

impl From<f64> for TagValue {
    fn from(value: f64) -> Self {
        TagValue::Number(value)
    }
}

/// A keyed set of tag values; one ambient context per render, one
/// element context per loop iteration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TagContext {
    values: BTreeMap<String, TagValue>,
}

impl TagContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a tag value, replacing any previous one
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<TagValue>) {
        self.values.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&TagValue> {
        self.values.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Tag names declared by this context, sorted
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }
}
