//! Response shaping
//!
//! Trims a serialized response model down to the fields a route declares.
//! Shaping only ever removes keys.

use std::collections::BTreeSet;

use serde::Serialize;
use serde_json::{Map, Value};

/// Which fields of a response model reach the client
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResponseShape {
    include: Option<BTreeSet<String>>,
    exclude: BTreeSet<String>,
    exclude_unset: bool,
}

impl ResponseShape {
    /// Every field of the model
    pub fn full() -> Self {
        Self::default()
    }

    /// Keep only the listed fields
    pub fn include(mut self, fields: &[&str]) -> Self {
        self.include = Some(fields.iter().map(|f| f.to_string()).collect());
        self
    }

    /// Drop the listed fields
    pub fn exclude(mut self, fields: &[&str]) -> Self {
        self.exclude.extend(fields.iter().map(|f| f.to_string()));
        self
    }

    /// Drop fields the source record never set
    pub fn exclude_unset(mut self) -> Self {
        self.exclude_unset = true;
        self
    }

    /// Serialize `model` and trim it.
    ///
    /// `provided` is the raw record the model was built from; it decides
    /// which fields count as set. Without it every field counts as set.
    pub fn apply<T: Serialize>(
        &self,
        model: &T,
        provided: Option<&Map<String, Value>>,
    ) -> Result<Value, serde_json::Error> {
        let mut value = serde_json::to_value(model)?;

        if let Value::Object(fields) = &mut value {
            fields.retain(|key, _| self.keeps(key, provided));
        }

        Ok(value)
    }

    fn keeps(&self, key: &str, provided: Option<&Map<String, Value>>) -> bool {
        if let Some(include) = &self.include {
            if !include.contains(key) {
                return false;
            }
        }
        if self.exclude.contains(key) {
            return false;
        }
        if self.exclude_unset {
            if let Some(provided) = provided {
                return provided.contains_key(key);
            }
        }
        true
    }
}
