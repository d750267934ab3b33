//! Optimizer responses
//!
//! The optimizer answers every mode with the same loosely-shaped object.
//! `OptimizationResponse` decodes it as-is; `into_result` classifies it into
//! either a renderable `OptimizationResult` or an error.

use std::borrow::Cow;

use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

use crate::error::{FrontendError, Result};

/// String-keyed map that keeps the key order of the JSON object it was
/// decoded from.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderedMap<V> {
    entries: Vec<(String, V)>,
}

impl<V> Default for OrderedMap<V> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<V> OrderedMap<V> {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&V> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    /// Entries in decode order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Insert or replace; a replaced key keeps its original position.
    pub fn insert(&mut self, key: String, value: V) {
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }
}

impl<V> FromIterator<(String, V)> for OrderedMap<V> {
    fn from_iter<I: IntoIterator<Item = (String, V)>>(iter: I) -> Self {
        let mut map = OrderedMap::default();
        for (key, value) in iter {
            map.insert(key, value);
        }
        map
    }
}

impl<'de, V: DeserializeOwned> Deserialize<'de> for OrderedMap<V> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        // serde_json's `preserve_order` keeps key order and collapses duplicate keys
        let entries: Vec<(String, V)> = Map::<String, Value>::deserialize(deserializer)?
            .into_iter()
            .map(|(key, value)| serde_json::from_value(value).map(|value| (key, value)))
            .collect::<std::result::Result<_, _>>()
            .map_err(D::Error::custom)?;
        Ok(Self { entries })
    }
}

/// What the optimizer decided for one ticker
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Allocation {
    /// Number of shares; negative for short positions
    Shares(f64),
    /// Free-form text such as "buy 12 shares of MSFT"
    Description(String),
}

impl Allocation {
    /// Text for the allocation list
    pub fn describe(&self, ticker: &str) -> Cow<'_, str> {
        match self {
            Allocation::Description(text) => Cow::Borrowed(text),
            Allocation::Shares(shares) => Cow::Owned(format!("{ticker}: {shares} shares")),
        }
    }
}

/// Raw optimizer response, as decoded from JSON
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OptimizationResponse {
    pub allocations: Option<OrderedMap<Allocation>>,
    pub leftover: Option<f64>,
    pub weights: Option<OrderedMap<f64>>,
    pub performance: Option<OrderedMap<Option<f64>>>,
    pub errors: Option<OrderedMap<String>>,
    pub message: Option<String>,
}

/// A response that can be rendered
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OptimizationResult {
    pub allocations: OrderedMap<Allocation>,
    /// `None` only when the optimizer sent no allocations at all
    pub leftover: Option<f64>,
    pub weights: Option<OrderedMap<f64>>,
    pub performance: Option<OrderedMap<Option<f64>>>,
    pub errors: Option<OrderedMap<String>>,
}

impl OptimizationResponse {
    /// Classify the response.
    ///
    /// A top-level `message` becomes an application error. `allocations` and
    /// `leftover` must arrive together.
    pub fn into_result(self) -> Result<OptimizationResult> {
        if let Some(message) = self.message {
            return Err(FrontendError::Application(message));
        }

        let (allocations, leftover) = match (self.allocations, self.leftover) {
            (Some(allocations), Some(leftover)) => (allocations, Some(leftover)),
            (None, None) => (OrderedMap::default(), None),
            (Some(_), None) => {
                return Err(FrontendError::MalformedResponse(
                    "allocations present without leftover".into(),
                ));
            }
            (None, Some(_)) => {
                return Err(FrontendError::MalformedResponse(
                    "leftover present without allocations".into(),
                ));
            }
        };

        Ok(OptimizationResult {
            allocations,
            leftover,
            weights: self.weights,
            performance: self.performance,
            errors: self.errors,
        })
    }
}
