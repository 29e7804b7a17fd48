// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Weighted key descriptors.
//!
//! A key names a field path inside structured records. Users hand us either a
//! bare path (`"author.name"` or `["author", "name"]`) or an object with a
//! `name` and an optional `weight`. The store turns those into [`Key`]s whose
//! weights sum to 1, and whose order defines the field indices used by the index.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::contracts::check_weights_normalized;
use crate::error::{FuseError, Result};

/// A field path as the user wrote it: dotted string or explicit segments.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum KeyName {
    Dotted(String),
    Segments(Vec<String>),
}

impl KeyName {
    /// Path segments. A dotted string is split on `.`.
    pub fn path(&self) -> Vec<String> {
        match self {
            KeyName::Dotted(name) => name.split('.').map(str::to_string).collect(),
            KeyName::Segments(segments) => segments.clone(),
        }
    }

    /// Stable lookup handle: segments joined by `.`.
    pub fn id(&self) -> String {
        match self {
            KeyName::Dotted(name) => name.clone(),
            KeyName::Segments(segments) => segments.join("."),
        }
    }
}

impl fmt::Display for KeyName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.id())
    }
}

impl From<&str> for KeyName {
    fn from(name: &str) -> Self {
        KeyName::Dotted(name.to_string())
    }
}

impl From<String> for KeyName {
    fn from(name: String) -> Self {
        KeyName::Dotted(name)
    }
}

impl From<Vec<&str>> for KeyName {
    fn from(segments: Vec<&str>) -> Self {
        KeyName::Segments(segments.into_iter().map(str::to_string).collect())
    }
}

/// Object form of a key spec. `name` is optional here so that a missing name
/// surfaces as [`FuseError::MissingKeyProperty`] rather than a parse failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightedKey {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<KeyName>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
}

/// One user-supplied key specification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum KeySpec {
    Name(KeyName),
    Weighted(WeightedKey),
}

impl KeySpec {
    /// `{ name, weight }` shorthand.
    pub fn weighted(name: impl Into<KeyName>, weight: f64) -> Self {
        KeySpec::Weighted(WeightedKey {
            name: Some(name.into()),
            weight: Some(weight),
        })
    }
}

impl From<&str> for KeySpec {
    fn from(name: &str) -> Self {
        KeySpec::Name(name.into())
    }
}

impl From<String> for KeySpec {
    fn from(name: String) -> Self {
        KeySpec::Name(name.into())
    }
}

impl From<KeyName> for KeySpec {
    fn from(name: KeyName) -> Self {
        KeySpec::Name(name)
    }
}

impl From<(&str, f64)> for KeySpec {
    fn from((name, weight): (&str, f64)) -> Self {
        KeySpec::weighted(name, weight)
    }
}

/// A normalized key descriptor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Key {
    pub path: Vec<String>,
    pub id: String,
    pub weight: f64,
    /// The name as originally written, reported back in match output.
    pub src: KeyName,
}

impl Key {
    /// Build a descriptor with its raw (unnormalized) weight.
    pub fn from_spec(spec: &KeySpec) -> Result<Self> {
        match spec {
            KeySpec::Name(name) => Ok(Key {
                path: name.path(),
                id: name.id(),
                weight: 1.0,
                src: name.clone(),
            }),
            KeySpec::Weighted(WeightedKey { name, weight }) => {
                let name = name.as_ref().ok_or(FuseError::MissingKeyProperty("name"))?;
                let weight = weight.unwrap_or(1.0);
                if weight.is_nan() || weight <= 0.0 || weight.is_infinite() {
                    return Err(FuseError::InvalidKeyWeight(name.id()));
                }
                Ok(Key {
                    path: name.path(),
                    id: name.id(),
                    weight,
                    src: name.clone(),
                })
            }
        }
    }
}

/// Ordered, weight-normalized set of keys.
#[derive(Debug, Clone, Default)]
pub struct KeyStore {
    keys: Vec<Key>,
    key_map: HashMap<String, usize>,
}

impl KeyStore {
    pub fn new(specs: &[KeySpec]) -> Result<Self> {
        let mut keys = Vec::with_capacity(specs.len());
        let mut key_map = HashMap::with_capacity(specs.len());
        let mut total_weight = 0.0;

        for spec in specs {
            let key = Key::from_spec(spec)?;
            total_weight += key.weight;
            key_map.insert(key.id.clone(), keys.len());
            keys.push(key);
        }

        for key in &mut keys {
            key.weight /= total_weight;
        }

        check_weights_normalized(&keys);
        Ok(Self { keys, key_map })
    }

    /// Look up a key by its id.
    pub fn get(&self, key_id: &str) -> Option<&Key> {
        self.key_map.get(key_id).map(|&slot| &self.keys[slot])
    }

    /// Keys in declaration order. Position = field index.
    pub fn keys(&self) -> &[Key] {
        &self.keys
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.keys)?)
    }
}
