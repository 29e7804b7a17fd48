// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Logical queries: `$and` / `$or` trees over keyed patterns.
//!
//! ```json
//! { "$and": [{ "title": "report" }, { "$or": [{ "tags": "finance" }, { "$path": ["author", "name"], "$val": "ada" }] }] }
//! ```
//!
//! A flat object with several keys is shorthand for `$and` of its entries.
//! Every leaf is compiled once into a [`Searcher`]. Evaluation is depth-first
//! and short-circuits: `$and` stops at the first child with no matches, `$or`
//! stops at the first child with any.

use std::sync::Arc;

use serde_json::{Map, Value};

use crate::error::{FuseError, Result};
use crate::index::{FuseIndex, IndexRecord};
use crate::keys::KeyName;
use crate::options::FuseOptions;
use crate::search::{create_searcher, find_matches, Searcher, SearcherFactory};
use crate::types::FieldMatch;

pub const AND: &str = "$and";
pub const OR: &str = "$or";
pub const PATH: &str = "$path";
pub const VAL: &str = "$val";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    And,
    Or,
}

/// A leaf bound to its compiled searcher.
#[derive(Debug)]
pub struct LeafQuery {
    pub key_id: String,
    pub pattern: String,
    pub searcher: Box<dyn Searcher>,
}

#[derive(Debug)]
pub enum Expression {
    Leaf(LeafQuery),
    Node {
        operator: Operator,
        children: Vec<Expression>,
    },
}

impl Expression {
    /// Compile a JSON query tree.
    pub fn parse(
        query: &Value,
        options: &FuseOptions,
        factories: &[Arc<dyn SearcherFactory>],
    ) -> Result<Self> {
        let parser = Parser { options, factories };
        match query {
            Value::Object(map) if is_expression(map) => parser.next(query),
            Value::Object(map) => parser.next(&explicit_and(map)),
            other => Err(invalid(other)),
        }
    }

    /// Matches of `record` against this expression. Empty means no hit.
    pub fn evaluate(&self, index: &FuseIndex, record: &IndexRecord) -> Vec<FieldMatch> {
        match self {
            Expression::Leaf(leaf) => {
                let Some(entry) = index.value_for_key(record, &leaf.key_id) else {
                    return Vec::new();
                };
                find_matches(index.key_index(&leaf.key_id), entry, leaf.searcher.as_ref())
            }
            Expression::Node {
                operator: Operator::And,
                children,
            } => {
                let mut matches = Vec::new();
                for child in children {
                    let found = child.evaluate(index, record);
                    if found.is_empty() {
                        return Vec::new();
                    }
                    matches.extend(found);
                }
                matches
            }
            Expression::Node {
                operator: Operator::Or,
                children,
            } => children
                .iter()
                .map(|child| child.evaluate(index, record))
                .find(|found| !found.is_empty())
                .unwrap_or_default(),
        }
    }

    /// Number of leaves, for logging.
    pub fn leaf_count(&self) -> usize {
        match self {
            Expression::Leaf(_) => 1,
            Expression::Node { children, .. } => children.iter().map(Expression::leaf_count).sum(),
        }
    }
}

struct Parser<'a> {
    options: &'a FuseOptions,
    factories: &'a [Arc<dyn SearcherFactory>],
}

impl Parser<'_> {
    fn next(&self, query: &Value) -> Result<Expression> {
        let Value::Object(map) = query else {
            return Err(invalid(query));
        };

        let is_path = map.contains_key(PATH);
        if !is_path && map.len() > 1 && !is_expression(map) {
            return self.next(&explicit_and(map));
        }

        if !is_expression(map) {
            return self.leaf(map, is_path);
        }

        // Both operators present: $and sorts first and names the node
        let operator = if map.contains_key(AND) {
            Operator::And
        } else {
            Operator::Or
        };
        let mut children = Vec::new();
        for key in [AND, OR] {
            if let Some(Value::Array(items)) = map.get(key) {
                for item in items {
                    children.push(self.next(item)?);
                }
            }
        }
        Ok(Expression::Node { operator, children })
    }

    fn leaf(&self, map: &Map<String, Value>, is_path: bool) -> Result<Expression> {
        let (key, pattern) = if is_path {
            let key = map
                .get(PATH)
                .and_then(key_name)
                .ok_or_else(|| FuseError::InvalidQuery(PATH.to_string()))?;
            (key, map.get(VAL))
        } else {
            match map.iter().next() {
                Some((key, value)) => (KeyName::from(key.as_str()), Some(value)),
                None => return Err(FuseError::InvalidQuery("{}".to_string())),
            }
        };

        let Some(Value::String(pattern)) = pattern else {
            return Err(FuseError::InvalidQuery(key.to_string()));
        };

        Ok(Expression::Leaf(LeafQuery {
            key_id: key.id(),
            pattern: pattern.clone(),
            searcher: create_searcher(pattern, self.options, self.factories)?,
        }))
    }
}

fn is_expression(map: &Map<String, Value>) -> bool {
    map.contains_key(AND) || map.contains_key(OR)
}

/// `{a: x, b: y}` → `{$and: [{a: x}, {b: y}]}`
///
/// A `$path` leaf is kept whole: `{$and: [{$path: .., $val: ..}]}`.
fn explicit_and(map: &Map<String, Value>) -> Value {
    let children = if map.contains_key(PATH) {
        vec![Value::Object(map.clone())]
    } else {
        map.iter()
            .map(|(key, value)| {
                let mut child = Map::new();
                child.insert(key.clone(), value.clone());
                Value::Object(child)
            })
            .collect()
    };
    let mut node = Map::new();
    node.insert(AND.to_string(), Value::Array(children));
    Value::Object(node)
}

/// `$path` as a dotted string or a segment array.
fn key_name(value: &Value) -> Option<KeyName> {
    match value {
        Value::String(name) => Some(KeyName::Dotted(name.clone())),
        Value::Array(segments) => segments
            .iter()
            .map(|s| s.as_str().map(str::to_string))
            .collect::<Option<Vec<_>>>()
            .map(KeyName::Segments),
        _ => None,
    }
}

fn invalid(value: &Value) -> FuseError {
    FuseError::InvalidQuery(value.to_string())
}
