//! Recursive document traversal
//!
//! Walks a parsed JSON value and rebuilds it with every string leaf
//! rewritten token by token. The output is structurally isomorphic to the
//! input: same types, same key set and order, same array lengths. Only
//! leaf string content changes; keys are never altered.

use crate::anonymization::replacer::WordReplacer;
use serde_json::{Map, Value};

/// Structure-preserving walker over a JSON value
pub struct DocumentWalker {
    replacer: WordReplacer,
}

impl DocumentWalker {
    /// Create a walker around a per-run replacer
    pub fn new(replacer: WordReplacer) -> Self {
        Self { replacer }
    }

    /// Walk a value, producing the anonymized copy
    ///
    /// null, booleans, and numbers are returned unchanged. Traversal
    /// always terminates: parsed JSON values are finite trees.
    pub fn walk(&mut self, value: &Value) -> Value {
        match value {
            Value::Null | Value::Bool(_) | Value::Number(_) => value.clone(),
            Value::String(text) => Value::String(self.rewrite_string(text)),
            Value::Array(items) => Value::Array(items.iter().map(|item| self.walk(item)).collect()),
            Value::Object(fields) => {
                let mut rebuilt = Map::with_capacity(fields.len());
                for (key, field) in fields {
                    rebuilt.insert(key.clone(), self.walk(field));
                }
                Value::Object(rebuilt)
            }
        }
    }

    /// Tokenize a string leaf on single spaces, replace, and rejoin
    ///
    /// Splitting on `' '` keeps empty tokens positionally, and empty
    /// tokens pass through the replacer unchanged, so runs of consecutive
    /// spaces survive the round trip byte-for-byte.
    fn rewrite_string(&mut self, text: &str) -> String {
        text.split(' ')
            .map(|token| self.replacer.replace(token))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// The replacer driving this walk
    pub fn replacer(&self) -> &WordReplacer {
        &self.replacer
    }
}
