//! Raw document types returned by a store

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Field holding the branch code on product documents
pub const BRANCH_CODE_FIELD: &str = "branchCode";

/// A schemaless document: an identifier plus its field map
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub id: String,
    #[serde(default)]
    pub fields: Map<String, Value>,
}

impl Document {
    /// Create an empty document
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            fields: Map::new(),
        }
    }

    /// Build a document from a JSON value; non-object values yield `None`
    pub fn from_value(id: impl Into<String>, value: Value) -> Option<Self> {
        match value {
            Value::Object(fields) => Some(Self { id: id.into(), fields }),
            _ => None,
        }
    }

    /// Set a field, builder style
    pub fn with(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.fields.insert(key.to_string(), value.into());
        self
    }

    /// Raw field value; JSON `null` counts as absent
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key).filter(|v| !v.is_null())
    }

    /// String field value
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_str)
    }

    /// Whether this product document belongs to the given branch
    pub fn in_branch(&self, branch_code: &str) -> bool {
        self.get_str(BRANCH_CODE_FIELD) == Some(branch_code)
    }
}
