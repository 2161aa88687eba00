//! Normalized records and the documents that group them.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::field::Field;

/// A cleaned field value produced by a transform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Integer(u64),
    Text(String),
}

impl FieldValue {
    fn into_integer(self) -> u64 {
        match self {
            FieldValue::Integer(value) => value,
            FieldValue::Text(text) => text.trim().parse().unwrap_or(0),
        }
    }

    fn into_text(self) -> String {
        match self {
            FieldValue::Integer(value) => value.to_string(),
            FieldValue::Text(text) => text,
        }
    }
}

/// One accepted row of a source file.
///
/// `source_file` and `line` record provenance: the file stem the row came
/// from and its 1-based position among that file's accepted rows.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub id: u64,
    pub cost: u64,
    pub name: String,
    pub source: String,
    pub chapter: String,
    pub description: String,
    #[serde(rename = "__source")]
    pub source_file: String,
    #[serde(rename = "__line")]
    pub line: usize,
}

impl Record {
    pub fn new(source_file: impl Into<String>) -> Self {
        Self {
            source_file: source_file.into(),
            ..Self::default()
        }
    }

    /// Store a transformed value, coercing it to the field's storage type.
    pub fn set(&mut self, field: Field, value: FieldValue) {
        match field {
            Field::Id => self.id = value.into_integer(),
            Field::Cost => self.cost = value.into_integer(),
            Field::Name => self.name = value.into_text(),
            Field::Source => self.source = value.into_text(),
            Field::Chapter => self.chapter = value.into_text(),
            Field::Description => self.description = value.into_text(),
        }
    }

    /// A record is kept only when it has both a name and a description.
    pub fn is_complete(&self) -> bool {
        !self.name.is_empty() && !self.description.is_empty()
    }
}

/// Records of one input folder, keyed by the 1-based position of their file.
pub type GroupDocument = BTreeMap<usize, Vec<Record>>;

/// Records pulled out of a group for a special chapter; always keyed by `1`.
pub type SplitDocument = BTreeMap<usize, Vec<Record>>;
