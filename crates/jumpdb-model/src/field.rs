//! Canonical record fields.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// One of the standardized record attributes a source column can map to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Id,
    Cost,
    Name,
    Source,
    Chapter,
    Description,
}

impl Field {
    pub const ALL: [Field; 6] = [
        Field::Id,
        Field::Cost,
        Field::Name,
        Field::Source,
        Field::Chapter,
        Field::Description,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Field::Id => "id",
            Field::Cost => "cost",
            Field::Name => "name",
            Field::Source => "source",
            Field::Chapter => "chapter",
            Field::Description => "description",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Field {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let lowered = value.trim().to_ascii_lowercase();
        Field::ALL
            .into_iter()
            .find(|field| field.as_str() == lowered)
            .ok_or_else(|| value.to_string())
    }
}
