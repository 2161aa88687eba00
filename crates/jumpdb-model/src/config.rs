//! Pipeline configuration tables.
//!
//! The defaults reproduce the built-in behavior. A TOML file can extend
//! them: tables in the file are merged over the defaults, scalar and list
//! values replace them.
//!
//! ```toml
//! cost_unit = "cp"
//! fallback_headers = ["cost", "name", "source", "description"]
//!
//! [headers]
//! "Perk Cost" = "cost"
//!
//! [transforms]
//! source = "trim"
//!
//! [split_chapters]
//! Drawbacks = "drawbacks"
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;

use crate::error::{ConfigError, Result};
use crate::field::Field;

/// Cleanup applied to a raw cell before it is stored on a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Transform {
    /// Strip the cost unit suffix and parse a non-negative integer (0 on failure).
    Integer,
    /// Reflow description text into paragraphs.
    Description,
    /// Trim surrounding whitespace.
    Trim,
}

/// Lowercase a header label and keep only ASCII letters.
///
/// `"CP Cost"`, `"cp-cost"` and `"CPCOST"` all normalize to `"cpcost"`.
pub fn normalize_label(raw: &str) -> String {
    raw.chars()
        .flat_map(char::to_lowercase)
        .filter(char::is_ascii_lowercase)
        .collect()
}

/// Every lookup table the ingestion and output stages consult.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineConfig {
    /// Normalized header label (or decimal column index) to field.
    pub headers: BTreeMap<String, Field>,
    pub transforms: BTreeMap<Field, Transform>,
    /// Column order assumed for files without a recognizable header row.
    pub fallback_headers: Vec<Field>,
    /// Unit suffix stripped from integer cells, matched case-insensitively.
    pub cost_unit: String,
    /// Chapter name (case-insensitive) to split output document name.
    pub split_chapters: BTreeMap<String, String>,
    /// Recognized labels needed before a first row counts as a header.
    pub min_header_matches: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        let headers = [
            ("unnamed0", Field::Id),
            ("0", Field::Id),
            ("cpcost", Field::Cost),
            ("cost", Field::Cost),
            ("price", Field::Cost),
            ("name", Field::Name),
            ("item", Field::Name),
            ("perkname", Field::Name),
            ("jump", Field::Source),
            ("jumpdoc", Field::Source),
            ("jumpchain", Field::Source),
            ("source", Field::Source),
            ("setting", Field::Source),
            ("chapter", Field::Chapter),
            ("category", Field::Chapter),
            ("description", Field::Description),
        ]
        .into_iter()
        .map(|(label, field)| (label.to_string(), field))
        .collect();

        let transforms = BTreeMap::from([
            (Field::Id, Transform::Integer),
            (Field::Cost, Transform::Integer),
            (Field::Description, Transform::Description),
            (Field::Chapter, Transform::Trim),
        ]);

        let split_chapters = BTreeMap::from([
            ("Drawbacks".to_string(), "drawbacks".to_string()),
            ("Companions".to_string(), "companions".to_string()),
        ]);

        Self {
            headers,
            transforms,
            fallback_headers: vec![Field::Cost, Field::Name, Field::Source, Field::Description],
            cost_unit: "cp".to_string(),
            split_chapters,
            min_header_matches: 2,
        }
    }
}

/// On-disk shape; everything is optional so files only state overrides.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct ConfigFile {
    cost_unit: Option<String>,
    min_header_matches: Option<usize>,
    fallback_headers: Option<Vec<Field>>,
    headers: BTreeMap<String, Field>,
    transforms: BTreeMap<String, Transform>,
    split_chapters: BTreeMap<String, String>,
}

impl PipelineConfig {
    /// Load a TOML file and merge it over the defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let file: ConfigFile = toml::from_str(&content).map_err(|source| ConfigError::Toml {
            path: path.to_path_buf(),
            source,
        })?;
        Self::default().merged(file)
    }

    /// Parse TOML text and merge it over the defaults.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let file: ConfigFile = toml::from_str(content).map_err(|source| ConfigError::Toml {
            path: "<inline>".into(),
            source,
        })?;
        Self::default().merged(file)
    }

    fn merged(mut self, file: ConfigFile) -> Result<Self> {
        if let Some(unit) = file.cost_unit {
            self.cost_unit = unit;
        }
        if let Some(min) = file.min_header_matches {
            self.min_header_matches = min;
        }
        if let Some(fallback) = file.fallback_headers {
            self.fallback_headers = fallback;
        }
        for (label, field) in file.headers {
            let key = if !label.is_empty() && label.chars().all(|ch| ch.is_ascii_digit()) {
                label
            } else {
                normalize_label(&label)
            };
            if key.is_empty() {
                continue;
            }
            self.headers.insert(key, field);
        }
        for (name, transform) in file.transforms {
            let field = name.parse::<Field>().map_err(|name| ConfigError::UnknownField {
                name,
                section: "transforms",
            })?;
            self.transforms.insert(field, transform);
        }
        self.split_chapters.extend(file.split_chapters);
        Ok(self)
    }
}
