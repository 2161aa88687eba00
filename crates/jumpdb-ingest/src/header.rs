//! Header label resolution.

use std::collections::BTreeMap;

use jumpdb_model::{Field, PipelineConfig, normalize_label};

/// Maps raw column labels, or column positions, to canonical fields.
#[derive(Debug, Clone)]
pub struct HeaderResolver {
    table: BTreeMap<String, Field>,
}

impl HeaderResolver {
    pub fn new(config: &PipelineConfig) -> Self {
        Self {
            table: config.headers.clone(),
        }
    }

    /// Resolve a label by its normalized form only.
    pub fn resolve_label(&self, raw: &str) -> Option<Field> {
        self.table.get(&normalize_label(raw)).copied()
    }

    /// Resolve a zero-based column position.
    pub fn resolve_index(&self, index: usize) -> Option<Field> {
        self.table.get(&index.to_string()).copied()
    }

    /// Resolve a label, falling back to its position when the label is unknown.
    pub fn resolve(&self, raw: &str, index: usize) -> Option<Field> {
        self.resolve_label(raw).or_else(|| self.resolve_index(index))
    }

    /// Number of labels in a candidate header row that resolve by name.
    pub fn count_recognized<S: AsRef<str>>(&self, labels: &[S]) -> usize {
        labels
            .iter()
            .filter(|label| self.resolve_label(label.as_ref()).is_some())
            .count()
    }

    /// Column mapping for a genuine header row; `None` drops the column.
    pub fn map_columns<S: AsRef<str>>(&self, labels: &[S]) -> Vec<Option<Field>> {
        labels
            .iter()
            .enumerate()
            .map(|(index, label)| self.resolve(label.as_ref(), index))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolver() -> HeaderResolver {
        HeaderResolver::new(&PipelineConfig::default())
    }

    #[test]
    fn resolves_variants_of_the_same_label() {
        let resolver = resolver();
        for raw in ["CP Cost", "cp-cost", "CPCOST", "Cp_Cost:"] {
            assert_eq!(resolver.resolve_label(raw), Some(Field::Cost), "{raw}");
        }
        assert_eq!(resolver.resolve_label("Perk Name"), Some(Field::Name));
        assert_eq!(resolver.resolve_label("Category"), Some(Field::Chapter));
        assert_eq!(resolver.resolve_label("Notes"), None);
    }

    #[test]
    fn unknown_first_column_falls_back_to_id() {
        let resolver = resolver();
        assert_eq!(resolver.resolve("Unnamed: 0", 0), Some(Field::Id));
        assert_eq!(resolver.resolve("", 0), Some(Field::Id));
        assert_eq!(resolver.resolve("Notes", 1), None);
        assert_eq!(resolver.resolve("Name", 0), Some(Field::Name));
    }

    #[test]
    fn counts_only_named_matches() {
        let resolver = resolver();
        assert_eq!(resolver.count_recognized(&["", "Name", "Description"]), 2);
        assert_eq!(resolver.count_recognized(&["100", "Widget", "Text"]), 0);
    }

    #[test]
    fn maps_columns_positionally() {
        let resolver = resolver();
        let mapping = resolver.map_columns(&["#", "Name", "Notes", "Description"]);
        assert_eq!(
            mapping,
            vec![Some(Field::Id), Some(Field::Name), None, Some(Field::Description)]
        );
    }
}
