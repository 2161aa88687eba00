//! Relocation of special-chapter records into their own documents.

use std::collections::BTreeMap;

use jumpdb_model::{GroupDocument, Record, SplitDocument};

/// Records of one configured chapter moved out of a group document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChapterSplit {
    /// Chapter name as configured.
    pub chapter: String,
    /// Output document name.
    pub output: String,
    pub document: SplitDocument,
}

impl ChapterSplit {
    pub fn record_count(&self) -> usize {
        self.document.values().map(Vec::len).sum()
    }
}

/// Move every record whose chapter matches a configured name
/// (case-insensitively) out of `document` into a split document keyed `1`.
///
/// Records keep their group order inside each split. Indices of `document`
/// are kept even when all their records move. A record matching several
/// configured names goes to the first one in table order. Chapters with no
/// matching record produce no split.
pub fn split_chapters(
    document: &mut GroupDocument,
    chapters: &BTreeMap<String, String>,
) -> Vec<ChapterSplit> {
    if chapters.is_empty() {
        return Vec::new();
    }
    let keys: Vec<String> = chapters.keys().map(|name| name.to_lowercase()).collect();
    let mut buckets: Vec<Vec<Record>> = vec![Vec::new(); keys.len()];

    for records in document.values_mut() {
        for record in std::mem::take(records) {
            let chapter = record.chapter.to_lowercase();
            match keys.iter().position(|key| *key == chapter) {
                Some(slot) => buckets[slot].push(record),
                None => records.push(record),
            }
        }
    }

    chapters
        .iter()
        .zip(buckets)
        .filter(|(_, bucket)| !bucket.is_empty())
        .map(|((chapter, output), bucket)| ChapterSplit {
            chapter: chapter.clone(),
            output: output.clone(),
            document: BTreeMap::from([(1, bucket)]),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, chapter: &str) -> Record {
        Record {
            name: name.to_string(),
            chapter: chapter.to_string(),
            description: "text".to_string(),
            ..Record::new("file")
        }
    }

    fn names(records: &[Record]) -> Vec<&str> {
        records.iter().map(|record| record.name.as_str()).collect()
    }

    #[test]
    fn moves_matching_records_across_files() {
        let mut document = GroupDocument::from([
            (1, vec![record("a", "Perks"), record("b", "drawbacks")]),
            (3, vec![record("c", "DRAWBACKS"), record("d", "Items")]),
        ]);
        let chapters = BTreeMap::from([("Drawbacks".to_string(), "drawbacks".to_string())]);

        let splits = split_chapters(&mut document, &chapters);

        assert_eq!(splits.len(), 1);
        assert_eq!(splits[0].output, "drawbacks");
        assert_eq!(splits[0].record_count(), 2);
        assert_eq!(names(&splits[0].document[&1]), vec!["b", "c"]);
        assert_eq!(names(&document[&1]), vec!["a"]);
        assert_eq!(names(&document[&3]), vec!["d"]);
    }

    #[test]
    fn no_match_produces_no_split() {
        let mut document = GroupDocument::from([(1, vec![record("a", "Perks")])]);
        let chapters = BTreeMap::from([("Companions".to_string(), "companions".to_string())]);

        assert!(split_chapters(&mut document, &chapters).is_empty());
        assert_eq!(document[&1].len(), 1);
    }

    #[test]
    fn emptied_indices_remain() {
        let mut document = GroupDocument::from([(2, vec![record("a", "Companions")])]);
        let chapters = BTreeMap::from([("companions".to_string(), "companions".to_string())]);

        let splits = split_chapters(&mut document, &chapters);

        assert_eq!(splits.len(), 1);
        assert!(document[&2].is_empty());
    }

    #[test]
    fn duplicate_names_route_to_first_entry() {
        let mut document = GroupDocument::from([(1, vec![record("a", "Items")])]);
        let chapters = BTreeMap::from([
            ("ITEMS".to_string(), "loud".to_string()),
            ("items".to_string(), "quiet".to_string()),
        ]);

        let splits = split_chapters(&mut document, &chapters);

        assert_eq!(splits.len(), 1);
        assert_eq!(splits[0].output, "loud");
    }
}
