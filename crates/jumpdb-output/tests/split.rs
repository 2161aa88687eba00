use std::collections::BTreeMap;

use jumpdb_model::{GroupDocument, Record};
use jumpdb_output::{slugify, split_chapters};
use proptest::prelude::*;

const CHAPTERS: [&str; 4] = ["Perks", "Drawbacks", "drawbacks", "Companions"];

fn record(index: usize, chapter: &str) -> Record {
    Record {
        name: format!("r{index}"),
        chapter: chapter.to_string(),
        description: "text".to_string(),
        ..Record::new("file")
    }
}

fn split_table() -> BTreeMap<String, String> {
    BTreeMap::from([
        ("Drawbacks".to_string(), "drawbacks".to_string()),
        ("Companions".to_string(), "companions".to_string()),
    ])
}

proptest! {
    #[test]
    fn every_record_lands_in_exactly_one_document(
        files in prop::collection::vec(prop::collection::vec(0usize..4, 0..6), 1..5),
    ) {
        let mut document = GroupDocument::new();
        let mut counter = 0usize;
        for (position, chapters) in files.iter().enumerate() {
            let records = chapters
                .iter()
                .map(|&chapter| {
                    counter += 1;
                    record(counter, CHAPTERS[chapter])
                })
                .collect();
            document.insert(position + 1, records);
        }
        let table = split_table();

        let splits = split_chapters(&mut document, &table);

        let mut seen: Vec<String> = Vec::new();
        for split in &splits {
            for record in &split.document[&1] {
                prop_assert!(record.chapter.eq_ignore_ascii_case(&split.chapter));
                seen.push(record.name.clone());
            }
        }
        for records in document.values() {
            for record in records {
                prop_assert!(!table.keys().any(|name| name.eq_ignore_ascii_case(&record.chapter)));
                seen.push(record.name.clone());
            }
        }
        seen.sort();
        seen.dedup();
        prop_assert_eq!(seen.len(), counter);
        prop_assert_eq!(document.len(), files.len());
    }

    #[test]
    fn slugify_is_idempotent_and_clean(name in "[A-Za-z0-9 '_()!&.-]{0,24}") {
        let slug = slugify(&name);
        prop_assert_eq!(slugify(&slug), slug.clone());
        prop_assert!(slug
            .chars()
            .all(|ch| ch.is_ascii_lowercase() || ch.is_ascii_digit() || ch == '_' || ch == '-'));
        prop_assert!(!slug.starts_with('_') && !slug.ends_with('_'));
    }
}
