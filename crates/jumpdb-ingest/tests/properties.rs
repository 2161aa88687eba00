use jumpdb_ingest::{HeaderResolver, clean_description, parse_integer};
use jumpdb_model::PipelineConfig;
use proptest::prelude::*;

/// Re-spell a label with random case and separators between its letters.
fn respell(label: &str, upper: &[bool], separators: &[u8]) -> String {
    let mut out = String::new();
    for (index, ch) in label.chars().enumerate() {
        if upper.get(index).copied().unwrap_or(false) {
            out.push(ch.to_ascii_uppercase());
        } else {
            out.push(ch);
        }
        match separators.get(index).copied().unwrap_or(0) % 5 {
            1 => out.push(' '),
            2 => out.push('-'),
            3 => out.push('_'),
            4 => out.push('1'),
            _ => {}
        }
    }
    out
}

proptest! {
    #[test]
    fn header_variants_resolve_alike(
        upper in prop::collection::vec(any::<bool>(), 16),
        separators in prop::collection::vec(any::<u8>(), 16),
    ) {
        let config = PipelineConfig::default();
        let resolver = HeaderResolver::new(&config);
        for (label, field) in &config.headers {
            // Index keys and labels with digits are only reachable positionally.
            if !label.chars().all(|ch| ch.is_ascii_lowercase()) {
                continue;
            }
            let variant = respell(label, &upper, &separators);
            prop_assert_eq!(resolver.resolve_label(&variant), Some(*field), "{}", variant);
        }
    }

    #[test]
    fn integer_parse_is_total(raw in ".*") {
        let _ = parse_integer(&raw, "cp");
    }

    #[test]
    fn integer_parse_reads_plain_numbers(value in 0u64..1_000_000, unit in "(cp|CP|Cp)?") {
        prop_assert_eq!(parse_integer(&format!(" {value}{unit} "), "cp"), value);
    }

    #[test]
    fn description_cleanup_is_idempotent(raw in "[a-c \t\r\n\u{a0}]{0,40}") {
        let once = clean_description(&raw);
        prop_assert_eq!(clean_description(&once), once.clone());
        prop_assert!(!once.contains('\r') && !once.contains('\t'));
        prop_assert!(!once.contains("\n\n\n"));
        prop_assert!(!once.contains(" \n") && !once.contains("\n "));
    }
}
