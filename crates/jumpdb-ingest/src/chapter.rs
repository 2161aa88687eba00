//! Chapter labels inferred from file names.

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

static PARENTHESIZED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\([^)]*\)").expect("Invalid parenthesized regex"));

static DIGIT_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+").expect("Invalid digit regex"));

static PERKS_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bperks\b").expect("Invalid perks regex"));

static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("Invalid whitespace regex"));

/// Derive a readable chapter label from a file name such as
/// `"Jump - General Perks.csv"` (→ `"General"`) or `"set-1.csv"` (→ `"Set"`).
///
/// The name is split on `-`, `:` and `_`; segments are cleaned from the last
/// one backwards and the first non-empty result wins. When every segment
/// cleans away, the file name without its extension is returned.
pub fn infer_chapter(file_name: &str) -> String {
    let stem = file_stem(file_name);
    stem.split(['-', ':', '_'])
        .rev()
        .map(clean_segment)
        .find(|segment| !segment.is_empty())
        .unwrap_or_else(|| stem.to_string())
}

/// File name without its final extension.
pub fn file_stem(file_name: &str) -> &str {
    Path::new(file_name)
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or(file_name)
}

fn clean_segment(segment: &str) -> String {
    let cleaned = PARENTHESIZED.replace_all(segment, "");
    let cleaned = DIGIT_RUN.replace_all(&cleaned, "");
    let cleaned = PERKS_WORD.replace_all(&cleaned, "");
    let cleaned = cleaned.replace('_', " ");
    let cleaned = WHITESPACE_RUN.replace_all(cleaned.trim(), " ");
    capitalize_words(&cleaned)
}

fn capitalize_words(value: &str) -> String {
    value
        .split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skips_segments_that_clean_to_nothing() {
        assert_eq!(infer_chapter("set-1.csv"), "Set");
        assert_eq!(infer_chapter("Worm_Perks_2.csv"), "Worm");
    }

    #[test]
    fn takes_last_meaningful_segment() {
        assert_eq!(infer_chapter("Jump Name - General Perks.csv"), "General");
        assert_eq!(infer_chapter("Gamer: Items (Optional).csv"), "Items");
        assert_eq!(infer_chapter("Mass Effect - Drawbacks.csv"), "Drawbacks");
    }

    #[test]
    fn keeps_inner_casing() {
        assert_eq!(infer_chapter("ubw-SPECIAL forms.csv"), "SPECIAL Forms");
    }

    #[test]
    fn falls_back_to_stem() {
        assert_eq!(infer_chapter("Perks (100cp).csv"), "Perks (100cp)");
        assert_eq!(infer_chapter("2024.csv"), "2024");
    }

    #[test]
    fn stem_drops_only_last_extension() {
        assert_eq!(file_stem("set-1.csv"), "set-1");
        assert_eq!(file_stem("v1.2.csv"), "v1.2");
        assert_eq!(file_stem("plain"), "plain");
    }
}
