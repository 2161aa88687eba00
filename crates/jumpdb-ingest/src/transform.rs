//! Per-field value cleanup.
//!
//! Transforms never fail: malformed numbers become `0` and text is
//! normalized as far as it can be.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use jumpdb_model::{Field, FieldValue, PipelineConfig, Transform};
use regex::Regex;

/// Two or more whitespace characters on one line.
static HORIZONTAL_WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\s&&[^\n]]{2,}").expect("Invalid whitespace regex"));

/// Whitespace around one or more paragraph breaks. Lone newlines are
/// already joined by the time this runs.
static PADDED_PARAGRAPH_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*\n\s*").expect("Invalid paragraph break regex"));

/// Applies the configured transform for a field to a raw cell.
#[derive(Debug, Clone)]
pub struct FieldTransformer {
    transforms: BTreeMap<Field, Transform>,
    cost_unit: String,
}

impl FieldTransformer {
    pub fn new(config: &PipelineConfig) -> Self {
        Self {
            transforms: config.transforms.clone(),
            cost_unit: config.cost_unit.clone(),
        }
    }

    /// Clean a raw cell; fields without a transform pass through unchanged.
    pub fn apply(&self, field: Field, raw: &str) -> FieldValue {
        match self.transforms.get(&field) {
            Some(Transform::Integer) => FieldValue::Integer(parse_integer(raw, &self.cost_unit)),
            Some(Transform::Description) => FieldValue::Text(clean_description(raw)),
            Some(Transform::Trim) => FieldValue::Text(raw.trim().to_string()),
            None => FieldValue::Text(raw.to_string()),
        }
    }
}

/// Parse a cost-like cell such as `"100cp"` or `" 50 CP "`.
///
/// Anything that is not a plain non-negative base-10 integer after the unit
/// suffix is removed yields `0`.
pub fn parse_integer(raw: &str, unit: &str) -> u64 {
    let trimmed = raw.trim();
    let number = strip_suffix_ignore_case(trimmed, unit).unwrap_or(trimmed);
    number.trim().parse::<u64>().unwrap_or(0)
}

fn strip_suffix_ignore_case<'a>(value: &'a str, suffix: &str) -> Option<&'a str> {
    if suffix.is_empty() || value.len() < suffix.len() {
        return None;
    }
    let split = value.len() - suffix.len();
    if !value.is_char_boundary(split) {
        return None;
    }
    let (head, tail) = value.split_at(split);
    tail.eq_ignore_ascii_case(suffix).then_some(head)
}

/// Reflow description text.
///
/// Carriage returns and tabs are dropped, a lone newline becomes a space,
/// two or more consecutive newlines become one paragraph break (`"\n\n"`)
/// with no spaces on either side, remaining whitespace runs on a line
/// collapse to one space, and the result is trimmed. Applying it twice gives the same text as applying it once.
pub fn clean_description(raw: &str) -> String {
    let mut joined = String::with_capacity(raw.len());
    let mut newlines = 0usize;
    for ch in raw.chars() {
        match ch {
            '\r' | '\t' => {}
            '\n' => newlines += 1,
            _ => {
                push_line_break(&mut joined, newlines);
                newlines = 0;
                joined.push(ch);
            }
        }
    }
    push_line_break(&mut joined, newlines);

    let collapsed = HORIZONTAL_WHITESPACE_RUN.replace_all(&joined, " ");
    PADDED_PARAGRAPH_BREAK
        .replace_all(&collapsed, "\n\n")
        .trim()
        .to_string()
}

fn push_line_break(out: &mut String, newlines: usize) {
    match newlines {
        0 => {}
        1 => out.push(' '),
        _ => out.push_str("\n\n"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_strips_unit_suffix() {
        assert_eq!(parse_integer("100cp", "cp"), 100);
        assert_eq!(parse_integer(" 200 CP ", "cp"), 200);
        assert_eq!(parse_integer("50", "cp"), 50);
        assert_eq!(parse_integer("+5", "cp"), 5);
    }

    #[test]
    fn integer_is_lenient() {
        assert_eq!(parse_integer("", "cp"), 0);
        assert_eq!(parse_integer("free", "cp"), 0);
        assert_eq!(parse_integer("-100cp", "cp"), 0);
        assert_eq!(parse_integer("1,000", "cp"), 0);
        assert_eq!(parse_integer("cp", "cp"), 0);
        assert_eq!(parse_integer("10é", "cp"), 0);
    }

    #[test]
    fn description_joins_soft_wraps() {
        assert_eq!(
            clean_description("Hello  world\ntrailing"),
            "Hello world trailing"
        );
    }

    #[test]
    fn description_keeps_paragraphs() {
        assert_eq!(
            clean_description("First\r\n\r\n\r\n\tSecond\nline"),
            "First\n\nSecond line"
        );
        assert_eq!(clean_description("\n\nlead"), "lead");
        assert_eq!(clean_description("one.  \n\n two"), "one.\n\ntwo");
        assert_eq!(clean_description("a\n\n \n\nb"), "a\n\nb");
    }

    #[test]
    fn description_is_idempotent_on_mixed_input() {
        let once = clean_description(" a \n\n\n  b\t\tc \n d  ");
        assert_eq!(once, "a\n\nbc d");
        assert_eq!(clean_description(&once), once);
    }

    #[test]
    fn apply_uses_configured_transforms() {
        let transformer = FieldTransformer::new(&PipelineConfig::default());
        assert_eq!(
            transformer.apply(Field::Cost, "100cp"),
            FieldValue::Integer(100)
        );
        assert_eq!(
            transformer.apply(Field::Chapter, "  Perks  "),
            FieldValue::Text("Perks".to_string())
        );
        assert_eq!(
            transformer.apply(Field::Name, "  Widget "),
            FieldValue::Text("  Widget ".to_string())
        );
    }
}
