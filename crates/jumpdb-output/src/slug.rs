//! Output names derived from dataset folder names.

use std::sync::LazyLock;

use regex::Regex;

static COPY_OF_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^copy of ").expect("Invalid copy-of regex"));

static APOSTROPHES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"['\u{2019}]").expect("Invalid apostrophe regex"));

static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("Invalid whitespace regex"));

static NON_SLUG_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\w-]").expect("Invalid slug regex"));

/// Turn a folder name into a file-system friendly document name.
///
/// `"Copy of Bob's Jump Pack"` becomes `"bobs_jump_pack"`. The result holds
/// only lowercase word characters, `-` and `_`, never starts or ends with
/// `_`, and slugifying it again changes nothing.
pub fn slugify(name: &str) -> String {
    let name = name.trim();
    let name = COPY_OF_PREFIX.replace(name, "");
    let name = APOSTROPHES.replace_all(&name, "");
    let name = WHITESPACE_RUN.replace_all(&name, "_");
    let name = NON_SLUG_CHARS.replace_all(&name, "");
    name.trim_matches('_').to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugifies_folder_names() {
        assert_eq!(slugify("DemoPack"), "demopack");
        assert_eq!(slugify("Copy of Bob's Jump Pack"), "bobs_jump_pack");
        assert_eq!(slugify("COPY OF  Worm (v2)!"), "worm_v2");
        assert_eq!(slugify("_under_ & -dash-"), "under___-dash-");
    }

    #[test]
    fn only_first_copy_prefix_is_removed() {
        assert_eq!(slugify("Copy of Copy of X"), "copy_of_x");
        assert_eq!(slugify("copy_of_x"), "copy_of_x");
    }
}
