//! The normalization pipeline: a fixed sequence of lossy transforms that
//! folds obfuscated Unicode text to canonical ASCII.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;
use unicode_normalization::UnicodeNormalization;
use unicode_segmentation::UnicodeSegmentation;

use crate::confusables;
use crate::emoji;
use crate::map::MapTable;
use crate::options::NormalizeOptions;
use crate::zero_width;

/// Non-spacing combining marks, deleted after canonical decomposition so
/// the curated table can match bare base letters.
static COMBINING_MARKS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\p{Mn}").expect("combining-mark class is valid"));

/// Maximal ASCII runs, deleted to isolate leftovers for diagnostics.
static ASCII_RUNS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\x00-\x7F]+").expect("ascii class is valid"));

/// Maximal non-ASCII runs: whatever the pipeline failed to fold.
static NON_ASCII_RUNS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^\x00-\x7F]+").expect("non-ascii class is valid"));

/// Stateless normalizer around a curated [`MapTable`].
///
/// All matchers are compiled once; `normalize` keeps no state across calls,
/// so a single instance can serve any number of inputs.
pub struct Normalizer {
    table: MapTable,
    index: HashMap<String, String>,
}

impl Normalizer {
    /// Normalizer over the built-in curated table.
    #[must_use]
    pub fn new() -> Self {
        Self::with_table(MapTable::builtin())
    }

    /// Normalizer over a caller-supplied table.
    #[must_use]
    pub fn with_table(table: MapTable) -> Self {
        let index = table.reverse_index();
        Self { table, index }
    }

    #[must_use]
    pub fn table(&self) -> &MapTable {
        &self.table
    }

    /// Run `text` through the pipeline stages in fixed order and return the
    /// folded string. Any input produces some output; malformed or mixed
    /// content is never an error.
    pub fn normalize(&self, text: &str, options: NormalizeOptions<'_>) -> String {
        let NormalizeOptions {
            skip_hardcoded_mapping,
            remove_leftovers,
            on_leftovers,
        } = options;

        let text = strip_diacritics(text);

        // Substitution is per user-perceived character; replacements are
        // plain strings and are never re-run through the table.
        let mut joined = String::with_capacity(text.len());
        for grapheme in text.graphemes(true) {
            let mapped = if skip_hardcoded_mapping {
                grapheme
            } else {
                self.index
                    .get(grapheme)
                    .map(String::as_str)
                    .unwrap_or(grapheme)
            };

            if mapped.is_ascii() || emoji::is_emoji(mapped) {
                joined.push_str(mapped);
            } else {
                // May empty the grapheme entirely; that is fine.
                joined.push_str(&zero_width::strip(mapped));
            }
        }

        let text: String = joined.nfkc().collect();
        let text = confusables::fold(&text);

        if let Some(hook) = on_leftovers {
            let leftovers = ASCII_RUNS.replace_all(&text, "");
            if !leftovers.is_empty() {
                hook(&leftovers);
            }
        }

        let result = if remove_leftovers {
            NON_ASCII_RUNS.replace_all(&text, "").into_owned()
        } else {
            text
        };
        result.trim().to_string()
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Decompose to NFD and delete every non-spacing mark.
fn strip_diacritics(text: &str) -> String {
    let decomposed: String = text.nfd().collect();
    COMBINING_MARKS.replace_all(&decomposed, "").into_owned()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_strip_diacritics() {
        assert_eq!(strip_diacritics("héllo"), "hello");
        assert_eq!(strip_diacritics("a\u{0301}\u{0308}"), "a");
    }

    #[test]
    fn test_empty_input() {
        let normalizer = Normalizer::new();
        assert_eq!(normalizer.normalize("", NormalizeOptions::default()), "");
    }

    #[test]
    fn test_ascii_passthrough() {
        let normalizer = Normalizer::new();
        assert_eq!(
            normalizer.normalize("plain text 123", NormalizeOptions::default()),
            "plain text 123"
        );
    }

    #[test]
    fn test_skip_hardcoded_mapping() {
        let normalizer = Normalizer::new();
        assert_eq!(normalizer.normalize("µ", NormalizeOptions::default()), "u");
        assert_eq!(
            normalizer.normalize(
                "µ",
                NormalizeOptions::default().skip_hardcoded_mapping(true)
            ),
            ""
        );
    }

    #[test]
    fn test_replacement_is_not_rerun_through_table() {
        // "ѳ" maps to "o"; a hostile table entry for "o" would be ASCII and
        // can never be a similarity, but make sure substitution output is
        // taken as-is even when it collides with another unit's replacement.
        let table = MapTable::new(vec![crate::MappingUnit {
            replacement: "o".to_string(),
            similarities: vec!["ѳ".to_string()],
        }]);
        let normalizer = Normalizer::with_table(table);
        assert_eq!(normalizer.normalize("ѳ", NormalizeOptions::default()), "o");
    }
}
