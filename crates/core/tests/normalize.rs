//! End-to-end pipeline behavior.

use pretty_assertions::assert_eq;

use asciifold_core::{MapTable, MappingUnit, NormalizeOptions, Normalizer};

fn unit(replacement: &str, similarities: &[&str]) -> MappingUnit {
    MappingUnit {
        replacement: replacement.to_string(),
        similarities: similarities.iter().map(|s| (*s).to_string()).collect(),
    }
}

#[test]
fn ascii_input_passes_through_unchanged() {
    let normalizer = Normalizer::new();
    for input in ["", "hello", "user_123", "a b c", "!@#$%"] {
        assert_eq!(normalizer.normalize(input, NormalizeOptions::default()), input);
    }
}

#[test]
fn ascii_input_is_trimmed() {
    let normalizer = Normalizer::new();
    assert_eq!(
        normalizer.normalize("  padded  ", NormalizeOptions::default()),
        "padded"
    );
}

#[test]
fn normalize_is_idempotent_on_its_own_output() {
    let normalizer = Normalizer::new();
    for input in ["héllo wörld", "са\u{0301}т", "ᗩᗷᑕ", "a\u{200D}b", "ﬁne"] {
        let once = normalizer.normalize(input, NormalizeOptions::default());
        let twice = normalizer.normalize(&once, NormalizeOptions::default());
        assert_eq!(twice, once, "not idempotent for {input:?}");
    }
}

#[test]
fn diacritics_are_stripped() {
    let normalizer = Normalizer::new();
    assert_eq!(
        normalizer.normalize("crème brûlée", NormalizeOptions::default()),
        "creme brulee"
    );
}

#[test]
fn ligature_folds_through_compatibility_normalization() {
    let normalizer = Normalizer::new();
    assert_eq!(normalizer.normalize("ﬁ", NormalizeOptions::default()), "fi");
}

#[test]
fn fullwidth_forms_fold() {
    let normalizer = Normalizer::new();
    assert_eq!(
        normalizer.normalize("ｈｅｌｌｏ", NormalizeOptions::default()),
        "hello"
    );
}

#[test]
fn zero_width_joiner_between_ascii_letters_is_stripped() {
    let normalizer = Normalizer::new();
    assert_eq!(
        normalizer.normalize("a\u{200D}b", NormalizeOptions::default()),
        "ab"
    );
}

#[test]
fn invisible_codepoints_are_stripped() {
    let normalizer = Normalizer::new();
    assert_eq!(
        normalizer.normalize("s\u{200B}p\u{FEFF}a\u{2060}m", NormalizeOptions::default()),
        "spam"
    );
    assert_eq!(
        normalizer.normalize("a\u{2800}b\u{3164}c", NormalizeOptions::default()),
        "abc"
    );
}

#[test]
fn cyrillic_lookalikes_fold() {
    // Cyrillic а/е/о fold through the built-in confusable table
    let normalizer = Normalizer::new();
    assert_eq!(
        normalizer.normalize("\u{0440}\u{0430}\u{0441}\u{0435}", NormalizeOptions::default()),
        "pace"
    );
}

#[test]
fn curated_table_resolves_what_the_pipeline_cannot() {
    // Pipeline alone leaves nothing for ᗰ; a curated entry decides it.
    let bare = Normalizer::with_table(MapTable::default());
    assert_eq!(bare.normalize("ᗰ", NormalizeOptions::default()), "");

    let curated = Normalizer::with_table(MapTable::new(vec![unit("m", &["ᗰ"])]));
    assert_eq!(curated.normalize("ᗰ", NormalizeOptions::default()), "m");
}

#[test]
fn curated_cyrillic_entry_maps_exactly() {
    let normalizer = Normalizer::with_table(MapTable::new(vec![unit("a", &["\u{0430}"])]));
    assert_eq!(
        normalizer.normalize("\u{0430}", NormalizeOptions::default()),
        "a"
    );
}

#[test]
fn builtin_table_covers_stylized_letters() {
    let normalizer = Normalizer::new();
    assert_eq!(
        normalizer.normalize("ᔕᑭᗩᗰ", NormalizeOptions::default()),
        "spam"
    );
    assert_eq!(normalizer.normalize("₳฿₵", NormalizeOptions::default()), "abc");
    assert_eq!(normalizer.normalize("ß", NormalizeOptions::default()), "ss");
}

#[test]
fn skip_hardcoded_mapping_bypasses_the_table() {
    let normalizer = Normalizer::new();
    let options = NormalizeOptions::default().skip_hardcoded_mapping(true);
    assert_eq!(normalizer.normalize("ᔕᑭᗩᗰ", options), "");
}

#[test]
fn leftovers_survive_when_removal_is_disabled() {
    let normalizer = Normalizer::new();
    assert_eq!(
        normalizer.normalize("ab日cd", NormalizeOptions::default().remove_leftovers(false)),
        "ab日cd"
    );
    assert_eq!(
        normalizer.normalize("ab日cd", NormalizeOptions::default()),
        "abcd"
    );
}

#[test]
fn leftover_hook_sees_concatenated_runs() {
    let normalizer = Normalizer::new();
    let mut seen = Vec::new();
    let mut hook = |leftovers: &str| seen.push(leftovers.to_string());
    normalizer.normalize(
        "a日b語c",
        NormalizeOptions::default().on_leftovers(&mut hook),
    );
    assert_eq!(seen, vec!["日語".to_string()]);
}

#[test]
fn leftover_hook_is_not_called_without_leftovers() {
    let normalizer = Normalizer::new();
    let mut called = false;
    let mut hook = |_: &str| called = true;
    let result = normalizer.normalize(
        "just ascii",
        NormalizeOptions::default().on_leftovers(&mut hook),
    );
    assert_eq!(result, "just ascii");
    assert!(!called);
}

#[test]
fn emoji_sequences_keep_their_joiners() {
    let normalizer = Normalizer::new();
    // the family ZWJ sequence survives intact when leftovers are kept
    let family = "\u{1F468}\u{200D}\u{1F469}\u{200D}\u{1F467}";
    assert_eq!(
        normalizer.normalize(family, NormalizeOptions::default().remove_leftovers(false)),
        family
    );
    // but emoji are still non-ASCII, so default options drop them
    assert_eq!(normalizer.normalize(family, NormalizeOptions::default()), "");
}

#[test]
fn emptied_graphemes_contribute_nothing() {
    let normalizer = Normalizer::new();
    assert_eq!(
        normalizer.normalize("\u{FEFF}\u{200B}\u{2800}", NormalizeOptions::default()),
        ""
    );
}

#[test]
fn mixed_obfuscation_folds_to_plain_ascii() {
    let normalizer = Normalizer::new();
    // diacritics + Cyrillic homoglyphs + zero-width + fullwidth
    let input = "f\u{200B}r\u{0435}\u{0435} ｍо\u{0301}ney";
    assert_eq!(
        normalizer.normalize(input, NormalizeOptions::default()),
        "free money"
    );
}
