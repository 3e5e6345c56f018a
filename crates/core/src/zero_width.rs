//! Fixed table of zero-width, invisible and format codepoints.
//!
//! These are stripped from every grapheme that is neither pure ASCII nor a
//! whole emoji sequence. The set is part of the behavioral contract of the
//! pipeline and is matched as a single character class.

use std::fmt::Write;

use once_cell::sync::Lazy;
use regex::Regex;

/// Individual codepoints in the strip set.
const SINGLES: &[u32] = &[
    0x200E, // left-to-right mark
    0x034F, // combining grapheme joiner
    0x061C, // arabic letter mark
    0x180E, // mongolian vowel separator
    0x200C, // zero width non-joiner
    0x2060, // word joiner
    0x2061, 0x2062, 0x2063, // invisible function application / times / separator
    0x2028, 0x2029, // line and paragraph separators
    0x202F, // narrow no-break space
    0x2800, // braille pattern blank
    0x3164, // hangul filler
    0xFEFF, // zero width no-break space
    0xFFA0, // halfwidth hangul filler
    0xFE0F, // variation selector-16, forces emoji presentation
];

/// Inclusive codepoint ranges in the strip set.
const RANGES: &[(u32, u32)] = &[
    (0x200B, 0x200D),   // zero width space / non-joiner / joiner
    (0x1BCA0, 0x1BCA3), // shorthand format controls
    (0xFFF9, 0xFFFB),   // interlinear annotation controls
    (0x115F, 0x1160),   // hangul choseong / jungseong fillers
    (0x17B4, 0x17B5),   // khmer inherent vowels
];

static ZERO_WIDTH: Lazy<Regex> = Lazy::new(|| {
    let mut class = String::new();
    for &(start, end) in RANGES {
        let _ = write!(class, "\\x{{{start:X}}}-\\x{{{end:X}}}");
    }
    for &cp in SINGLES {
        let _ = write!(class, "\\x{{{cp:X}}}");
    }
    Regex::new(&format!("[{class}]")).expect("zero-width class is valid")
});

/// Delete every codepoint of the strip set from `grapheme`.
pub(crate) fn strip(grapheme: &str) -> String {
    ZERO_WIDTH.replace_all(grapheme, "").into_owned()
}
