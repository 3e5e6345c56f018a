//! Whole-grapheme emoji detection.
//!
//! A grapheme recognized here keeps its glue codepoints (ZWJ, VS16, skin
//! tones) through the zero-width stripping stage; anything else loses them.

use once_cell::sync::Lazy;
use regex::Regex;

static EMOJI_SEQUENCE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"\A(?:",
        r"[\x{1F300}-\x{1F5FF}]",  // misc symbols and pictographs
        r"|[\x{1F600}-\x{1F64F}]", // emoticons
        r"|[\x{1F680}-\x{1F6FF}]", // transport and map symbols
        r"|[\x{1F900}-\x{1F9FF}]", // supplemental symbols and pictographs
        r"|[\x{1FA00}-\x{1FAFF}]", // symbols and pictographs extended-A
        r"|[\x{2600}-\x{26FF}]",   // misc symbols
        r"|[\x{2700}-\x{27BF}]",   // dingbats
        r"|[\x{2B00}-\x{2BFF}]",   // arrows, stars, squares
        r"|[\x{1F1E6}-\x{1F1FF}]", // regional indicators
        r"|[\x{1F3FB}-\x{1F3FF}]", // skin tone modifiers
        r"|[\x{203C}\x{2049}]",    // double exclamation, exclamation-question
        r"|\x{1F004}|\x{1F0CF}",   // mahjong red dragon, playing card joker
        r"|[\x{200D}\x{FE0F}\x{20E3}]", // zwj, vs16, combining keycap
        r")+\z",
    ))
    .expect("emoji class is valid")
});

/// True when `grapheme` consists entirely of emoji codepoints and glue.
pub(crate) fn is_emoji(grapheme: &str) -> bool {
    !grapheme.is_empty() && EMOJI_SEQUENCE.is_match(grapheme)
}
