//! Built-in confusable folding.
//!
//! Maps codepoints that render close to an ASCII character onto that
//! character. Codepoints are written escaped; several would be
//! indistinguishable from their ASCII target in a source listing.

use std::collections::HashMap;

use once_cell::sync::Lazy;

const TABLE: &[(char, char)] = &[
    // Cyrillic lowercase
    ('\u{0430}', 'a'), // а
    ('\u{0432}', 'b'), // в
    ('\u{0435}', 'e'), // е
    ('\u{043A}', 'k'), // к
    ('\u{043C}', 'm'), // м
    ('\u{043D}', 'h'), // н
    ('\u{043E}', 'o'), // о
    ('\u{0440}', 'p'), // р
    ('\u{0441}', 'c'), // с
    ('\u{0442}', 't'), // т
    ('\u{0443}', 'y'), // у
    ('\u{0445}', 'x'), // х
    ('\u{0451}', 'e'), // ё
    ('\u{0456}', 'i'), // і
    ('\u{0458}', 'j'), // ј
    ('\u{0455}', 's'), // ѕ
    ('\u{04BB}', 'h'), // һ
    ('\u{051B}', 'q'), // ԛ
    ('\u{051D}', 'w'), // ԝ
    // Cyrillic uppercase
    ('\u{0410}', 'A'), // А
    ('\u{0412}', 'B'), // В
    ('\u{0415}', 'E'), // Е
    ('\u{0401}', 'E'), // Ё
    ('\u{0417}', '3'), // З
    ('\u{0406}', 'I'), // І
    ('\u{0408}', 'J'), // Ј
    ('\u{041A}', 'K'), // К
    ('\u{041C}', 'M'), // М
    ('\u{041D}', 'H'), // Н
    ('\u{041E}', 'O'), // О
    ('\u{0420}', 'P'), // Р
    ('\u{0421}', 'C'), // С
    ('\u{0405}', 'S'), // Ѕ
    ('\u{0422}', 'T'), // Т
    ('\u{0423}', 'Y'), // У
    ('\u{0425}', 'X'), // Х
    ('\u{051A}', 'Q'), // Ԛ
    ('\u{051C}', 'W'), // Ԝ
    // Greek lowercase
    ('\u{03B3}', 'y'), // γ
    ('\u{03B9}', 'i'), // ι
    ('\u{03BA}', 'k'), // κ
    ('\u{03BD}', 'v'), // ν
    ('\u{03BF}', 'o'), // ο
    ('\u{03C1}', 'p'), // ρ
    ('\u{03C5}', 'u'), // υ
    ('\u{03C7}', 'x'), // χ
    ('\u{03C9}', 'w'), // ω
    // Greek uppercase
    ('\u{0391}', 'A'), // Α
    ('\u{0392}', 'B'), // Β
    ('\u{0395}', 'E'), // Ε
    ('\u{0396}', 'Z'), // Ζ
    ('\u{0397}', 'H'), // Η
    ('\u{0399}', 'I'), // Ι
    ('\u{039A}', 'K'), // Κ
    ('\u{039C}', 'M'), // Μ
    ('\u{039D}', 'N'), // Ν
    ('\u{039F}', 'O'), // Ο
    ('\u{03A1}', 'P'), // Ρ
    ('\u{03A4}', 'T'), // Τ
    ('\u{03A5}', 'Y'), // Υ
    ('\u{03A7}', 'X'), // Χ
    // dashes
    ('\u{2010}', '-'),
    ('\u{2011}', '-'),
    ('\u{2012}', '-'),
    ('\u{2013}', '-'),
    ('\u{2014}', '-'),
    ('\u{2015}', '-'),
    ('\u{2212}', '-'),
    // quotes
    ('\u{2018}', '\''),
    ('\u{2019}', '\''),
    ('\u{201B}', '\''),
    ('\u{201C}', '"'),
    ('\u{201D}', '"'),
    ('\u{201E}', '"'),
];

static MAP: Lazy<HashMap<char, char>> = Lazy::new(|| TABLE.iter().copied().collect());

/// Replace every confusable codepoint with its ASCII counterpart.
pub(crate) fn fold(s: &str) -> String {
    s.chars().map(|c| MAP.get(&c).copied().unwrap_or(c)).collect()
}
