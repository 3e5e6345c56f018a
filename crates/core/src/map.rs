//! The curated exception table ("hardcoded map").
//!
//! Holds exact grapheme-to-replacement rules for obfuscations the
//! algorithmic pipeline stages cannot fold on their own. The table is
//! read-only during normalization; only the consistency checker rewrites it.

use std::cmp::Ordering;
use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};

/// One curated substitution rule: every grapheme listed in `similarities`
/// maps to `replacement`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappingUnit {
    /// Canonical output, plain ASCII (or a short ASCII string)
    pub replacement: String,
    /// Exact grapheme strings owned by this unit, purely non-ASCII
    pub similarities: Vec<String>,
}

/// Ordered sequence of [`MappingUnit`]s.
///
/// Canonical order: units with a single-character replacement sort before
/// multi-character ones, ties broken by plain string comparison of the
/// replacement; similarities within a unit are ordered by codepoint
/// sequence. The order is locale-independent so the serialized table stays
/// diff-friendly.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MapTable {
    units: Vec<MappingUnit>,
}

impl MapTable {
    #[must_use]
    pub fn new(units: Vec<MappingUnit>) -> Self {
        Self { units }
    }

    /// The curated table shipped with the crate.
    #[must_use]
    pub fn builtin() -> Self {
        let units = BUILTIN
            .iter()
            .map(|(replacement, similarities)| MappingUnit {
                replacement: (*replacement).to_string(),
                similarities: similarities.iter().map(|s| (*s).to_string()).collect(),
            })
            .collect();
        Self { units }
    }

    #[must_use]
    pub fn units(&self) -> &[MappingUnit] {
        &self.units
    }

    #[must_use]
    pub fn into_units(self) -> Vec<MappingUnit> {
        self.units
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.units.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// Similarity-to-replacement lookup used by the substitution stage.
    /// When a similarity is claimed twice, the first unit in table order
    /// wins.
    #[must_use]
    pub fn reverse_index(&self) -> HashMap<String, String> {
        let mut index = HashMap::new();
        for unit in &self.units {
            for similarity in &unit.similarities {
                index
                    .entry(similarity.clone())
                    .or_insert_with(|| unit.replacement.clone());
            }
        }
        index
    }

    /// Re-sort into canonical order.
    #[must_use]
    pub fn canonicalize(mut self) -> Self {
        for unit in &mut self.units {
            unit.similarities.sort_by(|a, b| codepoint_order(a, b));
        }
        self.units.sort_by(replacement_order);
        self
    }

    /// Serialize in the storage format: a JSON array of
    /// `{replacement, similarities}` records.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.units)?)
    }

    /// Parse the storage format, rejecting units without a replacement.
    pub fn from_json(data: &str) -> Result<Self> {
        let table: Self = serde_json::from_str(data)?;
        if table.units.iter().any(|u| u.replacement.is_empty()) {
            return Err(CoreError::EmptyReplacement);
        }
        Ok(table)
    }
}

fn replacement_order(a: &MappingUnit, b: &MappingUnit) -> Ordering {
    let a_single = a.replacement.chars().count() == 1;
    let b_single = b.replacement.chars().count() == 1;
    match (a_single, b_single) {
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        _ => a.replacement.cmp(&b.replacement),
    }
}

/// Lexicographic comparison over codepoint values, no collation.
pub(crate) fn codepoint_order(a: &str, b: &str) -> Ordering {
    a.chars().cmp(b.chars())
}

/// Built-in curated data, maintained in canonical order. Similarities are
/// glyphs the pipeline stages leave alone: stylized letterforms, currency
/// signs and letters missing from the confusable fold table.
const BUILTIN: &[(&str, &[&str])] = &[
    ("a", &["ɐ", "ᗩ", "₳"]),
    ("b", &["ƀ", "฿", "ᗷ"]),
    ("c", &["¢", "ᑕ", "₵"]),
    ("d", &["đ", "ᗪ"]),
    ("e", &["ɇ", "ᕮ", "€"]),
    ("f", &["ƒ", "ᖴ"]),
    ("g", &["ǥ", "₲"]),
    ("h", &["ђ", "ᕼ"]),
    ("i", &["ı", "ɨ"]),
    ("j", &["ɉ", "ᒍ"]),
    ("k", &["ᛕ", "₭"]),
    ("l", &["£", "ɭ", "ᒪ"]),
    ("m", &["ᗰ", "₥"]),
    ("n", &["ɳ", "ᑎ"]),
    ("o", &["ø", "ѳ", "๏"]),
    ("p", &["ᑭ", "₱"]),
    ("q", &["ɋ", "ᑫ"]),
    ("r", &["ɍ", "ᖇ"]),
    ("s", &["ʂ", "ᔕ"]),
    ("t", &["ȶ", "₮"]),
    ("u", &["µ", "ʉ", "μ", "ᑌ"]),
    ("v", &["ʋ", "ᐯ"]),
    ("w", &["ɯ", "ᗯ", "₩"]),
    ("x", &["ӿ", "᙭"]),
    ("y", &["¥", "ʏ"]),
    ("z", &["ƶ", "ȥ"]),
    ("ae", &["æ"]),
    ("oe", &["œ"]),
    ("ss", &["ß"]),
    ("th", &["þ"]),
];
