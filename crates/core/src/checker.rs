//! Maintenance-time consistency checking for the curated table.
//!
//! Four ordered passes keep the table minimal and internally consistent:
//!
//! * **A (dedupe)**: merge units by replacement, drop similarities that
//!   contain ASCII or are already claimed by an earlier unit.
//! * **B (cross-validate)**: run every similarity through the pipeline with
//!   the curated stage disabled; entries the bare pipeline resolves become
//!   [`ConflictRecord`]s and leave the table.
//! * **C (resolve)**: settle conflicts from the [`OverrideLedger`] where
//!   possible, otherwise ask an [`Adjudicator`]; map-side winners return to
//!   the table.
//! * **D (canonicalize)**: restore the canonical sort order.
//!
//! Each pass takes the table by value and returns a new one; nothing here
//! touches shared state, prompts, or disk.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::map::{MapTable, MappingUnit};
use crate::options::NormalizeOptions;
use crate::pipeline::Normalizer;

/// Which side of a conflict wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Decision {
    /// Keep the curated-table entry
    Map,
    /// Trust the algorithmic pipeline and drop the entry
    Pipeline,
}

/// A curated entry the bare pipeline can already resolve on its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConflictRecord {
    /// The similarity string in question
    pub source: String,
    /// What the curated table maps it to
    pub result_by_map: String,
    /// What the pipeline alone produces for it
    pub result_by_pipeline: String,
    /// Outcome of pass C, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub decision: Option<Decision>,
}

impl ConflictRecord {
    /// Both sides agree; the entry is merely unnecessary.
    #[must_use]
    pub fn is_noop(&self) -> bool {
        self.result_by_map == self.result_by_pipeline
    }
}

/// Decides genuine conflicts. Implementations may block for as long as they
/// need (a human answering a prompt); returning `None` leaves the conflict
/// undecided, which excludes the entry from the table without recording
/// anything.
pub trait Adjudicator {
    fn decide(&mut self, conflict: &ConflictRecord) -> Option<Decision>;
}

impl<F> Adjudicator for F
where
    F: FnMut(&ConflictRecord) -> Option<Decision>,
{
    fn decide(&mut self, conflict: &ConflictRecord) -> Option<Decision> {
        self(conflict)
    }
}

/// Memo of past conflict decisions, keyed by source string and kept in
/// insertion order so its serialized form diffs cleanly.
///
/// The pipeline never reads this; it belongs to the maintenance flow alone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OverrideLedger {
    entries: Vec<(String, String)>,
}

impl OverrideLedger {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The replacement previously chosen for `source`, if any.
    #[must_use]
    pub fn get(&self, source: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(s, _)| s == source)
            .map(|(_, replacement)| replacement.as_str())
    }

    /// Record a decision, updating in place when `source` is already known.
    pub fn record(&mut self, source: impl Into<String>, replacement: impl Into<String>) {
        let source = source.into();
        let replacement = replacement.into();
        match self.entries.iter_mut().find(|(s, _)| *s == source) {
            Some(entry) => entry.1 = replacement,
            None => self.entries.push((source, replacement)),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(s, r)| (s.as_str(), r.as_str()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Outcome of a full consistency check.
#[derive(Debug)]
pub struct CheckReport {
    /// The cleaned, canonically ordered table
    pub table: MapTable,
    /// Every conflict found in pass B, with its pass C outcome
    pub conflicts: Vec<ConflictRecord>,
    /// Validation warnings from pass A
    pub warnings: Vec<String>,
    /// True when at least one conflict needed a fresh adjudication rather
    /// than a ledger hit; the caller should offer to persist new decisions.
    pub prompted: bool,
}

/// Pass A: merge units by replacement and drop invalid or duplicate
/// similarities, keeping the first-seen owner. Warnings are logged and
/// returned; recovery is automatic and deterministic.
pub fn dedupe(table: MapTable) -> (MapTable, Vec<String>) {
    let mut warnings = Vec::new();
    let mut order: Vec<String> = Vec::new();
    let mut merged: HashMap<String, Vec<String>> = HashMap::new();
    let mut owners: HashMap<String, String> = HashMap::new();

    for unit in table.into_units() {
        if !merged.contains_key(&unit.replacement) {
            order.push(unit.replacement.clone());
            merged.insert(unit.replacement.clone(), Vec::new());
        }

        for similarity in unit.similarities {
            if similarity.chars().any(|c| c.is_ascii()) {
                let message = format!(
                    "ASCII content in similarity {similarity:?} for replacement {:?}, dropping it",
                    unit.replacement
                );
                log::warn!("{message}");
                warnings.push(message);
                continue;
            }

            match owners.get(&similarity) {
                Some(owner) => {
                    let message = format!(
                        "similarity {similarity:?} in unit {:?} already claimed by {owner:?}, dropping the duplicate",
                        unit.replacement
                    );
                    log::warn!("{message}");
                    warnings.push(message);
                }
                None => {
                    owners.insert(similarity.clone(), unit.replacement.clone());
                    merged
                        .get_mut(&unit.replacement)
                        .expect("unit registered above")
                        .push(similarity);
                }
            }
        }
    }

    let units = order
        .into_iter()
        .map(|replacement| {
            let similarities = merged.remove(&replacement).unwrap_or_default();
            MappingUnit {
                replacement,
                similarities,
            }
        })
        .collect();
    (MapTable::new(units), warnings)
}

/// Pass B: remove every similarity the bare pipeline already resolves,
/// recording a [`ConflictRecord`] with both results. Units left without
/// similarities are dropped.
pub fn cross_validate(table: MapTable, normalizer: &Normalizer) -> (MapTable, Vec<ConflictRecord>) {
    let mut conflicts = Vec::new();
    let mut units = Vec::new();

    for unit in table.into_units() {
        let mut keep = Vec::new();
        for similarity in unit.similarities {
            let result = normalizer.normalize(
                &similarity,
                NormalizeOptions::default().skip_hardcoded_mapping(true),
            );
            if result.is_empty() {
                keep.push(similarity);
            } else {
                conflicts.push(ConflictRecord {
                    source: similarity,
                    result_by_map: unit.replacement.clone(),
                    result_by_pipeline: result,
                    decision: None,
                });
            }
        }
        if !keep.is_empty() {
            units.push(MappingUnit {
                replacement: unit.replacement,
                similarities: keep,
            });
        }
    }

    (MapTable::new(units), conflicts)
}

/// Pass C: resolve conflicts. No-op conflicts go to the pipeline without a
/// prompt; ledger hits that still match the map-side result are memoized
/// `Map` decisions; everything else goes to the adjudicator. Map-side
/// winners are re-inserted under a unit keyed by their replacement.
///
/// The returned flag is true when the adjudicator was consulted at least
/// once.
pub fn resolve_conflicts(
    table: MapTable,
    mut conflicts: Vec<ConflictRecord>,
    ledger: &OverrideLedger,
    adjudicator: &mut dyn Adjudicator,
) -> (MapTable, Vec<ConflictRecord>, bool) {
    let mut prompted = false;

    for conflict in &mut conflicts {
        if conflict.is_noop() {
            conflict.decision = Some(Decision::Pipeline);
            continue;
        }
        if ledger.get(&conflict.source) == Some(conflict.result_by_map.as_str()) {
            conflict.decision = Some(Decision::Map);
            continue;
        }
        prompted = true;
        conflict.decision = adjudicator.decide(conflict);
    }

    let mut units = table.into_units();
    for conflict in &conflicts {
        if conflict.decision != Some(Decision::Map) {
            continue;
        }
        match units
            .iter_mut()
            .find(|unit| unit.replacement == conflict.result_by_map)
        {
            Some(unit) => unit.similarities.push(conflict.source.clone()),
            None => units.push(MappingUnit {
                replacement: conflict.result_by_map.clone(),
                similarities: vec![conflict.source.clone()],
            }),
        }
    }

    (MapTable::new(units), conflicts, prompted)
}

/// Pass D: canonical sort order, byte-identical for identical logical
/// content regardless of input ordering.
#[must_use]
pub fn canonicalize(table: MapTable) -> MapTable {
    table.canonicalize()
}

/// Run all four passes over `table`.
pub fn check(
    table: MapTable,
    ledger: &OverrideLedger,
    adjudicator: &mut dyn Adjudicator,
) -> CheckReport {
    let (table, warnings) = dedupe(table);

    // Pass B probes what the algorithm produces alone, so the probe
    // normalizer needs no table at all.
    let bare = Normalizer::with_table(MapTable::default());
    let (table, conflicts) = cross_validate(table, &bare);

    let (table, conflicts, prompted) = resolve_conflicts(table, conflicts, ledger, adjudicator);
    let table = canonicalize(table);

    CheckReport {
        table,
        conflicts,
        warnings,
        prompted,
    }
}
