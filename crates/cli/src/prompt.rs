//! Interactive adjudication of map-vs-pipeline conflicts.

use asciifold_core::{Adjudicator, ConflictRecord, Decision};
use dialoguer::{Confirm, Select};

/// Asks the maintainer over the terminal which result is more accurate.
pub struct PromptAdjudicator;

impl Adjudicator for PromptAdjudicator {
    fn decide(&mut self, conflict: &ConflictRecord) -> Option<Decision> {
        let items = [
            format!("map {:?}", conflict.result_by_map),
            format!("pipeline {:?}", conflict.result_by_pipeline),
        ];
        let picked = Select::new()
            .with_prompt(format!(
                "For {:?}, which result is more accurate?",
                conflict.source
            ))
            .items(&items)
            .default(0)
            .interact_opt();

        match picked {
            Ok(Some(0)) => Some(Decision::Map),
            Ok(Some(1)) => Some(Decision::Pipeline),
            // escape, or no usable terminal: leave the conflict undecided
            _ => None,
        }
    }
}

/// Adjudicator for --no-prompt runs; decides nothing.
pub struct Undecided;

impl Adjudicator for Undecided {
    fn decide(&mut self, _conflict: &ConflictRecord) -> Option<Decision> {
        None
    }
}

/// Final gate before the ledger is rewritten.
pub fn confirm_save() -> bool {
    Confirm::new()
        .with_prompt("Save new decisions to the override ledger?")
        .default(false)
        .interact()
        .unwrap_or(false)
}
