//! Human-readable rendering of a consistency-check outcome.

use anyhow::Result;

use asciifold_core::{CheckReport, ConflictRecord, Decision};

/// Render the post-check maintenance report.
pub fn render(outcome: &CheckReport) -> Result<String> {
    let mut doc = String::new();
    doc.push_str("# Map consistency report\n\n");

    if !outcome.warnings.is_empty() {
        doc.push_str("## Warnings\n\n");
        for warning in &outcome.warnings {
            doc.push_str(&format!("- {warning}\n"));
        }
        doc.push('\n');
    }

    doc.push_str("## Cleaned table\n\n");
    doc.push_str("Entries the pipeline cannot resolve on its own; paste into the curated map to keep it current.\n\n");
    doc.push_str("```json\n");
    doc.push_str(&outcome.table.to_json()?);
    doc.push_str("\n```\n");

    let identical: Vec<&ConflictRecord> =
        outcome.conflicts.iter().filter(|c| c.is_noop()).collect();
    if !identical.is_empty() {
        doc.push_str("\n## Already handled identically\n\n");
        doc.push_str("The pipeline folds these to the same result; the curated entries were unnecessary and have been removed.\n\n");
        for conflict in identical {
            doc.push_str(&format!(
                "- {:?} -> {:?}\n",
                conflict.source, conflict.result_by_pipeline
            ));
        }
    }

    let pipeline_won: Vec<&ConflictRecord> = outcome
        .conflicts
        .iter()
        .filter(|c| !c.is_noop() && c.decision == Some(Decision::Pipeline))
        .collect();
    if !pipeline_won.is_empty() {
        doc.push_str("\n## Handled differently, pipeline chosen\n\n");
        doc.push_str("source -> pipeline result =/= map result\n\n");
        for conflict in pipeline_won {
            doc.push_str(&format!(
                "- {:?} -> {:?} =/= {:?}\n",
                conflict.source, conflict.result_by_pipeline, conflict.result_by_map
            ));
        }
    }

    let undecided: Vec<&ConflictRecord> = outcome
        .conflicts
        .iter()
        .filter(|c| c.decision.is_none())
        .collect();
    if !undecided.is_empty() {
        doc.push_str("\n## Undecided\n\n");
        doc.push_str("Left out of the table; run the check again to adjudicate.\n\n");
        for conflict in undecided {
            doc.push_str(&format!(
                "- {:?}: map {:?} vs pipeline {:?}\n",
                conflict.source, conflict.result_by_map, conflict.result_by_pipeline
            ));
        }
    }

    Ok(doc)
}

#[cfg(test)]
mod tests {
    use asciifold_core::{check, MapTable, MappingUnit, OverrideLedger};

    use super::*;

    #[test]
    fn test_report_sections() {
        let table = MapTable::new(vec![MappingUnit {
            replacement: "a".to_string(),
            // Cyrillic а resolves identically; ᗩ stays curated
            similarities: vec!["\u{0430}".to_string(), "ᗩ".to_string()],
        }]);
        let ledger = OverrideLedger::new();
        let mut undecided = |_: &ConflictRecord| None;
        let outcome = check(table, &ledger, &mut undecided);

        let doc = render(&outcome).unwrap();
        assert!(doc.contains("# Map consistency report"));
        assert!(doc.contains("## Cleaned table"));
        assert!(doc.contains("## Already handled identically"));
        assert!(doc.contains("\u{0430}"));
        assert!(doc.contains("ᗩ"));
        assert!(!doc.contains("## Undecided"));
    }
}
