//! Leftover debugging: feed test cases through the pipeline with removal
//! disabled and report every non-ASCII codepoint that survives. Useful for
//! spotting obfuscations that need a new curated-map entry.

use std::fs;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};

use asciifold_core::{NormalizeOptions, Normalizer};

pub fn run(cases_path: Option<&Path>, output: Option<&Path>) -> Result<()> {
    let raw = match cases_path {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("reading cases from {}", path.display()))?,
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("reading cases from stdin")?;
            buffer
        }
    };
    let cases: Vec<&str> = raw.lines().filter(|line| !line.is_empty()).collect();

    let normalizer = Normalizer::new();
    let mut doc = String::new();
    let mut all_leftovers: Vec<char> = Vec::new();

    for (i, case) in cases.iter().enumerate() {
        let mut caught: Vec<char> = Vec::new();
        let mut hook = |leftovers: &str| caught.extend(leftovers.chars());
        let result = normalizer.normalize(
            case,
            NormalizeOptions::default()
                .remove_leftovers(false)
                .on_leftovers(&mut hook),
        );

        doc.push_str(&format!("Case {i}:\n"));
        doc.push_str(&format!("Before: {case}\n"));
        doc.push_str(&format!("After : {result}\n"));
        if !caught.is_empty() {
            doc.push_str(&format!("Non-ASCII leftovers: {caught:?}\n"));
            for ch in caught {
                if !all_leftovers.contains(&ch) {
                    all_leftovers.push(ch);
                }
            }
        }
        doc.push('\n');
    }

    doc.push_str(&format!(
        "Total distinct non-ASCII leftovers: {}\n",
        all_leftovers.len()
    ));
    if !all_leftovers.is_empty() {
        doc.push_str(&format!("{all_leftovers:?}\n"));
    }

    match output {
        Some(path) => {
            crate::store::write_atomic(path, &doc)?;
            log::info!("culprits log written to {}", path.display());
        }
        None => print!("{doc}"),
    }
    Ok(())
}
