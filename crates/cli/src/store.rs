//! File persistence for the curated table and the override ledger.
//!
//! Reads are forgiving (a missing or corrupt ledger is an empty one);
//! writes are all-or-nothing: content goes to a temp file in the target
//! directory and replaces the destination in one rename.

use std::fs;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use serde_json::{Map, Value};
use tempfile::NamedTempFile;

use asciifold_core::{MapTable, OverrideLedger};

/// Load a curated table from its JSON storage format.
pub fn load_table(path: &Path) -> Result<MapTable> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("reading map table {}", path.display()))?;
    MapTable::from_json(&data).with_context(|| format!("parsing map table {}", path.display()))
}

/// Write the table atomically in canonical JSON.
pub fn save_table(path: &Path, table: &MapTable) -> Result<()> {
    write_atomic(path, &table.to_json()?)
}

/// Load the override ledger; degrade to empty instead of failing.
pub fn load_ledger(path: &Path) -> OverrideLedger {
    let data = match fs::read_to_string(path) {
        Ok(data) => data,
        Err(_) => return OverrideLedger::new(),
    };

    match serde_json::from_str::<Map<String, Value>>(&data) {
        Ok(map) => {
            let mut ledger = OverrideLedger::new();
            for (source, value) in map {
                match value {
                    Value::String(replacement) => ledger.record(source, replacement),
                    _ => log::warn!("ignoring non-string ledger entry for {source:?}"),
                }
            }
            ledger
        }
        Err(err) => {
            log::warn!(
                "override ledger {} is unreadable, starting empty: {err}",
                path.display()
            );
            OverrideLedger::new()
        }
    }
}

/// Persist the whole ledger in one atomic replace, keys in insertion order.
pub fn save_ledger(path: &Path, ledger: &OverrideLedger) -> Result<()> {
    let mut map = Map::new();
    for (source, replacement) in ledger.iter() {
        map.insert(source.to_string(), Value::String(replacement.to_string()));
    }
    write_atomic(path, &serde_json::to_string_pretty(&Value::Object(map))?)
}

/// Temp file in the destination directory, then rename over the target.
pub fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir)
        .with_context(|| format!("creating temp file in {}", dir.display()))?;
    tmp.write_all(contents.as_bytes())
        .and_then(|()| tmp.write_all(b"\n"))
        .with_context(|| format!("writing {}", path.display()))?;
    tmp.persist(path)
        .with_context(|| format!("replacing {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_missing_ledger_is_empty() {
        let dir = TempDir::new().unwrap();
        let ledger = load_ledger(&dir.path().join("absent.json"));
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_corrupt_ledger_is_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("ledger.json");
        fs::write(&path, "{ not json").unwrap();
        assert!(load_ledger(&path).is_empty());
    }

    #[test]
    fn test_ledger_round_trip_preserves_order() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("ledger.json");

        let mut ledger = OverrideLedger::new();
        ledger.record("ѳ", "o");
        ledger.record("ʏ", "y");
        ledger.record("ᗰ", "m");
        save_ledger(&path, &ledger).unwrap();

        let loaded = load_ledger(&path);
        let entries: Vec<_> = loaded.iter().collect();
        assert_eq!(entries, vec![("ѳ", "o"), ("ʏ", "y"), ("ᗰ", "m")]);
    }

    #[test]
    fn test_table_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("map.json");

        let table = MapTable::builtin();
        save_table(&path, &table).unwrap();
        assert_eq!(load_table(&path).unwrap(), table);
    }

    #[test]
    fn test_write_atomic_replaces_existing_content() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.txt");
        write_atomic(&path, "first").unwrap();
        write_atomic(&path, "second").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "second\n");
    }
}
