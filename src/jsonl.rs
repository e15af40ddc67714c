// JSONL fixture loading

use crate::record::Record;
use eyre::{Context, Result};
use serde_json::Value;
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{info, warn};

/// Read all records from a JSONL file, returning the latest version per ID
///
/// A later line with the same ID replaces the earlier one in place, so the
/// result keeps the order in which IDs first appeared. Lines of the form
/// `{"id": ..., "deleted": true}` drop the record. Unreadable or malformed
/// lines are skipped with a warning.
pub fn read_jsonl<T: Record>(path: &Path) -> Result<Vec<T>> {
    if !path.exists() {
        // Nothing recorded yet
        return Ok(Vec::new());
    }

    let file = File::open(path).with_context(|| format!("Failed to open JSONL file {:?}", path))?;
    let reader = BufReader::new(file);

    let mut slots: Vec<Option<T>> = Vec::new();
    let mut positions: HashMap<String, usize> = HashMap::new();

    for (line_num, line) in reader.lines().enumerate() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                warn!(
                    file = ?path,
                    line = line_num + 1,
                    error = ?e,
                    "Failed to read line, skipping"
                );
                continue;
            }
        };

        if line.trim().is_empty() {
            continue;
        }

        let value: Value = match serde_json::from_str(&line) {
            Ok(v) => v,
            Err(e) => {
                warn!(
                    file = ?path,
                    line = line_num + 1,
                    error = ?e,
                    "Failed to parse JSON, skipping"
                );
                continue;
            }
        };

        if is_tombstone(&value) {
            if let Some(id) = value.get("id").and_then(Value::as_str) {
                if let Some(&pos) = positions.get(id) {
                    slots[pos] = None;
                }
            }
            continue;
        }

        let record: T = match serde_json::from_value(value) {
            Ok(r) => r,
            Err(e) => {
                warn!(
                    file = ?path,
                    line = line_num + 1,
                    collection = T::collection_name(),
                    error = ?e,
                    "Line does not match record type, skipping"
                );
                continue;
            }
        };

        let id = record.id().to_string();
        match positions.get(&id).copied() {
            Some(pos) => slots[pos] = Some(record),
            None => {
                positions.insert(id, slots.len());
                slots.push(Some(record));
            }
        }
    }

    let records: Vec<T> = slots.into_iter().flatten().collect();

    info!(
        file = ?path,
        collection = T::collection_name(),
        count = records.len(),
        "Loaded records from JSONL"
    );

    Ok(records)
}

fn is_tombstone(value: &Value) -> bool {
    value.get("deleted").and_then(Value::as_bool).unwrap_or(false)
}
