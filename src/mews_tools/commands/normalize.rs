//! Batch normalization of the lookup data files.
//!
//! JSON targets are processed with per-file error isolation: a missing or
//! malformed file is reported and the batch moves on. The script target is
//! the unguarded section — an I/O failure there propagates and ends the run.

use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::{json, script};
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Lookup documents rewritten with sorted arrays and keys.
pub const JSON_TARGETS: &[&str] = &[
    "casteSubCastes.json",
    "partnerCastes.json",
    "subCastes.json",
];

/// JS data file whose embedded array literals get sorted textually.
pub const SCRIPT_TARGET: &str = "constituencyData.js";

pub fn run(utils_dir: &Path) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    for filename in JSON_TARGETS {
        sort_json_file(utils_dir, filename, &mut result);
    }
    sort_script_file(utils_dir, SCRIPT_TARGET, &mut result)?;

    Ok(result)
}

fn sort_json_file(dir: &Path, filename: &str, result: &mut CmdResult) {
    let path = dir.join(filename);
    if !path.exists() {
        result.add_message(CmdMessage::warning(format!(
            "File not found: {}",
            path.display()
        )));
        return;
    }

    match process_json(&path) {
        Ok(true) => {
            result.changed_paths.push(path);
            result.add_message(CmdMessage::success(format!("Sorted {}", filename)));
        }
        // Root was neither array nor object; nothing to write.
        Ok(false) => {}
        Err(e) => {
            result.add_message(CmdMessage::error(format!(
                "Error processing {}: {}",
                filename, e
            )));
        }
    }
}

fn process_json(path: &Path) -> Result<bool> {
    let content = fs::read_to_string(path)?;
    let value: Value = serde_json::from_str(&content)?;

    match json::sort_document(value)? {
        Some(updated) => {
            // Rewritten even when the sort was a no-op, like the original
            // maintenance script.
            fs::write(path, json::to_pretty_4(&updated)?)?;
            Ok(true)
        }
        None => Ok(false),
    }
}

fn sort_script_file(dir: &Path, filename: &str, result: &mut CmdResult) -> Result<()> {
    let path = dir.join(filename);
    if !path.exists() {
        result.add_message(CmdMessage::warning(format!(
            "File not found: {}",
            path.display()
        )));
        return Ok(());
    }

    let content = fs::read_to_string(&path)?;
    let updated = script::sort_array_literals(&content);

    if updated != content {
        fs::write(&path, updated.as_ref())?;
        result.changed_paths.push(path);
        result.add_message(CmdMessage::success(format!("Processed {}", filename)));
    } else {
        result.add_message(CmdMessage::info(format!(
            "No changes needed for {}",
            filename
        )));
    }
    Ok(())
}
