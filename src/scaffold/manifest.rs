//! `package.json` script merging.
//!
//! The manifest is read, merged and rewritten wholesale. Concurrent edits
//! between the read and the write are lost (last writer wins).
use super::{ProjectPaths, MANIFEST_SCRIPTS};
use crate::error::ScaffoldError;
use serde_json::{Map, Value};
use std::fs;
use std::io;

/// Merge the fixed scripts into the project's `package.json`.
///
/// Fails with [`ScaffoldError::MissingManifest`] without creating the file
/// when the project has no manifest.
pub fn update_manifest(paths: &ProjectPaths) -> Result<(), ScaffoldError> {
    let path = paths.manifest_path();
    if !path.is_file() {
        return Err(ScaffoldError::MissingManifest { path });
    }
    let invalid = |reason: String| ScaffoldError::InvalidManifest {
        path: path.clone(),
        reason,
    };
    let text = fs::read_to_string(&path).map_err(|source| {
        if source.kind() == io::ErrorKind::InvalidData {
            invalid("file is not valid UTF-8".to_string())
        } else {
            ScaffoldError::fs(&path, source)
        }
    })?;
    // A leading BOM is accepted and not written back.
    let body = text.strip_prefix('\u{feff}').unwrap_or(&text);
    let mut manifest: Value = serde_json::from_str(body).map_err(|err| invalid(err.to_string()))?;
    merge_scripts(&mut manifest).map_err(invalid)?;

    let mut rendered =
        serde_json::to_string_pretty(&manifest).map_err(|err| invalid(err.to_string()))?;
    rendered.push('\n');
    fs::write(&path, rendered).map_err(|source| ScaffoldError::fs(&path, source))?;

    tracing::info!(
        path = %path.display(),
        scripts = MANIFEST_SCRIPTS.len(),
        "manifest scripts merged"
    );
    Ok(())
}

/// Add the fixed scripts to a parsed manifest, overwriting same-named entries.
///
/// A missing or `null` `scripts` member starts out empty; any other
/// non-object shape is rejected so user data is never discarded.
pub fn merge_scripts(manifest: &mut Value) -> Result<(), String> {
    let object = manifest
        .as_object_mut()
        .ok_or_else(|| "top-level value is not an object".to_string())?;
    let scripts = object
        .entry("scripts")
        .or_insert_with(|| Value::Object(Map::new()));
    if scripts.is_null() {
        *scripts = Value::Object(Map::new());
    }
    let scripts = scripts
        .as_object_mut()
        .ok_or_else(|| "`scripts` is not an object".to_string())?;
    for (name, command) in MANIFEST_SCRIPTS {
        scripts.insert(name.to_string(), Value::String(command.to_string()));
    }
    Ok(())
}

#[cfg(test)]
#[path = "manifest_tests.rs"]
mod tests;
