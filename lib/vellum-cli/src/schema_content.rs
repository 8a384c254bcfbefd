use std::fs;
use std::path::Path;

use serde_json::Value;

use crate::CliResult;

/// Loads the schema pointed at by a `--schema-content-file` value. The file
/// is opened at use time and dropped once parsed.
pub fn read(path: &Path) -> CliResult<Value> {
    let contents = fs::read(path)?;
    Ok(serde_json::from_slice(&contents)?)
}
