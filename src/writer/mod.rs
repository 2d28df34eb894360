use crate::error::{ConvertError, ConvertResult};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Point name → address value. Sorted so repeated runs produce identical files.
pub type KeyValueMap = BTreeMap<String, Value>;

/// Output path next to the input: same directory, input stem + `suffix`.
///
/// `site/ahu.xls` + `_plat.xlsx` → `site/ahu_plat.xlsx`
pub fn sibling_output_path(input: &Path, suffix: &str) -> ConvertResult<PathBuf> {
    let stem = input
        .file_stem()
        .ok_or(ConvertError::MissingFilename)?
        .to_string_lossy();
    let dir = input.parent().unwrap_or_else(|| Path::new(""));
    Ok(dir.join(format!("{stem}{suffix}")))
}

/// Write the mapping as one flat JSON object
pub fn write_json_map(path: &Path, map: &KeyValueMap) -> ConvertResult<()> {
    let content = serde_json::to_string(map)?;
    fs::write(path, content)?;
    Ok(())
}
