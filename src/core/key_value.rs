use crate::error::{ConvertError, ConvertResult};
use crate::excel::{SheetReader, SheetRow};
use crate::parser::{parse_legacy_row, parse_new_layout_row};
use crate::types::{RowOutcome, SheetLayout};
use crate::writer::{sibling_output_path, write_json_map, KeyValueMap};
use serde_json::Value;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Converts a SystemeHD export into a flat `{point name: address}` JSON file
pub struct KeyValueExtractor {
    path: PathBuf,
}

impl KeyValueExtractor {
    /// Create an extractor for `path`. Fails when the path has no file name.
    pub fn new<P: AsRef<Path>>(path: P) -> ConvertResult<Self> {
        let path = path.as_ref();
        if path.file_name().is_none() {
            return Err(ConvertError::MissingFilename);
        }
        Ok(Self {
            path: path.to_path_buf(),
        })
    }

    /// `<dir>/<stem>.json` next to the input
    pub fn output_path(&self) -> ConvertResult<PathBuf> {
        sibling_output_path(&self.path, ".json")
    }

    /// Read the legacy A:B layout into a mapping
    pub fn extract_legacy(&self) -> ConvertResult<KeyValueMap> {
        let rows = SheetReader::new(&self.path).read_rows(SheetLayout::LEGACY)?;
        Ok(map_legacy_rows(&rows))
    }

    /// Read the new A:C layout into a mapping
    pub fn extract_new_layout(&self) -> ConvertResult<KeyValueMap> {
        let rows = SheetReader::new(&self.path).read_rows(SheetLayout::NEW_LAYOUT)?;
        Ok(map_new_layout_rows(&rows))
    }

    /// Convert the legacy layout and write the JSON file. Returns the output path.
    pub fn convert_legacy(&self) -> ConvertResult<PathBuf> {
        let map = self.extract_legacy()?;
        self.write_map(&map)
    }

    /// Convert the new layout and write the JSON file. Returns the output path.
    pub fn convert_new_layout(&self) -> ConvertResult<PathBuf> {
        let map = self.extract_new_layout()?;
        self.write_map(&map)
    }

    /// Write `map` to the output path. Returns the output path.
    pub fn write_map(&self, map: &KeyValueMap) -> ConvertResult<PathBuf> {
        let output = self.output_path()?;
        write_json_map(&output, map)?;
        info!(
            input = %self.path.display(),
            output = %output.display(),
            entries = map.len(),
            "wrote key-value map"
        );
        Ok(output)
    }
}

/// Every legacy row becomes an entry; a repeated name keeps its last value
pub fn map_legacy_rows(rows: &[SheetRow]) -> KeyValueMap {
    let mut map = KeyValueMap::new();
    for row in rows {
        let parsed = parse_legacy_row(row);
        map.insert(parsed.name, parsed.value);
    }
    map
}

/// Valid new-layout rows become `name → prefix + (instance & 0xFFFF)`.
/// Invalid rows are skipped without a notice.
pub fn map_new_layout_rows(rows: &[SheetRow]) -> KeyValueMap {
    let mut map = KeyValueMap::new();
    for row in rows {
        match parse_new_layout_row(row) {
            RowOutcome::Valid(parsed) => {
                let code = parsed.address_code().to_string();
                map.insert(parsed.name, Value::String(code));
            }
            RowOutcome::Invalid(err) => debug!(%err, "skipped new-layout row"),
        }
    }
    map
}

#[cfg(test)]
mod tests {
    use super::*;
    use calamine::Data;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn text(s: &str) -> Data {
        Data::String(s.to_string())
    }

    #[test]
    fn test_map_legacy_rows_last_duplicate_wins() {
        let rows = vec![
            SheetRow::new(3, vec![text("Pump1"), text("BI1")]),
            SheetRow::new(4, vec![text("Pump2"), text("BI2")]),
            SheetRow::new(5, vec![text("Pump1"), text("BO9")]),
        ];

        let map = map_legacy_rows(&rows);

        assert_eq!(map.len(), 2);
        assert_eq!(map["Pump1"], json!("BO9"));
        assert_eq!(map["Pump2"], json!("BI2"));
    }

    #[test]
    fn test_map_new_layout_rows() {
        let rows = vec![
            SheetRow::new(8, vec![text("Temp1"), Data::Float(0.0), Data::Float(65537.0)]),
            SheetRow::new(9, vec![text("Valve"), Data::Float(1.0), Data::Float(3.0)]),
            SheetRow::new(10, vec![text("Alarm"), Data::Float(5.0), Data::Float(12.0)]),
            // skipped: unknown type, bad instance, empty name
            SheetRow::new(11, vec![text("Odd"), Data::Float(9.0), Data::Float(1.0)]),
            SheetRow::new(12, vec![text("Broken"), Data::Float(3.0), text("n/a")]),
            SheetRow::new(13, vec![text(""), Data::Float(3.0), Data::Float(1.0)]),
        ];

        let map = map_new_layout_rows(&rows);

        let mut expected = KeyValueMap::new();
        expected.insert("Temp1".to_string(), json!("AI1"));
        expected.insert("Valve".to_string(), json!("AO3"));
        expected.insert("Alarm".to_string(), json!("BV12"));
        assert_eq!(map, expected);
    }

    #[test]
    fn test_map_new_layout_rows_last_duplicate_wins() {
        let rows = vec![
            SheetRow::new(8, vec![text("Temp1"), Data::Int(0), Data::Int(1)]),
            SheetRow::new(9, vec![text("Temp1"), Data::Int(2), Data::Int(2)]),
        ];
        assert_eq!(map_new_layout_rows(&rows)["Temp1"], json!("AV2"));
    }

    #[test]
    fn test_new_requires_file_name() {
        assert!(matches!(
            KeyValueExtractor::new("/"),
            Err(ConvertError::MissingFilename)
        ));
        assert!(KeyValueExtractor::new("plant.xls").is_ok());
    }

    #[test]
    fn test_open_failure_writes_nothing() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let input = temp_dir.path().join("missing.xls");
        let extractor = KeyValueExtractor::new(&input).unwrap();

        let result = extractor.convert_legacy();

        assert!(matches!(result, Err(ConvertError::FileOpen { .. })));
        assert!(!temp_dir.path().join("missing.json").exists());
    }
}
