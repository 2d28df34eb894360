use std::path::PathBuf;
use thiserror::Error;

pub type ConvertResult<T> = Result<T, ConvertError>;

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("Can't open a file: {file}. Cause:\n{cause}")]
    FileOpen { file: String, cause: String },

    #[error("Required file name is missing (use --filename)")]
    MissingFilename,

    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    #[error("Can't convert file {} cause:\n{source}", .path.display())]
    Batch {
        path: PathBuf,
        #[source]
        source: Box<ConvertError>,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Export error: {0}")]
    Export(String),
}

/// Why a single sheet row was rejected by the row parser.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowErrorKind {
    #[error("name is missing")]
    MissingName,

    #[error("type code is not an integer")]
    InvalidTypeCode,

    #[error("type code is not a known point type")]
    UnknownTypeCode,

    #[error("instance is not an integer")]
    InvalidInstance,

    #[error("area code is not text")]
    MissingAreaCode,

    #[error("area code suffix is not an integer")]
    InvalidAreaSuffix,

    #[error("area code prefix is not a known point type")]
    UnknownAreaPrefix,
}

/// A rejected row. Never aborts a conversion; the row is skipped.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("row {row}: {kind} ({name} {raw})")]
pub struct RowParseError {
    /// 1-based sheet row number
    pub row: u32,
    pub name: String,
    /// The offending raw field as rendered text
    pub raw: String,
    pub kind: RowErrorKind,
}

impl RowParseError {
    pub fn new(row: u32, name: impl Into<String>, raw: impl Into<String>, kind: RowErrorKind) -> Self {
        Self {
            row,
            name: name.into(),
            raw: raw.into(),
            kind,
        }
    }

    /// One-line notice printed for skipped address map rows
    pub fn notice(&self) -> String {
        format!("Incorrect row: {} {}", self.name, self.raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_open_message_names_file_and_cause() {
        let err = ConvertError::FileOpen {
            file: "plant.xls".to_string(),
            cause: "No such file or directory".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("plant.xls"));
        assert!(msg.contains("No such file or directory"));
    }

    #[test]
    fn test_batch_message_wraps_source() {
        let err = ConvertError::Batch {
            path: PathBuf::from("site/ahu.xls"),
            source: Box::new(ConvertError::Export("disk full".to_string())),
        };
        let msg = err.to_string();
        assert!(msg.starts_with("Can't convert file site/ahu.xls cause:"));
        assert!(msg.contains("disk full"));
    }

    #[test]
    fn test_row_notice() {
        let err = RowParseError::new(5, "Zone1", "XY012", RowErrorKind::UnknownAreaPrefix);
        assert_eq!(err.notice(), "Incorrect row: Zone1 XY012");
        assert_eq!(
            err.to_string(),
            "row 5: area code prefix is not a known point type (Zone1 XY012)"
        );
    }
}
