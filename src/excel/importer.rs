//! Excel importer implementation - first sheet region → rows of typed cells

use crate::error::{ConvertError, ConvertResult};
use crate::types::SheetLayout;
use calamine::{open_workbook_auto, Data, Range, Reader};
use std::path::{Path, PathBuf};
use tracing::debug;

/// One data row read from a sheet region
#[derive(Debug, Clone, PartialEq)]
pub struct SheetRow {
    /// 1-based row number as shown by spreadsheet applications
    pub number: u32,
    /// Exactly `layout.columns` cells; missing cells are `Data::Empty`
    pub cells: Vec<Data>,
}

impl SheetRow {
    pub fn new(number: u32, cells: Vec<Data>) -> Self {
        Self { number, cells }
    }

    /// Cell at a 0-based column, `Data::Empty` when out of range
    pub fn cell(&self, col: usize) -> &Data {
        const EMPTY: &Data = &Data::Empty;
        self.cells.get(col).unwrap_or(EMPTY)
    }

    fn is_blank(&self) -> bool {
        self.cells.iter().all(|cell| matches!(cell, Data::Empty))
    }
}

/// Reads a fixed region of the first sheet of a workbook
pub struct SheetReader {
    path: PathBuf,
}

impl SheetReader {
    /// Create a new sheet reader
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Read the data rows of `layout` from the first sheet.
    ///
    /// Any failure to open or decode the workbook is a `FileOpen` error.
    /// Fully blank rows inside the region are dropped.
    pub fn read_rows(&self, layout: SheetLayout) -> ConvertResult<Vec<SheetRow>> {
        // Format is picked from the extension (.xls, .xlsx, .xlsm, .xlsb, .ods)
        let mut workbook = open_workbook_auto(&self.path).map_err(|e| self.open_error(e))?;

        let range = workbook
            .worksheet_range_at(0)
            .ok_or_else(|| self.open_error("workbook has no sheets"))?
            .map_err(|e| self.open_error(e))?;

        let rows = Self::collect_rows(&range, layout);
        debug!(
            file = %self.path.display(),
            rows = rows.len(),
            "read sheet region"
        );
        Ok(rows)
    }

    /// Slice `layout` out of a decoded sheet, using absolute cell positions
    fn collect_rows(range: &Range<Data>, layout: SheetLayout) -> Vec<SheetRow> {
        let Some((last_row, _)) = range.end() else {
            return Vec::new(); // Empty sheet
        };

        (layout.first_row..=last_row)
            .map(|row| {
                let cells = (0..layout.columns as u32)
                    .map(|col| range.get_value((row, col)).cloned().unwrap_or(Data::Empty))
                    .collect();
                SheetRow::new(row + 1, cells)
            })
            .filter(|row| !row.is_blank())
            .collect()
    }

    fn open_error(&self, cause: impl ToString) -> ConvertError {
        let file = self
            .path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string());
        ConvertError::FileOpen {
            file,
            cause: cause.to_string(),
        }
    }
}
