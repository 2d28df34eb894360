//! Excel exporter implementation - address records → Platform HD workbook

use crate::error::{ConvertError, ConvertResult};
use crate::types::{AddressRecord, ADDRESS_MAP_HEADER, ADDRESS_MAP_SHEET};
use rust_xlsxwriter::{Format, Workbook, Worksheet};
use std::path::Path;

/// Writes the BACnet address map sheet consumed by Platform HD
pub struct AddressMapExporter<'a> {
    records: &'a [AddressRecord],
}

impl<'a> AddressMapExporter<'a> {
    /// Create a new exporter over records in output order
    pub fn new(records: &'a [AddressRecord]) -> Self {
        Self { records }
    }

    /// Export the records to an Excel .xlsx file.
    ///
    /// The header row is always written, even when there are no records.
    pub fn export(&self, output_path: &Path) -> ConvertResult<()> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        worksheet
            .set_name(ADDRESS_MAP_SHEET)
            .map_err(|e| ConvertError::Export(format!("Failed to set worksheet name: {}", e)))?;

        self.write_header(worksheet)?;

        // Data rows start right below the header
        for (row_idx, record) in self.records.iter().enumerate() {
            let row = (row_idx + 1) as u32;
            for (col_idx, value) in record.to_row().iter().enumerate() {
                worksheet
                    .write_string(row, col_idx as u16, *value)
                    .map_err(|e| ConvertError::Export(format!("Failed to write cell: {}", e)))?;
            }
        }

        worksheet.autofit();

        workbook
            .save(output_path)
            .map_err(|e| ConvertError::Export(format!("Failed to save Excel file: {}", e)))?;

        Ok(())
    }

    fn write_header(&self, worksheet: &mut Worksheet) -> ConvertResult<()> {
        let header_format = Format::new().set_bold();
        for (col_idx, name) in ADDRESS_MAP_HEADER.iter().enumerate() {
            worksheet
                .write_string_with_format(0, col_idx as u16, *name, &header_format)
                .map_err(|e| ConvertError::Export(format!("Failed to write header: {}", e)))?;
        }
        Ok(())
    }
}
