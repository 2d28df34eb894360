//! Excel import/export module
//!
//! - Import: first sheet of a SystemeHD export (.xls, .xlsx, ...) → typed cell rows
//! - Export: Platform HD address records → `.xlsx` workbook

mod exporter;
mod importer;

pub use exporter::AddressMapExporter;
pub use importer::{SheetReader, SheetRow};
