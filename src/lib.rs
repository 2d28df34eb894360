//! systeme-utils - SystemeHD config converter
//!
//! Converts SystemeHD building-automation point exports (spreadsheets) into:
//!
//! - a flat `{point name: address}` JSON file (legacy and new export layouts)
//! - a Platform HD BACnet address map workbook (`*_plat.xlsx`)
//!
//! # Example
//!
//! ```no_run
//! use systeme_utils::core::AddressMapExpander;
//!
//! let expander = AddressMapExpander::new("site/ahu.xls")?;
//! let expansion = expander.convert()?;
//!
//! println!("Records: {}", expansion.records.len());
//! println!("Skipped rows: {}", expansion.issues.len());
//! # Ok::<(), systeme_utils::error::ConvertError>(())
//! ```

pub mod cli;
pub mod core;
pub mod error;
pub mod excel;
pub mod parser;
pub mod types;
pub mod writer;

// Re-export commonly used types
pub use error::{ConvertError, ConvertResult, RowParseError};
pub use types::{AddressCode, AddressRecord, PointType, RowOutcome};
