use crate::error::{ConvertError, ConvertResult, RowParseError};
use crate::excel::{AddressMapExporter, SheetReader, SheetRow};
use crate::parser::parse_area_row;
use crate::types::{
    AddressRecord, AreaRow, ObjectProperty, PointType, ProtocolType, RowOutcome, SheetLayout,
    BINDING_MODE,
};
use std::path::{Path, PathBuf};
use tracing::info;

/// Per-record constants of one output row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordTemplate {
    pub property: ObjectProperty,
    pub data_type: &'static str,
    pub protocol: ProtocolType,
}

const BINARY_PRESENT_VALUE: RecordTemplate = RecordTemplate {
    property: ObjectProperty::PresentValue,
    data_type: "uint4",
    protocol: ProtocolType::Enum,
};

const ANALOG_PRESENT_VALUE: RecordTemplate = RecordTemplate {
    property: ObjectProperty::PresentValue,
    data_type: "float",
    protocol: ProtocolType::Real,
};

const OUT_OF_SERVICE: RecordTemplate = RecordTemplate {
    property: ObjectProperty::OutOfService,
    data_type: "bool",
    protocol: ProtocolType::Boolean,
};

/// Records emitted for each point type, in output order.
/// Inputs and outputs expose OutOfService, values do not.
pub fn templates(point_type: PointType) -> &'static [RecordTemplate] {
    match point_type {
        PointType::BinaryInput | PointType::BinaryOutput => &[BINARY_PRESENT_VALUE, OUT_OF_SERVICE],
        PointType::BinaryValue => &[BINARY_PRESENT_VALUE],
        PointType::AnalogInput | PointType::AnalogOutput => &[ANALOG_PRESENT_VALUE, OUT_OF_SERVICE],
        PointType::AnalogValue => &[ANALOG_PRESENT_VALUE],
    }
}

/// Build the address records of one parsed row
pub fn expand_row(row: &AreaRow) -> Vec<AddressRecord> {
    templates(row.point_type)
        .iter()
        .map(|template| AddressRecord {
            signal: format!("{}{}", row.name, template.property.signal_suffix()),
            description: row.description.clone(),
            data_type: template.data_type.to_string(),
            binding_mode: BINDING_MODE.to_string(),
            object_type: row.point_type.object_type().to_string(),
            object_instance: row.instance.clone(),
            object_property: template.property.as_str().to_string(),
            index: String::new(),
            protocol_type: template.protocol.as_str().to_string(),
        })
        .collect()
}

/// Records of all valid rows plus the rows that were skipped
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Expansion {
    pub records: Vec<AddressRecord>,
    pub issues: Vec<RowParseError>,
}

/// Expand rows in order; a bad row is recorded as an issue and skipped
pub fn expand_rows(rows: &[SheetRow]) -> Expansion {
    let mut expansion = Expansion::default();
    for row in rows {
        match parse_area_row(row) {
            RowOutcome::Valid(parsed) => expansion.records.extend(expand_row(&parsed)),
            RowOutcome::Invalid(err) => expansion.issues.push(err),
        }
    }
    expansion
}

/// Converts a SystemeHD export into a Platform HD BACnet address map
pub struct AddressMapExpander {
    path: PathBuf,
}

impl AddressMapExpander {
    /// Create an expander for `path`. Fails when the path has no file name.
    pub fn new<P: AsRef<Path>>(path: P) -> ConvertResult<Self> {
        let path = path.as_ref();
        if path.file_name().is_none() {
            return Err(ConvertError::MissingFilename);
        }
        Ok(Self {
            path: path.to_path_buf(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// `<dir>/<stem>_plat.xlsx` next to the input
    pub fn output_path(&self) -> ConvertResult<PathBuf> {
        crate::writer::sibling_output_path(&self.path, "_plat.xlsx")
    }

    /// Read and expand the A:D layout without writing anything
    pub fn expand(&self) -> ConvertResult<Expansion> {
        let rows = SheetReader::new(&self.path).read_rows(SheetLayout::ADDRESS_MAP)?;
        Ok(expand_rows(&rows))
    }

    /// Expand the input and write the address map workbook.
    ///
    /// Skipped rows are printed as `Incorrect row: <name> <area code>`.
    /// Returns the expansion that was written.
    pub fn convert(&self) -> ConvertResult<Expansion> {
        let expansion = self.expand()?;
        for issue in &expansion.issues {
            println!("{}", issue.notice());
        }

        let output = self.output_path()?;
        AddressMapExporter::new(&expansion.records).export(&output)?;
        info!(
            input = %self.path.display(),
            output = %output.display(),
            records = expansion.records.len(),
            skipped = expansion.issues.len(),
            "wrote address map"
        );
        Ok(expansion)
    }
}
