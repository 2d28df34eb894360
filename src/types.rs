use std::fmt;

//==============================================================================
// Point Types
//==============================================================================

/// BACnet object kind of a SystemeHD point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointType {
    AnalogInput,
    AnalogOutput,
    AnalogValue,
    BinaryInput,
    BinaryOutput,
    BinaryValue,
}

impl PointType {
    /// All point types, indexed by their SystemeHD type code
    pub const ALL: [PointType; 6] = [
        PointType::AnalogInput,
        PointType::AnalogOutput,
        PointType::AnalogValue,
        PointType::BinaryInput,
        PointType::BinaryOutput,
        PointType::BinaryValue,
    ];

    /// Look up a numeric type code (0..=5) from the new export layout
    pub fn from_type_code(code: i64) -> Option<Self> {
        usize::try_from(code)
            .ok()
            .and_then(|idx| Self::ALL.get(idx).copied())
    }

    /// Look up the two-letter prefix of an area code ("BI", "AO", ...)
    pub fn from_prefix(prefix: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.prefix() == prefix)
    }

    pub fn prefix(self) -> &'static str {
        match self {
            PointType::AnalogInput => "AI",
            PointType::AnalogOutput => "AO",
            PointType::AnalogValue => "AV",
            PointType::BinaryInput => "BI",
            PointType::BinaryOutput => "BO",
            PointType::BinaryValue => "BV",
        }
    }

    /// Long object type name used by Platform HD
    pub fn object_type(self) -> &'static str {
        match self {
            PointType::AnalogInput => "Analog Input",
            PointType::AnalogOutput => "Analog Output",
            PointType::AnalogValue => "Analog Value",
            PointType::BinaryInput => "Binary Input",
            PointType::BinaryOutput => "Binary Output",
            PointType::BinaryValue => "Binary Value",
        }
    }
}

impl fmt::Display for PointType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.prefix())
    }
}

//==============================================================================
// Address Codes (JSON output)
//==============================================================================

/// Short address such as `AI1` or `BV42`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AddressCode {
    pub point_type: PointType,
    pub instance: u16,
}

impl AddressCode {
    /// Build a code, keeping only the low 16 bits of the instance
    pub fn new(point_type: PointType, instance: i64) -> Self {
        Self {
            point_type,
            instance: (instance & 0xFFFF) as u16,
        }
    }
}

impl fmt::Display for AddressCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.point_type.prefix(), self.instance)
    }
}

//==============================================================================
// Address Records (Platform HD output)
//==============================================================================

/// Binding mode column value ("direct" in the Platform HD locale)
pub const BINDING_MODE: &str = "непосредственно";

/// Sheet name of the Platform HD address map
pub const ADDRESS_MAP_SHEET: &str = "BACnetAddressMap";

/// Fixed column header of the Platform HD address map
pub const ADDRESS_MAP_HEADER: [&str; 9] = [
    "Сигнал",
    "Описание",
    "Тип",
    "Привязка",
    "Тип объекта",
    "Экземпляр объекта",
    "Свойство объекта",
    "Индекс",
    "Протокольный тип",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectProperty {
    PresentValue,
    OutOfService,
}

impl ObjectProperty {
    pub fn as_str(self) -> &'static str {
        match self {
            ObjectProperty::PresentValue => "PRESENT_VALUE",
            ObjectProperty::OutOfService => "OUT_OF_SERVICE",
        }
    }

    /// Suffix appended to the point name to form the signal name
    pub fn signal_suffix(self) -> &'static str {
        match self {
            ObjectProperty::PresentValue => ".PresentValue",
            ObjectProperty::OutOfService => ".OutOfService",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProtocolType {
    Enum,
    Boolean,
    Real,
}

impl ProtocolType {
    pub fn as_str(self) -> &'static str {
        match self {
            ProtocolType::Enum => "Enum",
            ProtocolType::Boolean => "BOOLEAN",
            ProtocolType::Real => "REAL",
        }
    }
}

/// One row of the Platform HD address map
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressRecord {
    pub signal: String,
    pub description: String,
    pub data_type: String,
    pub binding_mode: String,
    pub object_type: String,
    pub object_instance: String,
    pub object_property: String,
    pub index: String,
    pub protocol_type: String,
}

impl AddressRecord {
    /// Fields in header order
    pub fn to_row(&self) -> [&str; 9] {
        [
            self.signal.as_str(),
            self.description.as_str(),
            self.data_type.as_str(),
            self.binding_mode.as_str(),
            self.object_type.as_str(),
            self.object_instance.as_str(),
            self.object_property.as_str(),
            self.index.as_str(),
            self.protocol_type.as_str(),
        ]
    }
}

//==============================================================================
// Parsed Rows
//==============================================================================

/// Legacy two-column row: name and an arbitrary value
#[derive(Debug, Clone, PartialEq)]
pub struct LegacyRow {
    pub name: String,
    pub value: serde_json::Value,
}

/// New export layout row: name, type code, instance index
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewLayoutRow {
    pub name: String,
    pub point_type: PointType,
    pub instance: i64,
}

impl NewLayoutRow {
    pub fn address_code(&self) -> AddressCode {
        AddressCode::new(self.point_type, self.instance)
    }
}

/// Address map row: name, area code split into type and instance, description
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AreaRow {
    pub name: String,
    pub point_type: PointType,
    /// Area code suffix exactly as written ("007" stays "007")
    pub instance: String,
    pub description: String,
}

/// Result of the row parse step
#[derive(Debug, Clone, PartialEq)]
pub enum RowOutcome<T> {
    Valid(T),
    Invalid(crate::error::RowParseError),
}

//==============================================================================
// Sheet Layouts
//==============================================================================

/// Region of the first sheet an operation reads
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SheetLayout {
    /// 0-based index of the first data row
    pub first_row: u32,
    /// Number of columns read starting at column A
    pub columns: u16,
}

impl SheetLayout {
    /// `json`: A:B, title row and header row above the data
    pub const LEGACY: SheetLayout = SheetLayout {
        first_row: 2,
        columns: 2,
    };

    /// `new-json`: A:C after the 7-row export header
    pub const NEW_LAYOUT: SheetLayout = SheetLayout {
        first_row: 7,
        columns: 3,
    };

    /// `platform`: A:D, title row and header row above the data
    pub const ADDRESS_MAP: SheetLayout = SheetLayout {
        first_row: 2,
        columns: 4,
    };
}
