//! Row parsing: raw sheet cells → typed rows.
//!
//! Every layout has one parse function. Spreadsheet cells are untyped, so each
//! function validates the fields it needs and returns a [`RowOutcome`] instead
//! of trusting the cell kinds.

use crate::error::{RowErrorKind, RowParseError};
use crate::excel::SheetRow;
use crate::types::{AreaRow, LegacyRow, NewLayoutRow, PointType, RowOutcome};
use calamine::Data;
use serde_json::Value;

/// Parse a legacy two-column row (name, address).
///
/// The legacy converter performs no validation: every row becomes an entry,
/// with the name rendered as text and the value kept as a JSON scalar.
pub fn parse_legacy_row(row: &SheetRow) -> LegacyRow {
    LegacyRow {
        name: cell_to_text(row.cell(0)),
        value: cell_to_json(row.cell(1)),
    }
}

/// Parse a new-layout row (object name, object type code, object instance).
///
/// # Returns
/// * `Valid` - name is a non-empty text cell, the type code is one of the six
///   known codes and the instance is an integer
/// * `Invalid` - the first check that failed
pub fn parse_new_layout_row(row: &SheetRow) -> RowOutcome<NewLayoutRow> {
    let name = match row.cell(0) {
        Data::String(s) if !s.is_empty() => s.clone(),
        other => {
            return invalid(row, cell_to_text(other), String::new(), RowErrorKind::MissingName)
        }
    };

    let type_cell = row.cell(1);
    let Some(code) = cell_to_integer(type_cell) else {
        return invalid(row, name, cell_to_text(type_cell), RowErrorKind::InvalidTypeCode);
    };
    let Some(point_type) = PointType::from_type_code(code) else {
        return invalid(row, name, code.to_string(), RowErrorKind::UnknownTypeCode);
    };

    let instance_cell = row.cell(2);
    let Some(instance) = cell_to_integer(instance_cell) else {
        return invalid(row, name, cell_to_text(instance_cell), RowErrorKind::InvalidInstance);
    };

    RowOutcome::Valid(NewLayoutRow {
        name,
        point_type,
        instance,
    })
}

/// Parse an address map row (name, area code, misc, description).
///
/// The area code is split into a two-character prefix and a suffix. The
/// suffix must parse as an integer and the prefix must be one of the six
/// point type prefixes. The suffix is kept verbatim so leading zeros survive.
pub fn parse_area_row(row: &SheetRow) -> RowOutcome<AreaRow> {
    let name = cell_to_text(row.cell(0));

    let area_code = match row.cell(1) {
        Data::String(s) => s.as_str(),
        other => {
            return invalid(row, name, cell_to_text(other), RowErrorKind::MissingAreaCode);
        }
    };

    if name.is_empty() {
        return invalid(row, name, area_code, RowErrorKind::MissingName);
    }

    let (prefix, suffix) = split_area_code(area_code);
    if suffix.trim().parse::<i64>().is_err() {
        return invalid(row, name, area_code, RowErrorKind::InvalidAreaSuffix);
    }

    let Some(point_type) = PointType::from_prefix(prefix) else {
        return invalid(row, name, area_code, RowErrorKind::UnknownAreaPrefix);
    };

    RowOutcome::Valid(AreaRow {
        name,
        point_type,
        instance: suffix.to_string(),
        description: cell_to_text(row.cell(3)),
    })
}

/// Split an area code after its second character ("BI007" → ("BI", "007")).
///
/// Codes shorter than two characters yield an empty suffix.
pub fn split_area_code(code: &str) -> (&str, &str) {
    let at = code
        .char_indices()
        .nth(2)
        .map(|(idx, _)| idx)
        .unwrap_or(code.len());
    code.split_at(at)
}

/// Integer value of a cell: int cells, integral float cells, integer text
pub fn cell_to_integer(cell: &Data) -> Option<i64> {
    match cell {
        Data::Int(i) => Some(*i),
        Data::Float(f) if f.is_finite() && f.fract() == 0.0 => {
            // Range check before the saturating cast
            if *f >= i64::MIN as f64 && *f < i64::MAX as f64 {
                Some(*f as i64)
            } else {
                None
            }
        }
        Data::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Text rendering of a cell; empty cells become ""
pub fn cell_to_text(cell: &Data) -> String {
    match cell {
        Data::String(s) => s.clone(),
        Data::Empty => String::new(),
        Data::Float(f) if f.is_finite() && f.fract() == 0.0 && f.abs() < 1e15 => {
            format!("{}", *f as i64)
        }
        other => other.to_string(),
    }
}

/// JSON scalar for a cell. Integral floats become integers, empty cells null.
pub fn cell_to_json(cell: &Data) -> Value {
    match cell {
        Data::Empty => Value::Null,
        Data::String(s) => Value::String(s.clone()),
        Data::Bool(b) => Value::Bool(*b),
        Data::Int(i) => Value::from(*i),
        Data::Float(f) => match cell_to_integer(cell) {
            Some(i) => Value::from(i),
            None => serde_json::Number::from_f64(*f)
                .map(Value::Number)
                .unwrap_or(Value::Null),
        },
        Data::Error(_) => Value::Null,
        other => Value::String(other.to_string()),
    }
}

fn invalid<T>(
    row: &SheetRow,
    name: impl Into<String>,
    raw: impl Into<String>,
    kind: RowErrorKind,
) -> RowOutcome<T> {
    RowOutcome::Invalid(RowParseError::new(row.number, name, raw, kind))
}
