//! Shared fixtures: workbooks are generated on the fly into temp dirs

#![allow(dead_code)] // each test binary uses a different subset

use calamine::{open_workbook, Reader, Xlsx};
use rust_xlsxwriter::Workbook;
use std::path::{Path, PathBuf};

/// One fixture cell
#[derive(Debug, Clone, Copy)]
pub enum Cell<'a> {
    Text(&'a str),
    Number(f64),
    Empty,
}

pub use Cell::{Empty, Number, Text};

/// Write a one-sheet .xlsx workbook starting at A1
pub fn write_workbook(path: &Path, rows: &[Vec<Cell<'_>>]) {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    for (r, row) in rows.iter().enumerate() {
        for (c, cell) in row.iter().enumerate() {
            match *cell {
                Cell::Text(s) => {
                    worksheet.write_string(r as u32, c as u16, s).unwrap();
                }
                Cell::Number(n) => {
                    worksheet.write_number(r as u32, c as u16, n).unwrap();
                }
                Cell::Empty => {}
            }
        }
    }
    workbook.save(path).unwrap();
}

/// Legacy layout: title row, header row, then (name, address) rows
pub fn legacy_workbook(dir: &Path, file_name: &str, rows: &[(Cell<'_>, Cell<'_>)]) -> PathBuf {
    let path = dir.join(file_name);
    let mut sheet = vec![
        vec![Text("SystemeHD configuration")],
        vec![Text("Name"), Text("Address")],
    ];
    sheet.extend(rows.iter().map(|(name, value)| vec![*name, *value]));
    write_workbook(&path, &sheet);
    path
}

/// New layout: 7 header rows, then (name, type code, instance) rows
pub fn new_layout_workbook(
    dir: &Path,
    file_name: &str,
    rows: &[(Cell<'_>, Cell<'_>, Cell<'_>)],
) -> PathBuf {
    let path = dir.join(file_name);
    let mut sheet = vec![
        vec![Text("Controller"), Text("SystemeHD")],
        vec![Text("Version"), Text("2")],
        vec![Text("Project"), Text("Test")],
        vec![],
        vec![Text("Objects")],
        vec![],
        vec![Text("Object name"), Text("Object type"), Text("Object instance")],
    ];
    sheet.extend(rows.iter().map(|(a, b, c)| vec![*a, *b, *c]));
    write_workbook(&path, &sheet);
    path
}

/// Address map layout: title row, header row, then (name, area, misc, description)
pub fn area_workbook(dir: &Path, file_name: &str, rows: &[(&str, &str, &str)]) -> PathBuf {
    let path = dir.join(file_name);
    let mut sheet = vec![
        vec![Text("SystemeHD configuration")],
        vec![Text("Name"), Text("Area"), Text("Misc"), Text("Description")],
    ];
    sheet.extend(
        rows.iter()
            .map(|(name, area, description)| vec![Text(name), Text(area), Empty, Text(description)]),
    );
    write_workbook(&path, &sheet);
    path
}

/// Sheet names and all cells (as text) of the first sheet of an .xlsx file
pub fn read_workbook(path: &Path) -> (Vec<String>, Vec<Vec<String>>) {
    let mut workbook: Xlsx<_> = open_workbook(path).unwrap();
    let names = workbook.sheet_names();
    let range = workbook.worksheet_range(&names[0]).unwrap();
    let rows = range
        .rows()
        .map(|row| row.iter().map(|cell| cell.to_string()).collect())
        .collect();
    (names, rows)
}
