//! Bulk student import from a spreadsheet (`.xlsx`) or a `.csv` file.
//!
//! The whole file is validated before anything is added: the first bad row
//! aborts the import and names the spreadsheet row (data starts at row 2).

use crate::core::crud::{self, Change, Operation};
use crate::core::staff::find_class_by_name;
use crate::core::state::{AppState, Collection};
use crate::errors::{AppError, AppResult};
use crate::export::excel_date::excel_serial_to_date;
use crate::models::Student;
use crate::models::enums::{Gender, StudentStatus};
use calamine::{Data, Reader, open_workbook_auto};
use chrono::NaiveDate;
use regex::Regex;
use std::collections::HashSet;
use std::path::Path;

pub const REQUIRED_COLUMNS: [&str; 6] = ["nisn", "name", "gender", "status", "entryDate", "className"];
pub const OPTIONAL_COLUMNS: [&str; 1] = ["whatsapp"];

/// A cell as read from the source file.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Empty,
    Text(String),
    Number(f64),
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        match self {
            Cell::Empty => true,
            Cell::Text(s) => s.trim().is_empty(),
            Cell::Number(_) => false,
        }
    }

    /// Text value; whole numbers print without a fractional part so that
    /// numeric NISN or phone cells keep their digits.
    pub fn as_text(&self) -> String {
        match self {
            Cell::Empty => String::new(),
            Cell::Text(s) => s.trim().to_string(),
            Cell::Number(n) if n.fract() == 0.0 && n.abs() < 1e15 => format!("{}", *n as i64),
            Cell::Number(n) => n.to_string(),
        }
    }
}

impl From<&Data> for Cell {
    fn from(d: &Data) -> Self {
        match d {
            Data::Empty => Cell::Empty,
            Data::String(s) => Cell::Text(s.clone()),
            Data::Int(i) => Cell::Number(*i as f64),
            Data::Float(f) => Cell::Number(*f),
            Data::Bool(b) => Cell::Text(b.to_string()),
            Data::DateTime(dt) => Cell::Number(dt.as_f64()),
            Data::DateTimeIso(s) | Data::DurationIso(s) => Cell::Text(s.clone()),
            Data::Error(e) => Cell::Text(e.to_string()),
        }
    }
}

/// First row as headers, every following row as data.
#[derive(Debug, Clone, Default)]
pub struct Sheet {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<Cell>>,
}

impl Sheet {
    pub fn from_rows(mut rows: Vec<Vec<Cell>>) -> Self {
        if rows.is_empty() {
            return Self::default();
        }
        let headers = rows.remove(0).iter().map(Cell::as_text).collect();
        Self { headers, rows }
    }

    fn column(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }
}

// ---------------------------
// Readers
// ---------------------------

/// Read the first worksheet of a spreadsheet, or a CSV file, by extension.
pub fn read_sheet(path: &Path) -> AppResult<Sheet> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    match ext.as_str() {
        "csv" => read_csv(path),
        "xlsx" | "xlsm" | "xls" | "ods" => read_workbook(path),
        other => Err(AppError::Import(format!(
            "unsupported file type '{other}' (use .xlsx or .csv)"
        ))),
    }
}

fn read_workbook(path: &Path) -> AppResult<Sheet> {
    let mut workbook =
        open_workbook_auto(path).map_err(|e| AppError::Spreadsheet(e.to_string()))?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| AppError::Spreadsheet("the workbook has no worksheet".to_string()))?
        .map_err(|e| AppError::Spreadsheet(e.to_string()))?;

    let rows = range
        .rows()
        .map(|r| r.iter().map(Cell::from).collect())
        .collect();
    Ok(Sheet::from_rows(rows))
}

fn read_csv(path: &Path) -> AppResult<Sheet> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)?;

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        let row = record
            .iter()
            .map(|v| {
                if v.trim().is_empty() {
                    Cell::Empty
                } else {
                    Cell::Text(v.to_string())
                }
            })
            .collect();
        rows.push(row);
    }
    Ok(Sheet::from_rows(rows))
}

// ---------------------------
// Validation
// ---------------------------

fn row_error(row: usize, msg: String) -> AppError {
    AppError::Import(format!("row {row}: {msg}"))
}

fn parse_entry_date(cell: &Cell, date_re: &Regex) -> Option<NaiveDate> {
    match cell {
        Cell::Number(n) => excel_serial_to_date(*n),
        Cell::Text(s) if date_re.is_match(s.trim()) => {
            NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
        }
        _ => None,
    }
}

/// Check every row and build the students to add (ids still unset).
pub fn validate_rows(state: &AppState, sheet: &Sheet) -> AppResult<Vec<Student>> {
    let missing: Vec<&str> = REQUIRED_COLUMNS
        .iter()
        .copied()
        .filter(|c| sheet.column(c).is_none())
        .collect();
    if !missing.is_empty() {
        return Err(AppError::Import(format!(
            "missing columns: {}",
            missing.join(", ")
        )));
    }

    let idx: Vec<usize> = REQUIRED_COLUMNS
        .iter()
        .filter_map(|c| sheet.column(c))
        .collect();
    let whatsapp_idx = sheet.column(OPTIONAL_COLUMNS[0]);

    let date_re = Regex::new(r"^\d{4}-\d{2}-\d{2}$")
        .map_err(|e| AppError::Other(e.to_string()))?;

    let mut seen: HashSet<String> = state.students.iter().map(|s| s.nisn.clone()).collect();
    let mut students = Vec::new();

    for (i, row) in sheet.rows.iter().enumerate() {
        if row.iter().all(Cell::is_empty) {
            continue;
        }
        let row_no = i + 2;
        let cell = |col: usize| row.get(col).unwrap_or(&Cell::Empty);

        let cells: Vec<&Cell> = idx.iter().map(|&c| cell(c)).collect();
        if cells.iter().any(|c| c.is_empty()) {
            return Err(row_error(
                row_no,
                "incomplete data, every required column must be filled".to_string(),
            ));
        }

        let nisn = cells[0].as_text();
        if seen.contains(&nisn) {
            return Err(row_error(row_no, format!("NISN '{nisn}' is already registered")));
        }

        let gender_raw = cells[2].as_text();
        let gender = Gender::from_persisted(&gender_raw).ok_or_else(|| {
            row_error(
                row_no,
                format!("invalid gender '{gender_raw}' (allowed: {})", Gender::allowed()),
            )
        })?;

        let status_raw = cells[3].as_text();
        let status = StudentStatus::from_persisted(&status_raw).ok_or_else(|| {
            row_error(
                row_no,
                format!(
                    "invalid status '{status_raw}' (allowed: {})",
                    StudentStatus::allowed()
                ),
            )
        })?;

        let class_name = cells[5].as_text();
        let class_id = find_class_by_name(state, &class_name)
            .map(|c| c.id)
            .ok_or_else(|| row_error(row_no, format!("class '{class_name}' not found")))?;

        let entry_date = parse_entry_date(cells[4], &date_re).ok_or_else(|| {
            row_error(
                row_no,
                format!(
                    "invalid date '{}', use the YYYY-MM-DD format",
                    cells[4].as_text()
                ),
            )
        })?;

        let whatsapp = whatsapp_idx
            .map(|c| cell(c).as_text())
            .filter(|w| !w.is_empty());

        seen.insert(nisn.clone());
        students.push(Student {
            id: 0,
            nisn,
            name: cells[1].as_text(),
            gender,
            status,
            entry_date,
            exit_date: None,
            photo: None,
            whatsapp,
            class_id,
        });
    }

    Ok(students)
}

/// Validate and add all students of `sheet`, or none of them.
pub fn import_students(state: &mut AppState, sheet: &Sheet) -> AppResult<Vec<Change>> {
    let students = validate_rows(state, sheet)?;

    Ok(students
        .into_iter()
        .map(|s| {
            let id = crud::insert(&mut state.students, s);
            Change::new(Collection::Students, Operation::Import, id)
        })
        .collect())
}
