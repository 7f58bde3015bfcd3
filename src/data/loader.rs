use std::io::Cursor;
use std::path::Path;

use anyhow::{Context, Result};
use calamine::{Data, Range, Reader, open_workbook_auto_from_rs};

use super::model::{CellValue, ReferenceTable};
use crate::config::TableSchema;
use crate::error::LoadError;

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Build a [`ReferenceTable`] from workbook bytes using the default RSL layout.
pub fn load(bytes: &[u8]) -> Result<ReferenceTable, LoadError> {
    load_with_schema(bytes, &TableSchema::default())
}

/// Build a [`ReferenceTable`] from workbook bytes.
///
/// The format (xlsx, xlsm, xlsb, xls, ods) is detected from the content.
/// Only the first worksheet by position is read.
pub fn load_with_schema(bytes: &[u8], schema: &TableSchema) -> Result<ReferenceTable, LoadError> {
    let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes))?;

    let sheet_name = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or(LoadError::NoWorksheets)?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or(LoadError::NoWorksheets)??;

    if range.is_empty() {
        return Err(LoadError::EmptyWorksheet(sheet_name));
    }

    log::debug!("Reading worksheet '{sheet_name}' ({:?} cells)", range.get_size());
    Ok(build_table(range_rows(&range), schema))
}

/// Build a [`ReferenceTable`] from a CSV export of the summary table.
/// Rows may have differing lengths; the first `header_rows` are skipped.
pub fn load_csv(bytes: &[u8], schema: &TableSchema) -> Result<ReferenceTable, LoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(bytes);

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(record.iter().map(guess_cell_type).collect::<Vec<_>>());
    }

    Ok(build_table(rows, schema))
}

/// Load a reference table from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.xlsx` / `.xlsm` / `.xlsb` / `.xls` / `.ods` – workbook, first sheet
/// * `.csv` – comma-separated export with the same column layout
pub fn load_file(path: &Path, schema: &TableSchema) -> Result<ReferenceTable> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let bytes = std::fs::read(path)
        .with_context(|| format!("reading reference table {}", path.display()))?;

    let table = match ext.as_str() {
        "csv" => load_csv(&bytes, schema),
        _ => load_with_schema(&bytes, schema),
    }
    .with_context(|| format!("parsing reference table {}", path.display()))?;

    Ok(table)
}

// ---------------------------------------------------------------------------
// Row → table
// ---------------------------------------------------------------------------

/// Turn row-major cells into the lookup table.
///
/// Rows with no usable name are skipped; a non-numeric dose keeps the row
/// with an absent value. Duplicate names: last row wins.
pub fn build_table<R>(rows: impl IntoIterator<Item = R>, schema: &TableSchema) -> ReferenceTable
where
    R: AsRef<[CellValue]>,
{
    let mut entries = Vec::new();
    let mut rows_read = 0usize;

    for (row_no, row) in rows.into_iter().enumerate().skip(schema.header_rows) {
        rows_read += 1;
        let row = row.as_ref();
        let cell = |idx: usize| row.get(idx).unwrap_or(&EMPTY_CELL);

        let Some(name) = cell(schema.name_column).as_name() else {
            log::debug!("Row {row_no}: no contaminant name, skipped");
            continue;
        };
        let dose = cell(schema.reference_column).as_dose();
        entries.push((name, dose));
    }

    let table = ReferenceTable::from_entries(entries);
    log::info!(
        "Loaded {} contaminants ({} with a usable RfD) from {rows_read} data rows",
        table.len(),
        table.usable_count()
    );
    table
}

static EMPTY_CELL: CellValue = CellValue::Empty;

// -- Workbook helpers --

/// Rows of a calamine range, re-anchored at cell A1.
///
/// A range starts at its first non-empty cell, so when the leading rows or
/// columns are blank the relative indices would no longer match the schema.
fn range_rows(range: &Range<Data>) -> Vec<Vec<CellValue>> {
    let (row_offset, col_offset) = range
        .start()
        .map(|(r, c)| (r as usize, c as usize))
        .unwrap_or((0, 0));

    let blank_rows = std::iter::repeat_with(Vec::<CellValue>::new).take(row_offset);
    let cell_rows = range.rows().map(|cells| {
        std::iter::repeat(CellValue::Empty)
            .take(col_offset)
            .chain(cells.iter().map(cell_from_data))
            .collect::<Vec<_>>()
    });

    blank_rows.chain(cell_rows).collect()
}

fn cell_from_data(data: &Data) -> CellValue {
    match data {
        Data::String(s) | Data::DateTimeIso(s) | Data::DurationIso(s) => {
            CellValue::Text(s.clone())
        }
        Data::Float(f) => CellValue::Number(*f),
        Data::Int(i) => CellValue::Number(*i as f64),
        Data::Bool(b) => CellValue::Text(b.to_string()),
        // Date-formatted cells keep their serial number.
        Data::DateTime(dt) => CellValue::Number(dt.as_f64()),
        Data::Error(_) | Data::Empty => CellValue::Empty,
    }
}

// -- CSV helpers --

fn guess_cell_type(s: &str) -> CellValue {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return CellValue::Empty;
    }
    match trimmed.parse::<f64>() {
        Ok(v) if v.is_finite() => CellValue::Number(v),
        _ => CellValue::Text(s.to_string()),
    }
}
