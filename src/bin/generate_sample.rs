use std::path::PathBuf;

use anyhow::{Context, Result};
use rust_xlsxwriter::Workbook;

use rema_risk::TableSchema;
use rema_risk::data::loader;

/// Column headers of the RSL summary table, in sheet order.
const HEADERS: [&str; 15] = [
    "SFO (mg/kg-day)-1",
    "key",
    "IUR (ug/m3)-1",
    "key",
    "RfDo (mg/kg-day)",
    "key",
    "RfCi (mg/m3)",
    "key",
    "mutagen",
    "Volatile",
    "GIABS",
    "ABSd",
    "Csat (mg/kg)",
    "Analyte",
    "CAS No.",
];

enum Dose {
    Value(f64),
    Text(&'static str),
    Blank,
}

/// (analyte, CAS number, oral RfD)
const ANALYTES: [(&str, &str, Dose); 11] = [
    ("Arsenic, Inorganic", "7440-38-2", Dose::Value(3.0e-4)),
    ("Benzene", "71-43-2", Dose::Value(4.0e-3)),
    ("Cadmium (Diet)", "7440-43-9", Dose::Value(1.0e-3)),
    ("Chromium(VI)", "18540-29-9", Dose::Value(3.0e-3)),
    ("Lead and Compounds", "7439-92-1", Dose::Text("NA")),
    ("Mercuric Chloride", "7487-94-7", Dose::Value(3.0e-4)),
    ("Toluene", "108-88-3", Dose::Value(8.0e-2)),
    ("Trichloroethylene", "79-01-6", Dose::Value(5.0e-4)),
    ("Vinyl Chloride", "75-01-4", Dose::Value(3.0e-3)),
    ("Xylenes", "1330-20-7", Dose::Value(2.0e-1)),
    ("Asbestos (units in fibers)", "1332-21-4", Dose::Blank),
];

fn main() -> Result<()> {
    env_logger::init();

    let output_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("RSLs_summaryTable.xlsx"));

    let schema = TableSchema::default();
    let name_col = schema.name_column as u16;
    let dose_col = schema.reference_column as u16;

    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name("Table")?;

    for (col, header) in HEADERS.iter().enumerate() {
        sheet.write_string(0, col as u16, *header)?;
    }

    for (i, (analyte, cas, dose)) in ANALYTES.iter().enumerate() {
        let row = i as u32 + 1;
        sheet.write_string(row, name_col, *analyte)?;
        sheet.write_string(row, name_col + 1, *cas)?;
        match dose {
            Dose::Value(v) => {
                sheet.write_number(row, dose_col, *v)?;
                sheet.write_string(row, dose_col + 1, "I")?;
            }
            Dose::Text(t) => {
                sheet.write_string(row, dose_col, *t)?;
            }
            Dose::Blank => {}
        }
    }

    workbook
        .save(&output_path)
        .with_context(|| format!("writing {}", output_path.display()))?;

    // Read it back so the file is known to match the loader's layout.
    let table = loader::load_file(&output_path, &schema)?;

    println!(
        "Wrote {} analytes ({} with a usable RfD) to {}",
        table.len(),
        table.usable_count(),
        output_path.display()
    );
    Ok(())
}
