/// Data layer: cell model, reference table, and loading.
///
/// Architecture:
/// ```text
///  .xlsx / .xls / .ods / .csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  first sheet → rows of CellValue
///   └──────────┘
///        │  narrow name / dose per row
///        ▼
///   ┌────────────────┐
///   │ ReferenceTable  │  contaminant → Option<RfD>, immutable
///   └────────────────┘
/// ```

pub mod loader;
pub mod model;
