//! REMA risk calculator.
//!
//! Looks up oral reference doses (RfD) in the EPA RSL summary table and
//! computes the non-carcinogenic risk quotient for an exposure scenario:
//!
//! ```text
//! I  = (C × IR × EF × ED) / (BW × AT)
//! QR = I / RfD          QR ≥ 1 → potential health risk
//! ```
//!
//! - `data/`: workbook loading and the immutable [`ReferenceTable`]
//! - `calculator/`: form validation, formulas, classification
//! - `state`: per-session orchestration for a form front-end

pub mod calculator;
pub mod config;
pub mod data;
pub mod error;
pub mod state;

pub use calculator::assessment::{Assessment, RiskLevel, compute_risk_quotient};
pub use calculator::formula::{estimated_intake, non_carcinogenic_risk};
pub use calculator::validation::{ExposureForm, ExposureInput, Field, FieldErrors, validate};
pub use config::{CalculatorConfig, TableSchema, ValidationLimits};
pub use data::model::{CellValue, Lookup, ReferenceDose, ReferenceTable};
pub use error::{CalcError, LoadError, ParamIssue, ValidationError};
pub use state::{CalculationOutcome, CalculatorState, Phase};

/// Parse RSL workbook bytes (first sheet, default column layout).
pub fn load_reference_table(bytes: &[u8]) -> Result<ReferenceTable, LoadError> {
    data::loader::load(bytes)
}
