use crate::calculator::assessment::{Assessment, compute_risk_quotient};
use crate::calculator::validation::{ExposureForm, Field, FieldErrors, validate};
use crate::config::CalculatorConfig;
use crate::data::loader;
use crate::data::model::ReferenceTable;
use crate::error::{CalcError, LoadError, ValidationError};

pub const DATA_UNAVAILABLE: &str = "Failed to load contaminant data. Please refresh the page.";
pub const CALCULATION_ERROR: &str = "Error while calculating QR, please fill all fields";
pub const CONTAMINANT_NOT_FOUND: &str =
    "ERROR: Contaminant not found, or Contaminant does not have a RfD value";

// ---------------------------------------------------------------------------
// Calculation attempt
// ---------------------------------------------------------------------------

/// Where the last calculation attempt ended.
///
/// An attempt runs `Idle → Validating → Rejected` or
/// `Idle → Validating → Computing → Succeeded | Failed` in one call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Validating,
    Computing,
    Rejected,
    Succeeded,
    Failed,
}

#[derive(Debug, Clone, PartialEq)]
pub enum CalculationOutcome {
    /// Input failed validation; nothing was computed.
    Rejected(FieldErrors),
    Succeeded(Assessment),
    Failed(CalcError),
}

impl CalculationOutcome {
    pub fn is_error(&self) -> bool {
        !matches!(self, CalculationOutcome::Succeeded(_))
    }

    /// Result line shown beneath the form.
    pub fn message(&self) -> String {
        match self {
            CalculationOutcome::Succeeded(a) => a.level.to_string(),
            _ => CALCULATION_ERROR.to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// Calculator state
// ---------------------------------------------------------------------------

/// The full calculator session, independent of rendering.
pub struct CalculatorState {
    pub config: CalculatorConfig,

    /// Reference table (None until loaded, or after a failed load).
    pub table: Option<ReferenceTable>,

    /// Raw form contents.
    pub form: ExposureForm,

    /// Per-field messages from the last rejected attempt.
    pub field_errors: FieldErrors,

    /// Top-level message (data unavailable, contaminant not found, ...).
    pub global_error: Option<String>,

    /// Outcome of the last attempt.
    pub outcome: Option<CalculationOutcome>,

    pub phase: Phase,
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self::new(CalculatorConfig::default())
    }
}

impl CalculatorState {
    pub fn new(config: CalculatorConfig) -> Self {
        Self {
            config,
            table: None,
            form: ExposureForm::default(),
            field_errors: FieldErrors::new(),
            global_error: None,
            outcome: None,
            phase: Phase::Idle,
        }
    }

    /// Parse workbook bytes and install the resulting table.
    /// On failure the session has no data and reports it globally.
    pub fn load_table(&mut self, bytes: &[u8]) -> Result<(), LoadError> {
        match loader::load_with_schema(bytes, &self.config.schema) {
            Ok(table) => {
                self.set_table(table);
                Ok(())
            }
            Err(e) => {
                log::error!("Error loading reference table: {e}");
                self.table = None;
                self.global_error = Some(DATA_UNAVAILABLE.to_string());
                Err(e)
            }
        }
    }

    /// Replace the reference table; discards any previous one.
    pub fn set_table(&mut self, table: ReferenceTable) {
        log::info!("Reference table ready: {} contaminants", table.len());
        self.table = Some(table);
        self.global_error = None;
    }

    pub fn is_ready(&self) -> bool {
        self.table.is_some()
    }

    /// Set one raw field; clears that field's pending error.
    pub fn update_field(&mut self, field: Field, value: impl Into<String>) {
        self.form.set(field, value);
        self.field_errors.remove(&field);
    }

    /// Run one calculation attempt over the current form.
    pub fn calculate(&mut self) -> &CalculationOutcome {
        self.field_errors.clear();
        self.global_error = None;
        self.outcome = None;

        self.phase = Phase::Validating;
        let outcome = match validate(&self.form, &self.config.limits) {
            Err(ValidationError(errors)) => {
                log::warn!("Calculation rejected: {} invalid field(s)", errors.len());
                self.field_errors = errors.clone();
                self.phase = Phase::Rejected;
                CalculationOutcome::Rejected(errors)
            }
            Ok(input) => {
                self.phase = Phase::Computing;
                let result = match &self.table {
                    Some(table) => compute_risk_quotient(&input, table, &self.config),
                    None => Err(CalcError::DataUnavailable),
                };
                match result {
                    Ok(assessment) => {
                        log::debug!("{}: {assessment}", assessment.contaminant);
                        self.phase = Phase::Succeeded;
                        CalculationOutcome::Succeeded(assessment)
                    }
                    Err(e) => {
                        log::warn!("Calculation failed: {e}");
                        self.global_error = Some(global_message(&e));
                        self.phase = Phase::Failed;
                        CalculationOutcome::Failed(e)
                    }
                }
            }
        };

        self.outcome.insert(outcome)
    }

    /// Forget the last attempt and return to `Idle`, keeping the form.
    pub fn reset(&mut self) {
        self.field_errors.clear();
        self.global_error = None;
        self.outcome = None;
        self.phase = Phase::Idle;
    }
}

fn global_message(err: &CalcError) -> String {
    match err {
        CalcError::ReferenceNotFound(_) => CONTAMINANT_NOT_FOUND.to_string(),
        CalcError::DataUnavailable => DATA_UNAVAILABLE.to_string(),
        CalcError::InvalidParameter { .. } => err.to_string(),
    }
}
