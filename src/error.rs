use std::fmt;

use thiserror::Error;

use crate::calculator::validation::FieldErrors;

// ---------------------------------------------------------------------------
// Loading
// ---------------------------------------------------------------------------

/// Why the reference table could not be built. Fatal for the session:
/// the calculator reports its data as unavailable.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("not a readable workbook: {0}")]
    Workbook(#[from] calamine::Error),

    #[error("not a readable CSV table: {0}")]
    Csv(#[from] csv::Error),

    #[error("workbook contains no worksheets")]
    NoWorksheets,

    #[error("first worksheet '{0}' is empty")]
    EmptyWorksheet(String),
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// One or more form fields are missing or out of range.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{} field(s) failed validation", .0.len())]
pub struct ValidationError(pub FieldErrors);

// ---------------------------------------------------------------------------
// Calculation
// ---------------------------------------------------------------------------

/// What was wrong with a numeric argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamIssue {
    NotFinite,
    Negative,
    /// Zero where a strictly positive divisor is required.
    Zero,
}

impl fmt::Display for ParamIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamIssue::NotFinite => write!(f, "must be a valid number"),
            ParamIssue::Negative => write!(f, "must be non-negative"),
            ParamIssue::Zero => write!(f, "must be greater than zero"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalcError {
    /// Selected contaminant is unknown or has no usable reference dose.
    #[error("contaminant '{0}' not found, or it does not have an RfD value")]
    ReferenceNotFound(String),

    /// An argument to one of the formulas is out of its domain.
    #[error("invalid parameter {name}: {issue}")]
    InvalidParameter { name: &'static str, issue: ParamIssue },

    /// A calculation was requested before any table was loaded.
    #[error("contaminant data unavailable")]
    DataUnavailable,
}

impl CalcError {
    /// Name of the offending argument, for `InvalidParameter`.
    pub fn parameter(&self) -> Option<&'static str> {
        match self {
            CalcError::InvalidParameter { name, .. } => Some(name),
            _ => None,
        }
    }
}
