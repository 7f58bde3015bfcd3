use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::ValidationLimits;
use crate::error::ValidationError;

pub const REQUIRED_FIELD: &str = "Please, inform";
pub const INVALID_NUMBER: &str = "Please enter a valid number";
pub const NEGATIVE_NUMBER: &str = "Please enter a positive number";

// ---------------------------------------------------------------------------
// Field – identifies one form input
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    C,
    Ir,
    Ef,
    Ed,
    Bw,
    At,
    Contaminant,
}

impl Field {
    pub const ALL: [Field; 7] = [
        Field::C,
        Field::Ir,
        Field::Ef,
        Field::Ed,
        Field::Bw,
        Field::At,
        Field::Contaminant,
    ];

    /// Short name used inside messages.
    pub fn name(self) -> &'static str {
        match self {
            Field::C => "Contaminant Concentration",
            Field::Ir => "Intake Rate",
            Field::Ef => "Exposure Frequency",
            Field::Ed => "Exposure Duration",
            Field::Bw => "Body Weight",
            Field::At => "Averaging Time",
            Field::Contaminant => "Contaminant",
        }
    }

    /// Form label, with units.
    pub fn label(self) -> &'static str {
        match self {
            Field::C => "Contaminant Concentration in Medium [mg/L or mg/kg]:",
            Field::Ir => "Intake Rate / Contact Rate with medium [L/day or kg/day]:",
            Field::Ef => "Exposure Frequency [day/year]:",
            Field::Ed => "Exposure Duration [year]:",
            Field::Bw => "Body Weight [kg]:",
            Field::At => "Averaging time [day]:",
            Field::Contaminant => "Contaminant:",
        }
    }

    /// Subject of the upper-limit message ("Intake rate must be less than 100").
    fn limit_subject(self) -> &'static str {
        match self {
            Field::C => "Concentration",
            Field::Ir => "Intake rate",
            Field::Ef => "Exposure frequency",
            Field::Ed => "Exposure duration",
            Field::Bw => "Body weight",
            Field::At => "Averaging time",
            Field::Contaminant => "Contaminant",
        }
    }

    /// Fields used as divisors; zero is rejected for these.
    fn is_divisor(self) -> bool {
        matches!(self, Field::Bw | Field::At)
    }

    fn max(self, limits: &ValidationLimits) -> Option<f64> {
        match self {
            Field::C => Some(limits.max_concentration),
            Field::Ir => Some(limits.max_intake_rate),
            Field::Ef => Some(limits.max_exposure_frequency),
            Field::Ed => Some(limits.max_exposure_duration),
            Field::Bw => Some(limits.max_body_weight),
            Field::At => Some(limits.max_averaging_time),
            Field::Contaminant => None,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Per-field failure messages, one entry per rejected field.
pub type FieldErrors = BTreeMap<Field, String>;

// ---------------------------------------------------------------------------
// ExposureForm – raw text as entered
// ---------------------------------------------------------------------------

/// Unvalidated form contents. Blank text means "not filled in".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExposureForm {
    pub c: String,
    pub ir: String,
    pub ef: String,
    pub ed: String,
    pub bw: String,
    pub at: String,
    pub contaminant: String,
}

impl ExposureForm {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::C => &self.c,
            Field::Ir => &self.ir,
            Field::Ef => &self.ef,
            Field::Ed => &self.ed,
            Field::Bw => &self.bw,
            Field::At => &self.at,
            Field::Contaminant => &self.contaminant,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::C => &mut self.c,
            Field::Ir => &mut self.ir,
            Field::Ef => &mut self.ef,
            Field::Ed => &mut self.ed,
            Field::Bw => &mut self.bw,
            Field::At => &mut self.at,
            Field::Contaminant => &mut self.contaminant,
        };
        *slot = value.into();
    }
}

// ---------------------------------------------------------------------------
// ExposureInput – validated parameters
// ---------------------------------------------------------------------------

/// A complete, in-range set of exposure parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExposureInput {
    /// C [mg/L or mg/kg]
    pub concentration: f64,
    /// IR [L/day or kg/day]
    pub intake_rate: f64,
    /// EF [day/year]
    pub exposure_frequency: f64,
    /// ED [year]
    pub exposure_duration: f64,
    /// BW [kg]
    pub body_weight: f64,
    /// AT [day]
    pub averaging_time: f64,
    pub contaminant: String,
}

/// Validate every field of `form`, collecting all failures.
///
/// Numeric fields must parse to a finite, non-negative number within
/// `limits`; body weight and averaging time must also be non-zero.
/// The contaminant name is trimmed and must be non-empty.
pub fn validate(form: &ExposureForm, limits: &ValidationLimits) -> Result<ExposureInput, ValidationError> {
    let mut errors = FieldErrors::new();

    let values = [Field::C, Field::Ir, Field::Ef, Field::Ed, Field::Bw, Field::At].map(|field| {
        match check_number(field, form.get(field), limits) {
            Ok(v) => Some(v),
            Err(msg) => {
                errors.insert(field, msg);
                None
            }
        }
    });

    let contaminant = form.contaminant.trim();
    if contaminant.is_empty() {
        errors.insert(Field::Contaminant, format!("{REQUIRED_FIELD} {}", Field::Contaminant));
    }

    match values {
        [Some(c), Some(ir), Some(ef), Some(ed), Some(bw), Some(at)] if errors.is_empty() => {
            Ok(ExposureInput {
                concentration: c,
                intake_rate: ir,
                exposure_frequency: ef,
                exposure_duration: ed,
                body_weight: bw,
                averaging_time: at,
                contaminant: contaminant.to_string(),
            })
        }
        _ => Err(ValidationError(errors)),
    }
}

fn check_number(field: Field, raw: &str, limits: &ValidationLimits) -> Result<f64, String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(format!("{REQUIRED_FIELD} {field}"));
    }

    let value = match raw.parse::<f64>() {
        Ok(v) if v.is_finite() => v,
        _ => return Err(INVALID_NUMBER.to_string()),
    };
    if value < 0.0 {
        return Err(NEGATIVE_NUMBER.to_string());
    }
    if field.is_divisor() && value == 0.0 {
        return Err(format!("{field} must be greater than zero"));
    }
    if let Some(max) = field.max(limits) {
        if value > max {
            return Err(format!("{} must be less than {max}", field.limit_subject()));
        }
    }
    Ok(value)
}
