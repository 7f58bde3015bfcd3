use std::fmt;

use serde::Serialize;

use super::formula::{estimated_intake, non_carcinogenic_risk};
use super::validation::ExposureInput;
use crate::config::CalculatorConfig;
use crate::data::model::{Lookup, ReferenceTable};
use crate::error::CalcError;

// ---------------------------------------------------------------------------
// Risk classification
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RiskLevel {
    /// Quotient at or above the threshold.
    Potential,
    Low,
}

impl RiskLevel {
    pub fn classify(quotient: f64, threshold: f64) -> Self {
        if quotient >= threshold {
            RiskLevel::Potential
        } else {
            RiskLevel::Low
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Potential => "Potential Health Risk",
            RiskLevel::Low => "Low or No Potential Health Risk",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Assessment – a successful calculation
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Assessment {
    pub contaminant: String,
    /// mg/(kg·day)
    pub intake: f64,
    /// RfD used, mg/(kg·day)
    pub reference_dose: f64,
    /// Full-precision risk quotient.
    pub quotient: f64,
    /// Quotient rounded for presentation.
    pub display_quotient: f64,
    pub level: RiskLevel,
}

impl fmt::Display for Assessment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "QR = {} ({})", self.display_quotient, self.level)
    }
}

/// Resolve the contaminant, compute intake and quotient, and classify.
///
/// A name missing from the table and a name whose dose is absent or zero
/// both fail with [`CalcError::ReferenceNotFound`].
pub fn compute_risk_quotient(
    input: &ExposureInput,
    table: &ReferenceTable,
    config: &CalculatorConfig,
) -> Result<Assessment, CalcError> {
    let reference_dose = match table.lookup(&input.contaminant) {
        Lookup::Usable(rfd) => rfd,
        Lookup::Unusable | Lookup::NotFound => {
            return Err(CalcError::ReferenceNotFound(input.contaminant.clone()));
        }
    };

    let intake = estimated_intake(
        input.concentration,
        input.intake_rate,
        input.exposure_frequency,
        input.exposure_duration,
        input.body_weight,
        input.averaging_time,
    )?;
    let quotient = non_carcinogenic_risk(intake, reference_dose)?;

    Ok(Assessment {
        contaminant: input.contaminant.clone(),
        intake,
        reference_dose,
        quotient,
        display_quotient: round_significant(quotient, config.display_precision),
        level: RiskLevel::classify(quotient, config.risk_threshold),
    })
}

/// Round to `digits` significant figures. Zero, non-finite values and
/// `digits == 0` are returned unchanged.
pub fn round_significant(value: f64, digits: u32) -> f64 {
    if value == 0.0 || !value.is_finite() || digits == 0 {
        return value;
    }
    // Scientific formatting rounds on the exact decimal expansion, and
    // parsing back gives the nearest double without a 10^n scale factor.
    format!("{:.*e}", (digits - 1) as usize, value)
        .parse()
        .unwrap_or(value)
}
