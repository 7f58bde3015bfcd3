use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Table schema – where the loader finds its two columns
// ---------------------------------------------------------------------------

/// Column layout of the RSL summary table (0-based indices).
///
/// Defaults match the published EPA workbook: contaminant name in column N,
/// oral reference dose (RfD_o) in column E, one header row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableSchema {
    pub name_column: usize,
    pub reference_column: usize,
    pub header_rows: usize,
}

impl TableSchema {
    pub const NAME_COLUMN: usize = 13;
    pub const REFERENCE_COLUMN: usize = 4;
}

impl Default for TableSchema {
    fn default() -> Self {
        Self {
            name_column: Self::NAME_COLUMN,
            reference_column: Self::REFERENCE_COLUMN,
            header_rows: 1,
        }
    }
}

// ---------------------------------------------------------------------------
// Validation limits – inclusive upper bound per exposure field
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationLimits {
    /// mg/L or mg/kg
    pub max_concentration: f64,
    /// L/day or kg/day
    pub max_intake_rate: f64,
    /// day/year
    pub max_exposure_frequency: f64,
    /// year
    pub max_exposure_duration: f64,
    /// kg
    pub max_body_weight: f64,
    /// day (~100 years)
    pub max_averaging_time: f64,
}

impl Default for ValidationLimits {
    fn default() -> Self {
        Self {
            max_concentration: 10_000.0,
            max_intake_rate: 100.0,
            max_exposure_frequency: 365.0,
            max_exposure_duration: 100.0,
            max_body_weight: 500.0,
            max_averaging_time: 36_500.0,
        }
    }
}

// ---------------------------------------------------------------------------
// CalculatorConfig
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorConfig {
    pub schema: TableSchema,
    pub limits: ValidationLimits,
    /// Quotients at or above this value are a potential health risk.
    pub risk_threshold: f64,
    /// Significant figures used when presenting the quotient.
    pub display_precision: u32,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            schema: TableSchema::default(),
            limits: ValidationLimits::default(),
            risk_threshold: 1.0,
            display_precision: 3,
        }
    }
}

impl CalculatorConfig {
    /// Parse a JSON document; absent keys keep their defaults.
    pub fn from_json_str(text: &str) -> Result<Self> {
        serde_json::from_str(text).context("parsing calculator config JSON")
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        Self::from_json_str(&text)
    }
}
