/// Risk calculator: validation, exposure formulas, and classification.
///
/// ```text
///  ExposureForm ──validate──▶ ExposureInput ─┐
///                                            ├─▶ compute_risk_quotient ─▶ Assessment
///                          ReferenceTable ───┘      (lookup → intake → QR → level)
/// ```

pub mod assessment;
pub mod formula;
pub mod validation;
