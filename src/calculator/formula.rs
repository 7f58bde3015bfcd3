use crate::error::{CalcError, ParamIssue};

// ---------------------------------------------------------------------------
// Exposure formulas
// ---------------------------------------------------------------------------

/// Estimated daily intake of a contaminant, in mg/(kg·day).
///
/// ```text
/// I = (C × IR × EF × ED) / (BW × AT)
/// ```
///
/// * `c`  – concentration in the medium [mg/L or mg/kg]
/// * `ir` – intake / contact rate [L/day or kg/day]
/// * `ef` – exposure frequency [day/year]
/// * `ed` – exposure duration [year]
/// * `bw` – body weight [kg]
/// * `at` – averaging time [day]
///
/// Every argument must be finite and non-negative; `bw` and `at` must be
/// strictly positive. The first offending argument is reported. Inputs so
/// extreme that `BW × AT` underflows or the product overflows fail as
/// `intake` rather than yielding NaN or infinity.
pub fn estimated_intake(c: f64, ir: f64, ef: f64, ed: f64, bw: f64, at: f64) -> Result<f64, CalcError> {
    for (name, value) in [("c", c), ("ir", ir), ("ef", ef), ("ed", ed), ("bw", bw), ("at", at)] {
        non_negative(name, value)?;
    }
    positive("bw", bw)?;
    positive("at", at)?;

    finite_result("intake", (c * ir * ef * ed) / (bw * at))
}

/// Non-carcinogenic risk quotient (QR), unitless: `intake / rfd`.
///
/// `intake` must be finite and non-negative; `rfd` finite and > 0.
/// A ratio that overflows (e.g. a subnormal `rfd`) fails as `quotient`.
pub fn non_carcinogenic_risk(intake: f64, rfd: f64) -> Result<f64, CalcError> {
    non_negative("intake", intake)?;
    non_negative("rfd", rfd)?;
    positive("rfd", rfd)?;

    finite_result("quotient", intake / rfd)
}

fn non_negative(name: &'static str, value: f64) -> Result<(), CalcError> {
    let issue = if !value.is_finite() {
        ParamIssue::NotFinite
    } else if value < 0.0 {
        ParamIssue::Negative
    } else {
        return Ok(());
    };
    Err(CalcError::InvalidParameter { name, issue })
}

fn finite_result(name: &'static str, value: f64) -> Result<f64, CalcError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(CalcError::InvalidParameter { name, issue: ParamIssue::NotFinite })
    }
}

// Caller has already ruled out NaN and negatives.
fn positive(name: &'static str, value: f64) -> Result<(), CalcError> {
    if value == 0.0 {
        return Err(CalcError::InvalidParameter { name, issue: ParamIssue::Zero });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const VALID: [f64; 6] = [0.01, 2.0, 350.0, 30.0, 70.0, 25550.0];
    const NAMES: [&str; 6] = ["c", "ir", "ef", "ed", "bw", "at"];

    fn intake_of(args: [f64; 6]) -> Result<f64, CalcError> {
        let [c, ir, ef, ed, bw, at] = args;
        estimated_intake(c, ir, ef, ed, bw, at)
    }

    #[test]
    fn intake_matches_formula_exactly() {
        for args in [VALID, [1.5, 0.3, 12.0, 4.0, 15.0, 1460.0], [0.0, 2.0, 350.0, 30.0, 70.0, 25550.0]] {
            let [c, ir, ef, ed, bw, at] = args;
            assert_eq!(intake_of(args).unwrap(), (c * ir * ef * ed) / (bw * at));
        }
        assert_relative_eq!(intake_of(VALID).unwrap(), 210.0 / 1_788_500.0, max_relative = 1e-12);
    }

    #[test]
    fn each_parameter_rejects_nan_infinity_and_negatives() {
        for (i, &name) in NAMES.iter().enumerate() {
            for (bad, issue) in [
                (f64::NAN, ParamIssue::NotFinite),
                (f64::INFINITY, ParamIssue::NotFinite),
                (f64::NEG_INFINITY, ParamIssue::NotFinite),
                (-1.0, ParamIssue::Negative),
            ] {
                let mut args = VALID;
                args[i] = bad;
                assert_eq!(
                    intake_of(args).unwrap_err(),
                    CalcError::InvalidParameter { name, issue },
                    "{name} = {bad}"
                );
            }
        }
    }

    #[test]
    fn zero_is_valid_except_for_divisors() {
        for (i, &name) in NAMES.iter().enumerate() {
            let mut args = VALID;
            args[i] = 0.0;
            let result = intake_of(args);
            if name == "bw" || name == "at" {
                assert_eq!(
                    result.unwrap_err(),
                    CalcError::InvalidParameter { name, issue: ParamIssue::Zero }
                );
            } else {
                assert_eq!(result.unwrap(), 0.0);
            }
        }
    }

    #[test]
    fn zero_body_weight_is_reported_as_bw() {
        let err = estimated_intake(0.01, 2.0, 350.0, 30.0, 0.0, 25550.0).unwrap_err();
        assert_eq!(err.parameter(), Some("bw"));
    }

    #[test]
    fn underflowing_divisor_does_not_yield_infinity_or_nan() {
        let not_finite = CalcError::InvalidParameter { name: "intake", issue: ParamIssue::NotFinite };
        assert_eq!(estimated_intake(1.0, 1.0, 1.0, 1.0, 1e-200, 1e-200).unwrap_err(), not_finite);
        assert_eq!(estimated_intake(0.0, 1.0, 1.0, 1.0, 1e-200, 1e-200).unwrap_err(), not_finite);
        assert_eq!(estimated_intake(1e200, 1e200, 1.0, 1.0, 1.0, 1.0).unwrap_err(), not_finite);
    }

    #[test]
    fn subnormal_reference_dose_does_not_yield_infinity() {
        assert_eq!(
            non_carcinogenic_risk(1.0, 1e-320).unwrap_err(),
            CalcError::InvalidParameter { name: "quotient", issue: ParamIssue::NotFinite }
        );
    }

    #[test]
    fn risk_is_ratio() {
        assert_relative_eq!(non_carcinogenic_risk(0.005, 0.01).unwrap(), 0.5);
        assert_relative_eq!(non_carcinogenic_risk(0.02, 0.01).unwrap(), 2.0);
        assert_eq!(non_carcinogenic_risk(0.0, 0.01).unwrap(), 0.0);
    }

    #[test]
    fn risk_rejects_unusable_reference_dose() {
        for (rfd, issue) in [
            (0.0, ParamIssue::Zero),
            (-0.1, ParamIssue::Negative),
            (f64::NAN, ParamIssue::NotFinite),
            (f64::INFINITY, ParamIssue::NotFinite),
        ] {
            assert_eq!(
                non_carcinogenic_risk(0.1, rfd).unwrap_err(),
                CalcError::InvalidParameter { name: "rfd", issue }
            );
        }
    }

    #[test]
    fn risk_rejects_bad_intake() {
        for (intake, issue) in [(-0.1, ParamIssue::Negative), (f64::NAN, ParamIssue::NotFinite)] {
            assert_eq!(
                non_carcinogenic_risk(intake, 0.01).unwrap_err(),
                CalcError::InvalidParameter { name: "intake", issue }
            );
        }
    }
}
